use chrono::NaiveDate;
use serde_json::json;

use super::{evaluate, AssessmentDomain, AssessmentError, AssessmentReport};
use crate::engine::StatusLedger;

fn generated_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date")
}

fn debris_payload() -> serde_json::Value {
    json!({
        "activity_type": "spacecraft_operation",
        "operator_type": "commercial",
        "orbit_regime": "leo",
        "perigee_altitude_km": 520.0,
        "apogee_altitude_km": 550.0,
        "satellite_count": 1,
        "maneuverability": "full",
        "has_propulsion": true,
        "deorbit_strategy": "controlled_deorbit",
        "mission_duration_years": 5.0,
        "spacecraft_mass_kg": 260.0,
        "transponder_fitted": true
    })
}

#[test]
fn dispatch_routes_raw_profiles_to_the_named_domain() {
    let report = evaluate(
        AssessmentDomain::Debris,
        debris_payload(),
        &StatusLedger::new(),
        generated_on(),
    )
    .expect("valid payload evaluates");

    match report {
        AssessmentReport::Debris(report) => {
            assert!(!report.sections.is_empty());
            assert_eq!(report.score, 0);
        }
        other => panic!("expected a debris report, got {other:?}"),
    }
}

#[test]
fn reports_serialize_with_a_domain_tag() {
    let report = evaluate(
        AssessmentDomain::Debris,
        debris_payload(),
        &StatusLedger::new(),
        generated_on(),
    )
    .expect("valid payload evaluates");

    let json = serde_json::to_value(&report).expect("serializes");
    assert_eq!(json["domain"], "debris");
    assert_eq!(json["catalog_version"], "2026.1");
}

#[test]
fn malformed_payload_surfaces_as_payload_error() {
    let result = evaluate(
        AssessmentDomain::Environment,
        json!({ "launch_vehicle": "starhopper" }),
        &StatusLedger::new(),
        generated_on(),
    );

    match result {
        Err(AssessmentError::Payload(_)) => {}
        other => panic!("expected payload error, got {other:?}"),
    }
}

#[test]
fn invalid_profile_surfaces_as_profile_error() {
    let mut payload = debris_payload();
    payload["satellite_count"] = json!(0);

    let result = evaluate(
        AssessmentDomain::Debris,
        payload,
        &StatusLedger::new(),
        generated_on(),
    );

    match result {
        Err(AssessmentError::Profile(err)) => {
            assert!(err.to_string().contains("satellite_count"));
        }
        other => panic!("expected profile error, got {other:?}"),
    }
}
