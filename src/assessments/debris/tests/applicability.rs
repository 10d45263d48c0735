use super::common::*;
use crate::assessments::debris::assess;
use crate::engine::StatusLedger;

#[test]
fn leo_single_spacecraft_gets_operation_requirements_not_geo_rules() {
    let assessment = assess(leo_submission(), &StatusLedger::new()).expect("valid profile");
    let evaluation = &assessment.evaluation;

    assert!(evaluation.is_applicable("DEB-01"), "mitigation plan applies");
    assert!(evaluation.is_applicable("DEB-02"), "LEO disposal applies");
    assert!(evaluation.is_applicable("DEB-04"), "maneuverable craft must avoid collisions");
    assert!(evaluation.is_applicable("DEB-05"), "conjunction data applies");
    assert!(
        !evaluation.is_applicable("DEB-03"),
        "GEO graveyard rule must not apply to a LEO mission"
    );
    assert!(
        !evaluation.is_applicable("DEB-06"),
        "single spacecraft is below the constellation coordination tier"
    );
}

#[test]
fn geo_mission_swaps_disposal_requirements() {
    let assessment = assess(geo_submission(), &StatusLedger::new()).expect("valid profile");
    let evaluation = &assessment.evaluation;

    assert!(evaluation.is_applicable("DEB-03"), "graveyard re-orbit applies in GEO");
    assert!(
        !evaluation.is_applicable("DEB-02"),
        "the 25-year LEO clearance rule must not apply in GEO"
    );
}

#[test]
fn mega_constellation_triggers_fleet_rules() {
    let assessment =
        assess(mega_constellation_submission(), &StatusLedger::new()).expect("valid profile");
    let evaluation = &assessment.evaluation;

    assert!(evaluation.is_applicable("DEB-06"), "coordination plan applies at tier mega");
    assert!(evaluation.is_applicable("DEB-07"), "ephemeris sharing applies at tier mega");

    let single = assess(leo_submission(), &StatusLedger::new()).expect("valid profile");
    assert!(!single.evaluation.is_applicable("DEB-06"));
    assert!(!single.evaluation.is_applicable("DEB-07"));
}

#[test]
fn non_maneuverable_craft_skips_manoeuvre_procedures() {
    let mut submission = leo_submission();
    submission.maneuverability = crate::assessments::debris::Maneuverability::None;
    let assessment = assess(submission, &StatusLedger::new()).expect("valid profile");

    assert!(!assessment.evaluation.is_applicable("DEB-04"));
    assert!(
        assessment.evaluation.is_applicable("DEB-05"),
        "conjunction data is still required without manoeuvre capability"
    );
}

#[test]
fn missing_transponder_answer_excludes_rule_with_one_warning() {
    let mut submission = leo_submission();
    submission.transponder_fitted = None;
    let assessment = assess(submission, &StatusLedger::new()).expect("valid profile");
    let evaluation = &assessment.evaluation;

    assert!(!evaluation.is_applicable("DEB-14"));
    let warnings: Vec<_> = evaluation
        .warnings
        .iter()
        .filter(|warning| warning.rule_id == "DEB-14")
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].missing_fact, "transponder_fitted");
}

#[test]
fn fitted_transponder_resolves_the_rule_as_inapplicable_without_warning() {
    let assessment = assess(leo_submission(), &StatusLedger::new()).expect("valid profile");
    let evaluation = &assessment.evaluation;

    assert!(!evaluation.is_applicable("DEB-14"));
    assert!(evaluation.warnings.is_empty());
}

#[test]
fn light_regime_needs_both_enterprise_size_and_fleet_size() {
    let mut submission = leo_submission();
    submission.is_small_enterprise = true;
    let assessment = assess(submission, &StatusLedger::new()).expect("valid profile");
    assert!(assessment.evaluation.is_applicable("DEB-13"));

    let mut submission = mega_constellation_submission();
    submission.is_small_enterprise = true;
    let assessment = assess(submission, &StatusLedger::new()).expect("valid profile");
    assert!(
        !assessment.evaluation.is_applicable("DEB-13"),
        "a mega constellation never qualifies for the light regime"
    );
}

#[test]
fn applicable_set_is_deterministic_and_catalog_ordered() {
    let first = assess(leo_submission(), &StatusLedger::new()).expect("valid profile");
    let second = assess(leo_submission(), &StatusLedger::new()).expect("valid profile");

    let ids = |assessment: &crate::assessments::debris::DebrisAssessment| {
        assessment
            .evaluation
            .findings
            .iter()
            .map(|finding| finding.rule.id)
            .collect::<Vec<_>>()
    };

    assert_eq!(ids(&first), ids(&second));

    let mut sorted = ids(&first);
    let catalog_order: Vec<_> = crate::assessments::debris::catalog()
        .rules()
        .iter()
        .map(|rule| rule.id)
        .filter(|id| first.evaluation.is_applicable(id))
        .collect();
    sorted.retain(|id| catalog_order.contains(id));
    assert_eq!(sorted, catalog_order);
}
