use crate::assessments::debris::domain::{DebrisSubmission, Maneuverability, OperatorType};
use crate::assessments::mission::{ActivityType, DeorbitStrategy, OrbitRegime};
use crate::engine::{RequirementStatus, StatusLedger, StatusRecord};

/// A compliant single-spacecraft LEO operation used as the baseline fixture.
pub(super) fn leo_submission() -> DebrisSubmission {
    DebrisSubmission {
        activity_type: ActivityType::SpacecraftOperation,
        operator_type: OperatorType::Commercial,
        orbit_regime: OrbitRegime::Leo,
        perigee_altitude_km: 520.0,
        apogee_altitude_km: 550.0,
        satellite_count: 1,
        maneuverability: Maneuverability::Full,
        has_propulsion: true,
        deorbit_strategy: DeorbitStrategy::ControlledDeorbit,
        mission_duration_years: 5.0,
        spacecraft_mass_kg: 260.0,
        is_small_enterprise: false,
        transponder_fitted: Some(true),
    }
}

pub(super) fn geo_submission() -> DebrisSubmission {
    DebrisSubmission {
        orbit_regime: OrbitRegime::Geo,
        perigee_altitude_km: 35_780.0,
        apogee_altitude_km: 35_795.0,
        deorbit_strategy: DeorbitStrategy::GraveyardOrbit,
        mission_duration_years: 15.0,
        spacecraft_mass_kg: 3_400.0,
        ..leo_submission()
    }
}

pub(super) fn mega_constellation_submission() -> DebrisSubmission {
    DebrisSubmission {
        satellite_count: 150,
        spacecraft_mass_kg: 280.0,
        ..leo_submission()
    }
}

pub(super) fn ledger_with(entries: &[(&str, RequirementStatus)]) -> StatusLedger {
    entries
        .iter()
        .map(|(id, status)| (id.to_string(), StatusRecord::new(*status)))
        .collect()
}
