use crate::assessments::jurisdiction::domain::{Country, EntityType, OperatorSubmission};
use crate::assessments::mission::{ActivityType, OrbitRegime};

/// Baseline fixture: a mid-sized French commercial operator flying a small
/// LEO fleet with the launch already booked from Kourou.
pub(super) fn french_operator() -> OperatorSubmission {
    OperatorSubmission {
        established_in: Country::France,
        entity_type: EntityType::Commercial,
        activity_type: ActivityType::SpacecraftOperation,
        orbit_regime: OrbitRegime::Leo,
        satellite_count: 4,
        offers_eu_services: true,
        launch_country: Some(Country::France),
        employee_count: 120,
        annual_turnover_meur: 30.0,
    }
}

pub(super) fn us_operator_serving_eu() -> OperatorSubmission {
    OperatorSubmission {
        established_in: Country::UnitedStates,
        launch_country: Some(Country::UnitedStates),
        ..french_operator()
    }
}
