use crate::assessments::environment::domain::{EnvironmentalSubmission, LaunchVehicle};
use crate::assessments::mission::DeorbitStrategy;

/// Baseline declaration: one 500 kg spacecraft on a dedicated Falcon 9
/// flight, five years of operations from two ground stations.
pub(super) fn falcon_declaration() -> EnvironmentalSubmission {
    EnvironmentalSubmission {
        launch_vehicle: LaunchVehicle::Falcon9,
        spacecraft_mass_kg: 500.0,
        satellite_count: 1,
        mission_duration_years: 5.0,
        ground_station_count: 2,
        deorbit_strategy: DeorbitStrategy::ControlledDeorbit,
        is_small_enterprise: false,
        launch_mass_fraction: None,
    }
}
