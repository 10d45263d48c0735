use super::super::mission::ConstellationTier;
use super::catalog::vehicle_factors;
use super::domain::{EnvFact, EnvironmentalProfile, EnvironmentalSubmission};
use crate::engine::profile::{require_count_at_least, require_fraction, require_positive};
use crate::engine::{FactSet, FactValue, InvalidProfileError};

/// Validate a raw declaration and derive the canonical environmental profile.
pub fn normalize(
    submission: EnvironmentalSubmission,
) -> Result<EnvironmentalProfile, InvalidProfileError> {
    let satellite_count = require_count_at_least("satellite_count", submission.satellite_count, 1)?;
    let spacecraft_mass_kg = require_positive("spacecraft_mass_kg", submission.spacecraft_mass_kg)?;
    let mission_duration_years =
        require_positive("mission_duration_years", submission.mission_duration_years)?;

    let launch_mass_fraction = match submission.launch_mass_fraction {
        Some(fraction) => require_fraction("launch_mass_fraction", fraction)?,
        None => 1.0,
    };

    let constellation_tier = ConstellationTier::from_count(satellite_count);
    let propellant = vehicle_factors(submission.launch_vehicle).propellant;

    let mut facts = FactSet::new();
    facts.insert(
        EnvFact::LaunchVehicle,
        FactValue::Tag(submission.launch_vehicle.key()),
    );
    facts.insert(EnvFact::Propellant, FactValue::Tag(propellant.key()));
    facts.insert(
        EnvFact::SpacecraftMassKg,
        FactValue::Decimal(spacecraft_mass_kg),
    );
    facts.insert(EnvFact::SatelliteCount, FactValue::Count(satellite_count));
    facts.insert(
        EnvFact::ConstellationTier,
        FactValue::Tag(constellation_tier.key()),
    );
    facts.insert(
        EnvFact::MissionDurationYears,
        FactValue::Decimal(mission_duration_years),
    );
    facts.insert(
        EnvFact::GroundStationCount,
        FactValue::Count(submission.ground_station_count),
    );
    facts.insert(
        EnvFact::DeorbitStrategy,
        FactValue::Tag(submission.deorbit_strategy.key()),
    );
    facts.insert(
        EnvFact::SmallEnterprise,
        FactValue::Flag(submission.is_small_enterprise),
    );

    Ok(EnvironmentalProfile {
        launch_vehicle: submission.launch_vehicle,
        propellant,
        spacecraft_mass_kg,
        satellite_count,
        constellation_tier,
        mission_duration_years,
        ground_station_count: submission.ground_station_count,
        deorbit_strategy: submission.deorbit_strategy,
        is_small_enterprise: submission.is_small_enterprise,
        launch_mass_fraction,
        facts,
    })
}
