use super::super::mission::ConstellationTier;
use super::domain::{DebrisFact, DebrisSubmission, MissionProfile};
use crate::engine::profile::{require_count_at_least, require_positive};
use crate::engine::{FactSet, FactValue, InvalidProfileError};

/// Validate a raw submission and derive the canonical mission profile.
///
/// Pure transformation: field checks, tier derivation, and a one-time fact
/// set build. Optional attributes left unanswered are simply absent from the
/// fact set; the filter excludes rules that need them and warns.
pub fn normalize(submission: DebrisSubmission) -> Result<MissionProfile, InvalidProfileError> {
    let satellite_count = require_count_at_least("satellite_count", submission.satellite_count, 1)?;
    let spacecraft_mass_kg = require_positive("spacecraft_mass_kg", submission.spacecraft_mass_kg)?;
    let mission_duration_years =
        require_positive("mission_duration_years", submission.mission_duration_years)?;
    let perigee_altitude_km = require_positive("perigee_altitude_km", submission.perigee_altitude_km)?;
    let apogee_altitude_km = require_positive("apogee_altitude_km", submission.apogee_altitude_km)?;

    if perigee_altitude_km > apogee_altitude_km {
        return Err(InvalidProfileError::OrbitGeometry {
            perigee_km: perigee_altitude_km,
            apogee_km: apogee_altitude_km,
        });
    }

    let constellation_tier = ConstellationTier::from_count(satellite_count);

    let mut facts = FactSet::new();
    facts.insert(
        DebrisFact::ActivityType,
        FactValue::Tag(submission.activity_type.key()),
    );
    facts.insert(
        DebrisFact::OrbitRegime,
        FactValue::Tag(submission.orbit_regime.key()),
    );
    facts.insert(
        DebrisFact::ConstellationTier,
        FactValue::Tag(constellation_tier.key()),
    );
    facts.insert(DebrisFact::SatelliteCount, FactValue::Count(satellite_count));
    facts.insert(
        DebrisFact::Maneuverability,
        FactValue::Tag(submission.maneuverability.key()),
    );
    facts.insert(
        DebrisFact::Propulsion,
        FactValue::Flag(submission.has_propulsion),
    );
    facts.insert(
        DebrisFact::DeorbitStrategy,
        FactValue::Tag(submission.deorbit_strategy.key()),
    );
    facts.insert(
        DebrisFact::MissionDurationYears,
        FactValue::Decimal(mission_duration_years),
    );
    facts.insert(
        DebrisFact::SpacecraftMassKg,
        FactValue::Decimal(spacecraft_mass_kg),
    );
    facts.insert(
        DebrisFact::PerigeeAltitudeKm,
        FactValue::Decimal(perigee_altitude_km),
    );
    facts.insert(
        DebrisFact::OperatorType,
        FactValue::Tag(submission.operator_type.key()),
    );
    facts.insert(
        DebrisFact::SmallEnterprise,
        FactValue::Flag(submission.is_small_enterprise),
    );
    if let Some(fitted) = submission.transponder_fitted {
        facts.insert(DebrisFact::TransponderFitted, FactValue::Flag(fitted));
    }

    Ok(MissionProfile {
        activity_type: submission.activity_type,
        operator_type: submission.operator_type,
        orbit_regime: submission.orbit_regime,
        perigee_altitude_km,
        apogee_altitude_km,
        satellite_count,
        constellation_tier,
        maneuverability: submission.maneuverability,
        has_propulsion: submission.has_propulsion,
        deorbit_strategy: submission.deorbit_strategy,
        mission_duration_years,
        spacecraft_mass_kg,
        is_small_enterprise: submission.is_small_enterprise,
        transponder_fitted: submission.transponder_fitted,
        facts,
    })
}
