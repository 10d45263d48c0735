use serde::{Deserialize, Serialize};

use super::super::mission::{ActivityType, ConstellationTier, DeorbitStrategy, OrbitRegime};
use crate::engine::{FactKind, FactSet};

/// Collision-avoidance manoeuvre capability of the spacecraft bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Maneuverability {
    None,
    Limited,
    Full,
}

impl Maneuverability {
    pub const fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Limited => "limited",
            Self::Full => "full",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Not Maneuverable",
            Self::Limited => "Limited Maneuverability",
            Self::Full => "Fully Maneuverable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorType {
    Commercial,
    Governmental,
    Academic,
}

impl OperatorType {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
            Self::Governmental => "governmental",
            Self::Academic => "academic",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Commercial => "Commercial Operator",
            Self::Governmental => "Governmental Operator",
            Self::Academic => "Academic / Research Operator",
        }
    }
}

/// Profile attributes the debris catalog's predicates may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebrisFact {
    ActivityType,
    OrbitRegime,
    ConstellationTier,
    SatelliteCount,
    Maneuverability,
    Propulsion,
    DeorbitStrategy,
    MissionDurationYears,
    SpacecraftMassKg,
    PerigeeAltitudeKm,
    OperatorType,
    SmallEnterprise,
    TransponderFitted,
}

impl FactKind for DebrisFact {
    fn label(self) -> &'static str {
        match self {
            Self::ActivityType => "activity_type",
            Self::OrbitRegime => "orbit_regime",
            Self::ConstellationTier => "constellation_tier",
            Self::SatelliteCount => "satellite_count",
            Self::Maneuverability => "maneuverability",
            Self::Propulsion => "propulsion",
            Self::DeorbitStrategy => "deorbit_strategy",
            Self::MissionDurationYears => "mission_duration_years",
            Self::SpacecraftMassKg => "spacecraft_mass_kg",
            Self::PerigeeAltitudeKm => "perigee_altitude_km",
            Self::OperatorType => "operator_type",
            Self::SmallEnterprise => "small_enterprise",
            Self::TransponderFitted => "transponder_fitted",
        }
    }
}

/// Raw mission description as submitted by the caller. Validated and
/// enriched by the normalizer before any catalog evaluation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DebrisSubmission {
    pub activity_type: ActivityType,
    pub operator_type: OperatorType,
    pub orbit_regime: OrbitRegime,
    pub perigee_altitude_km: f64,
    pub apogee_altitude_km: f64,
    pub satellite_count: u32,
    pub maneuverability: Maneuverability,
    pub has_propulsion: bool,
    pub deorbit_strategy: DeorbitStrategy,
    pub mission_duration_years: f64,
    pub spacecraft_mass_kg: f64,
    #[serde(default)]
    pub is_small_enterprise: bool,
    /// Whether a tracking transponder or retroreflector is fitted. Optional;
    /// predicates that need it fall back to fail-safe exclusion when absent.
    #[serde(default)]
    pub transponder_fitted: Option<bool>,
}

/// Canonical mission profile: the validated submission plus derived
/// classifications, frozen for the duration of one evaluation.
#[derive(Debug, Clone)]
pub struct MissionProfile {
    pub activity_type: ActivityType,
    pub operator_type: OperatorType,
    pub orbit_regime: OrbitRegime,
    pub perigee_altitude_km: f64,
    pub apogee_altitude_km: f64,
    pub satellite_count: u32,
    pub constellation_tier: ConstellationTier,
    pub maneuverability: Maneuverability,
    pub has_propulsion: bool,
    pub deorbit_strategy: DeorbitStrategy,
    pub mission_duration_years: f64,
    pub spacecraft_mass_kg: f64,
    pub is_small_enterprise: bool,
    pub transponder_fitted: Option<bool>,
    pub facts: FactSet<DebrisFact>,
}
