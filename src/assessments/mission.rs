use serde::{Deserialize, Serialize};

/// Orbit regime buckets used by applicability predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitRegime {
    Leo,
    Meo,
    Geo,
    Heo,
}

impl OrbitRegime {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Leo => "leo",
            Self::Meo => "meo",
            Self::Geo => "geo",
            Self::Heo => "heo",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Leo => "Low Earth Orbit",
            Self::Meo => "Medium Earth Orbit",
            Self::Geo => "Geostationary Orbit",
            Self::Heo => "Highly Elliptical Orbit",
        }
    }
}

/// Licensed activity classes recognized across the regulatory catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    SpacecraftOperation,
    LaunchService,
    InOrbitServices,
    ReentryOperation,
}

impl ActivityType {
    pub const fn key(self) -> &'static str {
        match self {
            Self::SpacecraftOperation => "spacecraft_operation",
            Self::LaunchService => "launch_service",
            Self::InOrbitServices => "in_orbit_services",
            Self::ReentryOperation => "reentry_operation",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SpacecraftOperation => "Spacecraft Operation",
            Self::LaunchService => "Launch Service",
            Self::InOrbitServices => "In-Orbit Services",
            Self::ReentryOperation => "Re-entry Operation",
        }
    }
}

/// Planned end-of-life handling for the space segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeorbitStrategy {
    ControlledDeorbit,
    NaturalDecay,
    GraveyardOrbit,
    None,
}

impl DeorbitStrategy {
    pub const fn key(self) -> &'static str {
        match self {
            Self::ControlledDeorbit => "controlled_deorbit",
            Self::NaturalDecay => "natural_decay",
            Self::GraveyardOrbit => "graveyard_orbit",
            Self::None => "none",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ControlledDeorbit => "Controlled Deorbit",
            Self::NaturalDecay => "Natural Decay",
            Self::GraveyardOrbit => "Graveyard Orbit",
            Self::None => "No Disposal Planned",
        }
    }
}

/// Inclusive lower bounds for each constellation tier above `Single`.
/// The single authoritative threshold table; both the debris and the
/// environmental normalizer derive tiers from it.
#[derive(Debug, Clone, Copy)]
pub struct TierThresholds {
    pub small_min: u32,
    pub medium_min: u32,
    pub large_min: u32,
    pub mega_min: u32,
}

pub const CONSTELLATION_TIERS: TierThresholds = TierThresholds {
    small_min: 2,
    medium_min: 10,
    large_min: 50,
    mega_min: 100,
};

/// Fleet-size bucket derived from satellite count during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstellationTier {
    Single,
    Small,
    Medium,
    Large,
    Mega,
}

impl ConstellationTier {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Single,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::Mega,
        ]
    }

    /// Callers validate `count >= 1` before derivation.
    pub fn from_count(count: u32) -> Self {
        let tiers = CONSTELLATION_TIERS;
        if count >= tiers.mega_min {
            Self::Mega
        } else if count >= tiers.large_min {
            Self::Large
        } else if count >= tiers.medium_min {
            Self::Medium
        } else if count >= tiers.small_min {
            Self::Small
        } else {
            Self::Single
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Mega => "mega",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single Spacecraft",
            Self::Small => "Small Constellation",
            Self::Medium => "Medium Constellation",
            Self::Large => "Large Constellation",
            Self::Mega => "Mega Constellation",
        }
    }
}
