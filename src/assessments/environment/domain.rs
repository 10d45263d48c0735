use serde::{Deserialize, Serialize};

use super::super::mission::{ConstellationTier, DeorbitStrategy};
use crate::engine::{FactKind, FactSet};

/// Launch vehicles with reference emission factors in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchVehicle {
    Falcon9,
    Ariane6,
    VegaC,
    Electron,
    Soyuz,
}

impl LaunchVehicle {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Falcon9 => "falcon_9",
            Self::Ariane6 => "ariane_6",
            Self::VegaC => "vega_c",
            Self::Electron => "electron",
            Self::Soyuz => "soyuz",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Falcon9 => "Falcon 9",
            Self::Ariane6 => "Ariane 6",
            Self::VegaC => "Vega-C",
            Self::Electron => "Electron",
            Self::Soyuz => "Soyuz",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropellantType {
    Kerolox,
    Hydrolox,
    Solid,
    Hypergolic,
    Methalox,
}

impl PropellantType {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Kerolox => "kerolox",
            Self::Hydrolox => "hydrolox",
            Self::Solid => "solid",
            Self::Hypergolic => "hypergolic",
            Self::Methalox => "methalox",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Kerolox => "Kerosene / Liquid Oxygen",
            Self::Hydrolox => "Hydrogen / Liquid Oxygen",
            Self::Solid => "Solid Propellant",
            Self::Hypergolic => "Hypergolic Propellant",
            Self::Methalox => "Methane / Liquid Oxygen",
        }
    }
}

/// Lifecycle phases of the environmental footprint declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    RawMaterials,
    Manufacturing,
    Transport,
    Launch,
    Operations,
    EndOfLife,
}

impl LifecyclePhase {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::RawMaterials,
            Self::Manufacturing,
            Self::Transport,
            Self::Launch,
            Self::Operations,
            Self::EndOfLife,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RawMaterials => "Raw Material Extraction",
            Self::Manufacturing => "Manufacturing & Integration",
            Self::Transport => "Transport to Launch Site",
            Self::Launch => "Launch Campaign",
            Self::Operations => "Operations & Ground Segment",
            Self::EndOfLife => "End of Life",
        }
    }
}

/// Grade letter derived from total global-warming potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FootprintGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl FootprintGrade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

/// Profile attributes the environmental catalog's predicates may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EnvFact {
    LaunchVehicle,
    Propellant,
    SpacecraftMassKg,
    SatelliteCount,
    ConstellationTier,
    MissionDurationYears,
    GroundStationCount,
    DeorbitStrategy,
    SmallEnterprise,
}

impl FactKind for EnvFact {
    fn label(self) -> &'static str {
        match self {
            Self::LaunchVehicle => "launch_vehicle",
            Self::Propellant => "propellant",
            Self::SpacecraftMassKg => "spacecraft_mass_kg",
            Self::SatelliteCount => "satellite_count",
            Self::ConstellationTier => "constellation_tier",
            Self::MissionDurationYears => "mission_duration_years",
            Self::GroundStationCount => "ground_station_count",
            Self::DeorbitStrategy => "deorbit_strategy",
            Self::SmallEnterprise => "small_enterprise",
        }
    }
}

/// Raw environmental declaration input from the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnvironmentalSubmission {
    pub launch_vehicle: LaunchVehicle,
    pub spacecraft_mass_kg: f64,
    pub satellite_count: u32,
    pub mission_duration_years: f64,
    pub ground_station_count: u32,
    pub deorbit_strategy: DeorbitStrategy,
    #[serde(default)]
    pub is_small_enterprise: bool,
    /// Share of the launch attributed to this mission on a rideshare.
    /// Absent means a dedicated launch (full attribution).
    #[serde(default)]
    pub launch_mass_fraction: Option<f64>,
}

/// Canonical environmental profile after validation and derivation.
#[derive(Debug, Clone)]
pub struct EnvironmentalProfile {
    pub launch_vehicle: LaunchVehicle,
    pub propellant: PropellantType,
    pub spacecraft_mass_kg: f64,
    pub satellite_count: u32,
    pub constellation_tier: ConstellationTier,
    pub mission_duration_years: f64,
    pub ground_station_count: u32,
    pub deorbit_strategy: DeorbitStrategy,
    pub is_small_enterprise: bool,
    pub launch_mass_fraction: f64,
    pub facts: FactSet<EnvFact>,
}
