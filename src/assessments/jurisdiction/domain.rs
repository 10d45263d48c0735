use serde::{Deserialize, Serialize};

use super::super::mission::{ActivityType, OrbitRegime};
use crate::engine::{FactKind, FactSet};

/// Countries of establishment recognized by the applicability catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    France,
    Germany,
    Austria,
    Belgium,
    Netherlands,
    Finland,
    Luxembourg,
    UnitedKingdom,
    UnitedStates,
    Other,
}

impl Country {
    pub const fn key(self) -> &'static str {
        match self {
            Self::France => "france",
            Self::Germany => "germany",
            Self::Austria => "austria",
            Self::Belgium => "belgium",
            Self::Netherlands => "netherlands",
            Self::Finland => "finland",
            Self::Luxembourg => "luxembourg",
            Self::UnitedKingdom => "united_kingdom",
            Self::UnitedStates => "united_states",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::France => "France",
            Self::Germany => "Germany",
            Self::Austria => "Austria",
            Self::Belgium => "Belgium",
            Self::Netherlands => "Netherlands",
            Self::Finland => "Finland",
            Self::Luxembourg => "Luxembourg",
            Self::UnitedKingdom => "United Kingdom",
            Self::UnitedStates => "United States",
            Self::Other => "Other",
        }
    }

    pub const fn is_eu_member(self) -> bool {
        matches!(
            self,
            Self::France
                | Self::Germany
                | Self::Austria
                | Self::Belgium
                | Self::Netherlands
                | Self::Finland
                | Self::Luxembourg
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Commercial,
    Governmental,
    Academic,
}

impl EntityType {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
            Self::Governmental => "governmental",
            Self::Academic => "academic",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Commercial => "Commercial Entity",
            Self::Governmental => "Governmental Entity",
            Self::Academic => "Academic / Research Entity",
        }
    }
}

/// Employee headcount ceilings (exclusive) and annual turnover ceilings
/// (inclusive, in million euro) per size class, following the EU SME
/// definition in Recommendation 2003/361.
pub const MICRO_MAX_EMPLOYEES: u32 = 10;
pub const MICRO_MAX_TURNOVER_MEUR: f64 = 2.0;
pub const SMALL_MAX_EMPLOYEES: u32 = 50;
pub const SMALL_MAX_TURNOVER_MEUR: f64 = 10.0;
pub const MEDIUM_MAX_EMPLOYEES: u32 = 250;
pub const MEDIUM_MAX_TURNOVER_MEUR: f64 = 50.0;

/// Enterprise size class derived during normalization; drives the NIS2
/// size-cap exemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnterpriseSize {
    Micro,
    Small,
    Medium,
    Large,
}

impl EnterpriseSize {
    pub fn from_metrics(employee_count: u32, annual_turnover_meur: f64) -> Self {
        if employee_count < MICRO_MAX_EMPLOYEES && annual_turnover_meur <= MICRO_MAX_TURNOVER_MEUR {
            Self::Micro
        } else if employee_count < SMALL_MAX_EMPLOYEES
            && annual_turnover_meur <= SMALL_MAX_TURNOVER_MEUR
        {
            Self::Small
        } else if employee_count < MEDIUM_MAX_EMPLOYEES
            && annual_turnover_meur <= MEDIUM_MAX_TURNOVER_MEUR
        {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Micro => "Micro Enterprise",
            Self::Small => "Small Enterprise",
            Self::Medium => "Medium Enterprise",
            Self::Large => "Large Enterprise",
        }
    }
}

/// Profile attributes the jurisdiction catalog's predicates may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JurisdictionFact {
    EstablishedIn,
    EuEstablished,
    /// Established in the EU or offering services into the EU market.
    /// Derived at normalization so predicates stay pure conjunctions.
    EuMarketActor,
    ActivityType,
    OrbitRegime,
    SatelliteCount,
    OffersEuServices,
    LaunchCountry,
    EnterpriseSize,
    EntityType,
}

impl FactKind for JurisdictionFact {
    fn label(self) -> &'static str {
        match self {
            Self::EstablishedIn => "established_in",
            Self::EuEstablished => "eu_established",
            Self::EuMarketActor => "eu_market_actor",
            Self::ActivityType => "activity_type",
            Self::OrbitRegime => "orbit_regime",
            Self::SatelliteCount => "satellite_count",
            Self::OffersEuServices => "offers_eu_services",
            Self::LaunchCountry => "launch_country",
            Self::EnterpriseSize => "enterprise_size",
            Self::EntityType => "entity_type",
        }
    }
}

/// Raw operator description as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperatorSubmission {
    pub established_in: Country,
    pub entity_type: EntityType,
    pub activity_type: ActivityType,
    pub orbit_regime: OrbitRegime,
    pub satellite_count: u32,
    pub offers_eu_services: bool,
    /// Territory the launch is procured from, when already contracted.
    #[serde(default)]
    pub launch_country: Option<Country>,
    pub employee_count: u32,
    pub annual_turnover_meur: f64,
}

/// Canonical operator profile after validation and derivation.
#[derive(Debug, Clone)]
pub struct OperatorProfile {
    pub established_in: Country,
    pub entity_type: EntityType,
    pub activity_type: ActivityType,
    pub orbit_regime: OrbitRegime,
    pub satellite_count: u32,
    pub offers_eu_services: bool,
    pub launch_country: Option<Country>,
    pub employee_count: u32,
    pub annual_turnover_meur: f64,
    pub enterprise_size: EnterpriseSize,
    pub facts: FactSet<JurisdictionFact>,
}
