use chrono::NaiveDate;
use serde::Serialize;

use super::super::matrix::{requirement_matrix, CategorySection, LEGAL_DISCLAIMER};
use super::catalog::catalog;
use super::domain::{DebrisFact, MissionProfile};
use crate::engine::{Evaluation, IncompleteProfileWarning, RetiredRequirement, StatusCounts};

/// Mission header rendered at the top of the assessment document.
#[derive(Debug, Clone, Serialize)]
pub struct MissionSummary {
    pub activity: &'static str,
    pub operator: &'static str,
    pub orbit_regime: &'static str,
    pub satellite_count: u32,
    pub constellation_tier: &'static str,
    pub maneuverability: &'static str,
    pub deorbit_strategy: &'static str,
    pub mission_duration_years: f64,
    pub spacecraft_mass_kg: f64,
    pub small_enterprise: bool,
}

impl MissionSummary {
    fn from_profile(profile: &MissionProfile) -> Self {
        Self {
            activity: profile.activity_type.label(),
            operator: profile.operator_type.label(),
            orbit_regime: profile.orbit_regime.label(),
            satellite_count: profile.satellite_count,
            constellation_tier: profile.constellation_tier.label(),
            maneuverability: profile.maneuverability.label(),
            deorbit_strategy: profile.deorbit_strategy.label(),
            mission_duration_years: profile.mission_duration_years,
            spacecraft_mass_kg: profile.spacecraft_mass_kg,
            small_enterprise: profile.is_small_enterprise,
        }
    }
}

/// Structured debris-mitigation assessment document, ready for the host
/// application's rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct DebrisReport {
    pub generated_on: NaiveDate,
    pub catalog_version: &'static str,
    pub catalog_published: NaiveDate,
    pub mission: MissionSummary,
    pub sections: Vec<CategorySection>,
    pub counts: StatusCounts,
    pub score: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub retired: Vec<RetiredRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<IncompleteProfileWarning>,
    pub disclaimer: &'static str,
}

pub fn assemble(
    profile: &MissionProfile,
    evaluation: &Evaluation<DebrisFact>,
    generated_on: NaiveDate,
) -> DebrisReport {
    DebrisReport {
        generated_on,
        catalog_version: catalog().version(),
        catalog_published: catalog().published(),
        mission: MissionSummary::from_profile(profile),
        sections: requirement_matrix(&evaluation.findings),
        counts: evaluation.counts,
        score: evaluation.score,
        retired: evaluation.retired.clone(),
        warnings: evaluation.warnings.clone(),
        disclaimer: LEGAL_DISCLAIMER,
    }
}
