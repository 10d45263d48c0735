use chrono::NaiveDate;
use serde::Serialize;

use super::super::matrix::{requirement_matrix, CategorySection, LEGAL_DISCLAIMER};
use super::catalog::{catalog, rule_recommendation};
use super::domain::{EnvFact, EnvironmentalProfile};
use super::footprint::{footprint, FootprintSummary};
use crate::engine::{
    Evaluation, IncompleteProfileWarning, RequirementStatus, RetiredRequirement, StatusCounts,
};

/// Declaration header rendered at the top of the EFD document.
#[derive(Debug, Clone, Serialize)]
pub struct DeclarationSummary {
    pub launch_vehicle: &'static str,
    pub propellant: &'static str,
    pub spacecraft_mass_kg: f64,
    pub satellite_count: u32,
    pub constellation_tier: &'static str,
    pub mission_duration_years: f64,
    pub ground_station_count: u32,
    pub deorbit_strategy: &'static str,
    pub launch_mass_fraction: f64,
    pub small_enterprise: bool,
}

impl DeclarationSummary {
    fn from_profile(profile: &EnvironmentalProfile) -> Self {
        Self {
            launch_vehicle: profile.launch_vehicle.label(),
            propellant: profile.propellant.label(),
            spacecraft_mass_kg: profile.spacecraft_mass_kg,
            satellite_count: profile.satellite_count,
            constellation_tier: profile.constellation_tier.label(),
            mission_duration_years: profile.mission_duration_years,
            ground_station_count: profile.ground_station_count,
            deorbit_strategy: profile.deorbit_strategy.label(),
            launch_mass_fraction: profile.launch_mass_fraction,
            small_enterprise: profile.is_small_enterprise,
        }
    }
}

/// Structured environmental footprint declaration document.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentalReport {
    pub generated_on: NaiveDate,
    pub catalog_version: &'static str,
    pub catalog_published: NaiveDate,
    pub declaration: DeclarationSummary,
    pub footprint: FootprintSummary,
    pub sections: Vec<CategorySection>,
    pub counts: StatusCounts,
    pub score: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub retired: Vec<RetiredRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<IncompleteProfileWarning>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<&'static str>,
    pub disclaimer: &'static str,
}

pub fn assemble(
    profile: &EnvironmentalProfile,
    evaluation: &Evaluation<EnvFact>,
    generated_on: NaiveDate,
) -> EnvironmentalReport {
    let footprint = footprint(profile);

    // Hotspot-keyed suggestions first, then the ones keyed on non-compliant
    // requirements, in catalog order.
    let mut recommendations = footprint.recommendations.clone();
    for finding in &evaluation.findings {
        if finding.status == RequirementStatus::NonCompliant {
            if let Some(suggestion) = rule_recommendation(finding.rule.id) {
                if !recommendations.contains(&suggestion) {
                    recommendations.push(suggestion);
                }
            }
        }
    }

    EnvironmentalReport {
        generated_on,
        catalog_version: catalog().version(),
        catalog_published: catalog().published(),
        declaration: DeclarationSummary::from_profile(profile),
        footprint,
        sections: requirement_matrix(&evaluation.findings),
        counts: evaluation.counts,
        score: evaluation.score,
        retired: evaluation.retired.clone(),
        warnings: evaluation.warnings.clone(),
        recommendations,
        disclaimer: LEGAL_DISCLAIMER,
    }
}
