use chrono::NaiveDate;
use serde::Serialize;

use super::super::matrix::{requirement_matrix, CategorySection, LEGAL_DISCLAIMER};
use super::catalog::catalog;
use super::domain::{JurisdictionFact, OperatorProfile};
use crate::engine::{Evaluation, IncompleteProfileWarning, RetiredRequirement, StatusCounts};

/// Operator header rendered at the top of the applicability document.
#[derive(Debug, Clone, Serialize)]
pub struct OperatorSummary {
    pub established_in: &'static str,
    pub entity_type: &'static str,
    pub activity: &'static str,
    pub orbit_regime: &'static str,
    pub satellite_count: u32,
    pub offers_eu_services: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_country: Option<&'static str>,
    pub enterprise_size: &'static str,
}

impl OperatorSummary {
    fn from_profile(profile: &OperatorProfile) -> Self {
        Self {
            established_in: profile.established_in.label(),
            entity_type: profile.entity_type.label(),
            activity: profile.activity_type.label(),
            orbit_regime: profile.orbit_regime.label(),
            satellite_count: profile.satellite_count,
            offers_eu_services: profile.offers_eu_services,
            launch_country: profile.launch_country.map(|country| country.label()),
            enterprise_size: profile.enterprise_size.label(),
        }
    }
}

/// Structured jurisdiction applicability document: which regimes bind the
/// operator, grouped per regime.
#[derive(Debug, Clone, Serialize)]
pub struct JurisdictionReport {
    pub generated_on: NaiveDate,
    pub catalog_version: &'static str,
    pub catalog_published: NaiveDate,
    pub operator: OperatorSummary,
    /// Distinct regimes with at least one applicable provision, in catalog
    /// order.
    pub regimes: Vec<&'static str>,
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
    profile: &OperatorProfile,
    evaluation: &Evaluation<JurisdictionFact>,
    generated_on: NaiveDate,
) -> JurisdictionReport {
    let sections = requirement_matrix(&evaluation.findings);
    let regimes = sections.iter().map(|section| section.category).collect();

    JurisdictionReport {
        generated_on,
        catalog_version: catalog().version(),
        catalog_published: catalog().published(),
        operator: OperatorSummary::from_profile(profile),
        regimes,
        sections,
        counts: evaluation.counts,
        score: evaluation.score,
        retired: evaluation.retired.clone(),
        warnings: evaluation.warnings.clone(),
        disclaimer: LEGAL_DISCLAIMER,
    }
}
