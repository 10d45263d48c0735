//! Environmental footprint declaration (EFD): lifecycle emission computation,
//! grading, and the environmental obligations checklist.

mod catalog;
pub mod domain;
mod footprint;
mod normalizer;
mod report;

#[cfg(test)]
mod tests;

pub use catalog::{catalog, rule_recommendation, GRADE_BANDS, HOTSPOT_SHARE_THRESHOLD};
pub use domain::{
    EnvFact, EnvironmentalProfile, EnvironmentalSubmission, FootprintGrade, LaunchVehicle,
    LifecyclePhase, PropellantType,
};
pub use footprint::{footprint, FootprintSummary, PhaseContribution};
pub use normalizer::normalize;
pub use report::{assemble, DeclarationSummary, EnvironmentalReport};

use chrono::NaiveDate;

use crate::engine::{self, Evaluation, InvalidProfileError, StatusLedger};

/// Normalized profile plus the engine pass over the environmental catalog.
#[derive(Debug, Clone)]
pub struct EnvironmentalAssessment {
    pub profile: EnvironmentalProfile,
    pub evaluation: Evaluation<EnvFact>,
}

impl EnvironmentalAssessment {
    pub fn footprint(&self) -> FootprintSummary {
        footprint::footprint(&self.profile)
    }

    pub fn report(&self, generated_on: NaiveDate) -> EnvironmentalReport {
        report::assemble(&self.profile, &self.evaluation, generated_on)
    }
}

/// Run the full pipeline: normalize, filter the catalog, merge the ledger,
/// score.
pub fn assess(
    submission: EnvironmentalSubmission,
    ledger: &StatusLedger,
) -> Result<EnvironmentalAssessment, InvalidProfileError> {
    let profile = normalizer::normalize(submission)?;
    let evaluation = engine::assess(catalog(), &profile.facts, ledger);
    Ok(EnvironmentalAssessment {
        profile,
        evaluation,
    })
}
