//! Debris-mitigation assessment: requirement checklist for spacecraft
//! operators, from disposal planning to constellation coordination.

mod catalog;
pub mod domain;
mod normalizer;
mod report;

#[cfg(test)]
mod tests;

pub use catalog::catalog;
pub use domain::{
    DebrisFact, DebrisSubmission, Maneuverability, MissionProfile, OperatorType,
};
pub use normalizer::normalize;
pub use report::{assemble, DebrisReport, MissionSummary};

use chrono::NaiveDate;

use crate::engine::{self, Evaluation, InvalidProfileError, StatusLedger};

/// Normalized profile plus the engine pass over the debris catalog.
#[derive(Debug, Clone)]
pub struct DebrisAssessment {
    pub profile: MissionProfile,
    pub evaluation: Evaluation<DebrisFact>,
}

impl DebrisAssessment {
    pub fn report(&self, generated_on: NaiveDate) -> DebrisReport {
        report::assemble(&self.profile, &self.evaluation, generated_on)
    }
}

/// Run the full pipeline: normalize, filter the catalog, merge the ledger,
/// score.
pub fn assess(
    submission: DebrisSubmission,
    ledger: &StatusLedger,
) -> Result<DebrisAssessment, InvalidProfileError> {
    let profile = normalizer::normalize(submission)?;
    let evaluation = engine::assess(catalog(), &profile.facts, ledger);
    Ok(DebrisAssessment {
        profile,
        evaluation,
    })
}
