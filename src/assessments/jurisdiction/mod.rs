//! National and EU space-law applicability: which regimes bind a given
//! operator, with per-provision obligations.

mod catalog;
pub mod domain;
mod normalizer;
mod report;

#[cfg(test)]
mod tests;

pub use catalog::catalog;
pub use domain::{
    Country, EnterpriseSize, EntityType, JurisdictionFact, OperatorProfile, OperatorSubmission,
};
pub use normalizer::normalize;
pub use report::{assemble, JurisdictionReport, OperatorSummary};

use chrono::NaiveDate;

use crate::engine::{self, Evaluation, InvalidProfileError, StatusLedger};

/// Normalized profile plus the engine pass over the jurisdiction catalog.
#[derive(Debug, Clone)]
pub struct JurisdictionAssessment {
    pub profile: OperatorProfile,
    pub evaluation: Evaluation<JurisdictionFact>,
}

impl JurisdictionAssessment {
    pub fn report(&self, generated_on: NaiveDate) -> JurisdictionReport {
        report::assemble(&self.profile, &self.evaluation, generated_on)
    }
}

/// Run the full pipeline: normalize, filter the catalog, merge the ledger,
/// score.
pub fn assess(
    submission: OperatorSubmission,
    ledger: &StatusLedger,
) -> Result<JurisdictionAssessment, InvalidProfileError> {
    let profile = normalizer::normalize(submission)?;
    let evaluation = engine::assess(catalog(), &profile.facts, ledger);
    Ok(JurisdictionAssessment {
        profile,
        evaluation,
    })
}
