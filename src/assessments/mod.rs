//! Assessment domains built on the generic engine: debris mitigation,
//! environmental footprint, and space-law applicability. Each domain owns its
//! catalog, normalizer, and report assembler; this module provides the
//! domain-keyed entry point used by callers that work with raw JSON profiles.

pub mod debris;
pub mod environment;
pub mod jurisdiction;
pub mod matrix;
pub mod mission;

#[cfg(test)]
mod tests;

pub use matrix::{CategorySection, RequirementView, LEGAL_DISCLAIMER};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::{InvalidProfileError, StatusLedger};

/// The three assessment instances sharing one evaluation shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentDomain {
    Debris,
    Environment,
    Jurisdiction,
}

impl AssessmentDomain {
    pub const fn ordered() -> [Self; 3] {
        [Self::Debris, Self::Environment, Self::Jurisdiction]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Debris => "Debris Mitigation",
            Self::Environment => "Environmental Footprint",
            Self::Jurisdiction => "Space-Law Applicability",
        }
    }
}

/// Error raised by the domain-keyed entry point.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Profile(#[from] InvalidProfileError),
    #[error("malformed profile payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Serializable union over the three report documents.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "domain", rename_all = "snake_case")]
pub enum AssessmentReport {
    Debris(debris::DebrisReport),
    Environment(environment::EnvironmentalReport),
    Jurisdiction(jurisdiction::JurisdictionReport),
}

impl AssessmentReport {
    pub fn score(&self) -> u8 {
        match self {
            Self::Debris(report) => report.score,
            Self::Environment(report) => report.score,
            Self::Jurisdiction(report) => report.score,
        }
    }
}

/// Evaluate a raw JSON profile against the named domain's catalog, merging
/// the caller's status ledger, and assemble the report document.
pub fn evaluate(
    domain: AssessmentDomain,
    raw_profile: serde_json::Value,
    ledger: &StatusLedger,
    generated_on: NaiveDate,
) -> Result<AssessmentReport, AssessmentError> {
    match domain {
        AssessmentDomain::Debris => {
            let submission: debris::DebrisSubmission = serde_json::from_value(raw_profile)?;
            let assessment = debris::assess(submission, ledger)?;
            Ok(AssessmentReport::Debris(assessment.report(generated_on)))
        }
        AssessmentDomain::Environment => {
            let submission: environment::EnvironmentalSubmission =
                serde_json::from_value(raw_profile)?;
            let assessment = environment::assess(submission, ledger)?;
            Ok(AssessmentReport::Environment(assessment.report(generated_on)))
        }
        AssessmentDomain::Jurisdiction => {
            let submission: jurisdiction::OperatorSubmission = serde_json::from_value(raw_profile)?;
            let assessment = jurisdiction::assess(submission, ledger)?;
            Ok(AssessmentReport::Jurisdiction(assessment.report(generated_on)))
        }
    }
}
