use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-requirement assessment state, tracked over time by the caller's
/// persistence layer. The engine only decides which rules apply; the ledger
/// records how the operator is doing against them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    #[default]
    NotAssessed,
    Compliant,
    NonCompliant,
    NotApplicable,
}

impl RequirementStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::NotAssessed,
            Self::Compliant,
            Self::NonCompliant,
            Self::NotApplicable,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotAssessed => "Not Assessed",
            Self::Compliant => "Compliant",
            Self::NonCompliant => "Non-Compliant",
            Self::NotApplicable => "Not Applicable",
        }
    }
}

/// Status plus the operator's working notes and evidence references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub status: RequirementStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
}

impl StatusRecord {
    pub fn new(status: RequirementStatus) -> Self {
        Self {
            status,
            notes: None,
            evidence: Vec::new(),
        }
    }
}

/// Externally persisted status map, keyed by rule id.
pub type StatusLedger = BTreeMap<String, StatusRecord>;

/// Resolve the working status for a rule that the current profile makes
/// applicable. A stored `NotApplicable` is the engine's own prior marking,
/// not an operator assessment, so it reverts to `NotAssessed`.
pub(crate) fn effective_status(record: Option<&StatusRecord>) -> RequirementStatus {
    match record.map(|record| record.status) {
        None | Some(RequirementStatus::NotApplicable) => RequirementStatus::NotAssessed,
        Some(status) => status,
    }
}
