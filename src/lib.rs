//! Caelex compliance engine: maps a mission or operator profile to the
//! regulatory requirements that apply to it, merges externally tracked
//! per-requirement statuses, and produces scored, serializable report
//! documents.
//!
//! Three assessment domains share one evaluation shape: debris mitigation,
//! environmental footprint, and space-law applicability. The engine itself
//! performs no I/O: catalogs are static, evaluation is deterministic, and
//! persistence and rendering belong to the host application.

pub mod assessments;
pub mod config;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use assessments::{
    evaluate, AssessmentDomain, AssessmentError, AssessmentReport, LEGAL_DISCLAIMER,
};
pub use engine::{
    InvalidProfileError, RequirementStatus, StatusLedger, StatusRecord,
};
