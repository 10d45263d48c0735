//! Generic compliance applicability and scoring engine.
//!
//! One evaluation shape shared by every assessment domain: a static rule
//! [`Catalog`] is filtered against a normalized profile's [`FactSet`], the
//! caller's [`StatusLedger`] is merged onto the applicable subset, and the
//! result is scored. The engine is synchronous and side-effect-free: no I/O,
//! no shared mutable state, identical inputs always produce identical output.

pub mod catalog;
pub mod predicate;
pub mod profile;
pub mod score;
pub mod status;

pub use catalog::{Catalog, CatalogError, Guidance, Rule, Severity};
pub use predicate::{
    Applicability, Clause, ClauseOutcome, FactKind, FactSet, FactValue, IncompleteProfileWarning,
};
pub use profile::InvalidProfileError;
pub use score::{compliance_score, StatusCounts};
pub use status::{RequirementStatus, StatusLedger, StatusRecord};

use serde::Serialize;
use tracing::{debug, warn};

/// An applicable rule paired with its merged working status.
#[derive(Debug, Clone)]
pub struct RuleFinding<K> {
    pub rule: Rule<K>,
    pub status: RequirementStatus,
    pub notes: Option<String>,
    pub evidence: Vec<String>,
}

/// Ledger entry whose rule no longer applies to the current profile. History
/// is surfaced here rather than silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetiredRequirement {
    pub rule_id: String,
    pub previous_status: RequirementStatus,
    pub status: RequirementStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Full output of one engine pass: applicable findings in catalog order,
/// retired ledger entries, status counts, score, and profile warnings.
#[derive(Debug, Clone)]
pub struct Evaluation<K> {
    pub findings: Vec<RuleFinding<K>>,
    pub retired: Vec<RetiredRequirement>,
    pub counts: StatusCounts,
    pub score: u8,
    pub warnings: Vec<IncompleteProfileWarning>,
}

impl<K> Evaluation<K> {
    pub fn finding(&self, rule_id: &str) -> Option<&RuleFinding<K>> {
        self.findings.iter().find(|finding| finding.rule.id == rule_id)
    }

    pub fn is_applicable(&self, rule_id: &str) -> bool {
        self.finding(rule_id).is_some()
    }
}

/// Evaluate a catalog against a normalized fact set and merge the caller's
/// status ledger.
///
/// Applicability is a pure function of `(catalog, facts)`; rules are
/// independent of one another and visited in declaration order.
pub fn assess<K: FactKind>(
    catalog: &Catalog<K>,
    facts: &FactSet<K>,
    ledger: &StatusLedger,
) -> Evaluation<K> {
    let mut findings = Vec::new();
    let mut retired = Vec::new();
    let mut warnings = Vec::new();
    let mut counts = StatusCounts::default();

    for rule in catalog.rules() {
        match predicate::applicability(&rule.clauses, facts) {
            Applicability::Applicable => {
                let record = ledger.get(rule.id);
                let merged = status::effective_status(record);
                counts.record(merged);
                findings.push(RuleFinding {
                    rule: rule.clone(),
                    status: merged,
                    notes: record.and_then(|record| record.notes.clone()),
                    evidence: record.map(|record| record.evidence.clone()).unwrap_or_default(),
                });
            }
            Applicability::Inapplicable => {
                if let Some(record) = ledger.get(rule.id) {
                    retired.push(RetiredRequirement {
                        rule_id: rule.id.to_string(),
                        previous_status: record.status,
                        status: RequirementStatus::NotApplicable,
                        notes: record.notes.clone(),
                    });
                }
            }
            Applicability::Indeterminate { missing } => {
                warn!(
                    rule = rule.id,
                    fact = missing.label(),
                    "excluding requirement: profile does not carry a fact its predicate needs"
                );
                warnings.push(IncompleteProfileWarning {
                    rule_id: rule.id,
                    missing_fact: missing.label(),
                });
            }
        }
    }

    // Ledger entries for ids the catalog no longer ships are retired too.
    for (rule_id, record) in ledger {
        if !catalog.contains(rule_id) {
            debug!(rule = rule_id.as_str(), "ledger entry has no catalog counterpart");
            retired.push(RetiredRequirement {
                rule_id: rule_id.clone(),
                previous_status: record.status,
                status: RequirementStatus::NotApplicable,
                notes: record.notes.clone(),
            });
        }
    }

    let score = compliance_score(&counts);

    Evaluation {
        findings,
        retired,
        counts,
        score,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum TestFact {
        Orbit,
        Crewed,
    }

    impl FactKind for TestFact {
        fn label(self) -> &'static str {
            match self {
                TestFact::Orbit => "orbit",
                TestFact::Crewed => "crewed",
            }
        }
    }

    fn rule(id: &'static str, allowed: &'static [&'static str]) -> Rule<TestFact> {
        Rule {
            id,
            title: "Test requirement",
            citation: "Test Act, Art. 1",
            category: "testing",
            severity: Severity::Major,
            clauses: vec![Clause::AnyOf {
                fact: TestFact::Orbit,
                allowed,
            }],
            guidance: Guidance {
                summary: "none",
                tips: &[],
                evidence: &[],
            },
        }
    }

    fn catalog() -> Catalog<TestFact> {
        let published = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
        let crewed_rule = Rule {
            clauses: vec![Clause::Is {
                fact: TestFact::Crewed,
                expected: true,
            }],
            ..rule("T-03", &[])
        };
        Catalog::new(
            "test",
            "2026.1",
            published,
            vec![rule("T-01", &["leo"]), rule("T-02", &["geo"]), crewed_rule],
        )
    }

    fn leo_facts() -> FactSet<TestFact> {
        let mut facts = FactSet::new();
        facts.insert(TestFact::Orbit, FactValue::Tag("leo"));
        facts.insert(TestFact::Crewed, FactValue::Flag(false));
        facts
    }

    #[test]
    fn applicable_rules_default_to_not_assessed() {
        let evaluation = assess(&catalog(), &leo_facts(), &StatusLedger::new());

        assert!(evaluation.is_applicable("T-01"));
        assert!(!evaluation.is_applicable("T-02"));
        assert_eq!(
            evaluation.finding("T-01").expect("applicable").status,
            RequirementStatus::NotAssessed
        );
    }

    #[test]
    fn ledger_status_is_merged_onto_findings() {
        let mut ledger = StatusLedger::new();
        ledger.insert(
            "T-01".to_string(),
            StatusRecord {
                status: RequirementStatus::Compliant,
                notes: Some("verified".to_string()),
                evidence: vec!["ref-1".to_string()],
            },
        );

        let evaluation = assess(&catalog(), &leo_facts(), &ledger);
        let finding = evaluation.finding("T-01").expect("applicable");

        assert_eq!(finding.status, RequirementStatus::Compliant);
        assert_eq!(finding.notes.as_deref(), Some("verified"));
        assert_eq!(evaluation.score, 100);
    }

    #[test]
    fn inapplicable_tracked_rules_are_retired_not_dropped() {
        let mut ledger = StatusLedger::new();
        ledger.insert(
            "T-02".to_string(),
            StatusRecord::new(RequirementStatus::Compliant),
        );

        let evaluation = assess(&catalog(), &leo_facts(), &ledger);

        assert_eq!(evaluation.retired.len(), 1);
        assert_eq!(evaluation.retired[0].rule_id, "T-02");
        assert_eq!(
            evaluation.retired[0].previous_status,
            RequirementStatus::Compliant
        );
        assert_eq!(
            evaluation.retired[0].status,
            RequirementStatus::NotApplicable
        );
    }

    #[test]
    fn unknown_ledger_ids_are_retired_with_history_preserved() {
        let mut ledger = StatusLedger::new();
        ledger.insert(
            "GONE-99".to_string(),
            StatusRecord {
                status: RequirementStatus::NonCompliant,
                notes: Some("legacy finding".to_string()),
                evidence: Vec::new(),
            },
        );

        let evaluation = assess(&catalog(), &leo_facts(), &ledger);

        let retired = evaluation
            .retired
            .iter()
            .find(|entry| entry.rule_id == "GONE-99")
            .expect("unknown id surfaced");
        assert_eq!(retired.previous_status, RequirementStatus::NonCompliant);
        assert_eq!(retired.notes.as_deref(), Some("legacy finding"));
    }

    #[test]
    fn missing_fact_excludes_rule_and_warns_once() {
        let mut facts = leo_facts();
        facts.remove(&TestFact::Crewed);

        let evaluation = assess(&catalog(), &facts, &StatusLedger::new());

        assert!(!evaluation.is_applicable("T-03"));
        assert_eq!(evaluation.warnings.len(), 1);
        assert_eq!(evaluation.warnings[0].rule_id, "T-03");
        assert_eq!(evaluation.warnings[0].missing_fact, "crewed");
    }

    #[test]
    fn evaluation_is_deterministic() {
        let ledger = StatusLedger::new();
        let first = assess(&catalog(), &leo_facts(), &ledger);
        let second = assess(&catalog(), &leo_facts(), &ledger);

        let ids = |evaluation: &Evaluation<TestFact>| {
            evaluation
                .findings
                .iter()
                .map(|finding| finding.rule.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.score, second.score);
        assert_eq!(first.counts, second.counts);
    }
}
