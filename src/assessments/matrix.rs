use serde::Serialize;

use crate::engine::{FactKind, RequirementStatus, RuleFinding, Severity};

/// Fixed disclaimer attached to every assembled report. Rendering is the
/// host application's concern; the text itself is part of the document.
pub const LEGAL_DISCLAIMER: &str = "This assessment is generated from a static requirement \
catalog and the mission profile supplied by the operator. It is an internal compliance aid, \
not legal advice, and does not replace a determination by the competent national authority.";

/// One row of the requirement matrix: an applicable rule joined with its
/// merged status and the catalog's guidance payload.
#[derive(Debug, Clone, Serialize)]
pub struct RequirementView {
    pub rule_id: &'static str,
    pub title: &'static str,
    pub citation: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub severity_label: &'static str,
    pub status: RequirementStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
    pub summary: &'static str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub tips: &'static [&'static str],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub evidence_required: &'static [&'static str],
}

impl RequirementView {
    pub(crate) fn from_finding<K: FactKind>(finding: &RuleFinding<K>) -> Self {
        Self {
            rule_id: finding.rule.id,
            title: finding.rule.title,
            citation: finding.rule.citation,
            category: finding.rule.category,
            severity: finding.rule.severity,
            severity_label: finding.rule.severity.label(),
            status: finding.status,
            status_label: finding.status.label(),
            notes: finding.notes.clone(),
            evidence: finding.evidence.clone(),
            summary: finding.rule.guidance.summary,
            tips: finding.rule.guidance.tips,
            evidence_required: finding.rule.guidance.evidence,
        }
    }
}

/// Requirements grouped under one catalog category.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySection {
    pub category: &'static str,
    pub requirements: Vec<RequirementView>,
}

/// Group findings by category, preserving catalog declaration order for both
/// the categories and the rows inside each section.
pub(crate) fn requirement_matrix<K: FactKind>(
    findings: &[RuleFinding<K>],
) -> Vec<CategorySection> {
    let mut sections: Vec<CategorySection> = Vec::new();

    for finding in findings {
        let view = RequirementView::from_finding(finding);
        match sections
            .iter_mut()
            .find(|section| section.category == view.category)
        {
            Some(section) => section.requirements.push(view),
            None => sections.push(CategorySection {
                category: view.category,
                requirements: vec![view],
            }),
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Clause, Guidance, Rule};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum TestFact {
        Orbit,
    }

    impl FactKind for TestFact {
        fn label(self) -> &'static str {
            "orbit"
        }
    }

    fn finding(id: &'static str, category: &'static str) -> RuleFinding<TestFact> {
        RuleFinding {
            rule: Rule {
                id,
                title: "Requirement",
                citation: "Test Act, Art. 1",
                category,
                severity: Severity::Major,
                clauses: vec![Clause::AnyOf {
                    fact: TestFact::Orbit,
                    allowed: &["leo"],
                }],
                guidance: Guidance {
                    summary: "summary",
                    tips: &["tip"],
                    evidence: &[],
                },
            },
            status: RequirementStatus::NotAssessed,
            notes: None,
            evidence: Vec::new(),
        }
    }

    #[test]
    fn matrix_groups_by_first_seen_category_order() {
        let findings = vec![
            finding("A-1", "disposal"),
            finding("B-1", "tracking"),
            finding("A-2", "disposal"),
        ];

        let sections = requirement_matrix(&findings);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].category, "disposal");
        assert_eq!(sections[0].requirements.len(), 2);
        assert_eq!(sections[1].category, "tracking");
        assert_eq!(sections[0].requirements[1].rule_id, "A-2");
    }

    #[test]
    fn view_carries_labels_for_rendering() {
        let view = RequirementView::from_finding(&finding("A-1", "disposal"));
        assert_eq!(view.severity_label, "Major");
        assert_eq!(view.status_label, "Not Assessed");
        assert_eq!(view.tips, &["tip"]);
    }
}
