use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::predicate::{Clause, FactKind};

/// Weight class of a requirement, used for report emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Major,
    Minor,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Major => "Major",
            Self::Minor => "Minor",
        }
    }
}

/// Free-text payload carried on every rule. Passed through to reports,
/// never evaluated.
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub summary: &'static str,
    pub tips: &'static [&'static str],
    pub evidence: &'static [&'static str],
}

/// One atomic compliance obligation with its applicability predicate.
#[derive(Debug, Clone)]
pub struct Rule<K> {
    pub id: &'static str,
    pub title: &'static str,
    pub citation: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub clauses: Vec<Clause<K>>,
    pub guidance: Guidance,
}

/// A versioned, immutable requirement table for one assessment domain.
///
/// Rules keep their declaration order so reports render reproducibly.
#[derive(Debug)]
pub struct Catalog<K> {
    domain: &'static str,
    version: &'static str,
    published: NaiveDate,
    rules: Vec<Rule<K>>,
}

impl<K: FactKind> Catalog<K> {
    pub fn new(
        domain: &'static str,
        version: &'static str,
        published: NaiveDate,
        rules: Vec<Rule<K>>,
    ) -> Self {
        Self {
            domain,
            version,
            published,
            rules,
        }
    }

    pub fn domain(&self) -> &'static str {
        self.domain
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn published(&self) -> NaiveDate {
        self.published
    }

    pub fn rules(&self) -> &[Rule<K>] {
        &self.rules
    }

    pub fn rule(&self, id: &str) -> Option<&Rule<K>> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rule(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Consistency check run by the test suite against every shipped catalog.
    /// Malformed catalogs are a build defect, not a runtime condition.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.id) {
                return Err(CatalogError::DuplicateRuleId(rule.id));
            }
            if rule.clauses.is_empty() {
                return Err(CatalogError::EmptyPredicate(rule.id));
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate rule id '{0}' in catalog")]
    DuplicateRuleId(&'static str),
    #[error("rule '{0}' declares no applicability clauses")]
    EmptyPredicate(&'static str),
}
