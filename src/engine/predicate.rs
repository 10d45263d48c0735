use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Identifies a profile attribute that predicates can reference.
///
/// Each assessment domain supplies its own fact enum; the engine only needs a
/// stable ordering and a display label for warnings.
pub trait FactKind: Copy + Ord + fmt::Debug {
    fn label(self) -> &'static str;
}

/// Value representation for a normalized profile fact.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactValue {
    Decimal(f64),
    Count(u32),
    Flag(bool),
    Tag(&'static str),
}

impl FactValue {
    fn as_number(&self) -> Option<f64> {
        match self {
            FactValue::Decimal(value) => Some(*value),
            FactValue::Count(count) => Some(*count as f64),
            FactValue::Flag(_) | FactValue::Tag(_) => None,
        }
    }
}

/// The normalized profile attributes a catalog is evaluated against.
///
/// Built once by the domain normalizer and never mutated afterwards.
pub type FactSet<K> = BTreeMap<K, FactValue>;

/// One declarative applicability condition. A rule applies only when every
/// declared clause holds.
#[derive(Debug, Clone)]
pub enum Clause<K> {
    /// Categorical membership: the fact's tag must be one of `allowed`.
    AnyOf {
        fact: K,
        allowed: &'static [&'static str],
    },
    /// Boolean fact must equal `expected`.
    Is { fact: K, expected: bool },
    /// Numeric fact must be `>= min`.
    AtLeast { fact: K, min: f64 },
    /// Numeric fact must be `<= max`.
    AtMost { fact: K, max: f64 },
}

impl<K: FactKind> Clause<K> {
    pub fn fact(&self) -> K {
        match self {
            Clause::AnyOf { fact, .. }
            | Clause::Is { fact, .. }
            | Clause::AtLeast { fact, .. }
            | Clause::AtMost { fact, .. } => *fact,
        }
    }

    /// Evaluate this clause against the fact set. A fact of the wrong shape
    /// counts as a failed clause, not a missing one.
    pub fn evaluate(&self, facts: &FactSet<K>) -> ClauseOutcome<K> {
        let Some(value) = facts.get(&self.fact()) else {
            return ClauseOutcome::MissingFact(self.fact());
        };

        let holds = match self {
            Clause::AnyOf { allowed, .. } => match value {
                FactValue::Tag(tag) => allowed.contains(tag),
                _ => false,
            },
            Clause::Is { expected, .. } => match value {
                FactValue::Flag(flag) => flag == expected,
                _ => false,
            },
            Clause::AtLeast { min, .. } => {
                value.as_number().map(|number| number >= *min).unwrap_or(false)
            }
            Clause::AtMost { max, .. } => {
                value.as_number().map(|number| number <= *max).unwrap_or(false)
            }
        };

        if holds {
            ClauseOutcome::Holds
        } else {
            ClauseOutcome::Fails
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseOutcome<K> {
    Holds,
    Fails,
    MissingFact(K),
}

/// Outcome of evaluating a rule's full predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability<K> {
    Applicable,
    Inapplicable,
    /// A clause referenced a fact the profile does not carry. The rule is
    /// excluded fail-safe and the caller is warned.
    Indeterminate { missing: K },
}

/// Conjunction over the rule's clauses. A definitive failure wins over a
/// missing fact so that clause order never changes the outcome.
pub fn applicability<K: FactKind>(clauses: &[Clause<K>], facts: &FactSet<K>) -> Applicability<K> {
    let mut missing = None;

    for clause in clauses {
        match clause.evaluate(facts) {
            ClauseOutcome::Holds => {}
            ClauseOutcome::Fails => return Applicability::Inapplicable,
            ClauseOutcome::MissingFact(fact) => {
                if missing.is_none() {
                    missing = Some(fact);
                }
            }
        }
    }

    match missing {
        Some(fact) => Applicability::Indeterminate { missing: fact },
        None => Applicability::Applicable,
    }
}

/// Non-fatal notice that a rule was excluded because the profile lacked a
/// fact its predicate needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncompleteProfileWarning {
    pub rule_id: &'static str,
    pub missing_fact: &'static str,
}
