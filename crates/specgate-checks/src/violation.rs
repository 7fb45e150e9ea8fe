//! The reported finding: severity, category, evidence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently a finding needs triage. Declaration order is ranking
/// order: sorting ascending puts CRITICAL first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        };
        write!(f, "{name}")
    }
}

/// Which check produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Coverage,
    PrincipleViolation,
    Contradiction,
    ScopeCreep,
    Completeness,
    Ambiguity,
    Testability,
    Vagueness,
    Consistency,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Coverage => "COVERAGE",
            Category::PrincipleViolation => "PRINCIPLE_VIOLATION",
            Category::Contradiction => "CONTRADICTION",
            Category::ScopeCreep => "SCOPE_CREEP",
            Category::Completeness => "COMPLETENESS",
            Category::Ambiguity => "AMBIGUITY",
            Category::Testability => "TESTABILITY",
            Category::Vagueness => "VAGUENESS",
            Category::Consistency => "CONSISTENCY",
        };
        write!(f, "{name}")
    }
}

/// One aggregated finding. Immutable once created; each check emits at
/// most one per severity bucket, with all supporting evidence nested in
/// `evidence`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub severity: Severity,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub evidence: Vec<String>,
    pub line_numbers: Vec<usize>,
}

impl Violation {
    pub fn new(
        severity: Severity,
        category: Category,
        title: impl Into<String>,
        description: impl Into<String>,
        evidence: Vec<String>,
        mut line_numbers: Vec<usize>,
    ) -> Self {
        line_numbers.sort_unstable();
        line_numbers.dedup();
        Self {
            severity,
            category,
            title: title.into(),
            description: description.into(),
            evidence,
            line_numbers,
        }
    }
}
