//! The orchestrator: run every registered check in fixed order and
//! fold the results into one report.

use crate::violation::{Severity, Violation};
use crate::{Check, default_checks};
use serde::{Deserialize, Serialize};
use specgate_kernel::Corpus;
use std::fmt;

/// Statement counts at verification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub requirements: usize,
    pub principles: usize,
    pub spec_items: usize,
}

/// The deterministic pass/fail outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

/// Everything one verification run produced. Created once after all
/// checks run, consumed once by a renderer, then discarded.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub counts: Counts,
    pub violations: Vec<Violation>,
    pub verdict: Verdict,
}

impl VerificationReport {
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }
}

/// Run the default check battery over a frozen corpus.
///
/// Checks run in registry order; the collected list is then ranked by
/// severity (stable, so registry order breaks ties). The verdict is
/// FAIL iff any violation is CRITICAL — nothing else influences it.
pub fn verify(corpus: &Corpus) -> VerificationReport {
    run_checks(corpus, &default_checks())
}

/// Same as [`verify`] with an explicit check list, the seam for adding
/// or isolating checks in tests.
pub fn run_checks(corpus: &Corpus, checks: &[Box<dyn Check>]) -> VerificationReport {
    let mut violations = Vec::new();
    for check in checks {
        violations.extend(check.run(corpus));
    }
    violations.sort_by_key(|v| v.severity);

    let verdict = if violations.iter().any(|v| v.severity == Severity::Critical) {
        Verdict::Fail
    } else {
        Verdict::Pass
    };

    VerificationReport {
        counts: Counts {
            requirements: corpus.requirements().len(),
            principles: corpus.principles().len(),
            spec_items: corpus.spec_items().len(),
        },
        violations,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{input_statement, spec_statement};
    use crate::violation::Category;

    #[test]
    fn verdict_fails_iff_critical_present() {
        // Uncovered requirement: CRITICAL coverage violation.
        let mut corpus = Corpus::new();
        corpus.add(input_statement("Users must reset their password via email", 1));
        let report = verify(&corpus);
        assert_eq!(report.verdict, Verdict::Fail);
        assert!(report.count_by_severity(Severity::Critical) > 0);

        // Covered requirement, HIGH/MEDIUM noise allowed: still PASS.
        let mut corpus = Corpus::new();
        corpus.add(input_statement("Users must reset their password via email", 1));
        corpus.add(spec_statement(
            "Users reset their password via email within 30 minutes",
            5,
        ));
        let report = verify(&corpus);
        assert!(report.count_by_severity(Severity::Critical) == 0);
        assert_eq!(report.verdict, Verdict::Pass);
    }

    #[test]
    fn violations_are_severity_ranked() {
        let mut corpus = Corpus::new();
        corpus.add(input_statement("Users must reset their password via email", 1));
        corpus.add(spec_statement("the filtering should be fast and efficient", 14));

        let report = verify(&corpus);
        let ranks: Vec<Severity> = report.violations.iter().map(|v| v.severity).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn counts_reflect_the_corpus() {
        let mut corpus = Corpus::new();
        corpus.add(input_statement("Users must reset their password via email", 1));
        let report = verify(&corpus);
        assert_eq!(report.counts.requirements, 1);
        assert_eq!(report.counts.principles, 0);
        assert_eq!(report.counts.spec_items, 0);
    }

    #[test]
    fn empty_specification_fails_with_full_uncovered_list() {
        let mut corpus = Corpus::new();
        corpus.add(input_statement("Users must reset their password via email", 1));
        corpus.add(input_statement("Orders must be archived after 90 days", 2));

        let report = verify(&corpus);
        assert_eq!(report.counts.spec_items, 0);
        assert_eq!(report.verdict, Verdict::Fail);
        let coverage = report
            .violations
            .iter()
            .find(|v| v.category == Category::Coverage && v.severity == Severity::Critical)
            .expect("coverage violation expected");
        assert_eq!(coverage.evidence.len(), 2);
    }

    #[test]
    fn reruns_are_identical() {
        let mut corpus = Corpus::new();
        corpus.add(input_statement("Users must reset their password via email", 1));
        corpus.add(spec_statement("the filtering should be fast and efficient", 14));

        let a = verify(&corpus);
        let b = verify(&corpus);
        assert_eq!(
            serde_json::to_string(&a.violations).unwrap(),
            serde_json::to_string(&b.violations).unwrap()
        );
    }
}
