//! Testability: does a specification item carry any measurable
//! criterion at all?

use crate::lexicon::{has_term, snippet, tokens};
use crate::violation::{Category, Severity, Violation};
use crate::{Check, EVIDENCE_WIDTH};
use specgate_kernel::Corpus;

/// Explicit comparison phrasing that makes a criterion checkable.
const COMPARISON_PHRASES: [&str; 8] = [
    "exactly",
    "at least",
    "at most",
    "no more than",
    "no less than",
    "within",
    "fewer than",
    "greater than",
];

/// Unit words that imply a measurable quantity even without a digit on
/// the same line.
const UNIT_WORDS: [&str; 14] = [
    "seconds",
    "milliseconds",
    "minutes",
    "hours",
    "days",
    "bytes",
    "kilobytes",
    "megabytes",
    "gigabytes",
    "percent",
    "requests",
    "retries",
    "characters",
    "items",
];

pub struct TestabilityCheck;

fn has_measurable_criterion(normalized: &str) -> bool {
    if normalized.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }
    let toks = tokens(normalized);
    COMPARISON_PHRASES
        .iter()
        .chain(UNIT_WORDS.iter())
        .any(|term| has_term(normalized, &toks, term))
}

impl Check for TestabilityCheck {
    fn category(&self) -> Category {
        Category::Testability
    }

    fn run(&self, corpus: &Corpus) -> Vec<Violation> {
        let mut evidence = Vec::new();
        let mut line_numbers = Vec::new();

        for spec in corpus.spec_items() {
            if !has_measurable_criterion(&spec.normalized_text()) {
                evidence.push(format!(
                    "line {}: {}",
                    spec.line_number,
                    snippet(&spec.text, EVIDENCE_WIDTH),
                ));
                line_numbers.push(spec.line_number);
            }
        }

        if evidence.is_empty() {
            return Vec::new();
        }
        vec![Violation::new(
            Severity::Medium,
            Category::Testability,
            format!("{} specification item(s) may not be testable", evidence.len()),
            "These specification items lack a number, unit, or explicit comparison:",
            evidence,
            line_numbers,
        )]
    }
}
