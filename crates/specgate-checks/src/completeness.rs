//! Completeness: cross-cutting aspects a specification should say
//! something about.

use crate::lexicon::{has_term, tokens};
use crate::violation::{Category, Severity, Violation};
use crate::Check;
use specgate_kernel::Corpus;

/// The fixed aspect checklist. An aspect counts as present when any
/// specification item contains one of its keywords.
const ASPECTS: [(&str, &[&str]); 6] = [
    (
        "security",
        &["security", "authentication", "authorization", "encrypt", "encrypted", "encryption", "secure"],
    ),
    (
        "error handling",
        &["error", "errors", "exception", "exceptions", "failure", "failures", "retry", "retries"],
    ),
    (
        "performance",
        &["performance", "latency", "throughput", "speed", "scale", "milliseconds"],
    ),
    (
        "validation",
        &["validate", "validated", "validation", "verify", "verified", "sanitize"],
    ),
    (
        "logging/auditing",
        &["logging", "logged", "logs", "audit", "auditing", "monitoring"],
    ),
    (
        "accessibility",
        &["accessibility", "accessible", "wcag", "screen reader", "keyboard navigation"],
    ),
];

pub struct CompletenessCheck;

impl Check for CompletenessCheck {
    fn category(&self) -> Category {
        Category::Completeness
    }

    fn run(&self, corpus: &Corpus) -> Vec<Violation> {
        let prepared: Vec<_> = corpus
            .spec_items()
            .iter()
            .map(|s| s.normalized_text())
            .collect();
        let prepared: Vec<_> = prepared
            .iter()
            .map(|n| (n.as_str(), tokens(n)))
            .collect();

        let mut missing = Vec::new();
        for (aspect, keywords) in ASPECTS {
            let present = prepared.iter().any(|(normalized, toks)| {
                keywords.iter().any(|kw| has_term(normalized, toks, kw))
            });
            if !present {
                missing.push(format!("no specification item addresses {aspect}"));
            }
        }

        if missing.is_empty() {
            return Vec::new();
        }
        vec![Violation::new(
            Severity::High,
            Category::Completeness,
            format!("{} cross-cutting aspect(s) are unaddressed", missing.len()),
            "The specification says nothing about these aspects:",
            missing,
            Vec::new(),
        )]
    }
}
