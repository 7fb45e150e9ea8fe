//! Contradiction candidates: specification item pairs that share a
//! subject but disagree in polarity.
//!
//! Intentionally permissive. The goal is surfacing pairs for human
//! review, not proving logical conflict, so a nonzero false-positive
//! rate is accepted.

use crate::lexicon::{snippet, tokens};
use crate::violation::{Category, Severity, Violation};
use crate::{Check, EVIDENCE_WIDTH};
use specgate_kernel::{Corpus, key_terms};

/// Shared key terms needed before a negation asymmetry counts.
const NEGATION_MIN_SHARED: usize = 3;

/// Shared key terms needed before an antonym split counts. Lower than
/// the negation floor: the antonym pair itself is strong signal.
const ANTONYM_MIN_SHARED: usize = 2;

/// Negation cues. Single words match tokens, phrases match substrings.
const NEGATION_CUES: [&str; 7] = [
    "not", "no", "never", "without", "cannot", "must not", "shall not",
];

/// Built-in antonym table.
const ANTONYMS: [(&str, &str); 6] = [
    ("enable", "disable"),
    ("allow", "deny"),
    ("synchronous", "asynchronous"),
    ("encrypted", "plaintext"),
    ("always", "never"),
    ("permit", "forbid"),
];

pub struct ContradictionCheck;

fn has_negation(normalized: &str, toks: &std::collections::BTreeSet<&str>) -> bool {
    NEGATION_CUES
        .iter()
        .any(|cue| crate::lexicon::has_term(normalized, toks, cue))
}

impl Check for ContradictionCheck {
    fn category(&self) -> Category {
        Category::Contradiction
    }

    fn run(&self, corpus: &Corpus) -> Vec<Violation> {
        let items = corpus.spec_items();
        let prepared: Vec<_> = items
            .iter()
            .map(|s| {
                let normalized = s.normalized_text();
                let terms = key_terms(&s.text);
                (s, normalized, terms)
            })
            .collect();

        let mut evidence = Vec::new();
        let mut line_numbers = Vec::new();

        for i in 0..prepared.len() {
            for j in (i + 1)..prepared.len() {
                let (a, norm_a, terms_a) = &prepared[i];
                let (b, norm_b, terms_b) = &prepared[j];
                let shared = terms_a.intersection(terms_b).count();
                if shared < ANTONYM_MIN_SHARED {
                    continue;
                }

                let toks_a = tokens(norm_a);
                let toks_b = tokens(norm_b);
                let negation_split = shared >= NEGATION_MIN_SHARED
                    && has_negation(norm_a, &toks_a) != has_negation(norm_b, &toks_b);
                let antonym_split = ANTONYMS.iter().any(|(x, y)| {
                    (toks_a.contains(x) && toks_b.contains(y))
                        || (toks_a.contains(y) && toks_b.contains(x))
                });

                if negation_split || antonym_split {
                    evidence.push(format!(
                        "line {} vs line {}: '{}' may contradict '{}'",
                        a.line_number,
                        b.line_number,
                        snippet(&a.text, EVIDENCE_WIDTH),
                        snippet(&b.text, EVIDENCE_WIDTH),
                    ));
                    line_numbers.push(a.line_number);
                    line_numbers.push(b.line_number);
                }
            }
        }

        if evidence.is_empty() {
            return Vec::new();
        }
        vec![Violation::new(
            Severity::Critical,
            Category::Contradiction,
            format!("{} potential contradiction(s) found", evidence.len()),
            "These specification pairs may contradict each other:",
            evidence,
            line_numbers,
        )]
    }
}
