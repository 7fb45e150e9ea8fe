//! Vagueness: short, abstract items with no concrete detail.
//!
//! Distinct from ambiguity: ambiguity is about subjective qualifiers,
//! vagueness about missing information density. Both may fire on the
//! same line.

use crate::lexicon::{snippet, tokens};
use crate::violation::{Category, Severity, Violation};
use crate::{Check, EVIDENCE_WIDTH};
use specgate_kernel::Corpus;

/// Items longer than this have room to be judged on their own merits;
/// the density heuristic only fires on short statements.
const MAX_VAGUE_TOKENS: usize = 12;

/// Words that signal the author committed to something concrete.
const CONCRETE_CUES: [&str; 5] = ["must", "shall", "will", "exactly", "specifically"];

pub struct VaguenessCheck;

fn is_vague(normalized: &str) -> bool {
    if normalized.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let toks = tokens(normalized);
    if toks.len() > MAX_VAGUE_TOKENS {
        return false;
    }
    !CONCRETE_CUES.iter().any(|cue| toks.contains(cue))
}

impl Check for VaguenessCheck {
    fn category(&self) -> Category {
        Category::Vagueness
    }

    fn run(&self, corpus: &Corpus) -> Vec<Violation> {
        let mut evidence = Vec::new();
        let mut line_numbers = Vec::new();

        for spec in corpus.spec_items() {
            if is_vague(&spec.normalized_text()) {
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
            Category::Vagueness,
            format!("{} vague specification item(s)", evidence.len()),
            "These specification items lack concrete detail:",
            evidence,
            line_numbers,
        )]
    }
}
