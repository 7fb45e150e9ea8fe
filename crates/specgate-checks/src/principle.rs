//! Principle violations: prohibitive principles breached by the
//! specification, mandatory principles it never addresses.

use crate::lexicon::{snippet, tokens};
use crate::violation::{Category, Severity, Violation};
use crate::{Check, EVIDENCE_WIDTH};
use specgate_kernel::{
    Corpus, PARTIAL_THRESHOLD, Polarity, Statement, StatementId, best_score, key_terms,
};
use std::collections::BTreeSet;

/// Cue words left over after stop-word stripping that belong to the
/// prohibition itself, not its subject.
const CUE_TERMS: [&str; 4] = ["never", "prohibited", "cannot", "without"];

pub struct PrincipleViolationCheck;

/// Subject terms of a prohibitive principle: key terms minus the
/// negation cues.
fn prohibited_terms(principle: &Statement) -> BTreeSet<String> {
    let mut terms = key_terms(&principle.text);
    for cue in CUE_TERMS {
        terms.remove(cue);
    }
    terms
}

impl Check for PrincipleViolationCheck {
    fn category(&self) -> Category {
        Category::PrincipleViolation
    }

    fn run(&self, corpus: &Corpus) -> Vec<Violation> {
        let spec_terms: Vec<BTreeSet<String>> = corpus
            .spec_items()
            .iter()
            .map(|s| key_terms(&s.text))
            .collect();

        let mut evidence = Vec::new();
        let mut line_numbers = Vec::new();
        let mut seen: BTreeSet<(StatementId, StatementId)> = BTreeSet::new();

        for principle in corpus.principles() {
            match principle.polarity {
                Some(Polarity::Prohibitive) => {
                    let terms = prohibited_terms(principle);
                    for spec in corpus.spec_items() {
                        let normalized = spec.normalized_text();
                        let toks = tokens(&normalized);
                        let hit = terms.iter().find(|t| toks.contains(t.as_str()));
                        if let Some(term) = hit {
                            if seen.insert((principle.id.clone(), spec.id.clone())) {
                                evidence.push(format!(
                                    "prohibitive principle '{}' matched by {} (line {}) on term '{term}'",
                                    snippet(&principle.text, EVIDENCE_WIDTH),
                                    spec.cite(),
                                    spec.line_number,
                                ));
                                line_numbers.push(spec.line_number);
                            }
                        }
                    }
                }
                Some(Polarity::Mandatory) => {
                    let terms = key_terms(&principle.text);
                    let best = best_score(&terms, spec_terms.iter());
                    if best < PARTIAL_THRESHOLD {
                        evidence.push(format!(
                            "mandatory principle '{}' (line {}) is not addressed by any specification item",
                            snippet(&principle.text, EVIDENCE_WIDTH),
                            principle.line_number,
                        ));
                        line_numbers.push(principle.line_number);
                    }
                }
                None => {}
            }
        }

        if evidence.is_empty() {
            return Vec::new();
        }
        vec![Violation::new(
            Severity::Critical,
            Category::PrincipleViolation,
            format!("{} principle violation(s) detected", evidence.len()),
            "Mandatory principles have been violated or ignored:",
            evidence,
            line_numbers,
        )]
    }
}
