//! Requirement coverage: does the specification address every
//! requirement?

use crate::lexicon::snippet;
use crate::violation::{Category, Severity, Violation};
use crate::{Check, EVIDENCE_WIDTH};
use specgate_kernel::{COVERED_THRESHOLD, Corpus, PARTIAL_THRESHOLD, Statement, best_score, key_terms};
use std::collections::BTreeSet;

/// Where one requirement landed. The partition is disjoint and
/// exhaustive: every requirement is in exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageClass {
    Covered,
    PartiallyCovered,
    Uncovered,
}

/// Classify one requirement against the full set of spec-item term sets.
/// With zero specification items every requirement is uncovered.
pub fn classify(requirement: &Statement, spec_terms: &[BTreeSet<String>]) -> CoverageClass {
    let terms = key_terms(&requirement.text);
    let best = best_score(&terms, spec_terms.iter());
    if best >= COVERED_THRESHOLD {
        CoverageClass::Covered
    } else if best >= PARTIAL_THRESHOLD {
        CoverageClass::PartiallyCovered
    } else {
        CoverageClass::Uncovered
    }
}

pub struct CoverageCheck;

impl Check for CoverageCheck {
    fn category(&self) -> Category {
        Category::Coverage
    }

    fn run(&self, corpus: &Corpus) -> Vec<Violation> {
        let spec_terms: Vec<BTreeSet<String>> = corpus
            .spec_items()
            .iter()
            .map(|s| key_terms(&s.text))
            .collect();

        let mut uncovered = Vec::new();
        let mut partial = Vec::new();
        for req in corpus.requirements() {
            match classify(req, &spec_terms) {
                CoverageClass::Covered => {}
                CoverageClass::PartiallyCovered => partial.push(req),
                CoverageClass::Uncovered => uncovered.push(req),
            }
        }

        let mut violations = Vec::new();
        if !uncovered.is_empty() {
            violations.push(Violation::new(
                Severity::Critical,
                Category::Coverage,
                format!(
                    "{} requirement(s) have no coverage in the specification",
                    uncovered.len()
                ),
                "These requirements are completely missing from the specification:",
                uncovered.iter().map(|r| cite_requirement(r)).collect(),
                uncovered.iter().map(|r| r.line_number).collect(),
            ));
        }
        if !partial.is_empty() {
            violations.push(Violation::new(
                Severity::High,
                Category::Coverage,
                format!(
                    "{} requirement(s) have only partial coverage",
                    partial.len()
                ),
                "These requirements are only partially addressed:",
                partial.iter().map(|r| cite_requirement(r)).collect(),
                partial.iter().map(|r| r.line_number).collect(),
            ));
        }
        violations
    }
}

fn cite_requirement(req: &Statement) -> String {
    format!(
        "{} [{}] (line {}): {}",
        req.cite(),
        req.source.display(),
        req.line_number,
        snippet(&req.text, EVIDENCE_WIDTH)
    )
}
