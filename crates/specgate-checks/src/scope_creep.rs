//! Scope creep: specification items with no traceable originating
//! requirement.

use crate::lexicon::snippet;
use crate::violation::{Category, Severity, Violation};
use crate::{Check, EVIDENCE_WIDTH};
use specgate_kernel::{Corpus, PARTIAL_THRESHOLD, best_score, key_terms};
use std::collections::BTreeSet;

pub struct ScopeCreepCheck;

impl Check for ScopeCreepCheck {
    fn category(&self) -> Category {
        Category::ScopeCreep
    }

    fn run(&self, corpus: &Corpus) -> Vec<Violation> {
        let requirement_terms: Vec<BTreeSet<String>> = corpus
            .requirements()
            .iter()
            .map(|r| key_terms(&r.text))
            .collect();

        let mut evidence = Vec::new();
        let mut line_numbers = Vec::new();
        for spec in corpus.spec_items() {
            // An explicit back-reference is traceability enough.
            if !spec.addresses.is_empty() {
                continue;
            }
            let terms = key_terms(&spec.text);
            if best_score(&terms, requirement_terms.iter()) < PARTIAL_THRESHOLD {
                evidence.push(format!(
                    "{} (line {}): {}",
                    spec.cite(),
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
            Severity::High,
            Category::ScopeCreep,
            format!(
                "{} specification item(s) appear to be out of scope",
                evidence.len()
            ),
            "These specification items do not trace to any input requirement:",
            evidence,
            line_numbers,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{input_statement, spec_statement};

    #[test]
    fn orphaned_item_is_flagged() {
        let mut corpus = Corpus::new();
        corpus.add(input_statement("Users must reset their password via email", 1));
        let mut orphan = spec_statement("Admin dashboard with cryptocurrency payment support", 90);
        orphan.label = Some("SPEC-090".to_string());
        corpus.add(orphan);

        let violations = ScopeCreepCheck.run(&corpus);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::High);
        assert!(violations[0].evidence[0].contains("SPEC-090"));
        assert_eq!(violations[0].line_numbers, vec![90]);
    }

    #[test]
    fn back_reference_exempts_an_item() {
        let mut corpus = Corpus::new();
        corpus.add(input_statement("Users must reset their password via email", 1));
        let mut spec = spec_statement("Admin dashboard with cryptocurrency payment support", 90);
        spec.addresses.insert("REQ-001".to_string());
        corpus.add(spec);

        assert!(ScopeCreepCheck.run(&corpus).is_empty());
    }

    #[test]
    fn traced_item_is_not_flagged() {
        let mut corpus = Corpus::new();
        corpus.add(input_statement("Users must reset their password via email", 1));
        corpus.add(spec_statement(
            "Password reset links arrive via email and expire",
            12,
        ));

        assert!(ScopeCreepCheck.run(&corpus).is_empty());
    }

    #[test]
    fn removing_orphans_never_creates_new_ones() {
        let mut corpus = Corpus::new();
        corpus.add(input_statement("Users must reset their password via email", 1));
        corpus.add(spec_statement(
            "Password reset links arrive via email and expire",
            12,
        ));
        corpus.add(spec_statement("Admin dashboard with cryptocurrency payments", 90));

        let before = ScopeCreepCheck.run(&corpus);
        assert_eq!(before.len(), 1);

        // Re-run with the orphan removed: the surviving item stays clean.
        let mut fixed = Corpus::new();
        fixed.add(input_statement("Users must reset their password via email", 1));
        fixed.add(spec_statement(
            "Password reset links arrive via email and expire",
            12,
        ));
        assert!(ScopeCreepCheck.run(&fixed).is_empty());
    }
}
