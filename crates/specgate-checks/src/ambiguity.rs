//! Ambiguity: subjective qualifiers that defer decisions to the reader.

use crate::lexicon::{has_term, snippet, tokens};
use crate::violation::{Category, Severity, Violation};
use crate::{Check, EVIDENCE_WIDTH};
use specgate_kernel::Corpus;

/// Fixed vague-qualifier list. Lower-cased; single words match tokens,
/// phrases match substrings.
const VAGUE_QUALIFIERS: [&str; 21] = [
    "appropriate",
    "reasonable",
    "adequate",
    "sufficient",
    "as needed",
    "if possible",
    "etc",
    "and so on",
    "various",
    "several",
    "many",
    "few",
    "fast",
    "slow",
    "efficient",
    "might",
    "could",
    "possibly",
    "probably",
    "tbd",
    "todo",
];

pub struct AmbiguityCheck;

impl Check for AmbiguityCheck {
    fn category(&self) -> Category {
        Category::Ambiguity
    }

    fn run(&self, corpus: &Corpus) -> Vec<Violation> {
        let mut evidence = Vec::new();
        let mut line_numbers = Vec::new();

        for spec in corpus.spec_items() {
            let normalized = spec.normalized_text();
            let toks = tokens(&normalized);
            let found: Vec<&str> = VAGUE_QUALIFIERS
                .iter()
                .copied()
                .filter(|q| has_term(&normalized, &toks, q))
                .collect();
            if !found.is_empty() {
                evidence.push(format!(
                    "line {}: '{}' (contains: {})",
                    spec.line_number,
                    snippet(&spec.text, EVIDENCE_WIDTH),
                    found.join(", "),
                ));
                line_numbers.push(spec.line_number);
            }
        }

        if evidence.is_empty() {
            return Vec::new();
        }
        vec![Violation::new(
            Severity::Medium,
            Category::Ambiguity,
            format!("{} ambiguous specification item(s)", evidence.len()),
            "These specification items contain vague or subjective language:",
            evidence,
            line_numbers,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::spec_statement;

    #[test]
    fn subjective_qualifiers_are_flagged_and_named() {
        let mut corpus = Corpus::new();
        corpus.add(spec_statement("the filtering should be fast and efficient", 14));

        let violations = AmbiguityCheck.run(&corpus);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Medium);
        assert!(violations[0].evidence[0].contains("fast"));
        assert!(violations[0].evidence[0].contains("efficient"));
        assert_eq!(violations[0].line_numbers, vec![14]);
    }

    #[test]
    fn phrase_qualifiers_match_across_words() {
        let mut corpus = Corpus::new();
        corpus.add(spec_statement("Caches are refreshed as needed", 3));

        let violations = AmbiguityCheck.run(&corpus);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].evidence[0].contains("as needed"));
    }

    #[test]
    fn concrete_items_pass() {
        let mut corpus = Corpus::new();
        corpus.add(spec_statement("Search returns within 200 milliseconds", 3));

        assert!(AmbiguityCheck.run(&corpus).is_empty());
    }
}
