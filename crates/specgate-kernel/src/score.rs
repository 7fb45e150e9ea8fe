//! Term-overlap similarity shared by the coverage-style checks.
//!
//! Scores are Jaccard over stop-word-stripped token sets. The thresholds
//! are tunable reconstructions, not contracts; they only need to be
//! stable within a release so verdicts are reproducible.

use std::collections::BTreeSet;

/// Best score at or above which a requirement counts as covered.
pub const COVERED_THRESHOLD: f64 = 0.5;

/// Best score at or above which a requirement counts as partially
/// covered. Below this it is uncovered (and a spec item below it against
/// every requirement is orphaned).
pub const PARTIAL_THRESHOLD: f64 = 0.15;

/// Tokens shorter than this carry no signal and are dropped.
const MIN_TERM_LEN: usize = 4;

/// Modal/auxiliary words stripped before comparison. Matching on these
/// would make every "must" statement similar to every other.
const STOP_WORDS: [&str; 27] = [
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does",
    "did", "will", "would", "shall", "should", "must", "may", "can", "could", "not", "that",
    "this", "with",
];

/// Extract the comparable key terms of a statement: lower-cased word
/// tokens, stop words and short tokens removed.
pub fn key_terms(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|w| w.len() >= MIN_TERM_LEN && !STOP_WORDS.contains(&w.as_str()))
        .collect()
}

/// Jaccard similarity of two key-term sets. Empty sets score 0.0 —
/// a statement with no comparable terms matches nothing.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Best Jaccard score of `terms` against each candidate term set.
pub fn best_score<'a, I>(terms: &BTreeSet<String>, candidates: I) -> f64
where
    I: IntoIterator<Item = &'a BTreeSet<String>>,
{
    candidates
        .into_iter()
        .map(|c| jaccard(terms, c))
        .fold(0.0_f64, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_terms_strip_stop_words_and_short_tokens() {
        let terms = key_terms("Users must be able to reset their password via email");
        assert!(terms.contains("users"));
        assert!(terms.contains("reset"));
        assert!(terms.contains("password"));
        assert!(terms.contains("email"));
        assert!(!terms.contains("must"));
        assert!(!terms.contains("be"));
        assert!(!terms.contains("via"));
    }

    #[test]
    fn identical_normalized_text_scores_one() {
        let a = key_terms("Users must reset their password via email");
        let b = key_terms("users must reset their password via email");
        assert_eq!(jaccard(&a, &b), 1.0);
    }

    #[test]
    fn disjoint_text_scores_zero() {
        let a = key_terms("password reset over email");
        let b = key_terms("admin dashboard cryptocurrency payment");
        assert_eq!(jaccard(&a, &b), 0.0);
    }

    #[test]
    fn empty_terms_score_zero() {
        let empty = BTreeSet::new();
        let b = key_terms("password reset");
        assert_eq!(jaccard(&empty, &b), 0.0);
        assert_eq!(jaccard(&b, &empty), 0.0);
    }

    #[test]
    fn partial_overlap_lands_between() {
        let a = key_terms("users reset password email");
        let b = key_terms("password policy rules email server");
        let score = jaccard(&a, &b);
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn best_score_picks_maximum() {
        let req = key_terms("password reset email");
        let far = key_terms("inventory report export");
        let near = key_terms("password reset email flow");
        let best = best_score(&req, [&far, &near]);
        assert!(best >= COVERED_THRESHOLD);
    }
}
