//! Small lexical helpers shared by the keyword-driven checks.
//!
//! Single-word terms match whole tokens only ("log" never matches
//! "login"); multi-word terms match as normalized substrings.

use std::collections::BTreeSet;

/// Word tokens of already-normalized text.
pub(crate) fn tokens(normalized: &str) -> BTreeSet<&str> {
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Whether normalized text contains a term, token-wise for single
/// words, substring-wise for phrases.
pub(crate) fn has_term(normalized: &str, toks: &BTreeSet<&str>, term: &str) -> bool {
    if term.contains(' ') {
        normalized.contains(term)
    } else {
        toks.contains(term)
    }
}

/// Shorten evidence text to a readable width on a character boundary.
pub(crate) fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_words_match_tokens_only() {
        let text = "the login page logs users in";
        let toks = tokens(text);
        assert!(has_term(text, &toks, "login"));
        assert!(has_term(text, &toks, "logs"));
        assert!(!has_term(text, &toks, "log"));
    }

    #[test]
    fn phrases_match_substrings() {
        let text = "retries happen as needed during sign in";
        let toks = tokens(text);
        assert!(has_term(text, &toks, "as needed"));
        assert!(has_term(text, &toks, "sign in"));
        assert!(!has_term(text, &toks, "sign out"));
    }

    #[test]
    fn snippet_truncates_long_text() {
        assert_eq!(snippet("short", 10), "short");
        let long = "x".repeat(30);
        let cut = snippet(&long, 10);
        assert!(cut.ends_with("..."));
        assert!(cut.len() < long.len());
    }
}
