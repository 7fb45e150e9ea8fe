//! Consistency: mixed terminology for the same concept.

use crate::lexicon::{has_term, tokens};
use crate::violation::{Category, Severity, Violation};
use crate::Check;
use specgate_kernel::Corpus;

/// Synonym groups: `(canonical name, surface variants)` per concept.
/// Using terms from more than one concept of a group in the same
/// specification reads as two different things.
const SYNONYM_GROUPS: [&[(&str, &[&str])]; 4] = [
    &[
        ("user", &["user", "users"]),
        ("customer", &["customer", "customers"]),
        ("client", &["client", "clients"]),
    ],
    &[
        ("login", &["login", "logins"]),
        ("sign in", &["sign in", "signs in"]),
        ("authenticate", &["authenticate", "authenticates", "authentication"]),
    ],
    &[
        ("api", &["api", "apis"]),
        ("service", &["service", "services"]),
        ("endpoint", &["endpoint", "endpoints"]),
    ],
    &[
        ("database", &["database", "databases"]),
        ("data store", &["data store", "data stores"]),
        ("repository", &["repository", "repositories"]),
    ],
];

pub struct ConsistencyCheck;

impl Check for ConsistencyCheck {
    fn category(&self) -> Category {
        Category::Consistency
    }

    fn run(&self, corpus: &Corpus) -> Vec<Violation> {
        // One combined haystack: the mixing matters document-wide, not
        // per item.
        let combined = corpus
            .spec_items()
            .iter()
            .map(|s| s.normalized_text())
            .collect::<Vec<_>>()
            .join(" ");
        let toks = tokens(&combined);

        let mut evidence = Vec::new();
        for group in SYNONYM_GROUPS {
            let found: Vec<&str> = group
                .iter()
                .filter(|(_, variants)| {
                    variants.iter().any(|v| has_term(&combined, &toks, v))
                })
                .map(|(name, _)| *name)
                .collect();
            if found.len() > 1 {
                evidence.push(format!("inconsistent terminology: {}", found.join(" vs ")));
            }
        }

        if evidence.is_empty() {
            return Vec::new();
        }
        vec![Violation::new(
            Severity::Low,
            Category::Consistency,
            format!("{} mixed-terminology group(s)", evidence.len()),
            "The specification mixes terms for the same concept:",
            evidence,
            Vec::new(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::spec_statement;

    #[test]
    fn mixed_terms_within_a_group_are_flagged() {
        let mut corpus = Corpus::new();
        corpus.add(spec_statement("The user updates a saved address", 1));
        corpus.add(spec_statement("The customer record keeps past orders", 2));

        let violations = ConsistencyCheck.run(&corpus);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Low);
        assert!(violations[0].evidence[0].contains("user vs customer"));
    }

    #[test]
    fn one_entry_per_mixed_group() {
        let mut corpus = Corpus::new();
        corpus.add(spec_statement("Users login through the api gateway", 1));
        corpus.add(spec_statement("Customers sign in against the billing endpoint", 2));

        let violations = ConsistencyCheck.run(&corpus);
        assert_eq!(violations.len(), 1);
        // user/customer, login/sign in, api/endpoint all mixed.
        assert_eq!(violations[0].evidence.len(), 3);
    }

    #[test]
    fn plural_and_singular_are_one_concept() {
        let mut corpus = Corpus::new();
        corpus.add(spec_statement("The user saves an address", 1));
        corpus.add(spec_statement("Users remove stale addresses", 2));

        assert!(ConsistencyCheck.run(&corpus).is_empty());
    }

    #[test]
    fn single_sided_usage_is_fine() {
        let mut corpus = Corpus::new();
        corpus.add(spec_statement("The user saves an address", 1));
        corpus.add(spec_statement("The user removes an address", 2));

        assert!(ConsistencyCheck.run(&corpus).is_empty());
    }
}
