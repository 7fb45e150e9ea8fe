//! The corpus model: every extracted statement, indexed, frozen after
//! the extraction phase. Checks read it; nothing writes it afterwards.

use crate::statement::{Role, Statement, StatementId};
use std::collections::BTreeMap;

/// Aggregated statement sets for one verification run.
///
/// Insertion order is preserved per role so reports are deterministic.
/// Inserting a statement whose id is already present is a no-op:
/// identical text from the same source is one statement.
#[derive(Debug, Default)]
pub struct Corpus {
    requirements: Vec<Statement>,
    principles: Vec<Statement>,
    spec_items: Vec<Statement>,
    index: BTreeMap<StatementId, Role>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one extracted statement, deduplicating by id.
    pub fn add(&mut self, statement: Statement) {
        if self.index.contains_key(&statement.id) {
            return;
        }
        self.index.insert(statement.id.clone(), statement.role);
        match statement.role {
            Role::Requirement => self.requirements.push(statement),
            Role::Principle => self.principles.push(statement),
            Role::SpecificationItem => self.spec_items.push(statement),
        }
    }

    /// Add every statement from one extraction pass.
    pub fn extend(&mut self, statements: Vec<Statement>) {
        for statement in statements {
            self.add(statement);
        }
    }

    pub fn requirements(&self) -> &[Statement] {
        &self.requirements
    }

    pub fn principles(&self) -> &[Statement] {
        &self.principles
    }

    pub fn spec_items(&self) -> &[Statement] {
        &self.spec_items
    }

    /// Look up any statement by id, across all roles.
    pub fn by_id(&self, id: &StatementId) -> Option<&Statement> {
        let role = self.index.get(id)?;
        let bucket = match role {
            Role::Requirement => &self.requirements,
            Role::Principle => &self.principles,
            Role::SpecificationItem => &self.spec_items,
        };
        bucket.iter().find(|s| &s.id == id)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentKind;
    use crate::statement::normalize;
    use std::collections::BTreeSet;

    fn statement(role: Role, text: &str, line: usize) -> Statement {
        Statement {
            id: StatementId::derive(role, &normalize(text), "test.md"),
            text: text.to_string(),
            source: "test.md".into(),
            kind: DocumentKind::Input,
            line_number: line,
            role,
            polarity: None,
            label: None,
            addresses: BTreeSet::new(),
        }
    }

    #[test]
    fn buckets_by_role_and_preserves_order() {
        let mut corpus = Corpus::new();
        corpus.add(statement(Role::Requirement, "first requirement here", 1));
        corpus.add(statement(Role::SpecificationItem, "one spec item", 2));
        corpus.add(statement(Role::Requirement, "second requirement here", 3));

        assert_eq!(corpus.requirements().len(), 2);
        assert_eq!(corpus.spec_items().len(), 1);
        assert_eq!(corpus.principles().len(), 0);
        assert_eq!(corpus.requirements()[0].line_number, 1);
        assert_eq!(corpus.requirements()[1].line_number, 3);
    }

    #[test]
    fn duplicate_ids_collapse_to_one_statement() {
        let mut corpus = Corpus::new();
        corpus.add(statement(Role::Requirement, "same requirement text", 1));
        corpus.add(statement(Role::Requirement, "same requirement text", 9));

        assert_eq!(corpus.requirements().len(), 1);
        // First occurrence wins.
        assert_eq!(corpus.requirements()[0].line_number, 1);
    }

    #[test]
    fn by_id_resolves_across_roles() {
        let mut corpus = Corpus::new();
        let stmt = statement(Role::Principle, "never store plaintext passwords", 4);
        let id = stmt.id.clone();
        corpus.add(stmt);

        let found = corpus.by_id(&id).unwrap();
        assert_eq!(found.role, Role::Principle);
        assert!(corpus.by_id(&StatementId("REQ_missing".into())).is_none());
    }
}
