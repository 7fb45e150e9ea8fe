//! The atomic extracted unit: a typed statement with a deterministic id.
//!
//! Statement ids are content hashes, not counters. Re-running on
//! identical input reproduces identical ids, which keeps violation sets
//! byte-identical across runs.

use crate::document::DocumentKind;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// What kind of statement was extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A stakeholder/system need, sourced from input documents.
    Requirement,
    /// A guiding constraint, sourced from input documents.
    Principle,
    /// A statement from the document under verification.
    SpecificationItem,
}

impl Role {
    /// The id prefix for statements of this role.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Role::Requirement => "REQ_",
            Role::Principle => "PRIN_",
            Role::SpecificationItem => "SPEC_",
        }
    }
}

/// Whether a principle demands or forbids something.
///
/// Derived from lexical cues at extraction time. Only principles carry
/// a polarity; requirements and specification items do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Mandatory,
    Prohibitive,
}

/// A deterministic, content-addressed statement id.
///
/// Two statements with the same normalized text, role, and source path
/// hash to the same id. The corpus deduplicates on insert, so ids are
/// unique within a run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatementId(pub String);

impl StatementId {
    /// Derive an id from the statement's identity-bearing fields.
    ///
    /// Line numbers are excluded: moving a statement within its source
    /// document must not change its id.
    pub fn derive(role: Role, normalized_text: &str, source: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(role.id_prefix().as_bytes());
        hasher.update(b"\n");
        hasher.update(normalized_text.as_bytes());
        hasher.update(b"\n");
        hasher.update(source.as_bytes());
        let digest = hasher.finalize();
        let hex = format!("{digest:x}");
        Self(format!("{}{}", role.id_prefix(), &hex[..16]))
    }
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One extracted statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    /// Deterministic content hash, unique within a run.
    pub id: StatementId,

    /// Captured statement content, trimmed and marker-stripped.
    pub text: String,

    /// Path of the originating document.
    pub source: PathBuf,

    /// Whether the source was an input document or the specification.
    pub kind: DocumentKind,

    /// 1-based line in the source document.
    pub line_number: usize,

    /// Requirement, principle, or specification item.
    pub role: Role,

    /// Set for principles only.
    pub polarity: Option<Polarity>,

    /// Explicit marker label when one was present (`REQ-001`, `SPEC-040`).
    pub label: Option<String>,

    /// `REQ-xxx` back-references found on the line (specification items).
    pub addresses: BTreeSet<String>,
}

impl Statement {
    /// The label a report should cite for this statement: the explicit
    /// marker when the author wrote one, otherwise the derived id.
    pub fn cite(&self) -> &str {
        match &self.label {
            Some(label) => label,
            None => &self.id.0,
        }
    }

    /// Lower-cased text used for id derivation and term matching.
    pub fn normalized_text(&self) -> String {
        normalize(&self.text)
    }
}

/// Normalize text for hashing and comparison: lower-case, collapse
/// whitespace runs to single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
