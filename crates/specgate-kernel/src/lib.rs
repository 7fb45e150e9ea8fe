//! # Specgate Kernel
//!
//! The extraction half of the verification pipeline: load a document
//! corpus, extract typed statements from each document, and assemble the
//! read-only [`Corpus`] that every verification check consumes.
//!
//! ## Architecture
//!
//! ```text
//! Document            ← (path, kind, raw text), loaded once, immutable
//!     │
//! Extractor           ← prioritized pattern rules, first match wins
//!     │
//! Statement           ← typed unit: Requirement | Principle | SpecificationItem
//!     │
//! Corpus              ← deduplicated statement sets + id index, frozen
//! ```
//!
//! The kernel is deliberately heuristic: extraction and scoring are
//! regex/term-overlap based, with no semantic understanding. Precision is
//! traded for explainability and reproducibility — identical inputs
//! produce identical statement ids and identical corpora.

pub mod corpus;
pub mod document;
pub mod error;
pub mod extract;
pub mod score;
pub mod statement;

pub use corpus::Corpus;
pub use document::{Document, DocumentKind, load_input_root, load_specification};
pub use error::SpecgateError;
pub use extract::Extractor;
pub use score::{COVERED_THRESHOLD, PARTIAL_THRESHOLD, best_score, jaccard, key_terms};
pub use statement::{Polarity, Role, Statement, StatementId, normalize};
