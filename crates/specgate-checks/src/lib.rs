//! # Specgate Checks
//!
//! The verification battery: independent, composable analyzers that
//! each read the frozen [`Corpus`] and emit aggregated [`Violation`]s,
//! plus the orchestrator that runs them in a fixed order and the report
//! renderers.
//!
//! Adding a check means implementing [`Check`] and registering it in
//! [`default_checks`]; the orchestrator and renderers need no changes.

pub mod ambiguity;
pub mod completeness;
pub mod consistency;
pub mod contradiction;
pub mod coverage;
mod lexicon;
pub mod principle;
pub mod report;
pub mod scope_creep;
pub mod testability;
pub mod vagueness;
pub mod verifier;
pub mod violation;

pub use ambiguity::AmbiguityCheck;
pub use completeness::CompletenessCheck;
pub use consistency::ConsistencyCheck;
pub use contradiction::ContradictionCheck;
pub use coverage::{CoverageCheck, CoverageClass, classify};
pub use principle::PrincipleViolationCheck;
pub use report::{render_json, render_text, write_output};
pub use scope_creep::ScopeCreepCheck;
pub use testability::TestabilityCheck;
pub use vagueness::VaguenessCheck;
pub use verifier::{Counts, VerificationReport, Verdict, run_checks, verify};
pub use violation::{Category, Severity, Violation};

use specgate_kernel::Corpus;

/// Character width evidence snippets are trimmed to.
pub(crate) const EVIDENCE_WIDTH: usize = 100;

/// One verification analyzer.
///
/// Checks are pure functions of the corpus: no shared state, no I/O.
/// A check emits at most one aggregated violation per severity bucket,
/// with every finding nested in that violation's evidence list.
pub trait Check {
    fn category(&self) -> Category;
    fn run(&self, corpus: &Corpus) -> Vec<Violation>;
}

/// The registry, in the fixed execution order the report is built in.
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(CoverageCheck),
        Box::new(PrincipleViolationCheck),
        Box::new(ContradictionCheck),
        Box::new(ScopeCreepCheck),
        Box::new(CompletenessCheck),
        Box::new(AmbiguityCheck),
        Box::new(TestabilityCheck),
        Box::new(VaguenessCheck),
        Box::new(ConsistencyCheck),
    ]
}
