//! Report rendering: structured text or a bare JSON violation array.

use crate::verifier::{VerificationReport, Verdict};
use crate::violation::Severity;
use specgate_kernel::SpecgateError;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const BANNER: &str =
    "================================================================================";

/// Render the full plain-text report: summary, severity histogram,
/// detailed violations, verdict banner.
pub fn render_text(report: &VerificationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "SPECIFICATION VERIFICATION REPORT");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out);
    let _ = writeln!(out, "SUMMARY");
    let _ = writeln!(out, "  Requirements analyzed: {}", report.counts.requirements);
    let _ = writeln!(out, "  Principles checked:    {}", report.counts.principles);
    let _ = writeln!(out, "  Specification items:   {}", report.counts.spec_items);
    let _ = writeln!(out, "  Violations found:      {}", report.violations.len());
    let _ = writeln!(out);

    let _ = writeln!(out, "VIOLATIONS BY SEVERITY");
    for severity in Severity::ALL {
        let count = report.count_by_severity(severity);
        if count > 0 {
            let _ = writeln!(out, "  {severity}: {count}");
        }
    }
    if report.violations.is_empty() {
        let _ = writeln!(out, "  (none)");
    }

    for violation in &report.violations {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "[{}] {}: {}",
            violation.severity, violation.category, violation.title
        );
        let _ = writeln!(out, "  {}", violation.description);
        if !violation.evidence.is_empty() {
            let _ = writeln!(out, "  Evidence:");
            for entry in &violation.evidence {
                let _ = writeln!(out, "    - {entry}");
            }
        }
        if !violation.line_numbers.is_empty() {
            let lines: Vec<String> = violation
                .line_numbers
                .iter()
                .map(usize::to_string)
                .collect();
            let _ = writeln!(out, "  Lines: {}", lines.join(", "));
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{BANNER}");
    let verdict_line = match report.verdict {
        Verdict::Fail => format!(
            "VERDICT: FAIL - {} CRITICAL violation(s) must be resolved",
            report.count_by_severity(Severity::Critical)
        ),
        Verdict::Pass => "VERDICT: PASS - no CRITICAL violations".to_string(),
    };
    let _ = writeln!(out, "{verdict_line}");
    let _ = writeln!(out, "{BANNER}");
    out
}

/// Render the JSON mode payload: an array of violation objects, no
/// wrapping object and no summary metadata.
pub fn render_json(report: &VerificationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&report.violations)
}

/// Write rendered output to a file (plain overwrite) or stdout.
pub fn write_output(destination: Option<&Path>, content: &str) -> Result<(), SpecgateError> {
    match destination {
        Some(path) => fs::write(path, content).map_err(|source| SpecgateError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
