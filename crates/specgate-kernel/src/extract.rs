//! Statement extraction: prioritized pattern rules over document lines.
//!
//! Each line (or folded bullet paragraph) is tried against the matchers
//! in priority order and extracted at most once, under its
//! highest-priority match:
//!
//! 1. Explicit ID markers (`REQ-001:`, `SPEC-040:`, `PRINCIPLE:` /
//!    `RULE:` / `GUIDELINE:`) — highest confidence.
//! 2. Modal sentences (`must`, `shall`, `required`, `mandatory`).
//! 3. Non-trivial bulleted or numbered list items — lowest confidence.
//!
//! Lines matching nothing are silently skipped. Extraction is total:
//! nothing here returns an error once the extractor is built.

use crate::document::{Document, DocumentKind};
use crate::statement::{Polarity, Role, Statement, StatementId, normalize};
use regex::Regex;
use std::collections::BTreeSet;

/// Units with fewer whitespace tokens than this are noise.
const MIN_TOKENS: usize = 3;

/// Lexical cues marking a principle as prohibitive rather than mandatory.
const NEGATION_CUES: [&str; 7] = [
    "must not",
    "shall not",
    "shall never",
    "must never",
    "cannot",
    "is prohibited",
    "prohibited",
];

/// The compiled matcher table. Built once per run; patterns are static
/// but compile errors still propagate rather than panic.
pub struct Extractor {
    marker_req: Regex,
    marker_spec: Regex,
    marker_principle: Regex,
    modal: Regex,
    bullet: Regex,
    addresses: Regex,
    table_separator: Regex,
}

struct Unit {
    line_number: usize,
    text: String,
}

/// What a marker matcher produced: the citation label (if the marker
/// carries an ID) and the remainder-of-line content.
struct MarkerHit {
    label: Option<String>,
    content: String,
    is_principle: bool,
}

impl Extractor {
    pub fn new() -> Result<Self, crate::error::SpecgateError> {
        Ok(Self {
            marker_req: Regex::new(r"(?i)^REQ-(\d+)\s*:?\s*(.*)$")?,
            marker_spec: Regex::new(r"(?i)^SPEC-(\d+)\s*:?\s*(.*)$")?,
            marker_principle: Regex::new(r"(?i)^(?:PRINCIPLE|RULE|GUIDELINE)\s*:\s*(.*)$")?,
            modal: Regex::new(r"(?i)\b(?:must|shall|required|mandatory)\b")?,
            bullet: Regex::new(r"^(?:[-*]|\d+\.)\s+(.+)$")?,
            addresses: Regex::new(r"(?i)\bREQ[-_]\d+\b")?,
            table_separator: Regex::new(r"^\|?[\s|:\-]+\|?$")?,
        })
    }

    /// Extract every statement from one document, in source order.
    pub fn extract(&self, doc: &Document) -> Vec<Statement> {
        let source = doc.path.to_string_lossy().into_owned();
        let mut statements = Vec::new();

        for unit in self.fold_units(&doc.raw_text) {
            let trimmed = unit.text.trim();
            if self.is_structural(trimmed) {
                continue;
            }
            if trimmed.split_whitespace().count() < MIN_TOKENS {
                continue;
            }
            if let Some(stmt) = self.match_unit(trimmed, unit.line_number, doc.kind, &source) {
                statements.push(stmt);
            }
        }
        statements
    }

    /// Fold wrapped bullet continuations into their opening line so a
    /// statement split across lines is captured as one paragraph.
    fn fold_units(&self, text: &str) -> Vec<Unit> {
        let mut units: Vec<Unit> = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line_number = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let indented = raw.starts_with(' ') || raw.starts_with('\t');
            let opens_new = self.bullet.is_match(trimmed)
                || self.marker_req.is_match(trimmed)
                || self.marker_spec.is_match(trimmed)
                || self.marker_principle.is_match(trimmed);
            if indented && !opens_new {
                if let Some(last) = units.last_mut() {
                    last.text.push(' ');
                    last.text.push_str(trimmed);
                    continue;
                }
            }
            units.push(Unit {
                line_number,
                text: trimmed.to_string(),
            });
        }
        units
    }

    /// Structural markers that never carry statements: headings, table
    /// separator rows, horizontal rules.
    fn is_structural(&self, line: &str) -> bool {
        if line.starts_with('#') {
            return true;
        }
        if line.starts_with('|') && self.table_separator.is_match(line) {
            return true;
        }
        let rule = line.len() >= 3
            && (line.chars().all(|c| c == '=') || line.chars().all(|c| c == '-'));
        rule
    }

    fn match_unit(
        &self,
        line: &str,
        line_number: usize,
        kind: DocumentKind,
        source: &str,
    ) -> Option<Statement> {
        // ID markers win even when written as list items.
        let (content, was_bullet) = match self.bullet.captures(line) {
            Some(caps) => (caps.get(1).map_or("", |m| m.as_str()).trim(), true),
            None => (line, false),
        };

        let (text, label, marked_principle) = if let Some(hit) = self.match_marker(content) {
            if hit.content.is_empty() {
                return None;
            }
            (hit.content, hit.label, hit.is_principle)
        } else if self.modal.is_match(content) {
            (content.to_string(), None, false)
        } else if was_bullet && content.split_whitespace().count() >= MIN_TOKENS {
            (content.to_string(), None, false)
        } else {
            return None;
        };

        let text = trim_statement_text(&text);
        if text.is_empty() {
            return None;
        }

        let role = match kind {
            DocumentKind::Specification => Role::SpecificationItem,
            DocumentKind::Input if marked_principle => Role::Principle,
            DocumentKind::Input => Role::Requirement,
        };

        let polarity = (role == Role::Principle).then(|| {
            let lowered = normalize(line);
            if NEGATION_CUES.iter().any(|cue| lowered.contains(cue)) {
                Polarity::Prohibitive
            } else {
                Polarity::Mandatory
            }
        });

        let addresses = if role == Role::SpecificationItem {
            self.back_references(line, label.as_deref())
        } else {
            BTreeSet::new()
        };

        let id = StatementId::derive(role, &normalize(&text), source);
        Some(Statement {
            id,
            text,
            source: source.into(),
            kind,
            line_number,
            role,
            polarity,
            label,
            addresses,
        })
    }

    fn match_marker(&self, content: &str) -> Option<MarkerHit> {
        if let Some(caps) = self.marker_req.captures(content) {
            return Some(MarkerHit {
                label: Some(format!("REQ-{}", &caps[1])),
                content: caps[2].trim().to_string(),
                is_principle: false,
            });
        }
        if let Some(caps) = self.marker_spec.captures(content) {
            return Some(MarkerHit {
                label: Some(format!("SPEC-{}", &caps[1])),
                content: caps[2].trim().to_string(),
                is_principle: false,
            });
        }
        if let Some(caps) = self.marker_principle.captures(content) {
            return Some(MarkerHit {
                label: None,
                content: caps[1].trim().to_string(),
                is_principle: true,
            });
        }
        None
    }

    /// `REQ-xxx` references on a specification line, excluding the
    /// item's own marker label.
    fn back_references(&self, line: &str, own_label: Option<&str>) -> BTreeSet<String> {
        self.addresses
            .find_iter(line)
            .map(|m| m.as_str().to_uppercase().replace('_', "-"))
            .filter(|found| Some(found.as_str()) != own_label)
            .collect()
    }
}

fn trim_statement_text(text: &str) -> String {
    text.trim().trim_end_matches(['.', ';', ',']).trim().to_string()
}
