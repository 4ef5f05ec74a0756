//! Diagnostics reported while parsing
//!
//! The parser never aborts on textual input. Conditions the user has to hear about are
//! collected as [Diagnostic] values and returned next to the document, in line order.
//!
//! ## Kinds
//!
//! 1. **Ungrouped story**: a story-shaped line appears before any heading opened a group.
//!    The story is not filed anywhere; the scan goes on with the next line.
//! 2. **Ungrouped bug**: same, for a `#bug` line.
//!
//! Indented lines with no story to attach to and unrecognized prose are dropped without
//! a diagnostic.

use super::range::Range;
use serde::Serialize;
use std::fmt;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "error"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    UngroupedStory,
    UngroupedBug,
}

impl DiagnosticKind {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::UngroupedStory => "ungrouped-story",
            DiagnosticKind::UngroupedBug => "ungrouped-bug",
        }
    }

    pub fn severity(&self) -> DiagnosticSeverity {
        match self {
            DiagnosticKind::UngroupedStory | DiagnosticKind::UngroupedBug => {
                DiagnosticSeverity::Error
            }
        }
    }
}

/// Structured diagnostic tied to one source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: DiagnosticSeverity,
    pub kind: DiagnosticKind,
    pub message: String,
    /// The offending line, trimmed
    pub line: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: Range, line: impl Into<String>) -> Self {
        let message = match kind {
            DiagnosticKind::UngroupedStory => "Ungrouped story found",
            DiagnosticKind::UngroupedBug => "Ungrouped bug found",
        };
        Self {
            range,
            severity: kind.severity(),
            kind,
            message: message.to_string(),
            line: line.into(),
        }
    }

    pub fn ungrouped_story(range: Range, line: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::UngroupedStory, range, line)
    }

    pub fn ungrouped_bug(range: Range, line: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::UngroupedBug, range, line)
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {} at line {}: {}",
            self.severity,
            self.kind.code(),
            self.message,
            self.range.start.line + 1,
            self.line
        )
    }
}

impl std::error::Error for Diagnostic {}
