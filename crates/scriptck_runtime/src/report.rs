//! Report rendering.

use std::fmt::Write;

use scriptck_engine::CheckReport;
use serde::Serialize;

/// Renders a finished run.
pub trait ReportFormatter {
    /// Renders `report` for the script named `source`.
    fn render(&self, source: &str, report: &CheckReport) -> String;
}

// =============================================================================
// Human-Readable Report
// =============================================================================

/// Plain-text report: one line per error, then the word counts.
///
/// ```text
/// ERROR: Page: 1 Line: 3 Error: Character not in DP: Ghost
/// Character word count.
/// Char: Hamlet - 42
/// ```
#[derive(Clone, Debug, Default)]
pub struct HumanReport {
    /// Print a `==> source <==` header first.
    pub show_source: bool,
}

impl HumanReport {
    /// Creates a new human report formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to print the source header.
    #[must_use]
    pub fn with_source(mut self) -> Self {
        self.show_source = true;
        self
    }
}

impl ReportFormatter for HumanReport {
    fn render(&self, source: &str, report: &CheckReport) -> String {
        let mut out = String::new();
        if self.show_source {
            let _ = writeln!(out, "==> {source} <==");
        }
        for error in &report.errors {
            let _ = writeln!(out, "{error}");
        }
        out.push_str("Character word count.\n");
        for (name, count) in &report.word_counts {
            let _ = writeln!(out, "Char: {name} - {count}");
        }
        out
    }
}

// =============================================================================
// JSON Report
// =============================================================================

/// JSON report, one object per script.
#[derive(Clone, Debug, Default)]
pub struct JsonReport {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

impl JsonReport {
    /// Creates a new JSON report formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    source: &'a str,
    clean: bool,
    #[serde(flatten)]
    report: &'a CheckReport,
}

impl ReportFormatter for JsonReport {
    fn render(&self, source: &str, report: &CheckReport) -> String {
        let document = JsonDocument {
            source,
            clean: report.is_clean(),
            report,
        };
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        let mut out = encoded.unwrap_or_default();
        out.push('\n');
        out
    }
}
