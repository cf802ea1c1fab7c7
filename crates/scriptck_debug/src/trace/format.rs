//! Trace output formatters.

use super::record::{TraceEvent, TraceRecord};

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records, one per line.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let prefix = if self.show_ids {
            format!("[{:06}] ", record.id)
        } else {
            String::new()
        };

        let body = match &record.event {
            TraceEvent::TagChecked {
                index,
                kind,
                page,
                line,
                issues,
            } => {
                let mut out = format!("#{index:<5} P{page:03} L{line:03} {kind}");
                for issue in issues {
                    out.push_str("\n    ! ");
                    out.push_str(issue);
                }
                out
            }
            TraceEvent::SpeakerChanged { from, to } => format!("    SPEAKER {from} -> {to}"),
            TraceEvent::RunFinished { tags, errors } => {
                format!("=== FINISHED: {tags} tags, {errors} errors ===")
            }
        };

        format!("{prefix}{body}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON, one object per record.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
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

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(record)
        } else {
            serde_json::to_string(record)
        };
        // Records hold only strings and integers, so encoding cannot fail.
        encoded.unwrap_or_default()
    }
}
