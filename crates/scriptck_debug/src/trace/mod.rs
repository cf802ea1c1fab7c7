//! Tracing of a checking run.
//!
//! The [`Tracer`] sits between the caller and the [`ScriptChecker`]: it
//! forwards each tag, then records what the tag did. When disabled it only
//! forwards.
//!
//! # Example
//!
//! ```text
//! #0     P001 L001 dp
//! #1     P001 L001 char
//!     ! Character not in DP: Ghost
//! === FINISHED: 2 tags, 1 errors ===
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::TraceBuffer;
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};

use scriptck_engine::{CheckReport, ScriptChecker};
use scriptck_foundation::{ScriptError, Tag, TagKind};

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write each record to stderr as it is recorded.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
    /// Only record tags that produced errors.
    pub issues_only: bool,
    /// Prefix human output with record IDs.
    pub show_ids: bool,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10_000,
            output: TraceOutput::None,
            json_format: false,
            issues_only: false,
            show_ids: false,
            pretty: false,
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to record only tags that produced errors.
    #[must_use]
    pub fn issues_only(mut self) -> Self {
        self.issues_only = true;
        self
    }

    /// Builder method to show record IDs in human output.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Builder method to pretty-print JSON output.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records what each tag of a run did.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let mut human_formatter = HumanFormatter::new();
        if config.show_ids {
            human_formatter = human_formatter.with_ids();
        }
        let mut json_formatter = JsonFormatter::new();
        if config.pretty {
            json_formatter = json_formatter.pretty();
        }

        Self {
            buffer: TraceBuffer::new(config.buffer_size),
            config,
            human_formatter,
            json_formatter,
        }
    }

    /// Creates a disabled tracer.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Feeds `tag` to `checker` and records the outcome.
    ///
    /// Returns the number of errors the tag produced.
    pub fn check_tag(&mut self, checker: &mut ScriptChecker, tag: &Tag) -> usize {
        if !self.config.enabled {
            return checker.process_tag(tag).len();
        }

        let index = checker.tags_processed();
        let speaker_before = checker.cursor().speaker.clone();
        let issues: Vec<String> = checker
            .process_tag(tag)
            .iter()
            .map(ScriptError::message)
            .collect();
        let produced = issues.len();

        if !self.config.issues_only || produced > 0 {
            let cursor = checker.cursor();
            self.record(TraceEvent::TagChecked {
                index,
                kind: tag
                    .kind
                    .as_ref()
                    .map_or_else(|| "text".to_string(), |k| TagKind::as_str(k).to_string()),
                page: cursor.page,
                line: cursor.line,
                issues,
            });
        }

        let speaker_after = &checker.cursor().speaker;
        if *speaker_after != speaker_before {
            let to = speaker_after.to_string();
            self.record(TraceEvent::SpeakerChanged {
                from: speaker_before.to_string(),
                to,
            });
        }

        produced
    }

    /// Ends the run and records the summary.
    #[must_use]
    pub fn finish(&mut self, checker: ScriptChecker) -> CheckReport {
        let report = checker.finish();
        self.record(TraceEvent::RunFinished {
            tags: report.tags_processed,
            errors: report.error_count(),
        });
        report
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        let id = self.buffer.push(event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last().filter(|r| r.id == id) {
                let line = self.format_record(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats every buffered record.
    #[must_use]
    pub fn format_all(&self) -> String {
        let records: Vec<&TraceRecord> = self.buffer.iter().collect();
        if self.config.json_format {
            self.json_formatter.format_many(&records)
        } else {
            self.human_formatter.format_many(&records)
        }
    }
}
