//! Trace records.

use serde::Serialize;

/// Something worth tracing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A tag was checked.
    TagChecked {
        /// Position of the tag in the stream (0-indexed).
        index: usize,
        /// Tag kind, or `text` for untagged fragments.
        kind: String,
        /// Page after the tag was processed.
        page: u32,
        /// Line after the tag was processed.
        line: u32,
        /// Messages of the errors the tag produced.
        issues: Vec<String>,
    },
    /// The active speaker changed.
    SpeakerChanged {
        /// Previous speaker.
        from: String,
        /// New speaker.
        to: String,
    },
    /// The run ended.
    RunFinished {
        /// Tags processed.
        tags: usize,
        /// Errors found.
        errors: usize,
    },
}

impl TraceEvent {
    /// Short event type name, for filtering.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::TagChecked { .. } => "tag_checked",
            Self::SpeakerChanged { .. } => "speaker_changed",
            Self::RunFinished { .. } => "run_finished",
        }
    }
}

/// A recorded event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// Sequential record ID.
    pub id: u64,
    /// What happened.
    #[serde(flatten)]
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(id: u64, event: TraceEvent) -> Self {
        Self { id, event }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
