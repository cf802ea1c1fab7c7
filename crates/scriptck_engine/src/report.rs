//! Results of a checking run.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use scriptck_foundation::ScriptError;

/// Everything a run accumulated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CheckReport {
    /// Errors in the order they were found.
    pub errors: Vec<ScriptError>,
    /// Words credited per declared character, ordered by name.
    pub word_counts: BTreeMap<String, u64>,
    /// Number of tags consumed.
    pub tags_processed: usize,
    /// Page the cursor ended on.
    pub final_page: u32,
}

impl CheckReport {
    /// Returns true if no errors were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors found.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Words credited across all characters.
    ///
    /// Text delivered by several characters at once counts once per speaker.
    #[must_use]
    pub fn total_words(&self) -> u64 {
        self.word_counts.values().sum()
    }

    /// Returns the words credited to `name`, if declared.
    #[must_use]
    pub fn words_for(&self, name: &str) -> Option<u64> {
        self.word_counts.get(name).copied()
    }
}
