//! Script inconsistencies.
//!
//! An [`Issue`] is a soft error: it is recorded and checking continues.
//! [`ScriptError`] pins an issue to the page and line where it was found.

use std::fmt;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::tag::TagKind;

/// What a character-referencing tag tried to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum CharacterAction {
    /// Selected as the speaker
    Speak,
    /// Microphone closed
    Mute,
    /// Microphone opened
    Unmute,
    /// Entered the stage
    Enter,
    /// Left the stage
    Exit,
}

impl fmt::Display for CharacterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Speak => "Character",
            Self::Mute => "Character mutes who's",
            Self::Unmute => "Character unmutes who's",
            Self::Enter => "Character enters who's",
            Self::Exit => "Character exits who's",
        })
    }
}

/// A numbered division of the script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum Counter {
    /// Page number
    Page,
    /// Scene number
    Scene,
    /// Act number
    Act,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Page => "Page",
            Self::Scene => "Scene",
            Self::Act => "Act",
        })
    }
}

/// A detected script inconsistency.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Issue {
    /// The upstream parser could not classify a fragment; carries the full tag.
    #[error("{0}")]
    InvalidTag(String),

    /// A kind outside the recognized set.
    #[error("Unknown tag type: {0}")]
    UnknownTagType(String),

    /// A tag lacks the field its kind needs.
    #[error("Tag is missing its {field}: {kind}")]
    MissingField {
        /// The tag's kind.
        kind: TagKind,
        /// The absent field.
        field: &'static str,
    },

    /// A character was declared twice.
    #[error("Duplicate DP entry for: {0}")]
    DuplicateEntry(String),

    /// A character was referenced before being declared.
    #[error("{action} not in DP: {name}")]
    NotInDp {
        /// What the tag tried to do.
        action: CharacterAction,
        /// The undeclared name.
        name: String,
    },

    /// A character was selected to speak with a closed microphone.
    #[error("Character speaking without mic open: {0}")]
    SpeakingWithoutMic(String),

    /// The active speaker was selected again.
    #[error("Character already speaking: {0}")]
    AlreadySpeaking(String),

    /// Mute of a closed microphone.
    #[error("Character mutes who's already muted: {0}")]
    AlreadyMuted(String),

    /// Unmute of an open microphone.
    #[error("Character unmutes who's already unmuted: {0}")]
    AlreadyUnmuted(String),

    /// Entrance by a character already on stage.
    #[error("Character enters who's already on-stage: {0}")]
    AlreadyOnStage(String),

    /// Exit by a character already off stage.
    #[error("Character exits who's already off-stage: {0}")]
    AlreadyOffStage(String),

    /// A page, scene or act number did not parse.
    #[error("{counter} number invalid {text}")]
    InvalidNumber {
        /// Which counter.
        counter: Counter,
        /// The offending text.
        text: String,
    },

    /// A page, scene or act number failed to increase.
    #[error(
        "{counter} number unchanged or regressed {proposed} - {}",
        .current.map_or_else(|| "none".to_string(), |n| n.to_string())
    )]
    Regressed {
        /// Which counter.
        counter: Counter,
        /// The proposed value.
        proposed: i64,
        /// The value in effect, if any.
        current: Option<i64>,
    },

    /// Dialogue with nobody speaking.
    #[error("Lines with no active char.")]
    NoActiveSpeaker,

    /// A character is still on stage when the script ends.
    #[error("Character still on-stage at end of show: {0}")]
    OnStageAtEnd(String),

    /// A microphone is still open when the script ends.
    #[error("Character mic still open at end of show: {0}")]
    MicOpenAtEnd(String),

    /// A character is on stage when a new act begins.
    #[error("Character on-stage across act change: {0}")]
    OnStageAcrossAct(String),

    /// A microphone is open when a new act begins.
    #[error("Character mic open across act change: {0}")]
    MicOpenAcrossAct(String),
}

impl Issue {
    /// Creates a not-in-DP issue.
    #[must_use]
    pub fn not_in_dp(action: CharacterAction, name: impl Into<String>) -> Self {
        Self::NotInDp {
            action,
            name: name.into(),
        }
    }
}

/// A positioned script inconsistency.
///
/// Created only by the checker; never mutated once recorded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("ERROR: Page: {page} Line: {line} Error: {issue}")]
pub struct ScriptError {
    /// Page on which the issue was found (1-indexed).
    pub page: u32,
    /// Line within the page (1-indexed).
    pub line: u32,
    /// What was found.
    pub issue: Issue,
}

impl ScriptError {
    /// Creates a script error.
    #[must_use]
    pub fn new(page: u32, line: u32, issue: Issue) -> Self {
        Self { page, line, issue }
    }

    /// The human-readable description of the issue.
    #[must_use]
    pub fn message(&self) -> String {
        self.issue.to_string()
    }
}

#[cfg(feature = "serde")]
impl Serialize for ScriptError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ScriptError", 3)?;
        state.serialize_field("page", &self.page)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}
