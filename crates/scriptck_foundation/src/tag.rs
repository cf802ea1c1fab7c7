//! Tags: the classified events a script parser produces.
//!
//! A tag carries an optional kind, an optional character `name` (only the
//! dramatis personae entry uses it) and an optional `text` payload. A tag
//! with no kind is an untagged fragment of narrative or dialogue.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Tag Kind
// =============================================================================

/// The kind of a tag.
///
/// The recognized set is closed. A kind string outside it is preserved in
/// [`TagKind::Unknown`] so the checker can report it rather than drop it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub enum TagKind {
    /// Script title
    Title,
    /// Script subtitle
    Subtitle,
    /// Copyright notice
    Copyright,
    /// Author credit
    Author,
    /// Location heading
    Location,
    /// Stage direction
    StageDirection,
    /// A fragment the upstream parser could not classify
    Invalid,
    /// Dramatis personae entry (declares a character)
    DramatisPersonae,
    /// Selects the speaking character
    Char,
    /// Closes a character's microphone
    Mute,
    /// Opens a character's microphone
    Unmute,
    /// A character enters
    Enter,
    /// A character exits
    Exit,
    /// Everyone leaves the stage
    Exeunt,
    /// End of a page (the text is the page just completed)
    Page,
    /// Start of a scene
    Scene,
    /// Start of an act
    Act,
    /// A kind outside the recognized set
    Unknown(String),
}

impl TagKind {
    /// Every recognized kind, in wire order.
    pub const RECOGNIZED: [TagKind; 17] = [
        TagKind::Title,
        TagKind::Subtitle,
        TagKind::Copyright,
        TagKind::Author,
        TagKind::Location,
        TagKind::StageDirection,
        TagKind::Invalid,
        TagKind::DramatisPersonae,
        TagKind::Char,
        TagKind::Mute,
        TagKind::Unmute,
        TagKind::Enter,
        TagKind::Exit,
        TagKind::Exeunt,
        TagKind::Page,
        TagKind::Scene,
        TagKind::Act,
    ];

    /// Returns the wire name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Copyright => "copyright",
            Self::Author => "author",
            Self::Location => "location",
            Self::StageDirection => "sd",
            Self::Invalid => "invalid",
            Self::DramatisPersonae => "dp",
            Self::Char => "char",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::Enter => "enter",
            Self::Exit => "exit",
            Self::Exeunt => "exeunt",
            Self::Page => "page",
            Self::Scene => "scene",
            Self::Act => "act",
            Self::Unknown(kind) => kind,
        }
    }

    /// Returns true if this kind is in the recognized set.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for TagKind {
    fn from(kind: &str) -> Self {
        match kind {
            "title" => Self::Title,
            "subtitle" => Self::Subtitle,
            "copyright" => Self::Copyright,
            "author" => Self::Author,
            "location" => Self::Location,
            "sd" => Self::StageDirection,
            "invalid" => Self::Invalid,
            "dp" => Self::DramatisPersonae,
            "char" => Self::Char,
            "mute" => Self::Mute,
            "unmute" => Self::Unmute,
            "enter" => Self::Enter,
            "exit" => Self::Exit,
            "exeunt" => Self::Exeunt,
            "page" => Self::Page,
            "scene" => Self::Scene,
            "act" => Self::Act,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for TagKind {
    fn from(kind: String) -> Self {
        match Self::from(kind.as_str()) {
            Self::Unknown(_) => Self::Unknown(kind),
            known => known,
        }
    }
}

impl From<TagKind> for String {
    fn from(kind: TagKind) -> Self {
        match kind {
            TagKind::Unknown(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Tag
// =============================================================================

/// One unit from the tag stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag {
    /// The tag kind; `None` for untagged text.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub kind: Option<TagKind>,
    /// Declared character name (dramatis personae entries only).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// Free text: dialogue, a character reference, or a number.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub text: Option<String>,
}

impl Tag {
    /// Creates a tag of the given kind carrying `text`.
    #[must_use]
    pub fn new(kind: impl Into<TagKind>, text: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            name: None,
            text: Some(text.into()),
        }
    }

    /// Creates a tag of the given kind with no payload.
    #[must_use]
    pub fn bare(kind: impl Into<TagKind>) -> Self {
        Self {
            kind: Some(kind.into()),
            name: None,
            text: None,
        }
    }

    /// Creates an untagged text fragment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: None,
            name: None,
            text: Some(text.into()),
        }
    }

    /// Creates a dramatis personae entry declaring `name`.
    #[must_use]
    pub fn dp(name: impl Into<String>) -> Self {
        Self {
            kind: Some(TagKind::DramatisPersonae),
            name: Some(name.into()),
            text: None,
        }
    }

    /// Creates a speaker selection.
    #[must_use]
    pub fn char(name: impl Into<String>) -> Self {
        Self::new(TagKind::Char, name)
    }

    /// Creates a mute tag.
    #[must_use]
    pub fn mute(name: impl Into<String>) -> Self {
        Self::new(TagKind::Mute, name)
    }

    /// Creates an unmute tag.
    #[must_use]
    pub fn unmute(name: impl Into<String>) -> Self {
        Self::new(TagKind::Unmute, name)
    }

    /// Creates an entrance.
    #[must_use]
    pub fn enter(name: impl Into<String>) -> Self {
        Self::new(TagKind::Enter, name)
    }

    /// Creates an exit.
    #[must_use]
    pub fn exit(name: impl Into<String>) -> Self {
        Self::new(TagKind::Exit, name)
    }

    /// Creates an exeunt.
    #[must_use]
    pub fn exeunt() -> Self {
        Self::bare(TagKind::Exeunt)
    }

    /// Creates an end-of-page marker for the page just completed.
    #[must_use]
    pub fn page(number: impl Into<String>) -> Self {
        Self::new(TagKind::Page, number)
    }

    /// Creates a scene heading.
    #[must_use]
    pub fn scene(number: impl Into<String>) -> Self {
        Self::new(TagKind::Scene, number)
    }

    /// Creates an act heading.
    #[must_use]
    pub fn act(number: impl Into<String>) -> Self {
        Self::new(TagKind::Act, number)
    }

    /// Creates a stage direction.
    #[must_use]
    pub fn stage_direction(text: impl Into<String>) -> Self {
        Self::new(TagKind::StageDirection, text)
    }

    /// Creates a tag the upstream parser failed to classify.
    #[must_use]
    pub fn invalid(text: impl Into<String>) -> Self {
        Self::new(TagKind::Invalid, text)
    }

    /// Number of physical line breaks embedded in the tag's text.
    #[must_use]
    pub fn line_breaks(&self) -> usize {
        self.text.as_deref().map_or(0, |t| t.matches('\n').count())
    }

    /// Returns the text payload, or `""` if absent.
    #[must_use]
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = Vec::with_capacity(3);
        if let Some(kind) = &self.kind {
            fields.push(format!("type: {:?}", kind.as_str()));
        }
        if let Some(name) = &self.name {
            fields.push(format!("name: {name:?}"));
        }
        if let Some(text) = &self.text {
            fields.push(format!("text: {text:?}"));
        }
        write!(f, "{{{}}}", fields.join(", "))
    }
}
