//! Position and speaker tracking.

use std::fmt;

/// Who is currently speaking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Speaker {
    /// Nobody; untagged text is an error.
    #[default]
    None,
    /// One declared character.
    One(String),
    /// Every character whose microphone is open.
    All,
}

impl Speaker {
    /// The wire name that selects [`Speaker::All`].
    pub const ALL: &'static str = "ALL";

    /// Returns true if `name` is the selected character.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        matches!(self, Self::One(current) if current == name)
    }

    /// Returns true if nobody is speaking.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("(none)"),
            Self::One(name) => f.write_str(name),
            Self::All => f.write_str(Self::ALL),
        }
    }
}

/// The checker's position in the script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    /// Current speaker.
    pub speaker: Speaker,
    /// Current act, once one has been declared.
    pub act: Option<i64>,
    /// Current scene; cleared by an act change.
    pub scene: Option<i64>,
    /// Current page (1-indexed).
    pub page: u32,
    /// Current line within the page (1-indexed).
    pub line: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// Creates a cursor at the top of page 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            speaker: Speaker::None,
            act: None,
            scene: None,
            page: 1,
            line: 1,
        }
    }

    /// Moves down `lines` physical lines.
    pub fn advance_lines(&mut self, lines: usize) {
        let lines = u32::try_from(lines).unwrap_or(u32::MAX);
        self.line = self.line.saturating_add(lines);
    }

    /// Turns to `page`, returning to its first line.
    pub fn turn_page(&mut self, page: u32) {
        self.page = page;
        self.line = 1;
    }
}
