//! Character registry.
//!
//! Characters enter the registry through dramatis personae entries and are
//! never removed. A name absent from the registry is unknown.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Per-character state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CharacterState {
    /// Whether the character is on stage.
    pub on_stage: bool,
    /// Whether the character's microphone is open.
    pub mic_open: bool,
    /// Words credited to the character so far.
    pub word_count: u64,
}

/// Declared characters, ordered by name.
#[derive(Clone, Debug, Default)]
pub struct CharacterRegistry {
    characters: BTreeMap<String, CharacterState>,
}

impl CharacterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name`, resetting its state.
    ///
    /// Returns `true` if the name was already declared. The entry is
    /// reinitialised either way.
    pub fn declare(&mut self, name: &str) -> bool {
        self.characters
            .insert(name.to_string(), CharacterState::default())
            .is_some()
    }

    /// Returns true if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.characters.contains_key(name)
    }

    /// Returns the state of `name`, if declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CharacterState> {
        self.characters.get(name)
    }

    /// Returns the mutable state of `name`, if declared.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut CharacterState> {
        self.characters.get_mut(name)
    }

    /// Number of declared characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Returns true if nobody has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterates declared characters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CharacterState)> {
        self.characters.iter().map(|(name, state)| (name.as_str(), state))
    }

    /// Sends everyone off stage and closes every microphone.
    pub fn clear_stage(&mut self) {
        for state in self.characters.values_mut() {
            state.on_stage = false;
            state.mic_open = false;
        }
    }

    /// Credits `words` to `name`. Returns false if `name` is unknown.
    pub fn credit(&mut self, name: &str, words: u64) -> bool {
        match self.characters.get_mut(name) {
            Some(state) => {
                state.word_count += words;
                true
            }
            None => false,
        }
    }

    /// Credits `words` to every character with an open microphone.
    ///
    /// Returns the number of characters credited.
    pub fn credit_open_mics(&mut self, words: u64) -> usize {
        let mut credited = 0;
        for state in self.characters.values_mut().filter(|s| s.mic_open) {
            state.word_count += words;
            credited += 1;
        }
        credited
    }

    /// Names of characters with an open microphone.
    pub fn open_mics(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, s)| s.mic_open).map(|(name, _)| name)
    }

    /// Names of characters on stage.
    pub fn on_stage(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, s)| s.on_stage).map(|(name, _)| name)
    }

    /// The word-count table, ordered by name.
    #[must_use]
    pub fn word_counts(&self) -> BTreeMap<String, u64> {
        self.characters
            .iter()
            .map(|(name, state)| (name.clone(), state.word_count))
            .collect()
    }
}
