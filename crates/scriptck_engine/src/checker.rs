//! The consistency-check engine.
//!
//! A [`ScriptChecker`] walks a tag stream once, top to bottom:
//! 1. Advances the line counter by the line breaks embedded in the tag
//! 2. Dispatches on the tag kind to a rule
//! 3. The rule mutates registry/cursor state or records a [`ScriptError`]
//!
//! Every inconsistency is soft. The checker never stops early.

use std::borrow::Borrow;

use scriptck_foundation::{CharacterAction, Counter, Issue, ScriptError, Tag, TagKind};
use tracing::{debug, info, trace};

use crate::config::CheckConfig;
use crate::cursor::{Cursor, Speaker};
use crate::registry::{CharacterRegistry, CharacterState};
use crate::report::CheckReport;

// =============================================================================
// Script Checker
// =============================================================================

/// Checks one script.
///
/// State is owned by the instance and lives for a single run; check another
/// script with a fresh checker.
#[derive(Clone, Debug, Default)]
pub struct ScriptChecker {
    config: CheckConfig,
    registry: CharacterRegistry,
    cursor: Cursor,
    errors: Vec<ScriptError>,
    tags_processed: usize,
}

impl ScriptChecker {
    /// Creates a checker with the given configuration.
    #[must_use]
    pub fn new(config: CheckConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Declared characters and their state.
    #[must_use]
    pub fn registry(&self) -> &CharacterRegistry {
        &self.registry
    }

    /// Current position and speaker.
    #[must_use]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Errors found so far, in order.
    #[must_use]
    pub fn errors(&self) -> &[ScriptError] {
        &self.errors
    }

    /// Number of tags processed so far.
    #[must_use]
    pub fn tags_processed(&self) -> usize {
        self.tags_processed
    }

    /// Checks every tag in `tags`, then finishes the run.
    pub fn run<I>(mut self, tags: I) -> CheckReport
    where
        I: IntoIterator,
        I::Item: Borrow<Tag>,
    {
        for tag in tags {
            self.process_tag(tag.borrow());
        }
        self.finish()
    }

    /// Processes the next tag in stream order.
    ///
    /// Returns the errors this tag produced.
    pub fn process_tag(&mut self, tag: &Tag) -> &[ScriptError] {
        let before = self.errors.len();
        self.cursor.advance_lines(tag.line_breaks());
        self.tags_processed += 1;

        trace!(
            index = self.tags_processed - 1,
            kind = tag.kind.as_ref().map_or("text", TagKind::as_str),
            page = self.cursor.page,
            line = self.cursor.line,
            "checking tag"
        );

        match &tag.kind {
            None => self.attribute_words(tag),
            Some(kind) => self.dispatch(kind, tag),
        }

        &self.errors[before..]
    }

    /// Ends the run, applying end-of-show checks if configured.
    #[must_use]
    pub fn finish(mut self) -> CheckReport {
        if self.config.end_of_show {
            self.check_end_of_show();
        }

        info!(
            tags = self.tags_processed,
            errors = self.errors.len(),
            characters = self.registry.len(),
            "script check finished"
        );

        CheckReport {
            word_counts: self.registry.word_counts(),
            errors: self.errors,
            tags_processed: self.tags_processed,
            final_page: self.cursor.page,
        }
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    fn dispatch(&mut self, kind: &TagKind, tag: &Tag) {
        match kind {
            TagKind::Title
            | TagKind::Subtitle
            | TagKind::Copyright
            | TagKind::Author
            | TagKind::Location
            | TagKind::StageDirection => {}
            TagKind::Invalid => self.report(Issue::InvalidTag(tag.to_string())),
            TagKind::DramatisPersonae => self.check_dp(tag),
            TagKind::Char => self.check_char(tag),
            TagKind::Mute => self.apply_to_character(tag, CharacterAction::Mute, |state, name| {
                if state.mic_open {
                    state.mic_open = false;
                    None
                } else {
                    Some(Issue::AlreadyMuted(name.to_string()))
                }
            }),
            TagKind::Unmute => {
                self.apply_to_character(tag, CharacterAction::Unmute, |state, name| {
                    if state.mic_open {
                        Some(Issue::AlreadyUnmuted(name.to_string()))
                    } else {
                        state.mic_open = true;
                        None
                    }
                });
            }
            TagKind::Enter => self.apply_to_character(tag, CharacterAction::Enter, |state, name| {
                if state.on_stage {
                    Some(Issue::AlreadyOnStage(name.to_string()))
                } else {
                    state.on_stage = true;
                    state.mic_open = true;
                    None
                }
            }),
            TagKind::Exit => self.apply_to_character(tag, CharacterAction::Exit, |state, name| {
                if state.on_stage {
                    state.on_stage = false;
                    state.mic_open = false;
                    None
                } else {
                    Some(Issue::AlreadyOffStage(name.to_string()))
                }
            }),
            TagKind::Exeunt => {
                self.registry.clear_stage();
                self.set_speaker(Speaker::None);
            }
            TagKind::Page => self.check_page(tag),
            TagKind::Scene => self.check_scene(tag),
            TagKind::Act => self.check_act(tag),
            TagKind::Unknown(kind) => self.report(Issue::UnknownTagType(kind.clone())),
        }
    }

    // =========================================================================
    // Rules
    // =========================================================================

    /// Credits untagged text to whoever is speaking.
    fn attribute_words(&mut self, tag: &Tag) {
        let text = tag.text_or_empty();

        if self.cursor.speaker.is_none() {
            if !text.trim().is_empty() {
                self.report(Issue::NoActiveSpeaker);
            }
            return;
        }

        let words = u64::try_from(text.split_whitespace().count()).unwrap_or(u64::MAX);
        match &self.cursor.speaker {
            Speaker::All => {
                self.registry.credit_open_mics(words);
            }
            Speaker::One(name) => {
                self.registry.credit(name, words);
            }
            Speaker::None => {}
        }
    }

    fn check_dp(&mut self, tag: &Tag) {
        let Some(name) = tag.name.as_deref() else {
            self.report(Issue::MissingField {
                kind: TagKind::DramatisPersonae,
                field: "name",
            });
            return;
        };

        if self.registry.declare(name) {
            self.report(Issue::DuplicateEntry(name.to_string()));
        }
    }

    fn check_char(&mut self, tag: &Tag) {
        let Some(name) = self.required_text(tag, TagKind::Char) else {
            return;
        };

        if name == Speaker::ALL {
            self.set_speaker(Speaker::All);
            return;
        }

        match self.registry.get(name).copied() {
            None => {
                self.report(Issue::not_in_dp(CharacterAction::Speak, name));
                self.set_speaker(Speaker::None);
            }
            Some(_) if self.cursor.speaker.is(name) => {
                self.report(Issue::AlreadySpeaking(name.to_string()));
            }
            Some(state) if state.mic_open => self.set_speaker(Speaker::One(name.to_string())),
            Some(_) => {
                self.report(Issue::SpeakingWithoutMic(name.to_string()));
                self.set_speaker(Speaker::None);
            }
        }
    }

    /// Runs `rule` against the named character's state, reporting what it returns.
    fn apply_to_character<F>(&mut self, tag: &Tag, action: CharacterAction, rule: F)
    where
        F: FnOnce(&mut CharacterState, &str) -> Option<Issue>,
    {
        let kind = match action {
            CharacterAction::Speak => TagKind::Char,
            CharacterAction::Mute => TagKind::Mute,
            CharacterAction::Unmute => TagKind::Unmute,
            CharacterAction::Enter => TagKind::Enter,
            CharacterAction::Exit => TagKind::Exit,
        };
        let Some(name) = self.required_text(tag, kind) else {
            return;
        };

        let issue = match self.registry.get_mut(name) {
            Some(state) => rule(state, name),
            None => Some(Issue::not_in_dp(action, name)),
        };

        if let Some(issue) = issue {
            self.report(issue);
        }
    }

    fn check_page(&mut self, tag: &Tag) {
        let Some(completed) = self.parse_number(tag, TagKind::Page, Counter::Page) else {
            return;
        };

        let current = i64::from(self.cursor.page);
        match completed.checked_add(1) {
            Some(proposed) if proposed > current => match u32::try_from(proposed) {
                Ok(page) => self.cursor.turn_page(page),
                Err(_) => self.report_invalid_number(tag, Counter::Page),
            },
            Some(proposed) => self.report(Issue::Regressed {
                counter: Counter::Page,
                proposed,
                current: Some(current),
            }),
            None => self.report_invalid_number(tag, Counter::Page),
        }
    }

    fn check_scene(&mut self, tag: &Tag) {
        let Some(scene) = self.parse_ordinal(tag, TagKind::Scene, Counter::Scene) else {
            return;
        };

        // The first scene of the script, or of a new act, may take any positive number.
        if self.cursor.scene.is_none_or(|current| scene > current) {
            self.cursor.scene = Some(scene);
            self.set_speaker(Speaker::None);
        } else {
            self.report(Issue::Regressed {
                counter: Counter::Scene,
                proposed: scene,
                current: self.cursor.scene,
            });
        }
    }

    fn check_act(&mut self, tag: &Tag) {
        let Some(act) = self.parse_ordinal(tag, TagKind::Act, Counter::Act) else {
            return;
        };

        if !self.cursor.act.is_none_or(|current| act > current) {
            self.report(Issue::Regressed {
                counter: Counter::Act,
                proposed: act,
                current: self.cursor.act,
            });
            return;
        }

        if self.config.act_transitions {
            self.check_stage_cleared(Issue::OnStageAcrossAct, Issue::MicOpenAcrossAct);
        }

        self.cursor.act = Some(act);
        self.cursor.scene = None;
        self.set_speaker(Speaker::None);
    }

    fn check_end_of_show(&mut self) {
        self.check_stage_cleared(Issue::OnStageAtEnd, Issue::MicOpenAtEnd);
    }

    /// Reports every character still on stage or with an open mic.
    fn check_stage_cleared(&mut self, on_stage: fn(String) -> Issue, mic_open: fn(String) -> Issue) {
        let mut issues = Vec::new();
        for (name, state) in self.registry.iter() {
            if state.on_stage {
                issues.push(on_stage(name.to_string()));
            }
            if state.mic_open {
                issues.push(mic_open(name.to_string()));
            }
        }
        for issue in issues {
            self.report(issue);
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn required_text<'t>(&mut self, tag: &'t Tag, kind: TagKind) -> Option<&'t str> {
        let text = tag.text.as_deref();
        if text.is_none() {
            self.report(Issue::MissingField { kind, field: "text" });
        }
        text
    }

    fn parse_number(&mut self, tag: &Tag, kind: TagKind, counter: Counter) -> Option<i64> {
        let text = self.required_text(tag, kind)?;
        if let Ok(number) = text.trim().parse() {
            Some(number)
        } else {
            self.report_invalid_number(tag, counter);
            None
        }
    }

    /// Parses a scene or act number, which must be at least 1.
    fn parse_ordinal(&mut self, tag: &Tag, kind: TagKind, counter: Counter) -> Option<i64> {
        let number = self.parse_number(tag, kind, counter)?;
        if number < 1 {
            self.report_invalid_number(tag, counter);
            return None;
        }
        Some(number)
    }

    fn report_invalid_number(&mut self, tag: &Tag, counter: Counter) {
        self.report(Issue::InvalidNumber {
            counter,
            text: tag.text_or_empty().to_string(),
        });
    }

    fn set_speaker(&mut self, speaker: Speaker) {
        if self.cursor.speaker != speaker {
            trace!(from = %self.cursor.speaker, to = %speaker, "speaker changed");
            self.cursor.speaker = speaker;
        }
    }

    fn report(&mut self, issue: Issue) {
        let error = ScriptError::new(self.cursor.page, self.cursor.line, issue);
        debug!(page = error.page, line = error.line, "{}", error.issue);
        self.errors.push(error);
    }
}
