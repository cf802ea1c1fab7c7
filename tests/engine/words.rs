//! Integration tests for word attribution

use scriptck_engine::ScriptChecker;
use scriptck_foundation::Tag;

#[test]
fn counts_accumulate_across_lines() {
    let report = ScriptChecker::default().run(vec![
        Tag::dp("Hamlet"),
        Tag::enter("Hamlet"),
        Tag::char("Hamlet"),
        Tag::text("To be, or not to be:\n"),
        Tag::text("that is the question:\n"),
    ]);
    assert!(report.is_clean());
    assert_eq!(report.words_for("Hamlet"), Some(10));
}

#[test]
fn muted_speaker_still_credited() {
    // Muting does not clear the speaker; words keep flowing to them.
    let report = ScriptChecker::default().run(vec![
        Tag::dp("A"),
        Tag::enter("A"),
        Tag::char("A"),
        Tag::mute("A"),
        Tag::text("aside"),
    ]);
    assert_eq!(report.words_for("A"), Some(1));
}

#[test]
fn all_skips_closed_mics() {
    let report = ScriptChecker::default().run(vec![
        Tag::dp("A"),
        Tag::dp("B"),
        Tag::enter("A"),
        Tag::enter("B"),
        Tag::mute("B"),
        Tag::char("ALL"),
        Tag::text("Long live the king"),
    ]);
    assert_eq!(report.words_for("A"), Some(4));
    assert_eq!(report.words_for("B"), Some(0));
    assert_eq!(report.total_words(), 4);
}

#[test]
fn all_with_nobody_on_mic_is_silent() {
    let report = ScriptChecker::default().run(vec![Tag::char("ALL"), Tag::text("Huzzah")]);
    assert!(report.is_clean());
    assert_eq!(report.total_words(), 0);
}

#[test]
fn redeclaration_resets_count() {
    let report = ScriptChecker::default().run(vec![
        Tag::dp("A"),
        Tag::enter("A"),
        Tag::char("A"),
        Tag::text("one two"),
        Tag::dp("A"),
    ]);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.words_for("A"), Some(0));
}
