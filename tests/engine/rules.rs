//! Integration tests for per-tag rules

use scriptck_engine::{CheckConfig, ScriptChecker, Speaker};
use scriptck_foundation::{Counter, Issue, Tag};

fn checker_after(tags: &[Tag]) -> ScriptChecker {
    let mut checker = ScriptChecker::new(CheckConfig::default());
    for tag in tags {
        checker.process_tag(tag);
    }
    checker
}

// =============================================================================
// Character Rules
// =============================================================================

#[test]
fn unregistered_char_never_becomes_speaker() {
    let checker = checker_after(&[
        Tag::dp("Hamlet"),
        Tag::enter("Hamlet"),
        Tag::char("Hamlet"),
        Tag::char("Ghost"),
    ]);
    assert_eq!(checker.cursor().speaker, Speaker::None);
    assert!(checker.errors()[0].message().contains("not in DP"));
}

#[test]
fn character_named_all_is_still_the_sentinel() {
    let checker = checker_after(&[Tag::dp("ALL"), Tag::char("ALL")]);
    assert_eq!(checker.cursor().speaker, Speaker::All);
    assert!(checker.errors().is_empty());
}

#[test]
fn switching_between_open_mics() {
    let checker = checker_after(&[
        Tag::dp("A"),
        Tag::dp("B"),
        Tag::enter("A"),
        Tag::enter("B"),
        Tag::char("A"),
        Tag::char("B"),
        Tag::char("A"),
    ]);
    assert!(checker.errors().is_empty());
    assert!(checker.cursor().speaker.is("A"));
}

#[test]
fn all_then_specific_character() {
    let checker = checker_after(&[
        Tag::dp("A"),
        Tag::enter("A"),
        Tag::char("ALL"),
        Tag::char("A"),
    ]);
    assert!(checker.errors().is_empty());
    assert!(checker.cursor().speaker.is("A"));
}

#[test]
fn exit_keeps_current_speaker() {
    // Only exeunt, scene and act changes clear the speaker.
    let checker = checker_after(&[
        Tag::dp("A"),
        Tag::enter("A"),
        Tag::char("A"),
        Tag::exit("A"),
    ]);
    assert!(checker.cursor().speaker.is("A"));
}

// =============================================================================
// Numbering
// =============================================================================

#[test]
fn page_tags_encode_completed_page() {
    let checker = checker_after(&[Tag::page("1"), Tag::page("2"), Tag::page("5")]);
    assert!(checker.errors().is_empty());
    assert_eq!(checker.cursor().page, 6);
}

#[test]
fn errors_carry_position() {
    let checker = checker_after(&[
        Tag::page("1"),
        Tag::stage_direction("Enter the Ghost.\n"),
        Tag::text("Stray\n"),
    ]);
    let error = &checker.errors()[0];
    assert_eq!((error.page, error.line), (2, 3));
    assert_eq!(error.issue, Issue::NoActiveSpeaker);
}

#[test]
fn act_number_is_tracked() {
    let checker = checker_after(&[Tag::act("1"), Tag::act("1")]);
    assert_eq!(
        checker.errors()[0].issue,
        Issue::Regressed {
            counter: Counter::Act,
            proposed: 1,
            current: Some(1),
        }
    );
}

#[test]
fn first_scene_of_new_act_takes_any_number() {
    let checker = checker_after(&[
        Tag::act("1"),
        Tag::scene("7"),
        Tag::act("2"),
        Tag::scene("3"),
    ]);
    assert!(checker.errors().is_empty());
    assert_eq!(checker.cursor().scene, Some(3));
}

#[test]
fn scene_and_act_numbers_start_at_one() {
    let checker = checker_after(&[
        Tag::scene("0"),
        Tag::act("-2"),
        Tag::act("1"),
        Tag::scene("-1"),
    ]);
    let issues: Vec<_> = checker.errors().iter().map(|e| e.issue.clone()).collect();
    assert_eq!(
        issues,
        vec![
            Issue::InvalidNumber {
                counter: Counter::Scene,
                text: "0".to_string(),
            },
            Issue::InvalidNumber {
                counter: Counter::Act,
                text: "-2".to_string(),
            },
            Issue::InvalidNumber {
                counter: Counter::Scene,
                text: "-1".to_string(),
            },
        ]
    );
    assert_eq!(checker.cursor().act, Some(1));
    assert_eq!(checker.cursor().scene, None);
}

#[test]
fn malformed_numbers_leave_state_alone() {
    let checker = checker_after(&[
        Tag::act("1"),
        Tag::scene("2"),
        Tag::page("x"),
        Tag::scene("3b"),
        Tag::act(""),
    ]);
    assert_eq!(checker.errors().len(), 3);
    assert_eq!(checker.cursor().page, 1);
    assert_eq!(checker.cursor().scene, Some(2));
    assert_eq!(checker.cursor().act, Some(1));
}
