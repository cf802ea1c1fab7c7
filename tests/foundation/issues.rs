//! Integration tests for issues and script errors

use scriptck_foundation::{CharacterAction, Counter, Issue, ScriptError};

#[test]
fn every_not_in_dp_variant_mentions_dp() {
    for action in [
        CharacterAction::Speak,
        CharacterAction::Mute,
        CharacterAction::Unmute,
        CharacterAction::Enter,
        CharacterAction::Exit,
    ] {
        let message = Issue::not_in_dp(action, "Ghost").to_string();
        assert!(message.contains("not in DP"), "{message}");
        assert!(message.ends_with(": Ghost"), "{message}");
    }
}

#[test]
fn number_issues_name_their_counter() {
    let invalid = Issue::InvalidNumber {
        counter: Counter::Scene,
        text: "ii".to_string(),
    };
    assert_eq!(invalid.to_string(), "Scene number invalid ii");

    let regressed = Issue::Regressed {
        counter: Counter::Page,
        proposed: 3,
        current: Some(5),
    };
    assert!(regressed.to_string().contains("unchanged or regressed"));
}

#[test]
fn script_error_serializes_message() {
    let error = ScriptError::new(2, 7, Issue::AlreadySpeaking("Hamlet".to_string()));
    let value = serde_json::to_value(&error).unwrap();
    assert_eq!(value["page"], 2);
    assert_eq!(value["line"], 7);
    assert_eq!(value["message"], "Character already speaking: Hamlet");
}

#[test]
fn script_error_is_a_std_error() {
    let error: Box<dyn std::error::Error> =
        Box::new(ScriptError::new(1, 1, Issue::NoActiveSpeaker));
    assert_eq!(
        error.to_string(),
        "ERROR: Page: 1 Line: 1 Error: Lines with no active char."
    );
}
