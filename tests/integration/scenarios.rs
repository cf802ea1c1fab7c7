//! End-to-end checking scenarios

use scriptck_engine::{CheckConfig, ScriptChecker, Speaker};
use scriptck_foundation::{Issue, Tag, TagKind};

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn clean_entrance_speech_exit() {
    let mut checker = ScriptChecker::default();
    for tag in [
        Tag::dp("A"),
        Tag::enter("A"),
        Tag::char("A"),
        Tag::text("Hello world"),
        Tag::exit("A"),
    ] {
        checker.process_tag(&tag);
    }

    assert!(checker.errors().is_empty());
    assert!(!checker.registry().get("A").unwrap().on_stage);

    let report = checker.finish();
    assert_eq!(report.words_for("A"), Some(2));
}

#[test]
fn ghost_without_declaration() {
    let mut checker = ScriptChecker::default();
    checker.process_tag(&Tag::char("Ghost"));

    assert_eq!(checker.errors().len(), 1);
    assert!(checker.errors()[0].message().contains("not in DP"));
    assert_eq!(checker.cursor().speaker, Speaker::None);
}

#[test]
fn repeated_page_marker() {
    let mut checker = ScriptChecker::default();

    assert!(checker.process_tag(&Tag::page("1")).is_empty());
    assert_eq!(checker.cursor().page, 2);

    let errors = checker.process_tag(&Tag::page("1"));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message().contains("unchanged or regressed"));
    assert_eq!(checker.cursor().page, 2);
}

// =============================================================================
// Whole Script
// =============================================================================

fn elsinore() -> Vec<Tag> {
    vec![
        Tag::new(TagKind::Title, "The Tragedy of Hamlet"),
        Tag::new(TagKind::Author, "William Shakespeare"),
        Tag::dp("Bernardo"),
        Tag::dp("Francisco"),
        Tag::dp("Horatio"),
        Tag::act("1"),
        Tag::scene("1"),
        Tag::new(TagKind::Location, "Elsinore. A platform before the castle."),
        Tag::stage_direction("FRANCISCO at his post.\nEnter to him BERNARDO.\n"),
        Tag::enter("Francisco"),
        Tag::enter("Bernardo"),
        Tag::char("Bernardo"),
        Tag::text("Who's there?\n"),
        Tag::char("Francisco"),
        Tag::text("Nay, answer me: stand, and unfold yourself.\n"),
        Tag::char("Bernardo"),
        Tag::text("Long live the king!\n"),
        Tag::page("1"),
        Tag::exit("Francisco"),
        Tag::enter("Horatio"),
        Tag::enter("Marcellus"),
        Tag::char("Horatio"),
        Tag::text("Friends to this ground.\n"),
        Tag::char("ALL"),
        Tag::text("Long live the king!\n"),
        Tag::exeunt(),
        Tag::scene("1"),
        Tag::text("Stray line\n"),
    ]
}

#[test]
fn elsinore_report() {
    let report = ScriptChecker::default().run(elsinore());

    let messages: Vec<String> = report.errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "ERROR: Page: 2 Line: 1 Error: Character enters who's not in DP: Marcellus",
            "ERROR: Page: 2 Line: 3 Error: Scene number unchanged or regressed 1 - 1",
            "ERROR: Page: 2 Line: 4 Error: Lines with no active char.",
        ]
    );

    assert_eq!(report.words_for("Bernardo"), Some(2 + 4 + 4));
    assert_eq!(report.words_for("Francisco"), Some(7));
    assert_eq!(report.words_for("Horatio"), Some(4 + 4));
    assert_eq!(report.words_for("Marcellus"), None);
    assert_eq!(report.final_page, 2);
    assert_eq!(report.tags_processed, elsinore().len());
}

#[test]
fn elsinore_strict_adds_nothing_after_exeunt() {
    let relaxed = ScriptChecker::default().run(elsinore());
    let strict = ScriptChecker::new(CheckConfig::strict()).run(elsinore());
    assert_eq!(relaxed, strict);
}

#[test]
fn strict_flags_dangling_cast() {
    let mut script = elsinore();
    script.truncate(script.len() - 3);

    let report = ScriptChecker::new(CheckConfig::strict()).run(script);
    let tail: Vec<&Issue> = report.errors.iter().skip(1).map(|e| &e.issue).collect();
    assert_eq!(
        tail,
        vec![
            &Issue::OnStageAtEnd("Bernardo".to_string()),
            &Issue::MicOpenAtEnd("Bernardo".to_string()),
            &Issue::OnStageAtEnd("Horatio".to_string()),
            &Issue::MicOpenAtEnd("Horatio".to_string()),
        ]
    );
}
