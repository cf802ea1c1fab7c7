//! Property tests over arbitrary tag streams

use proptest::prelude::*;

use scriptck_engine::{CheckConfig, ScriptChecker, Speaker};
use scriptck_foundation::{Tag, TagKind};

fn name() -> impl Strategy<Value = String> {
    prop_oneof![Just("A"), Just("B"), Just("C"), Just("ALL")].prop_map(String::from)
}

fn number() -> impl Strategy<Value = String> {
    prop_oneof![(0i64..6).prop_map(|n| n.to_string()), Just("x".to_string())]
}

fn tag() -> impl Strategy<Value = Tag> {
    prop_oneof![
        name().prop_map(Tag::dp),
        name().prop_map(Tag::char),
        name().prop_map(Tag::mute),
        name().prop_map(Tag::unmute),
        name().prop_map(Tag::enter),
        name().prop_map(Tag::exit),
        Just(Tag::exeunt()),
        number().prop_map(Tag::page),
        number().prop_map(Tag::scene),
        number().prop_map(Tag::act),
        "[a-z \n]{0,20}".prop_map(Tag::text),
        "[a-z\n]{0,10}".prop_map(Tag::stage_direction),
        Just(Tag::bare("curtain")),
        Just(Tag::invalid("???")),
    ]
}

fn stream() -> impl Strategy<Value = Vec<Tag>> {
    prop::collection::vec(tag(), 0..40)
}

fn checker_after(tags: &[Tag]) -> ScriptChecker {
    let mut checker = ScriptChecker::new(CheckConfig::default());
    for tag in tags {
        checker.process_tag(tag);
    }
    checker
}

proptest! {
    #[test]
    fn errors_are_a_function_of_the_stream(tags in stream()) {
        let first = ScriptChecker::default().run(&tags);
        let second = ScriptChecker::default().run(&tags);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unregistered_speaker_is_never_selected(tags in stream()) {
        let mut checker = checker_after(&tags);
        checker.process_tag(&Tag::char("Nobody"));
        prop_assert_eq!(&checker.cursor().speaker, &Speaker::None);
    }

    #[test]
    fn speaker_is_always_registered(tags in stream()) {
        let mut checker = ScriptChecker::default();
        for tag in &tags {
            checker.process_tag(tag);
            if let Speaker::One(name) = &checker.cursor().speaker {
                prop_assert!(checker.registry().contains(name));
            }
        }
    }

    #[test]
    fn enter_exit_pair_is_neutral(tags in stream()) {
        let mut checker = checker_after(&tags);
        checker.process_tag(&Tag::dp("Pair"));
        let before = checker.errors().len();

        checker.process_tag(&Tag::enter("Pair"));
        checker.process_tag(&Tag::exit("Pair"));

        prop_assert_eq!(checker.errors().len(), before);
        let state = checker.registry().get("Pair").copied().unwrap_or_default();
        prop_assert!(!state.on_stage);
        prop_assert!(!state.mic_open);
    }

    #[test]
    fn exeunt_clears_the_stage(tags in stream()) {
        let mut checker = checker_after(&tags);
        let before = checker.errors().len();
        checker.process_tag(&Tag::exeunt());

        prop_assert_eq!(checker.errors().len(), before);
        prop_assert_eq!(checker.registry().on_stage().count(), 0);
        prop_assert_eq!(checker.registry().open_mics().count(), 0);
        prop_assert_eq!(&checker.cursor().speaker, &Speaker::None);
    }

    #[test]
    fn all_credits_open_mics_equally(tags in stream(), words in 1usize..10) {
        let mut checker = checker_after(&tags);
        checker.process_tag(&Tag::char("ALL"));
        let before = checker.registry().clone();

        checker.process_tag(&Tag::text(vec!["word"; words].join(" ")));

        for (name, old) in before.iter() {
            let new = checker.registry().get(name).copied().unwrap_or_default();
            let expected = if old.mic_open { words as u64 } else { 0 };
            prop_assert_eq!(new.word_count - old.word_count, expected);
        }
    }

    #[test]
    fn word_counts_never_decrease_without_redeclaration(tags in stream()) {
        let mut checker = ScriptChecker::default();
        for tag in &tags {
            let before = checker.registry().clone();
            checker.process_tag(tag);
            if tag.kind == Some(TagKind::DramatisPersonae) {
                continue;
            }
            for (name, old) in before.iter() {
                let new = checker.registry().get(name).copied().unwrap_or_default();
                prop_assert!(new.word_count >= old.word_count);
            }
        }
    }

    #[test]
    fn position_stays_positive(tags in stream()) {
        let checker = checker_after(&tags);
        prop_assert!(checker.cursor().page >= 1);
        prop_assert!(checker.cursor().line >= 1);
        for error in checker.errors() {
            prop_assert!(error.page >= 1 && error.line >= 1);
        }
    }
}
