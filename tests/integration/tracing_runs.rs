//! Tracing a run across engine and debug layers

use scriptck_debug::{TraceEvent, Tracer, TracerConfig};
use scriptck_engine::{CheckConfig, ScriptChecker};
use scriptck_foundation::Tag;

fn traced(config: TracerConfig, tags: &[Tag]) -> (Tracer, usize) {
    let mut tracer = Tracer::new(config);
    let mut checker = ScriptChecker::new(CheckConfig::default());
    for tag in tags {
        tracer.check_tag(&mut checker, tag);
    }
    let report = tracer.finish(checker);
    (tracer, report.error_count())
}

#[test]
fn traced_run_matches_untraced_run() {
    let tags = vec![
        Tag::dp("A"),
        Tag::char("A"),
        Tag::unmute("A"),
        Tag::char("A"),
        Tag::text("Words, words, words."),
    ];
    let untraced = ScriptChecker::default().run(&tags);
    let (_, errors) = traced(TracerConfig::new().enabled(), &tags);
    assert_eq!(errors, untraced.error_count());
}

#[test]
fn trace_pins_issues_to_their_tag() {
    let (tracer, _) = traced(
        TracerConfig::new().enabled(),
        &[Tag::dp("A"), Tag::text("\n"), Tag::mute("A")],
    );

    let checked = tracer.buffer().by_type("tag_checked");
    assert_eq!(
        checked[2].event,
        TraceEvent::TagChecked {
            index: 2,
            kind: "mute".to_string(),
            page: 1,
            line: 2,
            issues: vec!["Character mutes who's already muted: A".to_string()],
        }
    );
}

#[test]
fn small_buffer_keeps_latest() {
    let tags: Vec<Tag> = (0..50).map(|_| Tag::exeunt()).collect();
    let (tracer, _) = traced(TracerConfig::new().enabled().with_buffer_size(5), &tags);
    assert_eq!(tracer.buffer().len(), 5);
    assert!(matches!(
        tracer.buffer().last().map(|r| &r.event),
        Some(TraceEvent::RunFinished { tags: 50, .. })
    ));
}
