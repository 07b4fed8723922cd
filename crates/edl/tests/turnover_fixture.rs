use std::path::PathBuf;

use turnover_edl::{
    generate_edl, parse_edl, parse_edl_document, validate_events, EditType, EventIssue,
    ExportOptions, ExportShot, FrameCodeMode, ParseOptions, TrackType,
};

fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("edl")
        .join(name);

    std::fs::read_to_string(path).expect("fixture EDL should be readable")
}

#[test]
fn turnover_fixture_document_summary() {
    let content = load_fixture("reel1_turnover.edl");
    let document = parse_edl_document(&content, &ParseOptions::default());

    assert_eq!(document.title, "REEL_01_VFX_TURNOVER_V3");
    assert_eq!(document.fcm, FrameCodeMode::NonDropFrame);
    assert_eq!(document.total_events(), 7);
    assert_eq!(document.video_event_count(), 5);
    assert_eq!(document.audio_event_count(), 2);

    assert_eq!(document.warnings.len(), 1);
    assert_eq!(document.warnings[0].line, 20);
    assert_eq!(document.warnings[0].raw, "AUD  3");
}

#[test]
fn turnover_fixture_video_events() {
    let content = load_fixture("reel1_turnover.edl");
    let events = parse_edl(&content);

    let numbers: Vec<u32> = events.iter().map(|e| e.event_number).collect();
    assert_eq!(numbers, [1, 3, 4, 5, 7]);
    assert!(events.iter().all(|e| e.track_type == TrackType::Video));

    let first = &events[0];
    assert_eq!(first.reel_name, "A001C003");
    assert_eq!(first.frame_start, 1_241_525);
    assert_eq!(first.frame_end, 1_241_633);
    assert_eq!(first.duration_frames(), 108);
    assert_eq!(
        first.clip_name.as_deref(),
        Some("A001C003_230412_R2KX.mov")
    );
    assert_eq!(
        first.source_file.as_deref(),
        Some("A001C003_230412_R2KX.mov")
    );

    let outgoing = &events[1];
    assert_eq!(outgoing.clip_name, None);
    assert_eq!(outgoing.duration_frames(), 0);

    let dissolve = &events[2];
    assert_eq!(dissolve.edit_type, EditType::Dissolve);
    assert_eq!(dissolve.transition_duration, Some(24));
    assert_eq!(dissolve.comments.len(), 2);
    assert_eq!(dissolve.comments[1], "EFFECT NAME: CROSS DISSOLVE");

    let retimed = &events[3];
    assert_eq!(retimed.frame_start, 954_352);
    assert_eq!(retimed.frame_end, 954_400);
    assert_eq!(retimed.speed_changes.len(), 1);
    assert!((retimed.speed_changes[0].speed - 12.0).abs() < 1e-9);

    assert_eq!(events[4].clip_name.as_deref(), Some("BLACK"));
}

#[test]
fn turnover_fixture_strict_validation_flags_zero_length_outgoing_clip() {
    let content = load_fixture("reel1_turnover.edl");
    let events = parse_edl(&content);
    let issues = validate_events(&events, 24);

    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|issue| issue.event_number() == 3));
    assert!(matches!(issues[0], EventIssue::EmptySourceRange { .. }));
    assert!(matches!(issues[1], EventIssue::EmptyRecordRange { .. }));
}

#[test]
fn written_edl_reparses_to_same_timing() {
    let content = load_fixture("reel1_turnover.edl");
    let original = parse_edl(&content);

    let shots: Vec<ExportShot> = original.iter().map(ExportShot::from).collect();
    let written = generate_edl(&shots, &ExportOptions::new("REEL_01_VFX_TURNOVER_V3"));
    let reparsed = parse_edl(&written);

    assert_eq!(reparsed.len(), original.len());
    for (before, after) in original.iter().zip(&reparsed) {
        assert_eq!(after.reel_name, before.reel_name);
        assert_eq!(after.source_in, before.source_in);
        assert_eq!(after.source_out, before.source_out);
        assert_eq!(after.record_in, before.record_in);
        assert_eq!(after.record_out, before.record_out);
        assert_eq!(after.frame_start, before.frame_start);
        assert_eq!(after.frame_end, before.frame_end);
        assert_eq!(after.clip_name, before.clip_name);
        assert_eq!(after.source_file, before.source_file);
    }
}

#[test]
fn parsing_is_independent_across_threads() {
    let content = load_fixture("reel1_turnover.edl");
    let expected = parse_edl(&content);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let content = content.clone();
            std::thread::spawn(move || parse_edl(&content))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
