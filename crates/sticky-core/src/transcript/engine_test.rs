use super::*;

#[test]
fn test_new_engine_defaults() {
    let engine = TranscriptEngine::new();

    assert_eq!(engine.active_slot(), Slot::First);
    assert!(engine.is_empty());
    assert_eq!(engine.participant(Slot::First).name, "User 1");
    assert_eq!(engine.participant(Slot::Second).name, "User 2");
    assert_eq!(engine.participant(Slot::First).color, DEFAULT_FIRST_COLOR);
    assert_eq!(engine.participant(Slot::Second).color, DEFAULT_SECOND_COLOR);
}

#[test]
fn test_append_message_grows_transcript_by_one() {
    let mut engine = TranscriptEngine::new();

    let appended = engine.append_message("hello there");
    assert!(appended.is_some());

    assert_eq!(engine.len(), 1);
    let last = engine.messages().last().unwrap();
    assert_eq!(last.text, "hello there");
    assert_eq!(last.slot, Slot::First);
}

#[test]
fn test_append_message_trims_whitespace() {
    let mut engine = TranscriptEngine::new();

    engine.append_message("  padded  \n");

    assert_eq!(engine.messages()[0].text, "padded");
}

#[test]
fn test_append_message_attributes_to_active_slot_at_append_time() {
    let mut engine = TranscriptEngine::new();

    engine.append_message("from first");
    engine.switch_turn();
    engine.append_message("from second");
    // Switching back must not re-attribute the earlier message
    engine.switch_turn();

    assert_eq!(engine.messages()[0].slot, Slot::First);
    assert_eq!(engine.messages()[1].slot, Slot::Second);
}

#[test]
fn test_append_empty_input_is_silent_noop() {
    let mut engine = TranscriptEngine::new();

    assert!(engine.append_message("").is_none());
    assert!(engine.append_message("   ").is_none());
    assert!(engine.append_message("\t\n").is_none());

    assert_eq!(engine.len(), 0);
}

#[test]
fn test_switch_turn_toggles_and_is_self_inverse() {
    let mut engine = TranscriptEngine::new();
    let before = engine.active_slot();

    assert_eq!(engine.switch_turn(), Slot::Second);
    assert_eq!(engine.switch_turn(), before);
}

#[test]
fn test_clear_empties_transcript() {
    let mut engine = TranscriptEngine::new();
    engine.append_message("one");
    engine.switch_turn();
    engine.append_message("two");

    engine.clear();

    assert_eq!(engine.len(), 0);
    assert!(engine.is_empty());
    assert_eq!(engine.export_text(), "");

    // Clearing an already-empty transcript is fine too
    engine.clear();
    assert!(engine.is_empty());
}

#[test]
fn test_rename_participant_sets_trimmed_name() {
    let mut engine = TranscriptEngine::new();

    assert!(engine.rename_participant(Slot::Second, "  Bob  "));

    assert_eq!(engine.participant(Slot::Second).name, "Bob");
    // Other slot untouched
    assert_eq!(engine.participant(Slot::First).name, "User 1");
}

#[test]
fn test_rename_participant_empty_input_keeps_old_name() {
    let mut engine = TranscriptEngine::new();

    assert!(!engine.rename_participant(Slot::First, ""));
    assert!(!engine.rename_participant(Slot::First, "   "));

    assert_eq!(engine.participant(Slot::First).name, "User 1");
}

#[test]
fn test_rename_does_not_change_color() {
    let mut engine = TranscriptEngine::new();

    engine.rename_participant(Slot::First, "Alice");

    assert_eq!(engine.participant(Slot::First).color, DEFAULT_FIRST_COLOR);
}

#[test]
fn test_render_lines_resolves_names_at_render_time() {
    let mut engine = TranscriptEngine::new();
    engine.append_message("hi");

    assert_eq!(engine.render_lines(), vec!["User 1: hi"]);

    // Renaming relabels the already-appended line
    engine.rename_participant(Slot::First, "Alice");
    assert_eq!(engine.render_lines(), vec!["Alice: hi"]);
}

#[test]
fn test_export_text_line_count_matches_transcript_length() {
    let mut engine = TranscriptEngine::new();
    engine.append_message("a");
    engine.switch_turn();
    engine.append_message("b");
    engine.switch_turn();
    engine.append_message("c");

    let export = engine.export_text();
    let lines: Vec<&str> = export.lines().collect();

    assert_eq!(lines.len(), engine.len());
    assert_eq!(lines[0], "User 1: a");
    assert_eq!(lines[1], "User 2: b");
    assert_eq!(lines[2], "User 1: c");
}

#[test]
fn test_export_text_of_empty_transcript_is_empty() {
    let engine = TranscriptEngine::new();

    assert_eq!(engine.export_text(), "");
    assert_eq!(engine.export_text().lines().count(), 0);
}

#[test]
fn test_with_participants_uses_given_identities() {
    let engine = TranscriptEngine::with_participants([
        Participant::new("Left", "#111111"),
        Participant::new("Right", "#222222"),
    ]);

    assert_eq!(engine.active_participant().name, "Left");
    assert_eq!(engine.participant(Slot::Second).color, "#222222");
}

#[test]
fn test_slot_try_from_rejects_out_of_range() {
    assert_eq!(Slot::try_from(0).unwrap(), Slot::First);
    assert_eq!(Slot::try_from(1).unwrap(), Slot::Second);
    assert!(Slot::try_from(2).is_err());
    assert!(Slot::try_from(usize::MAX).is_err());
}

#[test]
fn test_slot_other_and_index() {
    assert_eq!(Slot::First.other(), Slot::Second);
    assert_eq!(Slot::Second.other(), Slot::First);
    assert_eq!(Slot::First.index(), 0);
    assert_eq!(Slot::Second.index(), 1);
}

#[test]
fn test_end_to_end_session_scenario() {
    let mut engine = TranscriptEngine::new();
    assert_eq!(engine.active_slot(), Slot::First);

    engine.append_message("hi");
    assert_eq!(engine.len(), 1);
    assert_eq!(engine.messages()[0].slot, Slot::First);
    assert_eq!(engine.messages()[0].text, "hi");

    assert_eq!(engine.switch_turn(), Slot::Second);

    engine.append_message("hello");
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.messages()[1].slot, Slot::Second);
    assert_eq!(engine.messages()[1].text, "hello");

    assert_eq!(engine.render_lines(), vec!["User 1: hi", "User 2: hello"]);

    engine.rename_participant(Slot::Second, "Alice");
    assert_eq!(engine.render_lines(), vec!["User 1: hi", "Alice: hello"]);

    engine.clear();
    assert!(engine.messages().is_empty());
}
