use super::*;

fn detector(triggers: &[&str]) -> MeetDetector {
    MeetDetector::new(r"\w", triggers).unwrap()
}

#[test]
fn trigger_opens_meet_at_cursor() {
    let meet = detector(&["."]).detect("obj.", 4);
    assert_eq!(meet.base, "");
    assert!(meet.should_expand);
    assert_eq!(meet.position, 4);
    assert_eq!(meet.position_to_query, 4);
}

#[test]
fn word_at_end_of_line_expands_from_its_start() {
    let meet = detector(&["."]).detect("foo", 3);
    assert_eq!(
        meet,
        CompletionMeet {
            position: 0,
            position_to_query: 1,
            base: "foo".to_string(),
            should_expand: true,
        }
    );
}

#[test]
fn word_after_trigger_queries_from_cursor() {
    let meet = detector(&["."]).detect("obj.fi", 6);
    assert_eq!(meet.base, "fi");
    assert_eq!(meet.position, 4);
    assert_eq!(meet.position_to_query, 5);
    assert!(meet.should_expand);
}

#[test]
fn cursor_mid_word_does_not_expand() {
    let meet = detector(&["."]).detect("foobar", 3);
    assert_eq!(meet.base, "foo");
    assert!(!meet.should_expand);

    let meet = detector(&["."]).detect("obj.x", 4);
    assert!(!meet.should_expand, "word char after trigger blocks expansion");
}

#[test]
fn whitespace_around_cursor_does_not_expand() {
    let d = detector(&["."]);
    for (line, col) in [("", 0), ("   ", 2), ("a + b", 2), ("x = ", 4), ("(", 1)] {
        let meet = d.detect(line, col);
        assert!(!meet.should_expand, "line={line:?} col={col}");
        assert_eq!(meet.base, "");
        assert_eq!(meet.position, col);
    }
}

#[test]
fn cursor_at_column_zero() {
    let meet = detector(&["."]).detect("foo", 0);
    assert!(!meet.should_expand);
    assert_eq!(meet.position, 0);
    assert_eq!(meet.base, "");
}

#[test]
fn cursor_beyond_line_is_clamped() {
    let meet = detector(&["."]).detect("let foo", 42);
    assert_eq!(meet.base, "foo");
    assert_eq!(meet.position, 4);
    assert_eq!(meet.position_to_query, 5);
    assert!(meet.should_expand);
}

#[test]
fn multi_char_trigger_uses_final_char() {
    let d = detector(&["::", "->"]);
    let meet = d.detect("std::", 5);
    assert!(meet.should_expand);
    assert_eq!(meet.position_to_query, 5);

    let meet = d.detect("ptr>", 4);
    assert!(meet.should_expand, "only the last char of `->` is the boundary");

    let meet = d.detect("ptr-", 4);
    assert!(!meet.should_expand);
}

#[test]
fn empty_trigger_set_never_matches() {
    let d = MeetDetector::new(r"\w", &[] as &[&str]).unwrap();
    let meet = d.detect("obj.", 4);
    assert!(!meet.should_expand);

    let d = detector(&[""]);
    assert!(!d.detect("obj.", 4).should_expand);
}

#[test]
fn regex_metachar_triggers_are_escaped() {
    let d = detector(&["(", "*", "|"]);
    assert!(d.detect("call(", 5).should_expand);
    assert!(d.detect("a*", 2).should_expand);
    assert!(!d.detect("a+", 2).should_expand);
}

#[test]
fn columns_are_chars_not_bytes() {
    let meet = detector(&["."]).detect("é.né", 4);
    assert_eq!(meet.base, "né");
    assert_eq!(meet.position, 2);
    assert!(meet.should_expand);
}

#[test]
fn custom_word_pattern() {
    let d = MeetDetector::new(r"[a-z-]", &["."]).unwrap();
    let meet = d.detect("(foo-bar", 8);
    assert_eq!(meet.base, "foo-bar");
    assert_eq!(meet.position, 1);
}

#[test]
fn invalid_word_pattern_is_rejected() {
    assert!(MeetDetector::new("[", &["."]).is_err());
}

#[test]
fn cached_free_function_degrades_on_invalid_pattern() {
    let meet = completion_meet("foo", 3, "[", &["."]);
    assert!(!meet.should_expand);
    assert_eq!(meet.position, 3);

    let meet = completion_meet("foo", 3, r"\w", &["."]);
    assert!(meet.should_expand);
    assert_eq!(meet.base, "foo");
}

#[test]
fn cached_free_function_matches_detector() {
    let d = detector(&["."]);
    for (line, col) in [("obj.", 4), ("foo", 3), ("a.bc d", 4), ("", 0)] {
        assert_eq!(completion_meet(line, col, r"\w", &["."]), d.detect(line, col));
    }
}
