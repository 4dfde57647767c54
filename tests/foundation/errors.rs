//! Integration tests for error types

use airside_foundation::{Error, ErrorContext, ErrorKind, Placetype};

#[test]
fn lookup_error_strings() {
    let not_found = Error::not_found(Placetype::Gallery, "D16");
    assert_eq!(not_found.to_string(), "Gallery 'D16' not found");
    assert!(not_found.is_not_found());
    assert!(!not_found.is_multiple_candidates());
    assert_eq!(not_found.code(), Some("D16"));

    let multiple = Error::multiple_candidates(Placetype::Gallery, "D16");
    assert_eq!(multiple.to_string(), "Multiple candidates for gallery 'D16'");
    assert!(multiple.is_multiple_candidates());
}

#[test]
fn lookup_errors_name_their_kind() {
    assert_eq!(Error::not_found(Placetype::Gate, "A9").to_string(), "Gate 'A9' not found");
    assert_eq!(
        Error::multiple_candidates(Placetype::Terminal, "T2").to_string(),
        "Multiple candidates for terminal 'T2'"
    );
}

#[test]
fn frames_accumulate_innermost_first() {
    let err = Error::missing_property(30, "sfo:id")
        .with_frame("deriving checkpoints for boarding area 20")
        .with_frame("deriving boardingareas for terminal 10");
    let context = err.context.unwrap();
    assert_eq!(context.stack.len(), 2);
    assert_eq!(context.stack[1], "deriving boardingareas for terminal 10");
}

#[test]
fn context_carries_id_and_placetype() {
    let err = Error::unrecognized_value(9, "terminal_id", "T9")
        .with_context(ErrorContext::new().with_id(9).with_placetype(Placetype::Terminal));
    assert!(err.to_string().contains("unrecognized terminal_id 'T9'"));
    let context = err.context.unwrap();
    assert_eq!(context.id, Some(9));
    assert_eq!(context.placetype, Some(Placetype::Terminal));
}

#[test]
fn io_errors_convert() {
    let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.code().is_none());
}
