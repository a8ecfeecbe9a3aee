use coderr::{inspect, ErrorFunc, Frame, SimpleError, WrapError};
use std::error::Error;
use std::io;
use std::panic::Location;


static NOT_FOUND: ErrorFunc = ErrorFunc::new("record not found", "DB_NOT_FOUND");

#[test]
fn simple_error_exposes_message_code_and_stack() {
    let line = line!() + 1;
    let err = SimpleError::new("quota exceeded", "QUOTA");

    assert_eq!(err.message(), "quota exceeded");
    assert_eq!(err.code(), "QUOTA");
    assert_eq!(err.stack_trace().caller().line(), line);
    assert!(err.source().is_none());
}

#[test]
fn simple_error_clone_keeps_annotations() {
    let err = SimpleError::new("quota exceeded", "QUOTA");
    let copy = err.clone();

    assert_eq!(copy.to_string(), err.to_string());
    assert_eq!(copy.code(), err.code());
    assert_eq!(copy.stack_trace().caller(), err.stack_trace().caller());
}

#[test]
fn wrap_error_source_is_the_inner_error() {
    let err = WrapError::new(io::Error::other("root cause"), "IO");

    let source = err.source().expect("wrap error always has a source");
    assert_eq!(source.to_string(), "root cause");
    assert!(std::ptr::addr_eq(source, &**err.inner()));
}

#[test]
fn wrap_error_set_context_replaces_payload() {
    let mut err = WrapError::new(io::Error::other("x"), "IO");
    assert!(err.context().is_none());

    err.set_context(1_u16);
    err.set_context("now a string");

    assert!(err.context().and_then(|c| c.downcast_ref::<u16>()).is_none());
    assert_eq!(inspect::context_as::<&str>(&err), Some(&"now a string"));
}

#[test]
fn wrap_error_from_shared_keeps_the_same_inner() {
    let inner: coderr::SharedError = std::sync::Arc::new(io::Error::other("shared"));
    let first = WrapError::from_shared(inner.clone(), "A");
    let second = WrapError::from_shared(inner.clone(), "B");

    assert!(std::sync::Arc::ptr_eq(first.inner(), second.inner()));
    assert!(std::ptr::addr_eq(inspect::cause(&first), inspect::cause(&second)));
    assert_eq!((first.code(), second.code()), ("A", "B"));
}

#[test]
fn error_func_in_static_yields_fresh_failures() {
    let first = NOT_FOUND.call();
    let second = NOT_FOUND.call();

    assert_eq!(first.to_string(), "record not found");
    assert_eq!(second.code(), "DB_NOT_FOUND");
    assert_ne!(first.stack_trace().caller(), second.stack_trace().caller());
}

#[test]
fn error_func_matches_by_code() {
    let err = NOT_FOUND.call();
    let other = SimpleError::new("record not found", "DB_TIMEOUT");

    assert!(NOT_FOUND.matches(&err));
    assert!(NOT_FOUND.matches(&coderr::wrap(NOT_FOUND.call(), "DB_NOT_FOUND")));
    assert!(!NOT_FOUND.matches(&other));
    assert!(!NOT_FOUND.matches(&io::Error::other("record not found")));
}

#[test]
fn error_func_from_parts_accepts_owned_strings() {
    let factory = ErrorFunc::from_parts(format!("limit {} reached", 10), String::from("LIMIT"));

    assert_eq!(factory.message(), "limit 10 reached");
    assert_eq!(factory.call().code(), "LIMIT");
    assert_eq!(factory.clone(), factory);
}

#[test]
fn frame_from_location_has_no_function() {
    let location = Location::caller();
    let frame = Frame::from_location(location);

    assert_eq!(frame.function(), None);
    assert_eq!(frame.file(), Some(location.file()));
    assert_eq!(frame.line(), Some(location.line()));
    assert!(frame.to_string().starts_with("unknown\n\t"));
}

#[test]
fn stack_trace_always_has_a_top_frame() {
    let err = SimpleError::new("x", "C");
    let stack = err.stack_trace();

    assert!(stack.top().is_some());
    assert_eq!(stack.top(), stack.frames().first());
}

#[cfg(not(feature = "backtrace"))]
#[test]
fn stack_trace_without_unwinder_holds_the_caller_only() {
    let err = SimpleError::new("x", "C");
    let stack = err.stack_trace();

    assert_eq!(stack.frames(), &[Frame::from_location(stack.caller())]);
}

#[cfg(feature = "serde")]
#[test]
fn frame_serializes_as_a_structured_record() {
    let frame = Frame::from_location(Location::caller());
    let json = serde_json::to_value(&frame).unwrap();

    assert_eq!(json["function"], serde_json::Value::Null);
    assert_eq!(json["line"], frame.line().unwrap());
    assert!(json["file"].as_str().unwrap().ends_with("mod.rs"));
}
