use coderr::{inspect, new, wrap, SharedError, CODE_UNKNOWN};
use std::error::Error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// A third-party error exposing a cause through `source()` only.
#[derive(Debug)]
struct Outer<E> {
    inner: E,
}

impl<E: fmt::Display> fmt::Display for Outer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "outer: {}", self.inner)
    }
}

impl<E: Error + 'static> Error for Outer<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}

/// An error whose `source()` points back at itself.
#[derive(Debug)]
struct Looping;

impl fmt::Display for Looping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("looping")
    }
}

impl Error for Looping {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self)
    }
}

#[test]
fn cause_of_error_without_source_is_itself() {
    let err = io::Error::other("plain");
    assert!(std::ptr::addr_eq(inspect::cause(&err), &err as &dyn Error));
}

#[test]
fn cause_of_wrapped_error_is_the_wrapped_error() {
    let err1 = wrap(new("err2", "code2"), "code3");
    let cause = inspect::cause(&err1);

    assert!(std::ptr::addr_eq(cause, &**err1.inner()));
    assert_eq!(inspect::code(cause), "code2");
}

#[test]
fn cause_descends_through_third_party_sources() {
    let outer = Outer { inner: io::Error::other("root") };
    let expected = inspect::cause(&outer).to_string();

    let err = wrap(Outer { inner: io::Error::other("root") }, "C");

    assert_eq!(expected, "root");
    assert_eq!(inspect::cause(&err).to_string(), expected);
    assert!(inspect::cause(&err).downcast_ref::<io::Error>().is_some());
}

#[test]
fn cause_walks_every_wrapping_layer() {
    let err = wrap(wrap(wrap(io::Error::other("deep"), "A"), "B"), "C");

    assert_eq!(inspect::chain(&err).count(), 4);
    assert_eq!(inspect::cause(&err).to_string(), "deep");
}

#[test]
fn cause_stops_on_a_cyclic_source() {
    let err = Looping;
    let cause = inspect::cause(&err);

    assert_eq!(cause.to_string(), "looping");
    assert_eq!(
        inspect::chain(&err).take(inspect::MAX_CAUSE_DEPTH + 10).count(),
        inspect::MAX_CAUSE_DEPTH + 10
    );
}

#[test]
fn cause_opt_of_none_is_none() {
    assert!(inspect::cause_opt(None).is_none());

    let err = wrap(io::Error::other("x"), "C");
    assert_eq!(inspect::cause_opt(Some(&err)).map(|e| e.to_string()), Some("x".to_owned()));
}

#[test]
fn code_defaults_to_unknown() {
    assert_eq!(inspect::code(&fmt::Error), CODE_UNKNOWN);
    assert_eq!(inspect::code(&io::Error::other("err1")), CODE_UNKNOWN);
    assert_eq!(inspect::code_opt(None), CODE_UNKNOWN);
    assert_eq!(inspect::code(&new("err2", "code2")), "code2");
}

#[test]
fn code_is_probed_on_the_outermost_error_only() {
    let err = Outer { inner: new("inner", "INNER") };
    assert_eq!(inspect::code(&err), CODE_UNKNOWN);

    let wrapped = wrap(new("inner", "INNER"), "OUTER");
    assert_eq!(inspect::code(&wrapped), "OUTER");
}

#[test]
fn probes_look_through_shared_handles() {
    let shared: SharedError = Arc::new(wrap(io::Error::other("x"), "SHARED").with_context(8_u8));

    assert_eq!(inspect::code(&shared), "SHARED");
    assert_eq!(inspect::context_as::<u8>(&shared), Some(&8));
    assert!(inspect::stack_trace(&shared).is_some());
}

#[test]
fn context_is_absent_unless_attached() {
    assert!(inspect::context(&new("x", "C")).is_none());
    assert!(inspect::context(&wrap(io::Error::other("x"), "C")).is_none());
    assert!(inspect::context(&io::Error::other("x")).is_none());

    let err = wrap(io::Error::other("x"), "C").with_context(String::from("payload"));
    assert_eq!(inspect::context_as::<String>(&err).map(String::as_str), Some("payload"));
    assert!(inspect::context_as::<u32>(&err).is_none());
}

#[test]
fn stack_trace_is_recorded_by_both_variants_only() {
    assert!(inspect::stack_trace(&new("x", "C")).is_some());
    assert!(inspect::stack_trace(&wrap(fmt::Error, "C")).is_some());
    assert!(inspect::stack_trace(&fmt::Error).is_none());
}

#[test]
fn capability_probes_match_the_variant() {
    let root = new("x", "C");
    let wrapped = wrap(fmt::Error, "C");

    assert!(inspect::as_coder(&root).is_some());
    assert!(inspect::as_contexter(&root).is_none());
    assert!(inspect::as_stack_tracer(&root).is_some());

    assert!(inspect::as_coder(&wrapped).is_some());
    assert!(inspect::as_contexter(&wrapped).is_some());
    assert!(inspect::as_coder(&fmt::Error).is_none());
}

#[test]
fn chain_yields_outermost_first() {
    let err = wrap(wrap("refused", "CONNECT"), "LOGIN");
    let codes: Vec<&str> = inspect::chain(&err).map(inspect::code).collect();

    assert_eq!(codes, ["LOGIN", "CONNECT", CODE_UNKNOWN]);
}

#[test]
fn report_of_plain_error_has_header_only() {
    let err = io::Error::other("broken pipe");
    assert_eq!(inspect::report(&err).to_string(), "title=broken pipe, code=CODE_UNKNOWN");
}

/// A third-party failure implementing the capability traits itself.
#[derive(Debug)]
struct Throttled {
    stack: coderr::StackTrace,
}

impl fmt::Display for Throttled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("throttled")
    }
}

impl Error for Throttled {}

impl coderr::Coder for Throttled {
    fn code(&self) -> &str {
        "TP_CODE"
    }
}

impl coderr::Contexter for Throttled {
    fn context(&self) -> Option<&(dyn std::any::Any + Send + Sync)> {
        Some(&42_u16)
    }
}

impl coderr::StackTracer for Throttled {
    fn stack_trace(&self) -> &coderr::StackTrace {
        &self.stack
    }
}

#[test]
fn generic_accessors_read_third_party_implementors() {
    let stack = new("x", "C").stack_trace().clone();
    let err = Throttled { stack };

    assert_eq!(inspect::code_of(&err), "TP_CODE");
    assert_eq!(inspect::context_of(&err).and_then(|c| c.downcast_ref::<u16>()), Some(&42));
    assert!(inspect::stack_trace_of(&err).top().is_some());

    assert_eq!(inspect::code(&err), CODE_UNKNOWN);
    assert!(inspect::context(&err).is_none());
}

#[test]
fn generic_accessors_also_accept_crate_failures() {
    let wrapped = wrap(io::Error::other("x"), "W").with_context(3_u8);

    assert_eq!(inspect::code_of(&wrapped), inspect::code(&wrapped));
    assert!(inspect::context_of(&wrapped).is_some());
    assert_eq!(
        inspect::stack_trace_of(&new("x", "C")).caller().file(),
        inspect::stack_trace(&wrapped).map(|s| s.caller().file()).unwrap_or_default()
    );
}

fn code_of_boxed(err: &coderr::BoxError) -> &str {
    inspect::code(&**err)
}

#[test]
fn borrowed_annotations_outlive_the_probe_call() {
    let err: coderr::BoxError = wrap(wrap("refused", "INNER"), "OUTER").into();

    let code = code_of_boxed(&err);
    let cause = inspect::cause(&*err);
    let report = inspect::report(&*err).to_string();

    assert_eq!(code, "OUTER");
    assert_eq!(cause.to_string(), "refused");
    assert!(report.starts_with("title=refused, code=OUTER"));
}
