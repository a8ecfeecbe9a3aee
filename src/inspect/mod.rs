//! Accessors that recover annotations from arbitrary error values.
//!
//! None of these functions fail. When a capability is absent they return a documented
//! default: the error itself for [`cause`], [`CODE_UNKNOWN`] for [`code`], and `None` for
//! [`context`] and [`stack_trace`].
//!
//! Causes are found through [`Error::source`], so any error participates in chain
//! walking. Codes, payloads and stack traces are recognized on this crate's own
//! failures only ([`SimpleError`] and [`WrapError`]), probed on the exact value passed in
//! and looking through a [`SharedError`] handle; they are never inherited from a cause.
//! Third-party types implementing the capability traits are read through the generic
//! accessors [`code_of`], [`context_of`] and [`stack_trace_of`] instead.
//!
//! # Examples
//!
//! ```
//! use coderr::{inspect, wrap, CODE_UNKNOWN};
//! use std::io;
//!
//! let err = wrap(io::Error::other("disk full"), "IO_ERR");
//!
//! assert_eq!(inspect::code(&err), "IO_ERR");
//! assert_eq!(inspect::cause(&err).to_string(), "disk full");
//! assert_eq!(inspect::code(inspect::cause(&err)), CODE_UNKNOWN);
//! assert_eq!(err.to_string(), "disk full");
//! ```
use crate::traits::{Coder, Contexter, StackTracer};
use crate::types::{SharedError, SimpleError, StackTrace, WrapError, CODE_UNKNOWN};
use core::any::Any;
use core::error::Error;
use core::fmt::{self, Display};

/// Upper bound on the links [`cause`] follows.
///
/// Wrapping always adds a new outer layer, so chains are acyclic; the bound only stops
/// a misbehaving third-party `source()` from looping forever.
pub const MAX_CAUSE_DEPTH: usize = 128;

/// Returns the innermost cause of `err`, or `err` itself when it has none.
///
/// # Examples
///
/// ```
/// use coderr::{inspect, new, wrap};
///
/// let root = new("unreachable", "NET_DOWN");
/// let err = wrap(wrap(root, "FETCH"), "SYNC");
///
/// assert_eq!(inspect::code(inspect::cause(&err)), "NET_DOWN");
/// ```
pub fn cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    chain(err).take(MAX_CAUSE_DEPTH + 1).last().unwrap_or(err)
}

/// [`cause`] for an optional error; `None` stays `None`.
#[inline]
pub fn cause_opt<'a>(
    err: Option<&'a (dyn Error + 'static)>,
) -> Option<&'a (dyn Error + 'static)> {
    err.map(cause)
}

/// Returns the code of `err`, or [`CODE_UNKNOWN`] when it carries none.
///
/// Only `err` itself is probed: a wrapping failure's code is authoritative at its level.
#[inline]
pub fn code<'a>(err: &'a (dyn Error + 'static)) -> &'a str {
    as_coder(err).map_or(CODE_UNKNOWN, Coder::code)
}

/// [`code`] for an optional error; `None` yields [`CODE_UNKNOWN`].
#[inline]
pub fn code_opt<'a>(err: Option<&'a (dyn Error + 'static)>) -> &'a str {
    err.map_or(CODE_UNKNOWN, code)
}

/// Returns the context payload attached to `err`.
#[inline]
pub fn context<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a (dyn Any + Send + Sync)> {
    as_contexter(err)?.context()
}

/// Returns the context payload attached to `err` when it is a `T`.
///
/// # Examples
///
/// ```
/// use coderr::{inspect, with_context};
///
/// #[derive(Debug, PartialEq)]
/// struct Request { id: u64 }
///
/// let err = with_context(std::fmt::Error, Request { id: 9 });
///
/// assert_eq!(inspect::context_as::<Request>(&*err), Some(&Request { id: 9 }));
/// assert_eq!(inspect::context_as::<String>(&*err), None);
/// ```
#[inline]
pub fn context_as<'a, T: Any>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    context(err)?.downcast_ref::<T>()
}

/// Returns the stack trace `err` recorded at construction.
#[inline]
pub fn stack_trace<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a StackTrace> {
    as_stack_tracer(err).map(StackTracer::stack_trace)
}

/// Returns the code of any [`Coder`], including third-party implementors.
///
/// # Examples
///
/// ```
/// use coderr::inspect;
/// use coderr::traits::Coder;
///
/// #[derive(Debug)]
/// struct Throttled;
///
/// impl Coder for Throttled {
///     fn code(&self) -> &str {
///         "THROTTLED"
///     }
/// }
///
/// assert_eq!(inspect::code_of(&Throttled), "THROTTLED");
/// ```
#[inline]
pub fn code_of<E: Coder + ?Sized>(err: &E) -> &str {
    err.code()
}

/// Returns the payload of any [`Contexter`], including third-party implementors.
#[inline]
pub fn context_of<E: Contexter + ?Sized>(err: &E) -> Option<&(dyn Any + Send + Sync)> {
    err.context()
}

/// Returns the stack trace of any [`StackTracer`], including third-party implementors.
#[inline]
pub fn stack_trace_of<E: StackTracer + ?Sized>(err: &E) -> &StackTrace {
    err.stack_trace()
}

/// Probes `err` for the code-bearing capability.
///
/// Only [`WrapError`] and [`SimpleError`] are recognized, directly or behind a
/// [`SharedError`]; other `Coder` implementors are invisible through `dyn Error`.
pub fn as_coder<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a dyn Coder> {
    let err = peel(err);
    if let Some(wrapped) = err.downcast_ref::<WrapError>() {
        return Some(wrapped);
    }
    err.downcast_ref::<SimpleError>().map(|simple| simple as &dyn Coder)
}

/// Probes `err` for the context-bearing capability. Only [`WrapError`] carries one.
pub fn as_contexter<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a dyn Contexter> {
    peel(err).downcast_ref::<WrapError>().map(|wrapped| wrapped as &dyn Contexter)
}

/// Probes `err` for the stack-bearing capability of [`WrapError`] or [`SimpleError`].
pub fn as_stack_tracer<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a dyn StackTracer> {
    let err = peel(err);
    if let Some(wrapped) = err.downcast_ref::<WrapError>() {
        return Some(wrapped);
    }
    err.downcast_ref::<SimpleError>().map(|simple| simple as &dyn StackTracer)
}

/// Looks through a shared handle to the error it points at.
fn peel<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    match err.downcast_ref::<SharedError>() {
        Some(shared) => &**shared,
        None => err,
    }
}

/// Iterates over `err` followed by each successive [`Error::source`].
///
/// # Examples
///
/// ```
/// use coderr::{inspect, wrap};
///
/// let err = wrap(wrap("refused", "CONNECT"), "LOGIN");
/// let codes: Vec<&str> = inspect::chain(&err).map(inspect::code).collect();
///
/// assert_eq!(codes, ["LOGIN", "CONNECT", "CODE_UNKNOWN"]);
/// ```
#[inline]
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Iterator returned by [`chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}

/// Renders the diagnostic report of any error.
///
/// The report reads `title=<message>, code=<code>` followed by the recorded frames, one
/// `\n<function>\n\t<file>:<line>` entry each. Errors without a stack trace render the
/// header only. This is what `{:#}` prints for this crate's failures.
///
/// # Examples
///
/// ```
/// use coderr::inspect;
///
/// let plain = std::fmt::Error;
/// assert_eq!(
///     inspect::report(&plain).to_string(),
///     "title=an error occurred when formatting an argument, code=CODE_UNKNOWN"
/// );
/// ```
#[inline]
pub fn report<'a>(err: &'a (dyn Error + 'static)) -> Report<'a> {
    Report { error: err }
}

/// Display adapter returned by [`report`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    error: &'a (dyn Error + 'static),
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "title={}, code={}", self.error, code(self.error))?;
        if let Some(stack) = stack_trace(self.error) {
            Display::fmt(stack, f)?;
        }
        Ok(())
    }
}
