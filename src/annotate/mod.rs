//! Constructors that create or annotate failures.
//!
//! - [`new`] creates a root failure from a message and a code.
//! - [`wrap`] wraps any error with a code and a stack trace.
//! - [`with_context`] attaches an opaque payload, reusing an existing wrapping layer.
//! - [`func`] builds a reusable [`ErrorFunc`] factory.
//!
//! Every constructor is `#[track_caller]`: the recorded stack starts at the code that
//! called it. The `_opt` forms accept `Option`s and map `None` to `None`, so an absent
//! error is never turned into a failure.
//!
//! # Examples
//!
//! ```
//! use coderr::{annotate, inspect};
//! use std::io;
//!
//! let err = annotate::wrap(io::Error::other("disk full"), "IO_ERR");
//! let err = annotate::with_context(err, "saving /var/data");
//!
//! assert_eq!(err.to_string(), "disk full");
//! assert_eq!(inspect::code(&*err), "IO_ERR");
//! assert_eq!(inspect::context_as::<&str>(&*err), Some(&"saving /var/data"));
//! ```
use crate::types::alloc_type::{Box, Cow, String};
use crate::types::{BoxError, ErrorFunc, SimpleError, WrapError};
use core::any::Any;

/// Creates a root failure.
///
/// # Examples
///
/// ```
/// let err = coderr::new("quota exceeded", "QUOTA");
/// assert_eq!(coderr::inspect::code(&err), "QUOTA");
/// ```
#[track_caller]
#[inline]
pub fn new<M, C>(message: M, code: C) -> SimpleError
where
    M: Into<Cow<'static, str>>,
    C: Into<Cow<'static, str>>,
{
    let err = SimpleError::new(message, code);
    #[cfg(feature = "tracing")]
    tracing::trace!(code = err.code(), message = err.message(), "failure created");
    err
}

/// Wraps `err` with `code`, recording the caller's stack.
///
/// The result displays exactly as `err` does, and [`cause`](crate::inspect::cause)
/// recovers `err` (or its own innermost cause).
///
/// # Examples
///
/// ```
/// use coderr::{inspect, wrap};
///
/// let err = wrap("connection reset", "NET_RESET");
/// assert_eq!(err.to_string(), "connection reset");
/// assert_eq!(inspect::code(&err), "NET_RESET");
/// ```
#[track_caller]
#[inline]
pub fn wrap<E, C>(err: E, code: C) -> WrapError
where
    E: Into<BoxError>,
    C: Into<Cow<'static, str>>,
{
    let err = WrapError::new(err, code);
    #[cfg(feature = "tracing")]
    tracing::trace!(code = err.code(), "failure wrapped");
    err
}

/// [`wrap`] for an optional error; `None` stays `None`.
#[track_caller]
pub fn wrap_opt<E, C>(err: Option<E>, code: C) -> Option<WrapError>
where
    E: Into<BoxError>,
    C: Into<Cow<'static, str>>,
{
    match err {
        Some(err) => Some(wrap(err, code)),
        None => None,
    }
}

/// Attaches an opaque context payload to `err`.
///
/// When `err` already is a [`WrapError`], its payload is replaced in place and the same
/// allocation is returned: no second layer is added and the original stack trace is
/// kept. Any other error is wrapped in a new [`WrapError`] that inherits its code, or
/// [`CODE_UNKNOWN`](crate::CODE_UNKNOWN) when it has none.
///
/// # Examples
///
/// ```
/// use coderr::{inspect, with_context, wrap};
///
/// let err = with_context(wrap("timeout", "NET_TIMEOUT"), 3_u8);
/// let err = with_context(err, 4_u8);
///
/// assert_eq!(inspect::context_as::<u8>(&*err), Some(&4));
/// assert_eq!(inspect::cause(&*err).to_string(), "timeout");
/// ```
#[track_caller]
pub fn with_context<E, P>(err: E, payload: P) -> BoxError
where
    E: Into<BoxError>,
    P: Any + Send + Sync,
{
    let mut err: BoxError = err.into();

    if let Some(wrapped) = err.downcast_mut::<WrapError>() {
        wrapped.set_context(payload);
        return err;
    }

    let code = String::from(crate::inspect::code(&*err));
    let wrapped = WrapError::new(err, code).with_context(payload);
    #[cfg(feature = "tracing")]
    tracing::trace!(code = wrapped.code(), "context attached");
    Box::new(wrapped)
}

/// [`with_context`] for an optional error; `None` stays `None`.
#[track_caller]
pub fn with_context_opt<E, P>(err: Option<E>, payload: P) -> Option<BoxError>
where
    E: Into<BoxError>,
    P: Any + Send + Sync,
{
    match err {
        Some(err) => Some(with_context(err, payload)),
        None => None,
    }
}

/// Creates a factory producing a fresh root failure on every call.
///
/// # Examples
///
/// ```
/// let boom = coderr::func("boom", "E1");
/// let (a, b) = (boom.call(), boom.call());
///
/// assert_eq!(a.to_string(), "boom");
/// assert_eq!(coderr::inspect::code(&b), "E1");
/// ```
pub fn func<M, C>(message: M, code: C) -> ErrorFunc
where
    M: Into<Cow<'static, str>>,
    C: Into<Cow<'static, str>>,
{
    ErrorFunc::from_parts(message, code)
}
