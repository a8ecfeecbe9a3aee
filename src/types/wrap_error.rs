use crate::traits::{Causer, Coder, Contexter, StackTracer};
use crate::types::alloc_type::{Arc, Cow};
use crate::types::{BoxError, Payload, SharedError, StackTrace};
use core::any::Any;
use core::error::Error;
use core::fmt::{self, Display};

/// A failure wrapping an existing error with a code, a stack trace and an optional
/// context payload.
///
/// The inner error is shared: cloning a `WrapError` clones a handle, not the error.
/// Displaying with `{}` renders exactly what the inner error renders, so logging a
/// wrapped error is indistinguishable from logging the original.
///
/// # Examples
///
/// ```
/// use coderr::WrapError;
/// use std::io;
///
/// let err = WrapError::new(io::Error::other("disk full"), "IO_ERR").with_context(17_u32);
///
/// assert_eq!(err.to_string(), "disk full");
/// assert_eq!(err.code(), "IO_ERR");
/// assert_eq!(err.context().and_then(|c| c.downcast_ref::<u32>()), Some(&17));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct WrapError {
    inner: SharedError,
    code: Cow<'static, str>,
    stack: StackTrace,
    context: Option<Payload>,
}

impl WrapError {
    /// Wraps `error`, recording the caller's stack.
    #[track_caller]
    pub fn new<E, C>(error: E, code: C) -> Self
    where
        E: Into<BoxError>,
        C: Into<Cow<'static, str>>,
    {
        let boxed: BoxError = error.into();
        Self::from_shared(Arc::from(boxed), code)
    }

    /// Wraps an already shared error without copying it.
    #[track_caller]
    pub fn from_shared<C>(inner: SharedError, code: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        let code = code.into();
        debug_assert!(!code.is_empty(), "failure codes must be non-empty");

        Self { inner, code, stack: StackTrace::capture(), context: None }
    }

    /// Attaches (or replaces) the context payload.
    #[inline]
    pub fn with_context<P>(mut self, payload: P) -> Self
    where
        P: Any + Send + Sync,
    {
        self.set_context(payload);
        self
    }

    /// Replaces the context payload in place.
    ///
    /// Takes `&mut self`: re-annotating a failure shared across threads requires the
    /// caller's own synchronization.
    #[inline]
    pub fn set_context<P>(&mut self, payload: P)
    where
        P: Any + Send + Sync,
    {
        self.context = Some(Arc::new(payload));
    }

    /// Returns a shared handle to the wrapped error.
    #[inline]
    pub fn inner(&self) -> &SharedError {
        &self.inner
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn context(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.context.as_deref()
    }

    #[inline]
    pub fn stack_trace(&self) -> &StackTrace {
        &self.stack
    }

    /// Returns a display adapter for the diagnostic report.
    #[inline]
    pub fn verbose(&self) -> crate::inspect::Report<'_> {
        crate::inspect::report(self)
    }
}

impl Display for WrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&self.verbose(), f);
        }
        Display::fmt(&*self.inner, f)
    }
}

impl Error for WrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.inner)
    }
}

impl Causer for WrapError {
    #[inline]
    fn cause(&self) -> &(dyn Error + 'static) {
        &*self.inner
    }
}

impl Coder for WrapError {
    #[inline]
    fn code(&self) -> &str {
        &self.code
    }
}

impl Contexter for WrapError {
    #[inline]
    fn context(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.context.as_deref()
    }
}

impl StackTracer for WrapError {
    #[inline]
    fn stack_trace(&self) -> &StackTrace {
        &self.stack
    }
}
