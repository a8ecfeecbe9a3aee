use crate::traits::{Coder, StackTracer};
use crate::types::alloc_type::Cow;
use crate::types::StackTrace;
use core::fmt::{self, Display};

/// A root failure: a message classified by a code.
///
/// The message is the only thing `{}` renders. The alternate form `{:#}` renders the
/// diagnostic report with the code and the recorded stack trace.
///
/// # Examples
///
/// ```
/// use coderr::SimpleError;
///
/// let err = SimpleError::new("quota exceeded", "QUOTA");
///
/// assert_eq!(err.to_string(), "quota exceeded");
/// assert_eq!(err.code(), "QUOTA");
/// assert!(format!("{:#}", err).starts_with("title=quota exceeded, code=QUOTA"));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct SimpleError {
    message: Cow<'static, str>,
    code: Cow<'static, str>,
    stack: StackTrace,
}

impl SimpleError {
    /// Creates a root failure, recording the caller's stack.
    #[track_caller]
    pub fn new<M, C>(message: M, code: C) -> Self
    where
        M: Into<Cow<'static, str>>,
        C: Into<Cow<'static, str>>,
    {
        let code = code.into();
        debug_assert!(!code.is_empty(), "failure codes must be non-empty");

        Self { message: message.into(), code, stack: StackTrace::capture() }
    }

    /// Returns the message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the stack recorded at construction.
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

impl Display for SimpleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&self.verbose(), f);
        }
        f.write_str(&self.message)
    }
}

impl core::error::Error for SimpleError {}

impl Coder for SimpleError {
    #[inline]
    fn code(&self) -> &str {
        &self.code
    }
}

impl StackTracer for SimpleError {
    #[inline]
    fn stack_trace(&self) -> &StackTrace {
        &self.stack
    }
}
