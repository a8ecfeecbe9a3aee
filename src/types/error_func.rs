use crate::types::alloc_type::Cow;
use crate::types::SimpleError;
use core::error::Error;

/// A reusable factory for root failures sharing one message and code.
///
/// Each [`call`](ErrorFunc::call) produces a distinct [`SimpleError`] with its own stack
/// trace, so predeclared errors still report where they actually happened. The
/// constructor is `const`, which lets factories live in `static`s.
///
/// # Examples
///
/// ```
/// use coderr::ErrorFunc;
///
/// static NOT_FOUND: ErrorFunc = ErrorFunc::new("record not found", "DB_NOT_FOUND");
///
/// fn lookup(id: u32) -> Result<&'static str, coderr::SimpleError> {
///     match id {
///         1 => Ok("alice"),
///         _ => Err(NOT_FOUND.call()),
///     }
/// }
///
/// let err = lookup(7).unwrap_err();
/// assert_eq!(err.to_string(), "record not found");
/// assert!(NOT_FOUND.matches(&err));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFunc {
    message: Cow<'static, str>,
    code: Cow<'static, str>,
}

impl ErrorFunc {
    /// Creates a factory from static strings.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in a `static`) if `code` is empty.
    pub const fn new(message: &'static str, code: &'static str) -> Self {
        assert!(!code.is_empty(), "failure codes must be non-empty");
        Self { message: Cow::Borrowed(message), code: Cow::Borrowed(code) }
    }

    /// Creates a factory from owned or borrowed strings.
    pub fn from_parts<M, C>(message: M, code: C) -> Self
    where
        M: Into<Cow<'static, str>>,
        C: Into<Cow<'static, str>>,
    {
        Self { message: message.into(), code: code.into() }
    }

    /// Produces a fresh failure, recording the caller's stack.
    #[track_caller]
    pub fn call(&self) -> SimpleError {
        SimpleError::new(self.message.clone(), self.code.clone())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether `err` carries this factory's code.
    pub fn matches(&self, err: &(dyn Error + 'static)) -> bool {
        crate::inspect::code(err) == self.code
    }
}
