//! Extension trait for annotating the error side of a `Result`.
//!
//! `Ok` values pass through untouched, so an absent error is never turned into a
//! failure.
//!
//! # Examples
//!
//! ```
//! use coderr::traits::ResultExt;
//! use coderr::WrapError;
//!
//! fn load_config() -> Result<String, WrapError> {
//!     std::fs::read_to_string("/nonexistent/config.toml").coded("CONFIG_READ")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.code(), "CONFIG_READ");
//! ```
use crate::types::alloc_type::Cow;
use crate::types::{BoxError, WrapError};
use core::any::Any;

/// Annotates `Result` errors with codes and context payloads.
///
/// Both methods record the stack of their caller.
pub trait ResultExt<T, E> {
    /// Wraps the error with `code`.
    ///
    /// # Examples
    ///
    /// ```
    /// use coderr::traits::ResultExt;
    ///
    /// let ok: Result<u8, std::fmt::Error> = Ok(1);
    /// assert_eq!(ok.coded("FMT").unwrap(), 1);
    ///
    /// let err: Result<u8, std::fmt::Error> = Err(std::fmt::Error);
    /// assert_eq!(err.coded("FMT").unwrap_err().code(), "FMT");
    /// ```
    fn coded<C>(self, code: C) -> Result<T, WrapError>
    where
        C: Into<Cow<'static, str>>;

    /// Attaches a context payload to the error, reusing an existing wrapping layer.
    ///
    /// # Examples
    ///
    /// ```
    /// use coderr::traits::ResultExt;
    /// use coderr::inspect;
    ///
    /// let err = Err::<(), _>(coderr::new("locked", "DB_LOCKED"))
    ///     .attach("table=users")
    ///     .unwrap_err();
    ///
    /// assert_eq!(inspect::code(&*err), "DB_LOCKED");
    /// assert_eq!(inspect::context_as::<&str>(&*err), Some(&"table=users"));
    /// ```
    fn attach<P>(self, payload: P) -> Result<T, BoxError>
    where
        P: Any + Send + Sync;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    #[inline]
    fn coded<C>(self, code: C) -> Result<T, WrapError>
    where
        C: Into<Cow<'static, str>>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(crate::annotate::wrap(err, code)),
        }
    }

    #[track_caller]
    #[inline]
    fn attach<P>(self, payload: P) -> Result<T, BoxError>
    where
        P: Any + Send + Sync,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(crate::annotate::with_context(err, payload)),
        }
    }
}
