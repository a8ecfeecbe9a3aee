//! Narrow capability contracts a failure may satisfy.
//!
//! Each trait exposes exactly one piece of annotation. [`SimpleError`](crate::SimpleError)
//! and [`WrapError`](crate::WrapError) implement the ones they carry.
//!
//! The `dyn Error` accessors in [`inspect`](crate::inspect) recognize only these two
//! types, and find causes through [`Error::source`] rather than [`Causer`]. Third-party
//! implementors are read through the generic accessors such as
//! [`inspect::code_of`](crate::inspect::code_of).
use crate::types::StackTrace;
use core::any::Any;
use core::error::Error;

/// A failure built around another failure.
///
/// For arbitrary errors the same capability is probed through [`Error::source`].
pub trait Causer {
    /// Returns the immediate underlying error.
    fn cause(&self) -> &(dyn Error + 'static);
}

/// A failure classified by a caller-assigned code.
pub trait Coder {
    fn code(&self) -> &str;
}

/// A failure carrying an opaque diagnostic payload.
pub trait Contexter {
    /// Returns the attached payload, if one was attached.
    fn context(&self) -> Option<&(dyn Any + Send + Sync)>;
}

/// A failure that recorded where it was constructed.
pub trait StackTracer {
    fn stack_trace(&self) -> &StackTrace;
}
