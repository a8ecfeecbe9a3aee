//! Failure values and the pieces they are built from.
//!
//! - [`SimpleError`]: a root failure created from a message and a code.
//! - [`WrapError`]: a failure wrapping an existing error with a code and an optional
//!   context payload.
//! - [`StackTrace`] / [`Frame`]: the capture-time call stack both variants record.
//! - [`ErrorFunc`]: a reusable factory producing fresh [`SimpleError`]s.
//!
//! # Examples
//!
//! ```
//! use coderr::{inspect, new, wrap};
//!
//! let root = new("disk full", "IO_FULL");
//! let err = wrap(root, "SAVE_FAILED");
//!
//! assert_eq!(err.to_string(), "disk full");
//! assert_eq!(inspect::code(&err), "SAVE_FAILED");
//! assert_eq!(inspect::code(inspect::cause(&err)), "IO_FULL");
//! ```
use crate::types::alloc_type::{Arc, Box};
use core::any::Any;
use core::error::Error;
use smallvec::SmallVec;

pub(crate) mod alloc_type;
pub mod error_func;
pub mod simple_error;
pub mod stack;
pub mod wrap_error;

pub use error_func::ErrorFunc;
pub use simple_error::SimpleError;
pub use stack::{Frame, StackTrace};
pub use wrap_error::WrapError;

/// Code reported for errors that carry no code of their own.
pub const CODE_UNKNOWN: &str = "CODE_UNKNOWN";

/// SmallVec-backed collection used for recorded frames.
///
/// Uses inline storage for one element, which covers the caller-only trace recorded
/// without the `backtrace` feature.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// The opaque, owned failure value passed between layers.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A failure shared between several owners, as held inside a [`WrapError`].
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// An attached context payload.
pub type Payload = Arc<dyn Any + Send + Sync + 'static>;
