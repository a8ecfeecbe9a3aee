//! Annotate any error with a stable code, an opaque context payload and a capture-time
//! stack trace, and recover the original failure through any number of wrapping layers.
//!
//! coderr does not ask you to adopt a new base error type. Failures travel as ordinary
//! `core::error::Error` values (usually a [`BoxError`]); at an observation point the
//! [`inspect`] accessors probe them for a cause, a code, a context payload or a stack
//! trace, falling back to defaults when a capability is absent.
//!
//! # Examples
//!
//! ## Wrapping a Failure
//!
//! ```
//! use coderr::{inspect, wrap};
//! use std::io;
//!
//! let err = wrap(io::Error::other("disk full"), "IO_ERR");
//!
//! assert_eq!(inspect::code(&err), "IO_ERR");
//! assert_eq!(inspect::cause(&err).to_string(), "disk full");
//! assert_eq!(err.to_string(), "disk full");
//! ```
//!
//! ## Attaching Context
//!
//! ```
//! use coderr::{inspect, with_context, wrap};
//!
//! let err = with_context(wrap("stale lock", "DB_LOCKED"), ("users", 42_u64));
//!
//! assert_eq!(inspect::context_as::<(&str, u64)>(&*err), Some(&("users", 42)));
//! ```
//!
//! ## Diagnostic Rendering
//!
//! ```
//! let err = coderr::new("quota exceeded", "QUOTA");
//!
//! assert_eq!(format!("{}", err), "quota exceeded");
//! assert!(format!("{:#}", err).starts_with("title=quota exceeded, code=QUOTA\n"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Constructors that create and annotate failures
pub mod annotate;
/// Accessors that recover annotations from arbitrary errors
pub mod inspect;
/// Failure creation macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability contracts and extension traits
pub mod traits;
/// Failure values, stack traces and factories
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}

pub use annotate::{func, new, with_context, with_context_opt, wrap, wrap_opt};
pub use traits::*;
pub use types::{
    BoxError, ErrorFunc, ErrorVec, Frame, Payload, SharedError, SimpleError, StackTrace,
    WrapError, CODE_UNKNOWN,
};
