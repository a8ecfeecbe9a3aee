//! Capability contracts and extension traits.
//!
//! - [`Causer`], [`Coder`], [`Contexter`], [`StackTracer`]: one annotation each,
//!   implemented by this crate's failures. [`inspect`](crate::inspect) recognizes them on
//!   this crate's failures, and on any implementor through its generic `*_of` accessors.
//! - [`ResultExt`]: annotate the error side of a `Result`.
//!
//! # Examples
//!
//! ```
//! use coderr::traits::{Coder, StackTracer};
//!
//! fn describe<E: Coder + StackTracer>(err: &E) -> String {
//!     format!("{} at line {}", err.code(), err.stack_trace().caller().line())
//! }
//!
//! let err = coderr::new("bad input", "INPUT");
//! assert!(describe(&err).starts_with("INPUT at line"));
//! ```

pub mod capability;
pub mod result_ext;

pub use capability::{Causer, Coder, Contexter, StackTracer};
pub use result_ext::ResultExt;
