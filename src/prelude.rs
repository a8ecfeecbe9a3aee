//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use coderr::prelude::*;
//!
//! fn read_settings() -> Result<String, WrapError> {
//!     std::fs::read_to_string("/nonexistent/settings.toml").coded("SETTINGS_READ")
//! }
//!
//! let err = read_settings().unwrap_err();
//! assert_eq!(inspect::code(&err), "SETTINGS_READ");
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`ensure!`]
//! - **Constructors**: [`new`], [`wrap`], [`with_context`], [`func`]
//! - **Accessors**: the [`inspect`] module
//! - **Types**: [`SimpleError`], [`WrapError`], [`ErrorFunc`], [`BoxError`]
//! - **Traits**: [`ResultExt`]

// Macros
pub use crate::{ensure, fail};

// Constructors and accessors
pub use crate::annotate::{func, new, with_context, wrap};
pub use crate::inspect;

// Core types
pub use crate::types::{BoxError, ErrorFunc, SimpleError, WrapError, CODE_UNKNOWN};

// Traits
pub use crate::traits::ResultExt;
