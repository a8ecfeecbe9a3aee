//! Shorthand macros for creating root failures.
//!
//! - [`macro@crate::fail`] formats a message and builds a [`SimpleError`](crate::SimpleError).
//! - [`macro@crate::ensure`] returns early with such a failure when a condition is false.
//!
//! Both expand at the call site, so the recorded stack starts in the calling function.
//!
//! # Examples
//!
//! ```
//! use coderr::{ensure, fail, inspect, BoxError};
//!
//! fn withdraw(balance: u64, amount: u64) -> Result<u64, BoxError> {
//!     ensure!(amount > 0, "AMOUNT_ZERO", "amount must be positive");
//!     if amount > balance {
//!         return Err(fail!("INSUFFICIENT", "balance {} below {}", balance, amount).into());
//!     }
//!     Ok(balance - amount)
//! }
//!
//! let err = withdraw(5, 9).unwrap_err();
//! assert_eq!(err.to_string(), "balance 5 below 9");
//! assert_eq!(inspect::code(&*err), "INSUFFICIENT");
//! ```

/// Builds a [`SimpleError`](crate::SimpleError) with a formatted message.
///
/// # Syntax
///
/// `fail!(code, "format string", args...)`
///
/// # Examples
///
/// ```
/// use coderr::fail;
///
/// let user = "ada";
/// let err = fail!("AUTH_DENIED", "user {} may not sign in", user);
///
/// assert_eq!(err.to_string(), "user ada may not sign in");
/// assert_eq!(err.code(), "AUTH_DENIED");
/// ```
#[macro_export]
macro_rules! fail {
    ($code:expr, $($arg:tt)+) => {
        $crate::annotate::new($crate::__private::format!($($arg)+), $code)
    };
}

/// Returns `Err(fail!(..).into())` from the enclosing function unless `cond` holds.
///
/// # Syntax
///
/// `ensure!(cond, code, "format string", args...)`
///
/// # Examples
///
/// ```
/// use coderr::{ensure, SimpleError};
///
/// fn parse_port(port: u32) -> Result<u16, SimpleError> {
///     ensure!(port <= 65535, "PORT_RANGE", "port {} out of range", port);
///     Ok(port as u16)
/// }
///
/// assert_eq!(parse_port(80).unwrap(), 80);
/// assert_eq!(parse_port(70000).unwrap_err().code(), "PORT_RANGE");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $code:expr, $($arg:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err($crate::fail!($code, $($arg)+).into());
        }
    };
}
