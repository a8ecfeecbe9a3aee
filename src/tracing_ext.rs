//! Tracing integration for coderr.
//!
//! Attaches the active `tracing` span as the context payload of a failure, so the
//! observation point can tell which operation was running when it was annotated.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! coderr = { version = "0.3", features = ["tracing"] }
//! ```

use core::fmt::{self, Display};

use tracing::Span;

use crate::annotate::with_context;
use crate::types::BoxError;

/// Context payload naming a span.
///
/// Retrieve it with [`inspect::context_as::<SpanContext>`](crate::inspect::context_as).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanContext {
    name: &'static str,
}

impl SpanContext {
    /// Captures the name of `span`, or `"unknown"` for a disabled span.
    pub fn from_span(span: &Span) -> Self {
        Self { name: span.metadata().map(|m| m.name()).unwrap_or("unknown") }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Display for SpanContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in span '{}'", self.name)
    }
}

/// Extension trait for `Result` types to attach span context to errors.
pub trait ResultSpanExt<T> {
    /// Attaches the current span as the error's context payload.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use coderr::tracing_ext::ResultSpanExt;
    ///
    /// fn sync_account(id: u64) -> Result<(), coderr::BoxError> {
    ///     let _guard = tracing::info_span!("sync_account", id).entered();
    ///     remote_call(id).with_current_span()
    /// }
    /// ```
    fn with_current_span(self) -> Result<T, BoxError>;

    /// Attaches a specific span as the error's context payload.
    fn with_span(self, span: &Span) -> Result<T, BoxError>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    fn with_current_span(self) -> Result<T, BoxError> {
        self.with_span(&Span::current())
    }

    #[track_caller]
    fn with_span(self, span: &Span) -> Result<T, BoxError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(with_context(e, SpanContext::from_span(span))),
        }
    }
}

/// Annotates `error` with the current span.
#[track_caller]
pub fn instrument_error<E>(error: E) -> BoxError
where
    E: Into<BoxError>,
{
    with_context(error, SpanContext::from_span(&Span::current()))
}
