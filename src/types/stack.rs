//! Capture-time stack traces.
//!
//! A [`StackTrace`] is recorded by every failure constructor. It always knows the exact
//! call site of the constructor (through `#[track_caller]`), and with the `backtrace`
//! feature it also records the full unwound call stack. Symbol resolution is deferred
//! until the frames are first inspected, so constructing a failure only pays for the
//! unwind itself.
//!
//! Frames belonging to the capture machinery and to this crate's constructors are
//! trimmed, so the first frame is always the code that created the failure.
//!
//! # Examples
//!
//! ```
//! use coderr::{inspect, wrap};
//!
//! let err = wrap(std::fmt::Error, "FMT");
//! let trace = inspect::stack_trace(&err).unwrap();
//!
//! assert_eq!(trace.caller().line(), line!() - 3);
//! assert!(!trace.frames().is_empty());
//! ```
use crate::types::alloc_type::String;
use crate::types::ErrorVec;
use core::fmt::{self, Debug, Display};
use core::panic::Location;
#[cfg(feature = "serde")]
use serde::Serialize;
use smallvec::smallvec;

#[cfg(feature = "backtrace")]
use crate::types::alloc_type::Vec;
#[cfg(feature = "backtrace")]
use std::sync::OnceLock;

#[cfg(feature = "backtrace")]
const CRATE_PATH: &str = concat!(env!("CARGO_CRATE_NAME"), "::");
#[cfg(feature = "backtrace")]
const CRATE_TRAIT_PATH: &str = concat!(" as ", env!("CARGO_CRATE_NAME"), "::");

/// A single recorded frame: function, file and line.
///
/// Any part may be unknown when the platform cannot resolve it.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    function: Option<String>,
    file: Option<String>,
    line: Option<u32>,
}

impl Frame {
    /// Builds a frame from a source location. The function name is unknown.
    pub fn from_location(location: &Location<'_>) -> Self {
        Self { function: None, file: Some(location.file().into()), line: Some(location.line()) }
    }

    /// Returns the demangled function name, without its hash suffix.
    #[inline]
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// Returns the source file path.
    #[inline]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Returns the source line.
    #[inline]
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    #[cfg(feature = "backtrace")]
    fn from_symbol(symbol: &backtrace::BacktraceSymbol) -> Self {
        Self {
            function: symbol.name().map(|name| std::format!("{:#}", name)),
            file: symbol.filename().map(|path| path.display().to_string()),
            line: symbol.lineno(),
        }
    }

    /// Whether this frame belongs to the unwinder or to one of this crate's constructors.
    #[cfg(feature = "backtrace")]
    fn is_internal(&self) -> bool {
        let Some(name) = self.function.as_deref() else {
            return false;
        };
        let path = name.trim_start_matches('<');
        if path.starts_with("backtrace::") {
            return true;
        }
        (path.starts_with(CRATE_PATH) || name.contains(CRATE_TRAIT_PATH))
            && !name.contains("::tests::")
    }
}

impl Display for Frame {
    /// Renders as `function\n\tfile:line`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function().unwrap_or("unknown"))?;
        f.write_str("\n\t")?;
        f.write_str(self.file().unwrap_or("unknown"))?;
        match self.line {
            Some(line) => write!(f, ":{}", line),
            None => Ok(()),
        }
    }
}

/// Ordered frames recorded when a failure was constructed, innermost first.
#[derive(Clone)]
pub struct StackTrace {
    caller: &'static Location<'static>,
    #[cfg(feature = "backtrace")]
    raw: backtrace::Backtrace,
    #[cfg(feature = "backtrace")]
    frames: OnceLock<ErrorVec<Frame>>,
    #[cfg(not(feature = "backtrace"))]
    frames: ErrorVec<Frame>,
}

impl StackTrace {
    /// Records the stack at the caller of the enclosing `#[track_caller]` chain.
    #[track_caller]
    #[inline(never)]
    pub(crate) fn capture() -> Self {
        let caller = Location::caller();

        #[cfg(feature = "backtrace")]
        {
            Self { caller, raw: backtrace::Backtrace::new_unresolved(), frames: OnceLock::new() }
        }

        #[cfg(not(feature = "backtrace"))]
        {
            Self { caller, frames: smallvec![Frame::from_location(caller)] }
        }
    }

    /// Returns the exact source location that constructed the failure.
    #[inline]
    pub fn caller(&self) -> &'static Location<'static> {
        self.caller
    }

    /// Returns the recorded frames, resolving symbols on first use.
    ///
    /// The first frame is the constructor's caller. When symbols cannot be resolved
    /// only that caller frame is reported. Optimized builds without debuginfo may inline
    /// the caller away, in which case [`caller`](Self::caller) is the reliable location.
    pub fn frames(&self) -> &[Frame] {
        #[cfg(feature = "backtrace")]
        {
            self.frames.get_or_init(|| self.resolve())
        }

        #[cfg(not(feature = "backtrace"))]
        {
            &self.frames
        }
    }

    /// Returns the topmost frame.
    #[inline]
    pub fn top(&self) -> Option<&Frame> {
        self.frames().first()
    }

    #[cfg(feature = "backtrace")]
    fn resolve(&self) -> ErrorVec<Frame> {
        let mut raw = self.raw.clone();
        raw.resolve();

        let symbols: Vec<Frame> = raw
            .frames()
            .iter()
            .flat_map(|frame| frame.symbols())
            .map(Frame::from_symbol)
            .collect();

        // Without a recognizable internal frame the cut point is unknown.
        let Some(last_internal) = symbols.iter().rposition(Frame::is_internal) else {
            return smallvec![Frame::from_location(self.caller)];
        };

        let trimmed: ErrorVec<Frame> = symbols.into_iter().skip(last_internal + 1).collect();
        if trimmed.is_empty() {
            return smallvec![Frame::from_location(self.caller)];
        }
        trimmed
    }
}

impl Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackTrace").field("caller", &self.caller).finish_non_exhaustive()
    }
}

impl Display for StackTrace {
    /// Writes every frame on its own line, each preceded by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in self.frames() {
            write!(f, "\n{}", frame)?;
        }
        Ok(())
    }
}
