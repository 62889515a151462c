//! Generic, boundary-level error handling.
//!
//! Typed errors (`snafu`-derived enums) belong to the crates that produce
//! them; this crate provides the catch-all error type used where callers only
//! need to log or attach context, not match on variants.

use std::fmt::Display;

/// An opaque error suitable for "log it and move on" call sites.
pub type GenericError = anyhow::Error;

/// Constructs a [`GenericError`].
///
/// Accepts a string literal, a format string with arguments, or any value
/// implementing `Debug + Display` (including existing errors, whose source
/// chain is preserved).
#[macro_export]
macro_rules! generic_error {
    // Thin veneer over `anyhow::anyhow`, kept as our own macro so callers
    // only ever see this crate's vocabulary.
    ($msg:literal $(,)?) => { $crate::_anyhow!($msg) };
    ($err:expr $(,)?) => { $crate::_anyhow!($err) };
    ($fmt:expr, $($arg:tt)*) => { $crate::_anyhow!($fmt, $($arg)*) };
}

#[doc(hidden)]
pub use anyhow::anyhow as _anyhow;

mod private {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> {}
}

/// Extension trait for attaching context to fallible results.
///
/// Wraps `anyhow::Context` under different method names so it can coexist
/// with `snafu::ResultExt` in the same module without method-resolution
/// clashes.
pub trait ErrorContext<T, E>: private::Sealed {
    /// Wraps the error value with additional context.
    fn error_context<C>(self, context: C) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static;

    /// Wraps the error value with context that is only evaluated if an error
    /// actually occurred.
    fn with_error_context<C, F>(self, f: F) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    Result<T, E>: anyhow::Context<T, E>,
{
    fn error_context<C>(self, context: C) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static,
    {
        <Self as anyhow::Context<T, E>>::context(self, context)
    }

    fn with_error_context<C, F>(self, context: F) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        <Self as anyhow::Context<T, E>>::with_context(self, context)
    }
}
