//! Optional tracing integration.
//!
//! With the `tracing-integration` feature enabled, `trace!` forwards to
//! [`tracing::trace!`]. When disabled it compiles to a no-op, so the
//! combinator carries zero logging overhead by default.

#[cfg(feature = "tracing-integration")]
pub(crate) use tracing::trace;

#[cfg(not(feature = "tracing-integration"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing-integration"))]
pub(crate) use trace;
