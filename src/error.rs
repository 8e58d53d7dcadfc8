//! Opaque failure payload for stateful values.
//!
//! There is no error taxonomy here: any error object is accepted as a
//! failure marker without further classification. [`StateError`] wraps the
//! underlying error in an `Arc` so one failure can fan out to every value
//! derived from it without copying the error itself.

use core::fmt;
use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

/// Ad-hoc message error backing [`StateError::msg`].
#[derive(Debug, Error)]
#[error("{0}")]
struct Message(String);

/// A cloneable, shareable failure payload.
///
/// Wraps any `std::error::Error + Send + Sync` behind an `Arc`. Cloning is
/// cheap and clones refer to the same underlying error, so a dependency
/// failure propagated through several derived values stays one object.
///
/// Two `StateError`s compare equal when they share the same underlying
/// error, or when they render identically via `Display`.
#[derive(Clone)]
pub struct StateError {
    inner: Arc<dyn StdError + Send + Sync + 'static>,
}

impl StateError {
    /// Wraps a concrete error.
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(err),
        }
    }

    /// Creates an error from a plain message.
    pub fn msg<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            inner: Arc::new(Message(message.into())),
        }
    }

    /// Adopts an already shared error without re-wrapping it.
    #[must_use]
    pub fn from_arc(inner: Arc<dyn StdError + Send + Sync + 'static>) -> Self {
        Self { inner }
    }

    /// Borrows the underlying error.
    #[must_use]
    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }

    /// Attempts to downcast the underlying error to a concrete type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref()
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateError").field(&self.inner).finish()
    }
}

impl StdError for StateError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

impl PartialEq for StateError {
    fn eq(&self, other: &Self) -> bool {
        // Compare data pointers only; vtable pointers are not stable
        // across codegen units.
        let a = Arc::as_ptr(&self.inner).cast::<()>();
        let b = Arc::as_ptr(&other.inner).cast::<()>();
        core::ptr::eq(a, b) || self.inner.to_string() == other.inner.to_string()
    }
}
