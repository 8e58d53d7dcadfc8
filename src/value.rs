//! The stateful value union: unfulfilled, failed, or valid.

use crate::dependency::DependencyState;
use crate::error::StateError;
use std::error::Error as StdError;

/// A value with built-in loading states.
///
/// - [`Unfulfilled`](Self::Unfulfilled): not yet available, e.g. not loaded yet
/// - [`Failed`](Self::Failed): the producer failed, e.g. an HTTP error
/// - [`Valid`](Self::Valid): the payload is ready
///
/// `Valid(None)` of a `StatefulValue<Option<T>>` is a valid value — an
/// explicit "there is no such thing" answer is distinct from "not
/// available yet".
///
/// Exactly one case applies to any instance; the predicates
/// [`is_unfulfilled`](Self::is_unfulfilled), [`is_failed`](Self::is_failed),
/// and [`is_valid`](Self::is_valid) are mutually exclusive and exhaustive.
#[derive(Debug, Clone, PartialEq)]
pub enum StatefulValue<T> {
    /// No value yet. This is the default state.
    Unfulfilled,
    /// The producer failed.
    Failed(StateError),
    /// The payload is ready.
    Valid(T),
}

impl<T> StatefulValue<T> {
    /// Wraps a concrete error as a failed value.
    #[must_use]
    pub fn failed<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Failed(StateError::new(err))
    }

    /// True iff the value is not available yet.
    #[must_use]
    pub const fn is_unfulfilled(&self) -> bool {
        matches!(self, Self::Unfulfilled)
    }

    /// True iff the producer failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// True iff the payload is ready.
    ///
    /// Matches the `Valid` case directly rather than negating the other
    /// predicates, so adding a case to the union is a compile error here
    /// instead of a silent misclassification.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The payload if valid, `None` otherwise. Never panics.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(payload) => Some(payload),
            Self::Unfulfilled | Self::Failed(_) => None,
        }
    }

    /// Consumes the value, returning the payload if valid.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Valid(payload) => Some(payload),
            Self::Unfulfilled | Self::Failed(_) => None,
        }
    }

    /// The error if the producer failed, `None` otherwise. Never panics.
    #[must_use]
    pub const fn error(&self) -> Option<&StateError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Unfulfilled | Self::Valid(_) => None,
        }
    }

    /// Consumes the value, returning the error if the producer failed.
    #[must_use]
    pub fn into_error(self) -> Option<StateError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Unfulfilled | Self::Valid(_) => None,
        }
    }

    /// Borrows the payload, preserving the state.
    #[must_use]
    pub fn as_ref(&self) -> StatefulValue<&T> {
        match self {
            Self::Unfulfilled => StatefulValue::Unfulfilled,
            Self::Failed(err) => StatefulValue::Failed(err.clone()),
            Self::Valid(payload) => StatefulValue::Valid(payload),
        }
    }

    /// Transforms the payload of a valid value; passes the other states
    /// through unchanged.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> StatefulValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Unfulfilled => StatefulValue::Unfulfilled,
            Self::Failed(err) => StatefulValue::Failed(err),
            Self::Valid(payload) => StatefulValue::Valid(f(payload)),
        }
    }

    /// Converts resolved producer output: `Ok` is valid, `Err` is failed.
    #[must_use]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match result {
            Ok(payload) => Self::Valid(payload),
            Err(err) => Self::failed(err),
        }
    }

    /// Converts an optional value: `None` is unfulfilled, `Some` is valid.
    ///
    /// For payloads where absence is itself a meaningful answer, wrap the
    /// `Option` instead: `StatefulValue::Valid(None)`.
    #[must_use]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(payload) => Self::Valid(payload),
            None => Self::Unfulfilled,
        }
    }

    /// Erases the payload, keeping only the classification.
    ///
    /// This is the form [`resolve_value`](crate::resolve_value) consumes,
    /// which lets one call mix dependencies of different payload types.
    #[must_use]
    pub fn dependency_state(&self) -> DependencyState {
        match self {
            Self::Unfulfilled => DependencyState::Unfulfilled,
            Self::Failed(err) => DependencyState::Failed(err.clone()),
            Self::Valid(_) => DependencyState::Valid,
        }
    }
}

impl<T> StatefulValue<Option<T>> {
    /// True iff the value is valid and the payload is present.
    ///
    /// Defined only for optional payloads: a non-optional payload cannot
    /// be absent, so the question does not arise there.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::Valid(Some(_)))
    }
}

// Manual impl: the derive would demand `T: Default` even though the
// default variant carries no payload.
impl<T> Default for StatefulValue<T> {
    fn default() -> Self {
        Self::Unfulfilled
    }
}

impl<T> From<T> for StatefulValue<T> {
    /// A plain payload is a valid value.
    fn from(payload: T) -> Self {
        Self::Valid(payload)
    }
}
