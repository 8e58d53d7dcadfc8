//! Payload-erased dependency classification.

use crate::error::StateError;
use crate::value::StatefulValue;

/// The classification of a dependency, with the payload erased.
///
/// [`resolve_value`](crate::resolve_value) only needs to know *whether*
/// each dependency is ready, not what it holds, so dependencies are
/// supplied in this form. Erasing the payload type is what lets a single
/// call aggregate a `StatefulValue<User>` and a `StatefulValue<Quota>`.
///
/// Obtained from [`StatefulValue::dependency_state`] or via the `From`
/// conversions below.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DependencyState {
    /// The dependency is not available yet.
    #[default]
    Unfulfilled,
    /// The dependency failed; carries the shared error.
    Failed(StateError),
    /// The dependency is ready.
    Valid,
}

impl DependencyState {
    /// True iff the dependency is not available yet.
    #[must_use]
    pub const fn is_unfulfilled(&self) -> bool {
        matches!(self, Self::Unfulfilled)
    }

    /// True iff the dependency failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// True iff the dependency is ready.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The error if the dependency failed, `None` otherwise.
    #[must_use]
    pub const fn error(&self) -> Option<&StateError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Unfulfilled | Self::Valid => None,
        }
    }
}

impl<T> From<&StatefulValue<T>> for DependencyState {
    fn from(value: &StatefulValue<T>) -> Self {
        value.dependency_state()
    }
}

impl<T> From<StatefulValue<T>> for DependencyState {
    fn from(value: StatefulValue<T>) -> Self {
        match value {
            StatefulValue::Unfulfilled => Self::Unfulfilled,
            StatefulValue::Failed(err) => Self::Failed(err),
            StatefulValue::Valid(_) => Self::Valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unfulfilled() {
        assert!(DependencyState::default().is_unfulfilled());
    }

    #[test]
    fn conversion_by_reference_erases_the_payload() {
        let valid = StatefulValue::Valid(vec![1_u8, 2, 3]);
        assert_eq!(DependencyState::from(&valid), DependencyState::Valid);
        // The original is untouched.
        assert!(valid.is_valid());

        let pending: StatefulValue<String> = StatefulValue::Unfulfilled;
        assert_eq!(DependencyState::from(&pending), DependencyState::Unfulfilled);
    }

    #[test]
    fn conversion_by_value_moves_the_error() {
        let failed: StatefulValue<u32> = StatefulValue::Failed(StateError::msg("Test error"));
        let state = DependencyState::from(failed);
        assert!(state.is_failed());
        assert_eq!(state.error(), Some(&StateError::msg("Test error")));
    }

    #[test]
    fn predicates_are_mutually_exclusive() {
        for state in [
            DependencyState::Unfulfilled,
            DependencyState::Failed(StateError::msg("Test error")),
            DependencyState::Valid,
        ] {
            let hits = [state.is_unfulfilled(), state.is_failed(), state.is_valid()]
                .iter()
                .filter(|hit| **hit)
                .count();
            assert_eq!(hits, 1, "state {state:?} must match exactly one case");
        }
    }
}
