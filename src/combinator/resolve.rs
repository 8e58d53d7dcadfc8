//! The dependency-resolving combinator.

use crate::dependency::DependencyState;
use crate::tracing_compat::trace;
use crate::value::StatefulValue;
use std::future::Future;

/// Resolves a stateful value once all of its dependencies are valid.
///
/// Dependencies are scanned in iteration order, and the outcome follows
/// this precedence:
///
/// 1. If any dependency failed, the **first** such failure is returned.
///    The scan is deterministic and left-to-right; a failure wins even
///    when an unfulfilled dependency precedes it.
/// 2. Else, if every dependency is valid, `callback` is invoked exactly
///    once and its produced value is returned. The callback expresses its
///    own failure as the `Failed` value it returns; this combinator does
///    not intercept it.
/// 3. Else, at least one dependency is still unfulfilled:
///    [`StatefulValue::Unfulfilled`] is returned and `callback` is never
///    invoked.
///
/// An empty dependency sequence counts as all-valid, so `callback` is
/// always invoked when no dependencies are supplied.
///
/// The only suspension point is awaiting `callback` itself; dependencies
/// arrive already classified, never as pending work. No retry, timeout,
/// or cancellation is provided here — producers own those concerns.
///
/// # Examples
///
/// ```
/// use stateful_value::{StatefulValue, resolve_value};
///
/// # futures_lite::future::block_on(async {
/// let ready: StatefulValue<&str> = StatefulValue::Valid("ok");
/// let pending: StatefulValue<u32> = StatefulValue::Unfulfilled;
///
/// let derived = resolve_value(
///     || async { StatefulValue::Valid(1_u32) },
///     [ready.dependency_state(), pending.dependency_state()],
/// )
/// .await;
///
/// assert!(derived.is_unfulfilled());
/// # });
/// ```
pub async fn resolve_value<T, F, Fut, I>(callback: F, dependencies: I) -> StatefulValue<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = StatefulValue<T>>,
    I: IntoIterator,
    I::Item: Into<DependencyState>,
{
    let mut saw_unfulfilled = false;
    for dependency in dependencies {
        match dependency.into() {
            DependencyState::Failed(err) => {
                trace!("dependency failed, short-circuiting");
                return StatefulValue::Failed(err);
            }
            DependencyState::Unfulfilled => saw_unfulfilled = true,
            DependencyState::Valid => {}
        }
    }
    if saw_unfulfilled {
        trace!("dependencies still unfulfilled, not invoking callback");
        return StatefulValue::Unfulfilled;
    }
    trace!("all dependencies valid, awaiting callback");
    callback().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;
    use futures_lite::future::block_on;

    #[test]
    fn empty_dependencies_always_invoke_the_callback() {
        let result = block_on(resolve_value(
            || async { StatefulValue::Valid(99_u32) },
            std::iter::empty::<DependencyState>(),
        ));
        assert_eq!(result, StatefulValue::Valid(99));
    }

    #[test]
    fn failure_beats_an_earlier_unfulfilled_dependency() {
        let result: StatefulValue<u32> = block_on(resolve_value(
            || async { unreachable!("callback must not run") },
            [
                DependencyState::Unfulfilled,
                DependencyState::Failed(StateError::msg("Test error")),
            ],
        ));
        assert_eq!(result, StatefulValue::Failed(StateError::msg("Test error")));
    }

    #[test]
    fn first_of_several_failures_wins() {
        let result: StatefulValue<u32> = block_on(resolve_value(
            || async { unreachable!("callback must not run") },
            [
                DependencyState::Valid,
                DependencyState::Failed(StateError::msg("first")),
                DependencyState::Failed(StateError::msg("second")),
            ],
        ));
        assert_eq!(result.into_error().unwrap().to_string(), "first");
    }

    #[test]
    fn callback_failure_is_returned_as_is() {
        let result: StatefulValue<u32> = block_on(resolve_value(
            || async { StatefulValue::failed(std::io::Error::other("produce failed")) },
            std::iter::empty::<DependencyState>(),
        ));
        assert_eq!(result.into_error().unwrap().to_string(), "produce failed");
    }
}
