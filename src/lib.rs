//! Stateful values: a three-state convention for data that may still be
//! loading, may have failed, or may be ready.
//!
//! # Overview
//!
//! Data-fetching and derived-computation layers (UI state stores, query
//! caches, view models) need to distinguish three situations that a plain
//! `Option<T>` conflates: the value is not available *yet*, the value
//! failed to load, and the value is here. [`StatefulValue`] makes the
//! three cases explicit:
//!
//! - [`StatefulValue::Unfulfilled`] — not yet available (still loading,
//!   or never requested).
//! - [`StatefulValue::Failed`] — the producer failed; carries a shared
//!   [`StateError`].
//! - [`StatefulValue::Valid`] — the payload is ready. `Valid(None)` of a
//!   `StatefulValue<Option<T>>` is a *valid* explicit-absence value, never
//!   "still loading".
//!
//! Classification is exhaustive and mutually exclusive by construction;
//! each case has a predicate ([`is_unfulfilled`](StatefulValue::is_unfulfilled),
//! [`is_failed`](StatefulValue::is_failed), [`is_valid`](StatefulValue::is_valid))
//! and extraction never panics ([`value`](StatefulValue::value),
//! [`error`](StatefulValue::error)).
//!
//! Derived values are built with [`resolve_value`]: given the states of
//! the inputs a computation depends on, it short-circuits on the first
//! failed dependency, stays unfulfilled while any dependency is, and
//! awaits the producer callback only once every dependency is valid.
//!
//! # Module Structure
//!
//! - [`value`]: the [`StatefulValue`] union, predicates, and adapters
//! - [`error`]: [`StateError`], the opaque shareable failure payload
//! - [`dependency`]: [`DependencyState`], payload-erased classification
//!   for heterogeneous dependency lists
//! - [`combinator`]: the [`resolve_value`] combinator
//!
//! # Example
//!
//! ```
//! use stateful_value::{StatefulValue, resolve_value};
//!
//! # futures_lite::future::block_on(async {
//! let user: StatefulValue<&str> = StatefulValue::Valid("ada");
//! let quota: StatefulValue<u32> = StatefulValue::Valid(7);
//!
//! let greeting = resolve_value(
//!     || async { StatefulValue::Valid(format!("hello, {} ({})", "ada", 7)) },
//!     [user.dependency_state(), quota.dependency_state()],
//! )
//! .await;
//!
//! assert_eq!(greeting.value().map(String::as_str), Some("hello, ada (7)"));
//! # });
//! ```
//!
//! This crate provides no retry, caching, cancellation, or scheduling;
//! producers own those concerns. The only suspension point in
//! [`resolve_value`] is awaiting the callback itself.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod combinator;
pub mod dependency;
pub mod error;
pub mod value;

mod tracing_compat;

pub use combinator::resolve_value;
pub use dependency::DependencyState;
pub use error::StateError;
pub use value::StatefulValue;
