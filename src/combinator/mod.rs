//! Combinators for deriving stateful values.
//!
//! - [`resolve_value`]: await a producer once every dependency is valid,
//!   short-circuiting on the first failed dependency

pub mod resolve;

pub use resolve::resolve_value;
