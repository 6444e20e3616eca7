//! Filter error handling module
//!
//! Error types and constructor helpers shared by the comparator table,
//! predicate expressions, combinators and filters.

mod constructors;
mod types;

pub use types::{FilterError, FilterResult};
