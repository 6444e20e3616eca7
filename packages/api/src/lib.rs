//! jpfilter public API
//!
//! JSONPath filter predicates over `serde_json` values, with a fluent builder
//! for composing them.
//!
//! ```rust
//! use jpfilter::{at, not, root};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "limit": 10,
//!     "books": [
//!         {"title": "A", "price": 8, "tags": ["new"]},
//!         {"title": "B", "price": 12},
//!         {"title": "C", "price": 9}
//!     ]
//! });
//!
//! let filter = at("price")
//!     .lt(root("limit"))
//!     .and(not(at("tags").exists()))
//!     .filter();
//! assert_eq!(filter.to_string(), "[?(price < $.limit && !tags)]");
//!
//! let books = jpfilter::Datum::new(
//!     doc["books"].clone(),
//!     jpfilter::PathSegment::Member("books".into()),
//!     Some(std::sync::Arc::new(jpfilter::Datum::wrap(doc.clone()))),
//! );
//! let found = filter.select(&books).expect("prices are comparable");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].full_path().as_str(), "$['books'][2]");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::*;

// Re-export the core types
pub use jpfilter_core::{
    BoolExpr, Comparand, ComparatorConfig, Comparison, ComparisonOp, Datum, Expression, Filter,
    FilterError, FilterResult, NormalizedPath, Outcome, PathQuery, PathSegment, Query, Step,
    Updater, comparator, same_query,
};

/// Filter from a predicate
///
/// Shorthand for `predicate.filter()`
#[must_use]
pub fn filter(predicate: Predicate) -> Filter {
    predicate.filter()
}
