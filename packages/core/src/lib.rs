//! # jpfilter core
//!
//! Predicate evaluation and filter selectors for JSONPath-style queries over
//! `serde_json` values.
//!
//! ## Features
//!
//! - **Comparator table** with equality, ordering and regex search
//! - **Predicate expressions** comparing a target query to a literal or to
//!   another query, with integer/boolean coercion of candidates
//! - **Boolean combinators** (`!`, `&&`, `||`) with short-circuit evaluation
//! - **Filters** (`[?<expr>]`) that select or update the children of a list
//!   or mapping, reporting normalized paths for every match
//!
//! ## Usage
//!
//! ```rust
//! use jpfilter_core::{ComparisonOp, Expression, Filter, PathQuery};
//! use serde_json::json;
//!
//! let filter = Filter::new(Expression::compare(
//!     PathQuery::field("price"),
//!     ComparisonOp::Less,
//!     json!(10),
//! ));
//!
//! let books = json!([{"price": 8}, {"price": 12}, {"price": "9"}]);
//! let cheap = filter.select_values(&books).expect("prices are comparable");
//! assert_eq!(cheap, vec![json!({"price": 8}), json!({"price": "9"})]);
//! assert_eq!(filter.to_string(), "[?price < 10]");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coercion;
pub mod comparator;
pub mod config;
pub mod datum;
pub mod error;
pub mod expression;
pub mod filter;
pub mod logical;
pub mod query;

pub use comparator::{ComparisonOp, OPERATOR_TABLE};
pub use config::ComparatorConfig;
pub use datum::{Datum, NormalizedPath, PathSegment};
pub use error::{FilterError, FilterResult};
pub use expression::{Comparand, Comparison, Expression};
pub use filter::{Filter, Updater};
pub use logical::{BoolExpr, Outcome};
pub use query::{PathQuery, Query, Step, same_query};
