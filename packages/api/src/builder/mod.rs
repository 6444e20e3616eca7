//! Fluent builder API for filter predicates
//!
//! Start from a path ([`at`], [`root`], [`current`]), finish it with a
//! comparison or an existence test, then combine predicates with
//! [`Predicate::and`], [`Predicate::or`] and [`not`].

pub mod comparand;
pub mod path;
pub mod predicate;

pub use comparand::IntoComparand;
pub use path::{Path, at, current, root};
pub use predicate::{Predicate, not};
