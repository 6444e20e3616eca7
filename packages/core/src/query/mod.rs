//! Query node seam
//!
//! Every node of a compiled query (paths, filters, nested queries inside
//! predicates) implements [`Query`]. Nodes are shared behind `Arc` and
//! compared structurally through [`Query::query_eq`].

mod path;

use std::any::Any;
use std::fmt;

pub use path::{PathQuery, Step};

use crate::datum::Datum;
use crate::error::FilterResult;

/// A compiled query node
pub trait Query: fmt::Debug + fmt::Display + Send + Sync {
    /// Evaluate the node against `datum`, returning matches in document order
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`](crate::FilterError) when a nested predicate
    /// fails structurally (incomparable operands, invalid regex).
    fn find(&self, datum: &Datum) -> FilterResult<Vec<Datum>>;

    /// Upcast for structural comparison
    fn as_any(&self) -> &dyn Any;

    /// Structural equality against another node of any concrete type
    fn query_eq(&self, other: &dyn Query) -> bool;
}

/// `query_eq` implementation for nodes that derive `PartialEq`
#[inline]
pub fn same_query<T>(this: &T, other: &dyn Query) -> bool
where
    T: Query + PartialEq + 'static,
{
    other
        .as_any()
        .downcast_ref::<T>()
        .is_some_and(|other| this == other)
}

impl PartialEq for dyn Query {
    fn eq(&self, other: &dyn Query) -> bool {
        self.query_eq(other)
    }
}
