//! Filter selector (`[?<expr>]`)
//!
//! Applies a boolean expression to the direct children of the current value:
//! - selection returns the matching children as context-carrying results
//! - update overwrites matching array elements or hands them to a callback
//!
//! A filter without an expression is the identity.

mod selection;
mod update;

use std::any::Any;
use std::fmt;

pub use update::Updater;

use crate::datum::Datum;
use crate::error::FilterResult;
use crate::logical::BoolExpr;
use crate::query::{Query, same_query};

/// Filter over the children of a list or mapping
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter {
    expression: Option<BoolExpr>,
}

impl Filter {
    /// Filter keeping children for which `expression` is truthy
    pub fn new(expression: impl Into<BoolExpr>) -> Self {
        Self {
            expression: Some(expression.into()),
        }
    }

    /// Pass-through filter
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Build from an optional expression
    #[must_use]
    pub fn from_expression(expression: Option<BoolExpr>) -> Self {
        Self { expression }
    }

    /// The wrapped expression
    #[inline]
    #[must_use]
    pub fn expression(&self) -> Option<&BoolExpr> {
        self.expression.as_ref()
    }
}

impl Query for Filter {
    fn find(&self, datum: &Datum) -> FilterResult<Vec<Datum>> {
        self.select(datum)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn query_eq(&self, other: &dyn Query) -> bool {
        same_query(self, other)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "[?{expression}]"),
            None => f.write_str("[?]"),
        }
    }
}
