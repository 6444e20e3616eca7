//! Predicate expressions
//!
//! The comparison primitive of the filter language: a target query, evaluated
//! against the current datum, optionally compared to a comparand that is
//! either a literal or another query.
//!
//! - `mod.rs`: expression types, constructors, equality and rendering
//! - `evaluation`: evaluation against a datum

mod evaluation;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::comparator::ComparisonOp;
use crate::datum::Datum;
use crate::error::FilterResult;
use crate::query::Query;

/// Right-hand side of a comparison
#[derive(Debug, Clone)]
pub enum Comparand {
    /// Literal JSON value
    Literal(Value),
    /// Nested query resolved against the expression's input datum
    Query(Arc<dyn Query>),
}

impl Comparand {
    /// Wrap a query node as a comparand
    pub fn query(query: impl Query + 'static) -> Self {
        Self::Query(Arc::new(query))
    }

    /// Resolve to a single value: literals as-is, queries to the value of
    /// their first result. `None` when the query finds nothing.
    pub(crate) fn resolve(&self, datum: &Datum) -> FilterResult<Option<Cow<'_, Value>>> {
        match self {
            Self::Literal(value) => Ok(Some(Cow::Borrowed(value))),
            Self::Query(query) => Ok(query
                .find(datum)?
                .into_iter()
                .next()
                .map(|found| Cow::Owned(found.into_value()))),
        }
    }
}

impl PartialEq for Comparand {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Query(a), Self::Query(b)) => **a == **b,
            _ => false,
        }
    }
}

impl From<Value> for Comparand {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<Arc<dyn Query>> for Comparand {
    fn from(query: Arc<dyn Query>) -> Self {
        Self::Query(query)
    }
}

impl fmt::Display for Comparand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Query(query) => write!(f, "{query}"),
        }
    }
}

/// Operator and comparand of a comparing expression
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Operator applied as `op(candidate, comparand)`
    pub op: ComparisonOp,
    /// Right-hand side
    pub comparand: Comparand,
}

/// Atomic predicate: target path, optional operator, optional comparand
#[derive(Debug, Clone)]
pub struct Expression {
    target: Arc<dyn Query>,
    comparison: Option<Comparison>,
}

impl Expression {
    /// Build from shared parts
    #[must_use]
    pub fn new(target: Arc<dyn Query>, comparison: Option<Comparison>) -> Self {
        Self { target, comparison }
    }

    /// Existence test: matches whatever `target` finds
    pub fn exists(target: impl Query + 'static) -> Self {
        Self::new(Arc::new(target), None)
    }

    /// Comparison of every target result against `comparand`
    pub fn compare(
        target: impl Query + 'static,
        op: ComparisonOp,
        comparand: impl Into<Comparand>,
    ) -> Self {
        Self::new(
            Arc::new(target),
            Some(Comparison {
                op,
                comparand: comparand.into(),
            }),
        )
    }

    /// Comparison with the operator given as a symbol
    ///
    /// # Errors
    ///
    /// Returns `FilterError::UnknownOperator` when `symbol` is not in the
    /// comparator table.
    pub fn with_symbol(
        target: impl Query + 'static,
        symbol: &str,
        comparand: impl Into<Comparand>,
    ) -> FilterResult<Self> {
        Ok(Self::compare(target, symbol.parse()?, comparand))
    }

    /// Query producing the candidates
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Arc<dyn Query> {
        &self.target
    }

    /// Operator and comparand, `None` in existence mode
    #[inline]
    #[must_use]
    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        *self.target == *other.target && self.comparison == other.comparison
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.comparison {
            None => write!(f, "{}", self.target),
            Some(Comparison { op, comparand }) => {
                write!(f, "{} {} {}", self.target, op, comparand)
            }
        }
    }
}
