//! Boolean combinators over predicate expressions
//!
//! Negation always produces a boolean. Conjunction and disjunction
//! short-circuit on the left operand, producing a boolean on the
//! short-circuit branch and the right operand's outcome otherwise.

mod outcome;

use std::any::Any;
use std::fmt;

pub use outcome::Outcome;

use crate::datum::Datum;
use crate::error::FilterResult;
use crate::expression::Expression;
use crate::query::{Query, same_query};

/// Boolean expression tree
#[derive(Debug, Clone)]
pub enum BoolExpr {
    /// Comparison or existence test
    Expression(Expression),
    /// Logical NOT
    Negation(Box<BoolExpr>),
    /// Logical AND (`&&`)
    Conjunction(Box<BoolExpr>, Box<BoolExpr>),
    /// Logical OR (`||`)
    Disjunction(Box<BoolExpr>, Box<BoolExpr>),
}

impl BoolExpr {
    /// `!expr`
    pub fn negation(expr: impl Into<BoolExpr>) -> Self {
        Self::Negation(Box::new(expr.into()))
    }

    /// `(left && right)`
    pub fn conjunction(left: impl Into<BoolExpr>, right: impl Into<BoolExpr>) -> Self {
        Self::Conjunction(Box::new(left.into()), Box::new(right.into()))
    }

    /// `(left || right)`
    pub fn disjunction(left: impl Into<BoolExpr>, right: impl Into<BoolExpr>) -> Self {
        Self::Disjunction(Box::new(left.into()), Box::new(right.into()))
    }

    /// Evaluate against `datum`
    ///
    /// # Errors
    ///
    /// Propagates the first structural error raised by an evaluated
    /// sub-expression. Sub-expressions skipped by short-circuiting never
    /// raise.
    pub fn evaluate(&self, datum: &Datum) -> FilterResult<Outcome> {
        match self {
            Self::Expression(expression) => expression.evaluate(datum),
            Self::Negation(inner) => Ok(Outcome::Bool(!inner.evaluate(datum)?.is_truthy())),
            Self::Conjunction(left, right) => {
                if left.evaluate(datum)?.is_truthy() {
                    right.evaluate(datum)
                } else {
                    tracing::trace!(target: "jpfilter::logical", expr = %self, "conjunction short-circuited");
                    Ok(Outcome::Bool(false))
                }
            }
            Self::Disjunction(left, right) => {
                if left.evaluate(datum)?.is_truthy() {
                    tracing::trace!(target: "jpfilter::logical", expr = %self, "disjunction short-circuited");
                    Ok(Outcome::Bool(true))
                } else {
                    right.evaluate(datum)
                }
            }
        }
    }

    /// Nesting depth of the tree; a lone expression has depth 1
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Expression(_) => 1,
            Self::Negation(inner) => 1 + inner.depth(),
            Self::Conjunction(left, right) | Self::Disjunction(left, right) => {
                1 + left.depth().max(right.depth())
            }
        }
    }
}

impl PartialEq for BoolExpr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Expression(a), Self::Expression(b)) => a == b,
            (Self::Negation(a), Self::Negation(b)) => a == b,
            (Self::Conjunction(a1, a2), Self::Conjunction(b1, b2))
            | (Self::Disjunction(a1, a2), Self::Disjunction(b1, b2)) => {
                // operands commute
                (a1 == b1 && a2 == b2) || (a1 == b2 && a2 == b1)
            }
            _ => false,
        }
    }
}

impl From<Expression> for BoolExpr {
    fn from(expression: Expression) -> Self {
        Self::Expression(expression)
    }
}

impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expression) => write!(f, "{expression}"),
            Self::Negation(inner) => write!(f, "!{inner}"),
            Self::Conjunction(left, right) => write!(f, "({left} && {right})"),
            Self::Disjunction(left, right) => write!(f, "({left} || {right})"),
        }
    }
}

/// Boolean expressions double as query nodes: a boolean `true` finds the
/// input datum itself.
impl Query for BoolExpr {
    fn find(&self, datum: &Datum) -> FilterResult<Vec<Datum>> {
        Ok(self.evaluate(datum)?.into_datums(datum))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn query_eq(&self, other: &dyn Query) -> bool {
        same_query(self, other)
    }
}
