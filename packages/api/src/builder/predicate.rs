//! Predicates and their combination

use std::ops::Not;

use jpfilter_core::{BoolExpr, Expression, Filter};

/// Boolean expression under construction
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    expr: BoolExpr,
}

/// `!predicate`
#[must_use]
pub fn not(predicate: Predicate) -> Predicate {
    !predicate
}

impl Predicate {
    /// `(self && other)`
    #[must_use]
    pub fn and(self, other: Predicate) -> Self {
        Self {
            expr: BoolExpr::conjunction(self.expr, other.expr),
        }
    }

    /// `(self || other)`
    #[must_use]
    pub fn or(self, other: Predicate) -> Self {
        Self {
            expr: BoolExpr::disjunction(self.expr, other.expr),
        }
    }

    /// Finished boolean expression
    #[must_use]
    pub fn build(self) -> BoolExpr {
        self.expr
    }

    /// Filter selecting the children this predicate matches
    #[must_use]
    pub fn filter(self) -> Filter {
        Filter::new(self.expr)
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Self::Output {
        Self {
            expr: BoolExpr::negation(self.expr),
        }
    }
}

impl From<Expression> for Predicate {
    fn from(expression: Expression) -> Self {
        Self {
            expr: BoolExpr::from(expression),
        }
    }
}

impl From<BoolExpr> for Predicate {
    fn from(expr: BoolExpr) -> Self {
        Self { expr }
    }
}

impl From<Predicate> for BoolExpr {
    fn from(predicate: Predicate) -> Self {
        predicate.expr
    }
}

impl From<Predicate> for Filter {
    fn from(predicate: Predicate) -> Self {
        predicate.filter()
    }
}
