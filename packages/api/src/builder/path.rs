//! Path starting points for predicates

use jpfilter_core::{ComparisonOp, Expression, FilterResult, PathQuery};

use super::comparand::IntoComparand;
use super::predicate::Predicate;

/// Path under construction; becomes a predicate once compared or tested
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    query: PathQuery,
}

/// Path relative to the current element, from dotted member names
///
/// `at("a.b")` addresses `@.a.b`; `at("")` is the element itself.
#[must_use]
pub fn at(dotted: &str) -> Path {
    Path {
        query: PathQuery::fields(dotted.split('.').filter(|name| !name.is_empty())),
    }
}

/// Path relative to the document root, from dotted member names
#[must_use]
pub fn root(dotted: &str) -> Path {
    let query = dotted
        .split('.')
        .filter(|name| !name.is_empty())
        .fold(PathQuery::root(), PathQuery::member);
    Path { query }
}

/// The current element (`@`)
#[must_use]
pub fn current() -> Path {
    Path {
        query: PathQuery::current(),
    }
}

impl Path {
    /// Append a member step
    #[must_use]
    pub fn member(self, name: impl Into<String>) -> Self {
        Self {
            query: self.query.member(name),
        }
    }

    /// Append an index step; negative values count from the end
    #[must_use]
    pub fn index(self, index: i64) -> Self {
        Self {
            query: self.query.index(index),
        }
    }

    /// The underlying query node
    #[must_use]
    pub fn into_query(self) -> PathQuery {
        self.query
    }

    /// Matches when the path resolves
    #[must_use]
    pub fn exists(self) -> Predicate {
        Predicate::from(Expression::exists(self.query))
    }

    /// Compare with an explicit operator
    #[must_use]
    pub fn compare(self, op: ComparisonOp, comparand: impl IntoComparand) -> Predicate {
        Predicate::from(Expression::compare(
            self.query,
            op,
            comparand.into_comparand(),
        ))
    }

    /// Compare with an operator symbol such as `">="`
    ///
    /// # Errors
    ///
    /// Returns `FilterError::UnknownOperator` for symbols outside the
    /// comparator table.
    pub fn op(self, symbol: &str, comparand: impl IntoComparand) -> FilterResult<Predicate> {
        let op = symbol.parse::<ComparisonOp>()?;
        tracing::trace!(target: "jpfilter::builder", symbol, path = %self.query, "operator resolved");
        Ok(self.compare(op, comparand))
    }

    /// `path == comparand`
    #[must_use]
    pub fn eq(self, comparand: impl IntoComparand) -> Predicate {
        self.compare(ComparisonOp::Equal, comparand)
    }

    /// `path != comparand`
    #[must_use]
    pub fn ne(self, comparand: impl IntoComparand) -> Predicate {
        self.compare(ComparisonOp::NotEqual, comparand)
    }

    /// `path < comparand`
    #[must_use]
    pub fn lt(self, comparand: impl IntoComparand) -> Predicate {
        self.compare(ComparisonOp::Less, comparand)
    }

    /// `path <= comparand`
    #[must_use]
    pub fn le(self, comparand: impl IntoComparand) -> Predicate {
        self.compare(ComparisonOp::LessEq, comparand)
    }

    /// `path > comparand`
    #[must_use]
    pub fn gt(self, comparand: impl IntoComparand) -> Predicate {
        self.compare(ComparisonOp::Greater, comparand)
    }

    /// `path >= comparand`
    #[must_use]
    pub fn ge(self, comparand: impl IntoComparand) -> Predicate {
        self.compare(ComparisonOp::GreaterEq, comparand)
    }

    /// `path =~ pattern`
    #[must_use]
    pub fn matches(self, pattern: impl IntoComparand) -> Predicate {
        self.compare(ComparisonOp::Matches, pattern)
    }
}
