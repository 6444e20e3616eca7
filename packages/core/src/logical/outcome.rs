//! Result type of boolean expressions

use crate::datum::Datum;

/// What a boolean expression produced
///
/// Predicate expressions produce the data they matched; short-circuiting
/// combinators and negation produce a plain boolean. Consumers only ever ask
/// for [`Outcome::is_truthy`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Matched data, in document order
    Matches(Vec<Datum>),
    /// Plain verdict
    Bool(bool),
}

impl Outcome {
    /// An outcome with no matches
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::Matches(Vec::new())
    }

    /// Non-empty matches or `Bool(true)`
    #[inline]
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Matches(found) => !found.is_empty(),
            Self::Bool(flag) => *flag,
        }
    }

    /// Matched data; empty for boolean outcomes
    #[inline]
    #[must_use]
    pub fn matches(&self) -> &[Datum] {
        match self {
            Self::Matches(found) => found,
            Self::Bool(_) => &[],
        }
    }

    /// Convert into query results: matches as-is, `Bool(true)` as the input
    /// datum itself, `Bool(false)` as nothing
    #[must_use]
    pub fn into_datums(self, input: &Datum) -> Vec<Datum> {
        match self {
            Self::Matches(found) => found,
            Self::Bool(true) => vec![input.clone()],
            Self::Bool(false) => Vec::new(),
        }
    }
}

impl From<bool> for Outcome {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}
