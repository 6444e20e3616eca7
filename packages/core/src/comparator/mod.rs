//! Comparator table
//!
//! Maps operator symbols to binary predicates over two JSON values:
//! - `==` / `=`: value equality
//! - `!=`: value inequality
//! - `<`, `<=`, `>`, `>=`: ordering, failing on incomparable operands
//! - `=~`: regex search of the right operand's pattern within the left operand
//!
//! Symbols are resolved to [`ComparisonOp`] once, when a predicate is built.

mod ordering;
mod regex_cache;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use serde_json::Value;

pub use regex_cache::RegexCache;

use crate::coercion::string_form;
use crate::config::ComparatorConfig;
use crate::error::{FilterError, FilterResult};

static CONFIG: OnceCell<ComparatorConfig> = OnceCell::new();

/// Install the process-wide comparator configuration.
///
/// # Errors
///
/// Returns `FilterError::Configuration` when validation fails and
/// `FilterError::AlreadyConfigured` when a configuration is already in place,
/// including the default one installed lazily by the first regex comparison.
pub fn configure(config: ComparatorConfig) -> FilterResult<()> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| FilterError::AlreadyConfigured)?;
    tracing::debug!(
        target: "jpfilter::comparator",
        config = ?CONFIG.get(),
        "comparator configuration installed"
    );
    Ok(())
}

/// The active comparator configuration
#[must_use]
pub fn config() -> &'static ComparatorConfig {
    CONFIG.get_or_init(ComparatorConfig::default)
}

/// Comparison operators understood by predicate expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    /// Equality comparison (`==`, `=`)
    Equal,
    /// Inequality comparison (`!=`)
    NotEqual,
    /// Less than comparison (`<`)
    Less,
    /// Less than or equal comparison (`<=`)
    LessEq,
    /// Greater than comparison (`>`)
    Greater,
    /// Greater than or equal comparison (`>=`)
    GreaterEq,
    /// Regular expression search (`=~`)
    Matches,
}

/// Every accepted symbol and the operator it resolves to
pub const OPERATOR_TABLE: [(&str, ComparisonOp); 8] = [
    ("!=", ComparisonOp::NotEqual),
    ("==", ComparisonOp::Equal),
    ("=", ComparisonOp::Equal),
    ("<=", ComparisonOp::LessEq),
    ("<", ComparisonOp::Less),
    (">=", ComparisonOp::GreaterEq),
    (">", ComparisonOp::Greater),
    ("=~", ComparisonOp::Matches),
];

impl ComparisonOp {
    /// Canonical symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::Matches => "=~",
        }
    }

    /// Whether the operator needs an ordering between its operands
    #[inline]
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(
            self,
            Self::Less | Self::LessEq | Self::Greater | Self::GreaterEq
        )
    }

    /// Apply the operator to `(left, right)`.
    ///
    /// # Errors
    ///
    /// - `FilterError::Incomparable` for an ordering operator over operands
    ///   without an ordering (e.g. an object and a number)
    /// - `FilterError::InvalidRegex` for `=~` with a pattern that fails to compile
    pub fn apply(self, left: &Value, right: &Value) -> FilterResult<bool> {
        let result = match self {
            Self::Equal => ordering::values_equal(left, right),
            Self::NotEqual => !ordering::values_equal(left, right),
            Self::Less | Self::LessEq | Self::Greater | Self::GreaterEq => {
                let ordering = ordering::values_cmp(left, right)
                    .ok_or_else(|| FilterError::incomparable(self, left, right))?;
                match self {
                    Self::Less => ordering == Ordering::Less,
                    Self::LessEq => ordering != Ordering::Greater,
                    Self::Greater => ordering == Ordering::Greater,
                    _ => ordering != Ordering::Less,
                }
            }
            Self::Matches => {
                let regex = regex_cache::REGEX_CACHE.get_or_compile(&string_form(right))?;
                regex.is_match(&string_form(left))
            }
        };

        tracing::trace!(
            target: "jpfilter::comparator",
            op = self.symbol(),
            %left,
            %right,
            result,
            "comparison applied"
        );
        Ok(result)
    }
}

impl FromStr for ComparisonOp {
    type Err = FilterError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        OPERATOR_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == symbol)
            .map(|(_, op)| *op)
            .ok_or_else(|| FilterError::unknown_operator(symbol))
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
