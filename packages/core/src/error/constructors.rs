//! Error constructor functions
//!
//! Factory methods that render operands and diagnostics into owned strings.

use serde_json::Value;

use super::types::FilterError;
use crate::comparator::ComparisonOp;

impl FilterError {
    /// Creates an unknown operator error
    ///
    /// # Examples
    /// ```
    /// use jpfilter_core::FilterError;
    ///
    /// let error = FilterError::unknown_operator("<>");
    /// assert_eq!(error.to_string(), "unknown operator '<>'");
    /// ```
    pub fn unknown_operator(symbol: impl Into<String>) -> Self {
        Self::UnknownOperator {
            symbol: symbol.into(),
        }
    }

    /// Creates an incomparable operands error from the two JSON values
    #[must_use]
    pub fn incomparable(op: ComparisonOp, left: &Value, right: &Value) -> Self {
        Self::Incomparable {
            op,
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Creates an invalid regex error from the compiler diagnostic
    pub fn invalid_regex(pattern: impl Into<String>, error: &regex::Error) -> Self {
        Self::InvalidRegex {
            pattern: pattern.into(),
            reason: error.to_string(),
        }
    }

    /// Creates a configuration validation error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether this error came from evaluating data rather than from setup
    #[inline]
    #[must_use]
    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, Self::Incomparable { .. } | Self::InvalidRegex { .. })
    }
}
