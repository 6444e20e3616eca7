//! Filter error types
//!
//! Structural failures only. Shape mismatches, failed coercions and empty
//! comparands are silent non-matches and never reach this type.

use crate::comparator::ComparisonOp;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors raised while building or evaluating filter predicates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Operator symbol outside the comparator table
    #[error("unknown operator '{symbol}'")]
    UnknownOperator {
        /// The symbol as written
        symbol: String,
    },

    /// Ordering operator applied to operands with no ordering between them
    #[error("cannot compare {left} {op} {right}")]
    Incomparable {
        /// Operator being applied
        op: ComparisonOp,
        /// Rendered left operand
        left: String,
        /// Rendered right operand
        right: String,
    },

    /// Pattern given to `=~` failed to compile
    #[error("invalid regex pattern '{pattern}': {reason}")]
    InvalidRegex {
        /// Pattern source
        pattern: String,
        /// Compiler diagnostic
        reason: String,
    },

    /// Comparator configuration failed validation
    #[error("invalid comparator configuration: {0}")]
    Configuration(String),

    /// Comparator configuration was installed after first use
    #[error("comparator configuration is already initialized")]
    AlreadyConfigured,
}
