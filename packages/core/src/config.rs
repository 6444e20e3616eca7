//! Comparator configuration
//!
//! Settings for the process-wide comparator table. A configuration is
//! validated and installed once, before the first regex comparison, through
//! [`comparator::configure`](crate::comparator::configure); afterwards it is
//! read-only.

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};

const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);
const MAX_REGEX_SIZE_LIMIT: usize = 256 * (1 << 20);
const DEFAULT_REGEX_CACHE_CAPACITY: usize = 32;
const MAX_REGEX_CACHE_CAPACITY: usize = 4096;

/// Comparator table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// Compiled program size limit for `=~` patterns, in bytes
    pub regex_size_limit: usize,
    /// Number of compiled patterns kept in the process-wide cache
    pub regex_cache_capacity: usize,
    /// Compile `=~` patterns case-insensitively
    pub case_insensitive_regex: bool,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            regex_cache_capacity: DEFAULT_REGEX_CACHE_CAPACITY,
            case_insensitive_regex: false,
        }
    }
}

impl ComparatorConfig {
    /// Set the regex size limit
    #[must_use]
    pub fn with_regex_size_limit(mut self, bytes: usize) -> Self {
        self.regex_size_limit = bytes;
        self
    }

    /// Set the regex cache capacity; `0` disables caching
    #[must_use]
    pub fn with_regex_cache_capacity(mut self, capacity: usize) -> Self {
        self.regex_cache_capacity = capacity;
        self
    }

    /// Match `=~` patterns case-insensitively
    #[must_use]
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive_regex = enabled;
        self
    }

    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Configuration` if:
    /// - `regex_size_limit` is zero or exceeds 256 MiB
    /// - `regex_cache_capacity` exceeds 4096 entries
    pub fn validate(&self) -> FilterResult<()> {
        if self.regex_size_limit == 0 {
            return Err(FilterError::configuration(
                "regex_size_limit cannot be zero",
            ));
        }

        if self.regex_size_limit > MAX_REGEX_SIZE_LIMIT {
            return Err(FilterError::configuration(format!(
                "regex_size_limit cannot exceed {MAX_REGEX_SIZE_LIMIT} bytes"
            )));
        }

        if self.regex_cache_capacity > MAX_REGEX_CACHE_CAPACITY {
            return Err(FilterError::configuration(format!(
                "regex_cache_capacity cannot exceed {MAX_REGEX_CACHE_CAPACITY} entries"
            )));
        }

        Ok(())
    }
}
