//! Regex compilation cache for the `=~` operator
//!
//! Patterns are compiled with the limits from the installed
//! [`ComparatorConfig`] and kept up to its cache capacity. Patterns beyond the
//! capacity are compiled on every use.

use std::collections::HashMap;
use std::sync::RwLock;

use regex::{Regex, RegexBuilder};

use crate::config::ComparatorConfig;
use crate::error::{FilterError, FilterResult};

/// Bounded cache of compiled patterns
#[derive(Debug)]
pub struct RegexCache {
    cache: RwLock<HashMap<String, Regex>>,
    capacity: usize,
    size_limit: usize,
    case_insensitive: bool,
}

impl RegexCache {
    /// Create an empty cache using the limits in `config`
    #[must_use]
    pub fn new(config: &ComparatorConfig) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            capacity: config.regex_cache_capacity,
            size_limit: config.regex_size_limit,
            case_insensitive: config.case_insensitive_regex,
        }
    }

    /// Get compiled regex from cache or compile and cache if not present
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidRegex` when the pattern fails to compile or
    /// exceeds the configured size limit.
    pub fn get_or_compile(&self, pattern: &str) -> FilterResult<Regex> {
        if let Ok(cache) = self.cache.read() {
            if let Some(regex) = cache.get(pattern) {
                return Ok(regex.clone());
            }
        }

        let regex = RegexBuilder::new(pattern)
            .size_limit(self.size_limit)
            .case_insensitive(self.case_insensitive)
            .build()
            .map_err(|e| FilterError::invalid_regex(pattern, &e))?;

        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < self.capacity {
                cache.insert(pattern.to_string(), regex.clone());
            } else {
                log::debug!(
                    "regex cache full ({} entries), not caching pattern {:?}",
                    cache.len(),
                    pattern
                );
            }
        }

        Ok(regex)
    }

    /// Number of cached patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }

    /// Whether no pattern is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

lazy_static::lazy_static! {
    pub(crate) static ref REGEX_CACHE: RegexCache = RegexCache::new(super::config());
}
