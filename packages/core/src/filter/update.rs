//! Write path: updating matching array elements in place

use std::fmt;

use serde_json::Value;

use super::Filter;
use crate::datum::Datum;
use crate::error::FilterResult;

/// Replacement applied to each matching element
pub enum Updater<'a> {
    /// Overwrite the element with a clone of this value
    Value(Value),
    /// Called as `callback(collection, index)` for each match; the element is
    /// `collection[index]`. The callback may mutate, replace or remove it.
    Callback(Box<dyn FnMut(&mut Vec<Value>, usize) + 'a>),
}

impl<'a> Updater<'a> {
    /// Uniform overwrite
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Callback update
    pub fn callback(callback: impl FnMut(&mut Vec<Value>, usize) + 'a) -> Self {
        Self::Callback(Box::new(callback))
    }

    fn apply(&mut self, items: &mut Vec<Value>, index: usize) {
        match self {
            Self::Value(value) => {
                if let Some(slot) = items.get_mut(index) {
                    *slot = value.clone();
                }
            }
            Self::Callback(callback) => callback(items, index),
        }
    }
}

impl From<Value> for Updater<'_> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl fmt::Debug for Updater<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl Filter {
    /// Apply `updater` to every element of `data` the expression matches.
    ///
    /// Only arrays are updated; any other value, or a filter without an
    /// expression, passes through unchanged. Elements are visited in index
    /// order and the length is re-read after every step, so a callback that
    /// removes elements never causes out-of-bounds access. Elements shifted
    /// into an already visited index are not revisited.
    ///
    /// # Errors
    ///
    /// Propagates structural errors from the expression. Elements updated
    /// before the error keep their new value.
    pub fn update<'a, 'v>(
        &self,
        data: &'v mut Value,
        updater: impl Into<Updater<'a>>,
    ) -> FilterResult<&'v mut Value> {
        let Some(expression) = &self.expression else {
            return Ok(data);
        };
        if !data.is_array() {
            return Ok(data);
        }

        let mut updater = updater.into();
        let mut updated = 0_usize;
        let mut index = 0;
        while let Some(item) = data.as_array().and_then(|items| items.get(index)) {
            let candidate = Datum::wrap(item);
            if expression.evaluate(&candidate)?.is_truthy() {
                if let Some(items) = data.as_array_mut() {
                    updater.apply(items, index);
                    updated += 1;
                }
            }
            index += 1;
        }

        tracing::debug!(
            target: "jpfilter::filter",
            filter = %self,
            updated,
            "filter update complete"
        );
        Ok(data)
    }
}
