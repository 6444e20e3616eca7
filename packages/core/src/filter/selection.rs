//! Read path: selecting matching children

use std::sync::Arc;

use serde_json::Value;

use super::Filter;
use crate::datum::{Datum, PathSegment};
use crate::error::FilterResult;

impl Filter {
    /// Children of `datum` for which the expression is truthy.
    ///
    /// Mappings are filtered over their values in insertion order, keys
    /// discarded. Scalars have no children and select nothing. Each result
    /// carries its index as path segment and is parented to the input; output
    /// order is the input order. Without an expression the input itself is
    /// returned.
    ///
    /// # Errors
    ///
    /// Propagates structural errors from the expression.
    pub fn select(&self, datum: &Datum) -> FilterResult<Vec<Datum>> {
        let Some(expression) = &self.expression else {
            return Ok(vec![datum.clone()]);
        };

        let parent = match datum.value() {
            Value::Array(_) => datum.clone(),
            Value::Object(map) => datum.with_value(Value::Array(map.values().cloned().collect())),
            other => {
                tracing::debug!(
                    target: "jpfilter::filter",
                    value = %other,
                    "filter applied to a value without children"
                );
                return Ok(Vec::new());
            }
        };

        let parent = Arc::new(parent);
        let Some(items) = parent.value().as_array() else {
            return Ok(Vec::new());
        };

        let mut selected = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let child = Datum::new(
                item.clone(),
                PathSegment::Index(index),
                Some(Arc::clone(&parent)),
            );
            if expression.evaluate(&child)?.is_truthy() {
                selected.push(child);
            }
        }

        tracing::debug!(
            target: "jpfilter::filter",
            filter = %self,
            children = items.len(),
            selected = selected.len(),
            "filter selection complete"
        );
        Ok(selected)
    }

    /// [`select`](Self::select) on a raw value, returning plain values
    ///
    /// # Errors
    ///
    /// Propagates structural errors from the expression.
    pub fn select_values(&self, value: &Value) -> FilterResult<Vec<Value>> {
        Ok(self
            .select(&Datum::wrap(value))?
            .into_iter()
            .map(Datum::into_value)
            .collect())
    }
}
