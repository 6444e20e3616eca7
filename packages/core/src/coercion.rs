//! Explicit fallible conversions applied before comparing against a comparand
//!
//! A `None` from these functions means "skip this element": the element is
//! excluded from the match set and evaluation continues.

use std::borrow::Cow;

use serde_json::Value;

/// Conversion applied to each candidate, chosen once from the comparand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Coercion {
    Integer,
    Boolean,
    Verbatim,
}

impl Coercion {
    pub(crate) fn for_comparand(comparand: &Value) -> Self {
        if is_integer(comparand) {
            Self::Integer
        } else if comparand.is_boolean() {
            Self::Boolean
        } else {
            Self::Verbatim
        }
    }

    pub(crate) fn apply<'v>(self, value: &'v Value) -> Option<Cow<'v, Value>> {
        match self {
            Self::Integer => to_integer(value).map(|int| Cow::Owned(Value::from(int))),
            Self::Boolean => to_boolean(value).map(|flag| Cow::Owned(Value::Bool(flag))),
            Self::Verbatim => Some(Cow::Borrowed(value)),
        }
    }
}

/// Coerce a value to an integer for comparison against an integer comparand.
///
/// - integers pass through
/// - finite floats truncate toward zero when the result fits in `i64`
/// - booleans become `0` / `1`
/// - strings parse as an optionally signed decimal integer, surrounding
///   whitespace ignored
/// - `null`, arrays and objects are incoercible
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(int);
            }
            let float = number.as_f64()?;
            let truncated = float.trunc();
            // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
            if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64
            {
                Some(truncated as i64)
            } else {
                None
            }
        }
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce a value to a boolean for comparison against a boolean comparand.
///
/// - booleans pass through
/// - numbers are `true` when non-zero
/// - `null` is `false`
/// - strings coerce only when they spell `true` or `false` (ASCII case
///   insensitive, surrounding whitespace ignored)
/// - arrays and objects are incoercible
///
/// Strings are not judged by emptiness: `"false"` is `false` and any other
/// non-boolean string such as `"yes"` is skipped instead of counting as true.
#[must_use]
pub fn to_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_f64().map(|float| float != 0.0),
        Value::Null => Some(false),
        Value::String(text) => {
            let text = text.trim();
            if text.eq_ignore_ascii_case("true") {
                Some(true)
            } else if text.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Whether a comparand takes the integer coercion path
#[inline]
#[must_use]
pub fn is_integer(value: &Value) -> bool {
    matches!(value, Value::Number(number) if number.is_i64())
}

/// Text a value is matched against by `=~`: strings as-is, everything else
/// as compact JSON.
#[must_use]
pub fn string_form(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
