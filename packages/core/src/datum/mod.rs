//! Context-carrying values
//!
//! A [`Datum`] pairs a JSON value with the segment that reached it and a link
//! to the datum it was reached from. Filters use the link to report match
//! locations and root-relative queries use it to find the document root.

mod path;

use std::sync::Arc;

use serde_json::Value;

pub use path::{NormalizedPath, PathSegment};

/// A JSON value together with the path that reached it
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    value: Value,
    path: PathSegment,
    context: Option<Arc<Datum>>,
}

impl Datum {
    /// Create a datum reached through `path` from `context`
    #[inline]
    #[must_use]
    pub fn new(value: Value, path: PathSegment, context: Option<Arc<Datum>>) -> Self {
        Self {
            value,
            path,
            context,
        }
    }

    /// Lift raw data into a datum. Wrapping a datum returns it unchanged.
    #[inline]
    pub fn wrap(data: impl Into<Datum>) -> Self {
        data.into()
    }

    /// The raw value
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the datum, keeping only the raw value
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Same location and context, different value
    #[must_use]
    pub fn with_value(&self, value: Value) -> Self {
        Self {
            value,
            path: self.path.clone(),
            context: self.context.clone(),
        }
    }

    /// Segment that reached this value
    #[inline]
    #[must_use]
    pub fn path(&self) -> &PathSegment {
        &self.path
    }

    /// Enclosing datum, if any
    #[inline]
    #[must_use]
    pub fn context(&self) -> Option<&Datum> {
        self.context.as_deref()
    }

    /// Outermost datum of the context chain
    #[must_use]
    pub fn root(&self) -> &Datum {
        let mut current = self;
        while let Some(parent) = current.context.as_deref() {
            current = parent;
        }
        current
    }

    /// Normalized path from the root of the context chain to this value
    #[must_use]
    pub fn full_path(&self) -> NormalizedPath {
        let mut segments = Vec::new();
        let mut current = Some(self);
        while let Some(datum) = current {
            segments.push(datum.path.clone());
            current = datum.context.as_deref();
        }
        segments.reverse();
        NormalizedPath::from_segments(segments)
    }
}

impl From<Value> for Datum {
    #[inline]
    fn from(value: Value) -> Self {
        Self::new(value, PathSegment::This, None)
    }
}

impl From<&Value> for Datum {
    #[inline]
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<&Datum> for Datum {
    #[inline]
    fn from(datum: &Datum) -> Self {
        datum.clone()
    }
}
