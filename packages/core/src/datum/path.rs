//! Path segments and normalized paths for context-carrying values
//!
//! Every [`Datum`](super::Datum) records the segment that reached it. Walking
//! the context chain and joining those segments yields a normalized path in
//! canonical bracket notation:
//! - single quotes for member names, with `'` and `\` escaped
//! - decimal array indices
//! - no whitespace

use std::fmt;

/// Individual step that reached a value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Value wrapped without navigation (`@`)
    This,
    /// Document root (`$`)
    Root,
    /// Object member access (`['name']`)
    Member(String),
    /// Array element access (`[index]`)
    Index(usize),
}

/// Canonical location of a value inside its document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    segments: Vec<PathSegment>,
    normalized_string: String,
}

impl NormalizedPath {
    /// Create a root normalized path ($)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
            normalized_string: "$".to_string(),
        }
    }

    /// Build a normalized path from outermost-first segments.
    ///
    /// `This` and `Root` carry no navigation and are dropped.
    #[must_use]
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = PathSegment>,
    {
        let segments: Vec<PathSegment> = segments
            .into_iter()
            .filter(|segment| !matches!(segment, PathSegment::This | PathSegment::Root))
            .collect();
        let normalized_string = segments_to_string(&segments);
        Self {
            segments,
            normalized_string,
        }
    }

    /// Get the canonical string representation
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized_string
    }

    /// Get the navigating segments, outermost first
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Check if this is the root path ($)
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of navigating segments below the root
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

fn segments_to_string(segments: &[PathSegment]) -> String {
    let mut result = String::from("$");
    for segment in segments {
        push_segment(&mut result, segment);
    }
    result
}

fn push_segment(out: &mut String, segment: &PathSegment) {
    match segment {
        PathSegment::This => out.push('@'),
        PathSegment::Root => out.push('$'),
        PathSegment::Member(name) => {
            out.push_str("['");
            for ch in name.chars() {
                if ch == '\'' || ch == '\\' {
                    out.push('\\');
                }
                out.push(ch);
            }
            out.push_str("']");
        }
        PathSegment::Index(index) => {
            out.push('[');
            out.push_str(&index.to_string());
            out.push(']');
        }
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized_string)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        push_segment(&mut rendered, self);
        f.write_str(&rendered)
    }
}
