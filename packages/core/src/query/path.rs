//! Minimal path query used to address data from predicates
//!
//! Supports the current node (`@`), the document root (`$`), member access and
//! array indexing (negative indices count from the end). Wildcards, slices and
//! recursive descent belong to the surrounding traversal engine.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::{Query, same_query};
use crate::datum::{Datum, PathSegment};
use crate::error::FilterResult;

/// Where a path starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
enum Anchor {
    #[default]
    Current,
    Root,
}

/// Single navigation step of a [`PathQuery`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Object member by name
    Member(String),
    /// Array element; negative values count from the end
    Index(i64),
}

/// Path of member/index steps anchored at the current node or the root
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathQuery {
    anchor: Anchor,
    steps: Vec<Step>,
}

impl PathQuery {
    /// The current node (`@`)
    #[must_use]
    pub fn current() -> Self {
        Self::default()
    }

    /// The document root (`$`)
    #[must_use]
    pub fn root() -> Self {
        Self {
            anchor: Anchor::Root,
            steps: Vec::new(),
        }
    }

    /// Shorthand for `@.name`
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::current().member(name)
    }

    /// Build a current-anchored path from dotted member names (`a.b.c`)
    #[must_use]
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(Self::current(), |path, name| path.member(name))
    }

    /// Append a member step
    #[must_use]
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Step::Member(name.into()));
        self
    }

    /// Append an index step
    #[must_use]
    pub fn index(mut self, index: i64) -> Self {
        self.steps.push(Step::Index(index));
        self
    }

    /// Navigation steps in order
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether the path starts at the document root
    #[inline]
    #[must_use]
    pub fn is_rooted(&self) -> bool {
        self.anchor == Anchor::Root
    }

    fn step(current: Datum, step: &Step) -> Option<Datum> {
        match step {
            Step::Member(name) => {
                let child = current.value().as_object()?.get(name)?.clone();
                Some(Datum::new(
                    child,
                    PathSegment::Member(name.clone()),
                    Some(Arc::new(current)),
                ))
            }
            Step::Index(index) => {
                let array = current.value().as_array()?;
                let position = resolve_index(*index, array.len())?;
                let child = array[position].clone();
                Some(Datum::new(
                    child,
                    PathSegment::Index(position),
                    Some(Arc::new(current)),
                ))
            }
        }
    }
}

fn resolve_index(index: i64, len: usize) -> Option<usize> {
    if index >= 0 {
        let position = usize::try_from(index).ok()?;
        (position < len).then_some(position)
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}

impl Query for PathQuery {
    fn find(&self, datum: &Datum) -> FilterResult<Vec<Datum>> {
        let start = match self.anchor {
            Anchor::Current => datum.clone(),
            Anchor::Root => datum.root().clone(),
        };

        let mut current = start;
        for step in &self.steps {
            match Self::step(current, step) {
                Some(next) => current = next,
                None => {
                    tracing::trace!(
                        target: "jpfilter::query",
                        path = %self,
                        "path step did not resolve"
                    );
                    return Ok(Vec::new());
                }
            }
        }
        Ok(vec![current])
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn query_eq(&self, other: &dyn Query) -> bool {
        same_query(self, other)
    }
}

fn is_plain_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}

impl fmt::Display for PathQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote_anchor = match self.anchor {
            Anchor::Root => {
                f.write_str("$")?;
                true
            }
            Anchor::Current if self.steps.is_empty() => return f.write_str("@"),
            Anchor::Current => false,
        };

        for step in &self.steps {
            match step {
                Step::Member(name) if is_plain_name(name) => {
                    if wrote_anchor {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                Step::Member(name) => write!(f, "[{}]", Value::String(name.clone()))?,
                Step::Index(index) => write!(f, "[{index}]")?,
            }
            wrote_anchor = true;
        }
        Ok(())
    }
}
