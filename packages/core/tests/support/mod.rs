//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use jpfilter_core::{Datum, FilterResult, PathQuery, Query};

/// Query wrapper counting how often it is evaluated
#[derive(Debug, Clone)]
pub struct CountingQuery {
    inner: PathQuery,
    calls: Arc<AtomicUsize>,
}

impl CountingQuery {
    pub fn new(inner: PathQuery) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl fmt::Display for CountingQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Query for CountingQuery {
    fn find(&self, datum: &Datum) -> FilterResult<Vec<Datum>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find(datum)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn query_eq(&self, other: &dyn Query) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self.inner == other.inner)
    }
}

pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
