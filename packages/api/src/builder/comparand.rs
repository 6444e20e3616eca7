//! Conversions accepted on the right-hand side of builder comparisons

use jpfilter_core::{Comparand, Filter, PathQuery};
use serde_json::Value;

use super::path::Path;

/// Anything usable as a comparand: JSON literals or nested queries
pub trait IntoComparand {
    /// Convert into a core comparand
    fn into_comparand(self) -> Comparand;
}

impl IntoComparand for Comparand {
    fn into_comparand(self) -> Comparand {
        self
    }
}

impl IntoComparand for Value {
    fn into_comparand(self) -> Comparand {
        Comparand::Literal(self)
    }
}

impl IntoComparand for Path {
    fn into_comparand(self) -> Comparand {
        Comparand::query(self.into_query())
    }
}

impl IntoComparand for PathQuery {
    fn into_comparand(self) -> Comparand {
        Comparand::query(self)
    }
}

impl IntoComparand for Filter {
    fn into_comparand(self) -> Comparand {
        Comparand::query(self)
    }
}

macro_rules! literal_comparand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoComparand for $ty {
                fn into_comparand(self) -> Comparand {
                    Comparand::Literal(Value::from(self))
                }
            }
        )*
    };
}

literal_comparand!(bool, i32, i64, u32, u64, f64, &str, String);
