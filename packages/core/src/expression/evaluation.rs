//! Evaluation of predicate expressions

use super::{Comparison, Expression};
use crate::coercion::Coercion;
use crate::datum::Datum;
use crate::error::FilterResult;
use crate::logical::Outcome;

impl Expression {
    /// Evaluate against `datum`.
    ///
    /// Without a comparison the target's results are returned unchanged. With
    /// one, a query comparand is resolved once per call against `datum` (not
    /// against each candidate) and reused for every candidate. Candidates that
    /// cannot be coerced to the comparand's type are skipped.
    ///
    /// # Errors
    ///
    /// Propagates comparator failures (`Incomparable`, `InvalidRegex`) and
    /// errors from nested queries.
    pub fn evaluate(&self, datum: &Datum) -> FilterResult<Outcome> {
        let candidates = self.target.find(datum)?;
        if candidates.is_empty() {
            return Ok(Outcome::empty());
        }

        let Some(Comparison { op, comparand }) = &self.comparison else {
            return Ok(Outcome::Matches(candidates));
        };

        let Some(comparand) = comparand.resolve(datum)? else {
            tracing::debug!(
                target: "jpfilter::expression",
                expression = %self,
                "comparand resolved to nothing, no candidate can match"
            );
            return Ok(Outcome::empty());
        };

        let coercion = Coercion::for_comparand(&comparand);
        let mut found = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let Some(value) = coercion.apply(candidate.value()) else {
                tracing::trace!(
                    target: "jpfilter::expression",
                    value = %candidate.value(),
                    ?coercion,
                    "candidate not coercible, skipped"
                );
                continue;
            };
            if op.apply(&value, &comparand)? {
                found.push(candidate);
            }
        }

        tracing::debug!(
            target: "jpfilter::expression",
            expression = %self,
            matched = found.len(),
            "expression evaluated"
        );
        Ok(Outcome::Matches(found))
    }
}
