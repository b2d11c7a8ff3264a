//! Recency (temporal decay) scoring.
//!
//! `decay = 0.5^(age_days / half_life_days)` where age is measured
//! from the fact's effective age anchor (`max(created_at, updated_at)`)
//! to the caller-supplied evaluation time, clamped to `>= 0` so a
//! future timestamp means age 0 rather than negative decay. The decay
//! already lies in `(0, 1]`, so no further normalization is applied.

use chrono::{DateTime, Utc};
use citerank_core::Fact;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Half-life decay for a given age.
///
/// Exact invariants: `decay(0, h) == 1.0` and `decay(h, h) == 0.5`.
#[must_use]
pub fn decay(age_days: f64, half_life_days: f64) -> f64 {
    0.5_f64.powf(age_days.max(0.0) / half_life_days)
}

/// Fact age in fractional days at `evaluation_time`, clamped to `>= 0`.
#[must_use]
pub fn age_days(fact: &Fact, evaluation_time: DateTime<Utc>) -> f64 {
    let elapsed = evaluation_time - fact.effective_timestamp();
    #[allow(clippy::cast_precision_loss)]
    let seconds = elapsed.num_milliseconds() as f64 / 1_000.0;
    (seconds / SECONDS_PER_DAY).max(0.0)
}

/// Recency sub-scores for every fact in the candidate set, in input order.
#[must_use]
pub fn score_facts(facts: &[Fact], evaluation_time: DateTime<Utc>, half_life_days: f64) -> Vec<f64> {
    facts
        .iter()
        .map(|fact| decay(age_days(fact, evaluation_time), half_life_days))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
