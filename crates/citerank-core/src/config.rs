//! Per-request scoring configuration.
//!
//! Every scoring call carries its own immutable [`ScoringConfig`];
//! there is no global configuration retained between calls. Omitted
//! fields take the documented defaults, and any weight can be set to
//! zero to remove a signal's influence without disabling its
//! computation.

use serde::{Deserialize, Serialize};

/// Errors from configuration validation.
///
/// These are caller mistakes and fail the request before any scoring
/// work begins. They are never corrected silently.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// BM25 `k1` must be strictly positive and finite.
    #[error("bm25 k1 must be > 0, got {0}")]
    InvalidK1(f64),

    /// BM25 `b` must lie within `[0, 1]`.
    #[error("bm25 b must be within [0, 1], got {0}")]
    InvalidB(f64),

    /// Recency half-life must be strictly positive and finite.
    #[error("half_life_days must be > 0, got {0}")]
    InvalidHalfLife(f64),

    /// All signal weights must be finite and `>= 0`.
    #[error("signal weight {name} must be >= 0, got {value}")]
    NegativeWeight {
        /// Which weight field was invalid.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Weights for the four fused signals:
///
/// `final = (alpha*lexical + beta*semantic + gamma*authority + delta*recency) / Σ active weights`
///
/// Weights need not sum to 1; the fusion layer renormalizes by the
/// sum of the *active* weights for each call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    /// Lexical (BM25) weight.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Semantic (dense cosine) weight.
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Authority (citation centrality) weight.
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// Recency (temporal decay) weight.
    #[serde(default = "default_delta")]
    pub delta: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            beta: default_beta(),
            gamma: default_gamma(),
            delta: default_delta(),
        }
    }
}

/// BM25 free parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Term-frequency saturation. Must be `> 0`.
    #[serde(default = "default_k1")]
    pub k1: f64,
    /// Document-length normalization strength. Must be in `[0, 1]`.
    #[serde(default = "default_b")]
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self {
            k1: default_k1(),
            b: default_b(),
        }
    }
}

/// Complete per-request configuration for one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Signal weights.
    #[serde(default)]
    pub weights: SignalWeights,
    /// BM25 parameters.
    #[serde(default)]
    pub bm25: Bm25Params,
    /// Recency half-life in days. Must be `> 0`.
    #[serde(default = "default_half_life_days")]
    pub half_life_days: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: SignalWeights::default(),
            bm25: Bm25Params::default(),
            half_life_days: default_half_life_days(),
        }
    }
}

impl ScoringConfig {
    /// Validate all numeric fields.
    ///
    /// Comparisons are written so that NaN fails the same arm as an
    /// out-of-range value.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered: `k1 <= 0`,
    /// `b` outside `[0, 1]`, `half_life_days <= 0`, or any weight `< 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.bm25.k1 > 0.0 && self.bm25.k1.is_finite()) {
            return Err(ConfigError::InvalidK1(self.bm25.k1));
        }
        if !(self.bm25.b >= 0.0 && self.bm25.b <= 1.0) {
            return Err(ConfigError::InvalidB(self.bm25.b));
        }
        if !(self.half_life_days > 0.0 && self.half_life_days.is_finite()) {
            return Err(ConfigError::InvalidHalfLife(self.half_life_days));
        }

        let weights = [
            ("alpha", self.weights.alpha),
            ("beta", self.weights.beta),
            ("gamma", self.weights.gamma),
            ("delta", self.weights.delta),
        ];
        for (name, value) in weights {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }

        Ok(())
    }
}

const fn default_alpha() -> f64 {
    0.3
}

const fn default_beta() -> f64 {
    0.4
}

const fn default_gamma() -> f64 {
    0.2
}

const fn default_delta() -> f64 {
    0.1
}

const fn default_k1() -> f64 {
    1.2
}

const fn default_b() -> f64 {
    0.75
}

const fn default_half_life_days() -> f64 {
    90.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
