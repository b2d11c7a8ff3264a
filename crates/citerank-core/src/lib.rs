#![forbid(unsafe_code)]
//! citerank-core library.
//!
//! Value objects shared by the citerank scoring engine: the [`Fact`]
//! domain model and the per-request [`ScoringConfig`].
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums for validation; `Result` + `?`.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod model;

pub use config::{Bm25Params, ConfigError, ScoringConfig, SignalWeights};
pub use model::fact::Fact;
