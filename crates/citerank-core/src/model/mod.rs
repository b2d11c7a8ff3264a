//! Domain model for the scoring engine.

pub mod fact;

pub use fact::Fact;
