//! Somnus - deterministic sleep quality scoring engine
//!
//! Somnus turns a single night's sleep measurements into a composite quality
//! score through a pure pipeline: time-in-bed derivation → four independent
//! sub-scores (duration, efficiency, continuity, stages) → weighted
//! combination → label, recommendations, and explanation.
//!
//! The engine is stateless and side-effect free; transport, validation, and
//! persistence belong to the surrounding adapter.

pub mod engine;
pub mod error;
pub mod interval;
pub mod recommend;
pub mod scoring;
pub mod types;

pub use engine::{compute_quality, score_json};
pub use error::ScoreError;
pub use types::{QualityLabel, ScoreBreakdown, SleepQualityResult, SleepRecord, StageMinutes};

/// Engine version embedded in CLI output
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for CLI output
pub const PRODUCER_NAME: &str = "somnus";
