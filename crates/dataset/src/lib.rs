//! Training set construction for the league feature pipeline.
//!
//! This crate provides:
//! - Per-game feature vector and label assembly
//! - Exclusion of games without enough history
//! - Dataset statistics
//! - JSON hand-off to an external learner

pub mod builder;
pub mod stats;
pub mod training_set;

pub use builder::TrainingSetBuilder;
pub use stats::DatasetStats;
pub use training_set::TrainingSet;
