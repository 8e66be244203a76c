//! Feature computation for the league feature pipeline.
//!
//! This crate handles:
//! - Team perspective selection (home / away)
//! - Single-game team results
//! - Historical metrics (last season place, recent results rate)
//! - The ordered feature registry and the engine evaluating it per game

pub mod engine;
pub mod feature;
pub mod metric;
pub mod perspective;
pub mod registry;
pub mod result;

#[cfg(test)]
mod fixtures;

pub use engine::FeatureEngine;
pub use feature::{Evaluator, Feature};
pub use metric::Metric;
pub use perspective::Perspective;
pub use registry::{FeatureRegistry, RegisteredFeature};
pub use result::{team_result, team_result_for};
