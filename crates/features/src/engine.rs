//! Feature computation engine.
//!
//! Evaluates every registered feature for a game, in registry order.

use league_core::{Config, FeatureValue, Result};
use league_ingestion::{Game, League};

use crate::registry::FeatureRegistry;

/// Feature computation engine.
#[derive(Debug)]
pub struct FeatureEngine {
    registry: FeatureRegistry,
}

impl FeatureEngine {
    /// Create an engine with the standard features for a configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_registry(FeatureRegistry::standard(config)?))
    }

    /// Create an engine over an explicitly built registry.
    pub fn with_registry(registry: FeatureRegistry) -> Self {
        Self { registry }
    }

    /// Compute the feature vector for a game.
    ///
    /// The first evaluator that fails aborts the vector, so a game either
    /// gets every column or none.
    pub fn compute_features(&self, league: &League, game: &Game) -> Result<Vec<FeatureValue>> {
        self.registry
            .all_features()
            .iter()
            .map(|feature| feature.evaluator().evaluate(league, game))
            .collect()
    }

    /// Feature names, in column order.
    pub fn feature_names(&self) -> Vec<String> {
        self.registry.names().into_iter().map(String::from).collect()
    }

    /// Vector width.
    pub fn width(&self) -> usize {
        self.registry.len()
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }
}
