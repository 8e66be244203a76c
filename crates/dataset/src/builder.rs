//! Training set builder.
//!
//! Walks every game in ingestion order and keeps the ones whose full
//! feature vector can be computed. A game is kept or dropped as a whole,
//! so features and labels always stay aligned.

use league_core::{Config, Result};
use league_features::FeatureEngine;
use league_ingestion::League;
use tracing::{debug, info};

use crate::stats::DatasetStats;
use crate::training_set::TrainingSet;

/// Builds training sets from a league.
#[derive(Debug)]
pub struct TrainingSetBuilder {
    engine: FeatureEngine,
}

impl TrainingSetBuilder {
    /// Create a builder with the standard features for a configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_engine(FeatureEngine::new(config)?))
    }

    /// Create a builder over an existing engine.
    pub fn with_engine(engine: FeatureEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &FeatureEngine {
        &self.engine
    }

    /// Build the training set.
    pub fn build(&self, league: &League) -> Result<TrainingSet> {
        self.build_with_stats(league).map(|(set, _)| set)
    }

    /// Build the training set and report what was kept and dropped.
    ///
    /// Games without enough history are skipped; any other evaluation error
    /// aborts the build.
    pub fn build_with_stats(&self, league: &League) -> Result<(TrainingSet, DatasetStats)> {
        let mut set = TrainingSet::new(self.engine.feature_names());
        let mut stats = DatasetStats::new(self.engine.width());

        for game in league.games() {
            match self.engine.compute_features(league, game) {
                Ok(features) => {
                    let outcome = game.outcome();
                    stats.record_included(&features, outcome);
                    set.push(game.id, features, outcome.one_hot());
                }
                Err(err) if err.is_insufficient_data() => {
                    debug!(game = game.id.0, date = %game.date, reason = %err, "game excluded");
                    stats.record_excluded();
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            games = stats.total_games,
            included = stats.included_games,
            excluded = stats.excluded_games,
            width = set.width(),
            "training set built"
        );
        Ok((set, stats))
    }
}
