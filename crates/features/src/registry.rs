//! Ordered feature registry.
//!
//! Registration order is column order in every emitted feature vector.

use league_core::{Config, Error, Result, TeamResult};
use std::collections::HashMap;
use tracing::debug;

use crate::feature::{Evaluator, Feature};
use crate::metric::Metric;
use crate::perspective::Perspective;

/// A named evaluator held by the registry.
pub struct RegisteredFeature {
    name: String,
    evaluator: Box<dyn Evaluator>,
}

impl RegisteredFeature {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn evaluator(&self) -> &dyn Evaluator {
        self.evaluator.as_ref()
    }
}

impl std::fmt::Debug for RegisteredFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredFeature").field("name", &self.name).finish()
    }
}

/// Features in registration order, each name registered once.
#[derive(Debug, Default)]
pub struct FeatureRegistry {
    features: Vec<RegisteredFeature>,
    index: HashMap<String, usize>,
}

impl FeatureRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the standard feature set for a configuration.
    ///
    /// Home/away last season place first, then for every configured window:
    /// home won, home lost, away won, away lost. The default configuration
    /// yields 14 features.
    pub fn standard(config: &Config) -> Result<Self> {
        config.validate()?;
        let mut registry = Self::new();

        if config.features.include_last_season_place {
            let metric = Metric::LastSeasonPlace {
                number_of_teams: config.league.number_of_teams,
            };
            for perspective in Perspective::ALL {
                registry.register_feature(Feature::new(perspective, metric))?;
            }
        }

        for &window in &config.features.windows {
            for perspective in Perspective::ALL {
                for target in [TeamResult::Win, TeamResult::Lose] {
                    let metric = Metric::LastGamesResult { window, target };
                    registry.register_feature(Feature::new(perspective, metric))?;
                }
            }
        }

        debug!(features = registry.len(), "standard features registered");
        Ok(registry)
    }

    /// Register an evaluator under a name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        evaluator: impl Evaluator + 'static,
    ) -> Result<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(Error::config(format!("feature {} registered twice", name)));
        }
        self.index.insert(name.clone(), self.features.len());
        self.features.push(RegisteredFeature {
            name,
            evaluator: Box::new(evaluator),
        });
        Ok(())
    }

    /// Register a (perspective, metric) feature under its own name.
    pub fn register_feature(&mut self, feature: Feature) -> Result<()> {
        self.register(feature.name(), feature)
    }

    /// All features in registration order.
    pub fn all_features(&self) -> &[RegisteredFeature] {
        &self.features
    }

    /// Feature names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.features.iter().map(|f| f.name()).collect()
    }

    /// Look up a feature by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredFeature> {
        self.index.get(name).map(|&i| &self.features[i])
    }

    /// Column of a feature in the emitted vectors.
    pub fn column_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
