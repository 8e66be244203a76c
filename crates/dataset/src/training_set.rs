//! Aligned feature vectors and labels.

use league_core::{FeatureValue, GameId, Label, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Feature vectors and labels, row `i` of each describing the same game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    /// Column names of every feature vector.
    pub feature_names: Vec<String>,
    /// One vector per included game.
    pub features: Vec<Vec<FeatureValue>>,
    /// One-hot (home win, draw, away win) per included game.
    pub labels: Vec<Label>,
    /// Game each row was computed for.
    pub games: Vec<GameId>,
}

impl TrainingSet {
    /// Create an empty set with the given columns.
    pub fn new(feature_names: Vec<String>) -> Self {
        Self {
            feature_names,
            ..Self::default()
        }
    }

    /// Append one game's row.
    pub(crate) fn push(&mut self, game: GameId, features: Vec<FeatureValue>, label: Label) {
        debug_assert_eq!(features.len(), self.feature_names.len());
        self.games.push(game);
        self.features.push(features);
        self.labels.push(label);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of feature columns.
    pub fn width(&self) -> usize {
        self.feature_names.len()
    }

    /// Rows as (game, features, label).
    pub fn rows(&self) -> impl Iterator<Item = (GameId, &[FeatureValue], &Label)> {
        self.games
            .iter()
            .zip(&self.features)
            .zip(&self.labels)
            .map(|((&game, features), label)| (game, features.as_slice(), label))
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write as JSON to a file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
