//! Configuration structures for the league feature pipeline.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Main configuration for a feature computation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// League-wide settings.
    pub league: LeagueConfig,
    /// Feature registration settings.
    pub features: FeatureConfig,
}

impl Config {
    /// Parse a configuration from a JSON string.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the configuration for values no run can work with.
    pub fn validate(&self) -> Result<()> {
        if self.league.number_of_teams == 0 {
            return Err(Error::config("number_of_teams must be positive"));
        }

        let mut seen = HashSet::new();
        for &window in &self.features.windows {
            if window == 0 {
                return Err(Error::config("lookback window must be at least 1 game"));
            }
            if !seen.insert(window) {
                return Err(Error::config(format!(
                    "lookback window {} listed more than once",
                    window
                )));
            }
        }
        Ok(())
    }
}

/// League-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Total number of teams in a league season.
    ///
    /// Caps standings length and is the place assigned to teams missing
    /// from the previous season's standings.
    pub number_of_teams: u32,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self { number_of_teams: 20 }
    }
}

/// Feature registration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Lookback windows (in games) for the won/lost rate families.
    pub windows: Vec<usize>,
    /// Register the last-season-place pair.
    pub include_last_season_place: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            windows: vec![1, 3, 5],
            include_last_season_place: true,
        }
    }
}
