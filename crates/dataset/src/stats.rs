//! Training set statistics.
//!
//! Summarizes what a build kept and dropped.

use league_core::{FeatureValue, Outcome, UNKNOWN};

/// Counters collected while building a training set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetStats {
    /// Games seen.
    pub total_games: usize,
    /// Games with a full feature vector.
    pub included_games: usize,
    /// Games dropped for lack of history.
    pub excluded_games: usize,
    /// Included games won by the home team.
    pub home_wins: usize,
    /// Included games drawn.
    pub draws: usize,
    /// Included games won by the away team.
    pub away_wins: usize,
    /// Per column, how many included rows hold the UNKNOWN sentinel.
    pub unknown_values: Vec<usize>,
}

impl DatasetStats {
    /// Create empty statistics for a given vector width.
    pub fn new(width: usize) -> Self {
        Self {
            unknown_values: vec![0; width],
            ..Self::default()
        }
    }

    /// Record a game that made it into the set.
    pub fn record_included(&mut self, features: &[FeatureValue], outcome: Outcome) {
        self.total_games += 1;
        self.included_games += 1;
        match outcome {
            Outcome::HomeWin => self.home_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::AwayWin => self.away_wins += 1,
        }
        for (count, &value) in self.unknown_values.iter_mut().zip(features) {
            if value == UNKNOWN {
                *count += 1;
            }
        }
    }

    /// Record a game dropped for lack of history.
    pub fn record_excluded(&mut self) {
        self.total_games += 1;
        self.excluded_games += 1;
    }

    /// Fraction of games dropped (0-1).
    pub fn exclusion_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.excluded_games as f64 / self.total_games as f64
        } else {
            0.0
        }
    }

    /// Share of (home win, draw, away win) among included games.
    pub fn label_distribution(&self) -> [f64; 3] {
        if self.included_games == 0 {
            return [0.0; 3];
        }
        let n = self.included_games as f64;
        [
            self.home_wins as f64 / n,
            self.draws as f64 / n,
            self.away_wins as f64 / n,
        ]
    }
}
