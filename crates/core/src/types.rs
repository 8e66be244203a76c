//! Core data types for the league feature pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Feature value type.
pub type FeatureValue = f64;

/// Sentinel for a feature that cannot be computed for a game.
///
/// Lies outside every valid feature range (places are >= 1, rates are in [0, 1]).
pub const UNKNOWN: FeatureValue = -1.0;

/// Format of the date token carried by match records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a match date token.
#[inline]
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token.trim(), DATE_FORMAT).ok()
}

/// Index of a tournament in the league arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TournamentId(pub usize);

/// Index of a season in the league arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeasonId(pub usize);

/// Index of a team in the league arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub usize);

/// Index of a game in the league arena.
///
/// Ids are assigned in ingestion order, so they also order games chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub usize);

/// Which side of a game a team played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// The other side of the game.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Result of a single game from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TeamResult {
    /// Scored strictly less.
    Lose = 0,
    /// Equal scores.
    Draft = 1,
    /// Scored strictly more.
    Win = 2,
}

impl TeamResult {
    /// Compare a team's goals against its opponent's.
    ///
    /// Equal scores are always a draft, whichever side is asked.
    #[inline]
    pub fn from_scores(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => TeamResult::Win,
            std::cmp::Ordering::Less => TeamResult::Lose,
            std::cmp::Ordering::Equal => TeamResult::Draft,
        }
    }

    /// Short label used in feature names.
    pub fn label(self) -> &'static str {
        match self {
            TeamResult::Win => "Won",
            TeamResult::Draft => "Drawn",
            TeamResult::Lose => "Lost",
        }
    }
}

/// Final outcome of a game, used as the training label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

/// One-hot label: (home win, draw, away win).
pub type Label = [f64; 3];

impl Outcome {
    /// Outcome from the final score.
    #[inline]
    pub fn from_scores(home_scored: u32, away_scored: u32) -> Self {
        match TeamResult::from_scores(home_scored, away_scored) {
            TeamResult::Win => Outcome::HomeWin,
            TeamResult::Draft => Outcome::Draw,
            TeamResult::Lose => Outcome::AwayWin,
        }
    }

    /// One-hot encoding in (home win, draw, away win) order.
    pub fn one_hot(self) -> Label {
        match self {
            Outcome::HomeWin => [1.0, 0.0, 0.0],
            Outcome::Draw => [0.0, 1.0, 0.0],
            Outcome::AwayWin => [0.0, 0.0, 1.0],
        }
    }
}

/// A single match row as produced by the ingestion collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Date token (ISO `YYYY-MM-DD` when well formed).
    pub date: String,
    /// Home team name.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Goals scored by the home team.
    pub home_scored: u32,
    /// Goals scored by the away team.
    pub away_scored: u32,
}

/// One season of a tournament.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    /// Season name (e.g. "2013-2014").
    pub name: String,
    /// Team names in finishing order, champion first.
    #[serde(default)]
    pub standings: Vec<String>,
    /// Matches in chronological order.
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

/// A tournament with its seasons in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentRecord {
    /// Tournament name.
    pub name: String,
    /// Seasons, oldest first.
    #[serde(default)]
    pub seasons: Vec<SeasonRecord>,
}
