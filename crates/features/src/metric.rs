//! Historical metrics computed for one team as of a game.
//!
//! Metrics never look at the game they are evaluated for, only at history
//! strictly before it.

use league_core::{Error, FeatureValue, Result, TeamId, TeamResult, UNKNOWN};
use league_ingestion::{Game, League};

use crate::result::team_result_for;

/// A historical quantity for the team under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Finishing place in the previous season of the same tournament.
    LastSeasonPlace {
        /// Place given to teams missing from the previous standings.
        number_of_teams: u32,
    },
    /// Rate of `target` results over the team's last `window` games.
    LastGamesResult { window: usize, target: TeamResult },
}

impl Metric {
    /// Evaluate the metric for `team` as of `game`.
    pub fn evaluate(&self, league: &League, game: &Game, team: TeamId) -> Result<FeatureValue> {
        match *self {
            Metric::LastSeasonPlace { number_of_teams } => {
                Ok(last_season_place(league, game, team, number_of_teams))
            }
            Metric::LastGamesResult { window, target } => {
                last_games_result(league, game, team, window, target)
            }
        }
    }

    /// Metric part of a feature name, e.g. `LastThreeGamesWon`.
    pub fn name(&self) -> String {
        match *self {
            Metric::LastSeasonPlace { .. } => "LastSeasonPlace".to_string(),
            Metric::LastGamesResult { window, target } => {
                format!("{}{}", window_name(window), target.label())
            }
        }
    }
}

/// Finishing place (1-based) of `team` in the season before `game`'s season.
///
/// Returns [`UNKNOWN`] in a tournament's first season, and `number_of_teams`
/// for a team absent from the previous standings (new or promoted team).
pub fn last_season_place(
    league: &League,
    game: &Game,
    team: TeamId,
    number_of_teams: u32,
) -> FeatureValue {
    let Some(previous) = league.previous_season(game.season) else {
        return UNKNOWN;
    };
    match previous.place_of(team) {
        Some(place) => place as FeatureValue,
        None => number_of_teams as FeatureValue,
    }
}

/// Fraction of `team`'s last `window` games, before `game`, that ended
/// with `target` for that team.
///
/// Fails with [`Error::InsufficientData`] when the team has played fewer
/// than `window` games before this one.
pub fn last_games_result(
    league: &League,
    game: &Game,
    team: TeamId,
    window: usize,
    target: TeamResult,
) -> Result<FeatureValue> {
    let team_entry = league.team(team);
    let index = team_entry.position_of(game.id).ok_or_else(|| {
        Error::data(format!("team {} did not play game {}", team_entry.name, game.id.0))
    })?;

    if index < window {
        return Err(Error::insufficient_data(format!(
            "{} has {} prior games, window needs {}",
            team_entry.name, index, window
        )));
    }

    let mut hits = 0usize;
    for &previous in &team_entry.games()[index - window..index] {
        if team_result_for(league.game(previous), team) == Some(target) {
            hits += 1;
        }
    }
    Ok(hits as FeatureValue / window as FeatureValue)
}

/// Name fragment for a lookback window.
fn window_name(window: usize) -> String {
    match window {
        1 => "LastGame".to_string(),
        3 => "LastThreeGames".to_string(),
        5 => "LastFiveGames".to_string(),
        10 => "LastTenGames".to_string(),
        n => format!("Last{}Games", n),
    }
}
