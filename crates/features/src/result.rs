//! Single-game result from one team's point of view.

use league_core::{Side, TeamId, TeamResult};
use league_ingestion::Game;

/// Result of a game for the team on the given side.
#[inline]
pub fn team_result(game: &Game, side: Side) -> TeamResult {
    TeamResult::from_scores(game.scored(side), game.scored(side.opposite()))
}

/// Result of a game for a given team, whichever side it played on.
///
/// `None` when the team did not take part in the game.
#[inline]
pub fn team_result_for(game: &Game, team: TeamId) -> Option<TeamResult> {
    game.side_of(team).map(|side| team_result(game, side))
}
