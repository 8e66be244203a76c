//! Team perspective selection.

use league_core::{Side, TeamId};
use league_ingestion::Game;

/// Which of a game's two teams a feature is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Perspective {
    Home,
    Away,
}

impl Perspective {
    /// Both perspectives in registration order.
    pub const ALL: [Perspective; 2] = [Perspective::Home, Perspective::Away];

    /// Side of the game this perspective looks at.
    #[inline]
    pub fn side(self) -> Side {
        match self {
            Perspective::Home => Side::Home,
            Perspective::Away => Side::Away,
        }
    }

    /// The team under evaluation.
    #[inline]
    pub fn select(self, game: &Game) -> TeamId {
        game.team(self.side())
    }

    /// Feature name prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Perspective::Home => "HomeTeam",
            Perspective::Away => "AwayTeam",
        }
    }
}
