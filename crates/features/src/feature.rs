//! Feature definitions.
//!
//! A concrete feature is a (perspective, metric) pair; windowing and side
//! selection live in [`Metric`] and [`Perspective`] and are never repeated
//! per combination.

use league_core::{FeatureValue, Result};
use league_ingestion::{Game, League};

use crate::metric::Metric;
use crate::perspective::Perspective;

/// Anything that turns a game into one feature value.
///
/// Returning `Ok(UNKNOWN)` marks a value that cannot be computed but still
/// belongs in the vector; returning `Error::InsufficientData` drops the game.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, league: &League, game: &Game) -> Result<FeatureValue>;
}

impl<F> Evaluator for F
where
    F: Fn(&League, &Game) -> Result<FeatureValue> + Send + Sync,
{
    fn evaluate(&self, league: &League, game: &Game) -> Result<FeatureValue> {
        self(league, game)
    }
}

/// A metric computed from one side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub perspective: Perspective,
    pub metric: Metric,
}

impl Feature {
    pub fn new(perspective: Perspective, metric: Metric) -> Self {
        Self { perspective, metric }
    }

    /// Stable feature name, e.g. `AwayTeamLastFiveGamesLost`.
    pub fn name(&self) -> String {
        format!("{}{}", self.perspective.prefix(), self.metric.name())
    }
}

impl Evaluator for Feature {
    fn evaluate(&self, league: &League, game: &Game) -> Result<FeatureValue> {
        let team = self.perspective.select(game);
        self.metric.evaluate(league, game, team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, NUMBER_OF_TEAMS};
    use league_core::{TeamResult, UNKNOWN};

    #[test]
    fn test_feature_name() {
        let feature = Feature::new(
            Perspective::Away,
            Metric::LastGamesResult { window: 5, target: TeamResult::Lose },
        );
        assert_eq!(feature.name(), "AwayTeamLastFiveGamesLost");

        let place = Feature::new(
            Perspective::Home,
            Metric::LastSeasonPlace { number_of_teams: NUMBER_OF_TEAMS },
        );
        assert_eq!(place.name(), "HomeTeamLastSeasonPlace");
    }

    #[test]
    fn test_perspective_selects_team() {
        let league = fixtures::league();
        let game = fixtures::game(&league, 4);
        let metric = Metric::LastSeasonPlace { number_of_teams: NUMBER_OF_TEAMS };

        let home = Feature::new(Perspective::Home, metric).evaluate(&league, game).unwrap();
        let away = Feature::new(Perspective::Away, metric).evaluate(&league, game).unwrap();
        assert_eq!(home, 1.0);
        assert_eq!(away, 2.0);
    }

    #[test]
    fn test_first_season_unknown_both_perspectives() {
        let league = fixtures::league();
        let metric = Metric::LastSeasonPlace { number_of_teams: NUMBER_OF_TEAMS };

        for id in 0..4 {
            let game = fixtures::game(&league, id);
            for perspective in Perspective::ALL {
                let value = Feature::new(perspective, metric).evaluate(&league, game).unwrap();
                assert_eq!(value, UNKNOWN);
            }
        }
    }

    #[test]
    fn test_closure_evaluator() {
        let league = fixtures::league();
        let goal_difference = |_: &League, game: &Game| -> Result<FeatureValue> {
            Ok(game.home_scored as f64 - game.away_scored as f64)
        };

        assert_eq!(goal_difference.evaluate(&league, fixtures::game(&league, 0)).unwrap(), 2.0);
    }
}
