//! In-memory league graph.
//!
//! Entities live in flat arenas owned by [`League`] and refer to each other
//! by id. Every history list is append-only and kept in ingestion order,
//! which is chronological order; a game's position in a list is the number
//! of games that came before it.

use chrono::NaiveDate;
use league_core::{parse_date_token, GameId, Outcome, SeasonId, Side, TeamId, TournamentId};

use crate::registry::TeamRegistry;

/// A named competition with its seasons, oldest first.
#[derive(Debug, Clone)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub(crate) seasons: Vec<SeasonId>,
}

impl Tournament {
    /// Seasons in chronological order.
    pub fn seasons(&self) -> &[SeasonId] {
        &self.seasons
    }
}

/// One season of a tournament.
#[derive(Debug, Clone)]
pub struct Season {
    pub id: SeasonId,
    pub name: String,
    pub tournament: TournamentId,
    /// Position of this season in its tournament (0 = first season).
    pub ordinal: usize,
    pub(crate) standings: Vec<TeamId>,
    pub(crate) games: Vec<GameId>,
}

impl Season {
    /// Teams in finishing order, champion first.
    pub fn standings(&self) -> &[TeamId] {
        &self.standings
    }

    /// Games in chronological order.
    pub fn games(&self) -> &[GameId] {
        &self.games
    }

    /// 1-based finishing place of a team, if it is in the standings.
    pub fn place_of(&self, team: TeamId) -> Option<usize> {
        self.standings.iter().position(|&t| t == team).map(|i| i + 1)
    }

    /// Whether this is the first season of its tournament.
    pub fn is_first(&self) -> bool {
        self.ordinal == 0
    }
}

/// A team shared by every season it appears in.
#[derive(Debug, Clone)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub(crate) games: Vec<GameId>,
    pub(crate) home_games: Vec<GameId>,
    pub(crate) away_games: Vec<GameId>,
}

impl Team {
    pub(crate) fn new(id: TeamId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            games: Vec::new(),
            home_games: Vec::new(),
            away_games: Vec::new(),
        }
    }

    /// Append a game to this team's history.
    pub(crate) fn add_game(&mut self, game: GameId, side: Side) {
        self.games.push(game);
        match side {
            Side::Home => self.home_games.push(game),
            Side::Away => self.away_games.push(game),
        }
    }

    /// All games, home and away mixed, in chronological order.
    pub fn games(&self) -> &[GameId] {
        &self.games
    }

    /// Home games in chronological order.
    pub fn home_games(&self) -> &[GameId] {
        &self.home_games
    }

    /// Away games in chronological order.
    pub fn away_games(&self) -> &[GameId] {
        &self.away_games
    }

    /// Position of a game in this team's history, i.e. how many games the
    /// team played before it.
    pub fn position_of(&self, game: GameId) -> Option<usize> {
        // Game ids grow with ingestion order, so the history is sorted.
        self.games.binary_search(&game).ok()
    }
}

/// A single match.
#[derive(Debug, Clone)]
pub struct Game {
    pub id: GameId,
    pub season: SeasonId,
    /// Raw date token from the match record.
    pub date: String,
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub home_scored: u32,
    pub away_scored: u32,
}

impl Game {
    /// Team that played on the given side.
    #[inline]
    pub fn team(&self, side: Side) -> TeamId {
        match side {
            Side::Home => self.home_team,
            Side::Away => self.away_team,
        }
    }

    /// Goals scored by the given side.
    #[inline]
    pub fn scored(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_scored,
            Side::Away => self.away_scored,
        }
    }

    /// Side a team played on, if it took part in this game.
    pub fn side_of(&self, team: TeamId) -> Option<Side> {
        if self.home_team == team {
            Some(Side::Home)
        } else if self.away_team == team {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Final outcome, used as the training label.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_scores(self.home_scored, self.away_scored)
    }

    /// Parsed date, if the token is a well-formed ISO date.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_date_token(&self.date)
    }
}

/// The whole historical dataset.
///
/// Built once by [`crate::LeagueBuilder`] and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct League {
    pub(crate) tournaments: Vec<Tournament>,
    pub(crate) seasons: Vec<Season>,
    pub(crate) teams: Vec<Team>,
    pub(crate) games: Vec<Game>,
    pub(crate) registry: TeamRegistry,
}

impl League {
    /// Tournaments in ingestion order.
    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    /// All seasons of all tournaments.
    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// All teams, in order of first reference.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// All games across all tournaments, in ingestion order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn tournament(&self, id: TournamentId) -> &Tournament {
        &self.tournaments[id.0]
    }

    pub fn season(&self, id: SeasonId) -> &Season {
        &self.seasons[id.0]
    }

    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.0]
    }

    pub fn game(&self, id: GameId) -> &Game {
        &self.games[id.0]
    }

    /// Look up a team by name.
    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.registry.get(name).map(|id| self.team(id))
    }

    /// Season played immediately before the given one in the same
    /// tournament, or `None` for a tournament's first season.
    pub fn previous_season(&self, season: SeasonId) -> Option<&Season> {
        let season = self.season(season);
        if season.is_first() {
            return None;
        }
        let tournament = self.tournament(season.tournament);
        tournament
            .seasons
            .get(season.ordinal - 1)
            .map(|&id| self.season(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_game(id: usize, home: usize, away: usize, home_scored: u32, away_scored: u32) -> Game {
        Game {
            id: GameId(id),
            season: SeasonId(0),
            date: "2014-08-16".to_string(),
            home_team: TeamId(home),
            away_team: TeamId(away),
            home_scored,
            away_scored,
        }
    }

    #[test]
    fn test_game_sides() {
        let game = make_game(0, 3, 7, 2, 1);
        assert_eq!(game.team(Side::Home), TeamId(3));
        assert_eq!(game.team(Side::Away), TeamId(7));
        assert_eq!(game.side_of(TeamId(7)), Some(Side::Away));
        assert_eq!(game.side_of(TeamId(1)), None);
        assert_eq!(game.scored(Side::Away), 1);
    }

    #[test]
    fn test_game_outcome() {
        assert_eq!(make_game(0, 0, 1, 3, 1).outcome(), Outcome::HomeWin);
        assert_eq!(make_game(1, 0, 1, 2, 2).outcome(), Outcome::Draw);
        assert_eq!(make_game(2, 0, 1, 0, 1).outcome(), Outcome::AwayWin);
    }

    #[test]
    fn test_game_date() {
        let mut game = make_game(0, 0, 1, 0, 0);
        assert_eq!(game.date(), NaiveDate::from_ymd_opt(2014, 8, 16));

        game.date = "round-3".to_string();
        assert!(game.date().is_none());
    }

    #[test]
    fn test_team_histories() {
        let mut team = Team::new(TeamId(0), "Arsenal");
        team.add_game(GameId(2), Side::Home);
        team.add_game(GameId(5), Side::Away);
        team.add_game(GameId(9), Side::Home);

        assert_eq!(team.games(), &[GameId(2), GameId(5), GameId(9)]);
        assert_eq!(team.home_games(), &[GameId(2), GameId(9)]);
        assert_eq!(team.away_games(), &[GameId(5)]);
        assert_eq!(team.position_of(GameId(9)), Some(2));
        assert_eq!(team.position_of(GameId(4)), None);
    }

    #[test]
    fn test_place_of() {
        let season = Season {
            id: SeasonId(0),
            name: "2013".to_string(),
            tournament: TournamentId(0),
            ordinal: 0,
            standings: vec![TeamId(4), TeamId(1), TeamId(2)],
            games: Vec::new(),
        };
        assert_eq!(season.place_of(TeamId(4)), Some(1));
        assert_eq!(season.place_of(TeamId(2)), Some(3));
        assert_eq!(season.place_of(TeamId(9)), None);
        assert!(season.is_first());
    }
}
