//! League graph construction from typed records.
//!
//! Entities are created in dependency order: tournament, then each season's
//! standings, then its games. Each game is appended to both teams' histories
//! as it is created.

use league_core::{
    Config, Error, GameId, MatchRecord, Result, SeasonId, SeasonRecord, Side, TeamId,
    TournamentId, TournamentRecord,
};
use tracing::{debug, info, warn};

use crate::model::{Game, League, Season, Team, Tournament};

/// Counters collected while building a league.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestionStats {
    /// Tournaments added.
    pub tournaments: usize,
    /// Seasons added.
    pub seasons: usize,
    /// Distinct teams created.
    pub teams: usize,
    /// Games added.
    pub games: usize,
    /// Seasons whose standings were cut to the configured team count.
    pub truncated_standings: usize,
}

/// Builds a [`League`] from ingestion records.
pub struct LeagueBuilder {
    /// Maximum standings length.
    number_of_teams: usize,
    league: League,
    stats: IngestionStats,
}

impl LeagueBuilder {
    /// Create a new builder.
    pub fn new(config: &Config) -> Self {
        Self {
            number_of_teams: config.league.number_of_teams as usize,
            league: League::default(),
            stats: IngestionStats::default(),
        }
    }

    /// Build a league from a full set of records in one call.
    pub fn from_records(config: &Config, records: &[TournamentRecord]) -> Result<League> {
        let mut builder = Self::new(config);
        for record in records {
            builder.add_tournament(record)?;
        }
        Ok(builder.build())
    }

    /// Add a tournament with all its seasons.
    ///
    /// Records are checked before anything is added, so a rejected
    /// tournament leaves the league untouched.
    pub fn add_tournament(&mut self, record: &TournamentRecord) -> Result<TournamentId> {
        check_tournament(record)?;

        let id = TournamentId(self.league.tournaments.len());
        self.league.tournaments.push(Tournament {
            id,
            name: record.name.clone(),
            seasons: Vec::with_capacity(record.seasons.len()),
        });
        self.stats.tournaments += 1;

        for season in &record.seasons {
            self.add_season(id, season);
        }

        debug!(
            tournament = %record.name,
            seasons = record.seasons.len(),
            "tournament added"
        );
        Ok(id)
    }

    fn add_season(&mut self, tournament: TournamentId, record: &SeasonRecord) -> SeasonId {
        let id = SeasonId(self.league.seasons.len());
        let ordinal = self.league.tournaments[tournament.0].seasons.len();

        let mut names = record.standings.as_slice();
        if names.len() > self.number_of_teams {
            warn!(
                season = %record.name,
                listed = names.len(),
                kept = self.number_of_teams,
                "standings longer than the configured team count, truncating"
            );
            names = &names[..self.number_of_teams];
            self.stats.truncated_standings += 1;
        }
        let standings: Vec<TeamId> = names.iter().map(|name| self.intern_team(name)).collect();

        self.league.seasons.push(Season {
            id,
            name: record.name.clone(),
            tournament,
            ordinal,
            standings,
            games: Vec::with_capacity(record.matches.len()),
        });
        self.league.tournaments[tournament.0].seasons.push(id);
        self.stats.seasons += 1;

        for game in &record.matches {
            self.add_game(id, game);
        }
        id
    }

    fn add_game(&mut self, season: SeasonId, record: &MatchRecord) -> GameId {
        let id = GameId(self.league.games.len());
        let home_team = self.intern_team(&record.home_team);
        let away_team = self.intern_team(&record.away_team);

        self.league.games.push(Game {
            id,
            season,
            date: record.date.clone(),
            home_team,
            away_team,
            home_scored: record.home_scored,
            away_scored: record.away_scored,
        });
        self.league.seasons[season.0].games.push(id);
        self.league.teams[home_team.0].add_game(id, Side::Home);
        self.league.teams[away_team.0].add_game(id, Side::Away);
        self.stats.games += 1;
        id
    }

    /// Return the team for a name, creating it on first reference.
    fn intern_team(&mut self, name: &str) -> TeamId {
        let (id, created) = self.league.registry.intern(name);
        if created {
            self.league.teams.push(Team::new(id, name));
            self.stats.teams += 1;
        }
        id
    }

    /// Counters so far.
    pub fn stats(&self) -> &IngestionStats {
        &self.stats
    }

    /// Finish building.
    pub fn build(self) -> League {
        info!(
            tournaments = self.stats.tournaments,
            seasons = self.stats.seasons,
            teams = self.stats.teams,
            games = self.stats.games,
            "league built"
        );
        self.league
    }
}

/// Reject records that would break the league graph.
fn check_tournament(record: &TournamentRecord) -> Result<()> {
    for season in &record.seasons {
        for game in &season.matches {
            if game.home_team == game.away_team {
                return Err(Error::data(format!(
                    "{} {}: game on {} lists {} as both home and away team",
                    record.name, season.name, game.date, game.home_team
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_match(
        date: &str,
        home: &str,
        away: &str,
        home_scored: u32,
        away_scored: u32,
    ) -> MatchRecord {
        MatchRecord {
            date: date.to_string(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_scored,
            away_scored,
        }
    }

    fn make_season(name: &str, standings: &[&str], matches: Vec<MatchRecord>) -> SeasonRecord {
        SeasonRecord {
            name: name.to_string(),
            standings: standings.iter().map(|s| s.to_string()).collect(),
            matches,
        }
    }

    fn two_season_records() -> TournamentRecord {
        TournamentRecord {
            name: "Premier".to_string(),
            seasons: vec![
                make_season(
                    "2013",
                    &["Alpha", "Beta"],
                    vec![
                        make_match("2013-08-10", "Alpha", "Beta", 2, 0),
                        make_match("2013-08-17", "Beta", "Alpha", 1, 1),
                    ],
                ),
                make_season(
                    "2014",
                    &["Beta", "Alpha", "Gamma"],
                    vec![
                        make_match("2014-08-09", "Gamma", "Alpha", 0, 3),
                        make_match("2014-08-16", "Beta", "Gamma", 2, 1),
                    ],
                ),
            ],
        }
    }

    fn build_two_seasons() -> League {
        LeagueBuilder::from_records(&Config::default(), &[two_season_records()]).unwrap()
    }

    #[test]
    fn test_builds_graph() {
        let league = build_two_seasons();

        assert_eq!(league.tournaments().len(), 1);
        assert_eq!(league.seasons().len(), 2);
        assert_eq!(league.teams().len(), 3);
        assert_eq!(league.games().len(), 4);

        let tournament = &league.tournaments()[0];
        assert_eq!(tournament.seasons(), &[SeasonId(0), SeasonId(1)]);
        assert_eq!(league.season(SeasonId(1)).ordinal, 1);
        assert_eq!(league.season(SeasonId(1)).games(), &[GameId(2), GameId(3)]);
    }

    #[test]
    fn test_team_shared_across_seasons() {
        let league = build_two_seasons();

        let alpha = league.team_by_name("Alpha").unwrap();
        assert_eq!(alpha.games(), &[GameId(0), GameId(1), GameId(2)]);
        assert_eq!(alpha.home_games(), &[GameId(0)]);
        assert_eq!(alpha.away_games(), &[GameId(1), GameId(2)]);

        let season_two = league.season(SeasonId(1));
        assert_eq!(season_two.place_of(alpha.id), Some(2));
    }

    #[test]
    fn test_team_games_are_union_of_home_and_away() {
        let league = build_two_seasons();

        for team in league.teams() {
            let mut merged: Vec<GameId> = team
                .home_games()
                .iter()
                .chain(team.away_games())
                .copied()
                .collect();
            merged.sort();
            merged.dedup();
            assert_eq!(merged.len(), team.home_games().len() + team.away_games().len());
            assert_eq!(merged.as_slice(), team.games());
        }
    }

    #[test]
    fn test_previous_season() {
        let league = build_two_seasons();

        assert!(league.previous_season(SeasonId(0)).is_none());
        let previous = league.previous_season(SeasonId(1)).unwrap();
        assert_eq!(previous.id, SeasonId(0));
    }

    #[test]
    fn test_truncates_long_standings() {
        let mut config = Config::default();
        config.league.number_of_teams = 2;

        let mut builder = LeagueBuilder::new(&config);
        builder.add_tournament(&two_season_records()).unwrap();
        assert_eq!(builder.stats().truncated_standings, 1);

        let league = builder.build();
        assert_eq!(league.season(SeasonId(1)).standings().len(), 2);
    }

    #[test]
    fn test_rejects_team_playing_itself() {
        let record = TournamentRecord {
            name: "Cup".to_string(),
            seasons: vec![make_season(
                "2013",
                &[],
                vec![make_match("2013-01-01", "Alpha", "Alpha", 1, 0)],
            )],
        };
        let result = LeagueBuilder::from_records(&Config::default(), &[record]);
        assert!(matches!(result, Err(Error::Data(_))));
    }

    #[test]
    fn test_rejected_tournament_leaves_league_unchanged() {
        let mut builder = LeagueBuilder::new(&Config::default());
        builder.add_tournament(&two_season_records()).unwrap();
        let before = builder.stats().clone();

        let record = TournamentRecord {
            name: "Cup".to_string(),
            seasons: vec![
                make_season(
                    "2013",
                    &["Delta", "Epsilon"],
                    vec![make_match("2013-05-01", "Delta", "Epsilon", 2, 1)],
                ),
                make_season(
                    "2014",
                    &[],
                    vec![
                        make_match("2014-05-01", "Epsilon", "Delta", 0, 0),
                        make_match("2014-05-08", "Delta", "Delta", 1, 0),
                    ],
                ),
            ],
        };
        assert!(matches!(builder.add_tournament(&record), Err(Error::Data(_))));
        assert_eq!(builder.stats(), &before);

        let league = builder.build();
        assert_eq!(league.tournaments().len(), 1);
        assert_eq!(league.seasons().len(), 2);
        assert_eq!(league.teams().len(), 3);
        assert_eq!(league.games().len(), 4);
        assert!(league.team_by_name("Delta").is_none());
    }

    #[test]
    fn test_stats() {
        let mut builder = LeagueBuilder::new(&Config::default());
        builder.add_tournament(&two_season_records()).unwrap();

        let stats = builder.stats();
        assert_eq!(stats.tournaments, 1);
        assert_eq!(stats.seasons, 2);
        assert_eq!(stats.teams, 3);
        assert_eq!(stats.games, 4);
        assert_eq!(stats.truncated_standings, 0);
    }
}
