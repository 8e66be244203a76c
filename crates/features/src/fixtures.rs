//! Small league shared by the feature tests.
//!
//! Premier 2013: standings Alpha, Beta, Gamma
//!   g0 Alpha 2-0 Beta
//!   g1 Gamma 1-1 Alpha
//!   g2 Beta  3-1 Gamma
//!   g3 Alpha 0-1 Gamma
//! Premier 2014: standings Beta, Alpha, Delta
//!   g4 Alpha 3-1 Beta
//!   g5 Delta 0-2 Alpha
//!   g6 Beta  1-1 Delta

use league_core::{Config, GameId, MatchRecord, SeasonRecord, TournamentRecord};
use league_ingestion::{Game, League, LeagueBuilder};

pub const NUMBER_OF_TEAMS: u32 = 4;

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

pub fn config() -> Config {
    let mut config = Config::default();
    config.league.number_of_teams = NUMBER_OF_TEAMS;
    config
}

pub fn league() -> League {
    let record = TournamentRecord {
        name: "Premier".to_string(),
        seasons: vec![
            SeasonRecord {
                name: "2013".to_string(),
                standings: vec!["Alpha".into(), "Beta".into(), "Gamma".into()],
                matches: vec![
                    make_match("2013-08-10", "Alpha", "Beta", 2, 0),
                    make_match("2013-08-17", "Gamma", "Alpha", 1, 1),
                    make_match("2013-08-24", "Beta", "Gamma", 3, 1),
                    make_match("2013-08-31", "Alpha", "Gamma", 0, 1),
                ],
            },
            SeasonRecord {
                name: "2014".to_string(),
                standings: vec!["Beta".into(), "Alpha".into(), "Delta".into()],
                matches: vec![
                    make_match("2014-08-09", "Alpha", "Beta", 3, 1),
                    make_match("2014-08-16", "Delta", "Alpha", 0, 2),
                    make_match("2014-08-23", "Beta", "Delta", 1, 1),
                ],
            },
        ],
    };
    LeagueBuilder::from_records(&config(), &[record]).unwrap()
}

pub fn game(league: &League, id: usize) -> &Game {
    league.game(GameId(id))
}
