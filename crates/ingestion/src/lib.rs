//! Domain model construction for the league feature pipeline.
//!
//! This crate handles:
//! - The in-memory tournament / season / team / game graph
//! - Team interning (one team entity per distinct name)
//! - Building the graph from typed ingestion records
//! - Loading typed records from JSON

pub mod builder;
pub mod model;
pub mod records;
pub mod registry;

pub use builder::{IngestionStats, LeagueBuilder};
pub use model::{Game, League, Season, Team, Tournament};
pub use records::{load_records, parse_records};
pub use registry::TeamRegistry;
