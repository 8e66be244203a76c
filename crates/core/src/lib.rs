//! Core types and configuration for the league feature pipeline.
//!
//! This crate provides shared types used across all other crates:
//! - Entity identifiers, game sides and results
//! - Typed ingestion records (tournaments, seasons, matches)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
