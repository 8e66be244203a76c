//! Team interning.
//!
//! Maps team names to their single league-wide entity so a club that plays
//! in several seasons is one node in the graph.

use league_core::TeamId;
use std::collections::HashMap;

/// Name to team id interning map.
#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    by_name: HashMap<String, TeamId>,
    names: Vec<String>,
}

impl TeamRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a team by name, assigning the next id on first reference.
    ///
    /// Returns the id and whether this call created it.
    pub fn intern(&mut self, name: &str) -> (TeamId, bool) {
        if let Some(&id) = self.by_name.get(name) {
            return (id, false);
        }
        let id = TeamId(self.names.len());
        self.by_name.insert(name.to_string(), id);
        self.names.push(name.to_string());
        (id, true)
    }

    /// Look up a team without creating it.
    pub fn get(&self, name: &str) -> Option<TeamId> {
        self.by_name.get(name).copied()
    }

    /// Name of an interned team.
    pub fn name(&self, id: TeamId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    /// Number of distinct teams.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no team has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
