//! Working scenario plus saved scenarios.
//!
//! A [`Session`] is an explicit value handed to whoever edits scenarios. The
//! kernel never sees it; it only receives the bodies and parameters it needs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ModelError, Result};
use crate::scenario::Scenario;

/// Default name of a freshly created scenario.
pub const DEFAULT_SCENARIO_NAME: &str = "New scenario";

/// Scenario store keyed by scenario id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Mutable working copy.
    pub current: Scenario,
    /// Saved scenarios, in save order.
    #[serde(default)]
    pub saved: Vec<Scenario>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty session with an unsaved working scenario.
    pub fn new() -> Self {
        Self {
            current: Scenario::today(DEFAULT_SCENARIO_NAME),
            saved: Vec::new(),
        }
    }

    /// Create a scenario, save it and make it current.
    pub fn new_scenario(&mut self, name: impl Into<String>) -> &mut Scenario {
        let scenario = Scenario::today(name);
        log::info!("created scenario '{}' ({})", scenario.name, scenario.id);
        self.saved.push(scenario.clone());
        self.current = scenario;
        &mut self.current
    }

    /// Save the working scenario, replacing a saved one with the same id.
    pub fn save_current(&mut self) {
        match self.saved.iter_mut().find(|s| s.id == self.current.id) {
            Some(slot) => {
                log::debug!("replacing saved scenario {}", self.current.id);
                *slot = self.current.clone();
            }
            None => {
                log::debug!("appending scenario {}", self.current.id);
                self.saved.push(self.current.clone());
            }
        }
    }

    /// Make a copy of a saved scenario the working scenario.
    pub fn load(&mut self, id: Uuid) -> Result<&Scenario> {
        let scenario = self.get(id).ok_or(ModelError::ScenarioNotFound(id))?.clone();
        self.current = scenario;
        Ok(&self.current)
    }

    /// Delete a saved scenario. Deleting the working scenario resets it.
    pub fn delete(&mut self, id: Uuid) -> Result<Scenario> {
        let idx = self
            .saved
            .iter()
            .position(|s| s.id == id)
            .ok_or(ModelError::ScenarioNotFound(id))?;
        let removed = self.saved.remove(idx);
        if self.current.id == id {
            self.current = Scenario::today(DEFAULT_SCENARIO_NAME);
        }
        Ok(removed)
    }

    /// Append scenarios from an export. Ids are kept as-is.
    pub fn import(&mut self, scenarios: Vec<Scenario>) -> usize {
        let count = scenarios.len();
        self.saved.extend(scenarios);
        log::info!("imported {} scenario(s)", count);
        count
    }

    /// Look up a saved scenario.
    pub fn get(&self, id: Uuid) -> Option<&Scenario> {
        self.saved.iter().find(|s| s.id == id)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the saved list, the scenario export format.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.saved)?)
    }

    /// Parse a scenario export (a JSON list of scenarios).
    pub fn parse_export(json: &str) -> Result<Vec<Scenario>> {
        Ok(serde_json::from_str(json)?)
    }
}
