use super::Unit;
use serde::Serialize;
use std::collections::BTreeMap;

/// Floor key that never appears in the floor grid.
pub const HIDDEN_FLOOR_KEY: &str = "-1";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryDocument {
    pub project_name: String,
    /// Flat unit list; only used for the status counters.
    pub records: Vec<Unit>,
    /// Floor key (string-encoded integer) to the units on that floor.
    pub floors: BTreeMap<String, Vec<Unit>>,
}

impl InventoryDocument {
    #[must_use]
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    /// Adds a unit to both the records and the given floor.
    pub fn push_unit(&mut self, floor_key: &str, unit: Unit) {
        self.records.push(unit.clone());
        self.floors
            .entry(floor_key.to_string())
            .or_default()
            .push(unit);
    }

    #[must_use]
    pub fn total_units(&self) -> usize {
        self.records.len()
    }
}
