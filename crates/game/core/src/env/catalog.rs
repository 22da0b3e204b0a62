//! In-memory content oracle.
//!
//! Holds ready-made records keyed by name and hands out clones, so every load
//! is an independent copy. Used by tests and by tools that assemble content
//! programmatically.

use std::collections::HashMap;

use super::{ContentOracle, OracleError, RecordKind};
use crate::action::Action;
use crate::inventory::Item;
use crate::unit::Unit;

#[derive(Clone, Debug, Default)]
pub struct CatalogOracle {
    actions: HashMap<String, Action>,
    items: HashMap<String, Item>,
    hostiles: HashMap<String, Unit>,
}

impl CatalogOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action under its own name.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.insert(action.name().to_string(), action);
        self
    }

    /// Registers an item under its own name.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.name.clone(), item);
        self
    }

    /// Registers a hostile under `id`.
    pub fn with_hostile(mut self, id: impl Into<String>, unit: Unit) -> Self {
        self.hostiles.insert(id.into(), unit);
        self
    }

    pub fn hostile_ids(&self) -> impl Iterator<Item = &str> {
        self.hostiles.keys().map(String::as_str)
    }
}

impl ContentOracle for CatalogOracle {
    fn load_action(&self, name: &str) -> Result<Action, OracleError> {
        self.actions
            .get(name)
            .cloned()
            .ok_or_else(|| OracleError::not_found(RecordKind::Action, name))
    }

    fn load_item(&self, name: &str) -> Result<Item, OracleError> {
        self.items
            .get(name)
            .cloned()
            .ok_or_else(|| OracleError::not_found(RecordKind::Item, name))
    }

    fn load_hostile(&self, name: &str) -> Result<Unit, OracleError> {
        self.hostiles
            .get(name)
            .cloned()
            .ok_or_else(|| OracleError::not_found(RecordKind::Hostile, name))
    }
}
