//! Content oracle: the boundary between the battle core and persisted data.

use super::OracleError;
use crate::action::Action;
use crate::inventory::Item;
use crate::unit::Unit;

/// Oracle producing fully-formed content records by name.
///
/// Every call returns a fresh value; two loads of the same hostile never
/// share state. Failures abort only the lookup that raised them.
pub trait ContentOracle: Send + Sync {
    /// Loads the action named `name`.
    fn load_action(&self, name: &str) -> Result<Action, OracleError>;

    /// Loads the item named `name`.
    fn load_item(&self, name: &str) -> Result<Item, OracleError>;

    /// Loads a hostile unit (monster or boss) with its actions and loot equipped.
    fn load_hostile(&self, name: &str) -> Result<Unit, OracleError>;
}
