//! Items and the explorer's storage kit.
//!
//! The battle engine only needs to hand loot over; it does so through the
//! [`Storage`] trait so the bookkeeping stays with the container.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::error::{ErrorSeverity, GameError};

/// Obtainable object.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub description: String,
    pub price: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// Errors raised by storage containers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("the sum {0} cannot be negative")]
    Argument(i32),
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "INVENTORY_ARGUMENT"
    }
}

/// Destination of transferred items.
pub trait Storage {
    /// Stores `item`, handing it back when there is no room.
    fn store(&mut self, item: Item) -> Result<(), Item>;
}

/// Fixed-capacity bag carried by an explorer. Same-named items are kept together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bag {
    contents: ArrayVec<Item, { BattleConfig::BAG_SIZE }>,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &[Item] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.contents.is_full()
    }

    /// Index of the first item named `name` (case sensitive).
    pub fn name_search(&self, name: &str) -> Option<usize> {
        self.contents.iter().position(|item| item.name == name)
    }

    /// Removes and returns the item at `index`, shifting the rest up.
    pub fn take_out(&mut self, index: usize) -> Option<Item> {
        (index < self.contents.len()).then(|| self.contents.remove(index))
    }
}

impl Storage for Bag {
    fn store(&mut self, item: Item) -> Result<(), Item> {
        if self.is_full() {
            return Err(item);
        }
        match self.name_search(&item.name) {
            Some(index) => self.contents.insert(index + 1, item),
            None => self.contents.push(item),
        }
        Ok(())
    }
}

/// Unbounded currency holder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wallet {
    balance: i32,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> i32 {
        self.balance
    }

    pub fn has_enough(&self, sum: i32) -> Result<bool, InventoryError> {
        if sum < 0 {
            return Err(InventoryError::Argument(sum));
        }
        Ok(self.balance >= sum)
    }

    pub fn deposit(&mut self, sum: i32) -> Result<(), InventoryError> {
        if sum < 0 {
            return Err(InventoryError::Argument(sum));
        }
        self.balance += sum;
        Ok(())
    }

    /// Withdraws `sum` if the balance covers it; returns whether it did.
    pub fn withdraw(&mut self, sum: i32) -> Result<bool, InventoryError> {
        let covered = self.has_enough(sum)?;
        if covered {
            self.balance -= sum;
        }
        Ok(covered)
    }
}
