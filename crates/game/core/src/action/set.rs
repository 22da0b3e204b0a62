//! The three action slots every unit fights with.

use super::{Action, ActionError};

/// Named slot of an [`ActionSet`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Slot {
    /// Usable at all times.
    Basic = 0,
    /// Usable whenever it is off cooldown.
    Skill = 1,
    /// Used once the unit is in a critical state.
    Critical = 2,
}

impl Slot {
    pub const COUNT: usize = 3;

    /// Returns all slots in order.
    pub const fn all() -> [Slot; Self::COUNT] {
        [Slot::Basic, Slot::Skill, Slot::Critical]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Parses a slot name, naming the offending key on failure.
    pub fn parse(name: &str) -> Result<Self, ActionError> {
        name.parse()
            .map_err(|_| ActionError::UndefinedSlot(name.to_string()))
    }
}

/// Basic, skill and critical actions of a unit. Empty by default.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionSet {
    slots: [Option<Action>; Slot::COUNT],
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&Action> {
        self.slots[slot.as_index()].as_ref()
    }

    pub fn basic(&self) -> Option<&Action> {
        self.get(Slot::Basic)
    }

    pub fn skill(&self) -> Option<&Action> {
        self.get(Slot::Skill)
    }

    pub fn critical(&self) -> Option<&Action> {
        self.get(Slot::Critical)
    }

    /// Stores a copy of `action` in `slot` and returns the action it replaced.
    pub fn set(
        &mut self,
        slot: Slot,
        action: Option<&Action>,
    ) -> Result<Option<Action>, ActionError> {
        let action = action.ok_or(ActionError::NullAction)?;
        Ok(self.slots[slot.as_index()].replace(action.clone()))
    }

    /// Same as [`set`](Self::set) with the slot given by name.
    pub fn set_by_name(
        &mut self,
        slot: &str,
        action: Option<&Action>,
    ) -> Result<Option<Action>, ActionError> {
        self.set(Slot::parse(slot)?, action)
    }

    /// Iterates equipped slots in order.
    pub fn equipped(&self) -> impl Iterator<Item = (Slot, &Action)> {
        Slot::all()
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|action| (slot, action)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;

    fn action(name: &str) -> Action {
        Action::builder(name, ActionKind::Damage).build().unwrap()
    }

    #[test]
    fn starts_empty() {
        let set = ActionSet::new();
        assert!(set.basic().is_none());
        assert!(set.skill().is_none());
        assert!(set.critical().is_none());
        assert_eq!(set.equipped().count(), 0);
    }

    #[test]
    fn set_returns_previous_action() {
        let mut set = ActionSet::new();
        assert_eq!(set.set(Slot::Basic, Some(&action("Punch"))), Ok(None));

        let previous = set.set(Slot::Basic, Some(&action("Kick"))).unwrap();
        assert_eq!(previous.map(|a| a.name().to_string()), Some("Punch".into()));
        assert_eq!(set.basic().map(Action::name), Some("Kick"));
    }

    #[test]
    fn rejects_missing_action() {
        let mut set = ActionSet::new();
        assert_eq!(set.set(Slot::Skill, None), Err(ActionError::NullAction));
        assert!(set.skill().is_none());
    }

    #[test]
    fn resolves_slots_by_name() {
        let mut set = ActionSet::new();
        set.set_by_name("critical", Some(&action("Last Stand")))
            .unwrap();
        assert_eq!(set.critical().map(Action::name), Some("Last Stand"));
        assert_eq!(
            set.set_by_name("ultimate", Some(&action("Nope"))),
            Err(ActionError::UndefinedSlot("ultimate".into()))
        );
    }
}
