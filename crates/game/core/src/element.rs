//! The four elements and their interaction cycle.
//!
//! Interaction rules:
//! 1. each element is weak to itself;
//! 2. Air > Earth > Water > Fire > Air (effectiveness, successor);
//! 3. Air < Fire < Water < Earth < Air (weakness, predecessor).

/// Elemental attribute attached to actions and units.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Element {
    Air = 0,
    Earth = 1,
    Water = 2,
    Fire = 3,
}

impl Element {
    /// Number of elements in the cycle.
    pub const COUNT: u8 = 4;

    /// Data code used by content records for "no element".
    pub const NONE_CODE: i32 = -1;

    /// Returns the fixed cyclic id (0..3).
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Builds an element from its cyclic id, wrapping modulo 4.
    pub const fn from_id(id: u8) -> Self {
        match id % Self::COUNT {
            0 => Element::Air,
            1 => Element::Earth,
            2 => Element::Water,
            _ => Element::Fire,
        }
    }

    /// Decodes a content element code: `-1` is no element, `0..=3` an element.
    ///
    /// Unrecognized codes come back as the error value so callers can name them.
    pub fn from_code(code: i32) -> Result<Option<Self>, i32> {
        match code {
            Self::NONE_CODE => Ok(None),
            0..=3 => Ok(Some(Self::from_id(code as u8))),
            other => Err(other),
        }
    }

    /// The element this one takes bonus damage from (predecessor).
    pub const fn weakness(self) -> Self {
        Self::from_id(self.id() + Self::COUNT - 1)
    }

    /// The element this one deals bonus damage to (successor).
    pub const fn effectiveness(self) -> Self {
        Self::from_id(self.id() + 1)
    }

    /// True if `other` is this element or its weakness.
    pub fn weak_to(self, other: Element) -> bool {
        other == self || self.weakness() == other
    }

    /// True if this element is effective on `other`.
    pub fn effective_on(self, other: Element) -> bool {
        self.effectiveness() == other
    }
}

/// Damage multiplier of an attack tagged `attack` landing on a unit tagged `target`.
///
/// Effectiveness wins over weakness; an untagged side is neutral.
pub fn damage_modifier(attack: Option<Element>, target: Option<Element>) -> f32 {
    match (attack, target) {
        (Some(attack), Some(target)) if attack.effective_on(target) => 2.0,
        (Some(attack), Some(target)) if attack.weak_to(target) => 0.5,
        _ => 1.0,
    }
}
