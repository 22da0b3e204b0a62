/// Battle-local identity of a unit.
///
/// The player is always `0`; hostiles are numbered from `1` in party order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the player-controlled unit.
    pub const PLAYER: Self = Self(0);

    /// Reserved identifier for rolls no unit makes (party generation).
    pub const SYSTEM: Self = Self(u32::MAX);

    /// Identifier of the hostile at `index` in the party.
    #[inline]
    pub const fn hostile(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }

    /// Party index of a hostile; `None` for the player and the system.
    #[inline]
    pub const fn hostile_index(self) -> Option<usize> {
        if self.0 == Self::PLAYER.0 || self.0 == Self::SYSTEM.0 {
            None
        } else {
            Some(self.0 as usize - 1)
        }
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
