//! Cooldowns and timed stat modifiers.
//!
//! Both count down at the end of the owning unit's own turns. A modifier
//! remembers the delta it actually applied, so reverting it restores the
//! stat exactly even when the applied change was floored at 0.

use crate::action::Slot;
use crate::stats::{StatError, StatKind};
use crate::unit::EntityId;

use super::BattleEngine;

/// Turns left before each slot of one unit is usable again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cooldowns {
    remaining: [u32; Slot::COUNT],
}

impl Cooldowns {
    pub fn remaining(&self, slot: Slot) -> u32 {
        self.remaining[slot.as_index()]
    }

    pub fn is_ready(&self, slot: Slot) -> bool {
        self.remaining(slot) == 0
    }

    /// Puts `slot` on cooldown after it was used.
    pub fn start(&mut self, slot: Slot, cooldown: u32) {
        self.remaining[slot.as_index()] = cooldown;
    }

    /// Counts down every slot except `used`.
    pub fn tick(&mut self, used: Option<Slot>) {
        for slot in Slot::all() {
            if Some(slot) != used {
                let remaining = &mut self.remaining[slot.as_index()];
                *remaining = remaining.saturating_sub(1);
            }
        }
    }
}

/// A buff or debuff still in force.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveEffect {
    pub unit: EntityId,
    pub stat: StatKind,
    /// Signed change that was applied to the stat's current value.
    pub delta: i32,
    pub remaining: u32,
    /// Turn number the effect was applied on; it starts counting after that turn.
    pub applied_on: u32,
}

impl<'a> BattleEngine<'a> {
    /// End-of-turn upkeep for `actor`: cooldowns, then its timed modifiers.
    pub(super) fn end_turn(&mut self, actor: EntityId, used: Option<Slot>) -> Result<(), StatError> {
        self.cooldowns_mut(actor).tick(used);

        let turn = self.turn;
        let mut expired = Vec::new();
        self.effects.retain_mut(|effect| {
            if effect.unit != actor || effect.applied_on == turn {
                return true;
            }
            effect.remaining = effect.remaining.saturating_sub(1);
            if effect.remaining == 0 {
                expired.push(*effect);
                false
            } else {
                true
            }
        });

        for effect in expired {
            self.revert(effect)?;
        }
        Ok(())
    }

    /// Undoes one modifier.
    pub(super) fn revert(&mut self, effect: ActiveEffect) -> Result<(), StatError> {
        let stat = self.unit_mut(effect.unit).stats_mut().get_mut(effect.stat);
        match effect.delta {
            delta if delta > 0 => stat.lower_by(delta)?,
            delta if delta < 0 => stat.raise_by(-delta)?,
            _ => {}
        }
        tracing::debug!(
            "{} {} modifier of {:+} expired",
            effect.unit,
            effect.stat,
            effect.delta
        );
        Ok(())
    }

    /// Drops every modifier on `unit` without reverting it.
    pub(super) fn drop_effects(&mut self, unit: EntityId) {
        self.effects.retain(|effect| effect.unit != unit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_slot_waits_while_others_tick() {
        let mut cooldowns = Cooldowns::default();
        cooldowns.start(Slot::Skill, 2);
        cooldowns.start(Slot::Critical, 1);

        cooldowns.tick(Some(Slot::Skill));
        assert_eq!(cooldowns.remaining(Slot::Skill), 2);
        assert!(cooldowns.is_ready(Slot::Critical));

        cooldowns.tick(Some(Slot::Basic));
        cooldowns.tick(None);
        assert!(cooldowns.is_ready(Slot::Skill));
        assert!(cooldowns.is_ready(Slot::Basic));
    }
}
