//! Action choice, target expansion and per-target resolution.

use crate::action::{Action, ActionKind, Slot, Target};
use crate::combat::{StatChange, TargetOutcome, calculate_damage, check_hit, modifier_amount};
use crate::env::RollKind;
use crate::stats::{StatError, StatKind};
use crate::unit::EntityId;

use super::BattleEngine;
use super::effects::ActiveEffect;

impl<'a> BattleEngine<'a> {
    /// Picks the slot `actor` fights with this turn.
    ///
    /// Critical (only while the unit is critical), then skill, then basic;
    /// a slot must be equipped and off cooldown.
    pub(super) fn choose_slot(&self, actor: EntityId) -> Option<Slot> {
        let unit = self.unit(actor);
        let cooldowns = self.cooldowns(actor);
        let ready = |slot: Slot| unit.actions().get(slot).is_some() && cooldowns.is_ready(slot);

        if unit.is_critical() && ready(Slot::Critical) {
            return Some(Slot::Critical);
        }
        [Slot::Skill, Slot::Basic].into_iter().find(|&slot| ready(slot))
    }

    /// Living units on the actor's side (`friendly`) or the opposing one.
    fn side_of(&self, actor: EntityId, friendly: bool) -> Vec<EntityId> {
        self.living()
            .filter(|id| (id.is_player() == actor.is_player()) == friendly)
            .collect()
    }

    /// Expands a target shape into concrete living units.
    pub(super) fn expand_targets(&mut self, actor: EntityId, target: Target) -> Vec<EntityId> {
        match target {
            Target::SelfOnly => vec![actor],
            Target::Ally | Target::AllAllies => self.side_of(actor, true),
            Target::AllOpponents => self.side_of(actor, false),
            Target::Opponent => {
                let candidates = self.side_of(actor, false);
                if candidates.is_empty() {
                    return candidates;
                }
                let index = self
                    .rolls
                    .index(actor.0, RollKind::Targeting, candidates.len());
                vec![candidates[index]]
            }
        }
    }

    /// Resolves `action` used from `slot` by `actor` against every target.
    pub(super) fn resolve(
        &mut self,
        actor: EntityId,
        slot: Slot,
        action: &Action,
    ) -> Result<Vec<(EntityId, TargetOutcome)>, StatError> {
        let targets = self.expand_targets(actor, action.target());
        let mut outcomes = Vec::with_capacity(targets.len());

        for target in targets {
            let roll = self.rolls.percent(actor.0, RollKind::Accuracy);
            if !check_hit(action.accuracy(), roll) {
                tracing::debug!("{} missed {} (roll {})", action.name(), target, roll);
                outcomes.push((target, TargetOutcome::Missed));
                continue;
            }

            let outcome = match action.kind() {
                ActionKind::Damage => self.apply_damage(actor, target, action)?,
                ActionKind::Buff(stats) => self.apply_modifier(target, action, stats, true)?,
                ActionKind::Debuff(stats) => self.apply_modifier(target, action, stats, false)?,
            };
            outcomes.push((target, outcome));
        }

        self.cooldowns_mut(actor).start(slot, action.cooldown());
        Ok(outcomes)
    }

    fn apply_damage(
        &mut self,
        actor: EntityId,
        target: EntityId,
        action: &Action,
    ) -> Result<TargetOutcome, StatError> {
        let amount = calculate_damage(action, self.unit(actor), self.unit(target));
        if amount > 0 {
            self.unit_mut(target)
                .stats_mut()
                .get_mut(StatKind::Hp)
                .lower_by(amount)?;
        }
        tracing::debug!("{} hit {} for {}", action.name(), target, amount);
        Ok(TargetOutcome::Damaged { amount })
    }

    fn apply_modifier(
        &mut self,
        target: EntityId,
        action: &Action,
        stats: &[StatKind],
        raise: bool,
    ) -> Result<TargetOutcome, StatError> {
        let ratio = self.session.config.buff_ratio_percent;
        let turn = self.turn;
        let mut changes = Vec::with_capacity(stats.len());

        for &kind in stats {
            let stat = self.unit_mut(target).stats_mut().get_mut(kind);
            let amount = modifier_amount(action.multiplier(), stat.max(), ratio);
            let before = stat.current();
            if raise {
                stat.raise_by(amount)?;
            } else {
                stat.lower_by(amount)?;
            }
            let delta = stat.current() - before;
            changes.push(StatChange { stat: kind, delta });

            // HP changes are permanent
            if kind != StatKind::Hp && action.duration() > 0 && delta != 0 {
                self.effects.push(ActiveEffect {
                    unit: target,
                    stat: kind,
                    delta,
                    remaining: action.duration(),
                    applied_on: turn,
                });
            }
        }

        tracing::debug!("{} modified {}: {:?}", action.name(), target, changes);
        Ok(TargetOutcome::Modified { changes })
    }
}
