//! Round scheduling.
//!
//! A round visits every living unit once, fastest first. The order is
//! recomputed from current SPD at the start of each round, so buffs and
//! debuffs to SPD take effect on the following round.

use crate::stats::StatKind;
use crate::unit::EntityId;

use super::BattleEngine;

/// Orders `(unit, speed)` pairs by descending speed.
///
/// Ties keep their input order.
pub fn turn_order<I>(units: I) -> Vec<EntityId>
where
    I: IntoIterator<Item = (EntityId, i32)>,
{
    let mut order: Vec<(EntityId, i32)> = units.into_iter().collect();
    // sort_by_key is stable
    order.sort_by_key(|&(_, speed)| std::cmp::Reverse(speed));
    order.into_iter().map(|(id, _)| id).collect()
}

impl<'a> BattleEngine<'a> {
    /// Living units in insertion order: the player, then the party.
    pub(super) fn living(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.ids().filter(|&id| self.unit(id).is_alive())
    }

    /// Pops the next living unit, starting a new round when the current one is spent.
    ///
    /// Returns `None` only when nobody is alive.
    pub(super) fn next_actor(&mut self) -> Option<EntityId> {
        loop {
            match self.queue.pop_front() {
                Some(id) if self.unit(id).is_alive() => return Some(id),
                Some(_) => continue,
                None => {
                    let order =
                        turn_order(self.living().map(|id| (id, self.unit(id).stat(StatKind::Spd))));
                    if order.is_empty() {
                        return None;
                    }
                    self.round += 1;
                    tracing::debug!("round {} order: {:?}", self.round, order);
                    self.queue.extend(order);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faster_units_act_first_and_ties_keep_insertion_order() {
        let a = EntityId(0);
        let b = EntityId(1);
        let c = EntityId(2);
        assert_eq!(turn_order([(a, 30), (b, 50), (c, 50)]), vec![b, c, a]);
    }

    #[test]
    fn equal_speeds_preserve_party_order() {
        let ids: Vec<_> = (0..5).map(EntityId).collect();
        let order = turn_order(ids.iter().map(|&id| (id, 10)));
        assert_eq!(order, ids);
    }

    #[test]
    fn empty_roster_has_no_turns() {
        assert!(turn_order(std::iter::empty()).is_empty());
    }
}
