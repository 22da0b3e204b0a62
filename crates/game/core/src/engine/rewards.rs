//! Victory awards and the battle report.

use crate::action::Slot;
use crate::combat::TargetOutcome;
use crate::config::BattleConfig;
use crate::inventory::{Item, Storage};
use crate::progression::{Progression, RankUp};
use crate::unit::{EntityId, Unit};

use super::{BattleError, Outcome};

/// Everything the player gained from a victory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    pub experience: i32,
    pub leveled_up: bool,
    pub mastery: i32,
    pub job_ranked_up: bool,
    /// Set only for boss victories.
    pub rank_up: Option<RankUp>,
    pub looted: Vec<Item>,
    /// Loot that did not fit in the bag.
    pub lost: Vec<Item>,
}

/// One entry of the battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    Acted {
        turn: u32,
        actor: EntityId,
        slot: Slot,
        action: String,
        outcomes: Vec<(EntityId, TargetOutcome)>,
    },
    /// No equipped action was ready.
    Passed { turn: u32, actor: EntityId },
    FleeFailed { turn: u32 },
    Fled { turn: u32 },
    Morphed {
        turn: u32,
        unit: EntityId,
        forms_left: u32,
    },
    Defeated { turn: u32, unit: EntityId },
}

/// Summary of a concluded battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub outcome: Outcome,
    pub turns: u32,
    pub rounds: u32,
    /// Names of the hostiles in party order.
    pub hostiles: Vec<String>,
    pub events: Vec<TurnEvent>,
    /// Present only on victory.
    pub rewards: Option<Rewards>,
}

/// Applies the victory sequence to `player`.
///
/// Order: cleanse stats, experience, job mastery, explorer rank (boss
/// battles only), loot.
pub(super) fn award(
    player: &mut Unit,
    party: &mut [Unit],
    config: &BattleConfig,
) -> Result<Rewards, BattleError> {
    let mut rewards = Rewards::default();

    player.stats_mut().cleanse_all();

    rewards.experience = party
        .iter()
        .map(|hostile| hostile.level().value().saturating_mul(config.xp_per_level))
        .fold(0i32, i32::saturating_add);
    rewards.leveled_up = player.level_mut().earn(rewards.experience)?;

    let defeated = party.iter().filter(|hostile| !hostile.is_alive()).count();
    rewards.mastery = (defeated as i32).saturating_mul(config.mastery_per_kill);
    let boss_battle = party.iter().any(Unit::is_boss);

    let Some(kit) = player.explorer_mut() else {
        tracing::debug!("player carries no explorer kit; skipping job, rank and loot");
        return Ok(rewards);
    };

    rewards.job_ranked_up = kit.job.train(rewards.mastery)?;
    if boss_battle {
        rewards.rank_up = Some(kit.rank.promote());
    }

    for item in party.iter_mut().flat_map(Unit::take_loot) {
        let stored = item.clone();
        match kit.bag.store(item) {
            Ok(()) => rewards.looted.push(stored),
            Err(item) => {
                tracing::warn!("bag is full, {} is lost", item.name);
                rewards.lost.push(item);
            }
        }
    }

    Ok(rewards)
}
