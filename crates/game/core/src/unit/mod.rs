//! Units: every actant of a battle.
//!
//! There is one [`Unit`] structure; what differs between a regular monster, a
//! boss and the player's explorer lives in the closed [`UnitKind`]. The battle
//! engine reads only the fields it needs (loot, forms) and never branches on
//! a unit's identity otherwise.

mod id;
mod job;

pub use id::EntityId;
pub use job::Job;

use crate::action::{ActionSet, StatList};
use crate::element::Element;
use crate::inventory::{Bag, Item, Wallet};
use crate::progression::{ExplorerRank, Level};
use crate::stats::{StatError, StatKind, StatSet};

/// Everything only an explorer carries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplorerKit {
    pub job: Job,
    pub bag: Bag,
    pub wallet: Wallet,
    pub rank: ExplorerRank,
}

/// Kind-specific data of a unit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    /// Regular hostile dropping `loot` on defeat.
    Monster { loot: Vec<Item> },
    /// Floor guardian that changes form instead of dying while forms remain.
    Boss {
        loot: Vec<Item>,
        forms: u32,
        enhance: StatList,
    },
    /// The player-controlled unit.
    Explorer(Box<ExplorerKit>),
}

/// A combatant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    name: String,
    element: Option<Element>,
    level: Level,
    stats: StatSet,
    actions: ActionSet,
    alive: bool,
    critical: bool,
    kind: UnitKind,
}

impl Unit {
    fn new(name: String, level: i32, stats: &[i32], kind: UnitKind) -> Result<Self, StatError> {
        Ok(Self {
            name,
            element: None,
            level: Level::new(level),
            stats: StatSet::new(stats)?,
            actions: ActionSet::new(),
            alive: true,
            critical: false,
            kind,
        })
    }

    /// Creates a regular monster.
    pub fn monster(
        name: impl Into<String>,
        level: i32,
        stats: &[i32],
        loot: Vec<Item>,
    ) -> Result<Self, StatError> {
        Self::new(name.into(), level, stats, UnitKind::Monster { loot })
    }

    /// Creates a boss with `forms` remaining forms.
    pub fn boss(
        name: impl Into<String>,
        level: i32,
        stats: &[i32],
        loot: Vec<Item>,
        forms: u32,
        enhance: StatList,
    ) -> Result<Self, StatError> {
        Self::new(
            name.into(),
            level,
            stats,
            UnitKind::Boss {
                loot,
                forms,
                enhance,
            },
        )
    }

    /// Creates an explorer with an empty bag and wallet.
    pub fn explorer(
        name: impl Into<String>,
        level: i32,
        stats: &[i32],
        job: Job,
    ) -> Result<Self, StatError> {
        let kit = ExplorerKit {
            job,
            bag: Bag::new(),
            wallet: Wallet::new(),
            rank: ExplorerRank::default(),
        };
        Self::new(name.into(), level, stats, UnitKind::Explorer(Box::new(kit)))
    }

    /// Sets the unit's elemental attribute (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Option<Element>) -> Self {
        self.element = element;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Option<Element> {
        self.element
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    pub fn stats(&self) -> &StatSet {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut StatSet {
        &mut self.stats
    }

    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut ActionSet {
        &mut self.actions
    }

    pub fn kind(&self) -> &UnitKind {
        &self.kind
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_critical(&self) -> bool {
        self.critical
    }

    /// Shortcut for the current value of `stat`.
    #[inline]
    pub fn stat(&self, stat: StatKind) -> i32 {
        self.stats.get(stat).current()
    }

    /// Refreshes the alive/critical flags from HP.
    ///
    /// Death is exactly 0 HP; stat mutation floors at 0 so no other value can
    /// mean death.
    pub fn health_check(&mut self) {
        let hp = self.stats.get(StatKind::Hp);
        self.critical = hp.current() <= hp.max() / 4;
        self.alive = hp.current() != 0;
    }

    /// Items dropped when this unit is defeated.
    pub fn loot(&self) -> &[Item] {
        match &self.kind {
            UnitKind::Monster { loot } | UnitKind::Boss { loot, .. } => loot,
            UnitKind::Explorer(_) => &[],
        }
    }

    /// Moves the loot out of the unit.
    pub fn take_loot(&mut self) -> Vec<Item> {
        match &mut self.kind {
            UnitKind::Monster { loot } | UnitKind::Boss { loot, .. } => std::mem::take(loot),
            UnitKind::Explorer(_) => Vec::new(),
        }
    }

    /// Remaining boss forms; 0 for every other kind.
    pub fn forms(&self) -> u32 {
        match &self.kind {
            UnitKind::Boss { forms, .. } => *forms,
            _ => 0,
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, UnitKind::Boss { .. })
    }

    pub fn explorer_kit(&self) -> Option<&ExplorerKit> {
        match &self.kind {
            UnitKind::Explorer(kit) => Some(kit),
            _ => None,
        }
    }

    pub fn explorer_mut(&mut self) -> Option<&mut ExplorerKit> {
        match &mut self.kind {
            UnitKind::Explorer(kit) => Some(kit),
            _ => None,
        }
    }

    /// Changes a boss into its next form.
    ///
    /// Every enhanced stat develops by the remaining form count, then every
    /// stat resets, then one form is consumed. Returns false (and changes
    /// nothing) for non-bosses and bosses without remaining forms.
    pub fn morph(&mut self) -> Result<bool, StatError> {
        let UnitKind::Boss { forms, enhance, .. } = &mut self.kind else {
            return Ok(false);
        };
        if *forms == 0 {
            return Ok(false);
        }
        let growth = i32::try_from(*forms).unwrap_or(i32::MAX);
        for kind in StatKind::all() {
            let stat = self.stats.get_mut(kind);
            if enhance.contains(&kind) {
                stat.develop(growth)?;
            }
            stat.reset();
        }
        *forms -= 1;
        self.health_check();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: [i32; 7] = [40, 20, 10, 12, 8, 15, 5];

    fn enhance(kinds: &[StatKind]) -> StatList {
        kinds.iter().copied().collect()
    }

    #[test]
    fn health_check_tracks_hp() {
        let mut unit = Unit::monster("Slime", 1, &STATS, Vec::new()).unwrap();
        assert!(unit.is_alive());
        assert!(!unit.is_critical());

        unit.stats_mut().get_mut(StatKind::Hp).lower_by(30).unwrap();
        unit.health_check();
        assert!(unit.is_alive());
        assert!(unit.is_critical());

        unit.stats_mut().get_mut(StatKind::Hp).lower_by(10).unwrap();
        unit.health_check();
        assert!(!unit.is_alive());
    }

    #[test]
    fn critical_threshold_uses_integer_division() {
        // 41 / 4 == 10
        let mut unit = Unit::monster("Bat", 1, &[41, 1, 1, 1, 1, 1, 1], Vec::new()).unwrap();
        unit.stats_mut().get_mut(StatKind::Hp).lower_by(30).unwrap();
        unit.health_check();
        assert!(!unit.is_critical());
        unit.stats_mut().get_mut(StatKind::Hp).lower_by(1).unwrap();
        unit.health_check();
        assert!(unit.is_critical());
    }

    #[test]
    fn morph_develops_enhanced_stats() {
        let mut boss = Unit::boss(
            "FireDrake",
            10,
            &STATS,
            Vec::new(),
            3,
            enhance(&[StatKind::Atk]),
        )
        .unwrap();
        boss.stats_mut().get_mut(StatKind::Def).lower_by(4).unwrap();

        assert_eq!(boss.morph(), Ok(true));
        let atk = boss.stats().get(StatKind::Atk);
        assert_eq!((atk.max(), atk.current()), (23, 23));
        assert_eq!(boss.stat(StatKind::Def), 10);
        assert_eq!(boss.forms(), 2);
    }

    #[test]
    fn morph_revives_a_fallen_boss() {
        let mut boss = Unit::boss("Golem", 5, &STATS, Vec::new(), 1, StatList::new()).unwrap();
        boss.stats_mut().get_mut(StatKind::Hp).lower_by(100).unwrap();
        boss.health_check();
        assert!(!boss.is_alive());

        assert_eq!(boss.morph(), Ok(true));
        assert!(boss.is_alive());
        assert_eq!(boss.morph(), Ok(false));
    }

    #[test]
    fn only_bosses_morph() {
        let mut monster = Unit::monster("Rat", 1, &STATS, Vec::new()).unwrap();
        assert_eq!(monster.morph(), Ok(false));
    }

    #[test]
    fn loot_is_moved_out_once() {
        let mut monster = Unit::monster("Rat", 1, &STATS, vec![Item::new("Tail", "", 2)]).unwrap();
        assert_eq!(monster.loot().len(), 1);
        assert_eq!(monster.take_loot().len(), 1);
        assert!(monster.loot().is_empty());
    }

    #[test]
    fn only_explorers_carry_a_kit() {
        let mut hero = Unit::explorer("Aldo", 1, &STATS, Job::new("Fighter", [1.0; 7])).unwrap();
        assert_eq!(hero.explorer_kit().map(|kit| kit.job.name()), Some("Fighter"));
        hero.explorer_mut().unwrap().wallet.deposit(10).unwrap();
        assert_eq!(hero.explorer_kit().unwrap().wallet.balance(), 10);

        let monster = Unit::monster("Rat", 1, &STATS, Vec::new()).unwrap();
        assert!(monster.explorer_kit().is_none());
    }

    #[test]
    fn rejects_wrong_stat_shape() {
        let result = Unit::monster("Broken", 1, &[1, 2, 3], Vec::new());
        assert_eq!(
            result,
            Err(StatError::WrongSize {
                expected: 7,
                actual: 3
            })
        );
    }
}
