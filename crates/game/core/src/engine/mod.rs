//! Battle engine: party generation, turn loop and victory awards.
//!
//! A [`BattleEngine`] drives one encounter through its phases:
//!
//! ```text
//! Idle ──build_party──▶ PartyBuilt ──step──▶ InProgress ──▶ Concluded(outcome)
//! ```
//!
//! Each [`step`](BattleEngine::step) plays exactly one turn. All randomness
//! flows through the session seed, so two engines built from the same
//! session, content and player produce identical reports.

mod effects;
mod errors;
mod resolve;
mod rewards;
mod turns;

pub use effects::{ActiveEffect, Cooldowns};
pub use errors::BattleError;
pub use rewards::{BattleReport, Rewards, TurnEvent};
pub use turns::turn_order;

use std::collections::VecDeque;

use crate::config::{BattleConfig, FloorConfig};
use crate::encounter::{EncounterGenerator, EncounterMode, Party};
use crate::env::{BattleEnv, RollKind, RollStream};
use crate::unit::{EntityId, Unit};

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// Every hostile is dead.
    Victory,
    /// The player is dead.
    Defeat,
    /// The player escaped.
    Fled,
}

/// Lifecycle of a [`BattleEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattlePhase {
    Idle,
    PartyBuilt,
    InProgress,
    Concluded(Outcome),
}

impl std::fmt::Display for BattlePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattlePhase::Idle => f.write_str("idle"),
            BattlePhase::PartyBuilt => f.write_str("party_built"),
            BattlePhase::InProgress => f.write_str("in_progress"),
            BattlePhase::Concluded(outcome) => write!(f, "concluded ({outcome})"),
        }
    }
}

/// Inputs of one encounter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub floor: FloorConfig,
    pub config: BattleConfig,
    pub seed: u64,
}

impl Session {
    pub fn new(floor: FloorConfig, config: BattleConfig, seed: u64) -> Self {
        Self {
            floor,
            config,
            seed,
        }
    }
}

/// What the player does at the start of its turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnChoice {
    #[default]
    Fight,
    Flee,
}

/// Decides the player's turns.
///
/// Action selection itself is automatic; the controller only chooses
/// between fighting and attempting to flee.
pub trait TurnController {
    fn choose(&mut self, player: &Unit, party: &[Unit]) -> TurnChoice;
}

impl<F> TurnController for F
where
    F: FnMut(&Unit, &[Unit]) -> TurnChoice,
{
    fn choose(&mut self, player: &Unit, party: &[Unit]) -> TurnChoice {
        self(player, party)
    }
}

/// Controller that always fights.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoBattle;

impl TurnController for AutoBattle {
    fn choose(&mut self, _player: &Unit, _party: &[Unit]) -> TurnChoice {
        TurnChoice::Fight
    }
}

/// Drives one encounter between a borrowed player and an owned party.
pub struct BattleEngine<'a> {
    session: Session,
    env: BattleEnv<'a>,
    rolls: RollStream<'a>,
    player: &'a mut Unit,
    party: Party,
    phase: BattlePhase,
    cooldowns: Vec<Cooldowns>,
    effects: Vec<ActiveEffect>,
    queue: VecDeque<EntityId>,
    turn: u32,
    round: u32,
    events: Vec<TurnEvent>,
    rewards: Option<Rewards>,
}

impl<'a> BattleEngine<'a> {
    pub fn new(session: Session, env: BattleEnv<'a>, player: &'a mut Unit) -> Self {
        let rolls = RollStream::new(env.rng(), session.seed);
        Self {
            session,
            env,
            rolls,
            player,
            party: Party::new(),
            phase: BattlePhase::Idle,
            cooldowns: Vec::new(),
            effects: Vec::new(),
            queue: VecDeque::new(),
            turn: 0,
            round: 0,
            events: Vec::new(),
            rewards: None,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn player(&self) -> &Unit {
        &*self.player
    }

    pub fn party(&self) -> &[Unit] {
        &self.party
    }

    /// Number of turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }

    /// Timed modifiers currently in force.
    pub fn active_effects(&self) -> &[ActiveEffect] {
        &self.effects
    }

    pub fn rewards(&self) -> Option<&Rewards> {
        self.rewards.as_ref()
    }

    /// Generates the hostile party for `mode`.
    pub fn build_party(&mut self, mode: EncounterMode) -> Result<&[Unit], BattleError> {
        if self.phase != BattlePhase::Idle {
            return Err(BattleError::phase("build a party", self.phase));
        }
        let generator = EncounterGenerator::new(&self.session.floor, &self.session.config);
        let party = generator.generate(mode, self.env.content(), &mut self.rolls)?;
        self.install_party(party);
        Ok(&self.party)
    }

    /// Uses a ready-made party instead of generating one.
    pub fn set_party(&mut self, party: Party) -> Result<(), BattleError> {
        if self.phase != BattlePhase::Idle {
            return Err(BattleError::phase("set a party", self.phase));
        }
        self.install_party(party);
        Ok(())
    }

    fn install_party(&mut self, party: Party) {
        self.party = party;
        self.player.health_check();
        for hostile in self.party.iter_mut() {
            hostile.health_check();
        }
        self.cooldowns = vec![Cooldowns::default(); self.party.len() + 1];
        self.phase = BattlePhase::PartyBuilt;
        tracing::info!(
            "party ready: {}",
            self.party
                .iter()
                .map(Unit::name)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    /// Plays one turn. Returns the outcome once the battle concludes.
    ///
    /// A failed turn reverts the player's timed modifiers before the error
    /// is returned.
    pub fn step(
        &mut self,
        controller: &mut dyn TurnController,
    ) -> Result<Option<Outcome>, BattleError> {
        match self.phase {
            BattlePhase::PartyBuilt => self.phase = BattlePhase::InProgress,
            BattlePhase::InProgress => {}
            phase => return Err(BattleError::phase("play a turn", phase)),
        }

        self.play_turn(controller).inspect_err(|error| self.abort(error))
    }

    fn play_turn(
        &mut self,
        controller: &mut dyn TurnController,
    ) -> Result<Option<Outcome>, BattleError> {
        if let Some(outcome) = self.decided() {
            self.conclude(outcome)?;
            return Ok(Some(outcome));
        }
        if self.turn >= self.session.config.max_turns {
            return Err(BattleError::TurnLimitExceeded(self.session.config.max_turns));
        }

        let Some(actor) = self.next_actor() else {
            self.conclude(Outcome::Defeat)?;
            return Ok(Some(Outcome::Defeat));
        };
        self.turn += 1;
        let was_alive: Vec<bool> = self.ids().map(|id| self.unit(id).is_alive()).collect();

        if actor.is_player() && controller.choose(&*self.player, &self.party) == TurnChoice::Flee {
            if self.try_flee() {
                self.events.push(TurnEvent::Fled { turn: self.turn });
                self.conclude(Outcome::Fled)?;
                return Ok(Some(Outcome::Fled));
            }
            self.events.push(TurnEvent::FleeFailed { turn: self.turn });
            self.end_turn(actor, None)?;
        } else {
            self.fight(actor)?;
        }

        self.settle(&was_alive)?;

        match self.decided() {
            Some(outcome) => {
                self.conclude(outcome)?;
                Ok(Some(outcome))
            }
            None => Ok(None),
        }
    }

    /// Builds the party and plays turns until the battle concludes.
    pub fn run(
        &mut self,
        mode: EncounterMode,
        controller: &mut dyn TurnController,
    ) -> Result<BattleReport, BattleError> {
        if self.phase == BattlePhase::Idle {
            self.build_party(mode)?;
        }
        loop {
            if let Some(outcome) = self.step(controller)? {
                return Ok(self.report(outcome));
            }
        }
    }

    /// Report of a concluded battle; `None` while it is still running.
    pub fn finished_report(&self) -> Option<BattleReport> {
        match self.phase {
            BattlePhase::Concluded(outcome) => Some(self.report(outcome)),
            _ => None,
        }
    }

    fn report(&self, outcome: Outcome) -> BattleReport {
        BattleReport {
            outcome,
            turns: self.turn,
            rounds: self.round,
            hostiles: self.party.iter().map(|unit| unit.name().to_string()).collect(),
            events: self.events.clone(),
            rewards: self.rewards.clone(),
        }
    }

    fn fight(&mut self, actor: EntityId) -> Result<(), BattleError> {
        let Some(slot) = self.choose_slot(actor) else {
            tracing::debug!("{} has nothing ready and passes", self.unit(actor).name());
            self.events.push(TurnEvent::Passed {
                turn: self.turn,
                actor,
            });
            self.end_turn(actor, None)?;
            return Ok(());
        };

        let Some(action) = self.unit(actor).actions().get(slot).cloned() else {
            self.end_turn(actor, None)?;
            return Ok(());
        };
        tracing::debug!(
            "turn {}: {} uses {} ({})",
            self.turn,
            self.unit(actor).name(),
            action.name(),
            slot
        );
        let outcomes = self.resolve(actor, slot, &action)?;
        self.events.push(TurnEvent::Acted {
            turn: self.turn,
            actor,
            slot,
            action: action.name().to_string(),
            outcomes,
        });
        self.end_turn(actor, Some(slot))?;
        Ok(())
    }

    /// Flee succeeds when the roll clears `danger × 10` percent.
    fn try_flee(&mut self) -> bool {
        let threshold = self
            .session
            .floor
            .danger()
            .saturating_mul(BattleConfig::CHANCE_PER_DANGER)
            .min(100);
        let roll = self.rolls.percent(EntityId::PLAYER.0, RollKind::Flee);
        let escaped = roll >= threshold;
        tracing::debug!("flee roll {} against {}: escaped={}", roll, threshold, escaped);
        escaped
    }

    /// Health-checks everyone, morphs fallen bosses and logs new deaths.
    fn settle(&mut self, was_alive: &[bool]) -> Result<(), BattleError> {
        let ids: Vec<EntityId> = self.ids().collect();
        for (id, alive_before) in ids.into_iter().zip(was_alive.iter().copied()) {
            let unit = self.unit_mut(id);
            unit.health_check();
            if unit.is_alive() {
                continue;
            }

            if unit.forms() > 0 {
                unit.morph()?;
                let forms_left = unit.forms();
                tracing::info!("{} changes form ({} forms left)", unit.name(), forms_left);
                self.drop_effects(id);
                self.events.push(TurnEvent::Morphed {
                    turn: self.turn,
                    unit: id,
                    forms_left,
                });
            } else if alive_before {
                tracing::debug!("{} is defeated", unit.name());
                self.events.push(TurnEvent::Defeated {
                    turn: self.turn,
                    unit: id,
                });
            }
        }
        Ok(())
    }

    /// Outcome if one side is wiped out.
    fn decided(&self) -> Option<Outcome> {
        if !self.player.is_alive() {
            Some(Outcome::Defeat)
        } else if self.party.iter().all(|hostile| !hostile.is_alive()) {
            Some(Outcome::Victory)
        } else {
            None
        }
    }

    fn conclude(&mut self, outcome: Outcome) -> Result<(), BattleError> {
        if outcome == Outcome::Victory {
            let rewards = rewards::award(&mut *self.player, &mut self.party, &self.session.config)?;
            tracing::info!(
                "victory: +{} xp, +{} mastery, {} items looted, {} lost",
                rewards.experience,
                rewards.mastery,
                rewards.looted.len(),
                rewards.lost.len()
            );
            self.rewards = Some(rewards);
        } else {
            self.revert_player_effects()?;
            tracing::info!("battle ended: {} after {} turns", outcome, self.turn);
        }
        self.effects.clear();
        self.queue.clear();
        self.phase = BattlePhase::Concluded(outcome);
        Ok(())
    }

    /// Leaves the player with its own stats.
    fn revert_player_effects(&mut self) -> Result<(), BattleError> {
        let player_effects: Vec<ActiveEffect> = self
            .effects
            .iter()
            .filter(|effect| effect.unit.is_player())
            .copied()
            .collect();
        self.effects.retain(|effect| !effect.unit.is_player());
        for effect in player_effects {
            self.revert(effect)?;
        }
        Ok(())
    }

    /// Cleanup after a fatal error: the player keeps no modifier from this battle.
    fn abort(&mut self, error: &BattleError) {
        tracing::warn!("battle aborted after {} turns: {}", self.turn, error);
        if let Err(revert_error) = self.revert_player_effects() {
            tracing::warn!("could not revert player modifiers: {}", revert_error);
        }
        self.effects.clear();
        self.queue.clear();
    }

    // ------------------------------------------------------------------------
    // Unit access
    // ------------------------------------------------------------------------

    /// Every unit id in insertion order.
    fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        std::iter::once(EntityId::PLAYER).chain((0..self.party.len()).map(EntityId::hostile))
    }

    pub fn unit(&self, id: EntityId) -> &Unit {
        match id.hostile_index() {
            Some(index) => &self.party[index],
            None => &*self.player,
        }
    }

    fn unit_mut(&mut self, id: EntityId) -> &mut Unit {
        match id.hostile_index() {
            Some(index) => &mut self.party[index],
            None => &mut *self.player,
        }
    }

    pub fn cooldowns(&self, id: EntityId) -> &Cooldowns {
        &self.cooldowns[id.0 as usize]
    }

    fn cooldowns_mut(&mut self, id: EntityId) -> &mut Cooldowns {
        &mut self.cooldowns[id.0 as usize]
    }
}
