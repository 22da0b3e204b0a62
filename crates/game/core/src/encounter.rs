//! Encounter generation: assembling the hostile party for one battle.
//!
//! # Monster parties
//!
//! ```text
//! size   = U[1, MAX_PARTY]
//! size  += 1 with probability danger × 10%   (only while size < MAX_PARTY)
//! repeat until size hostiles are drawn:
//!     candidate = U[0, roster)
//!     accept with probability chance[candidate]
//!     herd      = U[0, remaining]; spawn herd independent copies
//! ```
//!
//! The draw loop is bounded by [`BattleConfig::max_draw_attempts`].

use arrayvec::ArrayVec;

use crate::config::{BattleConfig, FloorConfig};
use crate::env::{ContentOracle, OracleError, RollKind, RollStream};
use crate::error::{ErrorSeverity, GameError};
use crate::unit::{EntityId, Unit};

/// The opposing side of an encounter.
pub type Party = ArrayVec<Unit, { BattleConfig::MAX_PARTY }>;

const GENERATOR_ROLLER: u32 = EntityId::SYSTEM.0;

/// Kind of battle to generate.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EncounterMode {
    /// A random party of regular monsters.
    #[default]
    Monster,
    /// The floor boss, alone.
    Boss,
}

/// Errors raised while generating a party.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    /// A required input was not configured.
    #[error("{0} may not be null")]
    NullArgument(&'static str),

    /// The accept/draw loop hit its attempt cap.
    #[error("party draw gave up after {attempts} attempts ({drawn} of {target} hostiles drawn)")]
    DrawExhausted {
        attempts: u32,
        drawn: usize,
        target: usize,
    },

    /// Loading a hostile failed; party construction is aborted.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NullArgument(_) => ErrorSeverity::Validation,
            Self::DrawExhausted { .. } => ErrorSeverity::Internal,
            Self::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NullArgument(_) => "ENCOUNTER_NULL_ARGUMENT",
            Self::DrawExhausted { .. } => "ENCOUNTER_DRAW_EXHAUSTED",
            Self::Oracle(error) => error.error_code(),
        }
    }
}

/// Builds hostile parties for one floor.
pub struct EncounterGenerator<'a> {
    floor: &'a FloorConfig,
    config: &'a BattleConfig,
}

impl<'a> EncounterGenerator<'a> {
    pub fn new(floor: &'a FloorConfig, config: &'a BattleConfig) -> Self {
        Self { floor, config }
    }

    /// Generates the party for `mode`.
    pub fn generate(
        &self,
        mode: EncounterMode,
        content: &dyn ContentOracle,
        rolls: &mut RollStream<'_>,
    ) -> Result<Party, EncounterError> {
        match mode {
            EncounterMode::Boss => self.boss_party(content),
            EncounterMode::Monster => self.monster_party(content, rolls),
        }
    }

    fn boss_party(&self, content: &dyn ContentOracle) -> Result<Party, EncounterError> {
        let boss = self
            .floor
            .boss
            .as_deref()
            .ok_or(EncounterError::NullArgument("boss"))?;

        let mut party = Party::new();
        party.push(content.load_hostile(boss)?);
        tracing::debug!("boss party built: {}", boss);
        Ok(party)
    }

    fn monster_party(
        &self,
        content: &dyn ContentOracle,
        rolls: &mut RollStream<'_>,
    ) -> Result<Party, EncounterError> {
        let hostiles = self
            .floor
            .hostiles
            .as_deref()
            .ok_or(EncounterError::NullArgument("hostiles"))?;
        let chances = self
            .floor
            .chances
            .as_deref()
            .ok_or(EncounterError::NullArgument("chances"))?;
        // every candidate needs a chance, and there must be a candidate
        if hostiles.len() != chances.len() {
            return Err(EncounterError::NullArgument("chances"));
        }
        if hostiles.is_empty() {
            return Err(EncounterError::NullArgument("hostiles"));
        }

        let target = self.party_size(rolls);
        let mut party = Party::new();
        let mut remaining = target;
        let mut attempts = 0;

        while remaining > 0 {
            if attempts >= self.config.max_draw_attempts {
                return Err(EncounterError::DrawExhausted {
                    attempts,
                    drawn: party.len(),
                    target,
                });
            }
            attempts += 1;

            let index = rolls.index(GENERATOR_ROLLER, RollKind::Candidate, hostiles.len());
            if !rolls.chance(GENERATOR_ROLLER, RollKind::Acceptance, chances[index]) {
                continue;
            }

            let herd = rolls.range(GENERATOR_ROLLER, RollKind::Herd, 0, remaining as u32) as usize;
            for _ in 0..herd {
                party.push(content.load_hostile(&hostiles[index])?);
            }
            if herd > 0 {
                tracing::debug!("drew a herd of {} {}", herd, hostiles[index]);
            }
            remaining -= herd;
        }

        tracing::debug!(
            "monster party of {} built in {} draw attempts",
            party.len(),
            attempts
        );
        Ok(party)
    }

    /// Target party size, including the danger bonus.
    fn party_size(&self, rolls: &mut RollStream<'_>) -> usize {
        let max = BattleConfig::MAX_PARTY as u32;
        let mut size = rolls.range(GENERATOR_ROLLER, RollKind::PartySize, 1, max);
        if size < max {
            let bonus_chance = self
                .floor
                .danger()
                .saturating_mul(BattleConfig::CHANCE_PER_DANGER);
            if rolls.chance(GENERATOR_ROLLER, RollKind::DangerBonus, bonus_chance) {
                size += 1;
            }
        }
        size as usize
    }
}
