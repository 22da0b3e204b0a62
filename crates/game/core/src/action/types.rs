//! Core action types.
//!
//! An [`Action`] is an immutable descriptor shared by every variant: name,
//! elemental tag, category, target shape, multiplier, accuracy, cooldown,
//! duration and description. The variant-specific part lives in
//! [`ActionKind`]. Cloning an action is a plain value copy.

use arrayvec::ArrayVec;

use super::ActionError;
use crate::element::Element;
use crate::stats::StatKind;

/// Ordered list of stats touched by a buff or debuff.
pub type StatList = ArrayVec<StatKind, { StatKind::COUNT }>;

// ============================================================================
// Category / Target
// ============================================================================

/// Selects the stat pair used by an action: ATK/DEF or MAGI/RES.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    #[default]
    Physical,
    Special,
}

/// Which side/subset of the battle an action affects.
///
/// String forms are the content codes (`self`, `ally`, `allx`, `oppt`, `oppx`).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Target {
    /// The acting unit only.
    #[strum(serialize = "self")]
    SelfOnly,
    /// The acting unit's side.
    #[strum(serialize = "ally")]
    Ally,
    /// Every unit on the acting side, actor included.
    #[strum(serialize = "allx")]
    AllAllies,
    /// One opposing unit.
    #[default]
    #[strum(serialize = "oppt")]
    Opponent,
    /// Every opposing unit.
    #[strum(serialize = "oppx")]
    AllOpponents,
}

impl Target {
    /// True if the action lands on the acting side.
    pub const fn is_friendly(self) -> bool {
        matches!(self, Target::SelfOnly | Target::Ally | Target::AllAllies)
    }
}

// ============================================================================
// Action
// ============================================================================

/// Variant-specific payload of an action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Deals damage.
    Damage,
    /// Raises the current value of the listed stats.
    Buff(StatList),
    /// Lowers the current value of the listed stats.
    Debuff(StatList),
}

impl ActionKind {
    /// Stats modified by a buff or debuff; empty for damage.
    pub fn stats(&self) -> &[StatKind] {
        match self {
            ActionKind::Damage => &[],
            ActionKind::Buff(stats) | ActionKind::Debuff(stats) => stats,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Damage => "damage",
            ActionKind::Buff(_) => "buff",
            ActionKind::Debuff(_) => "debuff",
        }
    }
}

/// Immutable move descriptor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    name: String,
    element: Option<Element>,
    category: Category,
    target: Target,
    multiplier: f32,
    accuracy: u32,
    cooldown: u32,
    duration: u32,
    description: String,
    kind: ActionKind,
}

impl Action {
    pub const MAX_ACCURACY: u32 = 100;

    /// Starts building an action of the given kind.
    pub fn builder(name: impl Into<String>, kind: ActionKind) -> ActionBuilder {
        ActionBuilder::new(name.into(), kind)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Option<Element> {
        self.element
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn accuracy(&self) -> u32 {
        self.accuracy
    }

    /// Turns the action stays unusable after being used.
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    /// Turns a buff/debuff stays in effect.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }
}

/// Builder for [`Action`], validating the descriptor on [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct ActionBuilder {
    action: Action,
}

impl ActionBuilder {
    fn new(name: String, kind: ActionKind) -> Self {
        Self {
            action: Action {
                name,
                element: None,
                category: Category::Physical,
                target: Target::Opponent,
                multiplier: 1.0,
                accuracy: Action::MAX_ACCURACY,
                cooldown: 0,
                duration: 0,
                description: String::new(),
                kind,
            },
        }
    }

    pub fn element(mut self, element: Option<Element>) -> Self {
        self.action.element = element;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.action.category = category;
        self
    }

    pub fn target(mut self, target: Target) -> Self {
        self.action.target = target;
        self
    }

    pub fn multiplier(mut self, multiplier: f32) -> Self {
        self.action.multiplier = multiplier;
        self
    }

    pub fn accuracy(mut self, accuracy: u32) -> Self {
        self.action.accuracy = accuracy;
        self
    }

    pub fn cooldown(mut self, cooldown: u32) -> Self {
        self.action.cooldown = cooldown;
        self
    }

    pub fn duration(mut self, duration: u32) -> Self {
        self.action.duration = duration;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.action.description = description.into();
        self
    }

    pub fn build(self) -> Result<Action, ActionError> {
        let action = self.action;
        if action.accuracy > Action::MAX_ACCURACY {
            return Err(ActionError::InvalidAccuracy {
                action: action.name,
                accuracy: action.accuracy,
            });
        }
        if !action.multiplier.is_finite() || action.multiplier < 0.0 {
            return Err(ActionError::InvalidMultiplier {
                action: action.name,
                multiplier: action.multiplier,
            });
        }
        if let ActionKind::Buff(stats) | ActionKind::Debuff(stats) = &action.kind {
            if stats.is_empty() {
                return Err(ActionError::EmptyStatList {
                    action: action.name,
                });
            }
            for (index, stat) in stats.iter().enumerate() {
                if stats[..index].contains(stat) {
                    return Err(ActionError::DuplicateStat {
                        action: action.name.clone(),
                        stat: *stat,
                    });
                }
            }
        }
        Ok(action)
    }
}
