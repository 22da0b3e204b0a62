//! Record formats of the RON content files.
//!
//! Records mirror what authors write; converting one into a core model
//! validates every discriminator and code along the way.

use battle_core::{
    Action, ActionError, ActionKind, Category, ContentOracle, Element, Item, OracleError,
    RecordKind, Slot, StatKind, StatList, Target, Unit,
};
use serde::{Deserialize, Serialize};

fn no_element() -> i32 {
    -1
}

fn unit_multiplier() -> f32 {
    1.0
}

fn full_accuracy() -> u32 {
    Action::MAX_ACCURACY
}

fn first_level() -> i32 {
    1
}

fn physical() -> String {
    "physical".to_string()
}

/// Parses an element code (`-1` for none, `0..=3` for Air, Earth, Water, Fire).
pub(crate) fn parse_element(code: i32) -> Result<Option<Element>, OracleError> {
    Element::from_code(code).map_err(|code| OracleError::undefined_key("element", code))
}

/// Parses stat names into an ordered list.
pub(crate) fn parse_stats(
    kind: RecordKind,
    owner: &str,
    names: &[String],
) -> Result<StatList, OracleError> {
    let mut stats = StatList::new();
    for name in names {
        let stat = StatKind::parse(name).map_err(|_| OracleError::undefined_key("stat", name))?;
        if stats.contains(&stat) {
            let duplicate = ActionError::DuplicateStat {
                action: owner.to_string(),
                stat,
            };
            return Err(OracleError::invalid(kind, owner, duplicate));
        }
        stats
            .try_push(stat)
            .map_err(|_| OracleError::invalid(kind, owner, "lists more stats than exist"))?;
    }
    Ok(stats)
}

/// Action file: `actions/{name}.ron`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    pub name: String,
    /// `damage`, `buff` or `debuff` (`agress` and `nerf` are accepted too).
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default = "no_element", alias = "attribute")]
    pub element: i32,
    #[serde(default = "physical")]
    pub category: String,
    /// `self`, `ally`, `allx`, `oppt` or `oppx`.
    pub target: String,
    #[serde(default = "unit_multiplier")]
    pub multiplier: f32,
    #[serde(default = "full_accuracy")]
    pub accuracy: u32,
    #[serde(default)]
    pub cooldown: u32,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stats: Vec<String>,
}

impl ActionRecord {
    pub fn into_action(self) -> Result<Action, OracleError> {
        let kind = match self.kind.to_ascii_lowercase().as_str() {
            "damage" | "agress" => ActionKind::Damage,
            "buff" => ActionKind::Buff(parse_stats(RecordKind::Action, &self.name, &self.stats)?),
            "debuff" | "nerf" => {
                ActionKind::Debuff(parse_stats(RecordKind::Action, &self.name, &self.stats)?)
            }
            _ => return Err(OracleError::undefined_key("action kind", &self.kind)),
        };
        let category: Category = self
            .category
            .parse()
            .map_err(|_| OracleError::undefined_key("category", &self.category))?;
        let target: Target = self
            .target
            .parse()
            .map_err(|_| OracleError::undefined_key("target", &self.target))?;

        Action::builder(self.name.clone(), kind)
            .element(parse_element(self.element)?)
            .category(category)
            .target(target)
            .multiplier(self.multiplier)
            .accuracy(self.accuracy)
            .cooldown(self.cooldown)
            .duration(self.duration)
            .description(self.description)
            .build()
            .map_err(|error| OracleError::invalid(RecordKind::Action, self.name, error))
    }
}

/// Item file: `items/{name}.ron`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: u32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.description, record.price)
    }
}

/// Action names equipped in each slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotNames {
    #[serde(default)]
    pub basic: Option<String>,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub critical: Option<String>,
}

impl SlotNames {
    /// Loads and equips every named action on `unit`.
    pub fn equip(
        &self,
        unit: &mut Unit,
        kind: RecordKind,
        content: &dyn ContentOracle,
    ) -> Result<(), OracleError> {
        let named = [
            (Slot::Basic, &self.basic),
            (Slot::Skill, &self.skill),
            (Slot::Critical, &self.critical),
        ];
        for (slot, name) in named {
            if let Some(name) = name {
                let action = content.load_action(name)?;
                let owner = unit.name().to_string();
                unit.actions_mut()
                    .set(slot, Some(&action))
                    .map_err(|error| OracleError::invalid(kind, owner, error))?;
            }
        }
        Ok(())
    }
}

/// Hostile file: `hostiles/{name}.ron`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileRecord {
    pub name: String,
    /// `monster` or `boss`.
    pub kind: String,
    #[serde(default = "no_element", alias = "attribute")]
    pub element: i32,
    #[serde(default = "first_level")]
    pub level: i32,
    pub stats: Vec<i32>,
    /// Item names dropped on defeat.
    #[serde(default)]
    pub loot: Vec<String>,
    #[serde(default)]
    pub actions: SlotNames,
    /// Boss only: remaining forms.
    #[serde(default)]
    pub forms: u32,
    /// Boss only: stats that grow on every form change.
    #[serde(default)]
    pub enhance: Vec<String>,
}

impl HostileRecord {
    /// Builds the unit, resolving loot and actions through `content`.
    pub fn into_unit(self, content: &dyn ContentOracle) -> Result<Unit, OracleError> {
        let element = parse_element(self.element)?;
        let loot = self
            .loot
            .iter()
            .map(|item| content.load_item(item))
            .collect::<Result<Vec<_>, _>>()?;

        let invalid = |error| OracleError::invalid(RecordKind::Hostile, &self.name, error);
        let unit = match self.kind.to_ascii_lowercase().as_str() {
            "monster" => Unit::monster(&self.name, self.level, &self.stats, loot),
            "boss" => {
                let enhance = parse_stats(RecordKind::Hostile, &self.name, &self.enhance)?;
                Unit::boss(&self.name, self.level, &self.stats, loot, self.forms, enhance)
            }
            _ => return Err(OracleError::undefined_key("hostile kind", &self.kind)),
        };
        let mut unit = unit.map_err(invalid)?.with_element(element);

        self.actions.equip(&mut unit, RecordKind::Hostile, content)?;
        Ok(unit)
    }
}
