/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Upper bound on accept/draw iterations while assembling a monster party.
    /// Exhausting it surfaces as an internal encounter error.
    pub max_draw_attempts: u32,
    /// Upper bound on unit turns in one encounter.
    pub max_turns: u32,
    /// Buff/debuff strength as a percentage of the affected stat's maximum,
    /// scaled by the action multiplier.
    pub buff_ratio_percent: u32,
    /// Experience granted per level of each defeated hostile.
    pub xp_per_level: i32,
    /// Job mastery granted per defeated hostile.
    pub mastery_per_kill: i32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of hostiles fighting at the same time.
    pub const MAX_PARTY: usize = 5;
    /// Chance (percent) per danger level of spawning one extra hostile.
    pub const CHANCE_PER_DANGER: u32 = 10;
    /// Number of stats every unit carries.
    pub const STAT_COUNT: usize = 7;
    /// Capacity of an explorer's bag.
    pub const BAG_SIZE: usize = 50;
    /// Highest job rank.
    pub const MAX_JOB_RANK: i32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_DRAW_ATTEMPTS: u32 = 1_000;
    pub const DEFAULT_MAX_TURNS: u32 = 500;
    pub const DEFAULT_BUFF_RATIO_PERCENT: u32 = 25;
    pub const DEFAULT_XP_PER_LEVEL: i32 = 10;
    pub const DEFAULT_MASTERY_PER_KILL: i32 = 5;

    pub fn new() -> Self {
        Self {
            max_draw_attempts: Self::DEFAULT_MAX_DRAW_ATTEMPTS,
            max_turns: Self::DEFAULT_MAX_TURNS,
            buff_ratio_percent: Self::DEFAULT_BUFF_RATIO_PERCENT,
            xp_per_level: Self::DEFAULT_XP_PER_LEVEL,
            mastery_per_kill: Self::DEFAULT_MASTERY_PER_KILL,
        }
    }

    pub fn with_max_draw_attempts(mut self, max_draw_attempts: u32) -> Self {
        self.max_draw_attempts = max_draw_attempts;
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Floor setup consumed by the encounter generator.
///
/// Replaces process-wide engine settings: every encounter receives the floor it
/// is fought on explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorConfig {
    /// How dangerous the floor is. Raises party size and lowers flee odds.
    pub danger_level: u32,
    /// Identifiers of the regular hostiles that can spawn.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hostiles: Option<Vec<String>>,
    /// Encounter chance (0-100) of each entry of `hostiles`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub chances: Option<Vec<u32>>,
    /// The floor's boss, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub boss: Option<String>,
}

impl FloorConfig {
    pub fn new(danger_level: u32) -> Self {
        Self {
            danger_level: danger_level.max(1),
            hostiles: None,
            chances: None,
            boss: None,
        }
    }

    pub fn with_roster(mut self, hostiles: Vec<String>, chances: Vec<u32>) -> Self {
        self.hostiles = Some(hostiles);
        self.chances = Some(chances);
        self
    }

    pub fn with_boss(mut self, boss: impl Into<String>) -> Self {
        self.boss = Some(boss.into());
        self
    }

    /// Danger level, never below 1.
    pub fn danger(&self) -> u32 {
        self.danger_level.max(1)
    }
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
