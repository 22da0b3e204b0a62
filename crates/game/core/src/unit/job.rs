//! Jobs: vocations an explorer masters over time.

use crate::config::BattleConfig;
use crate::progression::{Progression, ProgressionError, Rank};
use crate::stats::StatKind;

/// A vocation with a capped mastery rank and a stat development table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    name: String,
    rank: Rank,
    dev_table: [f32; StatKind::COUNT],
}

impl Job {
    pub fn new(name: impl Into<String>, dev_table: [f32; StatKind::COUNT]) -> Self {
        Self {
            name: name.into(),
            rank: Rank::new(1, BattleConfig::MAX_JOB_RANK),
            dev_table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> &Rank {
        &self.rank
    }

    /// Growth factor of `stat` for this job.
    pub fn development(&self, stat: StatKind) -> f32 {
        self.dev_table[stat.as_index()]
    }

    /// Applies mastery points to the job rank.
    pub fn train(&mut self, mastery: i32) -> Result<bool, ProgressionError> {
        self.rank.earn(mastery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_follows_stat_order() {
        let job = Job::new("Thief", [0.9, 1.0, 0.8, 0.5, 0.7, 1.5, 1.3]);
        assert_eq!(job.development(StatKind::Hp), 0.9);
        assert_eq!(job.development(StatKind::Spd), 1.5);
        assert_eq!(job.development(StatKind::Luck), 1.3);
    }

    #[test]
    fn training_raises_the_rank() {
        let mut job = Job::new("Thief", [1.0; StatKind::COUNT]);
        assert_eq!(job.train(250), Ok(true));
        assert_eq!(job.rank().value(), 51);
        assert_eq!(job.train(-1), Err(ProgressionError::Argument(-1)));
    }
}
