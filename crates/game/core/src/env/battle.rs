//! Oracle bundle handed to the battle engine.

use super::{ContentOracle, RngOracle};

/// Content and randomness for one encounter.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    content: &'a dyn ContentOracle,
    rng: &'a dyn RngOracle,
}

impl<'a> BattleEnv<'a> {
    pub fn new(content: &'a dyn ContentOracle, rng: &'a dyn RngOracle) -> Self {
        Self { content, rng }
    }

    pub fn content(&self) -> &'a dyn ContentOracle {
        self.content
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl std::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleEnv").finish_non_exhaustive()
    }
}
