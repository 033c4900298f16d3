//! Per-fighter battle state.

use serde::{Deserialize, Serialize};

use crate::core::{BattleConfig, FighterId};
use crate::plan::ResourcePool;

/// A fighter's mutable state during a battle.
///
/// Health is kept in half-heart units so blocked hits accumulate exactly.
/// The integer heart count only drops once cumulative damage crosses a
/// whole-heart boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    id: FighterId,
    half_hearts: u16,
    resources: ResourcePool,
    skip_next: bool,
    pressure: u32,
}

impl Fighter {
    /// A fresh fighter with full hearts and resources.
    #[must_use]
    pub fn new(id: FighterId, config: &BattleConfig) -> Self {
        Self {
            id,
            half_hearts: config.starting_half_hearts(),
            resources: ResourcePool::new(&config.limits),
            skip_next: false,
            pressure: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> FighterId {
        self.id
    }

    /// Whole hearts left, counting a half heart as still standing.
    #[must_use]
    pub fn hearts(&self) -> u8 {
        u8::try_from(self.half_hearts.div_ceil(2)).unwrap_or(u8::MAX)
    }

    /// Remaining health in half hearts.
    #[must_use]
    pub fn half_hearts(&self) -> u16 {
        self.half_hearts
    }

    #[must_use]
    pub fn is_down(&self) -> bool {
        self.half_hearts == 0
    }

    #[must_use]
    pub fn resources(&self) -> &ResourcePool {
        &self.resources
    }

    pub(crate) fn resources_mut(&mut self) -> &mut ResourcePool {
        &mut self.resources
    }

    /// Will the next turn be skipped?
    #[must_use]
    pub fn skip_next(&self) -> bool {
        self.skip_next
    }

    #[must_use]
    pub fn pressure(&self) -> u32 {
        self.pressure
    }

    /// Lose health, flooring at zero. Returns the half hearts actually lost.
    pub(crate) fn take_damage(&mut self, half_hearts: u16) -> u16 {
        let before = self.half_hearts;
        self.half_hearts = before.saturating_sub(half_hearts);
        before - self.half_hearts
    }

    pub(crate) fn set_skip_next(&mut self) {
        self.skip_next = true;
    }

    /// Clear the skip flag, returning whether it was set.
    pub(crate) fn take_skip(&mut self) -> bool {
        std::mem::take(&mut self.skip_next)
    }

    pub(crate) fn set_pressure(&mut self, pressure: u32) {
        self.pressure = pressure;
    }
}
