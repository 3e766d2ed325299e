//! Current/max pools (hit points, mana, spell slots)

use serde::{Deserialize, Serialize};

/// A `{current, max}` pair as stored on the character sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    #[serde(default)]
    pub current: i32,
    #[serde(default)]
    pub max: i32,
}

impl ResourcePool {
    pub fn new(current: i32, max: i32) -> Self {
        Self { current, max }
    }

    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Moves `current` by `delta`, clamped to `0..=max`.
    pub fn adjust_current(&mut self, delta: i32) {
        let upper = self.max.max(0);
        self.current = self.current.saturating_add(delta).clamp(0, upper);
    }
}
