use serde::{Deserialize, Serialize};

/// Bounded resource value, always within `0..=max`.
///
/// Stats are values: every change produces a new `Stat` through [`Stat::modify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    max: i32,
    value: i32,
}

impl Stat {
    /// Builds a stat, clamping `value` into range. A negative `max` is treated as zero.
    pub fn new(max: i32, value: i32) -> Self {
        let max = max.max(0);
        Self {
            max,
            value: value.clamp(0, max),
        }
    }

    pub fn full(max: i32) -> Self {
        Self::new(max, max)
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    pub fn modify(&self, delta: i32) -> Self {
        Self::new(self.max, self.value.saturating_add(delta))
    }
}
