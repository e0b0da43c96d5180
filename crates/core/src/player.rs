use crate::{GameCard, Stat};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_BASE_DAMAGE: i32 = 20;

/// Persistent combatant state. Survives across battles; the per-round
/// accumulator and battle deck do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    power_level: Stat,
    base_damage: Stat,
    #[serde(default)]
    cards: Vec<GameCard>,
}

impl PlayerState {
    pub fn new(max_power_level: i32, base_damage: i32) -> Self {
        Self::with_damage_cap(max_power_level, base_damage, DEFAULT_MAX_BASE_DAMAGE)
    }

    pub fn with_damage_cap(max_power_level: i32, base_damage: i32, damage_cap: i32) -> Self {
        Self {
            power_level: Stat::full(max_power_level),
            base_damage: Stat::new(damage_cap, base_damage),
            cards: Vec::new(),
        }
    }

    pub fn power_level(&self) -> Stat {
        self.power_level
    }

    pub fn base_damage(&self) -> Stat {
        self.base_damage
    }

    pub fn is_dead(&self) -> bool {
        self.power_level.is_empty()
    }

    pub fn modify_power_level(&mut self, amount: i32) {
        self.power_level = self.power_level.modify(amount);
    }

    /// Permanent card inventory, shuffled into a fresh battle deck each battle.
    pub fn cards(&self) -> &[GameCard] {
        &self.cards
    }

    pub fn with_cards(mut self, cards: impl IntoIterator<Item = GameCard>) -> Self {
        self.cards.extend(cards);
        self
    }
}
