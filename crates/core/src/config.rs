use crate::DEFAULT_MAX_BASE_DAMAGE;
use serde::{Deserialize, Serialize};

/// Tunables for the betting protocol. Defaults reproduce the standard
/// ante, bet, draw, bet, showdown sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BattleConfig {
    /// Cards held from each combatant's battle deck.
    pub battle_hand_size: usize,
    /// Player's first bet.
    pub opening_bet: usize,
    /// Opponent's reply to the opening bet.
    pub response_bet: usize,
    /// Player's extra bet when the opponent raised with more than one card.
    pub counter_bet: usize,
    /// Player's bet after the draw.
    pub final_bet: usize,
    /// Opponent's reply when the player bet after the draw.
    pub final_response_bet: usize,
    pub max_base_damage: i32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            battle_hand_size: 5,
            opening_bet: 1,
            response_bet: 2,
            counter_bet: 1,
            final_bet: 1,
            final_response_bet: 1,
            max_base_damage: DEFAULT_MAX_BASE_DAMAGE,
        }
    }
}
