use crate::BattleCard;
use serde::{Deserialize, Serialize};

/// Cards wagered by both sides in one round, in the order they went in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pot {
    items: Vec<BattleCard>,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, bet: impl IntoIterator<Item = BattleCard>) {
        self.items.extend(bet);
    }

    pub fn items(&self) -> &[BattleCard] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
