use serde::{Deserialize, Serialize};

pub use ampere_core::{
    Amount, BattleConfig, CardDef, Content, EffectOp, EffectTarget, HeroDef, MonsterDef,
};

/// Everything needed to start a battle, as loaded from an assets directory.
#[derive(Debug, Clone)]
pub struct GameData {
    pub config: BattleConfig,
    pub content: Content,
    pub hero: HeroDef,
}

/// Summary line per file, used by front-ends to report what was loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadSummary {
    pub cards: usize,
    pub monsters: usize,
    pub hero_cards: usize,
}

impl GameData {
    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            cards: self.content.cards.len(),
            monsters: self.content.monsters.len(),
            hero_cards: self.hero.cards.len(),
        }
    }
}
