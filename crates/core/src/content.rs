use crate::{BattleConfig, CardDef, ContentError, GameCard, PlayerState, RngState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroDef {
    pub name: String,
    pub max_power: i32,
    pub base_damage: i32,
    #[serde(default)]
    pub cards: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonsterDef {
    pub id: String,
    pub name: String,
    pub glyph: char,
    #[serde(default = "default_min_level")]
    pub min_level: u32,
    pub max_power: i32,
    pub base_damage: i32,
    #[serde(default)]
    pub cards: Vec<String>,
}

fn default_min_level() -> u32 {
    1
}

/// Card library plus the combatant roster.
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub cards: Vec<CardDef>,
    pub monsters: Vec<MonsterDef>,
}

impl Content {
    pub fn card(&self, id: &str) -> Result<GameCard, ContentError> {
        self.cards
            .iter()
            .find(|def| def.id == id)
            .map(|def| GameCard::Custom(def.clone()))
            .ok_or_else(|| ContentError::UnknownCard(id.to_string()))
    }

    pub fn resolve_cards(&self, ids: &[String]) -> Result<Vec<GameCard>, ContentError> {
        ids.iter().map(|id| self.card(id)).collect()
    }

    pub fn monster(&self, id: &str) -> Result<&MonsterDef, ContentError> {
        self.monsters
            .iter()
            .find(|monster| monster.id == id)
            .ok_or_else(|| ContentError::UnknownMonster(id.to_string()))
    }

    /// Uniform pick among monsters allowed on `level`.
    pub fn monster_for_level(
        &self,
        level: u32,
        rng: &mut RngState,
    ) -> Result<&MonsterDef, ContentError> {
        let eligible: Vec<&MonsterDef> = self
            .monsters
            .iter()
            .filter(|monster| monster.min_level <= level)
            .collect();
        rng.pick_index(eligible.len())
            .map(|idx| eligible[idx])
            .ok_or(ContentError::NoMonsterForLevel(level))
    }

    pub fn spawn_hero(
        &self,
        hero: &HeroDef,
        config: &BattleConfig,
    ) -> Result<PlayerState, ContentError> {
        let cards = self.resolve_cards(&hero.cards)?;
        Ok(
            PlayerState::with_damage_cap(hero.max_power, hero.base_damage, config.max_base_damage)
                .with_cards(cards),
        )
    }

    pub fn spawn_monster(
        &self,
        monster: &MonsterDef,
        config: &BattleConfig,
    ) -> Result<PlayerState, ContentError> {
        let cards = self.resolve_cards(&monster.cards)?;
        Ok(PlayerState::with_damage_cap(
            monster.max_power,
            monster.base_damage,
            config.max_base_damage,
        )
        .with_cards(cards))
    }
}
