use crate::schema::{BattleConfig, CardDef, Content, GameData, HeroDef, MonsterDef};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BATTLE_FILE: &str = "battle.json";
const CARDS_FILE: &str = "cards.json";
const MONSTERS_FILE: &str = "monsters.json";
const HERO_FILE: &str = "hero.json";

/// Reads `battle.json`, falling back to defaults when the file is absent.
pub fn load_battle_config(dir: &Path) -> anyhow::Result<BattleConfig> {
    let path = dir.join(BATTLE_FILE);
    if !path.exists() {
        return Ok(BattleConfig::default());
    }
    let config: BattleConfig = load_json(&path)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn load_content(dir: &Path) -> anyhow::Result<Content> {
    let cards: Vec<CardDef> = load_json(&dir.join(CARDS_FILE))?;
    let monsters: Vec<MonsterDef> = load_json(&dir.join(MONSTERS_FILE))?;
    let content = Content { cards, monsters };
    validate_content(&content)?;
    Ok(content)
}

pub fn load_hero(dir: &Path, content: &Content) -> anyhow::Result<HeroDef> {
    let hero: HeroDef = load_json(&dir.join(HERO_FILE))?;
    validate_card_refs(content, &hero.cards).with_context(|| format!("hero {}", hero.name))?;
    Ok(hero)
}

pub fn load_game_data(dir: &Path) -> anyhow::Result<GameData> {
    let config = load_battle_config(dir)?;
    let content = load_content(dir)?;
    let hero = load_hero(dir, &content)?;
    Ok(GameData {
        config,
        content,
        hero,
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

fn validate_config(config: &BattleConfig) -> anyhow::Result<()> {
    if config.battle_hand_size == 0 {
        bail!("battle_hand_size must be at least 1");
    }
    if config.max_base_damage < 0 {
        bail!("max_base_damage must not be negative");
    }
    Ok(())
}

fn validate_content(content: &Content) -> anyhow::Result<()> {
    let mut card_ids = HashSet::new();
    for card in &content.cards {
        if !card_ids.insert(card.id.as_str()) {
            bail!("duplicate card id {}", card.id);
        }
    }
    let mut monster_ids = HashSet::new();
    for monster in &content.monsters {
        if !monster_ids.insert(monster.id.as_str()) {
            bail!("duplicate monster id {}", monster.id);
        }
        if monster.max_power <= 0 {
            bail!("monster {} has no power", monster.id);
        }
        validate_card_refs(content, &monster.cards)
            .with_context(|| format!("monster {}", monster.id))?;
    }
    Ok(())
}

fn validate_card_refs(content: &Content, ids: &[String]) -> anyhow::Result<()> {
    for id in ids {
        content.card(id)?;
    }
    Ok(())
}
