use ampere_core::{
    Battle, BattleConfig, EventBus, GameCard, PassiveCombatant, RngState, Side,
};
use ampere_data::{load_battle_config, load_content, load_game_data};
use std::path::PathBuf;

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

#[test]
fn bundled_assets_load() {
    let data = load_game_data(&assets_root()).expect("load assets");
    assert_eq!(data.config, BattleConfig::default());
    let summary = data.summary();
    assert!(summary.cards >= 4);
    assert!(summary.monsters >= 1);
    assert_eq!(data.hero.max_power, 10);
    assert_eq!(data.hero.base_damage, 1);
}

#[test]
fn rat_matches_classic_stats() {
    let content = load_content(&assets_root()).expect("load content");
    let rat = content.monster("rat").expect("rat");
    assert_eq!(rat.glyph, 'r');
    assert_eq!((rat.max_power, rat.base_damage), (5, 1));

    let mut rng = RngState::from_seed(5);
    for _ in 0..20 {
        let picked = content.monster_for_level(1, &mut rng).expect("monster");
        assert!(picked.min_level <= 1);
    }
}

#[test]
fn hero_spawns_with_resolved_cards() {
    let data = load_game_data(&assets_root()).expect("load assets");
    let hero = data
        .content
        .spawn_hero(&data.hero, &data.config)
        .expect("spawn hero");
    assert_eq!(hero.cards().len(), data.hero.cards.len());
    assert!(hero
        .cards()
        .iter()
        .all(|card| matches!(card, GameCard::Custom(_))));
}

#[test]
fn missing_battle_file_falls_back_to_defaults() {
    let dir = assets_root().join("does-not-exist");
    let config = load_battle_config(&dir).expect("defaults");
    assert_eq!(config, BattleConfig::default());
}

#[test]
fn hero_fights_a_rat_to_the_end() {
    let data = load_game_data(&assets_root()).expect("load assets");
    let rat = data.content.monster("rat").expect("rat");
    let hero = data.content.spawn_hero(&data.hero, &data.config).unwrap();
    let monster = data.content.spawn_monster(rat, &data.config).unwrap();
    let mut battle = Battle::new(hero, monster, data.config.clone(), RngState::from_seed(3));
    let mut events = EventBus::default();
    battle
        .execute(&mut PassiveCombatant, &mut PassiveCombatant, &mut events)
        .expect("battle");
    assert!(battle.is_resolved());
    assert_eq!(battle.fighter(Side::Player).deck().rotation().count(), 4);
}
