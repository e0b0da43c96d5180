mod console;

use ampere_core::{
    Battle, BattleOutcome, Combatant, Event, EventBus, PassiveCombatant, RngState, RoundResult,
    Side,
};
use ampere_data::load_game_data;
use anyhow::Context;
use console::ConsoleCombatant;
use std::io;
use std::path::PathBuf;

const DEFAULT_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    auto: bool,
    seed: u64,
    assets: PathBuf,
    monster: Option<String>,
    level: u32,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut auto = false;
    let mut seed = DEFAULT_SEED;
    let mut assets = PathBuf::from("assets");
    let mut monster = None;
    let mut level = 1u32;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => auto = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().unwrap_or(seed);
                    idx += 1;
                }
            }
            "--assets" => {
                if let Some(value) = args.get(idx + 1) {
                    assets = PathBuf::from(value);
                    idx += 1;
                }
            }
            "--monster" => {
                if let Some(value) = args.get(idx + 1) {
                    monster = Some(value.clone());
                    idx += 1;
                }
            }
            "--level" => {
                if let Some(value) = args.get(idx + 1) {
                    level = value.parse::<u32>().unwrap_or(level);
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    CliOptions {
        auto,
        seed,
        assets,
        monster,
        level,
    }
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Player => "you",
        Side::Opponent => "monster",
    }
}

fn format_event(event: &Event) -> String {
    match event {
        Event::RoundStarted { round } => format!("== round {round} =="),
        Event::HandsDealt { remaining } => format!("hands dealt, {remaining} cards left in deck"),
        Event::BetPlaced { side, cards } if cards.is_empty() => {
            format!("{} passed", side_label(*side))
        }
        Event::BetPlaced { side, cards } => {
            format!("{} bet: {}", side_label(*side), cards.join(", "))
        }
        Event::KeepsConfigured { side, kept } => {
            format!("{} kept {kept} card(s)", side_label(*side))
        }
        Event::Showdown {
            player,
            opponent,
            result,
        } => {
            let verdict = match result {
                RoundResult::Won(side) => format!("{} won the pot", side_label(*side)),
                RoundResult::Tie => "tie, the pot is lost".to_string(),
            };
            format!(
                "showdown: {} vs {}, {verdict}",
                player.name(),
                opponent.name()
            )
        }
        Event::EffectsApplied {
            side,
            damage,
            blocked,
            healed,
            power,
        } => format!(
            "{}: damage {damage} blocked {blocked} healed {healed}, power {power}",
            side_label(*side)
        ),
        Event::Fled { side } => format!("{} fled", side_label(*side)),
        Event::Defeated { side } => format!("{} defeated", side_label(*side)),
        Event::BattleEnded { outcome, rounds } => {
            let summary = match outcome {
                BattleOutcome::Fled(side) => format!("{} escaped", side_label(*side)),
                BattleOutcome::Defeated(Side::Opponent) => "victory".to_string(),
                BattleOutcome::Defeated(Side::Player) => "defeat".to_string(),
                BattleOutcome::MutualDefeat => "both fell".to_string(),
            };
            format!("battle over after {rounds} round(s): {summary}")
        }
    }
}

fn print_events(events: &mut EventBus) {
    for event in events.drain() {
        println!("{}", format_event(&event));
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    tracing::info!(seed = options.seed, assets = %options.assets.display(), "starting");

    let data = load_game_data(&options.assets)?;
    let summary = data.summary();
    tracing::info!(
        cards = summary.cards,
        monsters = summary.monsters,
        hero_cards = summary.hero_cards,
        "content loaded"
    );

    let mut rng = RngState::from_seed(options.seed);
    let monster = match options.monster.as_deref() {
        Some(id) => data.content.monster(id)?,
        None => data.content.monster_for_level(options.level, &mut rng)?,
    };
    let hero = data
        .content
        .spawn_hero(&data.hero, &data.config)
        .context("spawn hero")?;
    let foe = data
        .content
        .spawn_monster(monster, &data.config)
        .with_context(|| format!("spawn monster {}", monster.id))?;
    println!(
        "{} ({}/{}) meets {} '{}' ({}/{})",
        data.hero.name,
        hero.power_level().value(),
        hero.base_damage().value(),
        monster.name,
        monster.glyph,
        foe.power_level().value(),
        foe.base_damage().value()
    );

    let mut battle = Battle::new(hero, foe, data.config.clone(), rng);
    let mut events = EventBus::default();
    let stdin = io::stdin();
    let mut console = ConsoleCombatant::new(stdin.lock(), io::stdout());
    let mut passive = PassiveCombatant;
    let player: &mut dyn Combatant = if options.auto {
        &mut passive
    } else {
        &mut console
    };
    let mut monster_ai = PassiveCombatant;

    while battle.outcome().is_none() {
        battle.play_round(player, &mut monster_ai, &mut events)?;
        print_events(&mut events);
    }
    if let Some(outcome) = battle.outcome() {
        println!(
            "{}",
            format_event(&Event::BattleEnded {
                outcome,
                rounds: battle.rounds(),
            })
        );
    }
    Ok(())
}
