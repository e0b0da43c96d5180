use crate::{BattleOutcome, HandKind, RoundResult, Side};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted { round: u32 },
    HandsDealt { remaining: usize },
    BetPlaced { side: Side, cards: Vec<String> },
    KeepsConfigured { side: Side, kept: usize },
    Showdown {
        player: HandKind,
        opponent: HandKind,
        result: RoundResult,
    },
    EffectsApplied {
        side: Side,
        damage: i32,
        blocked: i32,
        healed: i32,
        power: i32,
    },
    Fled { side: Side },
    Defeated { side: Side },
    BattleEnded { outcome: BattleOutcome, rounds: u32 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
