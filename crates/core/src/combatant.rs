use crate::{BattleCard, GameCard, Hand, Pot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

/// Everything a decision source sees when asked to bet.
#[derive(Debug, Clone, Copy)]
pub struct BetRequest<'a> {
    pub side: Side,
    /// Lower bound on returned cards. Only the opening bet sets it.
    pub required: usize,
    /// Upper bound on returned cards.
    pub allowed: usize,
    /// Battle-deck hand followed by a fresh Run and Pass.
    pub offer: &'a [BattleCard],
    pub hand: &'a Hand,
    pub pot: &'a Pot,
}

/// Per-side decision source. Calls block the battle until they return.
pub trait Combatant {
    /// Returns `request.required..=request.allowed` distinct cards taken
    /// from `request.offer`.
    fn receive_bet(&mut self, request: BetRequest<'_>) -> Vec<BattleCard>;

    /// Returns `hand` with the keep flags this side wants. The cards must
    /// come back unchanged.
    fn configure_keeps(&mut self, hand: &Hand) -> Hand;

    fn win(&mut self, _pot: &Pot) {}

    fn lose(&mut self, _pot: &Pot) {}

    fn tie(&mut self) {}
}

/// Never keeps a card and bets only what is required, Pass first.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassiveCombatant;

impl Combatant for PassiveCombatant {
    fn receive_bet(&mut self, request: BetRequest<'_>) -> Vec<BattleCard> {
        request
            .offer
            .iter()
            .rev()
            .filter(|item| !matches!(item.card, GameCard::Run))
            .take(request.required)
            .cloned()
            .collect()
    }

    fn configure_keeps(&mut self, hand: &Hand) -> Hand {
        hand.with_keeps([false; crate::HAND_SIZE])
    }
}
