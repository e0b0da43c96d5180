//! One betting round: ante, deal, bet, draw, bet, showdown, payout.

use crate::{
    BattleCard, BattleConfig, BattleError, Deck, Event, EventBus, Hand, HandKind, Pot, RngState,
    Side,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundResult {
    Won(Side),
    Tie,
}

impl RoundResult {
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundResult::Won(side) => Some(side),
            RoundResult::Tie => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Showdown {
    pub player: HandKind,
    pub opponent: HandKind,
    pub result: RoundResult,
}

impl Showdown {
    /// Compares tiers only. Equal tiers tie.
    pub fn compare(player: &Hand, opponent: &Hand) -> Self {
        let player = player.evaluate();
        let opponent = opponent.evaluate();
        let result = match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => RoundResult::Won(Side::Player),
            std::cmp::Ordering::Less => RoundResult::Won(Side::Opponent),
            std::cmp::Ordering::Equal => RoundResult::Tie,
        };
        Self {
            player,
            opponent,
            result,
        }
    }
}

/// Both seats at the table, addressed by side. Every call blocks the round
/// until the seat answers.
pub trait PokerTable {
    /// The mandatory ante for `side`.
    fn receive_ante(&mut self, side: Side) -> BattleCard;

    /// Asks `side` for `required..=allowed` cards. Fails if the seat breaks
    /// the bet contract.
    fn receive_bet(
        &mut self,
        side: Side,
        required: usize,
        allowed: usize,
        hand: &Hand,
        pot: &Pot,
    ) -> Result<Vec<BattleCard>, BattleError>;

    fn configure_keeps(&mut self, side: Side, hand: &Hand) -> Hand;

    fn win(&mut self, side: Side, pot: &Pot);

    fn lose(&mut self, side: Side, pot: &Pot);

    fn tie(&mut self, side: Side);
}

#[derive(Debug, Clone, Default)]
pub struct PokerRound {
    pot: Pot,
    player_hand: Option<Hand>,
    opponent_hand: Option<Hand>,
    showdown: Option<Showdown>,
}

impl PokerRound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pot(&self) -> &Pot {
        &self.pot
    }

    pub fn hand(&self, side: Side) -> Option<&Hand> {
        match side {
            Side::Player => self.player_hand.as_ref(),
            Side::Opponent => self.opponent_hand.as_ref(),
        }
    }

    pub fn showdown(&self) -> Option<Showdown> {
        self.showdown
    }

    /// Plays the round with a freshly shuffled deck.
    pub fn play(
        &mut self,
        table: &mut dyn PokerTable,
        rng: &mut RngState,
        config: &BattleConfig,
        events: &mut EventBus,
    ) -> Result<Showdown, BattleError> {
        self.play_with_deck(table, Deck::shuffled(rng), config, events)
    }

    /// Plays the round dealing from `deck` as given.
    pub fn play_with_deck(
        &mut self,
        table: &mut dyn PokerTable,
        mut deck: Deck,
        config: &BattleConfig,
        events: &mut EventBus,
    ) -> Result<Showdown, BattleError> {
        self.pot = Pot::new();
        self.showdown = None;

        for side in Side::BOTH {
            let ante = table.receive_ante(side);
            self.commit(side, vec![ante], events);
        }

        let mut hands = [Hand::deal(&mut deck)?, Hand::deal(&mut deck)?];
        self.store_hands(hands);
        events.push(Event::HandsDealt {
            remaining: deck.remaining(),
        });
        tracing::debug!(remaining = deck.remaining(), "hands dealt");

        let opening = config.opening_bet;
        self.bet(table, Side::Player, opening, opening, &hands, events)?;
        let response = self.bet(table, Side::Opponent, 0, config.response_bet, &hands, events)?;
        if response > 1 {
            self.bet(table, Side::Player, 0, config.counter_bet, &hands, events)?;
        }

        for side in Side::BOTH {
            let dealt = hands[side.index()];
            let marked = table.configure_keeps(side, &dealt);
            if marked.cards() != dealt.cards() {
                tracing::warn!(?side, "keep configuration changed the dealt cards");
                return Err(BattleError::HandMismatch { side });
            }
            events.push(Event::KeepsConfigured {
                side,
                kept: marked.keep_count(),
            });
            hands[side.index()] = marked.update(&mut deck)?;
        }
        self.store_hands(hands);

        let raised = self.bet(table, Side::Player, 0, config.final_bet, &hands, events)?;
        if raised > 0 {
            let allowed = config.final_response_bet;
            self.bet(table, Side::Opponent, 0, allowed, &hands, events)?;
        }

        let showdown = Showdown::compare(&hands[0], &hands[1]);
        self.showdown = Some(showdown);
        events.push(Event::Showdown {
            player: showdown.player,
            opponent: showdown.opponent,
            result: showdown.result,
        });
        tracing::info!(
            player = showdown.player.name(),
            opponent = showdown.opponent.name(),
            result = ?showdown.result,
            pot = self.pot.len(),
            "showdown"
        );

        match showdown.result {
            RoundResult::Won(winner) => {
                for side in Side::BOTH {
                    if side == winner {
                        table.win(side, &self.pot);
                    } else {
                        table.lose(side, &self.pot);
                    }
                }
            }
            RoundResult::Tie => {
                for side in Side::BOTH {
                    table.tie(side);
                }
            }
        }
        Ok(showdown)
    }

    fn bet(
        &mut self,
        table: &mut dyn PokerTable,
        side: Side,
        required: usize,
        allowed: usize,
        hands: &[Hand; 2],
        events: &mut EventBus,
    ) -> Result<usize, BattleError> {
        let hand = &hands[side.index()];
        let cards = table.receive_bet(side, required, allowed, hand, &self.pot)?;
        if cards.len() < required || cards.len() > allowed {
            return Err(BattleError::InvalidBet {
                side,
                required,
                allowed,
                received: cards.len(),
            });
        }
        let count = cards.len();
        self.commit(side, cards, events);
        Ok(count)
    }

    fn commit(&mut self, side: Side, cards: Vec<BattleCard>, events: &mut EventBus) {
        let names: Vec<String> = cards.iter().map(|card| card.card.name().to_string()).collect();
        tracing::debug!(?side, cards = ?names, "bet committed");
        events.push(Event::BetPlaced { side, cards: names });
        self.pot.extend(cards);
    }

    fn store_hands(&mut self, hands: [Hand; 2]) {
        self.player_hand = Some(hands[0]);
        self.opponent_hand = Some(hands[1]);
    }
}
