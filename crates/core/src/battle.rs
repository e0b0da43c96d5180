//! The battle loop: repeat poker rounds until a side dies or flees.

use crate::{
    Arena, BattleCard, BattleConfig, BattleDeck, BattleError, BetRequest, Bettable, Combatant,
    Deck, Event, EventBus, GameCard, Hand, PlayerState, PokerRound, PokerTable, Pot, RngState,
    RoundEffect, Showdown, Side,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BattleOutcome {
    Fled(Side),
    Defeated(Side),
    MutualDefeat,
}

/// A combatant's per-battle wrapper around its persistent state.
#[derive(Debug, Clone)]
pub struct Fighter {
    state: PlayerState,
    deck: BattleDeck,
    effect: RoundEffect,
    has_run: bool,
}

impl Fighter {
    fn new(side: Side, state: PlayerState, config: &BattleConfig, rng: &mut RngState) -> Self {
        let deck = BattleDeck::new(side, state.cards(), config.battle_hand_size, rng);
        Self {
            state,
            deck,
            effect: RoundEffect::default(),
            has_run: false,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn deck(&self) -> &BattleDeck {
        &self.deck
    }

    pub fn round_effect(&self) -> RoundEffect {
        self.effect
    }

    pub fn has_run(&self) -> bool {
        self.has_run
    }

    pub fn is_dead_or_ran(&self) -> bool {
        self.state.is_dead() || self.has_run
    }
}

impl Arena for [Fighter; 2] {
    fn base_damage(&self, side: Side) -> i32 {
        self[side.index()].state.base_damage().value()
    }

    fn round_effect_mut(&mut self, side: Side) -> &mut RoundEffect {
        &mut self[side.index()].effect
    }
}

pub struct Battle {
    fighters: [Fighter; 2],
    config: BattleConfig,
    rng: RngState,
    rounds: u32,
    last_round: Option<PokerRound>,
}

impl Battle {
    /// Builds both battle decks from shuffled copies of each inventory.
    pub fn new(
        player: PlayerState,
        opponent: PlayerState,
        config: BattleConfig,
        mut rng: RngState,
    ) -> Self {
        let fighters = [
            Fighter::new(Side::Player, player, &config, &mut rng),
            Fighter::new(Side::Opponent, opponent, &config, &mut rng),
        ];
        Self {
            fighters,
            config,
            rng,
            rounds: 0,
            last_round: None,
        }
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn last_round(&self) -> Option<&PokerRound> {
        self.last_round.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.fighters.iter().any(Fighter::is_dead_or_ran)
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        if let Some(side) = Side::BOTH.into_iter().find(|side| self.fighter(*side).has_run) {
            return Some(BattleOutcome::Fled(side));
        }
        match (
            self.fighter(Side::Player).state.is_dead(),
            self.fighter(Side::Opponent).state.is_dead(),
        ) {
            (true, true) => Some(BattleOutcome::MutualDefeat),
            (true, false) => Some(BattleOutcome::Defeated(Side::Player)),
            (false, true) => Some(BattleOutcome::Defeated(Side::Opponent)),
            (false, false) => None,
        }
    }

    /// Runs rounds until the battle resolves. At least one round is always played.
    pub fn execute(
        &mut self,
        player: &mut dyn Combatant,
        opponent: &mut dyn Combatant,
        events: &mut EventBus,
    ) -> Result<BattleOutcome, BattleError> {
        loop {
            self.play_round(player, opponent, events)?;
            if let Some(outcome) = self.outcome() {
                events.push(Event::BattleEnded {
                    outcome,
                    rounds: self.rounds,
                });
                tracing::info!(?outcome, rounds = self.rounds, "battle resolved");
                return Ok(outcome);
            }
        }
    }

    /// One iteration of the loop with a freshly shuffled poker deck.
    pub fn play_round(
        &mut self,
        player: &mut dyn Combatant,
        opponent: &mut dyn Combatant,
        events: &mut EventBus,
    ) -> Result<Showdown, BattleError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.play_round_with_deck(deck, player, opponent, events)
    }

    /// One iteration of the loop dealing from `deck` as given.
    pub fn play_round_with_deck(
        &mut self,
        deck: Deck,
        player: &mut dyn Combatant,
        opponent: &mut dyn Combatant,
        events: &mut EventBus,
    ) -> Result<Showdown, BattleError> {
        for fighter in self.fighters.iter_mut() {
            fighter.effect.reset();
        }
        self.rounds += 1;
        events.push(Event::RoundStarted { round: self.rounds });
        tracing::debug!(round = self.rounds, "round started");

        let mut round = PokerRound::new();
        let showdown = {
            let mut table = BattleTable {
                fighters: &mut self.fighters,
                player,
                opponent,
                rng: &mut self.rng,
            };
            round.play_with_deck(&mut table, deck, &self.config, events)?
        };
        self.last_round = Some(round);

        if !self.is_resolved() {
            for side in Side::BOTH {
                let fighter = &mut self.fighters[side.index()];
                let effect = fighter.effect;
                effect.apply(&mut fighter.state);
                events.push(Event::EffectsApplied {
                    side,
                    damage: effect.damage,
                    blocked: effect.blocked,
                    healed: effect.healed,
                    power: fighter.state.power_level().value(),
                });
            }
        }

        for side in Side::BOTH {
            let fighter = self.fighter(side);
            if fighter.has_run {
                events.push(Event::Fled { side });
            } else if fighter.state.is_dead() {
                events.push(Event::Defeated { side });
            }
        }
        Ok(showdown)
    }

    /// Hands both persistent states back once the battle is over.
    pub fn into_states(self) -> (PlayerState, PlayerState) {
        let [player, opponent] = self.fighters;
        (player.state, opponent.state)
    }
}

/// Adapts the battle's fighters and decision sources to the round protocol.
struct BattleTable<'a> {
    fighters: &'a mut [Fighter; 2],
    player: &'a mut dyn Combatant,
    opponent: &'a mut dyn Combatant,
    rng: &'a mut RngState,
}

impl BattleTable<'_> {
    fn combatant(&mut self, side: Side) -> &mut dyn Combatant {
        match side {
            Side::Player => &mut *self.player,
            Side::Opponent => &mut *self.opponent,
        }
    }
}

fn check_bet(
    side: Side,
    required: usize,
    allowed: usize,
    offer: &[BattleCard],
    bet: &[BattleCard],
) -> Result<Vec<BattleCard>, BattleError> {
    if bet.len() < required || bet.len() > allowed {
        return Err(BattleError::InvalidBet {
            side,
            required,
            allowed,
            received: bet.len(),
        });
    }
    let mut accepted: Vec<BattleCard> = Vec::with_capacity(bet.len());
    for card in bet {
        let offered = offer.iter().find(|item| item.id == card.id);
        match offered {
            Some(item) if !accepted.iter().any(|taken| taken.id == item.id) => {
                let mut item = item.clone();
                item.selected = false;
                accepted.push(item);
            }
            _ => return Err(BattleError::CardNotOffered { side, id: card.id }),
        }
    }
    Ok(accepted)
}

impl PokerTable for BattleTable<'_> {
    fn receive_ante(&mut self, side: Side) -> BattleCard {
        self.fighters[side.index()].deck.synthesize(GameCard::BaseAttack)
    }

    fn receive_bet(
        &mut self,
        side: Side,
        required: usize,
        allowed: usize,
        hand: &Hand,
        pot: &Pot,
    ) -> Result<Vec<BattleCard>, BattleError> {
        let offer = self.fighters[side.index()].deck.offer();
        let request = BetRequest {
            side,
            required,
            allowed,
            offer: &offer,
            hand,
            pot,
        };
        let bet = self.combatant(side).receive_bet(request);
        let bet = check_bet(side, required, allowed, &offer, &bet).map_err(|err| {
            tracing::warn!(?side, %err, "bet contract violated");
            err
        })?;
        self.fighters[side.index()].deck.discard(&bet, &mut *self.rng);
        Ok(bet)
    }

    fn configure_keeps(&mut self, side: Side, hand: &Hand) -> Hand {
        self.combatant(side).configure_keeps(hand)
    }

    fn win(&mut self, side: Side, pot: &Pot) {
        let mut proceed = true;
        for item in pot.items() {
            if !item.apply_positive(side.other(), side, &mut *self.fighters) {
                proceed = false;
            }
        }
        if !proceed {
            tracing::info!(?side, "winner leaves the battle");
            self.fighters[side.index()].has_run = true;
        }
        self.combatant(side).win(pot);
    }

    fn lose(&mut self, side: Side, pot: &Pot) {
        for item in pot.items() {
            item.apply_negative(side.other(), side, &mut *self.fighters);
        }
        self.combatant(side).lose(pot);
    }

    fn tie(&mut self, side: Side) {
        self.combatant(side).tie();
    }
}
