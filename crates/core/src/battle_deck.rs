use crate::{BattleCard, GameCard, RngState, Side};
use std::collections::VecDeque;

/// One combatant's private card rotation for a single battle.
///
/// Hand, reserve and discard always partition the inventory cards dealt into
/// this battle. Run, Pass and the ante card are minted on demand and never
/// enter the rotation.
#[derive(Debug, Clone)]
pub struct BattleDeck {
    owner: Side,
    hand: Vec<BattleCard>,
    reserve: VecDeque<BattleCard>,
    discard: Vec<BattleCard>,
    next_id: u32,
}

impl BattleDeck {
    pub fn new(owner: Side, inventory: &[GameCard], hand_size: usize, rng: &mut RngState) -> Self {
        let mut cards: Vec<BattleCard> = Vec::with_capacity(inventory.len());
        for card in inventory {
            if card.is_ephemeral() {
                tracing::warn!(?owner, card = card.name(), "skipping ephemeral card in inventory");
                continue;
            }
            let id = cards.len() as u32;
            cards.push(BattleCard::new(id, card.clone(), owner));
        }
        let next_id = cards.len() as u32;
        rng.shuffle(&mut cards);
        let mut reserve: VecDeque<BattleCard> = cards.into();
        let dealt = hand_size.min(reserve.len());
        let hand = reserve.drain(..dealt).collect();
        Self {
            owner,
            hand,
            reserve,
            discard: Vec::new(),
            next_id,
        }
    }

    pub fn hand(&self) -> &[BattleCard] {
        &self.hand
    }

    pub fn reserve(&self) -> impl Iterator<Item = &BattleCard> {
        self.reserve.iter()
    }

    pub fn discard_pile(&self) -> &[BattleCard] {
        &self.discard
    }

    /// Every card in the rotation regardless of pile.
    pub fn rotation(&self) -> impl Iterator<Item = &BattleCard> {
        self.hand.iter().chain(self.reserve.iter()).chain(self.discard.iter())
    }

    /// Mints a card outside the rotation with a fresh id.
    pub fn synthesize(&mut self, card: GameCard) -> BattleCard {
        let id = self.next_id;
        self.next_id += 1;
        BattleCard::new(id, card, self.owner)
    }

    /// Current hand plus a fresh Run and Pass, all unselected.
    pub fn offer(&mut self) -> Vec<BattleCard> {
        let mut offer: Vec<BattleCard> = self
            .hand
            .iter()
            .cloned()
            .map(|mut card| {
                card.selected = false;
                card
            })
            .collect();
        offer.push(self.synthesize(GameCard::Run));
        offer.push(self.synthesize(GameCard::Pass));
        offer
    }

    /// Moves each wagered hand card to the discard pile and draws a
    /// replacement, reshuffling the discard pile into the reserve when the
    /// reserve is empty.
    pub fn discard(&mut self, cards: &[BattleCard], rng: &mut RngState) {
        for card in cards {
            if card.card.is_ephemeral() {
                continue;
            }
            let Some(pos) = self.hand.iter().position(|held| held.id == card.id) else {
                continue;
            };
            let played = self.hand.remove(pos);
            self.discard.push(played);
            if self.reserve.is_empty() {
                self.reshuffle(rng);
            }
            if let Some(next) = self.reserve.pop_front() {
                self.hand.push(next);
            }
        }
    }

    fn reshuffle(&mut self, rng: &mut RngState) {
        let mut pile = std::mem::take(&mut self.discard);
        rng.shuffle(&mut pile);
        tracing::debug!(owner = ?self.owner, cards = pile.len(), "reshuffled discard pile");
        self.reserve.extend(pile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardDef;

    fn custom(id: &str) -> GameCard {
        GameCard::Custom(CardDef {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            on_win: Vec::new(),
            on_lose: Vec::new(),
        })
    }

    fn sorted_ids<'a>(cards: impl Iterator<Item = &'a BattleCard>) -> Vec<u32> {
        let mut ids: Vec<u32> = cards.map(|card| card.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn deals_at_most_hand_size() {
        let mut rng = RngState::from_seed(1);
        let small = BattleDeck::new(Side::Player, &[custom("a"), custom("b")], 5, &mut rng);
        assert_eq!(small.hand().len(), 2);
        assert_eq!(small.reserve().count(), 0);

        let inventory: Vec<GameCard> = (0..8).map(|i| custom(&format!("c{i}"))).collect();
        let big = BattleDeck::new(Side::Player, &inventory, 5, &mut rng);
        assert_eq!(big.hand().len(), 5);
        assert_eq!(big.reserve().count(), 3);
    }

    #[test]
    fn ephemeral_cards_never_enter_rotation() {
        let mut rng = RngState::from_seed(2);
        let mut deck = BattleDeck::new(
            Side::Opponent,
            &[custom("a"), GameCard::Run, GameCard::Pass],
            5,
            &mut rng,
        );
        assert_eq!(deck.rotation().count(), 1);
        let offer = deck.offer();
        assert_eq!(offer.len(), 3);
        let run = offer[1].clone();
        assert_eq!(run.card, GameCard::Run);
        deck.discard(&[run], &mut rng);
        assert_eq!(deck.hand().len(), 1);
        assert!(deck.discard_pile().is_empty());
    }

    #[test]
    fn rotation_is_closed_over_many_cycles() {
        let mut rng = RngState::from_seed(3);
        let inventory: Vec<GameCard> = (0..7).map(|i| custom(&format!("c{i}"))).collect();
        let mut deck = BattleDeck::new(Side::Player, &inventory, 5, &mut rng);
        let expected: Vec<u32> = (0..7).collect();
        for step in 0..200usize {
            let offer = deck.offer();
            let pick = offer[step % deck.hand().len()].clone();
            let run = offer[offer.len() - 2].clone();
            deck.discard(&[pick, run], &mut rng);
            assert_eq!(deck.hand().len(), 5);
            assert_eq!(sorted_ids(deck.rotation()), expected);
        }
    }

    #[test]
    fn single_card_cycles_back_into_hand() {
        let mut rng = RngState::from_seed(4);
        let mut deck = BattleDeck::new(Side::Player, &[custom("only")], 5, &mut rng);
        let card = deck.hand()[0].clone();
        deck.discard(&[card.clone()], &mut rng);
        assert_eq!(deck.hand(), &[card]);
        assert!(deck.discard_pile().is_empty());
    }
}
