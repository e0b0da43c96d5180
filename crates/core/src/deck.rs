use crate::{Card, Rank, RngState, Suit};

/// Shared poker deck for one round. Cards are drawn from the front.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in suit-major order, unshuffled.
    pub fn standard52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::DEALT {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    pub fn shuffled(rng: &mut RngState) -> Self {
        let mut deck = Self::standard52();
        deck.shuffle(rng);
        deck
    }

    /// Stacked deck, drawn in the given order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    /// Removes and returns the first `count` cards. Returns fewer when the
    /// deck runs short; callers that need an exact count check the length.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
