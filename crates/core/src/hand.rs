use crate::{BattleError, Card, Deck, Rank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const HAND_SIZE: usize = 5;

/// Hand tiers, weakest first. Two hands of the same tier tie; there is no
/// kicker comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandKind {
    NoHand,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    pub const ALL: [HandKind; 10] = [
        HandKind::NoHand,
        HandKind::OnePair,
        HandKind::TwoPair,
        HandKind::ThreeOfAKind,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::FourOfAKind,
        HandKind::StraightFlush,
        HandKind::RoyalFlush,
    ];

    pub fn tier(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HandKind::NoHand => "No Hand",
            HandKind::OnePair => "One Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::FourOfAKind => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Flush",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSlot {
    pub card: Card,
    pub keep: bool,
}

/// Five poker cards plus per-slot keep flags. Every change yields a new
/// `Hand`; the flags only live until the next [`Hand::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: [CardSlot; HAND_SIZE],
}

impl Hand {
    pub fn from_cards(cards: [Card; HAND_SIZE]) -> Self {
        Self {
            slots: cards.map(|card| CardSlot { card, keep: false }),
        }
    }

    /// Deals the next five cards off `deck`.
    pub fn deal(deck: &mut Deck) -> Result<Self, BattleError> {
        if deck.remaining() < HAND_SIZE {
            return Err(BattleError::InsufficientCards {
                requested: HAND_SIZE,
                remaining: deck.remaining(),
            });
        }
        let drawn = deck.draw(HAND_SIZE);
        let mut cards = [drawn[0]; HAND_SIZE];
        cards.copy_from_slice(&drawn);
        Ok(Self::from_cards(cards))
    }

    pub fn slots(&self) -> &[CardSlot; HAND_SIZE] {
        &self.slots
    }

    pub fn cards(&self) -> [Card; HAND_SIZE] {
        self.slots.map(|slot| slot.card)
    }

    pub fn keep_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.keep).count()
    }

    pub fn with_keep(&self, slot: usize, keep: bool) -> Result<Self, BattleError> {
        let mut next = *self;
        next.slots
            .get_mut(slot)
            .ok_or(BattleError::InvalidSlot(slot))?
            .keep = keep;
        Ok(next)
    }

    pub fn toggle_keep(&self, slot: usize) -> Result<Self, BattleError> {
        let current = self
            .slots
            .get(slot)
            .ok_or(BattleError::InvalidSlot(slot))?
            .keep;
        self.with_keep(slot, !current)
    }

    pub fn with_keeps(&self, keeps: [bool; HAND_SIZE]) -> Self {
        let mut next = *self;
        for (slot, keep) in next.slots.iter_mut().zip(keeps) {
            slot.keep = keep;
        }
        next
    }

    /// Replaces every slot not marked keep, in slot order, and clears all
    /// keep flags. Nothing is drawn if the deck cannot cover every slot.
    pub fn update(&self, deck: &mut Deck) -> Result<Self, BattleError> {
        let needed = HAND_SIZE - self.keep_count();
        if deck.remaining() < needed {
            return Err(BattleError::InsufficientCards {
                requested: needed,
                remaining: deck.remaining(),
            });
        }
        let mut replacements = deck.draw(needed).into_iter();
        let mut next = *self;
        for slot in next.slots.iter_mut() {
            if !slot.keep {
                if let Some(card) = replacements.next() {
                    slot.card = card;
                }
            }
            slot.keep = false;
        }
        Ok(next)
    }

    /// Every check paired with whether it holds, weakest first.
    pub fn checks(&self) -> [(HandKind, bool); 10] {
        [
            (HandKind::NoHand, true),
            (HandKind::OnePair, self.is_one_pair()),
            (HandKind::TwoPair, self.is_two_pair()),
            (HandKind::ThreeOfAKind, self.is_three_of_a_kind()),
            (HandKind::Straight, self.is_straight()),
            (HandKind::Flush, self.is_flush()),
            (HandKind::FullHouse, self.is_full_house()),
            (HandKind::FourOfAKind, self.is_four_of_a_kind()),
            (HandKind::StraightFlush, self.is_straight_flush()),
            (HandKind::RoyalFlush, self.is_royal_flush()),
        ]
    }

    /// Strongest check that holds.
    pub fn evaluate(&self) -> HandKind {
        self.checks()
            .into_iter()
            .filter(|(_, holds)| *holds)
            .map(|(kind, _)| kind)
            .max()
            .unwrap_or(HandKind::NoHand)
    }

    pub fn is_one_pair(&self) -> bool {
        self.has_of_a_kind(2)
    }

    pub fn is_two_pair(&self) -> bool {
        self.rank_counts().values().filter(|&&count| count == 2).count() == 2
    }

    pub fn is_three_of_a_kind(&self) -> bool {
        self.has_of_a_kind(3)
    }

    pub fn is_four_of_a_kind(&self) -> bool {
        self.has_of_a_kind(4)
    }

    /// Ace low or ace high, never wrapping around the king.
    pub fn is_straight(&self) -> bool {
        let cards = self.cards();
        ranks_sequential(&cards) || ranks_sequential(&cards.map(Card::aces_high))
    }

    pub fn is_flush(&self) -> bool {
        let first = self.slots[0].card.suit;
        self.slots.iter().all(|slot| slot.card.suit == first)
    }

    /// A triplet and a separate exact pair group.
    pub fn is_full_house(&self) -> bool {
        self.is_three_of_a_kind() && self.has_of_a_kind(2)
    }

    pub fn is_straight_flush(&self) -> bool {
        self.is_flush() && self.is_straight()
    }

    /// Straight flush whose lowest card (ace low) is an ace and highest is a
    /// king, which only the ten-to-ace run satisfies.
    pub fn is_royal_flush(&self) -> bool {
        if !self.is_straight_flush() {
            return false;
        }
        let ranks = self.slots.iter().map(|slot| slot.card.rank);
        ranks.clone().min() == Some(Rank::Ace) && ranks.max() == Some(Rank::King)
    }

    fn has_of_a_kind(&self, count: usize) -> bool {
        self.rank_counts().values().any(|&c| c == count)
    }

    fn rank_counts(&self) -> HashMap<Rank, usize> {
        let mut counts = HashMap::new();
        for slot in &self.slots {
            *counts.entry(slot.card.rank).or_insert(0) += 1;
        }
        counts
    }
}

fn ranks_sequential(cards: &[Card]) -> bool {
    let mut values: Vec<u8> = cards.iter().map(|card| card.rank.value()).collect();
    values.sort_unstable();
    values.windows(2).all(|w| w[1] == w[0] + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    fn slot_ranks(hand: &Hand) -> Vec<Rank> {
        hand.slots().iter().map(|slot| slot.card.rank).collect()
    }

    #[test]
    fn update_replaces_only_unkept_slots_in_order() {
        let mut deck = Deck::standard52();
        let hand = Hand::deal(&mut deck).unwrap();
        assert_eq!(
            slot_ranks(&hand),
            vec![Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
        );
        let marked = hand.with_keeps([true, false, true, false, false]);
        let before = deck.remaining();
        let updated = marked.update(&mut deck).unwrap();
        assert_eq!(before - deck.remaining(), 3);
        assert_eq!(
            slot_ranks(&updated),
            vec![Rank::Ace, Rank::Six, Rank::Three, Rank::Seven, Rank::Eight]
        );
        assert_eq!(updated.keep_count(), 0);
    }

    #[test]
    fn update_with_all_kept_draws_nothing_and_clears_flags() {
        let mut deck = Deck::standard52();
        let hand = Hand::deal(&mut deck).unwrap().with_keeps([true; HAND_SIZE]);
        let updated = hand.update(&mut deck).unwrap();
        assert_eq!(deck.remaining(), 47);
        assert_eq!(updated.cards(), hand.cards());
        assert_eq!(updated.keep_count(), 0);
    }

    #[test]
    fn deal_from_short_deck_fails_without_drawing() {
        let mut deck = Deck::from_cards(vec![Card::new(Suit::Clubs, Rank::Two); 3]);
        let err = Hand::deal(&mut deck).unwrap_err();
        assert!(matches!(
            err,
            BattleError::InsufficientCards {
                requested: 5,
                remaining: 3
            }
        ));
        assert_eq!(deck.remaining(), 3);
    }

    #[test]
    fn toggle_keep_rejects_out_of_range_slot() {
        let hand = Hand::deal(&mut Deck::standard52()).unwrap();
        assert!(hand.toggle_keep(0).unwrap().slots()[0].keep);
        assert!(matches!(hand.toggle_keep(5), Err(BattleError::InvalidSlot(5))));
    }
}
