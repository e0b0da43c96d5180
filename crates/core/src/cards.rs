use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Hearts,
    Diamonds,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Diamonds, Suit::Spades];

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
        }
    }
}

/// Card ranks in ace-low order.
///
/// `AcesHigh` sits directly above `King` and only exists so the straight
/// check can re-run with aces promoted. It is never dealt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    AcesHigh,
}

impl Rank {
    /// Every dealable rank, ace first.
    pub const DEALT: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::AcesHigh => 14,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace | Rank::AcesHigh => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Same card with an ace promoted above the king.
    pub fn aces_high(self) -> Self {
        match self.rank {
            Rank::Ace => Self::new(self.suit, Rank::AcesHigh),
            _ => self,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank.name(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_rank_name_and_suit_symbol() {
        assert_eq!(Card::new(Suit::Spades, Rank::Queen).to_string(), "Queen ♠");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ace).to_string(), "Ace ♥");
    }

    #[test]
    fn aces_high_only_promotes_aces() {
        let ace = Card::new(Suit::Clubs, Rank::Ace).aces_high();
        assert_eq!(ace.rank, Rank::AcesHigh);
        assert_eq!(ace.rank.value(), 14);
        let king = Card::new(Suit::Clubs, Rank::King);
        assert_eq!(king.aces_high(), king);
    }
}
