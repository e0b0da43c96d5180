use ampere_core::{Card, Hand, HandKind, Rank, Suit};

fn card(code: &str) -> Card {
    let (rank, suit) = code.split_at(code.len() - 1);
    let rank = match rank {
        "A" => Rank::Ace,
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "T" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        other => panic!("bad rank {other}"),
    };
    let suit = match suit {
        "C" => Suit::Clubs,
        "H" => Suit::Hearts,
        "D" => Suit::Diamonds,
        "S" => Suit::Spades,
        other => panic!("bad suit {other}"),
    };
    Card::new(suit, rank)
}

fn hand(codes: [&str; 5]) -> Hand {
    Hand::from_cards(codes.map(card))
}

macro_rules! hand_case {
    ($name:ident, $cards:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let hand = hand($cards);
            assert_eq!(hand.evaluate(), $expected);
            let strongest = hand
                .checks()
                .into_iter()
                .filter(|(_, holds)| *holds)
                .map(|(kind, _)| kind.tier())
                .max();
            assert_eq!(strongest, Some($expected.tier()));
        }
    };
}

hand_case!(no_hand, ["2C", "5H", "9D", "JS", "KC"], HandKind::NoHand);
hand_case!(one_pair, ["2C", "2H", "9D", "JS", "KC"], HandKind::OnePair);
hand_case!(two_pair, ["2C", "2H", "7D", "7S", "KC"], HandKind::TwoPair);
hand_case!(trips, ["9C", "9H", "9D", "JS", "KC"], HandKind::ThreeOfAKind);
hand_case!(straight_ace_low, ["AC", "2H", "3D", "4S", "5C"], HandKind::Straight);
hand_case!(straight_ace_high, ["AC", "KH", "QD", "JS", "TC"], HandKind::Straight);
hand_case!(straight_unordered, ["7C", "5H", "6D", "3S", "4C"], HandKind::Straight);
hand_case!(straight_does_not_wrap, ["QC", "KH", "AD", "2S", "3C"], HandKind::NoHand);
hand_case!(flush, ["2H", "7H", "9H", "JH", "KH"], HandKind::Flush);
hand_case!(full_house, ["3C", "3H", "3D", "9S", "9C"], HandKind::FullHouse);
hand_case!(four_of_a_kind, ["8C", "8H", "8D", "8S", "KC"], HandKind::FourOfAKind);
hand_case!(straight_flush, ["5S", "6S", "7S", "8S", "9S"], HandKind::StraightFlush);
hand_case!(steel_wheel, ["AH", "2H", "3H", "4H", "5H"], HandKind::StraightFlush);
hand_case!(royal_flush, ["TC", "JC", "QC", "KC", "AC"], HandKind::RoyalFlush);
hand_case!(royal_flush_shuffled, ["KD", "AD", "TD", "QD", "JD"], HandKind::RoyalFlush);

#[test]
fn full_house_also_satisfies_weaker_checks() {
    let hand = hand(["3C", "3H", "3D", "9S", "9C"]);
    assert!(hand.is_one_pair());
    assert!(hand.is_three_of_a_kind());
    assert!(!hand.is_two_pair());
    assert_eq!(hand.evaluate(), HandKind::FullHouse);
}

#[test]
fn four_of_a_kind_is_not_a_full_house() {
    let hand = hand(["8C", "8H", "8D", "8S", "KC"]);
    assert!(!hand.is_full_house());
    assert!(!hand.is_one_pair());
}

#[test]
fn tiers_follow_declaration_order() {
    let tiers: Vec<u8> = HandKind::ALL.iter().map(|kind| kind.tier()).collect();
    assert_eq!(tiers, (0..10).collect::<Vec<u8>>());
    assert_eq!(HandKind::TwoPair.name(), "Two Pair");
}
