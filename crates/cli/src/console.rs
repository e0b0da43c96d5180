use ampere_core::{BattleCard, BetRequest, Combatant, Hand, PassiveCombatant, HAND_SIZE};
use std::io::{BufRead, Write};

/// Decision source driven by line input: numbers separated by spaces, empty
/// line for none.
pub struct ConsoleCombatant<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleCombatant<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        let _ = write!(self.output, "{text}");
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                tracing::warn!(%err, "failed to read input");
                None
            }
        }
    }

    fn print_hand(&mut self, hand: &Hand) {
        let _ = writeln!(self.output, "YOUR HAND:");
        let _ = writeln!(self.output, "--------------------");
        for (idx, slot) in hand.slots().iter().enumerate() {
            let mark = if slot.keep { "KEEP" } else { "TOSS" };
            let _ = writeln!(self.output, "{}. [{mark}] {}", idx + 1, slot.card);
        }
        let _ = writeln!(self.output);
    }
}

/// Parses 1-based picks. `None` if any token is not a number in `1..=max`.
pub fn parse_picks(line: &str, max: usize) -> Option<Vec<usize>> {
    line.split_whitespace()
        .map(|token| match token.parse::<usize>() {
            Ok(n) if n >= 1 && n <= max => Some(n - 1),
            _ => None,
        })
        .collect()
}

impl<R: BufRead, W: Write> Combatant for ConsoleCombatant<R, W> {
    fn receive_bet(&mut self, request: BetRequest<'_>) -> Vec<BattleCard> {
        self.print_hand(request.hand);
        let _ = writeln!(self.output, "POT: {} card(s)", request.pot.len());
        if request.required == request.allowed {
            let _ = writeln!(
                self.output,
                "SELECT {} CARD(S) TO ADD TO THE POT:",
                request.allowed
            );
        } else {
            let _ = writeln!(
                self.output,
                "SELECT UP TO {} CARD(S) TO ADD TO THE POT:",
                request.allowed
            );
        }
        let _ = writeln!(self.output, "--------------------");
        for (idx, card) in request.offer.iter().enumerate() {
            let _ = writeln!(
                self.output,
                "{}. {} - {}",
                idx + 1,
                card.card.name(),
                card.card.description()
            );
        }
        loop {
            let Some(line) = self.prompt("> ") else {
                // Out of input: fall back to passing.
                return PassiveCombatant.receive_bet(request);
            };
            let picks = parse_picks(&line, request.offer.len()).map(|mut picks| {
                picks.sort_unstable();
                picks.dedup();
                picks
            });
            match picks {
                Some(picks) if (request.required..=request.allowed).contains(&picks.len()) => {
                    return picks
                        .into_iter()
                        .map(|idx| {
                            let mut card = request.offer[idx].clone();
                            card.selected = true;
                            card
                        })
                        .collect();
                }
                _ => {
                    let _ = writeln!(
                        self.output,
                        "pick {} to {} of 1-{}",
                        request.required,
                        request.allowed,
                        request.offer.len()
                    );
                }
            }
        }
    }

    fn configure_keeps(&mut self, hand: &Hand) -> Hand {
        self.print_hand(hand);
        loop {
            let Some(line) = self.prompt("keep (e.g. 1 3 5, empty to redraw all)> ") else {
                return *hand;
            };
            let Some(picks) = parse_picks(&line, HAND_SIZE) else {
                let _ = writeln!(self.output, "slots are 1-{HAND_SIZE}");
                continue;
            };
            let mut keeps = [false; HAND_SIZE];
            for idx in picks {
                keeps[idx] = true;
            }
            return hand.with_keeps(keeps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ampere_core::{Deck, Pot, Side};

    #[test]
    fn parse_picks_rejects_out_of_range() {
        assert_eq!(parse_picks("1 3", 5), Some(vec![0, 2]));
        assert_eq!(parse_picks("", 5), Some(vec![]));
        assert_eq!(parse_picks("0", 5), None);
        assert_eq!(parse_picks("6", 5), None);
        assert_eq!(parse_picks("x", 5), None);
    }

    #[test]
    fn keeps_follow_typed_slots() {
        let hand = Hand::deal(&mut Deck::standard52()).unwrap();
        let mut console = ConsoleCombatant::new("9\n2 4\n".as_bytes(), Vec::new());
        let marked = console.configure_keeps(&hand);
        let keeps: Vec<bool> = marked.slots().iter().map(|slot| slot.keep).collect();
        assert_eq!(keeps, vec![false, true, false, true, false]);
    }

    #[test]
    fn bet_retries_until_within_allowance() {
        let hand = Hand::deal(&mut Deck::standard52()).unwrap();
        let offer = vec![
            BattleCard::new(7, ampere_core::GameCard::Run, Side::Player),
            BattleCard::new(8, ampere_core::GameCard::Pass, Side::Player),
        ];
        let pot = Pot::new();
        let mut console = ConsoleCombatant::new("1 2\n2\n".as_bytes(), Vec::new());
        let bet = console.receive_bet(BetRequest {
            side: Side::Player,
            required: 0,
            allowed: 1,
            offer: &offer,
            hand: &hand,
            pot: &pot,
        });
        assert_eq!(bet.len(), 1);
        assert_eq!(bet[0].id, 8);
    }

    fn bet_from(input: &str, required: usize, allowed: usize) -> Vec<u32> {
        let hand = Hand::deal(&mut Deck::standard52()).unwrap();
        let offer = vec![
            BattleCard::new(7, ampere_core::GameCard::Run, Side::Player),
            BattleCard::new(8, ampere_core::GameCard::Pass, Side::Player),
        ];
        let pot = Pot::new();
        let mut console = ConsoleCombatant::new(input.as_bytes(), Vec::new());
        console
            .receive_bet(BetRequest {
                side: Side::Player,
                required,
                allowed,
                offer: &offer,
                hand: &hand,
                pot: &pot,
            })
            .into_iter()
            .map(|card| card.id)
            .collect()
    }

    #[test]
    fn repeated_pick_counts_once() {
        assert_eq!(bet_from("1 1\n", 0, 1), vec![7]);
    }

    #[test]
    fn required_bet_rejects_an_empty_line() {
        assert_eq!(bet_from("\n2\n", 1, 1), vec![8]);
    }

    #[test]
    fn required_bet_passes_when_input_ends() {
        assert_eq!(bet_from("", 1, 1), vec![8]);
    }
}
