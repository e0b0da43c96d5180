use crate::Side;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BattleError {
    #[error("need {requested} cards but only {remaining} remain")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("{side:?} bet {received} cards, expected {required} to {allowed}")]
    InvalidBet {
        side: Side,
        required: usize,
        allowed: usize,
        received: usize,
    },
    #[error("{side:?} bet card {id} which was not offered")]
    CardNotOffered { side: Side, id: u32 },
    #[error("{side:?} changed its dealt cards while choosing keeps")]
    HandMismatch { side: Side },
    #[error("invalid hand slot {0}")]
    InvalidSlot(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("unknown card id: {0}")]
    UnknownCard(String),
    #[error("unknown monster id: {0}")]
    UnknownMonster(String),
    #[error("no monster available for level {0}")]
    NoMonsterForLevel(u32),
}
