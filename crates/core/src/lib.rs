//! Poker-battle resolution engine. Keep this crate free of IO and platform concerns.

pub mod battle;
pub mod battle_deck;
pub mod cards;
pub mod combatant;
pub mod config;
pub mod content;
pub mod deck;
pub mod effects;
pub mod error;
pub mod events;
pub mod hand;
pub mod player;
pub mod pot;
pub mod rng;
pub mod round;
pub mod stat;

pub use battle::*;
pub use battle_deck::*;
pub use cards::*;
pub use combatant::*;
pub use config::*;
pub use content::*;
pub use deck::*;
pub use effects::*;
pub use error::*;
pub use events::*;
pub use hand::*;
pub use player::*;
pub use pot::*;
pub use rng::*;
pub use round::*;
pub use stat::*;
