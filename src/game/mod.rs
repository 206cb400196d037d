//! Playing games
//!
//! The driver runs the opening and deduction phases against a scorer, which is
//! either the computer (known secret) or a human at the terminal.

mod driver;
mod error;
mod scorer;

pub use driver::{
    DEFAULT_MAX_MOVES, DEFAULT_OPENING, Game, GameConfig, GameResult, Phase, play_secret,
};
pub use error::GameError;
pub use scorer::{ComputerScorer, HumanScorer, Scorer};
