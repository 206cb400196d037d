//! Mastermind Solver
//!
//! A Mastermind solver that turns feedback into constraints, derives extra facts
//! from pairs of guesses, and enumerates the remaining secrets by backtracking.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::Sequence;
//! use mastermind_solver::game::{GameConfig, play_secret};
//!
//! let secret: Sequence = "3 1 4 1".parse().unwrap();
//! let result = play_secret(secret, &GameConfig::default()).unwrap();
//! println!("{} moves, won: {}", result.moves(), result.won);
//! ```

// Core domain types
pub mod core;

// Constraint model, deduction rules and search
pub mod solver;

// Game driver and scorers
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
