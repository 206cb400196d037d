//! Interactive play mode
//!
//! The human holds the secret and scores each guess the solver proposes.

use crate::core::{COLOR_NAMES, POSITIONS};
use crate::game::{Game, GameConfig, GameError, GameResult, Scorer};
use crate::output::formatters::{feedback_pegs, sequence_colored};
use colored::Colorize;

/// Candidates are listed once this few remain
const SHOW_CANDIDATES: usize = 10;

/// Run an interactive game with `scorer` answering every guess
///
/// # Errors
///
/// Returns an error if the scorer fails or the feedback given is inconsistent
/// (no secret matches all of it).
pub fn run_play<S: Scorer + ?Sized>(
    config: &GameConfig,
    scorer: &mut S,
) -> Result<GameResult, GameError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Mastermind Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a secret of {POSITIONS} pegs from these colors:");
    for (value, name) in COLOR_NAMES.iter().enumerate() {
        println!("  {value} = {name}");
    }
    println!("\nAfter each guess, enter the feedback:");
    println!("  - one 'w' per peg with the right color in the right position");
    println!("  - one 'r' per peg with the right color in the wrong position");
    println!("  - an empty line if nothing matched\n");

    let mut game = Game::new(config.clone());

    while !game.is_over() {
        let turn = game.history().len() + 1;
        let candidates = game.candidates();

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}/{}: {} candidates remaining",
            config.max_moves,
            candidates.len()
        );
        println!("────────────────────────────────────────────────────────────");

        if candidates.len() <= SHOW_CANDIDATES {
            for candidate in candidates {
                println!("  • {}", sequence_colored(candidate));
            }
        }

        game.step(scorer)?;

        if let Some(last) = game.history().last() {
            println!(
                "  {} {}\n",
                sequence_colored(&last.guess),
                feedback_pegs(last.feedback)
            );
        }
    }

    let result = game.result();
    if result.won {
        println!(
            "{}",
            format!("✅ Solved in {} moves!", result.moves()).green().bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Not solved in {} moves ({} candidates were left)",
                result.moves(),
                result.solutions_count
            )
            .red()
            .bold()
        );
    }
    Ok(result)
}
