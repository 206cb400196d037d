//! Test all secrets - comprehensive solver evaluation
//!
//! Plays a game against every possible secret and generates statistics.

use crate::core::{Feedback, Sequence};
use crate::game::{GameConfig, GameError, GameResult, play_secret};
use crate::output::formatters::{progress_bar, sequence_colored};
use colored::Colorize;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// A game that ran out of moves
#[derive(Debug, Clone)]
pub struct LostGame {
    pub secret: Sequence,
    pub moves: Vec<Sequence>,
    /// Games (this one included) that saw the same feedback before their last guess
    pub shared_history: usize,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_games: usize,
    pub won: usize,
    pub lost: Vec<LostGame>,
    pub moves_distribution: FxHashMap<usize, usize>,
    /// How many games ended deduction with each candidate count
    pub solutions_histogram: FxHashMap<usize, usize>,
    /// Chance of winning when picking uniformly among the final candidates
    pub expected_win_rate: f64,
    pub average_moves: f64,
    pub total_time: Duration,
}

/// Play every secret (or the first `limit`) in parallel
///
/// With `audit`, each game verifies its constraints against its own secret.
///
/// # Errors
///
/// Returns a game error if any game fails.
pub fn run_test_all(
    config: &GameConfig,
    limit: Option<usize>,
    audit: bool,
) -> Result<TestAllStatistics, GameError> {
    let secrets: Vec<Sequence> = Sequence::all().take(limit.unwrap_or(usize::MAX)).collect();

    println!("🎯 Testing {} secrets...", secrets.len());
    let pb = progress_bar(secrets.len() as u64);
    let total_start = Instant::now();

    let results: Vec<(Sequence, GameResult)> = secrets
        .par_iter()
        .map(|&secret| {
            let config = config.clone().with_audit(audit.then_some(secret));
            let result = play_secret(secret, &config);
            pb.inc(1);
            result.map(|r| (secret, r))
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, total_start.elapsed()))
}

fn summarize(results: &[(Sequence, GameResult)], total_time: Duration) -> TestAllStatistics {
    let mut moves_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut solutions_histogram: FxHashMap<usize, usize> = FxHashMap::default();
    let mut histories: FxHashMap<Vec<Feedback>, usize> = FxHashMap::default();

    for (_, result) in results {
        *moves_distribution.entry(result.moves()).or_insert(0) += 1;
        *solutions_histogram.entry(result.solutions_count).or_insert(0) += 1;
        *histories.entry(feedback_before_last(result)).or_insert(0) += 1;
    }

    let lost = results
        .iter()
        .filter(|(_, result)| !result.won)
        .map(|(secret, result)| LostGame {
            secret: *secret,
            moves: result.history.iter().map(|turn| turn.guess).collect(),
            shared_history: histories
                .get(&feedback_before_last(result))
                .copied()
                .unwrap_or(0),
        })
        .collect::<Vec<_>>();

    let total_games = results.len();
    let total_moves: usize = results.iter().map(|(_, r)| r.moves()).sum();

    TestAllStatistics {
        total_games,
        won: total_games - lost.len(),
        lost,
        expected_win_rate: expected_win_rate(&solutions_histogram, total_games),
        moves_distribution,
        solutions_histogram,
        average_moves: total_moves as f64 / total_games.max(1) as f64,
        total_time,
    }
}

fn feedback_before_last(result: &GameResult) -> Vec<Feedback> {
    let mut feedback: Vec<Feedback> = result.history.iter().map(|turn| turn.feedback).collect();
    feedback.pop();
    feedback
}

/// `sum(games / candidates) / total`: each game that ended with `k` candidates is
/// won with probability `1/k` by a uniform pick
#[must_use]
pub fn expected_win_rate(solutions_histogram: &FxHashMap<usize, usize>, total_games: usize) -> f64 {
    if total_games == 0 {
        return 0.0;
    }
    let expected: f64 = solutions_histogram
        .iter()
        .filter(|&(&candidates, _)| candidates > 0)
        .map(|(&candidates, &games)| games as f64 / candidates as f64)
        .sum();
    expected / total_games as f64
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_games.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total games:         {}", stats.total_games);
    println!(
        "  Won:                 {} {}",
        stats.won,
        format!("({:.1}%)", stats.won as f64 / total * 100.0).green()
    );
    if !stats.lost.is_empty() {
        println!(
            "  Lost:                {} {}",
            stats.lost.len(),
            format!("({:.1}%)", stats.lost.len() as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average moves:       {}",
        format!("{:.3}", stats.average_moves).bright_yellow().bold()
    );
    println!(
        "  Expected win rate:   {:.1}%",
        stats.expected_win_rate * 100.0
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per game:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Moves Distribution".bright_cyan().bold());
    let max_count = stats.moves_distribution.values().copied().max().unwrap_or(1);
    let mut moves: Vec<_> = stats.moves_distribution.iter().collect();
    moves.sort_unstable();
    for (&move_count, &count) in moves {
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!(
            "  {move_count} moves: {bar} {count:4} ({:5.1}%)",
            count as f64 / total * 100.0
        );
    }

    println!("\n🧮 {}", "Final Candidates".bright_cyan().bold());
    let mut solutions: Vec<_> = stats.solutions_histogram.iter().collect();
    solutions.sort_unstable_by_key(|&(&candidates, &games)| (std::cmp::Reverse(games), candidates));
    for (candidates, games) in solutions {
        println!("  {candidates:3} candidates: {games} games");
    }

    if !stats.lost.is_empty() {
        println!("\n😰 {}", "Lost Games".yellow().bold());
        for game in stats.lost.iter().take(10) {
            let moves = game
                .moves
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            println!(
                "  {} after {moves} ({} games share this feedback)",
                sequence_colored(&game.secret),
                game.shared_history
            );
        }
    }
}
