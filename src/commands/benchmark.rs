//! Benchmark command
//!
//! Tests solver performance across a set of secrets.

use crate::core::Sequence;
use crate::game::{GameConfig, GameError, play_secret};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub won: usize,
    pub total_moves: usize,
    pub average_moves: f64,
    pub min_moves: usize,
    pub max_moves: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game per secret
///
/// # Errors
///
/// Returns the first game error encountered.
pub fn run_benchmark(
    secrets: &[Sequence],
    config: &GameConfig,
) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();
    let mut total_moves = 0;
    let mut won = 0;
    let mut min_moves = usize::MAX;
    let mut max_moves = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for &secret in secrets {
        let result = play_secret(secret, config)?;
        let moves = result.moves();

        total_moves += moves;
        won += usize::from(result.won);
        min_moves = min_moves.min(moves);
        max_moves = max_moves.max(moves);
        *distribution.entry(moves).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_games = secrets.len();

    Ok(BenchmarkResult {
        total_games,
        won,
        total_moves,
        average_moves: total_moves as f64 / total_games.max(1) as f64,
        min_moves: if total_games == 0 { 0 } else { min_moves },
        max_moves,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
