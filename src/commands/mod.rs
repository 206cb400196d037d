//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;
pub mod test_all;

pub use analyze::{
    AnalysisResult, analyze_sequence, average_score, delta_histogram, feedback_histogram,
};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use solve::{GuessStep, SolveResult, solve_secret};
pub use test_all::{
    LostGame, TestAllStatistics, expected_win_rate, print_test_all_statistics, run_test_all,
};
