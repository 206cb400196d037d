//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs, peg_string, sequence_colored};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::SEQUENCE_COUNT;
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({})",
        sequence_colored(&result.secret),
        result.secret.names()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            sequence_colored(&step.guess),
            feedback_pegs(step.feedback)
        );

        if verbose {
            println!("  Phase:      {:?}", step.phase);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} moves!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Failed to solve in {} moves ({} candidates left)",
                result.steps.len(),
                result.solutions_count
            )
            .red()
            .bold()
        );
    }
}

/// Print the feedback histogram of a sequence
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FEEDBACK ANALYSIS:".bright_cyan().bold(),
        sequence_colored(&result.sequence)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {SEQUENCE_COUNT} possible secrets:");
    let max_count = result.histogram.first().map_or(1, |&(_, count)| count);
    for &(feedback, count) in &result.histogram {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!("   {} [{}] {count:4}", peg_string(feedback), bar.green());
    }
    println!(
        "\n   Average score: {} (white = 2, red = 1)",
        format!("{:.3}", result.average_score).bright_yellow()
    );

    if let Some((second, deltas)) = &result.deltas {
        println!(
            "\n📈 Score change {} → {}:",
            sequence_colored(&result.sequence),
            sequence_colored(second)
        );
        for (delta, count) in deltas {
            println!("   {delta} {count:4}");
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total = result.total_games.max(1) as f64;

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Won:              {} ({:.1}%)",
        result.won,
        result.won as f64 / total * 100.0
    );
    println!(
        "   Average moves:    {}",
        format!("{:.2}", result.average_moves).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_moves).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_moves).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for move_count in 1..=result.max_moves {
        if let Some(&count) = result.distribution.get(&move_count) {
            let pct = (count as f64 / total) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {move_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
