//! Formatting utilities for terminal output

use crate::core::{Feedback, POSITIONS, Sequence};
use colored::{Color, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Terminal color for a peg color
#[must_use]
pub const fn peg_color(color: u8) -> Color {
    match color {
        0 => Color::Blue,
        1 => Color::Green,
        2 => Color::Magenta,
        3 => Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        4 => Color::Yellow,
        5 => Color::TrueColor {
            r: 255,
            g: 105,
            b: 180,
        },
        _ => Color::White,
    }
}

/// Format feedback as peg letters: whites, then reds, then `-` for unmatched
#[must_use]
pub fn peg_string(feedback: Feedback) -> String {
    let mut result = String::with_capacity(POSITIONS);
    result.push_str(&"W".repeat(feedback.white()));
    result.push_str(&"R".repeat(feedback.red()));
    result.push_str(&"-".repeat(feedback.none()));
    result
}

/// Peg letters with white pegs bold and red pegs red
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    format!(
        "{}{}{}",
        "W".repeat(feedback.white()).bright_white().bold(),
        "R".repeat(feedback.red()).red().bold(),
        "-".repeat(feedback.none()).bright_black()
    )
}

/// Sequence digits, each in its peg color
#[must_use]
pub fn sequence_colored(sequence: &Sequence) -> String {
    sequence
        .pegs()
        .iter()
        .map(|&peg| peg.to_string().color(peg_color(peg)).bold().to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for long runs over many games
#[must_use]
pub fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}
