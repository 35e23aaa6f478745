//! Formatting utilities for terminal output

use crate::core::word_length;

/// Format a score with an explicit sign
#[must_use]
pub fn format_score(score: i64) -> String {
    if score > 0 {
        format!("+{score}")
    } else {
        score.to_string()
    }
}

/// Letter-count badge shown next to a found word
#[must_use]
pub fn length_badge(word: &str) -> String {
    format!("({})", word_length(word))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
