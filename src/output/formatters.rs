//! Formatting utilities for terminal output

use crate::core::{Feedback, Tile};

/// Format feedback as an emoji tile row
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    let mut result = String::with_capacity(20);

    for tile in feedback.tiles() {
        result.push(match tile {
            Tile::Hit => '🟩',
            Tile::Present => '🟨',
            Tile::Absent => '⬛',
        });
    }

    result
}

/// Create a progress bar string scaled to `max`
#[must_use]
pub fn ratio_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
