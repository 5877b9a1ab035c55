//! Formatting utilities for terminal output

/// Format one ladder rung as `WORD (distance)`
#[must_use]
pub fn format_rung(word: &str, distance: usize) -> String {
    format!("{} ({distance})", word.to_uppercase())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how close a rung is to the goal; full means the goal itself
#[must_use]
pub fn closeness_bar(distance: usize, word_length: usize, width: usize) -> String {
    let remaining = word_length.saturating_sub(distance);
    create_progress_bar(remaining as f64, word_length as f64, width)
}
