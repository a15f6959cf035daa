//! Formatting utilities for terminal output

/// Letters separated by spaces
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        width
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score progress toward the maximum as a bar
#[must_use]
pub fn rank_progress_bar(score: u32, max_score: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(max_score), width)
}

/// Marker shown beside a word in listings
#[must_use]
pub const fn pangram_marker(is_pangram: bool, is_perfect: bool) -> &'static str {
    match (is_pangram, is_perfect) {
        (true, true) => "★",
        (true, false) => "☆",
        _ => "",
    }
}
