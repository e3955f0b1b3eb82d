//! Report formatting utilities for terminal output

use crate::models::Money;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[92m";
const RESET: &str = "\x1b[0m";

/// Wrap text in the terminal's bright green
pub fn green(text: &str) -> String {
    format!("{}{}{}", GREEN, text, RESET)
}

/// Format an amount with its symbol, in red when negative
pub fn format_money_colored(amount: Money, symbol: &str) -> String {
    let text = amount.format_with_symbol(symbol);
    if amount.is_negative() {
        format!("{}{}{}", RED, text, RESET)
    } else {
        text
    }
}

/// Format a percentage with one decimal place, right-aligned to `width`
pub fn format_percentage(pct: f64, width: usize) -> String {
    format!("{:>width$.1}%", pct, width = width)
}

/// Create a simple bar representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
