//! Text pie chart
//!
//! Draws the month's distribution as a single proportional strip with a
//! legend. Slices are "Remaining" plus each category's share of the budget,
//! normalized so the strip always sums to its full width.

use crate::reports::MonthlySummary;

use super::report::{format_bar, format_percentage};

/// Width of the proportional strip in terminal cells
pub const CHART_WIDTH: usize = 60;

const GLYPHS: [char; 13] = [
    '░', '█', '▓', '▒', '■', '●', '◆', '▲', '★', '◼', '◉', '▪', '◍',
];

/// One labelled slice of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub glyph: char,
    /// Normalized share in percent
    pub share: f64,
    pub cells: usize,
}

/// Compute the chart slices for a summary
///
/// The remaining slice is clamped at zero; an overspent month is drawn from
/// the category slices alone.
pub fn slices(summary: &MonthlySummary, width: usize) -> Vec<Slice> {
    let mut raw: Vec<(String, f64)> =
        vec![("Remaining".to_string(), summary.remaining_percent.max(0.0))];
    raw.extend(summary.categories.iter().map(|c| {
        (
            format!("{} {}", c.category.emoji(), c.category.name()),
            c.percent_of_budget.max(0.0),
        )
    }));

    let sum: f64 = raw.iter().map(|(_, v)| v).sum();
    if sum <= 0.0 {
        return Vec::new();
    }

    let fractions: Vec<f64> = raw.iter().map(|(_, v)| v / sum).collect();
    let cells = allocate_cells(&fractions, width);

    raw.into_iter()
        .zip(cells)
        .enumerate()
        .map(|(i, ((label, value), cells))| Slice {
            label,
            glyph: GLYPHS[i % GLYPHS.len()],
            share: value * 100.0 / sum,
            cells,
        })
        .collect()
}

/// Distribute `width` cells over fractional shares (largest remainder)
pub fn allocate_cells(shares: &[f64], width: usize) -> Vec<usize> {
    let exact: Vec<f64> = shares.iter().map(|s| s * width as f64).collect();
    let mut cells: Vec<usize> = exact.iter().map(|e| e.floor() as usize).collect();

    let assigned: usize = cells.iter().sum();
    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
    });

    for &i in order.iter().take(width.saturating_sub(assigned)) {
        cells[i] += 1;
    }

    cells
}

/// Render the chart, or a notice when there is nothing to draw
pub fn render_pie_chart(summary: &MonthlySummary) -> String {
    let slices = slices(summary, CHART_WIDTH);
    if slices.is_empty() {
        return "Nothing to chart.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "\nMonthly Expense Distribution - {}\n\n",
        summary.month.friendly()
    ));

    output.push('[');
    for slice in &slices {
        output.extend(std::iter::repeat(slice.glyph).take(slice.cells));
    }
    output.push_str("]\n\n");

    for slice in &slices {
        output.push_str(&format!(
            "  {} {:<18} {} {}\n",
            slice.glyph,
            slice.label,
            format_percentage(slice.share, 5),
            format_bar(slice.share, 100.0, 20)
        ));
    }

    output
}
