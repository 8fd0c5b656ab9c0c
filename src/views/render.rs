//! Text Rendering
//!
//! Draws chart data as plain text for the terminal: pie slices become
//! proportional bars, line series become a year-by-year table.

use chrono::{DateTime, Utc};
use std::fmt::Write;

use super::error::ViewError;
use crate::stats::{LineChart, PieSlice};

/// Width of a full-length bar, in cells
pub const BAR_WIDTH: usize = 30;

/// Bar scaled against `max`; any non-zero value gets at least one cell
pub fn bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }

    let cells = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

/// Numbered pie slices, one per line
pub fn pie_chart(slices: &[PieSlice<'_>]) -> String {
    if slices.is_empty() {
        return "  No countries to display\n".to_string();
    }

    let max = slices.iter().map(|s| s.entry.value).max().unwrap_or(0);
    let name_width = slices
        .iter()
        .map(|s| s.entry.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (idx, slice) in slices.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<name_width$}  {:<bar_width$}  {:>4} ({:.1}%)",
            idx + 1,
            slice.entry.name,
            bar(slice.entry.value, max, BAR_WIDTH),
            slice.entry.value,
            slice.share_percent,
            name_width = name_width,
            bar_width = BAR_WIDTH,
        );
    }
    out
}

/// One row per point, in series order
pub fn line_table(chart: &LineChart) -> String {
    if chart.series.is_empty() {
        return "  No participations recorded\n".to_string();
    }

    let max = chart.series.iter().map(|p| p.value).max().unwrap_or(0);

    let mut out = String::new();
    for point in &chart.series {
        let _ = writeln!(
            out,
            "  {:>6} │{:<bar_width$} {}",
            point.name,
            bar(point.value, max, BAR_WIDTH),
            point.value,
            bar_width = BAR_WIDTH,
        );
    }
    out
}

/// Boxed error message shown instead of charts
pub fn error_banner(err: &ViewError) -> String {
    let message = err.user_message();
    let width = message.chars().count() + 2;
    format!(
        "┌{line}┐\n│ {message} │\n└{line}┘\n",
        line = "─".repeat(width),
        message = message
    )
}

/// Footer line with the dataset load time
pub fn footer(loaded_at: Option<DateTime<Utc>>) -> String {
    loaded_at
        .map(|dt| format!("Last loaded: {}", dt.format("%H:%M:%S")))
        .unwrap_or_else(|| "Not loaded".to_string())
}

/// Underlined section title
pub fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}
