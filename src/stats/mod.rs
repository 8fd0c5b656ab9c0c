//! Statistics and Chart Data
//!
//! Side-effect-free transformations from the raw dataset to the structures
//! the views render:
//!
//! - **summary**: Global summary, dashboard entries, per-country series and totals
//! - **chart**: Pie slices, line charts, typed selection events, tooltips
//!
//! Empty input is never an error: it yields zero totals and empty sequences.

pub mod chart;
pub mod summary;

pub use chart::{
    line_chart, pie_slices, tooltip_text, ChartSelection, LineChart, LinePoint, LineSelection,
    PieSelection, PieSlice,
};
pub use summary::{
    country_series, country_totals, dashboard_entries, global_summary, CountryTotals,
    DashboardEntry, GlobalSummary, SeriesPoint,
};
