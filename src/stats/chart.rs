//! Chart Data
//!
//! Chart-ready structures handed to the renderer, and the selection events
//! it hands back. Each chart kind has its own typed selection.

use serde::Serialize;

use super::summary::{country_series, DashboardEntry};
use crate::model::{Country, CountryId};

/// A dashboard entry with its share of the whole pie
#[derive(Debug, Clone, Serialize)]
pub struct PieSlice<'a> {
    #[serde(flatten)]
    pub entry: DashboardEntry<'a>,
    /// Percentage of all medals, 0.0 when the pie is empty
    pub share_percent: f64,
}

/// Compute each entry's share of the total
pub fn pie_slices<'a>(entries: &[DashboardEntry<'a>]) -> Vec<PieSlice<'a>> {
    let total: u64 = entries.iter().map(|e| e.value).sum();

    entries
        .iter()
        .map(|entry| PieSlice {
            entry: entry.clone(),
            share_percent: share_percent(entry.value, total),
        })
        .collect()
}

fn share_percent(value: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 * 100.0 / total as f64
    }
}

/// A single named line series
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineChart {
    /// Series name (the country)
    pub name: String,
    pub series: Vec<LinePoint>,
}

/// One labelled point of a line series
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinePoint {
    /// X-axis label (the edition year)
    pub name: String,
    pub value: u64,
}

/// Medals-per-edition line chart for one country
pub fn line_chart(country: &Country) -> LineChart {
    LineChart {
        name: country.country.clone(),
        series: country_series(country)
            .into_iter()
            .map(|p| LinePoint {
                name: p.year.to_string(),
                value: u64::from(p.medals_count),
            })
            .collect(),
    }
}

/// Selection event emitted by a chart
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSelection {
    Pie(PieSelection),
    Line(LineSelection),
}

/// A pie slice was selected
#[derive(Debug, Clone, PartialEq)]
pub struct PieSelection {
    pub name: String,
    pub value: u64,
    /// Country the slice was built from
    pub country_id: CountryId,
}

/// A point on a line series was selected
#[derive(Debug, Clone, PartialEq)]
pub struct LineSelection {
    pub name: String,
    pub value: u64,
}

impl ChartSelection {
    /// Selection for a dashboard entry
    pub fn pie(entry: &DashboardEntry<'_>) -> Self {
        ChartSelection::Pie(PieSelection {
            name: entry.name.to_string(),
            value: entry.value,
            country_id: entry.country_id(),
        })
    }

    /// Selection for a line point
    pub fn line(point: &LinePoint) -> Self {
        ChartSelection::Line(LineSelection {
            name: point.name.clone(),
            value: point.value,
        })
    }

    /// Country to drill into, if the selection leads anywhere
    pub fn country_id(&self) -> Option<CountryId> {
        match self {
            ChartSelection::Pie(pie) => Some(pie.country_id),
            ChartSelection::Line(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ChartSelection::Pie(pie) => &pie.name,
            ChartSelection::Line(line) => &line.name,
        }
    }

    pub fn value(&self) -> u64 {
        match self {
            ChartSelection::Pie(pie) => pie.value,
            ChartSelection::Line(line) => line.value,
        }
    }
}

/// Tooltip shown when hovering a slice or point
pub fn tooltip_text(name: &str, value: u64) -> String {
    format!("{}\n🏅 {}", name, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Participation;
    use crate::stats::dashboard_entries;

    fn countries() -> Vec<Country> {
        vec![
            Country::new(1, "France")
                .participation(Participation::new(2012, "London", 34, 100))
                .participation(Participation::new(2016, "Rio de Janeiro", 42, 110)),
            Country::new(2, "Italy").participation(Participation::new(2012, "London", 28, 90)),
        ]
    }

    #[test]
    fn test_pie_slices_share() {
        let countries = countries();
        let slices = pie_slices(&dashboard_entries(&countries));

        let total: f64 = slices.iter().map(|s| s.share_percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!((slices[0].share_percent - 76.0 * 100.0 / 104.0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_slices_all_zero() {
        let countries = vec![Country::new(1, "A"), Country::new(2, "B")];
        let slices = pie_slices(&dashboard_entries(&countries));

        assert!(slices.iter().all(|s| s.share_percent == 0.0));
    }

    #[test]
    fn test_line_chart() {
        let chart = line_chart(&countries()[0]);

        assert_eq!(chart.name, "France");
        assert_eq!(
            chart.series,
            vec![
                LinePoint { name: "2012".to_string(), value: 34 },
                LinePoint { name: "2016".to_string(), value: 42 },
            ]
        );
    }

    #[test]
    fn test_pie_selection_targets_country() {
        let countries = countries();
        let entries = dashboard_entries(&countries);

        let selection = ChartSelection::pie(&entries[1]);
        assert_eq!(selection.country_id(), Some(2));
        assert_eq!(selection.name(), "Italy");
        assert_eq!(selection.value(), 28);
    }

    #[test]
    fn test_line_selection_has_no_target() {
        let chart = line_chart(&countries()[0]);
        let selection = ChartSelection::line(&chart.series[0]);

        assert_eq!(selection.country_id(), None);
        assert_eq!(selection.name(), "2012");
    }

    #[test]
    fn test_tooltip_text() {
        assert_eq!(tooltip_text("Italy", 96), "Italy\n🏅 96");
    }
}
