//! Dataset Statistics
//!
//! Pure functions deriving view-model structures from a loaded dataset or a
//! single country. Nothing here is cached; callers recompute on every
//! published dataset.

use serde::Serialize;
use std::collections::HashSet;

use crate::model::{Country, CountryId};

/// Totals across the whole dataset
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSummary {
    /// Number of countries
    pub total_countries: usize,
    /// Number of distinct Games editions (unique years)
    pub total_editions: usize,
}

/// One slice of the dashboard pie chart
#[derive(Debug, Clone, Serialize)]
pub struct DashboardEntry<'a> {
    /// Country display name
    pub name: &'a str,
    /// Medals summed over every participation
    pub value: u64,
    /// Originating record, kept for navigation
    #[serde(skip)]
    pub country: &'a Country,
}

impl DashboardEntry<'_> {
    pub fn country_id(&self) -> CountryId {
        self.country.id
    }
}

/// One point of a country's medal trend
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub year: i32,
    pub medals_count: u32,
}

/// Per-country totals shown on the detail view
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CountryTotals {
    /// Number of participations
    pub number_of_entries: usize,
    pub total_medals: u64,
    pub total_athletes: u64,
}

/// Count countries and distinct edition years
pub fn global_summary(countries: &[Country]) -> GlobalSummary {
    let years: HashSet<i32> = countries
        .iter()
        .flat_map(|c| c.participations.iter().map(|p| p.year))
        .collect();

    GlobalSummary {
        total_countries: countries.len(),
        total_editions: years.len(),
    }
}

/// One pie entry per country, in dataset order
pub fn dashboard_entries(countries: &[Country]) -> Vec<DashboardEntry<'_>> {
    countries
        .iter()
        .map(|country| DashboardEntry {
            name: &country.country,
            value: total_medals(country),
            country,
        })
        .collect()
}

/// Medal counts by year, in participation order (not re-sorted)
pub fn country_series(country: &Country) -> Vec<SeriesPoint> {
    country
        .participations
        .iter()
        .map(|p| SeriesPoint {
            year: p.year,
            medals_count: p.medals_count,
        })
        .collect()
}

/// Entry count and medal/athlete sums for one country
pub fn country_totals(country: &Country) -> CountryTotals {
    CountryTotals {
        number_of_entries: country.participations.len(),
        total_medals: total_medals(country),
        total_athletes: country
            .participations
            .iter()
            .map(|p| u64::from(p.athlete_count))
            .sum(),
    }
}

fn total_medals(country: &Country) -> u64 {
    country
        .participations
        .iter()
        .map(|p| u64::from(p.medals_count))
        .sum()
}
