//! Navigation Routes
//!
//! Three destinations: the dashboard at the root, a country detail view at
//! `country/{id}`, and a not-found view for everything else. The id is kept
//! raw here; the detail view validates it so a bad id shows an error inside
//! that view instead of failing navigation.

use std::fmt;

use crate::model::CountryId;
use crate::stats::ChartSelection;

/// A navigation destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    CountryDetail(String),
    NotFound(String),
}

impl Route {
    /// Match a path against the route table
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_start_matches('/');

        if trimmed.is_empty() {
            return Route::Dashboard;
        }

        match trimmed.split_once('/') {
            Some(("country", id)) if !id.contains('/') => Route::CountryDetail(id.to_string()),
            _ => Route::NotFound(path.trim().to_string()),
        }
    }

    /// Route to a country's detail view
    pub fn country(id: CountryId) -> Self {
        Route::CountryDetail(id.to_string())
    }

    /// Where a chart selection leads, if anywhere
    pub fn from_selection(selection: &ChartSelection) -> Option<Self> {
        selection.country_id().map(Route::country)
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::CountryDetail(id) => format!("/country/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
