//! Dashboard View
//!
//! Medals-per-country pie chart with global totals. Selecting a slice
//! drills into that country's detail view.

use std::fmt::Write;
use std::sync::Arc;

use super::error::{ViewError, ViewState};
use super::render;
use crate::model::{Dataset, DatasetState};
use crate::stats::{
    dashboard_entries, global_summary, pie_slices, ChartSelection, DashboardEntry, GlobalSummary,
};
use crate::store::{OlympicStore, Subscription};

/// Data behind a rendered dashboard
#[derive(Debug, Clone)]
pub struct DashboardModel {
    dataset: Arc<Dataset>,
    summary: GlobalSummary,
}

impl DashboardModel {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let summary = global_summary(dataset.countries());
        Self { dataset, summary }
    }

    pub fn summary(&self) -> GlobalSummary {
        self.summary
    }

    /// Pie entries, recomputed from the dataset
    pub fn entries(&self) -> Vec<DashboardEntry<'_>> {
        dashboard_entries(self.dataset.countries())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

/// Global dashboard
pub struct DashboardView {
    subscription: Subscription<DatasetState>,
    state: ViewState<DashboardModel>,
}

impl DashboardView {
    /// Subscribe to the store and trigger a load
    pub async fn open(store: &OlympicStore) -> Self {
        let mut view = Self {
            subscription: store.current(),
            state: ViewState::Loading,
        };

        let loaded = store.load().await;
        view.refresh();

        if loaded.is_err() {
            view.state = ViewState::Failed(ViewError::LoadFailed);
        }

        view
    }

    /// Apply every dataset state published since the last refresh
    ///
    /// Returns true if anything was applied.
    pub fn refresh(&mut self) -> bool {
        let mut changed = false;
        while let Some(state) = self.subscription.try_recv() {
            self.apply(state);
            changed = true;
        }
        changed
    }

    fn apply(&mut self, state: DatasetState) {
        match state {
            Some(dataset) => {
                self.state = ViewState::Ready(DashboardModel::new(dataset));
            }
            None => {
                // Initial "absent" keeps the spinner; losing data after a failed reload does not
                if self.state.model().is_some() {
                    self.state = ViewState::Failed(ViewError::LoadFailed);
                }
            }
        }
    }

    pub fn state(&self) -> &ViewState<DashboardModel> {
        &self.state
    }

    /// Selection event for the slice at `index` (0-based)
    pub fn select(&self, index: usize) -> Option<ChartSelection> {
        let model = self.state.model()?;
        model.entries().get(index).map(ChartSelection::pie)
    }

    pub fn render(&self) -> String {
        let mut out = render::heading("Medals per Country");

        match &self.state {
            ViewState::Loading => out.push_str("Loading...\n"),
            ViewState::Failed(err) => out.push_str(&render::error_banner(err)),
            ViewState::Ready(model) => {
                let summary = model.summary();
                let _ = writeln!(
                    out,
                    "Number of Olympic Games: {}    Number of countries: {}\n",
                    summary.total_editions, summary.total_countries
                );
                out.push_str(&render::pie_chart(&pie_slices(&model.entries())));
                out.push_str("\nSelect a country by number to see its details.\n");
            }
        }

        let loaded_at = self.state.model().map(|m| m.dataset().loaded_at());
        let _ = writeln!(out, "\n{}", render::footer(loaded_at));
        out
    }
}
