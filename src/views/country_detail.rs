//! Country Detail View
//!
//! Medals-per-edition line chart and totals for one country, reached via
//! `country/{id}`.

use std::fmt::Write;

use super::error::{ViewError, ViewState};
use super::render;
use crate::model::{Country, CountryId, DatasetState};
use crate::stats::{country_totals, line_chart, CountryTotals, LineChart};
use crate::store::{find_country, OlympicStore, Subscription};

/// Parse the raw path parameter into a country id
pub fn parse_country_id(raw: &str) -> Result<CountryId, ViewError> {
    raw.trim()
        .parse()
        .map_err(|_| ViewError::InvalidId(raw.to_string()))
}

/// Data behind a rendered country detail
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetailModel {
    pub country: Country,
    pub chart: LineChart,
    pub totals: CountryTotals,
}

impl CountryDetailModel {
    pub fn new(country: Country) -> Self {
        Self {
            chart: line_chart(&country),
            totals: country_totals(&country),
            country,
        }
    }
}

/// Detail view for a single country
pub struct CountryDetailView {
    id: Option<CountryId>,
    subscription: Option<Subscription<DatasetState>>,
    state: ViewState<CountryDetailModel>,
}

impl CountryDetailView {
    /// Validate the id, load the data, then look the country up
    ///
    /// An invalid id fails before the store is touched.
    pub async fn open(store: &OlympicStore, raw_id: &str) -> Self {
        let id = match parse_country_id(raw_id) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(raw_id = %raw_id, "Invalid country id");
                return Self::failed(None, err);
            }
        };

        if store.load().await.is_err() {
            return Self::failed(Some(id), ViewError::LoadFailed);
        }

        let mut view = Self {
            id: Some(id),
            subscription: Some(store.current()),
            state: ViewState::Loading,
        };
        view.refresh();
        view
    }

    fn failed(id: Option<CountryId>, err: ViewError) -> Self {
        Self {
            id,
            subscription: None,
            state: ViewState::Failed(err),
        }
    }

    /// Re-run the lookup for every dataset state published since the last refresh
    pub fn refresh(&mut self) -> bool {
        let (Some(id), Some(subscription)) = (self.id, self.subscription.as_mut()) else {
            return false;
        };

        let mut changed = false;
        while let Some(state) = subscription.try_recv() {
            self.state = match find_country(state.as_deref(), id) {
                Ok(country) => ViewState::Ready(CountryDetailModel::new(country)),
                Err(err) => {
                    tracing::debug!(country_id = id, error = %err, "Country lookup failed");
                    ViewState::Failed(err.into())
                }
            };
            changed = true;
        }
        changed
    }

    /// Requested id, if it was valid
    pub fn country_id(&self) -> Option<CountryId> {
        self.id
    }

    pub fn state(&self) -> &ViewState<CountryDetailModel> {
        &self.state
    }

    /// Whether this view still holds a store subscription
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        match &self.state {
            ViewState::Loading => {
                out.push_str(&render::heading("Country"));
                out.push_str("Loading...\n");
            }
            ViewState::Failed(err) => {
                out.push_str(&render::heading("Country"));
                out.push_str(&render::error_banner(err));
            }
            ViewState::Ready(model) => {
                let totals = model.totals;
                out.push_str(&render::heading(&model.country.country));
                let _ = writeln!(
                    out,
                    "Number of entries: {}    Total number of medals: {}    Total number of athletes: {}\n",
                    totals.number_of_entries, totals.total_medals, totals.total_athletes
                );
                out.push_str("Medals per edition\n");
                out.push_str(&render::line_table(&model.chart));
            }
        }

        out.push_str("\nType `back` to return to the dashboard.\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Participation;
    use crate::store::StaticSource;
    use std::sync::Arc;

    fn store() -> OlympicStore {
        OlympicStore::new(Arc::new(StaticSource::new(vec![
            Country::new(1, "France")
                .participation(Participation::new(2012, "London", 34, 100))
                .participation(Participation::new(2016, "Rio de Janeiro", 42, 110)),
            Country::new(2, "Italy").participation(Participation::new(2012, "London", 28, 90)),
        ])))
    }

    #[test]
    fn test_parse_country_id() {
        assert_eq!(parse_country_id("42"), Ok(42));
        assert_eq!(parse_country_id(" 7 "), Ok(7));
        assert_eq!(parse_country_id("abc"), Err(ViewError::InvalidId("abc".to_string())));
        assert_eq!(parse_country_id(""), Err(ViewError::InvalidId(String::new())));
        assert_eq!(parse_country_id("1.5"), Err(ViewError::InvalidId("1.5".to_string())));
        assert_eq!(parse_country_id("-1"), Ok(-1));
        assert_eq!(parse_country_id("4294967296"), Ok(4_294_967_296));
    }

    #[tokio::test]
    async fn test_open_found() {
        let store = store();
        let view = CountryDetailView::open(&store, "1").await;

        let model = view.state().model().unwrap();
        assert_eq!(model.country.country, "France");
        assert_eq!(
            model.totals,
            CountryTotals {
                number_of_entries: 2,
                total_medals: 76,
                total_athletes: 210,
            }
        );
        assert_eq!(model.chart.series.len(), 2);
    }

    #[tokio::test]
    async fn test_open_not_found() {
        let store = store();
        let view = CountryDetailView::open(&store, "99").await;

        assert_eq!(view.state().error(), Some(&ViewError::NotFound(99)));
        assert!(view.render().contains("Country with id 99 not found"));
    }

    #[tokio::test]
    async fn test_invalid_id_skips_store() {
        let store = store();
        let view = CountryDetailView::open(&store, "abc").await;

        assert_eq!(
            view.state().error(),
            Some(&ViewError::InvalidId("abc".to_string()))
        );
        assert!(store.snapshot().is_none());
        assert!(!view.is_subscribed());
        assert_eq!(store.observer_count(), 0);
    }

    #[tokio::test]
    async fn test_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = OlympicStore::new(crate::store::source_for(
            dir.path().join("missing.json").to_str().unwrap(),
        ));

        let view = CountryDetailView::open(&store, "1").await;
        assert_eq!(view.state().error(), Some(&ViewError::LoadFailed));
        assert_eq!(view.country_id(), Some(1));
    }

    #[tokio::test]
    async fn test_drop_releases_subscription() {
        let store = store();
        let view = CountryDetailView::open(&store, "2").await;
        assert_eq!(store.observer_count(), 1);

        drop(view);
        assert_eq!(store.observer_count(), 0);
    }

    #[tokio::test]
    async fn test_render_ready() {
        let store = store();
        let text = CountryDetailView::open(&store, "1").await.render();

        assert!(text.starts_with("France\n======\n"));
        assert!(text.contains("Number of entries: 2"));
        assert!(text.contains("Total number of medals: 76"));
        assert!(text.contains("Total number of athletes: 210"));
        assert!(text.contains("2016"));
    }
}
