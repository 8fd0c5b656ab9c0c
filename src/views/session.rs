//! Navigation Session
//!
//! The explicit context for one run of the dashboard: it owns the shared
//! store and the active view. Navigating always tears the current view down
//! first, which releases its store subscription, before the next view opens.

use std::sync::Arc;

use super::country_detail::CountryDetailView;
use super::dashboard::DashboardView;
use super::not_found::NotFoundView;
use super::router::Route;
use crate::store::OlympicStore;

/// The view currently on screen
pub enum ActiveView {
    Dashboard(DashboardView),
    CountryDetail(CountryDetailView),
    NotFound(NotFoundView),
}

impl ActiveView {
    pub fn name(&self) -> &'static str {
        match self {
            ActiveView::Dashboard(_) => "dashboard",
            ActiveView::CountryDetail(_) => "country-detail",
            ActiveView::NotFound(_) => "not-found",
        }
    }

    /// Apply pending store publications
    pub fn refresh(&mut self) -> bool {
        match self {
            ActiveView::Dashboard(view) => view.refresh(),
            ActiveView::CountryDetail(view) => view.refresh(),
            ActiveView::NotFound(_) => false,
        }
    }

    pub fn render(&self) -> String {
        match self {
            ActiveView::Dashboard(view) => view.render(),
            ActiveView::CountryDetail(view) => view.render(),
            ActiveView::NotFound(view) => view.render(),
        }
    }
}

/// One dashboard session over a shared store
pub struct Session {
    store: Arc<OlympicStore>,
    route: Option<Route>,
    view: Option<ActiveView>,
}

impl Session {
    /// Start a session; no view is open until the first navigation
    pub fn new(store: Arc<OlympicStore>) -> Self {
        tracing::debug!(source = %store.source_location(), "Session started");
        Self {
            store,
            route: None,
            view: None,
        }
    }

    pub fn store(&self) -> &OlympicStore {
        &self.store
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn view(&self) -> Option<&ActiveView> {
        self.view.as_ref()
    }

    /// Navigate to a path
    pub async fn navigate(&mut self, path: &str) -> &ActiveView {
        self.open(Route::parse(path)).await
    }

    /// Tear down the current view and open the one for `route`
    pub async fn open(&mut self, route: Route) -> &ActiveView {
        self.teardown();

        tracing::info!(route = %route, "Navigating");

        let view = match &route {
            Route::Dashboard => ActiveView::Dashboard(DashboardView::open(&self.store).await),
            Route::CountryDetail(raw_id) => {
                ActiveView::CountryDetail(CountryDetailView::open(&self.store, raw_id).await)
            }
            Route::NotFound(path) => ActiveView::NotFound(NotFoundView::new(path.clone())),
        };

        self.route = Some(route);
        self.view.insert(view)
    }

    /// Follow the dashboard slice at `index` (0-based)
    ///
    /// Returns `None`, leaving the current view in place, when the dashboard
    /// is not showing or has no such slice.
    pub async fn select(&mut self, index: usize) -> Option<&ActiveView> {
        let route = match &self.view {
            Some(ActiveView::Dashboard(dashboard)) => {
                let selection = dashboard.select(index)?;
                tracing::debug!(country = %selection.name(), value = selection.value(), "Slice selected");
                Route::from_selection(&selection)?
            }
            _ => return None,
        };

        Some(self.open(route).await)
    }

    /// Return to the dashboard
    pub async fn back(&mut self) -> &ActiveView {
        self.open(Route::Dashboard).await
    }

    /// Re-open the current route, fetching the data again
    pub async fn reload(&mut self) -> &ActiveView {
        let route = self.route.clone().unwrap_or(Route::Dashboard);
        self.open(route).await
    }

    /// Apply store publications to the active view
    pub fn refresh(&mut self) -> bool {
        self.view.as_mut().map(ActiveView::refresh).unwrap_or(false)
    }

    /// Render the active view
    pub fn render(&self) -> String {
        self.view.as_ref().map(ActiveView::render).unwrap_or_default()
    }

    /// End the session, releasing the active view
    pub fn close(mut self) {
        self.teardown();
        tracing::debug!("Session closed");
    }

    fn teardown(&mut self) {
        if let Some(view) = self.view.take() {
            tracing::debug!(view = view.name(), "Tearing down view");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Country, Participation};
    use crate::stats::{dashboard_entries, global_summary, CountryTotals, GlobalSummary};
    use crate::store::StaticSource;
    use crate::views::ViewError;

    fn session() -> Session {
        let store = OlympicStore::new(Arc::new(StaticSource::new(vec![
            Country::new(1, "France")
                .participation(Participation::new(2012, "London", 34, 100))
                .participation(Participation::new(2016, "Rio de Janeiro", 42, 110)),
            Country::new(2, "Italy").participation(Participation::new(2012, "London", 28, 90)),
        ])));
        Session::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_end_to_end_dashboard() {
        let mut session = session();

        let view = session.navigate("/").await;
        let ActiveView::Dashboard(dashboard) = view else {
            panic!("expected dashboard, got {}", view.name());
        };

        let model = dashboard.state().model().unwrap();
        assert_eq!(
            global_summary(model.dataset().countries()),
            GlobalSummary {
                total_countries: 2,
                total_editions: 2,
            }
        );
        let pairs: Vec<(&str, u64)> = dashboard_entries(model.dataset().countries())
            .iter()
            .map(|e| (e.name, e.value))
            .collect();
        assert_eq!(pairs, vec![("France", 76), ("Italy", 28)]);
    }

    #[tokio::test]
    async fn test_select_drills_into_country() {
        let mut session = session();
        session.navigate("/").await;

        let view = session.select(0).await.unwrap();
        let ActiveView::CountryDetail(detail) = view else {
            panic!("expected country detail, got {}", view.name());
        };
        assert_eq!(
            detail.state().model().unwrap().totals,
            CountryTotals {
                number_of_entries: 2,
                total_medals: 76,
                total_athletes: 210,
            }
        );
        assert_eq!(session.route(), Some(&Route::country(1)));
    }

    #[tokio::test]
    async fn test_select_outside_dashboard() {
        let mut session = session();
        session.navigate("/country/1").await;

        assert!(session.select(0).await.is_none());
        assert_eq!(session.route(), Some(&Route::country(1)));
    }

    #[tokio::test]
    async fn test_unknown_country_is_recovered() {
        let mut session = session();

        let view = session.navigate("country/99").await;
        let ActiveView::CountryDetail(detail) = view else {
            panic!("expected country detail, got {}", view.name());
        };
        assert_eq!(detail.state().error(), Some(&ViewError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_out_of_range_ids_are_lookups() {
        let mut session = session();

        for (raw, id) in [("country/-1", -1), ("country/4294967296", 4_294_967_296)] {
            let view = session.navigate(raw).await;
            let ActiveView::CountryDetail(detail) = view else {
                panic!("expected country detail, got {}", view.name());
            };
            assert_eq!(detail.state().error(), Some(&ViewError::NotFound(id)));
            assert!(view.render().contains(&format!("Country with id {} not found", id)));
        }
    }

    #[tokio::test]
    async fn test_open_country_route_with_raw_id() {
        let mut session = session();

        let view = session.open(Route::CountryDetail("1/2".to_string())).await;
        let ActiveView::CountryDetail(detail) = view else {
            panic!("expected country detail, got {}", view.name());
        };
        assert_eq!(
            detail.state().error(),
            Some(&ViewError::InvalidId("1/2".to_string()))
        );
    }

    #[tokio::test]
    async fn test_invalid_id_before_lookup() {
        let mut session = session();

        let view = session.navigate("country/abc").await;
        let ActiveView::CountryDetail(detail) = view else {
            panic!("expected country detail, got {}", view.name());
        };
        assert_eq!(
            detail.state().error(),
            Some(&ViewError::InvalidId("abc".to_string()))
        );
        assert!(session.store().snapshot().is_none());
    }

    #[tokio::test]
    async fn test_unmatched_path() {
        let mut session = session();
        let view = session.navigate("/medals/2012").await;
        assert_eq!(view.name(), "not-found");
    }

    #[tokio::test]
    async fn test_navigation_releases_subscriptions() {
        let mut session = session();

        session.navigate("/").await;
        assert_eq!(session.store().observer_count(), 1);

        session.navigate("/country/2").await;
        assert_eq!(session.store().observer_count(), 1);

        session.back().await;
        session.reload().await;
        assert_eq!(session.store().observer_count(), 1);

        session.navigate("/nowhere").await;
        assert_eq!(session.store().observer_count(), 0);
    }

    #[tokio::test]
    async fn test_close_releases_view() {
        let mut session = session();
        session.navigate("/").await;

        let store = Arc::clone(&session.store);
        session.close();
        assert_eq!(store.observer_count(), 0);
    }

    #[tokio::test]
    async fn test_render_before_navigation() {
        let mut session = session();
        assert_eq!(session.render(), "");
        assert!(!session.refresh());
    }
}
