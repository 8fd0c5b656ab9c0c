//! # Olympics
//!
//! Olympic Games participation dashboard - loads a static JSON dataset once,
//! caches it behind a replay-latest store, and derives per-country and global
//! statistics for pie and line charts with drill-down navigation.
//!
//! ## Modules
//!
//! - [`model`]: Participation, country and dataset records
//! - [`store`]: Data sources and the observable dataset cache
//! - [`stats`]: Pure transformations into chart-ready structures
//! - [`views`]: Dashboard, country detail, routing and the session context
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use olympics::store::{source_for, OlympicStore};
//! use olympics::views::Session;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(OlympicStore::new(source_for("./assets/olympic.json")));
//!     let mut session = Session::new(store);
//!
//!     // Dashboard: medals per country
//!     session.navigate("/").await;
//!     println!("{}", session.render());
//!
//!     // Drill into the first slice
//!     if session.select(0).await.is_some() {
//!         println!("{}", session.render());
//!     }
//!
//!     session.close();
//! }
//! ```

pub mod config;
pub mod model;
pub mod stats;
pub mod store;
pub mod views;

// Re-export top-level types for convenience
pub use model::{Country, CountryId, Dataset, DatasetState, ModelError, Participation};

pub use store::{
    source_for, DataSource, FileSource, HttpSource, LoadError, LookupError, OlympicStore,
    StaticSource, Subject, Subscription,
};

pub use stats::{
    country_series, country_totals, dashboard_entries, global_summary, ChartSelection,
    CountryTotals, DashboardEntry, GlobalSummary, LineChart, SeriesPoint,
};

pub use views::{ActiveView, Route, Session, ViewError, ViewState};

pub use config::{Config, ConfigError, LoggingConfig, SourceConfig};
