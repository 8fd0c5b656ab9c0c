//! Views and Navigation
//!
//! Consumers of the store and the statistics:
//!
//! - **router**: Path → `Route` (dashboard, country detail, not found)
//! - **dashboard**: Pie chart of medals per country with global totals
//! - **country_detail**: Line chart and totals for one country
//! - **not_found**: Fallback for unmatched paths
//! - **session**: Explicit context owning the store and the active view
//! - **render**: Text charts for the terminal
//! - **error**: `ViewError` and the `ViewState` lifecycle
//!
//! Every failure is recovered here and shown as a message; none escapes.

pub mod country_detail;
pub mod dashboard;
pub mod error;
pub mod not_found;
pub mod render;
pub mod router;
pub mod session;

pub use country_detail::{parse_country_id, CountryDetailModel, CountryDetailView};
pub use dashboard::{DashboardModel, DashboardView};
pub use error::{ViewError, ViewState};
pub use not_found::NotFoundView;
pub use router::Route;
pub use session::{ActiveView, Session};
