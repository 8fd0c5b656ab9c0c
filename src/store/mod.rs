//! Olympic Data Store
//!
//! This module provides the data loading and caching layer:
//!
//! - **subject**: Replay-latest publish/subscribe cell
//! - **source**: Data sources (HTTP, file, in-memory)
//! - **service**: The store itself (load, subscribe, lookup)
//! - **error**: Error types
//!
//! # Architecture
//!
//! ```text
//! load():      DataSource → Dataset::new → Subject::publish → every Subscription
//! current():   Subject::subscribe → latest state, then every later state
//! find_by_id:  Subject::get → Dataset::find
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use olympics::store::{source_for, OlympicStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = OlympicStore::new(source_for("./assets/olympic.json"));
//!     let mut olympics = store.current();
//!
//!     store.load().await?;
//!
//!     if let Some(Some(dataset)) = olympics.latest() {
//!         println!("Loaded {} countries", dataset.len());
//!     }
//!
//!     let italy = store.find_by_id(1)?;
//!     println!("{} took part {} times", italy.country, italy.participations.len());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod service;
pub mod source;
pub mod subject;

pub use error::{LoadError, LoadResult, LookupError};
pub use service::{find_country, OlympicStore};
pub use source::{source_for, DataSource, FileSource, HttpSource, StaticSource};
pub use subject::{Subject, Subscription, SubscriptionId};
