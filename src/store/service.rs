//! Olympic Data Store
//!
//! Single source of truth for the loaded dataset. Owns the dataset's
//! lifetime and brokers load and read access:
//!
//! - `load()` fetches from the source and publishes the result
//! - `current()` hands out a replay-latest subscription
//! - `find_by_id()` looks a country up in the current dataset
//!
//! Loads are not deduplicated: two overlapping `load()` calls fetch twice,
//! and the last one to finish wins.

use std::sync::Arc;

use super::error::{LoadResult, LookupError};
use super::source::DataSource;
use super::subject::{Subject, Subscription};
use crate::model::{Country, CountryId, Dataset, DatasetState};

/// Process-wide cache of the Olympic dataset
pub struct OlympicStore {
    source: Arc<dyn DataSource>,
    olympics: Subject<DatasetState>,
}

impl OlympicStore {
    /// Create a store over a source. Nothing is fetched until `load()`.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            olympics: Subject::new(None),
        }
    }

    /// Location of the underlying source
    pub fn source_location(&self) -> &str {
        self.source.location()
    }

    /// Fetch the dataset and publish it to every observer
    ///
    /// On failure the store is reset to "absent", even if an earlier load
    /// succeeded, and the error is returned to the caller.
    pub async fn load(&self) -> LoadResult<Arc<Dataset>> {
        tracing::info!(source = %self.source.location(), "Loading Olympic data");

        let result = match self.source.fetch().await {
            Ok(countries) => Dataset::new(countries).map_err(Into::into),
            Err(e) => Err(e),
        };

        match result {
            Ok(dataset) => {
                let dataset = Arc::new(dataset);
                tracing::info!(countries = dataset.len(), "Olympic data loaded");
                self.olympics.publish(Some(Arc::clone(&dataset)));
                Ok(dataset)
            }
            Err(e) => {
                tracing::error!(source = %self.source.location(), error = %e, "Failed to load Olympic data");
                self.olympics.publish(None);
                Err(e)
            }
        }
    }

    /// Subscribe to the dataset state; the latest state is delivered first
    pub fn current(&self) -> Subscription<DatasetState> {
        self.olympics.subscribe()
    }

    /// Latest published dataset state
    pub fn snapshot(&self) -> DatasetState {
        self.olympics.get()
    }

    /// Look a country up in the current dataset
    pub fn find_by_id(&self, id: CountryId) -> Result<Country, LookupError> {
        find_country(self.snapshot().as_deref(), id)
    }

    /// Number of live subscriptions
    pub fn observer_count(&self) -> usize {
        self.olympics.observer_count()
    }
}

/// Look a country up in a dataset state
///
/// Absent or empty data is `NotLoaded`; a loaded dataset without the id is
/// `NotFound`.
pub fn find_country(dataset: Option<&Dataset>, id: CountryId) -> Result<Country, LookupError> {
    let dataset = match dataset {
        Some(d) if !d.is_empty() => d,
        _ => return Err(LookupError::NotLoaded),
    };

    dataset.find(id).cloned().ok_or(LookupError::NotFound(id))
}
