//! Data Sources
//!
//! Where the Olympic dataset comes from. A source returns the whole JSON
//! array in one call: no pagination, no partial fetch, no retries.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::{LoadError, LoadResult};
use crate::model::Country;

/// Common trait for all data sources
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable location (URL or path)
    fn location(&self) -> &str;

    /// Fetch every country record
    async fn fetch(&self) -> LoadResult<Vec<Country>>;
}

/// Pick a source for a location: HTTP(S) URLs go over the network,
/// anything else is read as a local file.
pub fn source_for(location: &str) -> Arc<dyn DataSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpSource::new(location))
    } else {
        Arc::new(FileSource::new(location))
    }
}

/// Dataset served over HTTP
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> LoadResult<Vec<Country>> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Dataset stored in a local JSON file
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.to_string_lossy().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> LoadResult<Vec<Country>> {
        let content = tokio::fs::read(&self.path)
            .await
            .map_err(|error| LoadError::Io {
                path: self.path.clone(),
                error,
            })?;

        Ok(serde_json::from_slice(&content)?)
    }
}

/// Dataset held in memory, for embedding and tests
pub struct StaticSource {
    countries: Vec<Country>,
}

impl StaticSource {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    fn location(&self) -> &str {
        "memory"
    }

    async fn fetch(&self) -> LoadResult<Vec<Country>> {
        Ok(self.countries.clone())
    }
}
