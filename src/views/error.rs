//! View Error Types
//!
//! Every failure a view can hit, with the message shown to the user.
//! Views recover from all of these: charts are not drawn and navigation
//! stays available.

use thiserror::Error;

use crate::model::CountryId;
use crate::store::LookupError;

/// Failures recovered at the view boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The data source could not be loaded
    #[error("Load failed")]
    LoadFailed,

    /// A lookup ran before any successful load
    #[error("Data not loaded")]
    NotLoaded,

    /// Well-formed id with no matching country
    #[error("Country not found: {0}")]
    NotFound(CountryId),

    /// Non-numeric or missing id in the path
    #[error("Invalid country id: {0:?}")]
    InvalidId(String),
}

impl ViewError {
    /// Message shown in place of the charts
    pub fn user_message(&self) -> String {
        match self {
            ViewError::LoadFailed => {
                "Unable to load Olympic data. Please check your internet connection and try again."
                    .to_string()
            }
            ViewError::NotLoaded => "Olympic data not available. Please try again.".to_string(),
            ViewError::NotFound(id) => format!("Country with id {} not found", id),
            ViewError::InvalidId(_) => "Invalid country ID provided.".to_string(),
        }
    }
}

impl From<LookupError> for ViewError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotLoaded => ViewError::NotLoaded,
            LookupError::NotFound(id) => ViewError::NotFound(id),
        }
    }
}

/// Lifecycle of a view's content
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<M> {
    Loading,
    Ready(M),
    Failed(ViewError),
}

impl<M> ViewState<M> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn model(&self) -> Option<&M> {
        match self {
            ViewState::Ready(model) => Some(model),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ViewError> {
        match self {
            ViewState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
