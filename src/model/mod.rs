//! Olympic Data Model
//!
//! Plain records describing each country's Olympic Games history:
//!
//! - **types**: `Participation`, `Country`, `Dataset`
//! - **error**: Validation errors raised while building a `Dataset`
//!
//! Records are deserialized straight from the JSON source and never mutated
//! afterwards. A `Dataset` is replaced wholesale on every load.

pub mod error;
pub mod types;

pub use error::ModelError;
pub use types::{Country, CountryId, Dataset, DatasetState, Participation};
