//! Core data types for Olympic participation statistics
//!
//! This module defines the records loaded from the data source:
//! - `Participation`: One country's results in one Games edition
//! - `Country`: A country and its ordered participation history
//! - `Dataset`: The validated set of countries for one load cycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use super::error::ModelError;

/// Stable identifier used for lookup and navigation
///
/// Signed and wide so any integer in a `country/{id}` path is a lookup
/// rather than a validation failure.
pub type CountryId = i64;

/// Latest published dataset, `None` until a load succeeds or after one fails
pub type DatasetState = Option<Arc<Dataset>>;

/// One country's results in one Olympic Games edition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    /// Record id from the source, unused by the statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// Edition year, unique per country
    pub year: i32,
    /// Host city
    #[serde(default)]
    pub city: String,
    /// Medals won at this edition
    pub medals_count: u32,
    /// Athletes sent to this edition
    pub athlete_count: u32,
}

impl Participation {
    /// Create a participation record
    pub fn new(year: i32, city: impl Into<String>, medals_count: u32, athlete_count: u32) -> Self {
        Self {
            id: None,
            year,
            city: city.into(),
            medals_count,
            athlete_count,
        }
    }
}

/// A country and its participation history
///
/// `participations` keeps the order of the source; it is never re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    /// Unique identifier across the dataset
    pub id: CountryId,
    /// Display name
    pub country: String,
    /// Participations in source order
    #[serde(default)]
    pub participations: Vec<Participation>,
}

impl Country {
    /// Create a country with no participations
    pub fn new(id: CountryId, country: impl Into<String>) -> Self {
        Self {
            id,
            country: country.into(),
            participations: Vec::new(),
        }
    }

    /// Builder method: append a participation
    pub fn participation(mut self, participation: Participation) -> Self {
        self.participations.push(participation);
        self
    }
}

/// The full set of countries produced by one successful load
#[derive(Debug, Clone)]
pub struct Dataset {
    countries: Vec<Country>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate country ids
    pub fn new(countries: Vec<Country>) -> Result<Self, ModelError> {
        let mut seen = HashSet::with_capacity(countries.len());
        for country in &countries {
            if !seen.insert(country.id) {
                return Err(ModelError::DuplicateId(country.id));
            }
        }

        Ok(Self {
            countries,
            loaded_at: Utc::now(),
        })
    }

    /// Countries in source order
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// When this dataset was loaded
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Find the country with the given id
    pub fn find(&self, id: CountryId) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_source_record() {
        let json = r#"{
            "id": 1,
            "country": "Italy",
            "participations": [
                {"id": 1, "year": 2012, "city": "Londres", "medalsCount": 28, "athleteCount": 372},
                {"id": 2, "year": 2016, "city": "Rio de Janeiro", "medalsCount": 28, "athleteCount": 375}
            ]
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.id, 1);
        assert_eq!(country.country, "Italy");
        assert_eq!(country.participations.len(), 2);
        assert_eq!(country.participations[0].year, 2012);
        assert_eq!(country.participations[0].medals_count, 28);
        assert_eq!(country.participations[1].athlete_count, 375);
    }

    #[test]
    fn test_participation_id_optional() {
        let json = r#"{"year": 2020, "city": "Tokyo", "medalsCount": 40, "athleteCount": 381}"#;
        let participation: Participation = serde_json::from_str(json).unwrap();
        assert_eq!(participation.id, None);
        assert_eq!(participation, Participation::new(2020, "Tokyo", 40, 381));
    }

    #[test]
    fn test_dataset_rejects_duplicate_ids() {
        let result = Dataset::new(vec![Country::new(1, "France"), Country::new(1, "Italy")]);
        assert_eq!(result.unwrap_err(), ModelError::DuplicateId(1));
    }

    #[test]
    fn test_dataset_find() {
        let dataset = Dataset::new(vec![Country::new(1, "France"), Country::new(2, "Italy")]).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.find(2).map(|c| c.country.as_str()), Some("Italy"));
        assert!(dataset.find(99).is_none());
    }

    #[test]
    fn test_participation_order_preserved() {
        let country = Country::new(1, "France")
            .participation(Participation::new(2016, "Rio de Janeiro", 42, 110))
            .participation(Participation::new(2012, "London", 34, 100));

        let years: Vec<i32> = country.participations.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2016, 2012]);
    }
}
