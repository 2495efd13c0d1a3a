// 🏞️ Park Entity - Stable identity + write-once name
//
// Unlike Visitor, a Park's name is fixed at construction.
// set_name exists only to reject the change with ModelError::ImmutableField.

use super::{ParkId, TripId};
use crate::error::{ModelError, Result};
use crate::rules::PARK_NAME;
use serde::Serialize;

/// National Park Entity
///
/// Identity: ParkId (never changes)
/// Values: name (at least 3 characters, write-once)
/// Trips: ids of every trip to this park, in registration order
#[derive(Debug, Serialize)]
pub struct Park {
    id: ParkId,
    name: String,
    trips: Vec<TripId>,
}

impl Park {
    /// Create a new park; fails unless the name has at least 3 characters
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        PARK_NAME.check("Park", "name", &name)?;

        Ok(Park {
            id: ParkId::generate(),
            name,
            trips: Vec::new(),
        })
    }

    pub fn id(&self) -> ParkId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always fails: park names are write-once
    pub fn set_name(&mut self, _name: impl Into<String>) -> Result<()> {
        Err(ModelError::ImmutableField {
            entity: "Park".to_string(),
            field: "name".to_string(),
        })
    }

    /// Trip ids in registration order
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    pub fn total_visits(&self) -> usize {
        self.trips.len()
    }

    pub(crate) fn push_trip(&mut self, trip: TripId) {
        self.trips.push(trip);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_park_creation() {
        let park = Park::new("Yosemite").unwrap();

        assert_eq!(park.name(), "Yosemite");
        assert!(park.trips().is_empty());
        assert_eq!(park.total_visits(), 0);
    }

    #[test]
    fn test_park_name_minimum() {
        assert!(Park::new("Zio").is_ok());
        assert!(Park::new("Zi").unwrap_err().is_validation());
        assert!(Park::new("").unwrap_err().is_validation());
    }

    #[test]
    fn test_park_name_is_write_once() {
        let mut park = Park::new("Yosemite").unwrap();

        for attempt in ["Yellowstone", "Yosemite", "", "ab"] {
            let err = park.set_name(attempt).unwrap_err();
            assert!(err.is_immutable_field());
        }

        assert_eq!(park.name(), "Yosemite");
    }

    #[test]
    fn test_park_total_visits_follows_trips() {
        let mut park = Park::new("Acadia").unwrap();
        park.push_trip(TripId::generate());
        park.push_trip(TripId::generate());

        assert_eq!(park.total_visits(), 2);
    }

    #[test]
    fn test_park_serializes() {
        let park = Park::new("Glacier").unwrap();
        let json = serde_json::to_value(&park).unwrap();

        assert_eq!(json["name"], "Glacier");
        assert_eq!(json["id"], park.id().to_string());
        assert_eq!(json["trips"], serde_json::json!([]));
    }
}
