// 🧭 Trip Entity - Join between one Visitor and one Park
//
// Trips are only created through Registry::record_trip, which links them
// into the visitor, the park and the registry's ordered trip list.

use super::{ParkId, TripId, VisitorId};
use crate::error::Result;
use crate::rules::TRIP_DATE;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Trip {
    id: TripId,
    visitor: VisitorId,
    park: ParkId,

    /// Free-form date strings, at least 7 characters each
    start_date: String,
    end_date: String,

    /// When this trip was recorded
    recorded_at: DateTime<Utc>,
}

impl Trip {
    /// Validate dates (start first) and build an unlinked trip
    pub(crate) fn new(
        visitor: VisitorId,
        park: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Self> {
        let start_date = start_date.into();
        let end_date = end_date.into();
        TRIP_DATE.check("Trip", "start_date", &start_date)?;
        TRIP_DATE.check("Trip", "end_date", &end_date)?;

        Ok(Trip {
            id: TripId::generate(),
            visitor,
            park,
            start_date,
            end_date,
            recorded_at: Utc::now(),
        })
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn visitor(&self) -> VisitorId {
        self.visitor
    }

    pub fn park(&self) -> ParkId {
        self.park
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn set_start_date(&mut self, start_date: impl Into<String>) -> Result<()> {
        let start_date = start_date.into();
        TRIP_DATE.check("Trip", "start_date", &start_date)?;
        self.start_date = start_date;
        Ok(())
    }

    pub fn set_end_date(&mut self, end_date: impl Into<String>) -> Result<()> {
        let end_date = end_date.into();
        TRIP_DATE.check("Trip", "end_date", &end_date)?;
        self.end_date = end_date;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    fn create_test_trip() -> Trip {
        Trip::new(
            VisitorId::generate(),
            ParkId::generate(),
            "2023-01-01",
            "2023-01-05",
        )
        .unwrap()
    }

    #[test]
    fn test_trip_creation() {
        let visitor = VisitorId::generate();
        let park = ParkId::generate();
        let before = Utc::now();

        let trip = Trip::new(visitor, park, "2023-01-01", "2023-01-05").unwrap();

        assert_eq!(trip.visitor(), visitor);
        assert_eq!(trip.park(), park);
        assert_eq!(trip.start_date(), "2023-01-01");
        assert_eq!(trip.end_date(), "2023-01-05");
        assert!(trip.recorded_at() >= before);
    }

    #[test]
    fn test_trip_rejects_short_dates() {
        let err = Trip::new(VisitorId::generate(), ParkId::generate(), "Jan 1", "2023-01-05")
            .unwrap_err();
        assert!(matches!(err, ModelError::Validation(ref e) if e.field == "start_date"));

        let err = Trip::new(VisitorId::generate(), ParkId::generate(), "2023-01-01", "Jan 5")
            .unwrap_err();
        assert!(matches!(err, ModelError::Validation(ref e) if e.field == "end_date"));
    }

    #[test]
    fn test_trip_start_date_checked_first() {
        let err = Trip::new(VisitorId::generate(), ParkId::generate(), "x", "y").unwrap_err();
        assert!(matches!(err, ModelError::Validation(ref e) if e.field == "start_date"));
    }

    #[test]
    fn test_trip_date_setters() {
        let mut trip = create_test_trip();

        trip.set_start_date("May 1st, 2023").unwrap();
        trip.set_end_date("May 9th, 2023").unwrap();

        assert_eq!(trip.start_date(), "May 1st, 2023");
        assert_eq!(trip.end_date(), "May 9th, 2023");
    }

    #[test]
    fn test_trip_rejected_dates_keep_previous() {
        let mut trip = create_test_trip();

        assert!(trip.set_start_date("2023").unwrap_err().is_validation());
        assert!(trip.set_end_date("").unwrap_err().is_validation());

        assert_eq!(trip.start_date(), "2023-01-01");
        assert_eq!(trip.end_date(), "2023-01-05");
    }
}
