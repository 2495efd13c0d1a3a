// 🥾 Visitor Entity - Stable identity + validated name
//
// "Visitor name is a VALUE (can change), VisitorId is IDENTITY (never changes)"
//
// Two visitors with the same name are still two visitors.

use super::{TripId, VisitorId};
use crate::error::Result;
use crate::rules::VISITOR_NAME;
use serde::Serialize;

/// Visitor Entity
///
/// Identity: VisitorId (never changes)
/// Values: name (1-15 characters, re-validated on every change)
/// Trips: ids of every trip this visitor took, in registration order
#[derive(Debug, Serialize)]
pub struct Visitor {
    id: VisitorId,
    name: String,
    trips: Vec<TripId>,
}

impl Visitor {
    /// Create a new visitor; fails unless the name has 1-15 characters
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        VISITOR_NAME.check("Visitor", "name", &name)?;

        Ok(Visitor {
            id: VisitorId::generate(),
            name,
            trips: Vec::new(),
        })
    }

    pub fn id(&self) -> VisitorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename; the previous name stays in place on failure
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        VISITOR_NAME.check("Visitor", "name", &name)?;
        self.name = name;
        Ok(())
    }

    /// Trip ids in registration order
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    pub(crate) fn push_trip(&mut self, trip: TripId) {
        self.trips.push(trip);
    }
}

// ============================================================================
// TESTS
// ============================================================================
