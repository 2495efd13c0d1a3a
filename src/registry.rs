// 📒 Registry - Owns every Visitor, Park and Trip
//
// The registry is an explicit value: callers create one, pass it around,
// and drop it. Nothing is global.
//
// record_trip is the ONLY way to link a visitor to a park. It appends the
// new trip to (1) the registry's ordered trip list, (2) the visitor,
// (3) the park, in that order, and only after every check has passed.

use crate::entities::{Park, ParkId, Trip, TripId, Visitor, VisitorId};
use crate::error::{ModelError, Result};
use std::collections::HashSet;
use tracing::{debug, warn};

// ============================================================================
// REGISTRY
// ============================================================================

/// Registry of all visitors, parks and trips (append-only)
#[derive(Debug, Default)]
pub struct Registry {
    visitors: Vec<Visitor>,
    parks: Vec<Park>,

    /// ALL trips in registration order (never cleared)
    trips: Vec<Trip>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Registry::default()
    }

    pub fn add_visitor(&mut self, visitor: Visitor) -> VisitorId {
        let id = visitor.id();
        debug!(visitor_id = %id, name = visitor.name(), "visitor added");
        self.visitors.push(visitor);
        id
    }

    pub fn add_park(&mut self, park: Park) -> ParkId {
        let id = park.id();
        debug!(park_id = %id, name = park.name(), "park added");
        self.parks.push(park);
        id
    }

    /// Record a trip linking `visitor` to `park`
    ///
    /// Fails with a validation error for dates shorter than 7 characters,
    /// or with UnknownVisitor / UnknownPark. On failure nothing is appended anywhere.
    pub fn record_trip(
        &mut self,
        visitor: VisitorId,
        park: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<TripId> {
        let trip = Trip::new(visitor, park, start_date, end_date).map_err(|err| {
            warn!(visitor_id = %visitor, park_id = %park, error = %err, "trip rejected");
            err
        })?;

        let visitor_idx = self.visitor_index(visitor)?;
        let park_idx = self.park_index(park)?;

        let id = trip.id();
        self.trips.push(trip);
        self.visitors[visitor_idx].push_trip(id);
        self.parks[park_idx].push_trip(id);

        debug!(trip_id = %id, visitor_id = %visitor, park_id = %park, "trip recorded");
        Ok(id)
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    pub fn visitor(&self, id: VisitorId) -> Option<VisitorView<'_>> {
        self.visitors
            .iter()
            .find(|v| v.id() == id)
            .map(|visitor| VisitorView { visitor, registry: self })
    }

    pub fn park(&self, id: ParkId) -> Option<ParkView<'_>> {
        self.parks
            .iter()
            .find(|p| p.id() == id)
            .map(|park| ParkView { park, registry: self })
    }

    pub fn trip(&self, id: TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id() == id)
    }

    pub fn visitor_mut(&mut self, id: VisitorId) -> Result<&mut Visitor> {
        let idx = self.visitor_index(id)?;
        Ok(&mut self.visitors[idx])
    }

    pub fn park_mut(&mut self, id: ParkId) -> Result<&mut Park> {
        let idx = self.park_index(id)?;
        Ok(&mut self.parks[idx])
    }

    pub fn trip_mut(&mut self, id: TripId) -> Result<&mut Trip> {
        self.trips
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(ModelError::UnknownTrip(id))
    }

    /// First visitor whose name matches (case-insensitive)
    pub fn find_visitor_by_name(&self, name: &str) -> Option<VisitorView<'_>> {
        let lower = name.to_lowercase();
        self.visitors
            .iter()
            .find(|v| v.name().to_lowercase() == lower)
            .map(|visitor| VisitorView { visitor, registry: self })
    }

    /// First park whose name matches (case-insensitive)
    pub fn find_park_by_name(&self, name: &str) -> Option<ParkView<'_>> {
        let lower = name.to_lowercase();
        self.parks
            .iter()
            .find(|p| p.name().to_lowercase() == lower)
            .map(|park| ParkView { park, registry: self })
    }

    pub fn visitors(&self) -> &[Visitor] {
        &self.visitors
    }

    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    /// All trips in registration order
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    fn visitor_index(&self, id: VisitorId) -> Result<usize> {
        self.visitors
            .iter()
            .position(|v| v.id() == id)
            .ok_or(ModelError::UnknownVisitor(id))
    }

    fn park_index(&self, id: ParkId) -> Result<usize> {
        self.parks
            .iter()
            .position(|p| p.id() == id)
            .ok_or(ModelError::UnknownPark(id))
    }

    fn resolve<'a>(&'a self, ids: &'a [TripId]) -> impl Iterator<Item = &'a Trip> + 'a {
        ids.iter().filter_map(move |id| self.trip(*id))
    }
}

// ============================================================================
// VIEWS
// ============================================================================

/// Borrowed view of a visitor, able to follow its trips
#[derive(Debug, Clone, Copy)]
pub struct VisitorView<'a> {
    visitor: &'a Visitor,
    registry: &'a Registry,
}

impl<'a> VisitorView<'a> {
    pub fn visitor(&self) -> &'a Visitor {
        self.visitor
    }

    pub fn id(&self) -> VisitorId {
        self.visitor.id()
    }

    pub fn name(&self) -> &'a str {
        self.visitor.name()
    }

    /// The visitor's trips, in registration order
    pub fn trips(&self) -> impl Iterator<Item = &'a Trip> + 'a {
        self.registry.resolve(self.visitor.trips())
    }

    /// Distinct parks this visitor has been to
    pub fn national_parks(&self) -> HashSet<ParkId> {
        self.trips().map(|t| t.park()).collect()
    }

    pub fn total_visits_at_park(&self, park: ParkId) -> usize {
        self.trips().filter(|t| t.park() == park).count()
    }
}

/// Borrowed view of a park, able to follow its trips
#[derive(Debug, Clone, Copy)]
pub struct ParkView<'a> {
    park: &'a Park,
    registry: &'a Registry,
}

impl<'a> ParkView<'a> {
    pub fn park(&self) -> &'a Park {
        self.park
    }

    pub fn id(&self) -> ParkId {
        self.park.id()
    }

    pub fn name(&self) -> &'a str {
        self.park.name()
    }

    /// The park's trips, in registration order
    pub fn trips(&self) -> impl Iterator<Item = &'a Trip> + 'a {
        self.registry.resolve(self.park.trips())
    }

    /// Distinct visitors who came to this park
    pub fn visitors(&self) -> HashSet<VisitorId> {
        self.trips().map(|t| t.visitor()).collect()
    }

    pub fn total_visits(&self) -> usize {
        self.park.total_visits()
    }

    /// Visitor with the most trips here, None if nobody came
    ///
    /// Ties go to the visitor seen first in registration order.
    pub fn best_visitor(&self) -> Option<VisitorId> {
        let mut counts: Vec<(VisitorId, usize)> = Vec::new();
        for trip in self.trips() {
            match counts.iter_mut().find(|(id, _)| *id == trip.visitor()) {
                Some((_, count)) => *count += 1,
                None => counts.push((trip.visitor(), 1)),
            }
        }

        counts
            .into_iter()
            .fold(None, |best: Option<(VisitorId, usize)>, (id, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((id, count)),
            })
            .map(|(id, _)| id)
    }
}

// ============================================================================
// TESTS
// ============================================================================
