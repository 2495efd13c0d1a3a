// Park Trips - Core Library
// Visitors, national parks and the trips linking them

pub mod entities;
pub mod error;
pub mod registry;
pub mod rules;

// Re-export commonly used types
pub use entities::{Park, ParkId, Trip, TripId, Visitor, VisitorId};
pub use error::{ModelError, Result, ValidationError};
pub use registry::{ParkView, Registry, VisitorView};
pub use rules::{LengthRule, PARK_NAME, TRIP_DATE, VISITOR_NAME};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
