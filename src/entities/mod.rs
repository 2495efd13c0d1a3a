// Entity Models - Visitor, Park, Trip
// "Identity persists, values change"
//
// Each entity has:
// - Stable identity (UUID newtype) generated at construction, NEVER reassigned
// - Validated values behind accessor/setter pairs
// - Its own ordered list of trip ids (Visitor, Park)

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod park;
pub mod trip;
pub mod visitor;

pub use park::Park;
pub use trip::Trip;
pub use visitor::Visitor;

// ============================================================================
// IDENTITY
// ============================================================================

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Fresh random identity (UUID v4)
            pub fn generate() -> Self {
                $name(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Identity of a Visitor
    VisitorId
);
entity_id!(
    /// Identity of a national Park
    ParkId
);
entity_id!(
    /// Identity of a Trip
    TripId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = VisitorId::generate();
        let b = VisitorId::generate();
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn test_id_serializes_as_plain_uuid() {
        let id = ParkId::generate();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));

        let back: ParkId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }
}
