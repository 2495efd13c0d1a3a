// ⚠️ Errors - Validation + write-once + unknown identity
//
// Every fallible operation in the crate returns `Result<T, ModelError>`.
// Setters validate BEFORE assigning, so an Err never leaves a half-written entity.

use crate::entities::{ParkId, TripId, VisitorId};
use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A field value that broke its rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{entity}] {field}: {message}")]
pub struct ValidationError {
    /// Entity kind the field belongs to ("Visitor", "Park", "Trip")
    pub entity: String,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(entity: &str, field: &str, message: impl Into<String>) -> Self {
        ValidationError {
            entity: entity.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// MODEL ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot change {field} of {entity}: field is write-once")]
    ImmutableField { entity: String, field: String },

    #[error("Visitor not found: {0}")]
    UnknownVisitor(VisitorId),

    #[error("Park not found: {0}")]
    UnknownPark(ParkId),

    #[error("Trip not found: {0}")]
    UnknownTrip(TripId),
}

impl ModelError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ModelError::Validation(_))
    }

    pub fn is_immutable_field(&self) -> bool {
        matches!(self, ModelError::ImmutableField { .. })
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
