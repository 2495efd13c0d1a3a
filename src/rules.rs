// 📏 Field Rules - Validation limits as data
// One rule per validated field, shared by constructors and setters.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

// ============================================================================
// LENGTH RULE
// ============================================================================

/// Character-length bounds for a string field
///
/// Length counts Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRule {
    pub min: usize,

    /// None = unbounded
    pub max: Option<usize>,
}

impl LengthRule {
    pub const fn at_least(min: usize) -> Self {
        LengthRule { min, max: None }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        LengthRule { min, max: Some(max) }
    }

    pub fn allows(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && self.max.map_or(true, |max| len <= max)
    }

    /// Check a value, naming the offending entity/field on failure
    pub fn check(&self, entity: &str, field: &str, value: &str) -> Result<(), ValidationError> {
        if self.allows(value) {
            return Ok(());
        }

        Err(ValidationError::new(
            entity,
            field,
            format!("Must be {}, got {}", self.describe(), value.chars().count()),
        ))
    }

    /// Human-readable bound, e.g. "1-15 characters"
    pub fn describe(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{} characters", self.min, max),
            None => format!("at least {} characters", self.min),
        }
    }
}

// ============================================================================
// FIELD RULES
// ============================================================================

pub const VISITOR_NAME: LengthRule = LengthRule::between(1, 15);
pub const PARK_NAME: LengthRule = LengthRule::at_least(3);
/// Applies to both start_date and end_date
pub const TRIP_DATE: LengthRule = LengthRule::at_least(7);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_rule() {
        assert!(!VISITOR_NAME.allows(""));
        assert!(VISITOR_NAME.allows("A"));
        assert!(VISITOR_NAME.allows("Fifteen chars!!"));
        assert!(!VISITOR_NAME.allows("Sixteen chars!!!"));
    }

    #[test]
    fn test_unbounded_rule() {
        assert!(!PARK_NAME.allows("Yo"));
        assert!(PARK_NAME.allows("Zion"));
        assert!(PARK_NAME.allows(&"x".repeat(500)));

        assert!(!TRIP_DATE.allows("2023-0"));
        assert!(TRIP_DATE.allows("2023-01"));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // 3 chars, 6 bytes
        assert!(PARK_NAME.allows("ÅÉÎ"));
        // 15 chars, more than 15 bytes
        assert!(VISITOR_NAME.allows("ééééééééééééééé"));
    }

    #[test]
    fn test_check_error_message() {
        let err = PARK_NAME.check("Park", "name", "Yo").unwrap_err();
        assert_eq!(err.entity, "Park");
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "Must be at least 3 characters, got 2");

        let err = VISITOR_NAME.check("Visitor", "name", "").unwrap_err();
        assert_eq!(err.message, "Must be 1-15 characters, got 0");
    }

    #[test]
    fn test_rule_serializes() {
        let json = serde_json::to_value(VISITOR_NAME).unwrap();
        assert_eq!(json, serde_json::json!({ "min": 1, "max": 15 }));

        let json = serde_json::to_value(TRIP_DATE).unwrap();
        assert_eq!(json, serde_json::json!({ "min": 7, "max": null }));
    }
}
