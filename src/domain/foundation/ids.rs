//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Identifier for an item within a canvas list (job, pain, gain, product).
///
/// Caller-supplied, non-empty after trimming, unique per list. Relievers
/// and creators reference other items by these ids; resolution happens in
/// the canvas index, not here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new ItemId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_accepts_non_empty_string() {
        let id = ItemId::new("pain-1").unwrap();
        assert_eq!(id.as_str(), "pain-1");
    }

    #[test]
    fn item_id_rejects_empty_string() {
        let result = ItemId::new("");
        assert!(result.is_err());
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn item_id_rejects_whitespace_only() {
        assert!(ItemId::new("   ").is_err());
    }

    #[test]
    fn item_id_displays_correctly() {
        let id = ItemId::new("gain-2").unwrap();
        assert_eq!(format!("{}", id), "gain-2");
    }

    #[test]
    fn item_id_serializes_transparently() {
        let id = ItemId::new("job-1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"job-1\"");
    }

    #[test]
    fn item_id_orders_lexicographically() {
        let a = ItemId::new("a").unwrap();
        let b = ItemId::new("b").unwrap();
        assert!(a < b);
    }
}
