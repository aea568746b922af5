//! Strongly-typed entity keys.
//!
//! Keys are opaque strings. Freshly generated keys are prefixed UUIDs
//! (`p_<uuid>`, `r_<uuid>`), but stored data may carry other shapes
//! such as the bundled `p_default_1` keys. Keys are never interpreted
//! beyond equality.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonKey(String);

impl PersonKey {
    /// Creates a PersonKey from an existing string, returning error if blank.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::empty_field("person_key"));
        }
        Ok(Self(key))
    }

    /// Generates a fresh random key with the `p_` prefix.
    pub fn generate() -> Self {
        Self(format!("p_{}", Uuid::new_v4()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantKey(String);

impl RestaurantKey {
    /// Creates a RestaurantKey from an existing string, returning error if blank.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::empty_field("restaurant_key"));
        }
        Ok(Self(key))
    }

    /// Generates a fresh random key with the `r_` prefix.
    pub fn generate() -> Self {
        Self(format!("r_{}", Uuid::new_v4()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_key_generates_unique_values() {
        let key1 = PersonKey::generate();
        let key2 = PersonKey::generate();
        assert_ne!(key1, key2);
    }

    #[test]
    fn person_key_generate_uses_prefix() {
        let key = PersonKey::generate();
        assert!(key.as_str().starts_with("p_"));
    }

    #[test]
    fn person_key_accepts_legacy_shapes() {
        let key = PersonKey::new("p_default_3").unwrap();
        assert_eq!(key.as_str(), "p_default_3");
    }

    #[test]
    fn person_key_rejects_blank_string() {
        let result = PersonKey::new("   ");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "person_key"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn person_key_serializes_as_plain_string() {
        let key = PersonKey::new("p_default_1").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"p_default_1\"");
    }

    #[test]
    fn restaurant_key_generates_unique_values() {
        let key1 = RestaurantKey::generate();
        let key2 = RestaurantKey::generate();
        assert_ne!(key1, key2);
    }

    #[test]
    fn restaurant_key_generate_uses_prefix() {
        let key = RestaurantKey::generate();
        assert!(key.as_str().starts_with("r_"));
    }

    #[test]
    fn restaurant_key_rejects_empty_string() {
        assert!(RestaurantKey::new("").is_err());
    }

    #[test]
    fn restaurant_key_displays_inner_value() {
        let key = RestaurantKey::new("r_default_10").unwrap();
        assert_eq!(format!("{}", key), "r_default_10");
    }
}
