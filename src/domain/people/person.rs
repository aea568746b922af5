//! Person entity and name value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{PersonKey, ValidationError};

use super::Relationship;

/// Letters in any script, with interior spaces, hyphens, and
/// apostrophes; must start and end with a letter.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}([\p{L}\s'-]*\p{L})?$").expect("name pattern is valid"));

const MIN_NAME_CHARS: usize = 2;

/// Validated person name, used for both first and last names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Validates a raw name. The field name only feeds error messages,
    /// so the same type serves first and last names.
    pub fn new(field: &str, raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        if trimmed.chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::invalid_format(
                field,
                "must be at least 2 characters",
            ));
        }
        if !NAME_PATTERN.is_match(&trimmed) {
            return Err(ValidationError::invalid_format(
                field,
                "only letters, spaces, hyphens, and apostrophes are allowed",
            ));
        }
        Ok(Self(trimmed))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A potential diner on the roster.
///
/// Immutable once constructed; identity is the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    key: PersonKey,
    first_name: PersonName,
    last_name: PersonName,
    relationship: Relationship,
}

impl Person {
    pub fn new(
        key: PersonKey,
        first_name: PersonName,
        last_name: PersonName,
        relationship: Relationship,
    ) -> Self {
        Self {
            key,
            first_name,
            last_name,
            relationship,
        }
    }

    pub fn key(&self) -> &PersonKey {
        &self.key
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn relationship(&self) -> Relationship {
        self.relationship
    }

    /// First and last name joined for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
