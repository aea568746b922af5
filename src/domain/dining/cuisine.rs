//! Cuisine tag value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A single cuisine tag such as "Italian" or "Asian".
///
/// Trimmed and non-empty; comparison is exact and case-sensitive, so
/// "Italian" and "italian" are distinct tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuisineTag(String);

impl CuisineTag {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("cuisine"));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CuisineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The cuisines one restaurant offers.
///
/// Preserves first-appearance order and drops duplicates. Every
/// restaurant has at least one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuisineTags(Vec<CuisineTag>);

impl CuisineTags {
    /// Builds the tag list from raw strings, trimming each entry and
    /// dropping blanks and duplicates.
    pub fn from_raw<I, S>(raw: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<CuisineTag> = Vec::new();
        for entry in raw {
            if let Ok(tag) = CuisineTag::new(entry.as_ref()) {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
        if tags.is_empty() {
            return Err(ValidationError::empty_field("cuisine"));
        }
        Ok(Self(tags))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CuisineTag> {
        self.0.iter()
    }

    pub fn contains(&self, tag: &CuisineTag) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many of the given tags this restaurant offers.
    pub fn match_count(&self, selection: &[CuisineTag]) -> usize {
        selection.iter().filter(|tag| self.contains(tag)).count()
    }

    /// Tags joined for display, e.g. "Japanese, Asian, Korean".
    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(CuisineTag::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}
