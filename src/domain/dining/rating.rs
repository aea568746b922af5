//! Star rating value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Star rating on the 0 to 5 scale, half-star values included.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(f32);

impl StarRating {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 5.0;

    /// Validates a rating value. NaN and out-of-scale values are rejected.
    pub fn new(value: f32) -> Result<Self, ValidationError> {
        if value.is_nan() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::invalid_format(
                "rating",
                format!("must be between {} and {}, got {}", Self::MIN, Self::MAX, value),
            ));
        }
        Ok(Self(value))
    }

    /// Forces a possibly dirty value onto the scale. NaN becomes the
    /// minimum. Used when normalizing stored data that must not fail.
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for StarRating {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
