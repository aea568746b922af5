//! Price information value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Price information for a restaurant.
///
/// Current data carries a rouble range; older records carry a 1 to 5
/// price level. Both shapes stay first-class so stored lists keep
/// loading unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceInfo {
    /// Approximate per-person cost range in roubles.
    Range { min: u32, max: u32 },
    /// Legacy price level from 1 (cheap) to 5 (expensive).
    Scale(u8),
}

impl PriceInfo {
    /// Creates a rouble range, requiring min <= max.
    pub fn range(min: u32, max: u32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::invalid_format(
                "price_range",
                format!("min {} exceeds max {}", min, max),
            ));
        }
        Ok(PriceInfo::Range { min, max })
    }

    /// Creates a legacy price level, requiring 1 <= level <= 5.
    pub fn scale(level: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&level) {
            return Err(ValidationError::out_of_range("price_level", 1, 5, level as i32));
        }
        Ok(PriceInfo::Scale(level))
    }

    /// Display label, e.g. "₽30-₽80" or "3/5".
    pub fn label(&self) -> String {
        match self {
            PriceInfo::Range { min, max } => format!("₽{}-₽{}", min, max),
            PriceInfo::Scale(level) => format!("{}/5", level),
        }
    }
}

impl fmt::Display for PriceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
