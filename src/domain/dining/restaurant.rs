//! Restaurant entity and name value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{RestaurantKey, ValidationError};

use super::{ContactDetails, CuisineTags, PriceInfo, StarRating};

/// Letters in any script with interior spaces, periods, commas,
/// hyphens, and apostrophes; must start and end with a letter.
static RESTAURANT_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{L}([\p{L}\s.,'-]*\p{L})?$").expect("restaurant name pattern is valid")
});

const MIN_RESTAURANT_NAME_CHARS: usize = 2;

/// Validated restaurant name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantName(String);

impl RestaurantName {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if trimmed.chars().count() < MIN_RESTAURANT_NAME_CHARS {
            return Err(ValidationError::invalid_format(
                "name",
                "must be at least 2 characters",
            ));
        }
        if !RESTAURANT_NAME_PATTERN.is_match(&trimmed) {
            return Err(ValidationError::invalid_format(
                "name",
                "must consist of letters with optional punctuation",
            ));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A restaurant that can be offered for voting.
///
/// Immutable once constructed; identity is the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    key: RestaurantKey,
    name: RestaurantName,
    cuisines: CuisineTags,
    rating: StarRating,
    price: PriceInfo,
    delivery: bool,
    contact: ContactDetails,
}

impl Restaurant {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        key: RestaurantKey,
        name: RestaurantName,
        cuisines: CuisineTags,
        rating: StarRating,
        price: PriceInfo,
        delivery: bool,
        contact: ContactDetails,
    ) -> Self {
        Self {
            key,
            name,
            cuisines,
            rating,
            price,
            delivery,
            contact,
        }
    }

    pub fn key(&self) -> &RestaurantKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn cuisines(&self) -> &CuisineTags {
        &self.cuisines
    }

    pub fn rating(&self) -> StarRating {
        self.rating
    }

    pub fn price(&self) -> PriceInfo {
        self.price
    }

    pub fn has_delivery(&self) -> bool {
        self.delivery
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_and_inner_punctuation() {
        assert!(RestaurantName::new("Sushi Master").is_ok());
        assert!(RestaurantName::new("Burgers, Beer 'n Co").is_ok());
        assert!(RestaurantName::new("Тбилиси").is_ok());
    }

    #[test]
    fn name_trims_whitespace() {
        let name = RestaurantName::new("  French Bistro  ").unwrap();
        assert_eq!(name.as_str(), "French Bistro");
    }

    #[test]
    fn name_rejects_single_character() {
        assert!(RestaurantName::new("A").is_err());
    }

    #[test]
    fn name_rejects_digits() {
        assert!(RestaurantName::new("Cafe 24").is_err());
    }

    #[test]
    fn name_rejects_trailing_punctuation() {
        assert!(RestaurantName::new("Bistro,").is_err());
    }

    #[test]
    fn restaurant_exposes_its_parts() {
        let restaurant = Restaurant::new(
            RestaurantKey::new("r_default_2").unwrap(),
            RestaurantName::new("Sushi Master").unwrap(),
            CuisineTags::from_raw(["Japanese", "Asian"]).unwrap(),
            StarRating::new(4.8).unwrap(),
            PriceInfo::range(30, 80).unwrap(),
            true,
            ContactDetails::empty(),
        );

        assert_eq!(restaurant.key().as_str(), "r_default_2");
        assert_eq!(restaurant.name(), "Sushi Master");
        assert_eq!(restaurant.cuisines().len(), 2);
        assert_eq!(restaurant.rating().value(), 4.8);
        assert!(restaurant.has_delivery());
        assert!(restaurant.contact().is_empty());
    }
}
