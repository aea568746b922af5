//! Stored-record shapes tolerant of historical data.
//!
//! The storage documents accumulated several shapes over time: a scalar
//! or a sequence under `cuisine`, a string or a number under `rating`,
//! and either a `priceRange` object or the older numeric `price`
//! level. The record types absorb all of them and normalize into
//! domain entities. Records whose key or name are unusable are skipped
//! with a warning instead of failing the whole load.

use serde::{Deserialize, Serialize};

use crate::domain::dining::{
    ContactDetails, CuisineTags, PhoneNumber, PriceInfo, Restaurant, RestaurantName, StarRating,
    StreetAddress, WebsiteUrl,
};
use crate::domain::foundation::{PersonKey, RestaurantKey};
use crate::domain::people::{Person, PersonName, Relationship};

/// Price level assumed for records that carry no price data at all.
const FALLBACK_PRICE_LEVEL: u8 = 3;

/// A person as written to storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPerson {
    pub key: String,
    pub first_name: String,
    pub last_name: String,
    pub relationship: String,
}

impl StoredPerson {
    /// Normalizes into a domain person, or `None` when the record is
    /// unusable. An unknown relationship degrades to `Other`.
    pub fn into_person(self) -> Option<Person> {
        let key = match PersonKey::new(&self.key) {
            Ok(key) => key,
            Err(err) => {
                tracing::warn!(error = %err, "skipping stored person with unusable key");
                return None;
            }
        };
        let first_name = match PersonName::new("first_name", &self.first_name) {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "skipping stored person with unusable name");
                return None;
            }
        };
        let last_name = match PersonName::new("last_name", &self.last_name) {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "skipping stored person with unusable name");
                return None;
            }
        };
        let relationship = self.relationship.parse().unwrap_or_else(|_| {
            tracing::debug!(key = %key, value = %self.relationship, "unknown relationship, using Other");
            Relationship::Other
        });
        Some(Person::new(key, first_name, last_name, relationship))
    }
}

impl From<&Person> for StoredPerson {
    fn from(person: &Person) -> Self {
        Self {
            key: person.key().as_str().to_string(),
            first_name: person.first_name().to_string(),
            last_name: person.last_name().to_string(),
            relationship: person.relationship().label().to_string(),
        }
    }
}

/// Cuisine field that may be a single string or a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CuisineField {
    Many(Vec<String>),
    One(String),
}

impl Default for CuisineField {
    fn default() -> Self {
        CuisineField::Many(Vec::new())
    }
}

impl CuisineField {
    fn into_values(self) -> Vec<String> {
        match self {
            CuisineField::Many(values) => values,
            CuisineField::One(value) => vec![value],
        }
    }
}

/// Rating field that may be a number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingField {
    Number(f64),
    Text(String),
}

impl Default for RatingField {
    fn default() -> Self {
        RatingField::Number(0.0)
    }
}

impl RatingField {
    fn as_f32(&self) -> Option<f32> {
        match self {
            RatingField::Number(value) => Some(*value as f32),
            RatingField::Text(value) => value.trim().parse().ok(),
        }
    }
}

/// The current price shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoredPriceRange {
    pub min: u32,
    pub max: u32,
}

/// A restaurant as written to storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRestaurant {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub cuisine: CuisineField,
    #[serde(default)]
    pub rating: RatingField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<StoredPriceRange>,
    /// Legacy 1 to 5 price level, superseded by `priceRange`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub delivery: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl StoredRestaurant {
    /// Normalizes into a domain restaurant, or `None` when the record
    /// is unusable. Malformed optional fields degrade instead of
    /// failing: ratings are clamped, inverted price bounds are swapped,
    /// and invalid contact details are dropped.
    pub fn into_restaurant(self) -> Option<Restaurant> {
        let key = match RestaurantKey::new(&self.key) {
            Ok(key) => key,
            Err(err) => {
                tracing::warn!(error = %err, "skipping stored restaurant with unusable key");
                return None;
            }
        };
        let name = match RestaurantName::new(&self.name) {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "skipping stored restaurant with unusable name");
                return None;
            }
        };
        let cuisines = match CuisineTags::from_raw(self.cuisine.into_values()) {
            Ok(cuisines) => cuisines,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "skipping stored restaurant without cuisines");
                return None;
            }
        };

        let rating = match self.rating.as_f32() {
            Some(value) => StarRating::clamped(value),
            None => {
                tracing::warn!(key = %key, "unreadable rating, defaulting to minimum");
                StarRating::default()
            }
        };

        let price = normalize_price(key.as_str(), self.price_range, self.price);

        let contact = ContactDetails::new(
            self.phone_number.and_then(|raw| PhoneNumber::new(raw).ok()),
            self.address.and_then(|raw| StreetAddress::new(raw).ok()),
            self.website.and_then(|raw| WebsiteUrl::new(raw).ok()),
        );

        Some(Restaurant::new(
            key, name, cuisines, rating, price, self.delivery, contact,
        ))
    }
}

impl From<&Restaurant> for StoredRestaurant {
    fn from(restaurant: &Restaurant) -> Self {
        let (price_range, price) = match restaurant.price() {
            PriceInfo::Range { min, max } => (Some(StoredPriceRange { min, max }), None),
            PriceInfo::Scale(level) => (None, Some(level as f64)),
        };
        Self {
            key: restaurant.key().as_str().to_string(),
            name: restaurant.name().to_string(),
            cuisine: CuisineField::Many(
                restaurant
                    .cuisines()
                    .iter()
                    .map(|tag| tag.as_str().to_string())
                    .collect(),
            ),
            rating: RatingField::Number(restaurant.rating().value() as f64),
            price_range,
            price,
            delivery: restaurant.has_delivery(),
            phone_number: restaurant.contact().phone().map(|p| p.as_str().to_string()),
            address: restaurant.contact().address().map(|a| a.as_str().to_string()),
            website: restaurant.contact().website().map(|w| w.as_str().to_string()),
        }
    }
}

fn normalize_price(
    key: &str,
    range: Option<StoredPriceRange>,
    legacy: Option<f64>,
) -> PriceInfo {
    if let Some(range) = range {
        let (min, max) = if range.min <= range.max {
            (range.min, range.max)
        } else {
            tracing::warn!(key = %key, "inverted price range, swapping bounds");
            (range.max, range.min)
        };
        if let Ok(price) = PriceInfo::range(min, max) {
            return price;
        }
    }
    if let Some(level) = legacy {
        let level = level.round().clamp(1.0, 5.0) as u8;
        if let Ok(price) = PriceInfo::scale(level) {
            return price;
        }
    }
    tracing::warn!(key = %key, "no usable price data, assuming mid-range");
    PriceInfo::scale(FALLBACK_PRICE_LEVEL).expect("fallback price level is valid")
}
