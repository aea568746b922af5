//! Contact detail value objects for restaurants.
//!
//! Validation rules follow the restaurant form: Russian-style phone
//! numbers, street-number-first addresses, and http(s) URLs. Stored
//! records that predate validation may omit any of these, so the
//! container keeps every field optional.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?7|8)?[\s-]?\(?\d{3}\)?[\s-]?\d{3}[\s-]?\d{2}[\s-]?\d{2}$")
        .expect("phone pattern is valid")
});

static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s+\p{L}").expect("address pattern is valid"));

static WEBSITE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?[A-Za-z0-9-]+(\.[A-Za-z]{2,})+[/\w-]*$")
        .expect("website pattern is valid")
});

const MIN_PHONE_CHARS: usize = 10;
const MIN_ADDRESS_CHARS: usize = 10;

/// Phone number in the common Russian formats, e.g. "+7 999 123 45 67".
///
/// The formatted input is kept as entered; only separators are ignored
/// for the length check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("phone_number"));
        }
        let cleaned: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
            .collect();
        if cleaned.chars().count() < MIN_PHONE_CHARS {
            return Err(ValidationError::invalid_format(
                "phone_number",
                "too short for a phone number",
            ));
        }
        if !PHONE_PATTERN.is_match(&trimmed) {
            return Err(ValidationError::invalid_format(
                "phone_number",
                "expected a Russian phone number",
            ));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Street address starting with a house number, e.g. "123 Tverskaya Street".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreetAddress(String);

impl StreetAddress {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("address"));
        }
        if trimmed.chars().count() < MIN_ADDRESS_CHARS {
            return Err(ValidationError::invalid_format(
                "address",
                "too short for a full address",
            ));
        }
        if !ADDRESS_PATTERN.is_match(&trimmed) {
            return Err(ValidationError::invalid_format(
                "address",
                "must start with a house number followed by a street name",
            ));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Website URL with an explicit http or https scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebsiteUrl(String);

impl WebsiteUrl {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("website"));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ValidationError::invalid_format(
                "website",
                "must start with http:// or https://",
            ));
        }
        if !WEBSITE_PATTERN.is_match(&trimmed) {
            return Err(ValidationError::invalid_format(
                "website",
                "not a valid URL",
            ));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WebsiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional contact block for a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    phone: Option<PhoneNumber>,
    address: Option<StreetAddress>,
    website: Option<WebsiteUrl>,
}

impl ContactDetails {
    pub fn new(
        phone: Option<PhoneNumber>,
        address: Option<StreetAddress>,
        website: Option<WebsiteUrl>,
    ) -> Self {
        Self {
            phone,
            address,
            website,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn address(&self) -> Option<&StreetAddress> {
        self.address.as_ref()
    }

    pub fn website(&self) -> Option<&WebsiteUrl> {
        self.website.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.address.is_none() && self.website.is_none()
    }
}
