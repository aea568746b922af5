//! Directory maintenance for the stored people and restaurant lists.
//!
//! Mirrors the add/delete screens: a new entry is validated field by
//! field, given a generated key, and appended to the stored list in a
//! read-modify-write of the whole document.

use std::sync::Arc;

use crate::domain::dining::{
    ContactDetails, CuisineTags, PhoneNumber, PriceInfo, Restaurant, RestaurantName, StarRating,
    StreetAddress, WebsiteUrl,
};
use crate::domain::foundation::{DomainError, PersonKey, RestaurantKey};
use crate::domain::people::{Person, PersonName, Relationship};
use crate::ports::EntityStore;

/// Fields of a person being added to the directory.
#[derive(Debug, Clone)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub relationship: Relationship,
}

/// Fields of a restaurant being added to the directory.
///
/// Contact fields are mandatory here; only pre-existing stored records
/// may lack them.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub cuisines: Vec<String>,
    pub rating: f32,
    pub price_min: u32,
    pub price_max: u32,
    pub delivery: bool,
    pub phone_number: String,
    pub address: String,
    pub website: String,
}

/// Maintains the stored people list.
#[derive(Clone)]
pub struct PeopleDirectory {
    store: Arc<dyn EntityStore>,
}

impl PeopleDirectory {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Person> {
        self.store.load_people().await
    }

    /// Validates and persists a new person under a generated key.
    pub async fn add(&self, new: NewPerson) -> Result<Person, DomainError> {
        let person = Person::new(
            PersonKey::generate(),
            PersonName::new("first_name", new.first_name)?,
            PersonName::new("last_name", new.last_name)?,
            new.relationship,
        );

        let mut people = self.store.load_people().await;
        people.push(person.clone());
        self.store.save_people(&people).await?;

        tracing::info!(key = %person.key(), "person added to the directory");
        Ok(person)
    }

    /// Removes a person by key. Returns false when no such person is
    /// stored; the list is only rewritten when something was removed.
    pub async fn remove(&self, key: &PersonKey) -> Result<bool, DomainError> {
        let mut people = self.store.load_people().await;
        let before = people.len();
        people.retain(|person| person.key() != key);
        if people.len() == before {
            return Ok(false);
        }
        self.store.save_people(&people).await?;

        tracing::info!(key = %key, "person removed from the directory");
        Ok(true)
    }
}

/// Maintains the stored restaurant list.
#[derive(Clone)]
pub struct RestaurantDirectory {
    store: Arc<dyn EntityStore>,
}

impl RestaurantDirectory {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Restaurant> {
        self.store.load_restaurants().await
    }

    /// Validates and persists a new restaurant under a generated key.
    pub async fn add(&self, new: NewRestaurant) -> Result<Restaurant, DomainError> {
        let contact = ContactDetails::new(
            Some(PhoneNumber::new(new.phone_number)?),
            Some(StreetAddress::new(new.address)?),
            Some(WebsiteUrl::new(new.website)?),
        );
        let restaurant = Restaurant::new(
            RestaurantKey::generate(),
            RestaurantName::new(new.name)?,
            CuisineTags::from_raw(new.cuisines)?,
            StarRating::new(new.rating)?,
            PriceInfo::range(new.price_min, new.price_max)?,
            new.delivery,
            contact,
        );

        let mut restaurants = self.store.load_restaurants().await;
        restaurants.push(restaurant.clone());
        self.store.save_restaurants(&restaurants).await?;

        tracing::info!(key = %restaurant.key(), name = restaurant.name(), "restaurant added to the directory");
        Ok(restaurant)
    }

    /// Removes a restaurant by key. Returns false when no such
    /// restaurant is stored.
    pub async fn remove(&self, key: &RestaurantKey) -> Result<bool, DomainError> {
        let mut restaurants = self.store.load_restaurants().await;
        let before = restaurants.len();
        restaurants.retain(|restaurant| restaurant.key() != key);
        if restaurants.len() == before {
            return Ok(false);
        }
        self.store.save_restaurants(&restaurants).await?;

        tracing::info!(key = %key, "restaurant removed from the directory");
        Ok(true)
    }
}
