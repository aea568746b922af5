//! Bundled default data for first runs.
//!
//! A fresh store starts empty; seeding fills each entity kind that
//! loads empty with a starter set so the decision flow has something
//! to work with before the user adds their own entries.

use std::sync::Arc;

use crate::domain::dining::{
    ContactDetails, CuisineTags, PhoneNumber, PriceInfo, Restaurant, RestaurantName, StarRating,
    StreetAddress, WebsiteUrl,
};
use crate::domain::foundation::{PersonKey, RestaurantKey};
use crate::domain::people::{Person, PersonName, Relationship};
use crate::ports::{EntityStore, EntityStoreError};

/// Which entity kinds a seeding run filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub people_seeded: bool,
    pub restaurants_seeded: bool,
}

/// Seeds the bundled starter data into an entity store.
#[derive(Clone)]
pub struct DefaultDataSeeder {
    store: Arc<dyn EntityStore>,
}

impl DefaultDataSeeder {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Seeds each entity kind that currently loads empty. Kinds with
    /// existing data are left untouched.
    pub async fn seed_if_empty(&self) -> Result<SeedReport, EntityStoreError> {
        let mut report = SeedReport {
            people_seeded: false,
            restaurants_seeded: false,
        };

        if self.store.load_people().await.is_empty() {
            let people = default_people();
            tracing::info!(count = people.len(), "seeding default people");
            self.store.save_people(&people).await?;
            report.people_seeded = true;
        }

        if self.store.load_restaurants().await.is_empty() {
            let restaurants = default_restaurants();
            tracing::info!(count = restaurants.len(), "seeding default restaurants");
            self.store.save_restaurants(&restaurants).await?;
            report.restaurants_seeded = true;
        }

        Ok(report)
    }

    /// Clears the store and reloads the bundled defaults.
    pub async fn reset_to_defaults(&self) -> Result<SeedReport, EntityStoreError> {
        tracing::info!("resetting stored data to the bundled defaults");
        self.store.clear_all().await?;
        self.seed_if_empty().await
    }
}

/// The six people bundled for a fresh install.
pub fn default_people() -> Vec<Person> {
    vec![
        seeded_person("p_default_1", "John", "Smith", Relationship::Friend),
        seeded_person("p_default_2", "Emma", "Wilson", Relationship::Colleague),
        seeded_person("p_default_3", "Michael", "Brown", Relationship::Family),
        seeded_person("p_default_4", "Sarah", "Davis", Relationship::Partner),
        seeded_person("p_default_5", "Alex", "Johnson", Relationship::Friend),
        seeded_person("p_default_6", "Maria", "Garcia", Relationship::Colleague),
    ]
}

/// The ten restaurants bundled for a fresh install.
pub fn default_restaurants() -> Vec<Restaurant> {
    vec![
        seeded_restaurant(
            "r_default_1",
            "Italian Paradise",
            &["Italian", "Mediterranean", "European"],
            4.5,
            (30, 80),
            true,
            "+7 495 123 45 67",
            "123 Tverskaya Street, Moscow",
            "https://italianparadise.com",
        ),
        seeded_restaurant(
            "r_default_2",
            "Sushi Master",
            &["Japanese", "Asian", "Korean"],
            4.8,
            (40, 100),
            true,
            "+7 495 234 56 78",
            "45 Arbat Street, Moscow",
            "https://sushimaster.ru",
        ),
        seeded_restaurant(
            "r_default_3",
            "American Burger",
            &["American", "Mexican", "Fast Food"],
            4.2,
            (20, 50),
            true,
            "+7 495 345 67 89",
            "78 Leninsky Prospect, Moscow",
            "https://americanburger.com",
        ),
        seeded_restaurant(
            "r_default_4",
            "Thai Spice",
            &["Thai", "Asian", "Chinese"],
            4.6,
            (35, 70),
            false,
            "+7 495 456 78 90",
            "92 Kutuzovsky Avenue, Moscow",
            "https://thaispice.ru",
        ),
        seeded_restaurant(
            "r_default_5",
            "Mediterranean Garden",
            &["Mediterranean", "Greek", "Turkish"],
            4.7,
            (45, 90),
            true,
            "+7 495 567 89 01",
            "156 Prospekt Mira, Moscow",
            "https://medgarden.com",
        ),
        seeded_restaurant(
            "r_default_6",
            "Russian House",
            &["Russian", "European"],
            4.4,
            (35, 85),
            true,
            "+7 495 678 90 12",
            "234 Sadovaya Street, Moscow",
            "https://russianhouse.ru",
        ),
        seeded_restaurant(
            "r_default_7",
            "Indian Spices",
            &["Indian", "Asian", "Vegetarian"],
            4.3,
            (25, 60),
            true,
            "+7 495 789 01 23",
            "67 Noviy Arbat, Moscow",
            "https://indianspices.ru",
        ),
        seeded_restaurant(
            "r_default_8",
            "French Bistro",
            &["French", "European", "Mediterranean"],
            4.9,
            (50, 120),
            false,
            "+7 495 890 12 34",
            "89 Patriarshiye Prudy, Moscow",
            "https://frenchbistro.ru",
        ),
        seeded_restaurant(
            "r_default_9",
            "Fusion Kitchen",
            &["Asian", "European", "American", "Fusion"],
            4.5,
            (40, 95),
            true,
            "+7 495 901 23 45",
            "123 Nikolskaya Street, Moscow",
            "https://fusionkitchen.ru",
        ),
        seeded_restaurant(
            "r_default_10",
            "Mexican Fiesta",
            &["Mexican", "Latin American", "Spanish"],
            4.4,
            (30, 75),
            true,
            "+7 495 012 34 56",
            "45 Pyatnitskaya Street, Moscow",
            "https://mexicanfiesta.ru",
        ),
    ]
}

fn seeded_person(key: &str, first: &str, last: &str, relationship: Relationship) -> Person {
    Person::new(
        PersonKey::new(key).expect("seed person key is valid"),
        PersonName::new("first_name", first).expect("seed first name is valid"),
        PersonName::new("last_name", last).expect("seed last name is valid"),
        relationship,
    )
}

fn seeded_restaurant(
    key: &str,
    name: &str,
    cuisines: &[&str],
    rating: f32,
    price: (u32, u32),
    delivery: bool,
    phone: &str,
    address: &str,
    website: &str,
) -> Restaurant {
    Restaurant::new(
        RestaurantKey::new(key).expect("seed restaurant key is valid"),
        RestaurantName::new(name).expect("seed restaurant name is valid"),
        CuisineTags::from_raw(cuisines.iter().copied()).expect("seed cuisines are valid"),
        StarRating::new(rating).expect("seed rating is valid"),
        PriceInfo::range(price.0, price.1).expect("seed price range is valid"),
        delivery,
        ContactDetails::new(
            Some(PhoneNumber::new(phone).expect("seed phone number is valid")),
            Some(StreetAddress::new(address).expect("seed address is valid")),
            Some(WebsiteUrl::new(website).expect("seed website is valid")),
        ),
    )
}
