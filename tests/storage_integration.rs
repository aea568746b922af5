//! Integration tests for the JSON file store and its application
//! plumbing: seeding, directory maintenance, and tolerant loading of
//! documents written by earlier versions of the app.

use std::sync::Arc;

use tempfile::TempDir;

use dinner_jury::adapters::storage::JsonFileStore;
use dinner_jury::application::{
    DecisionSession, DefaultDataSeeder, NewPerson, NewRestaurant, PeopleDirectory,
    RestaurantDirectory, VoteOutcome,
};
use dinner_jury::config::StorageConfig;
use dinner_jury::domain::dining::{CuisineTag, PriceInfo};
use dinner_jury::domain::people::Relationship;
use dinner_jury::ports::EntityStore;

#[tokio::test]
async fn seeded_data_survives_a_reload_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(temp_dir.path()));

    let report = DefaultDataSeeder::new(store.clone()).seed_if_empty().await.unwrap();
    assert!(report.people_seeded);
    assert!(report.restaurants_seeded);

    // A brand new store over the same directory sees the same data.
    let reopened = JsonFileStore::new(temp_dir.path());
    assert_eq!(reopened.load_people().await.len(), 6);
    assert_eq!(reopened.load_restaurants().await.len(), 10);
}

#[tokio::test]
async fn directory_writes_are_visible_after_reopening() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(temp_dir.path()));

    let people = PeopleDirectory::new(store.clone());
    let added = people
        .add(NewPerson {
            first_name: "Vera".to_string(),
            last_name: "Ivanova".to_string(),
            relationship: Relationship::Family,
        })
        .await
        .unwrap();

    let restaurants = RestaurantDirectory::new(store.clone());
    restaurants
        .add(NewRestaurant {
            name: "Corner Cafe".to_string(),
            cuisines: vec!["European".to_string()],
            rating: 4.1,
            price_min: 15,
            price_max: 45,
            delivery: false,
            phone_number: "+7 495 111 22 33".to_string(),
            address: "10 Lenina Street, Moscow".to_string(),
            website: "https://cornercafe.ru".to_string(),
        })
        .await
        .unwrap();

    let reopened = JsonFileStore::new(temp_dir.path());
    let loaded_people = reopened.load_people().await;
    assert_eq!(loaded_people.len(), 1);
    assert_eq!(loaded_people[0].key(), added.key());
    assert_eq!(loaded_people[0].full_name(), "Vera Ivanova");

    let loaded_restaurants = reopened.load_restaurants().await;
    assert_eq!(loaded_restaurants.len(), 1);
    assert_eq!(loaded_restaurants[0].name(), "Corner Cafe");
}

#[tokio::test]
async fn documents_from_older_versions_normalize_on_load() {
    let temp_dir = TempDir::new().unwrap();

    // Scalar cuisine, string rating, numeric legacy price, no contact.
    let legacy = r#"[
        {
            "key": "r_1700000000001",
            "name": "Old Town Grill",
            "cuisine": "Russian",
            "rating": "4.4",
            "price": 3,
            "delivery": true
        },
        {
            "key": "r_1700000000002",
            "name": "Noodle Bar",
            "cuisine": ["Chinese", "Asian"],
            "rating": 4.0,
            "priceRange": {"min": 20, "max": 55},
            "delivery": false,
            "phoneNumber": "+7 495 222 33 44",
            "address": "11 Myasnitskaya Street, Moscow",
            "website": "https://noodlebar.ru"
        }
    ]"#;
    tokio::fs::write(temp_dir.path().join("restaurants.json"), legacy)
        .await
        .unwrap();

    let store = JsonFileStore::new(temp_dir.path());
    let restaurants = store.load_restaurants().await;
    assert_eq!(restaurants.len(), 2);

    let grill = &restaurants[0];
    assert_eq!(grill.name(), "Old Town Grill");
    assert_eq!(grill.cuisines().len(), 1);
    assert_eq!(grill.rating().value(), 4.4);
    assert_eq!(grill.price(), PriceInfo::Scale(3));
    assert!(grill.contact().is_empty());

    let noodles = &restaurants[1];
    assert_eq!(noodles.price(), PriceInfo::range(20, 55).unwrap());
    assert!(noodles.contact().phone().is_some());
}

#[tokio::test]
async fn unusable_records_are_skipped_without_failing_the_load() {
    let temp_dir = TempDir::new().unwrap();

    let mixed = r#"[
        {"key": "p_1", "firstName": "Anna", "lastName": "Petrova", "relationship": "Friend"},
        {"key": "p_2", "firstName": "", "lastName": "Nameless", "relationship": "Friend"},
        {"key": "p_3", "firstName": "Boris", "lastName": "Volkov", "relationship": "Sibling"}
    ]"#;
    tokio::fs::write(temp_dir.path().join("people.json"), mixed)
        .await
        .unwrap();

    let store = JsonFileStore::new(temp_dir.path());
    let people = store.load_people().await;

    // The blank name is dropped; the unknown relationship degrades to
    // Other instead of losing the record.
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].first_name(), "Anna");
    assert_eq!(people[1].first_name(), "Boris");
    assert_eq!(people[1].relationship(), Relationship::Other);
}

#[tokio::test]
async fn damaged_files_degrade_to_an_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    tokio::fs::write(temp_dir.path().join("people.json"), "not json at all")
        .await
        .unwrap();

    let store = JsonFileStore::new(temp_dir.path());
    assert!(store.load_people().await.is_empty());

    // Saving afterwards replaces the damaged file.
    let seeder = DefaultDataSeeder::new(Arc::new(store));
    let report = seeder.seed_if_empty().await.unwrap();
    assert!(report.people_seeded);

    let reopened = JsonFileStore::new(temp_dir.path());
    assert_eq!(reopened.load_people().await.len(), 6);
}

#[tokio::test]
async fn reset_to_defaults_replaces_directory_edits() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(temp_dir.path()));
    let seeder = DefaultDataSeeder::new(store.clone());
    seeder.seed_if_empty().await.unwrap();

    let people = PeopleDirectory::new(store.clone());
    let added = people
        .add(NewPerson {
            first_name: "Vera".to_string(),
            last_name: "Ivanova".to_string(),
            relationship: Relationship::Family,
        })
        .await
        .unwrap();
    assert_eq!(store.load_people().await.len(), 7);

    seeder.reset_to_defaults().await.unwrap();

    let reloaded = store.load_people().await;
    assert_eq!(reloaded.len(), 6);
    assert!(reloaded.iter().all(|person| person.key() != added.key()));
}

#[tokio::test]
async fn store_from_config_uses_the_configured_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = StorageConfig {
        data_dir: temp_dir.path().to_path_buf(),
        preload_defaults: true,
    };

    let store = JsonFileStore::from_config(&config);
    store
        .save_people(&dinner_jury::application::preload::default_people())
        .await
        .unwrap();

    assert!(temp_dir.path().join("people.json").exists());
    assert_eq!(store.load_people().await.len(), 6);
}

#[tokio::test]
async fn a_full_session_runs_over_the_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(temp_dir.path()));
    DefaultDataSeeder::new(store.clone()).seed_if_empty().await.unwrap();

    let mut session = DecisionSession::begin(store.as_ref()).await;
    session.start().unwrap();

    let sarah = session
        .flow()
        .people()
        .iter()
        .find(|person| person.first_name() == "Sarah")
        .map(|person| person.key().clone())
        .unwrap();
    session.toggle_person(&sarah).unwrap();
    session.proceed_to_cuisines().unwrap();
    session
        .toggle_cuisine(&CuisineTag::new("Greek").unwrap())
        .unwrap();

    let entry = session.proceed_to_voting().unwrap();
    assert_eq!(entry.candidates, 1);

    session.offer_next().unwrap();
    match session.cast_vote(true).unwrap() {
        VoteOutcome::Accepted { restaurant } => {
            assert_eq!(restaurant.name(), "Mediterranean Garden");
        }
        other => panic!("Expected Accepted, got {:?}", other),
    }

    // Deciding never writes back to the store.
    let reopened = JsonFileStore::new(temp_dir.path());
    assert_eq!(reopened.load_restaurants().await.len(), 10);
}
