//! Entity store port - persistence contract for people and restaurants.

use async_trait::async_trait;

use crate::domain::dining::Restaurant;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::people::Person;

/// Errors reported by entity store implementations.
#[derive(Debug, thiserror::Error)]
pub enum EntityStoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Failed to serialize entities: {0}")]
    Serialization(String),
}

impl From<EntityStoreError> for DomainError {
    fn from(err: EntityStoreError) -> Self {
        DomainError::new(ErrorCode::StorageFailed, err.to_string())
    }
}

/// Persistence for the people roster and the restaurant list.
///
/// Each entity kind is stored as a whole list; saves replace the stored
/// list. Loads never fail: implementations degrade to an empty list
/// when the backing data is missing or unreadable, so a decision can
/// always start.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Loads all stored people; empty when nothing usable is stored.
    async fn load_people(&self) -> Vec<Person>;

    /// Loads all stored restaurants; empty when nothing usable is stored.
    async fn load_restaurants(&self) -> Vec<Restaurant>;

    /// Replaces the stored people list.
    async fn save_people(&self, people: &[Person]) -> Result<(), EntityStoreError>;

    /// Replaces the stored restaurant list.
    async fn save_restaurants(&self, restaurants: &[Restaurant]) -> Result<(), EntityStoreError>;

    /// Removes both stored lists.
    async fn clear_all(&self) -> Result<(), EntityStoreError>;
}
