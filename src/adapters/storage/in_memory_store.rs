//! In-memory entity store for tests and ephemeral sessions.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dining::Restaurant;
use crate::domain::people::Person;
use crate::ports::{EntityStore, EntityStoreError};

/// Entity store backed by shared in-process vectors.
///
/// Clones share the same underlying data, so a clone handed to a
/// session sees every save made through the original.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    people: Arc<RwLock<Vec<Person>>>,
    restaurants: Arc<RwLock<Vec<Restaurant>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            people: Arc::new(RwLock::new(Vec::new())),
            restaurants: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored people.
    pub async fn person_count(&self) -> usize {
        self.people.read().await.len()
    }

    /// Number of stored restaurants.
    pub async fn restaurant_count(&self) -> usize {
        self.restaurants.read().await.len()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore for InMemoryStore {
    async fn load_people(&self) -> Vec<Person> {
        self.people.read().await.clone()
    }

    async fn load_restaurants(&self) -> Vec<Restaurant> {
        self.restaurants.read().await.clone()
    }

    async fn save_people(&self, people: &[Person]) -> Result<(), EntityStoreError> {
        *self.people.write().await = people.to_vec();
        Ok(())
    }

    async fn save_restaurants(&self, restaurants: &[Restaurant]) -> Result<(), EntityStoreError> {
        *self.restaurants.write().await = restaurants.to_vec();
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), EntityStoreError> {
        self.people.write().await.clear();
        self.restaurants.write().await.clear();
        Ok(())
    }
}
