//! JSON file entity store.
//!
//! Persists each entity kind as one pretty-printed JSON document under
//! a data directory: `people.json` and `restaurants.json`. Loads
//! tolerate missing and unreadable files by returning an empty list, so
//! a fresh or damaged data directory behaves like an empty store.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::StorageConfig;
use crate::domain::dining::Restaurant;
use crate::domain::people::Person;
use crate::ports::{EntityStore, EntityStoreError};

use super::records::{StoredPerson, StoredRestaurant};

const PEOPLE_FILE: &str = "people.json";
const RESTAURANTS_FILE: &str = "restaurants.json";

/// File-based store for people and restaurants.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given data directory.
    ///
    /// The directory is created lazily on the first save.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Create a store from the storage configuration section.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.data_dir)
    }

    fn people_path(&self) -> PathBuf {
        self.data_dir.join(PEOPLE_FILE)
    }

    fn restaurants_path(&self) -> PathBuf {
        self.data_dir.join(RESTAURANTS_FILE)
    }

    async fn read_records<T: DeserializeOwned>(&self, path: &Path, kind: &str) -> Vec<T> {
        if !path.exists() {
            tracing::debug!(kind, "no stored file yet, starting empty");
            return Vec::new();
        }
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(kind, error = %err, "failed to read stored file, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(kind, error = %err, "stored file is not valid JSON, treating as empty");
                Vec::new()
            }
        }
    }

    async fn write_records<T: Serialize>(
        &self,
        path: &Path,
        records: &[T],
    ) -> Result<(), EntityStoreError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| EntityStoreError::Io(e.to_string()))?;

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| EntityStoreError::Serialization(e.to_string()))?;

        fs::write(path, json)
            .await
            .map_err(|e| EntityStoreError::Io(e.to_string()))?;

        Ok(())
    }

    async fn remove_if_present(&self, path: &Path) -> Result<(), EntityStoreError> {
        if path.exists() {
            fs::remove_file(path)
                .await
                .map_err(|e| EntityStoreError::Io(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl EntityStore for JsonFileStore {
    async fn load_people(&self) -> Vec<Person> {
        let records: Vec<StoredPerson> = self.read_records(&self.people_path(), "people").await;
        records
            .into_iter()
            .filter_map(StoredPerson::into_person)
            .collect()
    }

    async fn load_restaurants(&self) -> Vec<Restaurant> {
        let records: Vec<StoredRestaurant> =
            self.read_records(&self.restaurants_path(), "restaurants").await;
        records
            .into_iter()
            .filter_map(StoredRestaurant::into_restaurant)
            .collect()
    }

    async fn save_people(&self, people: &[Person]) -> Result<(), EntityStoreError> {
        let records: Vec<StoredPerson> = people.iter().map(StoredPerson::from).collect();
        self.write_records(&self.people_path(), &records).await
    }

    async fn save_restaurants(&self, restaurants: &[Restaurant]) -> Result<(), EntityStoreError> {
        let records: Vec<StoredRestaurant> =
            restaurants.iter().map(StoredRestaurant::from).collect();
        self.write_records(&self.restaurants_path(), &records).await
    }

    async fn clear_all(&self) -> Result<(), EntityStoreError> {
        self.remove_if_present(&self.people_path()).await?;
        self.remove_if_present(&self.restaurants_path()).await?;
        Ok(())
    }
}
