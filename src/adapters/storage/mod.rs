//! Storage Adapters
//!
//! Implementations of the EntityStore port for persisting people and
//! restaurants.
//!
//! ## Available Adapters
//!
//! - **JsonFileStore** - Stores entities as JSON files on disk
//! - **InMemoryStore** - Stores entities in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryStore, JsonFileStore};
//!
//! // Production: file-based storage
//! let store = JsonFileStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryStore::new();
//! ```

mod in_memory_store;
mod json_file_store;
mod records;

pub use in_memory_store::InMemoryStore;
pub use json_file_store::JsonFileStore;
