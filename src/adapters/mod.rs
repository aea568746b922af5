//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Entity store implementations (JSON files, in-memory)

pub mod storage;

pub use storage::{InMemoryStore, JsonFileStore};
