//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, keys, errors)
//! - `people` - Potential diners and their relationships
//! - `dining` - Restaurants and their descriptive value objects
//! - `decision` - The group voting engine

pub mod decision;
pub mod dining;
pub mod foundation;
pub mod people;
