//! People module - Potential diners and their relationships.

mod person;
mod relationship;

pub use person::{Person, PersonName};
pub use relationship::Relationship;
