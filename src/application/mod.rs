//! Application layer - use-case services over the entity store.
//!
//! This layer orchestrates domain operations and coordinates with the
//! storage port: the interactive decision session, directory
//! maintenance for the stored lists, and first-run seeding.

pub mod directory;
pub mod preload;
pub mod session;

pub use directory::{NewPerson, NewRestaurant, PeopleDirectory, RestaurantDirectory};
pub use preload::{DefaultDataSeeder, SeedReport};
pub use session::{DecisionSession, VoteOutcome};
