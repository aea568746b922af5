//! Decision module - The group voting engine.
//!
//! Turns a roster of people and a list of restaurants into a unanimous
//! dinner choice: diners are selected, cuisine preferences filter and
//! rank the candidates, and each candidate is voted on in turn until
//! one is accepted by everyone or the candidates run out.
//!
//! Everything here is pure state; persistence and logging live in the
//! outer layers.

mod ballot;
mod errors;
mod events;
mod filter;
mod flow;
mod queue;
mod selection;
mod stage;

pub use ballot::{Ballot, BallotOutcome};
pub use errors::DecisionError;
pub use events::DecisionEvent;
pub use filter::{available_cuisines, rank_by_preference};
pub use flow::{BallotProgress, DecidedMeal, DecisionFlow, VotingEntry};
pub use queue::CandidateQueue;
pub use selection::{CuisineSelection, DinerSelection, ToggleSet};
pub use stage::DecisionStage;
