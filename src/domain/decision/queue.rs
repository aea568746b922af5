//! Round-robin candidate queue for voting.

use serde::{Deserialize, Serialize};

use crate::domain::dining::Restaurant;
use crate::domain::foundation::RestaurantKey;

use super::errors::DecisionError;

/// Restaurants still eligible for voting, visited round-robin.
///
/// The cursor marks the next candidate to offer. Offering returns the
/// candidate under the cursor and advances it with wraparound, so a
/// group that somehow cycles past the end starts over at the front.
/// Removing a candidate resets the cursor to the front; the next offer
/// after a rejection is always the new first candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateQueue {
    items: Vec<Restaurant>,
    cursor: usize,
}

impl CandidateQueue {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
        }
    }

    /// Builds the queue from an already ranked candidate list.
    pub fn from_ranked(items: Vec<Restaurant>) -> Self {
        Self { items, cursor: 0 }
    }

    /// Returns the candidate under the cursor and advances the cursor.
    pub fn offer_next(&mut self) -> Result<Restaurant, DecisionError> {
        if self.items.is_empty() {
            return Err(DecisionError::EmptyCandidates);
        }
        let offered = self.items[self.cursor].clone();
        self.cursor = if self.cursor >= self.items.len() - 1 {
            0
        } else {
            self.cursor + 1
        };
        Ok(offered)
    }

    /// Removes the candidate with the given key, returning whether it
    /// was present. The cursor moves back to the front either way.
    pub fn remove(&mut self, key: &RestaurantKey) -> bool {
        let before = self.items.len();
        self.items.retain(|restaurant| restaurant.key() != key);
        self.cursor = 0;
        self.items.len() < before
    }

    pub fn contains(&self, key: &RestaurantKey) -> bool {
        self.items.iter().any(|restaurant| restaurant.key() == key)
    }

    /// Index of the next candidate to be offered.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for CandidateQueue {
    fn default() -> Self {
        Self::new()
    }
}
