//! Per-restaurant ballot.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RestaurantKey;

/// Collects sequential votes on one offered restaurant.
///
/// Diners vote one at a time in selection order. A single reject
/// settles the ballot immediately and the remaining diners are not
/// polled, so the recorded votes only ever hold accepts. A ballot is
/// unanimous once every diner has accepted.
///
/// The flow creates a ballot per offer and drops it once settled;
/// `total_voters` is at least one because voting cannot start without
/// a selected diner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    restaurant_key: RestaurantKey,
    total_voters: usize,
    votes: Vec<bool>,
}

/// What a recorded vote did to the ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallotOutcome {
    /// The vote was an accept and more diners still have to vote.
    AwaitingNext { next_voter: usize },
    /// Every diner accepted.
    Unanimous,
    /// The vote was a reject; the ballot is settled against the offer.
    Rejected,
}

impl Ballot {
    pub fn new(restaurant_key: RestaurantKey, total_voters: usize) -> Self {
        Self {
            restaurant_key,
            total_voters,
            votes: Vec::new(),
        }
    }

    pub fn restaurant_key(&self) -> &RestaurantKey {
        &self.restaurant_key
    }

    /// Index of the diner whose vote is expected next.
    pub fn voter_index(&self) -> usize {
        self.votes.len()
    }

    pub fn total_voters(&self) -> usize {
        self.total_voters
    }

    pub fn votes(&self) -> &[bool] {
        &self.votes
    }

    /// Records the current diner's vote.
    ///
    /// Rejects settle the ballot without being appended.
    pub fn record(&mut self, accept: bool) -> BallotOutcome {
        if !accept {
            return BallotOutcome::Rejected;
        }
        self.votes.push(true);
        if self.votes.len() < self.total_voters {
            BallotOutcome::AwaitingNext {
                next_voter: self.votes.len(),
            }
        } else {
            BallotOutcome::Unanimous
        }
    }

    pub fn is_unanimous(&self) -> bool {
        self.votes.len() == self.total_voters && self.votes.iter().all(|vote| *vote)
    }
}
