//! Decision workflow events.
//!
//! The flow appends an event for every observable step. The application
//! layer drains the buffer and turns events into tracing output; a UI
//! can render the same facts. Events are records, not commands, and
//! consuming them never changes flow state.

use serde::Serialize;

use crate::domain::dining::CuisineTag;
use crate::domain::foundation::{PersonKey, RestaurantKey, Timestamp};

/// One observable step of the decision workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DecisionEvent {
    FlowStarted {
        people_available: usize,
        restaurants_available: usize,
    },
    DinerToggled {
        key: PersonKey,
        selected: bool,
        total_selected: usize,
    },
    CuisineToggled {
        tag: CuisineTag,
        selected: bool,
        total_selected: usize,
    },
    /// The candidate queue was built for a voting round.
    CandidatesPrepared {
        matched: usize,
        fell_back_to_full_list: bool,
    },
    RestaurantOffered {
        key: RestaurantKey,
        name: String,
        position: usize,
        of: usize,
    },
    VoteCast {
        voter: PersonKey,
        voter_index: usize,
        accepted: bool,
    },
    RestaurantRejected {
        key: RestaurantKey,
        remaining: usize,
    },
    /// Every candidate was rejected; the group must choose again.
    CandidatesExhausted,
    DecisionReached {
        key: RestaurantKey,
        name: String,
        decided_at: Timestamp,
    },
    /// Cuisine selection restarted while keeping the diners.
    CuisineRoundRestarted,
    FlowRestarted,
}
