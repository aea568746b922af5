//! The decision flow aggregate.
//!
//! Owns every piece of workflow state: the roster and restaurant list
//! captured at entry, the current stage, both selections, the candidate
//! queue, the active ballot, and the final decision. All I/O happens
//! before construction, so the flow is pure state transitions and can
//! be driven directly in tests.

use serde::Serialize;

use crate::domain::dining::{CuisineTag, Restaurant};
use crate::domain::foundation::{PersonKey, StateMachine, Timestamp};
use crate::domain::people::Person;

use super::ballot::{Ballot, BallotOutcome};
use super::errors::DecisionError;
use super::events::DecisionEvent;
use super::filter;
use super::queue::CandidateQueue;
use super::selection::{CuisineSelection, DinerSelection};
use super::stage::DecisionStage;

/// Outcome of entering the voting stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotingEntry {
    /// True when no restaurant matched the cuisine selection and the
    /// full list was substituted instead.
    pub fell_back_to_full_list: bool,
    /// Number of candidates in the queue.
    pub candidates: usize,
}

/// Progress of the active ballot after one vote.
#[derive(Debug, Clone, PartialEq)]
pub enum BallotProgress {
    /// More diners still have to vote on the current offer.
    AwaitingNext { next_voter: Person },
    /// Every diner accepted; the decision is made.
    Unanimous { restaurant: Restaurant },
    /// A diner rejected the offer; the next candidate is already offered.
    RejectedNext { offer: Restaurant },
}

/// The unanimously accepted restaurant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecidedMeal {
    pub restaurant: Restaurant,
    pub decided_at: Timestamp,
}

/// Aggregate driving one decision from start to a chosen restaurant.
#[derive(Debug, Clone)]
pub struct DecisionFlow {
    people: Vec<Person>,
    restaurants: Vec<Restaurant>,
    stage: DecisionStage,
    diners: DinerSelection,
    cuisines: CuisineSelection,
    queue: CandidateQueue,
    offer: Option<Restaurant>,
    ballot: Option<Ballot>,
    decided: Option<DecidedMeal>,
    events: Vec<DecisionEvent>,
}

impl DecisionFlow {
    /// Creates a flow over the given roster and restaurant list.
    ///
    /// Both lists are fixed for the lifetime of the flow; edits to the
    /// stored entities only show up in the next flow.
    pub fn new(people: Vec<Person>, restaurants: Vec<Restaurant>) -> Self {
        Self {
            people,
            restaurants,
            stage: DecisionStage::Idle,
            diners: DinerSelection::new(),
            cuisines: CuisineSelection::new(),
            queue: CandidateQueue::new(),
            offer: None,
            ballot: None,
            decided: None,
            events: Vec::new(),
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────

    pub fn stage(&self) -> DecisionStage {
        self.stage
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn selected_diners(&self) -> &DinerSelection {
        &self.diners
    }

    pub fn selected_cuisines(&self) -> &CuisineSelection {
        &self.cuisines
    }

    /// Candidates still in the running for the current voting round.
    pub fn candidates_left(&self) -> usize {
        self.queue.len()
    }

    /// The restaurant currently offered for voting, if any.
    pub fn current_offer(&self) -> Option<&Restaurant> {
        self.offer.as_ref()
    }

    /// The diner whose vote is expected next, if a ballot is active.
    pub fn current_voter(&self) -> Option<&Person> {
        let ballot = self.ballot.as_ref()?;
        self.diners
            .as_slice()
            .get(ballot.voter_index())
            .and_then(|key| self.person_by_key(key))
    }

    /// The selected diners in voting order.
    pub fn voters(&self) -> Vec<&Person> {
        self.diners
            .iter()
            .filter_map(|key| self.person_by_key(key))
            .collect()
    }

    pub fn decided(&self) -> Option<&DecidedMeal> {
        self.decided.as_ref()
    }

    /// Drains accumulated events. The caller is expected to drain after
    /// every operation; otherwise the buffer keeps growing.
    pub fn take_events(&mut self) -> Vec<DecisionEvent> {
        std::mem::take(&mut self.events)
    }

    // ─── Gates ───────────────────────────────────────────────────────

    /// Whether the flow can move from diner selection to cuisines.
    pub fn can_proceed_to_cuisines(&self) -> bool {
        self.stage == DecisionStage::SelectingDiners && !self.diners.is_empty()
    }

    /// Whether the flow can move from cuisines to voting.
    pub fn can_proceed_to_voting(&self) -> bool {
        self.stage == DecisionStage::ChoosingCuisines && !self.restaurants.is_empty()
    }

    // ─── Transitions ─────────────────────────────────────────────────

    /// Begins the workflow, moving from the entry stage to diner selection.
    pub fn start(&mut self) -> Result<(), DecisionError> {
        self.expect_stage(DecisionStage::Idle)?;
        self.enter_stage(DecisionStage::SelectingDiners)?;
        self.push(DecisionEvent::FlowStarted {
            people_available: self.people.len(),
            restaurants_available: self.restaurants.len(),
        });
        Ok(())
    }

    /// Flips whether the given person joins the dinner, returning true
    /// when they are selected after the call.
    pub fn toggle_diner(&mut self, key: &PersonKey) -> Result<bool, DecisionError> {
        self.expect_stage(DecisionStage::SelectingDiners)?;
        if self.person_by_key(key).is_none() {
            return Err(DecisionError::UnknownDiner(key.clone()));
        }
        let selected = self.diners.toggle(key.clone());
        self.push(DecisionEvent::DinerToggled {
            key: key.clone(),
            selected,
            total_selected: self.diners.len(),
        });
        Ok(selected)
    }

    /// Moves to cuisine selection. The previous cuisine choices are
    /// discarded so every round starts from a clean filter.
    pub fn proceed_to_cuisines(&mut self) -> Result<(), DecisionError> {
        self.expect_stage(DecisionStage::SelectingDiners)?;
        if self.diners.is_empty() {
            return Err(DecisionError::NoDinersSelected);
        }
        self.cuisines.clear();
        self.enter_stage(DecisionStage::ChoosingCuisines)
    }

    /// The cuisines the picker offers: everything served by at least
    /// one restaurant, in first-appearance order.
    pub fn available_cuisines(&self) -> Vec<CuisineTag> {
        filter::available_cuisines(&self.restaurants)
    }

    /// Flips a cuisine preference, returning true when it is selected
    /// after the call.
    ///
    /// Tags are not checked against the picker list; an off-list tag
    /// simply matches nothing and voting falls back to the full list.
    pub fn toggle_cuisine(&mut self, tag: &CuisineTag) -> Result<bool, DecisionError> {
        self.expect_stage(DecisionStage::ChoosingCuisines)?;
        let selected = self.cuisines.toggle(tag.clone());
        self.push(DecisionEvent::CuisineToggled {
            tag: tag.clone(),
            selected,
            total_selected: self.cuisines.len(),
        });
        Ok(selected)
    }

    /// Builds the candidate queue from the cuisine selection and enters
    /// the voting stage.
    ///
    /// A selection that matches nothing falls back to the full
    /// restaurant list rather than presenting an empty vote. Only a
    /// flow with no restaurants at all refuses to enter voting.
    pub fn proceed_to_voting(&mut self) -> Result<VotingEntry, DecisionError> {
        self.expect_stage(DecisionStage::ChoosingCuisines)?;

        let ranked = filter::rank_by_preference(&self.restaurants, &self.cuisines);
        let matched = ranked.len();
        let fell_back = ranked.is_empty() && !self.cuisines.is_empty();
        let candidates = if fell_back {
            self.restaurants.clone()
        } else {
            ranked
        };
        if candidates.is_empty() {
            return Err(DecisionError::EmptyCandidates);
        }

        self.queue = CandidateQueue::from_ranked(candidates);
        self.offer = None;
        self.ballot = None;
        self.enter_stage(DecisionStage::Voting)?;
        self.push(DecisionEvent::CandidatesPrepared {
            matched,
            fell_back_to_full_list: fell_back,
        });
        Ok(VotingEntry {
            fell_back_to_full_list: fell_back,
            candidates: self.queue.len(),
        })
    }

    /// Offers the next candidate and opens its ballot.
    ///
    /// Only valid while no ballot is being voted on; after a rejection
    /// the follow-up candidate is offered automatically.
    pub fn offer_next(&mut self) -> Result<Restaurant, DecisionError> {
        self.expect_stage(DecisionStage::Voting)?;
        if self.ballot.is_some() {
            return Err(DecisionError::BallotInProgress);
        }
        self.offer_from_queue()
    }

    /// Records the current diner's vote on the offered restaurant.
    ///
    /// An accept either hands over to the next diner or, when the vote
    /// was unanimous, decides the dinner. A reject removes the offer
    /// from the queue and immediately offers the next candidate;
    /// rejecting the last candidate fails with
    /// [`DecisionError::NoCandidatesLeft`], after which the group picks
    /// new cuisines or restarts.
    pub fn cast_vote(&mut self, accept: bool) -> Result<BallotProgress, DecisionError> {
        self.expect_stage(DecisionStage::Voting)?;
        let (voter_index, outcome) = match self.ballot.as_mut() {
            Some(ballot) => {
                let index = ballot.voter_index();
                (index, ballot.record(accept))
            }
            None => return Err(DecisionError::NoActiveBallot),
        };
        let voter = self.selected_voter(voter_index)?;
        self.push(DecisionEvent::VoteCast {
            voter: voter.key().clone(),
            voter_index,
            accepted: accept,
        });

        match outcome {
            BallotOutcome::AwaitingNext { next_voter } => {
                let next = self.selected_voter(next_voter)?;
                Ok(BallotProgress::AwaitingNext { next_voter: next })
            }
            BallotOutcome::Unanimous => {
                let restaurant = self.take_offer()?;
                self.ballot = None;
                self.enter_stage(DecisionStage::Decided)?;
                let decided_at = Timestamp::now();
                self.push(DecisionEvent::DecisionReached {
                    key: restaurant.key().clone(),
                    name: restaurant.name().to_string(),
                    decided_at,
                });
                self.decided = Some(DecidedMeal {
                    restaurant: restaurant.clone(),
                    decided_at,
                });
                Ok(BallotProgress::Unanimous { restaurant })
            }
            BallotOutcome::Rejected => {
                let rejected = self.take_offer()?;
                self.ballot = None;
                self.queue.remove(rejected.key());
                self.push(DecisionEvent::RestaurantRejected {
                    key: rejected.key().clone(),
                    remaining: self.queue.len(),
                });
                if self.queue.is_empty() {
                    self.push(DecisionEvent::CandidatesExhausted);
                    return Err(DecisionError::NoCandidatesLeft);
                }
                let offer = self.offer_from_queue()?;
                Ok(BallotProgress::RejectedNext { offer })
            }
        }
    }

    /// Returns to cuisine selection for another round, keeping the
    /// selected diners but discarding cuisines and candidates.
    pub fn choose_new_cuisines(&mut self) -> Result<(), DecisionError> {
        self.expect_stage(DecisionStage::Voting)?;
        self.cuisines.clear();
        self.queue = CandidateQueue::new();
        self.offer = None;
        self.ballot = None;
        self.enter_stage(DecisionStage::ChoosingCuisines)?;
        self.push(DecisionEvent::CuisineRoundRestarted);
        Ok(())
    }

    /// Resets the whole workflow back to the entry stage.
    ///
    /// Valid from any stage, so it bypasses the stage machine. The
    /// loaded roster and restaurant list are kept.
    pub fn restart(&mut self) {
        self.stage = DecisionStage::Idle;
        self.diners.clear();
        self.cuisines.clear();
        self.queue = CandidateQueue::new();
        self.offer = None;
        self.ballot = None;
        self.decided = None;
        self.push(DecisionEvent::FlowRestarted);
    }

    // ─── Internals ───────────────────────────────────────────────────

    fn expect_stage(&self, expected: DecisionStage) -> Result<(), DecisionError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(DecisionError::StageMismatch {
                expected,
                actual: self.stage,
            })
        }
    }

    fn enter_stage(&mut self, target: DecisionStage) -> Result<(), DecisionError> {
        self.stage = self
            .stage
            .transition_to(target)
            .map_err(DecisionError::InvalidTransition)?;
        Ok(())
    }

    fn offer_from_queue(&mut self) -> Result<Restaurant, DecisionError> {
        let position = self.queue.position();
        let of = self.queue.len();
        let restaurant = self.queue.offer_next()?;
        self.ballot = Some(Ballot::new(restaurant.key().clone(), self.diners.len()));
        self.offer = Some(restaurant.clone());
        self.push(DecisionEvent::RestaurantOffered {
            key: restaurant.key().clone(),
            name: restaurant.name().to_string(),
            position: position + 1,
            of,
        });
        Ok(restaurant)
    }

    fn person_by_key(&self, key: &PersonKey) -> Option<&Person> {
        self.people.iter().find(|person| person.key() == key)
    }

    // The voter pointer stays within the diner selection while a ballot
    // is active, and the selection cannot change during voting.
    fn selected_voter(&self, index: usize) -> Result<Person, DecisionError> {
        self.diners
            .as_slice()
            .get(index)
            .and_then(|key| self.person_by_key(key))
            .cloned()
            .ok_or(DecisionError::NoActiveBallot)
    }

    fn take_offer(&mut self) -> Result<Restaurant, DecisionError> {
        self.offer.take().ok_or(DecisionError::NoActiveBallot)
    }

    fn push(&mut self, event: DecisionEvent) {
        self.events.push(event);
    }
}
