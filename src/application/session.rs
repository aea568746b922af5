//! Interactive decision session.
//!
//! Thin façade over [`DecisionFlow`] for embedders: it loads both
//! entity lists once at the start, relays each workflow callback, and
//! forwards the flow's step events to `tracing`. The engine itself
//! never touches the store again; edits made through the directories
//! only show up in the next session.

use crate::domain::decision::{
    BallotProgress, DecidedMeal, DecisionError, DecisionFlow, DecisionStage, VotingEntry,
};
use crate::domain::dining::{CuisineTag, Restaurant};
use crate::domain::foundation::PersonKey;
use crate::domain::people::Person;
use crate::ports::EntityStore;

/// Result of one vote, phrased the way a caller presents it.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteOutcome {
    /// The offer stands; the named diner votes next.
    AwaitingNext { next_voter: Person },
    /// Every diner accepted the offer; the dinner is decided.
    Accepted { restaurant: Restaurant },
    /// The offer was rejected; the next candidate is already offered.
    RejectedNext { offer: Restaurant },
    /// The last candidate was rejected. The group has to pick new
    /// cuisines or start over before voting can continue.
    Exhausted,
}

/// Drives one group decision from loading the lists to the final pick.
#[derive(Debug)]
pub struct DecisionSession {
    flow: DecisionFlow,
}

impl DecisionSession {
    /// Loads both entity lists and opens the flow at the entry stage.
    pub async fn begin(store: &dyn EntityStore) -> Self {
        let (people, restaurants) = tokio::join!(store.load_people(), store.load_restaurants());
        tracing::info!(
            people = people.len(),
            restaurants = restaurants.len(),
            "decision session started"
        );
        Self {
            flow: DecisionFlow::new(people, restaurants),
        }
    }

    // ─── Reads ───────────────────────────────────────────────────────

    pub fn stage(&self) -> DecisionStage {
        self.flow.stage()
    }

    /// Read access to the underlying flow for selection and candidate
    /// queries not mirrored here.
    pub fn flow(&self) -> &DecisionFlow {
        &self.flow
    }

    pub fn current_offer(&self) -> Option<&Restaurant> {
        self.flow.current_offer()
    }

    pub fn current_voter(&self) -> Option<&Person> {
        self.flow.current_voter()
    }

    pub fn decided(&self) -> Option<&DecidedMeal> {
        self.flow.decided()
    }

    pub fn available_cuisines(&self) -> Vec<CuisineTag> {
        self.flow.available_cuisines()
    }

    // ─── Workflow callbacks ──────────────────────────────────────────

    /// Opens diner selection; the tap on the entry screen.
    pub fn start(&mut self) -> Result<(), DecisionError> {
        let result = self.flow.start();
        self.publish_events();
        result
    }

    pub fn toggle_person(&mut self, key: &PersonKey) -> Result<bool, DecisionError> {
        let result = self.flow.toggle_diner(key);
        self.publish_events();
        result
    }

    pub fn proceed_to_cuisines(&mut self) -> Result<(), DecisionError> {
        let result = self.flow.proceed_to_cuisines();
        self.publish_events();
        result
    }

    pub fn toggle_cuisine(&mut self, tag: &CuisineTag) -> Result<bool, DecisionError> {
        let result = self.flow.toggle_cuisine(tag);
        self.publish_events();
        result
    }

    /// Enters voting. The returned entry tells the caller whether the
    /// full-list fallback notice applies.
    pub fn proceed_to_voting(&mut self) -> Result<VotingEntry, DecisionError> {
        let result = self.flow.proceed_to_voting();
        self.publish_events();
        result
    }

    pub fn offer_next(&mut self) -> Result<Restaurant, DecisionError> {
        let result = self.flow.offer_next();
        self.publish_events();
        result
    }

    /// Records the current diner's vote.
    ///
    /// Running out of candidates is an expected outcome here, not a
    /// failure: it surfaces as [`VoteOutcome::Exhausted`] so the caller
    /// can present the new-cuisines-or-restart choice.
    pub fn cast_vote(&mut self, accept: bool) -> Result<VoteOutcome, DecisionError> {
        let result = self.flow.cast_vote(accept);
        self.publish_events();
        match result {
            Ok(BallotProgress::AwaitingNext { next_voter }) => {
                Ok(VoteOutcome::AwaitingNext { next_voter })
            }
            Ok(BallotProgress::Unanimous { restaurant }) => Ok(VoteOutcome::Accepted { restaurant }),
            Ok(BallotProgress::RejectedNext { offer }) => Ok(VoteOutcome::RejectedNext { offer }),
            Err(DecisionError::NoCandidatesLeft) => Ok(VoteOutcome::Exhausted),
            Err(other) => Err(other),
        }
    }

    pub fn choose_new_cuisines(&mut self) -> Result<(), DecisionError> {
        let result = self.flow.choose_new_cuisines();
        self.publish_events();
        result
    }

    /// Returns to the entry stage, keeping the loaded lists. Calling
    /// [`start`](Self::start) opens the next round of diner selection.
    pub fn restart(&mut self) {
        self.flow.restart();
        self.publish_events();
    }

    // The flow buffers one event per step; forward them as structured
    // logs, which is all the observability this engine carries.
    fn publish_events(&mut self) {
        for event in self.flow.take_events() {
            match serde_json::to_value(&event) {
                Ok(payload) => tracing::info!(event = %payload, "decision step"),
                Err(err) => tracing::warn!(error = %err, "failed to encode decision event"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;
    use crate::domain::dining::{
        ContactDetails, CuisineTags, PriceInfo, RestaurantName, StarRating,
    };
    use crate::domain::foundation::RestaurantKey;
    use crate::domain::people::{PersonName, Relationship};

    fn person(key: &str, first: &str) -> Person {
        Person::new(
            PersonKey::new(key).unwrap(),
            PersonName::new("first_name", first).unwrap(),
            PersonName::new("last_name", "Tester").unwrap(),
            Relationship::Friend,
        )
    }

    fn restaurant(key: &str, name: &str, cuisines: &[&str]) -> Restaurant {
        Restaurant::new(
            RestaurantKey::new(key).unwrap(),
            RestaurantName::new(name).unwrap(),
            CuisineTags::from_raw(cuisines.iter().copied()).unwrap(),
            StarRating::new(4.0).unwrap(),
            PriceInfo::range(20, 60).unwrap(),
            false,
            ContactDetails::empty(),
        )
    }

    async fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store
            .save_people(&[person("p_1", "Anna"), person("p_2", "Boris")])
            .await
            .unwrap();
        store
            .save_restaurants(&[
                restaurant("r_1", "Italian Paradise", &["Italian", "European"]),
                restaurant("r_2", "Sushi Master", &["Japanese", "Asian"]),
            ])
            .await
            .unwrap();
        store
    }

    fn key(s: &str) -> PersonKey {
        PersonKey::new(s).unwrap()
    }

    fn tag(s: &str) -> CuisineTag {
        CuisineTag::new(s).unwrap()
    }

    #[tokio::test]
    async fn begin_opens_at_the_entry_stage() {
        let store = seeded_store().await;
        let session = DecisionSession::begin(&store).await;

        assert_eq!(session.stage(), DecisionStage::Idle);
        assert_eq!(session.flow().people().len(), 2);
        assert_eq!(session.flow().restaurants().len(), 2);
    }

    #[tokio::test]
    async fn start_moves_to_diner_selection() {
        let store = seeded_store().await;
        let mut session = DecisionSession::begin(&store).await;

        session.start().unwrap();
        assert_eq!(session.stage(), DecisionStage::SelectingDiners);
    }

    #[tokio::test]
    async fn begin_tolerates_an_empty_store() {
        let store = InMemoryStore::new();
        let mut session = DecisionSession::begin(&store).await;

        session.start().unwrap();
        assert!(matches!(
            session.proceed_to_cuisines(),
            Err(DecisionError::NoDinersSelected)
        ));
    }

    #[tokio::test]
    async fn walkthrough_reaches_an_accepted_restaurant() {
        let store = seeded_store().await;
        let mut session = DecisionSession::begin(&store).await;

        session.start().unwrap();
        session.toggle_person(&key("p_1")).unwrap();
        session.toggle_person(&key("p_2")).unwrap();
        session.proceed_to_cuisines().unwrap();
        session.toggle_cuisine(&tag("Japanese")).unwrap();
        let entry = session.proceed_to_voting().unwrap();
        assert!(!entry.fell_back_to_full_list);
        assert_eq!(entry.candidates, 1);

        let offered = session.offer_next().unwrap();
        assert_eq!(offered.name(), "Sushi Master");

        let first = session.cast_vote(true).unwrap();
        assert!(matches!(first, VoteOutcome::AwaitingNext { .. }));

        let second = session.cast_vote(true).unwrap();
        match second {
            VoteOutcome::Accepted { restaurant } => {
                assert_eq!(restaurant.name(), "Sushi Master");
            }
            other => panic!("Expected Accepted, got {:?}", other),
        }
        assert_eq!(session.stage(), DecisionStage::Decided);
        assert!(session.decided().is_some());
    }

    #[tokio::test]
    async fn awaiting_next_names_the_following_voter() {
        let store = seeded_store().await;
        let mut session = DecisionSession::begin(&store).await;

        session.start().unwrap();
        session.toggle_person(&key("p_1")).unwrap();
        session.toggle_person(&key("p_2")).unwrap();
        session.proceed_to_cuisines().unwrap();
        session.proceed_to_voting().unwrap();
        session.offer_next().unwrap();

        match session.cast_vote(true).unwrap() {
            VoteOutcome::AwaitingNext { next_voter } => {
                assert_eq!(next_voter.first_name(), "Boris");
            }
            other => panic!("Expected AwaitingNext, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn rejecting_every_candidate_surfaces_exhausted() {
        let store = seeded_store().await;
        let mut session = DecisionSession::begin(&store).await;

        session.start().unwrap();
        session.toggle_person(&key("p_1")).unwrap();
        session.proceed_to_cuisines().unwrap();
        session.toggle_cuisine(&tag("Italian")).unwrap();
        session.proceed_to_voting().unwrap();
        session.offer_next().unwrap();

        let outcome = session.cast_vote(false).unwrap();
        assert_eq!(outcome, VoteOutcome::Exhausted);
        assert_eq!(session.stage(), DecisionStage::Voting);
    }

    #[tokio::test]
    async fn exhausted_round_recovers_with_new_cuisines() {
        let store = seeded_store().await;
        let mut session = DecisionSession::begin(&store).await;

        session.start().unwrap();
        session.toggle_person(&key("p_1")).unwrap();
        session.proceed_to_cuisines().unwrap();
        session.toggle_cuisine(&tag("Italian")).unwrap();
        session.proceed_to_voting().unwrap();
        session.offer_next().unwrap();
        session.cast_vote(false).unwrap();

        session.choose_new_cuisines().unwrap();

        assert_eq!(session.stage(), DecisionStage::ChoosingCuisines);
        assert_eq!(session.flow().selected_diners().len(), 1);
        assert!(session.flow().selected_cuisines().is_empty());
    }

    #[tokio::test]
    async fn restart_returns_to_the_entry_stage() {
        let store = seeded_store().await;
        let mut session = DecisionSession::begin(&store).await;

        session.start().unwrap();
        session.toggle_person(&key("p_1")).unwrap();
        session.proceed_to_cuisines().unwrap();
        session.restart();

        assert_eq!(session.stage(), DecisionStage::Idle);
        assert!(session.flow().selected_diners().is_empty());

        // the next round opens the same way
        session.start().unwrap();
        assert_eq!(session.stage(), DecisionStage::SelectingDiners);
    }

    #[tokio::test]
    async fn rejection_offers_the_next_candidate() {
        let store = seeded_store().await;
        let mut session = DecisionSession::begin(&store).await;

        session.start().unwrap();
        session.toggle_person(&key("p_1")).unwrap();
        session.proceed_to_cuisines().unwrap();
        session.proceed_to_voting().unwrap();
        let first = session.offer_next().unwrap();

        match session.cast_vote(false).unwrap() {
            VoteOutcome::RejectedNext { offer } => {
                assert_ne!(offer.key(), first.key());
            }
            other => panic!("Expected RejectedNext, got {:?}", other),
        }
    }
}
