//! Decision engine errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, PersonKey, ValidationError};

use super::stage::DecisionStage;

/// Errors raised by the decision workflow.
#[derive(Debug, Clone, Error)]
pub enum DecisionError {
    /// Voting cannot start because there are no restaurants at all.
    #[error("no candidate restaurants are available for voting")]
    EmptyCandidates,

    /// Every candidate has been rejected; the group must pick new
    /// cuisines or restart.
    #[error("every candidate restaurant has been rejected")]
    NoCandidatesLeft,

    /// The operation is only valid in a different stage.
    #[error("operation requires the {expected:?} stage, but the flow is in {actual:?}")]
    StageMismatch {
        expected: DecisionStage,
        actual: DecisionStage,
    },

    /// Moving past diner selection needs at least one diner.
    #[error("at least one diner must be selected")]
    NoDinersSelected,

    /// The toggled key is not on the loaded roster.
    #[error("no person with key '{0}' is on the roster")]
    UnknownDiner(PersonKey),

    /// A new candidate cannot be offered while votes are being collected.
    #[error("a ballot is already in progress for the current offer")]
    BallotInProgress,

    /// A vote arrived with no restaurant on offer.
    #[error("no restaurant is currently offered for voting")]
    NoActiveBallot,

    /// The stage machine rejected a transition.
    #[error("stage transition rejected: {0}")]
    InvalidTransition(ValidationError),
}

impl From<DecisionError> for DomainError {
    fn from(err: DecisionError) -> Self {
        let code = match &err {
            DecisionError::EmptyCandidates => ErrorCode::EmptyCandidates,
            DecisionError::NoCandidatesLeft => ErrorCode::NoCandidatesLeft,
            DecisionError::StageMismatch { .. } => ErrorCode::StageMismatch,
            DecisionError::NoDinersSelected => ErrorCode::NoDinersSelected,
            DecisionError::UnknownDiner(_) => ErrorCode::PersonNotFound,
            DecisionError::BallotInProgress => ErrorCode::BallotInProgress,
            DecisionError::NoActiveBallot => ErrorCode::NoActiveBallot,
            DecisionError::InvalidTransition(_) => ErrorCode::StageMismatch,
        };
        let message = err.to_string();
        match err {
            DecisionError::UnknownDiner(key) => {
                DomainError::new(code, message).with_detail("person_key", key.as_str())
            }
            _ => DomainError::new(code, message),
        }
    }
}
