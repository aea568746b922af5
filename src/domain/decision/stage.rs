//! Decision workflow stages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Stage of the decision workflow.
///
/// Mirrors the screen flow: an entry point, diner selection, cuisine
/// filtering, sequential voting, and the final result. Every stage can
/// fall back to `Idle` through a full restart, and voting can return
/// to cuisine selection when the candidates run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStage {
    Idle,
    SelectingDiners,
    ChoosingCuisines,
    Voting,
    Decided,
}

impl DecisionStage {
    /// Screen title shown for the stage.
    pub fn label(&self) -> &'static str {
        match self {
            DecisionStage::Idle => "Decision Time",
            DecisionStage::SelectingDiners => "Who Is Going?",
            DecisionStage::ChoosingCuisines => "Filter Restaurants",
            DecisionStage::Voting => "Restaurant Choice",
            DecisionStage::Decided => "Enjoy Your Meal",
        }
    }
}

impl StateMachine for DecisionStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DecisionStage::*;
        matches!(
            (self, target),
            (Idle, SelectingDiners)
                | (SelectingDiners, ChoosingCuisines)
                | (SelectingDiners, Idle)
                | (ChoosingCuisines, Voting)
                | (ChoosingCuisines, Idle)
                | (Voting, Decided)
                | (Voting, ChoosingCuisines)
                | (Voting, Idle)
                | (Decided, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DecisionStage::*;
        match self {
            Idle => vec![SelectingDiners],
            SelectingDiners => vec![ChoosingCuisines, Idle],
            ChoosingCuisines => vec![Voting, Idle],
            Voting => vec![Decided, ChoosingCuisines, Idle],
            Decided => vec![Idle],
        }
    }
}
