//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions on workflow stages.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for DecisionStage {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Idle, SelectingDiners) |
///             (SelectingDiners, ChoosingCuisines) |
///             // ... etc
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![SelectingDiners],
///             SelectingDiners => vec![ChoosingCuisines, Idle],
///             // ... etc
///         }
///     }
/// }
///
/// // Usage:
/// let new_stage = current_stage.transition_to(DecisionStage::Voting)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    ///
    /// This is the preferred way to change state, as it ensures
    /// the transition is valid according to the state machine rules.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test enum for StateMachine trait
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum OrderStatus {
        Placed,
        Cooking,
        Delivered,
        Cancelled,
    }

    impl StateMachine for OrderStatus {
        fn can_transition_to(&self, target: &Self) -> bool {
            use OrderStatus::*;
            matches!(
                (self, target),
                (Placed, Cooking) | (Placed, Cancelled) | (Cooking, Delivered) | (Cooking, Cancelled)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use OrderStatus::*;
            match self {
                Placed => vec![Cooking, Cancelled],
                Cooking => vec![Delivered, Cancelled],
                Delivered => vec![],
                Cancelled => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let status = OrderStatus::Placed;
        let result = status.transition_to(OrderStatus::Cooking);
        assert_eq!(result.unwrap(), OrderStatus::Cooking);
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let status = OrderStatus::Placed;
        let result = status.transition_to(OrderStatus::Delivered);
        assert!(result.is_err());
    }

    #[test]
    fn is_terminal_returns_true_for_end_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn is_terminal_returns_false_for_non_terminal() {
        assert!(!OrderStatus::Placed.is_terminal());
        assert!(!OrderStatus::Cooking.is_terminal());
    }

    #[test]
    fn valid_transitions_returns_correct_targets() {
        assert_eq!(
            OrderStatus::Placed.valid_transitions(),
            vec![OrderStatus::Cooking, OrderStatus::Cancelled]
        );
        assert_eq!(OrderStatus::Delivered.valid_transitions(), vec![]);
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for status in [
            OrderStatus::Placed,
            OrderStatus::Cooking,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            for valid_target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&valid_target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    valid_target
                );
            }
        }
    }
}
