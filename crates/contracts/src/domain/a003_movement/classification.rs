//! Active vs returned classification.
//!
//! A movement is returned exactly when a return date is present. Both movement
//! tables use this single rule, so a movement can never show up in both.

use super::aggregate::Movement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementState {
    Active,
    Returned,
}

impl MovementState {
    pub fn of(movement: &Movement) -> Self {
        if movement.has_return_date() {
            Self::Returned
        } else {
            Self::Active
        }
    }
}

/// Keep only the movements in `state`, preserving order
pub fn retain_state(movements: Vec<Movement>, state: MovementState) -> Vec<Movement> {
    movements
        .into_iter()
        .filter(|m| MovementState::of(m) == state)
        .collect()
}

/// Partition into `(active, returned)`
pub fn split_by_state(movements: Vec<Movement>) -> (Vec<Movement>, Vec<Movement>) {
    movements
        .into_iter()
        .partition(|m| MovementState::of(m) == MovementState::Active)
}
