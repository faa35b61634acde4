use contracts::domain::a003_movement::DeadlineStatus;

use crate::domain::a003_movement::api::{MovementBoard, MovementRow};

#[derive(Debug, Clone, PartialEq)]
pub enum MovementBoardState {
    Loading,
    Loaded(MovementBoard),
    /// Shown in both tables
    Failed(String),
}

/// Deadline cell of an active movement.
///
/// The client-side overdue check wins over a stale server status.
pub fn deadline_cell(row: &MovementRow) -> (&'static str, &'static str) {
    if row.overdue {
        return (DeadlineStatus::Late.label(), "badge badge--danger");
    }
    match row.movement.deadline() {
        Some(status @ DeadlineStatus::Late) => (status.label(), "badge badge--danger"),
        Some(status @ DeadlineStatus::Completed) => (status.label(), "badge badge--success"),
        Some(status @ DeadlineStatus::Pending) => (status.label(), "badge"),
        None if row.movement.expected_return_date().is_some() => {
            (DeadlineStatus::Pending.label(), "badge")
        }
        None => ("-", "muted"),
    }
}
