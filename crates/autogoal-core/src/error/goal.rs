//! Goal state machine errors.

use crate::goal::GoalStatus;
use crate::identifiers::GoalId;
use thiserror::Error;

/// Errors raised by goal transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalError {
    /// The requested status change is not allowed from the current status.
    #[error("Goal {goal} cannot move from '{from}' to '{to}'")]
    InvalidTransition {
        goal: GoalId,
        from: GoalStatus,
        to: GoalStatus,
    },
}

/// Result type alias for goal operations.
pub type GoalResult<T> = Result<T, GoalError>;
