use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a [`Goal`](super::Goal).
///
/// ```text
/// Pending ──► InProgress ──► Completed
///    │  ▲          │
///    │  │          └────────► Failed
///    ▼  │
///  Blocked ─────────────────► Failed
/// ```
///
/// `Completed` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
    Blocked,
}

impl GoalStatus {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Pending => "pending",
            GoalStatus::InProgress => "in_progress",
            GoalStatus::Completed => "completed",
            GoalStatus::Failed => "failed",
            GoalStatus::Blocked => "blocked",
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GoalStatus::Completed | GoalStatus::Failed)
    }

    /// Whether the transition `self -> next` is allowed.
    pub fn can_transition_to(&self, next: GoalStatus) -> bool {
        use GoalStatus::{Blocked, Completed, Failed, InProgress, Pending};

        matches!(
            (self, next),
            (Pending, InProgress)
                | (Pending, Completed)
                | (Pending, Failed)
                | (Pending, Blocked)
                | (InProgress, Completed)
                | (InProgress, Failed)
                | (InProgress, Blocked)
                | (Blocked, Pending)
                | (Blocked, Failed)
        )
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
