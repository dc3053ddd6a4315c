use super::{Goal, GoalStatus};
use crate::identifiers::GoalId;

/// Owns the root goals and selects which one to execute next.
///
/// Only root status is consulted when selecting: a root is eligible while it
/// is `Pending`, whatever the state of its sub-goals.
#[derive(Debug, Default, Clone)]
pub struct GoalManager {
    goals: Vec<Goal>,
}

impl GoalManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a root goal and return its id.
    pub fn add_goal(&mut self, goal: Goal) -> GoalId {
        let id = goal.id();
        tracing::debug!(goal_id = %id, priority = goal.priority(), "Goal registered");
        self.goals.push(goal);
        id
    }

    /// Highest-priority pending root; ties go to the goal added first.
    pub fn get_next_goal(&self) -> Option<&Goal> {
        self.next_goal_index().map(|index| &self.goals[index])
    }

    /// Position of [`GoalManager::get_next_goal`] in insertion order.
    pub fn next_goal_index(&self) -> Option<usize> {
        // `max_by_key` keeps the last maximum, so reduce by hand.
        self.goals
            .iter()
            .enumerate()
            .filter(|(_, goal)| goal.status() == GoalStatus::Pending)
            .reduce(|best, candidate| {
                if candidate.1.priority() > best.1.priority() {
                    candidate
                } else {
                    best
                }
            })
            .map(|(index, _)| index)
    }

    pub fn get_all_goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Completed roots, insertion order.
    pub fn get_completed_goals(&self) -> Vec<&Goal> {
        self.with_status(GoalStatus::Completed)
    }

    /// Pending roots, insertion order.
    pub fn get_pending_goals(&self) -> Vec<&Goal> {
        self.with_status(GoalStatus::Pending)
    }

    /// Root goal by id.
    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id() == id)
    }

    pub fn get_mut(&mut self, id: GoalId) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|goal| goal.id() == id)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    fn with_status(&self, status: GoalStatus) -> Vec<&Goal> {
        self.goals
            .iter()
            .filter(|goal| goal.status() == status)
            .collect()
    }
}
