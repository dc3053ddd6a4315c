//! # Goals
//!
//! A [`Goal`] is a node in a tree: it exclusively owns its sub-goals and
//! refers to its parent only by [`GoalId`]. The [`GoalManager`] holds the
//! flat list of *root* goals and picks the next one to work on by priority.
//!
//! Status changes go through the `mark_*` methods, which validate the
//! transition against [`GoalStatus::can_transition_to`] and leave the goal
//! untouched on error.

mod manager;
mod status;

pub use manager::GoalManager;
pub use status::GoalStatus;

use crate::Metadata;
use crate::error::{GoalError, GoalResult};
use crate::identifiers::GoalId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Metadata key holding the failure message of a failed goal.
pub const ERROR_KEY: &str = "error";
/// Metadata key holding the reason a goal is blocked.
pub const BLOCKED_REASON_KEY: &str = "blocked_reason";

/// A unit of work, optionally decomposed into ordered sub-goals.
#[derive(Debug, Clone, Serialize)]
pub struct Goal {
    id: GoalId,
    description: String,
    status: GoalStatus,
    priority: i32,
    parent: Option<GoalId>,
    sub_goals: Vec<Goal>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    result: Option<Value>,
    metadata: Metadata,
}

impl Goal {
    /// Create a pending goal with priority 0.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: GoalId::new(),
            description: description.into(),
            status: GoalStatus::Pending,
            priority: 0,
            parent: None,
            sub_goals: Vec::new(),
            created_at: Utc::now(),
            completed_at: None,
            result: None,
            metadata: Metadata::new(),
        }
    }

    /// Set the priority (higher = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Attach a sub-goal using the builder pattern.
    pub fn with_sub_goal(mut self, goal: Goal) -> Self {
        self.add_sub_goal(goal);
        self
    }

    /// Attach `goal` as the last child of this goal and set its parent link.
    pub fn add_sub_goal(&mut self, mut goal: Goal) -> GoalId {
        goal.parent = Some(self.id);
        let id = goal.id;
        self.sub_goals.push(goal);
        id
    }

    pub fn id(&self) -> GoalId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> GoalStatus {
        self.status
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Id of the goal this one was attached to, if any.
    pub fn parent(&self) -> Option<GoalId> {
        self.parent
    }

    pub fn sub_goals(&self) -> &[Goal] {
        &self.sub_goals
    }

    /// Mutable access to the children. A slice, so children can change
    /// state but cannot be re-parented or removed.
    pub fn sub_goals_mut(&mut self) -> &mut [Goal] {
        &mut self.sub_goals
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Insert or replace a metadata entry.
    pub fn insert_metadata(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// `Pending -> InProgress`.
    ///
    /// # Errors
    ///
    /// `GoalError::InvalidTransition` from any other status, including
    /// `Failed`: a failed goal is not retried in place.
    pub fn mark_in_progress(&mut self) -> GoalResult<()> {
        self.transition(GoalStatus::InProgress)
    }

    /// Move to `Completed`, recording the completion time and result.
    pub fn mark_completed(&mut self, result: Option<Value>) -> GoalResult<()> {
        self.transition(GoalStatus::Completed)?;
        self.completed_at = Some(Utc::now());
        self.result = result;
        Ok(())
    }

    /// Move to `Failed`, recording `error` under the `"error"` metadata key.
    pub fn mark_failed(&mut self, error: Option<&str>) -> GoalResult<()> {
        self.transition(GoalStatus::Failed)?;
        if let Some(error) = error {
            self.metadata.insert(ERROR_KEY.to_string(), error.into());
        }
        Ok(())
    }

    /// Park the goal until an external resource is available.
    pub fn mark_blocked(&mut self, reason: &str) -> GoalResult<()> {
        self.transition(GoalStatus::Blocked)?;
        self.metadata
            .insert(BLOCKED_REASON_KEY.to_string(), reason.into());
        Ok(())
    }

    /// `Blocked -> Pending`.
    pub fn unblock(&mut self) -> GoalResult<()> {
        self.transition(GoalStatus::Pending)?;
        self.metadata.remove(BLOCKED_REASON_KEY);
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.status == GoalStatus::Completed
    }

    /// True when every direct child is completed (vacuously true for leaves).
    pub fn all_sub_goals_completed(&self) -> bool {
        self.sub_goals.iter().all(Goal::is_completed)
    }

    /// Failure message recorded by [`Goal::mark_failed`].
    pub fn error(&self) -> Option<&str> {
        self.metadata.get(ERROR_KEY).and_then(Value::as_str)
    }

    /// Find a goal by id anywhere in this tree, including the root.
    pub fn find(&self, id: GoalId) -> Option<&Goal> {
        self.depth_first().find(|goal| goal.id == id)
    }

    /// Pre-order traversal of this tree, starting with `self`.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst { stack: vec![self] }
    }

    /// Number of goals in this tree, including the root.
    pub fn count(&self) -> usize {
        self.depth_first().count()
    }

    fn transition(&mut self, next: GoalStatus) -> GoalResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(GoalError::InvalidTransition {
                goal: self.id,
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

/// Pre-order iterator returned by [`Goal::depth_first`].
pub struct DepthFirst<'a> {
    stack: Vec<&'a Goal>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Goal;

    fn next(&mut self) -> Option<Self::Item> {
        let goal = self.stack.pop()?;
        self.stack.extend(goal.sub_goals.iter().rev());
        Some(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn new_goal_is_pending() {
        let goal = Goal::new("write tests").with_priority(3);
        assert_eq!(goal.status(), GoalStatus::Pending);
        assert_eq!(goal.priority(), 3);
        assert!(goal.parent().is_none());
        assert!(goal.completed_at().is_none());
        assert!(goal.all_sub_goals_completed());
    }

    #[test]
    fn add_sub_goal_sets_parent_link() {
        let mut parent = Goal::new("parent");
        let child_id = parent.add_sub_goal(Goal::new("child"));

        assert_eq!(parent.sub_goals().len(), 1);
        assert_eq!(parent.sub_goals()[0].id(), child_id);
        assert_eq!(parent.sub_goals()[0].parent(), Some(parent.id()));
    }

    #[test]
    fn completion_records_time_and_result() {
        let mut goal = Goal::new("finish");
        goal.mark_in_progress().unwrap();
        goal.mark_completed(Some(json!("done"))).unwrap();

        assert!(goal.is_completed());
        assert!(goal.completed_at().is_some());
        assert_eq!(goal.result(), Some(&json!("done")));
    }

    #[test]
    fn failure_records_error_in_metadata() {
        let mut goal = Goal::new("explode");
        goal.mark_failed(Some("kaboom")).unwrap();

        assert_eq!(goal.status(), GoalStatus::Failed);
        assert_eq!(goal.error(), Some("kaboom"));
    }

    #[rstest]
    #[case(GoalStatus::Completed)]
    #[case(GoalStatus::Failed)]
    fn terminal_states_reject_every_transition(#[case] terminal: GoalStatus) {
        let mut goal = Goal::new("terminal");
        match terminal {
            GoalStatus::Completed => goal.mark_completed(None).unwrap(),
            _ => goal.mark_failed(None).unwrap(),
        }

        assert!(goal.mark_in_progress().is_err());
        assert!(goal.mark_completed(None).is_err());
        assert!(goal.mark_failed(None).is_err());
        assert!(goal.mark_blocked("wait").is_err());
        assert!(goal.unblock().is_err());
        assert_eq!(goal.status(), terminal);
    }

    #[test]
    fn in_progress_cannot_be_reentered() {
        let mut goal = Goal::new("once");
        goal.mark_in_progress().unwrap();

        let err = goal.mark_in_progress().unwrap_err();
        assert_eq!(
            err,
            GoalError::InvalidTransition {
                goal: goal.id(),
                from: GoalStatus::InProgress,
                to: GoalStatus::InProgress,
            }
        );
    }

    #[test]
    fn blocked_goal_round_trips_to_pending() {
        let mut goal = Goal::new("needs network");
        goal.mark_blocked("offline").unwrap();
        assert_eq!(goal.status(), GoalStatus::Blocked);
        assert_eq!(goal.metadata()[BLOCKED_REASON_KEY], json!("offline"));
        assert!(goal.mark_in_progress().is_err());

        goal.unblock().unwrap();
        assert_eq!(goal.status(), GoalStatus::Pending);
        assert!(!goal.metadata().contains_key(BLOCKED_REASON_KEY));
    }

    #[test]
    fn depth_first_visits_in_pre_order() {
        let goal = Goal::new("root")
            .with_sub_goal(Goal::new("a").with_sub_goal(Goal::new("a1")))
            .with_sub_goal(Goal::new("b"));

        let order: Vec<&str> = goal.depth_first().map(Goal::description).collect();
        assert_eq!(order, vec!["root", "a", "a1", "b"]);
        assert_eq!(goal.count(), 4);

        let a1 = goal.sub_goals()[0].sub_goals()[0].id();
        assert_eq!(goal.find(a1).map(Goal::description), Some("a1"));
    }

    #[test]
    fn all_sub_goals_completed_checks_direct_children() {
        let mut goal = Goal::new("root")
            .with_sub_goal(Goal::new("a"))
            .with_sub_goal(Goal::new("b"));
        assert!(!goal.all_sub_goals_completed());

        for child in goal.sub_goals_mut() {
            child.mark_completed(None).unwrap();
        }
        assert!(goal.all_sub_goals_completed());
    }
}
