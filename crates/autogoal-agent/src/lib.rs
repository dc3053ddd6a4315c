//! # Autogoal Agent
//!
//! The [`Agent`] owns a [`ToolRegistry`](autogoal_tools::ToolRegistry), a
//! [`MemoryStore`](autogoal_memory::MemoryStore), a
//! [`GoalManager`](autogoal_core::GoalManager) and an append-only reasoning
//! trace, and drives them:
//!
//! - [`Agent::execute_tool`] runs a tool and records what happened
//! - [`Agent::execute_goal`] executes a goal tree depth-first, children
//!   before parent, stopping at the first failing child
//! - [`Agent::run`] repeatedly executes the highest-priority pending root
//!
//! No public operation panics or returns an error: tool faults, tool panics
//! and failed goals all surface as values.

mod agent;
mod reasoning;
mod summary;

pub use agent::{Agent, AgentBuilder, FAILED_SUB_GOAL_KEY};
pub use reasoning::ReasoningStep;
pub use summary::{AgentStatus, RunSummary};
