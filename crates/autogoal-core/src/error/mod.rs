//! Error Types
//!
//! Domain-specific failures for the autogoal core. Errors are organized into
//! focused submodules:
//! - `tool`: faults raised while a tool executes
//! - `goal`: invalid goal state transitions and lookups
//! - `memory`: memory store construction and entry validation
//! - `conversions`: the umbrella [`AutogoalError`] and its `From` impls
//!
//! Configuration errors live next to the configuration loader in
//! [`crate::config`].

mod conversions;
mod goal;
mod memory;
mod tool;

pub use conversions::{AutogoalError, AutogoalResult};
pub use goal::{GoalError, GoalResult};
pub use memory::{MemoryError, MemoryResult};
pub use tool::{ToolError, ToolOutcome};
