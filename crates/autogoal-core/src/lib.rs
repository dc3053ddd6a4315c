//! # Autogoal Core
//!
//! Core traits and types for the autogoal execution model. This crate holds
//! the pieces every other crate agrees on:
//!
//! - **[`Tool`]**: the capability contract (`name`, `description`, `execute`)
//! - **[`ToolResult`]** / **[`ToolParams`]**: the uniform result and input types
//! - **[`Goal`]** / **[`GoalManager`]**: hierarchical goals and priority selection
//! - **[`AgentConfig`]** / **[`SystemConfig`]**: explicitly constructed configuration
//! - **[`error`]**: typed errors for every concern

pub mod config;
pub mod error;
pub mod goal;
pub mod identifiers;
pub mod tool;

/// Free-form key/value metadata attached to results, goals and memories.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

pub use config::{AgentConfig, AgentConfigBuilder, ConfigError, ConfigFile, SystemConfig};
pub use error::{AutogoalError, AutogoalResult, GoalError, MemoryError, ToolError};
pub use goal::{Goal, GoalManager, GoalStatus};
pub use identifiers::{EntryId, GoalId};
pub use tool::{Tool, ToolParams, ToolResult};
