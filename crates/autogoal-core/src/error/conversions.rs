//! Umbrella error type and `From` conversions, so callers mixing goal,
//! memory, tool and configuration operations can use `?` throughout.

use super::goal::GoalError;
use super::memory::MemoryError;
use super::tool::ToolError;
use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for autogoal operations.
#[derive(Debug, Error)]
pub enum AutogoalError {
    /// Tool faults.
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Goal state machine errors.
    #[error("Goal error: {0}")]
    Goal(#[from] GoalError),

    /// Memory store errors.
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),

    /// Configuration loading or validation errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for autogoal operations.
pub type AutogoalResult<T> = Result<T, AutogoalError>;
