//! Tool execution errors.
//!
//! A `ToolError` is a *fault*: something the tool could not turn into a
//! result on its own, such as a missing or mistyped parameter. Expected
//! failure modes (division by zero, unknown operation) are reported as a
//! failed [`ToolResult`](crate::ToolResult) instead. The agent converts every
//! fault into a failed result at its boundary.

use thiserror::Error;

/// Faults raised while a tool executes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// A required parameter was not supplied.
    #[error("Tool '{tool}' missing required parameter '{parameter}'")]
    MissingParameter { tool: String, parameter: String },

    /// A parameter was supplied with the wrong shape.
    #[error("Tool '{tool}' parameter '{parameter}' must be {expected}")]
    InvalidParameter {
        tool: String,
        parameter: String,
        expected: String,
    },

    /// The tool failed in a way it could not describe as a result.
    #[error("Tool '{tool}' execution failed: {message}")]
    ExecutionFailed { tool: String, message: String },
}

impl ToolError {
    /// Create a MissingParameter error.
    pub fn missing_parameter(tool: impl Into<String>, parameter: impl Into<String>) -> Self {
        ToolError::MissingParameter {
            tool: tool.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(
        tool: impl Into<String>,
        parameter: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        ToolError::InvalidParameter {
            tool: tool.into(),
            parameter: parameter.into(),
            expected: expected.into(),
        }
    }

    /// Create an ExecutionFailed error.
    pub fn execution_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        ToolError::ExecutionFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Name of the tool that raised the fault.
    pub fn tool_name(&self) -> &str {
        match self {
            ToolError::MissingParameter { tool, .. }
            | ToolError::InvalidParameter { tool, .. }
            | ToolError::ExecutionFailed { tool, .. } => tool,
        }
    }
}

/// Return type of [`Tool::execute`](crate::Tool::execute).
pub type ToolOutcome = Result<crate::ToolResult, ToolError>;
