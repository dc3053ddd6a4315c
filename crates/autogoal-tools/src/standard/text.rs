use super::unknown_operation;
use autogoal_core::error::ToolOutcome;
use autogoal_core::{Tool, ToolParams, ToolResult};

/// Case conversion, reversal and length of `text`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringTool;

impl Tool for StringTool {
    fn name(&self) -> &str {
        "string_tool"
    }

    fn description(&self) -> &str {
        "Performs string operations like uppercase, lowercase, reverse"
    }

    fn execute(&self, params: &ToolParams) -> ToolOutcome {
        let operation = params.require_str(self.name(), "operation")?;
        let text = params.require_str(self.name(), "text")?;

        let result = match operation {
            "upper" => ToolResult::success(text.to_uppercase()),
            "lower" => ToolResult::success(text.to_lowercase()),
            "reverse" => ToolResult::success(text.chars().rev().collect::<String>()),
            // characters, not bytes
            "length" => ToolResult::success(text.chars().count()),
            other => unknown_operation(other),
        };
        Ok(result)
    }
}
