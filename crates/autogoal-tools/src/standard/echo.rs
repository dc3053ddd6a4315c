use autogoal_core::error::ToolOutcome;
use autogoal_core::{Tool, ToolParams, ToolResult};
use serde_json::Value;

/// Returns the `message` parameter unchanged, whatever its JSON type
/// (empty string when absent).
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoTool;

impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echoes back the provided message"
    }

    fn execute(&self, params: &ToolParams) -> ToolOutcome {
        let message = params
            .get("message")
            .cloned()
            .unwrap_or_else(|| Value::from(""));
        Ok(ToolResult::success(message))
    }
}
