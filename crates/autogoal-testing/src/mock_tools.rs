//! # Mock Tools for Testing
//!
//! Mock tool implementations that return predictable responses, allowing for
//! reliable and controlled agent testing scenarios.

use autogoal_core::error::ToolOutcome;
use autogoal_core::{Tool, ToolError, ToolParams, ToolResult};
use autogoal_tools::ToolRegistry;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A mock tool that returns predefined responses based on its parameters.
///
/// Responses are keyed by the compact JSON rendering of the parameters, e.g.
/// `{"message":"hi"}`. Clones share call tracking, so a test can keep one
/// handle while the agent owns another.
#[derive(Debug, Clone)]
pub struct MockTool {
    name: String,
    description: String,
    responses: HashMap<String, ToolResult>,
    default_response: Option<ToolResult>,
    call_history: Arc<Mutex<Vec<ToolParams>>>,
}

impl MockTool {
    /// Create a new mock tool with the given name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: format!("Mock tool '{name}'"),
            name,
            responses: HashMap::new(),
            default_response: None,
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a response for specific parameters
    pub fn with_response(mut self, params: &ToolParams, response: impl Into<Value>) -> Self {
        self.responses
            .insert(params.to_string(), ToolResult::success(response));
        self
    }

    /// Add a failure response for specific parameters
    pub fn with_failure(mut self, params: &ToolParams, error: impl Into<String>) -> Self {
        self.responses
            .insert(params.to_string(), ToolResult::failure(error));
        self
    }

    /// Set a default response for any unmatched parameters
    pub fn with_default_response(mut self, response: impl Into<Value>) -> Self {
        self.default_response = Some(ToolResult::success(response));
        self
    }

    /// Set a default failure response for any unmatched parameters
    pub fn with_default_failure(mut self, error: impl Into<String>) -> Self {
        self.default_response = Some(ToolResult::failure(error));
        self
    }

    /// Get the number of times this tool has been called
    pub fn call_count(&self) -> usize {
        self.history().len()
    }

    /// Get the history of parameters passed to this tool
    pub fn call_history(&self) -> Vec<ToolParams> {
        self.history().clone()
    }

    /// Reset call history
    pub fn reset(&self) {
        self.history().clear();
    }

    /// Check if the tool was called with specific parameters
    pub fn was_called_with(&self, params: &ToolParams) -> bool {
        self.history().contains(params)
    }

    fn history(&self) -> MutexGuard<'_, Vec<ToolParams>> {
        // A panicking test thread must not hide the calls made before it.
        self.call_history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Tool for MockTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&self, params: &ToolParams) -> ToolOutcome {
        self.history().push(params.clone());

        let key = params.to_string();
        let result = match (self.responses.get(&key), &self.default_response) {
            (Some(response), _) => response.clone(),
            (None, Some(default)) => default.clone(),
            (None, None) => ToolResult::success(format!("Mock response for: {key}")),
        };
        Ok(result)
    }
}

/// A tool that always faults with `ToolError::ExecutionFailed`.
#[derive(Debug, Clone)]
pub struct FaultingTool {
    name: String,
    message: String,
}

impl FaultingTool {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl Tool for FaultingTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Always returns an execution error"
    }

    fn execute(&self, _params: &ToolParams) -> ToolOutcome {
        Err(ToolError::execution_failed(&self.name, &self.message))
    }
}

/// A tool that panics with a fixed message.
#[derive(Debug, Clone)]
pub struct PanickingTool {
    name: String,
    message: String,
}

impl PanickingTool {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl Tool for PanickingTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Panics whenever it is executed"
    }

    fn execute(&self, _params: &ToolParams) -> ToolOutcome {
        panic!("{}", self.message)
    }
}

/// Builds a [`ToolRegistry`] of mock tools while keeping inspectable handles.
#[derive(Debug, Clone, Default)]
pub struct MockToolRegistry {
    tools: Vec<MockTool>,
}

impl MockToolRegistry {
    /// Create a new empty mock tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mock tool to the registry
    pub fn with_tool(mut self, tool: MockTool) -> Self {
        self.tools.retain(|existing| existing.name != tool.name);
        self.tools.push(tool);
        self
    }

    /// Create a mock tool that always succeeds
    pub fn with_success_tool(self, name: impl Into<String>) -> Self {
        self.with_tool(MockTool::new(name).with_default_response("success"))
    }

    /// Create a mock tool that always fails
    pub fn with_failure_tool(self, name: impl Into<String>) -> Self {
        self.with_tool(MockTool::new(name).with_default_failure("mock failure"))
    }

    /// Add standard mock tools for testing
    pub fn with_mock_tools(self) -> Self {
        self.with_success_tool("test_tool")
            .with_failure_tool("fail_tool")
    }

    /// Get a handle to a mock tool for inspection
    pub fn get_mock_tool(&self, name: &str) -> Option<MockTool> {
        self.tools.iter().find(|tool| tool.name == name).cloned()
    }

    /// Reset all mock tools' call tracking
    pub fn reset_all(&self) {
        for tool in &self.tools {
            tool.reset();
        }
    }

    /// Registry holding clones of every mock; call tracking stays shared.
    pub fn build(&self) -> ToolRegistry {
        self.tools.iter().fold(ToolRegistry::new(), |registry, tool| {
            registry.with_tool(Arc::new(tool.clone()))
        })
    }
}
