//! Critical Path Tests for Tool Operations
//!
//! These tests focus on tool dispatch, fault containment and the trace
//! each tool call leaves behind.

use autogoal_testing::{FaultingTool, MockTool, MockToolRegistry, PanickingTool};
use autogoal_workspace::{
    Agent, AgentConfig, AggregatorTool, StringTool, Tool, ToolError, ToolParams,
};
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

fn params(value: serde_json::Value) -> ToolParams {
    ToolParams::from(value.as_object().cloned().unwrap_or_default())
}

/// Test basic tool execution with success response
#[test]
fn test_tool_execution_success() {
    let input = ToolParams::new().with("input", "test_input");
    let mock_tool = MockTool::new("test_tool").with_response(&input, "success_response");

    let result = mock_tool.execute(&input).unwrap();
    assert!(result.is_success());
    assert_eq!(result.output_text(), "success_response");
}

/// Test tool execution with failure response
#[test]
fn test_tool_execution_failure() {
    let input = ToolParams::new().with("input", "error_input");
    let mock_tool = MockTool::new("error_tool").with_failure(&input, "Simulated error");

    let result = mock_tool.execute(&input).unwrap();
    assert!(result.is_failure());
    assert_eq!(result.error(), Some("Simulated error"));
}

/// Test the standard calculator through the agent
#[rstest]
#[case(json!({"operation": "add", "a": 5, "b": 3}), Some(json!(8)), None)]
#[case(json!({"operation": "multiply", "a": 8, "b": 2}), Some(json!(16)), None)]
#[case(json!({"operation": "divide", "a": 1, "b": 0}), None, Some("Division by zero"))]
#[case(json!({"operation": "modulo", "a": 1, "b": 2}), None, Some("Unknown operation: modulo"))]
fn test_calculator_through_agent(
    #[case] input: serde_json::Value,
    #[case] output: Option<serde_json::Value>,
    #[case] error: Option<&str>,
) {
    let mut agent = Agent::new(AgentConfig::default());
    let result = agent.execute_tool("calculator", &params(input));

    assert_eq!(result.output(), output.as_ref());
    assert_eq!(result.error(), error);
    assert_eq!(agent.memory().short_term_len(), 1);
}

/// Test that a missing parameter becomes a failed result, not a panic
#[test]
fn test_missing_parameter_is_contained() {
    let mut agent = Agent::new(AgentConfig::default());
    let result = agent.execute_tool("calculator", &ToolParams::new().with("operation", "add"));

    let expected = format!(
        "Error executing tool: {}",
        ToolError::missing_parameter("calculator", "a")
    );
    assert_eq!(result.error(), Some(expected.as_str()));
}

/// Test that faulting and panicking tools never escape the agent
#[rstest]
#[case(Arc::new(FaultingTool::new("faulty", "disk on fire")) as Arc<dyn Tool>, "disk on fire")]
#[case(Arc::new(PanickingTool::new("panicky", "kaboom")) as Arc<dyn Tool>, "kaboom")]
fn test_faults_are_contained(#[case] tool: Arc<dyn Tool>, #[case] message: &str) {
    let name = tool.name().to_string();
    let mut agent = Agent::builder().tool(tool).build();

    let result = agent.execute_tool(&name, &ToolParams::new());

    let error = result.error().unwrap();
    assert!(error.starts_with("Error executing tool: "));
    assert!(error.contains(message));

    let step = agent.reasoning_history().last().unwrap();
    assert_eq!(step.thought, format!("Using tool {name}"));
    assert_eq!(step.observation.as_deref(), Some(error));
    assert_eq!(
        agent.memory().search_by_tag("action", false).len(),
        1,
        "one trace per call"
    );
}

/// Test that echo returns any JSON value unchanged
#[rstest]
#[case(json!("hi"))]
#[case(json!(42))]
#[case(json!({"k": [1, 2]}))]
fn test_echo_passes_values_through(#[case] message: serde_json::Value) {
    let mut agent = Agent::default();
    let result = agent.execute_tool("echo", &ToolParams::new().with("message", message.clone()));

    assert!(result.is_success());
    assert_eq!(result.output(), Some(&message));
    assert_eq!(result.error(), None);
}

/// Test that an unknown tool leaves no trace
#[test]
fn test_unknown_tool_leaves_no_trace() {
    let mut agent = Agent::new(AgentConfig::default());
    let result = agent.execute_tool("does_not_exist", &ToolParams::new());

    assert_eq!(result.error(), Some("Tool 'does_not_exist' not found"));
    assert!(agent.memory().is_empty());
    assert!(agent.reasoning_history().is_empty());
}

/// Test that disabling reasoning history keeps memory traces only
#[test]
fn test_disabled_reasoning_history() {
    let config = AgentConfig::builder()
        .enable_reasoning_history(false)
        .build()
        .unwrap();
    let mut agent = Agent::new(config);

    agent.execute_tool("echo", &ToolParams::new().with("message", "quiet"));

    assert!(agent.reasoning_history().is_empty());
    assert_eq!(agent.memory().short_term_len(), 1);
}

/// Test the extra standard tools
#[rstest]
#[case("string_tool", json!({"operation": "upper", "text": "hello"}), json!("HELLO"))]
#[case("string_tool", json!({"operation": "reverse", "text": "abc"}), json!("cba"))]
#[case("string_tool", json!({"operation": "length", "text": "héllo"}), json!(5))]
#[case("aggregator", json!({"operation": "sum", "numbers": [1, 2, 3]}), json!(6))]
#[case("aggregator", json!({"operation": "avg", "numbers": [1, 2]}), json!(1.5))]
#[case("aggregator", json!({"operation": "max", "numbers": [4, 9, 2]}), json!(9))]
fn test_extra_tools(
    #[case] name: &str,
    #[case] input: serde_json::Value,
    #[case] expected: serde_json::Value,
) {
    let mut agent = Agent::builder()
        .tool(Arc::new(StringTool))
        .tool(Arc::new(AggregatorTool))
        .build();

    let result = agent.execute_tool(name, &params(input));
    assert_eq!(result.output(), Some(&expected));
}

/// Test that registering a tool twice replaces the first and is remembered
#[test]
fn test_tool_replacement() {
    let first = MockTool::new("dup").with_default_response("first");
    let second = MockTool::new("dup").with_default_response("second");
    let mut agent = Agent::builder().tool(Arc::new(first.clone())).build();

    agent.add_tool(Arc::new(second.clone()));
    let result = agent.execute_tool("dup", &ToolParams::new());

    assert_eq!(result.output_text(), "second");
    assert_eq!(first.call_count(), 0);
    assert_eq!(second.call_count(), 1);
    assert_eq!(agent.tools().list_tools(), ["echo", "calculator", "dup"]);
    assert_eq!(agent.memory().search_by_tag("tool", false).len(), 3);
}

/// Test mock registry handles share call tracking with the built registry
#[test]
fn test_mock_registry_tracking() {
    let mocks = MockToolRegistry::new().with_mock_tools();
    let registry = mocks.build();

    let ok = registry
        .get("test_tool")
        .unwrap()
        .execute(&ToolParams::new())
        .unwrap();
    let failed = registry
        .get("fail_tool")
        .unwrap()
        .execute(&ToolParams::new())
        .unwrap();

    assert!(ok.is_success());
    assert!(failed.is_failure());
    assert_eq!(mocks.get_mock_tool("test_tool").unwrap().call_count(), 1);

    mocks.reset_all();
    assert_eq!(mocks.get_mock_tool("test_tool").unwrap().call_count(), 0);
}
