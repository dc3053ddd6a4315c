//! # Tool Contract
//!
//! Tools extend an agent beyond its own bookkeeping: arithmetic, text
//! manipulation, aggregation, or anything a third party plugs in. Every tool
//! implements the same three-member contract:
//!
//! - **`name`**: unique registry key
//! - **`description`**: human-readable summary
//! - **`execute`**: run with named [`ToolParams`] and produce a [`ToolResult`]
//!
//! ## Failure modes
//!
//! A well-formed tool reports *expected* failures (division by zero, unknown
//! operation) as `Ok(ToolResult::failure(..))`. A returned
//! `Err(ToolError)` is a fault (missing parameter, wrong parameter type); the
//! agent converts faults into failed results, so nothing escapes the tool
//! boundary either way.
//!
//! ```rust
//! use autogoal_core::{Tool, ToolParams, ToolResult};
//! use autogoal_core::error::ToolOutcome;
//!
//! struct ShoutTool;
//!
//! impl Tool for ShoutTool {
//!     fn name(&self) -> &str {
//!         "shout"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Uppercases the provided text"
//!     }
//!
//!     fn execute(&self, params: &ToolParams) -> ToolOutcome {
//!         let text = params.require_str(self.name(), "text")?;
//!         Ok(ToolResult::success(text.to_uppercase()))
//!     }
//! }
//!
//! let result = ShoutTool
//!     .execute(&ToolParams::new().with("text", "hi"))
//!     .unwrap();
//! assert_eq!(result.output_text(), "HI");
//! ```

use crate::Metadata;
use crate::error::{ToolError, ToolOutcome};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Trait defining an external capability that agents can invoke.
///
/// Tools are stored behind `Arc<dyn Tool>` in a registry, so they must be
/// shareable across threads even though the core itself runs on one.
pub trait Tool: Send + Sync {
    /// Returns the unique name identifier for this tool.
    ///
    /// The registry keys tools by this name; registering a second tool with
    /// the same name replaces the first.
    fn name(&self) -> &str;

    /// Returns a human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Execute the tool with the provided named parameters.
    ///
    /// # Returns
    ///
    /// `Ok(ToolResult)` for both successful and expected-failure outcomes,
    /// `Err(ToolError)` when the tool could not run at all.
    fn execute(&self, params: &ToolParams) -> ToolOutcome;
}

/// The result of executing a tool.
///
/// Fields are private and the only constructors are [`ToolResult::success`]
/// and [`ToolResult::failure`], so a successful result never carries an
/// error and a failed result never carries output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    success: bool,
    output: Option<Value>,
    error: Option<String>,
    metadata: Metadata,
}

impl ToolResult {
    /// Create a successful result carrying `output`.
    pub fn success(output: impl Into<Value>) -> Self {
        Self {
            success: true,
            output: Some(output.into()),
            error: None,
            metadata: Metadata::new(),
        }
    }

    /// Create a failed result carrying an error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
            metadata: Metadata::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Whether the tool succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Whether the tool failed.
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Output of a successful execution.
    pub fn output(&self) -> Option<&Value> {
        self.output.as_ref()
    }

    /// Error message of a failed execution.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Additional metadata attached by the tool.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Render the output for humans: strings verbatim, everything else as
    /// compact JSON, and the error message for failures.
    pub fn output_text(&self) -> String {
        match (&self.output, &self.error) {
            (Some(Value::String(text)), _) => text.clone(),
            (Some(value), _) => value.to_string(),
            (None, Some(error)) => error.clone(),
            (None, None) => String::new(),
        }
    }

    /// Convert to a `Result` for callers that prefer `?`.
    pub fn into_result(self) -> Result<Value, String> {
        match (self.success, self.output, self.error) {
            (true, Some(output), _) => Ok(output),
            (true, None, _) => Ok(Value::Null),
            (false, _, error) => Err(error.unwrap_or_default()),
        }
    }
}

/// Named parameters passed to [`Tool::execute`].
///
/// A thin wrapper over a JSON object with typed accessors. Accessors that
/// start with `require_` produce a [`ToolError`] naming the calling tool when
/// the parameter is missing or has the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ToolParams(serde_json::Map<String, Value>);

impl ToolParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter using the builder pattern.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Parse parameters from a JSON object string.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not a JSON object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let map: serde_json::Map<String, Value> = serde_json::from_str(text)?;
        Ok(Self(map))
    }

    /// Raw access to a parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether a parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in insertion-independent (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Fetch a required string parameter.
    pub fn require_str(&self, tool: &str, name: &str) -> Result<&str, ToolError> {
        match self.0.get(name) {
            Some(Value::String(text)) => Ok(text),
            Some(_) => Err(ToolError::invalid_parameter(tool, name, "a string")),
            None => Err(ToolError::missing_parameter(tool, name)),
        }
    }

    /// Fetch an optional string parameter. Absent is `Ok(None)`; present but
    /// not a string is an error.
    pub fn optional_str(&self, tool: &str, name: &str) -> Result<Option<&str>, ToolError> {
        match self.0.get(name) {
            Some(Value::String(text)) => Ok(Some(text)),
            Some(_) => Err(ToolError::invalid_parameter(tool, name, "a string")),
            None => Ok(None),
        }
    }

    /// Fetch a required numeric parameter.
    pub fn require_f64(&self, tool: &str, name: &str) -> Result<f64, ToolError> {
        match self.0.get(name) {
            Some(value) => value
                .as_f64()
                .ok_or_else(|| ToolError::invalid_parameter(tool, name, "a number")),
            None => Err(ToolError::missing_parameter(tool, name)),
        }
    }

    /// Fetch a required list of numbers.
    pub fn require_f64_list(&self, tool: &str, name: &str) -> Result<Vec<f64>, ToolError> {
        let items = match self.0.get(name) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(ToolError::invalid_parameter(
                    tool,
                    name,
                    "a list of numbers",
                ));
            }
            None => return Err(ToolError::missing_parameter(tool, name)),
        };

        items
            .iter()
            .map(|item| {
                item.as_f64()
                    .ok_or_else(|| ToolError::invalid_parameter(tool, name, "a list of numbers"))
            })
            .collect()
    }
}

impl From<serde_json::Map<String, Value>> for ToolParams {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map)
    }
}

impl fmt::Display for ToolParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool;

    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes its input"
        }

        fn execute(&self, params: &ToolParams) -> ToolOutcome {
            Ok(ToolResult::success(params.require_str(self.name(), "message")?))
        }
    }

    #[test]
    fn tool_can_echo_input() {
        let result = EchoTool
            .execute(&ToolParams::new().with("message", "autogoal"))
            .unwrap();
        assert!(result.is_success());
        assert_eq!(result.output(), Some(&json!("autogoal")));
        assert_eq!(result.error(), None);
    }

    #[test]
    fn tool_reports_missing_parameter() {
        let error = EchoTool.execute(&ToolParams::new()).unwrap_err();
        assert_eq!(error, ToolError::missing_parameter("echo", "message"));
    }

    #[test]
    fn failure_never_carries_output() {
        let result = ToolResult::failure("boom");
        assert!(result.is_failure());
        assert_eq!(result.output(), None);
        assert_eq!(result.error(), Some("boom"));
        assert_eq!(result.clone().into_result(), Err("boom".to_string()));
    }

    #[test]
    fn result_serializes_all_fields() {
        let result = ToolResult::success(3.5).with_metadata("unit", "m");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "output": 3.5, "error": null, "metadata": {"unit": "m"}})
        );
    }

    #[test]
    fn output_text_renders_strings_verbatim() {
        assert_eq!(ToolResult::success("hi").output_text(), "hi");
        assert_eq!(ToolResult::success(json!([1, 2])).output_text(), "[1,2]");
        assert_eq!(ToolResult::failure("nope").output_text(), "nope");
    }

    #[test]
    fn params_typed_accessors() {
        let params = ToolParams::new()
            .with("a", 10)
            .with("b", 2.5)
            .with("op", "add")
            .with("numbers", json!([1, 2, 3]));

        assert_eq!(params.require_f64("calc", "a").unwrap(), 10.0);
        assert_eq!(params.require_f64("calc", "b").unwrap(), 2.5);
        assert_eq!(params.require_str("calc", "op").unwrap(), "add");
        assert_eq!(params.optional_str("calc", "op").unwrap(), Some("add"));
        assert_eq!(params.optional_str("calc", "missing").unwrap(), None);
        assert!(params.optional_str("calc", "a").is_err());
        assert_eq!(
            params.require_f64_list("calc", "numbers").unwrap(),
            vec![1.0, 2.0, 3.0]
        );
        assert!(matches!(
            params.require_f64("calc", "op"),
            Err(ToolError::InvalidParameter { .. })
        ));
        assert!(matches!(
            params.require_f64_list("calc", "a"),
            Err(ToolError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn params_parse_from_json() {
        let params = ToolParams::from_json(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(params.len(), 1);
        assert!(params.contains("message"));
        assert_eq!(params.to_string(), r#"{"message":"hi"}"#);

        assert!(ToolParams::from_json("[1, 2]").is_err());
    }
}
