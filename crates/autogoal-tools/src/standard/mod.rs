//! # Standard Tool Library
//!
//! Small, dependency-free tools that agents can use out of the box.
//!
//! - **[`EchoTool`]** (`echo`): returns `message`
//! - **[`CalculatorTool`]** (`calculator`): add / subtract / multiply / divide
//! - **[`StringTool`]** (`string_tool`): upper / lower / reverse / length
//! - **[`AggregatorTool`]** (`aggregator`): sum / avg / min / max over a list
//!
//! Expected failures (division by zero, unknown operation, empty list) come
//! back as failed [`ToolResult`](autogoal_core::ToolResult)s. A missing or
//! mistyped parameter is a [`ToolError`](autogoal_core::ToolError).

mod aggregate;
mod calculator;
mod echo;
mod text;

pub use aggregate::AggregatorTool;
pub use calculator::CalculatorTool;
pub use echo::EchoTool;
pub use text::StringTool;

use autogoal_core::ToolResult;
use serde_json::Value;

/// Wrap a numeric result, rendering whole numbers as integers.
///
/// `10 / 2` yields the JSON integer `5`, not the float `5.0`, so callers
/// comparing outputs as JSON see the exact value they would write by hand.
pub(crate) fn numeric_result(value: f64) -> ToolResult {
    if !value.is_finite() {
        return ToolResult::failure(format!("Result is not a finite number: {value}"));
    }
    // i64::MAX is not exactly representable; stay strictly below 2^63.
    if value.fract() == 0.0 && value.abs() < 9.0e18 {
        ToolResult::success(Value::from(value as i64))
    } else {
        ToolResult::success(Value::from(value))
    }
}

pub(crate) fn unknown_operation(operation: &str) -> ToolResult {
    ToolResult::failure(format!("Unknown operation: {operation}"))
}
