use super::{numeric_result, unknown_operation};
use autogoal_core::error::ToolOutcome;
use autogoal_core::{Tool, ToolParams, ToolResult};

/// Basic arithmetic on two operands `a` and `b`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalculatorTool;

impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Performs basic arithmetic operations (add, subtract, multiply, divide)"
    }

    fn execute(&self, params: &ToolParams) -> ToolOutcome {
        let operation = params.require_str(self.name(), "operation")?;
        let a = params.require_f64(self.name(), "a")?;
        let b = params.require_f64(self.name(), "b")?;

        let value = match operation {
            "add" => a + b,
            "subtract" => a - b,
            "multiply" => a * b,
            "divide" if b == 0.0 => return Ok(ToolResult::failure("Division by zero")),
            "divide" => a / b,
            other => return Ok(unknown_operation(other)),
        };
        Ok(numeric_result(value))
    }
}
