use super::{numeric_result, unknown_operation};
use autogoal_core::error::ToolOutcome;
use autogoal_core::{Tool, ToolParams, ToolResult};

/// Sum, average, minimum or maximum of `numbers`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AggregatorTool;

impl Tool for AggregatorTool {
    fn name(&self) -> &str {
        "aggregator"
    }

    fn description(&self) -> &str {
        "Aggregates lists of numbers (sum, average, min, max)"
    }

    fn execute(&self, params: &ToolParams) -> ToolOutcome {
        let operation = params.require_str(self.name(), "operation")?;
        let numbers = params.require_f64_list(self.name(), "numbers")?;

        if numbers.is_empty() {
            return Ok(ToolResult::failure("Empty list provided"));
        }

        let sum = || numbers.iter().sum::<f64>();
        let value = match operation {
            "sum" => sum(),
            "avg" => sum() / numbers.len() as f64,
            "min" => numbers.iter().copied().fold(f64::INFINITY, f64::min),
            "max" => numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            other => return Ok(unknown_operation(other)),
        };
        Ok(numeric_result(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn aggregate(op: &str, numbers: Value) -> ToolResult {
        AggregatorTool
            .execute(&ToolParams::new().with("operation", op).with("numbers", numbers))
            .unwrap()
    }

    #[rstest]
    #[case("sum", json!(100))]
    #[case("avg", json!(20))]
    #[case("min", json!(10))]
    #[case("max", json!(30))]
    fn aggregates(#[case] op: &str, #[case] expected: Value) {
        let result = aggregate(op, json!([10, 25, 30, 15, 20]));
        assert_eq!(result.output(), Some(&expected));
    }

    #[test]
    fn empty_list_fails() {
        let result = aggregate("sum", json!([]));
        assert_eq!(result.error(), Some("Empty list provided"));
    }

    #[test]
    fn non_numeric_items_are_a_fault() {
        let err = AggregatorTool
            .execute(
                &ToolParams::new()
                    .with("operation", "sum")
                    .with("numbers", json!([1, "two"])),
            )
            .unwrap_err();
        assert!(err.to_string().contains("a list of numbers"));
    }
}
