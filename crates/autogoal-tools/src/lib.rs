//! # Autogoal Tools
//!
//! The [`ToolRegistry`] agents dispatch through, plus a small standard
//! library of tools.
//!
//! ```rust
//! use autogoal_core::ToolParams;
//! use autogoal_tools::ToolRegistry;
//!
//! let registry = ToolRegistry::with_standard_tools();
//! let calculator = registry.get("calculator").unwrap();
//! let result = calculator
//!     .execute(&ToolParams::new().with("operation", "add").with("a", 10).with("b", 20))
//!     .unwrap();
//! assert_eq!(result.output_text(), "30");
//! ```

pub mod registry;
pub mod standard;

pub use registry::ToolRegistry;
pub use standard::{AggregatorTool, CalculatorTool, EchoTool, StringTool};
