//! # Autogoal Testing
//!
//! Test doubles for exercising agents without real tools.
//!
//! - **[`MockTool`]**: scripted responses keyed by the JSON form of the
//!   parameters, with call tracking shared between clones
//! - **[`FaultingTool`]**: always returns `Err(ToolError)`
//! - **[`PanickingTool`]**: panics inside `execute`
//! - **[`MockToolRegistry`]**: builds a [`ToolRegistry`](autogoal_tools::ToolRegistry)
//!   of mocks while keeping handles for inspection

pub mod mock_tools;

pub use mock_tools::{FaultingTool, MockTool, MockToolRegistry, PanickingTool};
