//! # Autogoal
//!
//! An in-process goal, memory and tool execution core for autonomous agents.
//!
//! ## Core Components
//!
//! - **[Agent]**: orchestrates tools, memory and goals
//! - **[Goal]** / **[GoalManager]**: hierarchical goals with priority selection
//! - **[MemoryStore]**: bounded short-term memory backed by long-term memory
//! - **[Tool]** / **[ToolRegistry]**: pluggable capabilities with a uniform [ToolResult]
//!
//! ## Quick Start
//!
//! ```rust
//! use autogoal_workspace::{Agent, Goal, ToolParams};
//!
//! let mut agent = Agent::builder().name("quickstart").build();
//! agent.add_goal(
//!     Goal::new("Plan and execute a mathematical problem")
//!         .with_priority(10)
//!         .with_sub_goal(Goal::new("Calculate 5 + 3"))
//!         .with_sub_goal(Goal::new("Multiply the result by 2")),
//! );
//!
//! let sum = agent.execute_tool(
//!     "calculator",
//!     &ToolParams::new().with("operation", "add").with("a", 5).with("b", 3),
//! );
//! assert_eq!(sum.output_text(), "8");
//!
//! let summary = agent.run(Some(10));
//! assert_eq!(summary.iterations, 1);
//! assert_eq!(summary.completed_goals, 1);
//! ```

// ============================================================================
// Module aliases for namespaced access
// ============================================================================

pub use autogoal_agent as agent;
pub use autogoal_core as core;
pub use autogoal_memory as memory;
pub use autogoal_tools as tools;

// ============================================================================
// Flat re-exports of the everyday types
// ============================================================================

pub use autogoal_agent::{
    Agent, AgentBuilder, AgentStatus, FAILED_SUB_GOAL_KEY, ReasoningStep, RunSummary,
};
pub use autogoal_core::{
    AgentConfig, AgentConfigBuilder, AutogoalError, AutogoalResult, ConfigError, ConfigFile,
    EntryId, Goal, GoalError, GoalId, GoalManager, GoalStatus, MemoryError, SystemConfig, Tool,
    ToolError, ToolParams, ToolResult,
};
pub use autogoal_memory::{Importance, MemoryEntry, MemoryStats, MemoryStore, Spill};
pub use autogoal_tools::{AggregatorTool, CalculatorTool, EchoTool, StringTool, ToolRegistry};
