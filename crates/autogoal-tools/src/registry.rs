use crate::standard::{CalculatorTool, EchoTool};
use autogoal_core::Tool;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Name-keyed tool registry that remembers registration order.
///
/// Registering a tool under a name that is already taken replaces the old
/// tool in place, so the name keeps its original position in
/// [`ToolRegistry::list_tools`].
///
/// # Example
///
/// ```rust
/// use autogoal_tools::{EchoTool, ToolRegistry};
/// use std::sync::Arc;
///
/// let registry = ToolRegistry::new().with_tool(Arc::new(EchoTool));
/// assert_eq!(registry.list_tools(), vec!["echo".to_string()]);
/// assert!(registry.get("missing").is_none());
/// ```
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the tools every agent starts with:
    /// `echo` and `calculator`.
    pub fn with_standard_tools() -> Self {
        Self::new()
            .with_tool(Arc::new(EchoTool))
            .with_tool(Arc::new(CalculatorTool))
    }

    /// Add a tool to the registry using the builder pattern.
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.register(tool);
        self
    }

    /// Register `tool` under its own name, returning the tool it replaced.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Option<Arc<dyn Tool>> {
        let name = tool.name().to_string();
        match self.index.get(&name) {
            Some(&position) => {
                tracing::debug!(tool = %name, "Replacing registered tool");
                Some(std::mem::replace(&mut self.tools[position], tool))
            }
            None => {
                tracing::debug!(tool = %name, "Registered tool");
                self.index.insert(name, self.tools.len());
                self.tools.push(tool);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.index
            .get(name)
            .map(|&position| Arc::clone(&self.tools[position]))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn list_tools(&self) -> Vec<String> {
        self.tools.iter().map(|tool| tool.name().to_string()).collect()
    }

    /// Snapshot of `(name, tool)` pairs in registration order.
    pub fn get_all_tools(&self) -> Vec<(String, Arc<dyn Tool>)> {
        self.tools
            .iter()
            .map(|tool| (tool.name().to_string(), Arc::clone(tool)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.list_tools())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autogoal_core::error::ToolOutcome;
    use autogoal_core::{ToolParams, ToolResult};

    struct NamedTool {
        name: &'static str,
        reply: &'static str,
    }

    impl Tool for NamedTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "Replies with a fixed string"
        }

        fn execute(&self, _params: &ToolParams) -> ToolOutcome {
            Ok(ToolResult::success(self.reply))
        }
    }

    fn named(name: &'static str, reply: &'static str) -> Arc<dyn Tool> {
        Arc::new(NamedTool { name, reply })
    }

    #[test]
    fn registry_lists_in_registration_order() {
        let registry = ToolRegistry::new()
            .with_tool(named("zeta", "z"))
            .with_tool(named("alpha", "a"))
            .with_tool(named("mid", "m"));

        assert_eq!(registry.list_tools(), ["zeta", "alpha", "mid"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn last_registration_wins_and_keeps_position() {
        let mut registry = ToolRegistry::new()
            .with_tool(named("first", "old"))
            .with_tool(named("second", "2"));

        let replaced = registry.register(named("first", "new"));
        assert!(replaced.is_some());
        assert_eq!(registry.list_tools(), ["first", "second"]);

        let tool = registry.get("first").unwrap();
        let result = tool.execute(&ToolParams::new()).unwrap();
        assert_eq!(result.output_text(), "new");
    }

    #[test]
    fn missing_tool_is_none() {
        let registry = ToolRegistry::with_standard_tools();
        assert!(registry.get("nope").is_none());
        assert!(!registry.contains("nope"));
        assert!(registry.contains("echo"));
        assert!(registry.contains("calculator"));
    }

    #[test]
    fn snapshot_is_detached() {
        let mut registry = ToolRegistry::with_standard_tools();
        let mut snapshot = registry.get_all_tools();
        snapshot.clear();
        assert_eq!(registry.len(), 2);

        registry.register(named("late", "l"));
        assert_eq!(snapshot.len(), 0);
        assert_eq!(registry.get_all_tools().len(), 3);
    }

    #[test]
    fn empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.list_tools().is_empty());
    }
}
