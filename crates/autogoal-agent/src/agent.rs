use crate::reasoning::ReasoningStep;
use crate::summary::{AgentStatus, RunSummary};
use autogoal_core::goal::GoalStatus;
use autogoal_core::{AgentConfig, Goal, GoalId, GoalManager, Tool, ToolParams, ToolResult};
use autogoal_memory::{Importance, MemoryEntry, MemoryStore};
use autogoal_tools::ToolRegistry;
use serde_json::{Value, json};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{info, info_span, warn};

const TOOL_MEMORY_IMPORTANCE: i64 = 5;
const COMPLETED_GOAL_IMPORTANCE: i64 = 8;

/// Metadata key on a failed parent naming the sub-goal that failed.
pub const FAILED_SUB_GOAL_KEY: &str = "failed_sub_goal";

/// A goal-driven agent.
///
/// # Example
///
/// ```rust
/// use autogoal_agent::Agent;
/// use autogoal_core::{Goal, ToolParams};
///
/// let mut agent = Agent::builder().name("doc-agent").build();
/// agent.add_goal(Goal::new("say hello").with_priority(1));
///
/// let result = agent.execute_tool("echo", &ToolParams::new().with("message", "hi"));
/// assert_eq!(result.output_text(), "hi");
///
/// let summary = agent.run(None);
/// assert_eq!(summary.completed_goals, 1);
/// ```
#[derive(Debug)]
pub struct Agent {
    config: AgentConfig,
    goals: GoalManager,
    tools: ToolRegistry,
    memory: MemoryStore,
    reasoning_history: Vec<ReasoningStep>,
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(AgentConfig::default())
    }
}

impl Agent {
    /// Create an agent with the standard `echo` and `calculator` tools.
    pub fn new(config: AgentConfig) -> Self {
        Self {
            memory: MemoryStore::new(config.max_short_term_memory),
            config,
            goals: GoalManager::new(),
            tools: ToolRegistry::with_standard_tools(),
            reasoning_history: Vec::new(),
        }
    }

    pub fn builder() -> AgentBuilder {
        AgentBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Register a root goal and remember that it was added.
    pub fn add_goal(&mut self, goal: Goal) -> GoalId {
        let entry = MemoryEntry::new(format!("New goal added: {}", goal.description()))
            .with_importance(Importance::saturating(i64::from(goal.priority())))
            .with_tag("goal");
        let id = self.goals.add_goal(goal);
        self.memory.add_to_short_term(entry);
        id
    }

    /// Register a tool (replacing any tool of the same name) and remember it.
    pub fn add_tool(&mut self, tool: Arc<dyn Tool>) {
        let entry = MemoryEntry::new(format!(
            "New tool available: {} - {}",
            tool.name(),
            tool.description()
        ))
        .with_importance(Importance::saturating(TOOL_MEMORY_IMPORTANCE))
        .with_tag("tool");
        self.tools.register(tool);
        self.memory.add_to_short_term(entry);
    }

    /// Describe the current situation. Deterministic; no side effects.
    pub fn think(&self, context: &str) -> String {
        let mut thought = format!("Analyzing context: {context}");

        let tools = self.tools.list_tools();
        if !tools.is_empty() {
            thought.push_str(&format!("\nAvailable tools: {}", tools.join(", ")));
        }
        if let Some(goal) = self.goals.get_next_goal() {
            thought.push_str(&format!("\nNext goal to work on: {}", goal.description()));
        }
        let recent = self.memory.short_term_len();
        if recent > 0 {
            thought.push_str(&format!("\nRecent context from memory: {recent} items"));
        }
        thought
    }

    /// Run a registered tool.
    ///
    /// An unknown name yields a failed result and leaves no trace. Otherwise
    /// the tool runs with its faults and panics converted into failed
    /// results, and one short-term memory plus one reasoning step are
    /// recorded whatever the outcome.
    pub fn execute_tool(&mut self, name: &str, params: &ToolParams) -> ToolResult {
        let Some(tool) = self.tools.get(name) else {
            warn!(tool = %name, "Tool not found");
            return ToolResult::failure(format!("Tool '{name}' not found"));
        };

        let span = info_span!("execute_tool", agent.name = %self.config.name, tool.name = %name);
        let _enter = span.enter();

        let result = match panic::catch_unwind(AssertUnwindSafe(|| tool.execute(params))) {
            Ok(Ok(result)) => result,
            Ok(Err(error)) => {
                warn!(error = %error, "Tool fault");
                ToolResult::failure(format!("Error executing tool: {error}"))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(panic = %message, "Tool panicked");
                ToolResult::failure(format!("Error executing tool: {message}"))
            }
        };

        let (content, observation) = match result.error() {
            None => {
                let output = result.output_text();
                (format!("Executed tool '{name}' with result: {output}"), output)
            }
            Some(error) => (
                format!("Executed tool '{name}' with error: {error}"),
                error.to_string(),
            ),
        };
        self.memory.add_to_short_term(
            MemoryEntry::new(content)
                .with_importance(Importance::saturating(TOOL_MEMORY_IMPORTANCE))
                .with_tags(["action", "tool"]),
        );
        self.context().record(
            ReasoningStep::new(format!("Using tool {name}"))
                .with_action(format!("{name}({params})"))
                .with_observation(observation),
        );
        result
    }

    /// Execute `goal` and its sub-goals, children first.
    ///
    /// Only a `Pending` goal is executed. A goal that is already `Completed`
    /// counts as done and returns `true` untouched; any other status
    /// returns `false`.
    pub fn execute_goal(&mut self, goal: &mut Goal) -> bool {
        self.context().execute(goal)
    }

    /// Execute pending root goals, highest priority first, until none remain
    /// or `max_iterations` goals have been executed.
    pub fn run(&mut self, max_iterations: Option<usize>) -> RunSummary {
        let span = info_span!("agent_run", agent.name = %self.config.name);
        let _enter = span.enter();

        let mut iterations = 0;
        let mut completed_goals = 0;

        loop {
            if max_iterations.is_some_and(|max| iterations >= max) {
                break;
            }
            let Some(id) = self.goals.get_next_goal().map(Goal::id) else {
                break;
            };

            let mut context = ExecutionContext {
                memory: &mut self.memory,
                reasoning_history: &mut self.reasoning_history,
                record_reasoning: self.config.enable_reasoning_history,
            };
            let Some(goal) = self.goals.get_mut(id) else {
                break;
            };
            if context.execute(goal) {
                completed_goals += 1;
            }
            iterations += 1;
        }

        let summary = RunSummary {
            iterations,
            completed_goals,
            total_goals: self.goals.len(),
            reasoning_steps: self.reasoning_history.len(),
        };
        info!(
            iterations = summary.iterations,
            completed_goals = summary.completed_goals,
            total_goals = summary.total_goals,
            "Run finished"
        );
        summary
    }

    /// [`Agent::run`] with the configured iteration cap.
    pub fn run_default(&mut self) -> RunSummary {
        self.run(self.config.max_iterations)
    }

    pub fn get_status(&self) -> AgentStatus {
        AgentStatus {
            name: self.config.name.clone(),
            total_goals: self.goals.len(),
            pending_goals: self.goals.get_pending_goals().len(),
            completed_goals: self.goals.get_completed_goals().len(),
            available_tools: self.tools.list_tools(),
            short_term_memories: self.memory.short_term_len(),
            long_term_memories: self.memory.long_term_len(),
            reasoning_steps: self.reasoning_history.len(),
        }
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut MemoryStore {
        &mut self.memory
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn goals(&self) -> &GoalManager {
        &self.goals
    }

    pub fn reasoning_history(&self) -> &[ReasoningStep] {
        &self.reasoning_history
    }

    fn context(&mut self) -> ExecutionContext<'_> {
        ExecutionContext {
            memory: &mut self.memory,
            reasoning_history: &mut self.reasoning_history,
            record_reasoning: self.config.enable_reasoning_history,
        }
    }
}

/// The parts of an agent goal execution writes to. Borrowed separately from
/// the goal manager so a root goal can be executed in place.
struct ExecutionContext<'a> {
    memory: &'a mut MemoryStore,
    reasoning_history: &'a mut Vec<ReasoningStep>,
    record_reasoning: bool,
}

impl ExecutionContext<'_> {
    fn record(&mut self, step: ReasoningStep) {
        if self.record_reasoning {
            self.reasoning_history.push(step);
        }
    }

    fn execute(&mut self, goal: &mut Goal) -> bool {
        match goal.status() {
            GoalStatus::Pending => {}
            GoalStatus::Completed => return true,
            status => {
                warn!(goal.id = %goal.id(), %status, "Goal is not pending; skipping");
                return false;
            }
        }

        let span = info_span!("execute_goal", goal.id = %goal.id(), goal.priority = goal.priority());
        let _enter = span.enter();

        if let Err(error) = goal.mark_in_progress() {
            warn!(%error, "Could not start goal");
            return false;
        }
        info!(description = %goal.description(), "Working on goal");
        self.record(
            ReasoningStep::new(format!("Working on goal: {}", goal.description()))
                .with_action("Analyzing goal and sub-goals"),
        );

        // Fail fast: later siblings stay pending.
        let mut failed_sub_goal = None;
        for sub_goal in goal.sub_goals_mut() {
            if !self.execute(sub_goal) {
                failed_sub_goal = Some(describe_failure(sub_goal));
                break;
            }
        }

        if let Some(failure) = failed_sub_goal {
            goal.insert_metadata(FAILED_SUB_GOAL_KEY, failure);
            if let Err(error) = goal.mark_failed(Some("Sub-goal execution failed")) {
                warn!(%error, "Could not mark goal failed");
            }
            warn!("Goal failed: sub-goal execution failed");
            return false;
        }

        if let Err(error) = goal.mark_completed(Some(Value::from("Goal completed"))) {
            warn!(%error, "Could not mark goal completed");
            return false;
        }
        self.memory.add_to_long_term(
            MemoryEntry::new(format!("Completed goal: {}", goal.description()))
                .with_importance(Importance::saturating(COMPLETED_GOAL_IMPORTANCE))
                .with_tags(["goal", "completed"]),
        );
        info!("Goal completed");
        true
    }
}

fn describe_failure(goal: &Goal) -> Value {
    json!({
        "id": goal.id().to_string(),
        "description": goal.description(),
        "error": goal.error(),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "tool panicked".to_string()
    }
}

/// Builder for [`Agent`].
#[derive(Default)]
pub struct AgentBuilder {
    config: AgentConfig,
    name: Option<String>,
    tools: Vec<Arc<dyn Tool>>,
    goals: Vec<Goal>,
}

impl AgentBuilder {
    pub fn config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the name carried by the configuration.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Register an extra tool on top of the standard ones.
    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    /// Build the agent. Tools and goals go through [`Agent::add_tool`] and
    /// [`Agent::add_goal`], so they are remembered like any other addition.
    pub fn build(self) -> Agent {
        let mut config = self.config;
        if let Some(name) = self.name {
            config.name = name;
        }
        let mut agent = Agent::new(config);
        for tool in self.tools {
            agent.add_tool(tool);
        }
        for goal in self.goals {
            agent.add_goal(goal);
        }
        agent
    }
}
