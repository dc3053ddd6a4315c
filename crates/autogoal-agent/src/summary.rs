use serde::Serialize;

/// Counts reported at the end of [`Agent::run`](crate::Agent::run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Root goals executed by this run.
    pub iterations: usize,
    /// Root goals this run completed.
    pub completed_goals: usize,
    /// Root goals registered with the agent.
    pub total_goals: usize,
    /// Length of the reasoning trace after the run.
    pub reasoning_steps: usize,
}

/// Read-only snapshot returned by [`Agent::get_status`](crate::Agent::get_status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentStatus {
    pub name: String,
    pub total_goals: usize,
    pub pending_goals: usize,
    pub completed_goals: usize,
    pub available_tools: Vec<String>,
    pub short_term_memories: usize,
    pub long_term_memories: usize,
    pub reasoning_steps: usize,
}
