use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// One entry of the agent's reasoning trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasoningStep {
    pub thought: String,
    pub action: Option<String>,
    pub observation: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ReasoningStep {
    pub fn new(thought: impl Into<String>) -> Self {
        Self {
            thought: thought.into(),
            action: None,
            observation: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_observation(mut self, observation: impl Into<String>) -> Self {
        self.observation = Some(observation.into());
        self
    }
}

impl fmt::Display for ReasoningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thought: {}", self.thought)?;
        if let Some(action) = &self.action {
            write!(f, "\nAction: {action}")?;
        }
        if let Some(observation) = &self.observation {
            write!(f, "\nObservation: {observation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_skips_missing_parts() {
        let step = ReasoningStep::new("Working on goal: tidy up");
        assert_eq!(step.to_string(), "Thought: Working on goal: tidy up");

        let step = step.with_action("echo({})").with_observation("ok");
        assert_eq!(
            step.to_string(),
            "Thought: Working on goal: tidy up\nAction: echo({})\nObservation: ok"
        );
    }
}
