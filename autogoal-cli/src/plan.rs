//! JSON goal plans for `autogoal run`.
//!
//! ```json
//! [
//!   {"description": "Ship release", "priority": 5, "sub_goals": [
//!     {"description": "Run tests"},
//!     {"description": "Tag version"}
//!   ]}
//! ]
//! ```

use crate::error::CliError;
use autogoal_core::Goal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoalPlan {
    pub description: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub sub_goals: Vec<GoalPlan>,
}

impl GoalPlan {
    pub fn into_goal(self) -> Goal {
        self.sub_goals
            .into_iter()
            .fold(
                Goal::new(self.description).with_priority(self.priority),
                |goal, sub_goal| goal.with_sub_goal(sub_goal.into_goal()),
            )
    }
}

pub fn parse_plan(text: &str) -> Result<Vec<Goal>, CliError> {
    let plans: Vec<GoalPlan> = serde_json::from_str(text).map_err(CliError::Plan)?;
    Ok(plans.into_iter().map(GoalPlan::into_goal).collect())
}

pub fn load_plan(path: &Path) -> Result<Vec<Goal>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_plan(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn nested_plan_builds_goal_tree() {
        let goals = parse_plan(
            r#"[{"description": "root", "priority": 3,
                 "sub_goals": [{"description": "a"}, {"description": "b", "sub_goals": [{"description": "b1"}]}]},
                {"description": "other"}]"#,
        )
        .unwrap();

        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].priority(), 3);
        assert_eq!(goals[0].count(), 4);
        assert_eq!(goals[0].sub_goals()[1].sub_goals()[0].description(), "b1");
        assert_eq!(goals[0].sub_goals()[0].parent(), Some(goals[0].id()));
        assert_eq!(goals[1].priority(), 0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            parse_plan(r#"[{"description": "x", "priorty": 1}]"#),
            Err(CliError::Plan(_))
        ));
    }

    #[test]
    fn load_plan_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"description": "from disk"}}]"#).unwrap();

        let goals = load_plan(file.path()).unwrap();
        assert_eq!(goals[0].description(), "from disk");

        assert!(matches!(
            load_plan(Path::new("/no/such/plan.json")),
            Err(CliError::Read { .. })
        ));
    }
}
