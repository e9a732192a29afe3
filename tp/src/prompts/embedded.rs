//! Embedded fallback prompts
//!
//! These are compiled into the binary and used when template files are not
//! found. Each pipeline stage has a system template and a user template.

/// System prompt for the goal analysis stage
pub const GOAL_SYSTEM: &str =
    "You are an AI Goal Analyzer. Extract key deliverables, outcomes, and milestones concisely.";

/// User turn for the goal analysis stage
pub const GOAL_USER: &str = "Goal: {{goal}}";

/// System prompt for the task generation stage
pub const TASK_SYSTEM: &str = r#"You are a Task Generator AI.
Break the goal into clear, actionable tasks with short descriptions and expected outcomes.
Keep tasks within the duration implied in the goal."#;

/// User turn for the task generation stage
pub const TASK_USER: &str = "Goal: {{goal}}";

/// System prompt for the dependency assignment stage
pub const DEPENDENCY_SYSTEM: &str = r#"You are a Dependency Manager AI.
Assign logical dependencies between tasks.
Respond in JSON format like:
[{"id": "T1", "task": "Research market", "depends_on": []}, ...]"#;

/// User turn for the dependency assignment stage
pub const DEPENDENCY_USER: &str = "Tasks: {{tasks}}";

/// System prompt for the timeline distribution stage
pub const TIMELINE_SYSTEM: &str = r#"You are a Timeline Planner AI.
The goal duration is {{duration_weeks}} weeks.
Distribute all tasks realistically within this timeframe.
Output JSON like:
[{"id": "T1", "task": "...", "depends_on": [], "start_week": 1, "end_week": 1}, ...]"#;

/// User turn for the timeline distribution stage
pub const TIMELINE_USER: &str = "Tasks: {{tasks}}";

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "goal-system" => Some(GOAL_SYSTEM),
        "goal-user" => Some(GOAL_USER),
        "task-system" => Some(TASK_SYSTEM),
        "task-user" => Some(TASK_USER),
        "dependency-system" => Some(DEPENDENCY_SYSTEM),
        "dependency-user" => Some(DEPENDENCY_USER),
        "timeline-system" => Some(TIMELINE_SYSTEM),
        "timeline-user" => Some(TIMELINE_USER),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_embedded_goal_system() {
        assert!(get_embedded("goal-system").is_some());
        assert!(get_embedded("goal-system").unwrap().contains("Goal Analyzer"));
    }

    #[test]
    fn test_get_embedded_all_stages() {
        for stage in ["goal", "task", "dependency", "timeline"] {
            for kind in ["system", "user"] {
                let name = format!("{}-{}", stage, kind);
                assert!(get_embedded(&name).is_some(), "Missing embedded prompt: {}", name);
            }
        }
    }

    #[test]
    fn test_get_embedded_unknown() {
        assert!(get_embedded("unknown-template").is_none());
    }

    #[test]
    fn test_stage_content_differs() {
        assert!(get_embedded("task-system").unwrap().contains("Task Generator"));
        assert!(get_embedded("dependency-system").unwrap().contains("Dependency Manager"));
        assert!(get_embedded("timeline-system").unwrap().contains("Timeline Planner"));
        assert!(get_embedded("timeline-system").unwrap().contains("{{duration_weeks}}"));
    }
}
