//! Pipeline state and task records

use serde::{Deserialize, Serialize};

use crate::llm::Message;

/// A single unit of work in the generated plan
///
/// Ids follow the canonical `T1..Tn` scheme once assigned. Week fields are
/// only present after the timeline stage, and only when the model supplied
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Canonical identifier (e.g. "T3")
    pub id: String,

    /// Task description
    pub task: String,

    /// Ids of tasks this one depends on
    #[serde(default)]
    pub depends_on: Vec<String>,

    /// First week of work (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_week: Option<u32>,

    /// Last week of work (1-indexed, >= start_week)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_week: Option<u32>,
}

impl Task {
    /// Create a task with no dependencies
    pub fn new(id: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            depends_on: Vec::new(),
            start_week: None,
            end_week: None,
        }
    }
}

/// The mutable record threaded through the pipeline
///
/// Created fresh per request and moved by value through each stage; only the
/// derived plan string outlives it.
#[derive(Debug, Clone, Default)]
pub struct PlanState {
    /// The original free-text request; set once at creation
    pub goal: String,

    /// Conversation turns, one assistant turn appended per stage
    pub messages: Vec<Message>,

    /// Current task list
    pub tasks: Vec<Task>,

    /// Final plan text, set at the last stage
    pub plan: String,
}

impl PlanState {
    /// Create a fresh state for a goal
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            ..Default::default()
        }
    }

    /// Append a model turn to the conversation log
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Consume the state, yielding the final plan text
    pub fn into_plan(self) -> String {
        self.plan
    }

    /// Current tasks serialized as JSON for prompt rendering
    pub fn tasks_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.tasks)
    }
}
