//! Task list parsing and canonical renumbering
//!
//! The task-generation stage turns free-form model output into `T1..Tn`
//! records; the dependency stage re-parses model JSON and renumbers it back
//! into the same canonical scheme.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use super::state::Task;

/// Parse the task-generation response into canonical tasks
///
/// Splits into lines, strips leading bullet/numbering characters (digits,
/// `.`, `-`, `•`, whitespace), drops lines left empty, and assigns ids
/// `T1..Tn` in order with empty dependency sets. This is the only place
/// initial task identity is established.
pub fn parse_task_lines(response: &str) -> Vec<Task> {
    let mut tasks = Vec::new();

    for line in response.lines() {
        let cleaned = line
            .trim()
            .trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '•' | ' '))
            .trim();
        if cleaned.is_empty() {
            continue;
        }
        tasks.push(Task::new(format!("T{}", tasks.len() + 1), cleaned));
    }

    debug!(count = tasks.len(), "parse_task_lines: parsed");
    tasks
}

/// Task shape expected from the dependency stage response
#[derive(Debug, Deserialize)]
struct RawDependencyTask {
    id: String,
    task: String,
    #[serde(default)]
    depends_on: Vec<String>,
}

/// Outcome of parsing the dependency stage response
///
/// The silent-fallback policy is explicit here: callers keep their previous
/// task list on `Unstructured` instead of failing the request.
#[derive(Debug)]
pub enum DependencyParse {
    /// Response parsed; tasks renumbered and dependencies remapped
    Structured(Vec<Task>),
    /// Response was not a valid task array; keep the previous list
    Unstructured,
}

/// Parse and canonicalize the dependency stage response
///
/// On success every returned task is renumbered `T1..Tn` in array order and
/// each `depends_on` entry is rewritten through the same old-to-new map.
/// Entries referencing unknown ids pass through verbatim - tolerated, not
/// corrected.
pub fn parse_dependency_response(raw: &str) -> DependencyParse {
    let parsed: Vec<RawDependencyTask> = match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(e) => {
            debug!(error = %e, "parse_dependency_response: not valid JSON, keeping previous tasks");
            return DependencyParse::Unstructured;
        }
    };

    let id_map: HashMap<String, String> = parsed
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.clone(), format!("T{}", i + 1)))
        .collect();

    let tasks = parsed
        .into_iter()
        .enumerate()
        .map(|(i, t)| Task {
            id: format!("T{}", i + 1),
            task: t.task,
            depends_on: t
                .depends_on
                .into_iter()
                .map(|d| id_map.get(&d).cloned().unwrap_or(d))
                .collect(),
            start_week: None,
            end_week: None,
        })
        .collect();

    DependencyParse::Structured(tasks)
}
