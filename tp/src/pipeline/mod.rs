//! Plan generation pipeline
//!
//! Four sequential model calls turn a free-text goal into a task plan:
//! goal analysis, task breakdown, dependency assignment, timeline
//! distribution. State moves by ownership through each stage; the final
//! plan text is the raw timeline response.

use std::sync::Arc;

use eyre::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

mod duration;
mod state;
mod tasks;

pub use duration::{DEFAULT_WEEKS, extract_duration};
pub use state::{PlanState, Task};
pub use tasks::{DependencyParse, parse_dependency_response, parse_task_lines};

use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::prompts::{GoalContext, PromptLoader, TasksContext, TimelineContext};

/// Configuration for the pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Max tokens per stage response
    pub max_tokens: u32,
    /// Sampling temperature for every stage
    pub temperature: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            temperature: 0.2,
        }
    }
}

/// PlanPipeline sequences the four planning stages
pub struct PlanPipeline {
    llm: Arc<dyn LlmClient>,
    prompts: PromptLoader,
    config: PipelineConfig,
}

impl PlanPipeline {
    /// Create a new pipeline
    pub fn new(llm: Arc<dyn LlmClient>, prompts: PromptLoader, config: PipelineConfig) -> Self {
        Self { llm, prompts, config }
    }

    /// Generate a plan for a goal
    ///
    /// Runs the four stages strictly in order, each blocking on its model
    /// round-trip. Model-call failures propagate; a malformed dependency
    /// response degrades to the unstructured task list instead of failing.
    pub async fn run(&self, goal: &str) -> Result<String> {
        info!(%goal, "Generating task plan");

        let state = PlanState::new(goal);
        let state = self.analyze_goal(state).await?;
        let state = self.generate_tasks(state).await?;
        let state = self.assign_dependencies(state).await?;
        let state = self.plan_timeline(state).await?;

        Ok(state.into_plan())
    }

    /// Stage 1: extract deliverables and milestones from the goal
    ///
    /// The response is only accumulated into the conversation log; later
    /// stages do not consume it.
    async fn analyze_goal(&self, mut state: PlanState) -> Result<PlanState> {
        let ctx = GoalContext {
            goal: state.goal.clone(),
        };
        let response = self
            .complete("goal-system", "goal-user", &ctx)
            .await
            .context("Goal analysis stage failed")?;

        state.push_assistant(response);
        Ok(state)
    }

    /// Stage 2: break the goal into tasks T1..Tn
    async fn generate_tasks(&self, mut state: PlanState) -> Result<PlanState> {
        let ctx = GoalContext {
            goal: state.goal.clone(),
        };
        let response = self
            .complete("task-system", "task-user", &ctx)
            .await
            .context("Task generation stage failed")?;

        state.tasks = parse_task_lines(&response);
        state.push_assistant(response);
        debug!(task_count = state.tasks.len(), "generate_tasks: task list replaced");
        Ok(state)
    }

    /// Stage 3: ask the model for dependencies between tasks
    ///
    /// A response that fails to parse leaves the stage-2 list untouched.
    async fn assign_dependencies(&self, mut state: PlanState) -> Result<PlanState> {
        let ctx = TasksContext {
            tasks: state.tasks_json().context("Failed to serialize tasks")?,
        };
        let response = self
            .complete("dependency-system", "dependency-user", &ctx)
            .await
            .context("Dependency stage failed")?;

        match parse_dependency_response(&response) {
            DependencyParse::Structured(tasks) => {
                debug!(task_count = tasks.len(), "assign_dependencies: structured tasks applied");
                state.tasks = tasks;
            }
            DependencyParse::Unstructured => {
                debug!("assign_dependencies: keeping unstructured task list");
            }
        }

        state.push_assistant(response);
        Ok(state)
    }

    /// Stage 4: distribute tasks across the extracted week budget
    ///
    /// The raw response text becomes the plan; no parsing or validation
    /// happens here - consumers own any structural checks.
    async fn plan_timeline(&self, mut state: PlanState) -> Result<PlanState> {
        let duration_weeks = extract_duration(&state.goal);
        let ctx = TimelineContext {
            tasks: state.tasks_json().context("Failed to serialize tasks")?,
            duration_weeks,
        };
        let response = self
            .complete("timeline-system", "timeline-user", &ctx)
            .await
            .context("Timeline stage failed")?;

        state.plan = response.clone();
        state.push_assistant(response);
        Ok(state)
    }

    /// Render both templates for a stage and run the completion
    async fn complete<T: Serialize>(&self, system: &str, user: &str, ctx: &T) -> Result<String> {
        let request = CompletionRequest {
            system_prompt: self.prompts.render(system, ctx)?,
            messages: vec![Message::user(self.prompts.render(user, ctx)?)],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self.llm.complete(request).await?;
        Ok(response.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockLlmClient;

    fn pipeline(responses: Vec<&str>) -> (Arc<MockLlmClient>, PlanPipeline) {
        let mock = Arc::new(MockLlmClient::new(responses.into_iter().map(String::from).collect()));
        let pipeline = PlanPipeline::new(
            mock.clone(),
            PromptLoader::embedded_only(),
            PipelineConfig::default(),
        );
        (mock, pipeline)
    }

    #[tokio::test]
    async fn test_run_executes_four_stages_in_order() {
        let (mock, pipeline) = pipeline(vec![
            "Deliverables: a product",
            "1. Research\n2. Build",
            r#"[{"id": "T1", "task": "Research", "depends_on": []}, {"id": "T2", "task": "Build", "depends_on": ["T1"]}]"#,
            "final timeline json",
        ]);

        let plan = pipeline.run("Launch a product in 3 months").await.unwrap();
        assert_eq!(plan, "final timeline json");
        assert_eq!(mock.call_count(), 4);

        let requests = mock.requests();
        assert!(requests[0].system_prompt.contains("Goal Analyzer"));
        assert!(requests[1].system_prompt.contains("Task Generator"));
        assert!(requests[2].system_prompt.contains("Dependency Manager"));
        assert!(requests[3].system_prompt.contains("Timeline Planner"));
    }

    #[tokio::test]
    async fn test_dependency_stage_sees_generated_tasks() {
        let (mock, pipeline) = pipeline(vec![
            "analysis",
            "1. Do X\n- Do Y",
            "not json at all",
            "plan",
        ]);

        pipeline.run("some goal").await.unwrap();

        let requests = mock.requests();
        assert!(requests[2].messages[0].content.contains("Do X"));
        assert!(requests[2].messages[0].content.contains("\"T2\""));
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        // Only two canned responses; stage 3 exhausts the mock
        let (_mock, pipeline) = pipeline(vec!["analysis", "1. Task"]);

        let result = pipeline.run("goal").await;
        assert!(result.is_err());
    }
}
