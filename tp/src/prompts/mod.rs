//! Prompt templates for the planning pipeline
//!
//! Four stages, each with a system and a user template. Templates render
//! with Handlebars; files under `.taskplan/prompts/` or `prompts/` override
//! the embedded defaults.

pub mod embedded;
mod loader;

pub use loader::{GoalContext, PromptLoader, TasksContext, TimelineContext};
