//! taskplan - LLM-backed task plan generator
//!
//! Accepts a free-text goal, runs four sequential model calls (goal
//! analysis, task breakdown, dependency assignment, timeline distribution),
//! persists the resulting plan, and serves it back over HTTP.
//!
//! # Core Concepts
//!
//! - **Strictly Sequential**: each stage blocks on one model round-trip;
//!   stage n+1 consumes stage n's state
//! - **Canonical Task Ids**: task lists are renumbered `T1..Tn` whenever a
//!   stage reassigns identity, with dependencies remapped to match
//! - **Degrade Gracefully**: a dependency response that fails to parse
//!   falls back to the unstructured task list instead of failing the request
//! - **Raw Final Plan**: the timeline response is returned verbatim;
//!   structural validation belongs to consumers
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and Groq implementation
//! - [`pipeline`] - the four-stage plan generation pipeline
//! - [`prompts`] - stage prompt templates and loader
//! - [`server`] - HTTP service (generate, list, fetch)
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod server;

// Re-export commonly used types
pub use config::{Config, LlmConfig};
pub use llm::{CompletionRequest, CompletionResponse, GroqClient, LlmClient, LlmError};
pub use pipeline::{DependencyParse, PipelineConfig, PlanPipeline, PlanState, Task, extract_duration};
pub use prompts::PromptLoader;
pub use server::{AppState, router};
