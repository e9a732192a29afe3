//! taskplan - LLM-backed task plan generator
//!
//! CLI entry point for the pipeline and the HTTP service.

use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use planstore::PlanStore;
use taskplan::cli::{Cli, Command, OutputFormat};
use taskplan::config::Config;
use taskplan::llm::create_client;
use taskplan::pipeline::{PipelineConfig, PlanPipeline};
use taskplan::prompts::PromptLoader;
use taskplan::server::{self, AppState};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "taskplan loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    match cli.command {
        Command::Serve { addr } => cmd_serve(&config, addr.as_deref()).await,
        Command::Plan { goal } => cmd_plan(&config, &goal).await,
        Command::Plans { format } => cmd_plans(&config, format),
        Command::Show { id, format } => cmd_show(&config, &id, format),
    }
}

/// Build the pipeline and store from config
fn build_state(config: &Config) -> Result<AppState> {
    let llm = create_client(&config.llm).context("Failed to create LLM client")?;

    let root = std::env::current_dir().context("Failed to get current directory")?;
    let prompts = PromptLoader::new(root);

    let pipeline_config = PipelineConfig {
        max_tokens: config.llm.max_tokens,
        temperature: config.llm.temperature,
    };

    let pipeline = Arc::new(PlanPipeline::new(llm, prompts, pipeline_config));
    let store = Arc::new(PlanStore::open(&config.storage.store_dir).context("Failed to open plan store")?);

    Ok(AppState { pipeline, store })
}

/// Start the HTTP service
async fn cmd_serve(config: &Config, addr: Option<&str>) -> Result<()> {
    config.validate()?;

    let state = build_state(config)?;
    let addr = addr.unwrap_or(&config.server.addr);

    server::serve(state, addr).await
}

/// Generate one plan, store it, and print it
async fn cmd_plan(config: &Config, goal: &str) -> Result<()> {
    config.validate()?;

    if goal.trim().is_empty() {
        return Err(eyre::eyre!("Goal is required"));
    }

    let state = build_state(config)?;

    let plan = state.pipeline.run(goal).await?;
    let record = state.store.insert(goal, &plan)?;

    println!("{}", record.plan);
    eprintln!();
    eprintln!("Stored as plan {}", record.id);

    Ok(())
}

/// List stored plans
fn cmd_plans(config: &Config, format: OutputFormat) -> Result<()> {
    let store = PlanStore::open(&config.storage.store_dir).context("Failed to open plan store")?;
    let records = store.list()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No plans stored yet.");
                return Ok(());
            }
            for record in &records {
                println!("{}  {}", record.id, record.goal);
            }
        }
    }

    Ok(())
}

/// Show a stored plan
fn cmd_show(config: &Config, id: &str, format: OutputFormat) -> Result<()> {
    let store = PlanStore::open(&config.storage.store_dir).context("Failed to open plan store")?;

    let Some(record) = store.get(id)? else {
        return Err(eyre::eyre!("Plan not found: {}", id));
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Text => {
            println!("Goal: {}", record.goal);
            println!();
            println!("{}", record.plan);
        }
    }

    Ok(())
}
