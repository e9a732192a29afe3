//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// taskplan - LLM-backed task plan generator
#[derive(Parser)]
#[command(
    name = "tp",
    about = "Generate structured task plans from free-text goals",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP service
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        addr: Option<String>,
    },

    /// Generate a plan for a goal, store it, and print it
    Plan {
        /// Free-text goal, e.g. "Launch a product in 3 months"
        goal: String,
    },

    /// List stored plans
    Plans {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a stored plan by id
    Show {
        /// Plan id (as returned at generation time)
        id: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for inspection commands
#[derive(Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["tp", "serve"]);
        assert!(matches!(cli.command, Command::Serve { addr: None }));
    }

    #[test]
    fn test_cli_parse_serve_with_addr() {
        let cli = Cli::parse_from(["tp", "serve", "--addr", "127.0.0.1:8080"]);
        match cli.command {
            Command::Serve { addr } => assert_eq!(addr.as_deref(), Some("127.0.0.1:8080")),
            _ => panic!("Expected serve command"),
        }
    }

    #[test]
    fn test_cli_parse_plan() {
        let cli = Cli::parse_from(["tp", "plan", "Build an MVP in 6 weeks"]);
        match cli.command {
            Command::Plan { goal } => assert_eq!(goal, "Build an MVP in 6 weeks"),
            _ => panic!("Expected plan command"),
        }
    }

    #[test]
    fn test_cli_parse_plans_json() {
        let cli = Cli::parse_from(["tp", "plans", "--format", "json"]);
        match cli.command {
            Command::Plans { format } => assert!(matches!(format, OutputFormat::Json)),
            _ => panic!("Expected plans command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from(["tp", "--verbose", "plans"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("table".parse::<OutputFormat>().is_err());
    }
}
