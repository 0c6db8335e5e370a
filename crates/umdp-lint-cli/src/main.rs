//! umdp-lint CLI tool.
//!
//! Usage:
//! ```bash
//! umdp-lint check [OPTIONS] [PATH]
//! umdp-lint list-rules
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod driver;

/// UMDP3 compliance checker for Fortran and C source files
#[derive(Parser)]
#[command(name = "umdp-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run compliance checks
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Macro names whose if-defs are due for retirement
        /// (can be specified multiple times)
        #[arg(long = "retired-ifdef")]
        retired_ifdefs: Vec<String>,
    },

    /// List available rules
    ListRules,
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            retired_ifdefs,
        } => commands::check::run(&path, format, retired_ifdefs),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
    }
}
