// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use steward::output::OutputMode;

#[derive(Parser)]
#[command(name = "steward")]
#[command(about = "Track container cluster deployments and replay recorded rollouts")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a template steward.yml scenario
    Init {
        /// Task definition to roll out
        #[arg(short, long)]
        task_definition: Option<String>,

        /// Overwrite an existing scenario
        #[arg(long)]
        force: bool,
    },

    /// Replay a scenario through a fresh deployment
    Replay {
        /// Scenario file (default: discover steward.yml in the current directory)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputMode::Normal)]
        output: OutputMode,
    },
}
