// ABOUTME: Entry point for the steward CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use std::env;
use std::path::PathBuf;
use steward::config::{self, Scenario};
use steward::deploy::UuidGenerator;
use steward::error::Result;
use steward::output::{Output, OutputMode};
use steward::replay::replay;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(match &cli.command {
        Commands::Replay { output, .. } => *output,
        Commands::Init { .. } => OutputMode::Normal,
    });

    if let Err(e) = run(cli, &output) {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    match cli.command {
        Commands::Init {
            task_definition,
            force,
        } => {
            let cwd = env::current_dir()?;
            config::init_scenario(&cwd, task_definition.as_deref(), force)?;
            output.progress(&format!("Wrote {}", config::SCENARIO_FILENAME));
            Ok(())
        }
        Commands::Replay { file, .. } => {
            let scenario = load_scenario(file)?;
            output.progress(&format!(
                "Replaying {} ({} sample(s))",
                scenario.task_definition,
                scenario.samples.len()
            ));

            let report = replay(&scenario, &UuidGenerator)?;
            output.report(&report);
            Ok(())
        }
    }
}

fn load_scenario(file: Option<PathBuf>) -> Result<Scenario> {
    match file {
        Some(path) => Scenario::load(&path),
        None => Scenario::discover(&env::current_dir()?),
    }
}
