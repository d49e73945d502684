//! `tegaki-scaffold` - validate or create the project layout.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tegaki_scaffold::{setup, validate};

/// tegaki-scaffold - Project layout validation and scaffolding
#[derive(Debug, Parser)]
#[command(name = "tegaki-scaffold")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root to operate on
    #[arg(short, long, global = true, default_value = ".", value_name = "DIR")]
    root: PathBuf,

    /// The command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the project layout, printing one diagnostic per missing path
    Validate,

    /// Create the project layout with placeholder contents, skipping
    /// existing paths
    Setup,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stdout by contract; tracing is debug-only here.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tegaki_scaffold=warn")),
        )
        .try_init();

    match cli.command {
        Command::Validate => run_validate(&cli.root),
        Command::Setup => run_setup(&cli.root),
    }
}

fn run_validate(root: &std::path::Path) -> ExitCode {
    println!("Starting directory structure validation...");
    println!();

    let report = validate(root);
    for line in report.diagnostics() {
        println!("{line}");
    }

    println!();
    if report.is_ok() {
        println!("Directory structure validation PASSED.");
        ExitCode::SUCCESS
    } else {
        println!("Directory structure validation FAILED.");
        ExitCode::FAILURE
    }
}

fn run_setup(root: &std::path::Path) -> ExitCode {
    match setup(root) {
        Ok(report) => {
            for path in &report.created {
                println!("Created: {}", path.display());
            }
            for path in &report.skipped {
                println!("Exists, skipped: {}", path.display());
            }
            println!();
            println!(
                "Note: .github/, CODING_GUIDELINES.md, PROJECT_STRUCTURE.md and README.md \
                 are left to the project owner and were not touched."
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Setup failed: {e}");
            ExitCode::FAILURE
        }
    }
}
