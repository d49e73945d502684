//! Command-line interface for tegaki.
//!
//! This module provides the CLI structure and command handlers for the
//! `tegaki` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ListCommand, RegisterCommand, StatusCommand};

/// tegaki - Capture handwritten character samples
///
/// An interactive tool for collecting handwriting samples of a fixed
/// alphabet: pick an unregistered character, trace it with the mouse, and
/// save the strokes as a PNG linked in a local registry.
#[derive(Debug, Parser)]
#[command(name = "tegaki")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive capture shell
    Draw,

    /// List characters waiting for a sample
    List(ListCommand),

    /// Show registry status
    Status(StatusCommand),

    /// Mark a character registered with an existing image
    Register(RegisterCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "tegaki");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: Command::Draw,
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: false,
            command: Command::Draw,
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_trace() {
        let cli = Cli {
            config: None,
            verbose: 2,
            quiet: false,
            command: Command::Draw,
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_draw() {
        let cli = Cli::try_parse_from(["tegaki", "draw"]).unwrap();
        assert!(matches!(cli.command, Command::Draw));
    }

    #[test]
    fn test_parse_list_all() {
        let cli = Cli::try_parse_from(["tegaki", "list", "--all"]).unwrap();
        assert!(matches!(cli.command, Command::List(ListCommand { all: true })));
    }

    #[test]
    fn test_parse_status_json() {
        let cli = Cli::try_parse_from(["tegaki", "status", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Status(StatusCommand { json: true })
        ));
    }

    #[test]
    fn test_parse_register() {
        let cli = Cli::try_parse_from(["tegaki", "register", "あ", "output/char_1.png"]).unwrap();
        match cli.command {
            Command::Register(cmd) => {
                assert_eq!(cmd.symbol, 'あ');
                assert_eq!(cmd.image, PathBuf::from("output/char_1.png"));
            }
            _ => panic!("expected register command"),
        }
    }

    #[test]
    fn test_parse_register_rejects_multi_char() {
        let result = Cli::try_parse_from(["tegaki", "register", "ab", "x.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["tegaki", "-c", "/custom/config.toml", "draw"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::try_parse_from(["tegaki", "config", "path"]).unwrap();
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Path)));
    }
}
