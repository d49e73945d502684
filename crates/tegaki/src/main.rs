//! `tegaki` - CLI for the handwriting sample capture tool.
//!
//! This binary provides the command-line interface for running the
//! interactive capture shell and inspecting the character registry.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use tegaki::cli::{Cli, Command, ConfigCommand, ListCommand, RegisterCommand};
use tegaki::{init_logging, shell, Config, Registry};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Draw => {
            shell::run(&config)?;
            Ok(())
        }
        Command::List(list_cmd) => handle_list(&config, &list_cmd),
        Command::Status(status_cmd) => handle_status(&config, status_cmd.json),
        Command::Register(register_cmd) => handle_register(&config, &register_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_list(config: &Config, cmd: &ListCommand) -> Result<()> {
    let registry = Registry::open(config.database_path())?;

    if cmd.all {
        for record in registry.list_all()? {
            let state = if record.registered { "registered" } else { "-" };
            let path = record
                .image_path
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            println!("{}  {state:10}  {path}", record.symbol);
        }
    } else {
        for symbol in registry.list_unregistered()? {
            println!("{symbol}");
        }
    }
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> Result<()> {
    let registry = Registry::open(config.database_path())?;
    let stats = registry.stats()?;

    if json {
        let status = serde_json::json!({
            "database_path": registry.path(),
            "total": stats.total,
            "registered": stats.registered,
            "unregistered": stats.unregistered,
            "db_size_bytes": stats.db_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("tegaki status");
        println!("-------------");
        println!("Database:     {}", registry.path().display());
        println!("Total:        {}", stats.total);
        println!("Registered:   {}", stats.registered);
        println!("Unregistered: {}", stats.unregistered);
    }
    Ok(())
}

fn handle_register(config: &Config, cmd: &RegisterCommand) -> Result<()> {
    if !cmd.image.exists() {
        tracing::warn!("Image {} does not exist", cmd.image.display());
    }

    let registry = Registry::open(config.database_path())?;
    registry.mark_registered(cmd.symbol, &cmd.image)?;
    println!("Registered {} -> {}", cmd.symbol, cmd.image.display());
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Registry]");
                println!("  Database path: {}", config.database_path().display());
                println!();
                println!("[Surface]");
                println!(
                    "  Canvas:        {}x{}",
                    config.surface.width, config.surface.height
                );
                println!("  Stroke width:  {}", config.surface.stroke_width);
                println!();
                println!("[Output]");
                println!("  Directory:     {}", config.output.dir.display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
