//! Pepys CLI - Command-line interface for the Pepys entity extractor.

use anyhow::Context;
use clap::Parser;
use pepys_cli::commands;
use pepys_cli::{Cli, Command, Config, Formatter};
use pepys_extractor::EntityExtractor;
use pepys_store::MemoryStore;
use pepys_tagger::RuleTagger;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    if cli.config.is_some() && !config_path.exists() {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} not found, using defaults", config_path.display()))
        );
    }

    let output = match cli.command {
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
        cmd => {
            let extractor = EntityExtractor::with_config(RuleTagger::new(), config.extractor.clone())
                .context("Invalid extractor configuration")?;

            match cmd {
                Command::Extract(args) => commands::execute_extract(args, &extractor, &formatter)?,
                Command::Refs(args) => commands::execute_refs(args, &extractor, &formatter)?,
                Command::Record(args) => {
                    let mut store = MemoryStore::new();
                    commands::execute_record(args, &extractor, &mut store, &formatter)?
                }
                Command::Config(_) => unreachable!(),
            }
        }
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
