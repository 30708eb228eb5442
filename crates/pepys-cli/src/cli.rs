//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pepys CLI - Extract people, places and ideas from personal writing.
#[derive(Debug, Parser)]
#[command(name = "pepys")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PEPYS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (identifiers only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract entities from text
    Extract(ExtractArgs),

    /// Print the entity references extracted from text
    Refs(RefsArgs),

    /// Build the record that would be handed to a record store
    Record(RecordArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Where the text to analyze comes from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Primary text (omit when using --file or --stdin)
    pub text: Option<String>,

    /// Read the primary text from a file
    #[arg(long, conflicts_with_all = ["text", "stdin"])]
    pub file: Option<PathBuf>,

    /// Read the primary text from stdin
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,

    /// Secondary text, e.g. a response to a prompt
    #[arg(long)]
    pub secondary: Option<String>,

    /// Tertiary text, e.g. a follow-up note
    #[arg(long)]
    pub tertiary: Option<String>,
}

/// Arguments for the extract command.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the refs command.
#[derive(Debug, Args)]
pub struct RefsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Override the minimum concept salience (0.0-1.0)
    #[arg(long)]
    pub min_salience: Option<f64>,
}

/// Arguments for the record command.
#[derive(Debug, Args)]
pub struct RecordArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Label of the application the record originates from
    #[arg(short, long)]
    pub origin: String,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from(["pepys", "extract", "I will call my mom.", "--format", "json"]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.input.text.as_deref(), Some("I will call my mom."));
                assert!(!args.input.stdin);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_record_requires_origin() {
        assert!(Cli::try_parse_from(["pepys", "record", "text"]).is_err());

        let cli = Cli::parse_from(["pepys", "record", "text", "--origin", "journal", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Record(args) => assert_eq!(args.origin, "journal"),
            _ => panic!("Expected Record command"),
        }
    }

    #[test]
    fn test_text_conflicts_with_stdin() {
        assert!(Cli::try_parse_from(["pepys", "extract", "text", "--stdin"]).is_err());
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["pepys", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
