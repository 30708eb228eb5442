//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute a config action against the file at `path`.
///
/// `config` is the configuration already loaded from `path` (or the
/// defaults when the file does not exist).
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<String> {
    match args.action {
        ConfigAction::Show => config.to_toml(),
        ConfigAction::Path => Ok(path.display().to_string()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to(path)?;
            Ok(formatter.success(&format!("Wrote default configuration to {}", path.display())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    #[test]
    fn test_init_then_refuse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let init = || ConfigArgs {
            action: ConfigAction::Init { force: false },
        };

        let message = execute_config(init(), &Config::default(), &path, &formatter()).unwrap();
        assert!(message.starts_with("✓ Wrote default configuration"));
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let again = execute_config(init(), &Config::default(), &path, &formatter());
        assert!(matches!(again, Err(CliError::Config(_))));

        let forced = ConfigArgs {
            action: ConfigAction::Init { force: true },
        };
        assert!(execute_config(forced, &Config::default(), &path, &formatter()).is_ok());
    }

    #[test]
    fn test_show_prints_effective_config() {
        let mut config = Config::default();
        config.extractor.max_concepts = 3;
        let args = ConfigArgs {
            action: ConfigAction::Show,
        };

        let shown = execute_config(args, &config, Path::new("unused.toml"), &formatter()).unwrap();
        let parsed: Config = toml::from_str(&shown).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_path() {
        let args = ConfigArgs {
            action: ConfigAction::Path,
        };
        let shown =
            execute_config(args, &Config::default(), Path::new("/tmp/p.toml"), &formatter()).unwrap();
        assert_eq!(shown, "/tmp/p.toml");
    }
}
