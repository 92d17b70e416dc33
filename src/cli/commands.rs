//! Subcommand handlers for config actions.

use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use crate::config::{default_path, Config, ConfigError, DEFAULT_CONFIG_TOML};

/// Run a `config` subcommand against `path` (or the default config path).
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) -> Result<(), ConfigError> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let exists = config_path.exists();
            let config = if exists {
                Config::load_from_explicit(&config_path)?
            } else {
                Config::default()
            };
            let body = config.to_toml().map_err(|e| ConfigError::Invalid {
                field: "config",
                reason: e.to_string(),
            })?;

            println!(
                "Config file: {} ({})",
                config_path.display(),
                if exists { "exists" } else { "not found" }
            );
            println!();
            if body.trim().is_empty() {
                println!("(built-in defaults)");
            } else {
                println!("{}", body);
            }
            Ok(())
        }
        ConfigAction::Init => {
            let written = init_config(&config_path)?;
            println!("Created config file: {}", written.display());
            Ok(())
        }
    }
}

/// Write the default config file to `path`, refusing to overwrite.
pub fn init_config(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(path.to_path_buf())
}
