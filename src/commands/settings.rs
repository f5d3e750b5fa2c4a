//! Config command - read and change settings

use crate::{TagsieveError, cli::ConfigCommands, config::{SETTABLE_KEYS, TagsieveConfig}};

type Result<T> = std::result::Result<T, TagsieveError>;

/// Execute a config subcommand
///
/// # Errors
/// Returns an error for a malformed `KEY=VALUE`, an unknown key, an invalid
/// value, or if the configuration cannot be saved
pub fn execute(config: &mut TagsieveConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Get { key } => {
            let value = config.get(key).map_err(|_| unknown_key(key))?;
            println!("{value}");
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            config.set(key, value).map_err(|err| match err {
                ::config::ConfigError::NotFound(_) => unknown_key(key),
                other => TagsieveError::ConfigError(other),
            })?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
    }
    Ok(())
}

/// Split `KEY=VALUE`, trimming both sides
fn parse_setting(setting: &str) -> Result<(&str, &str)> {
    let (key, value) = setting
        .split_once('=')
        .ok_or_else(|| TagsieveError::InvalidInput(format!("Expected KEY=VALUE, got '{setting}'")))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(TagsieveError::InvalidInput("Configuration key cannot be empty".into()));
    }
    Ok((key, value.trim()))
}

fn unknown_key(key: &str) -> TagsieveError {
    TagsieveError::InvalidInput(format!(
        "Unknown configuration key '{key}' (expected one of: {})",
        SETTABLE_KEYS.join(", ")
    ))
}
