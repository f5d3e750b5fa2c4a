//! Interactive setup wizard for first-time configuration

use super::TagsieveConfig;
use config::ConfigError;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Prompt for a first catalog name and location, then save the config
///
/// # Errors
///
/// Returns `ConfigError` if the data directory cannot be determined, input
/// cannot be read, or the configuration cannot be saved.
pub fn first_time_setup() -> Result<TagsieveConfig, ConfigError> {
    println!("Welcome to tagsieve! Let's set up your first game catalog.\n");

    let default_data_dir = dirs::data_local_dir()
        .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?
        .join("tagsieve");

    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt("Catalog name")
        .default("games".to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let default_path = default_data_dir.join(&name);
    let location: String = Input::with_theme(&theme)
        .with_prompt("Catalog location")
        .default(default_path.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let color = Confirm::with_theme(&theme)
        .with_prompt("Color tags by category?")
        .default(true)
        .interact()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let mut config = TagsieveConfig {
        color,
        ..TagsieveConfig::default()
    };
    config.add_catalog(name, PathBuf::from(location));
    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
