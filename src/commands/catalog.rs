//! Catalog command - manage named catalog locations

use crate::{TagsieveError, cli::CatalogCommands, config::TagsieveConfig};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, TagsieveError>;

/// Execute a catalog management subcommand and persist the configuration
///
/// # Errors
/// Returns an error if the name is unknown or duplicated, the configuration
/// cannot be saved, or catalog files cannot be created or removed
pub fn execute(config: &mut TagsieveConfig, command: &CatalogCommands, quiet: bool) -> Result<()> {
    match command {
        CatalogCommands::Add { name, path } => add(config, name, path, quiet)?,
        CatalogCommands::List => {
            list(config, quiet);
            return Ok(());
        }
        CatalogCommands::Remove { name, delete_files } => remove(config, name, *delete_files, quiet)?,
        CatalogCommands::SetDefault { name } => {
            config.set_default_catalog(name)?;
            if !quiet {
                println!("Default catalog set to '{name}'");
            }
        }
    }
    config.save()?;
    Ok(())
}

/// Bare names resolve under the local data directory
fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.components().count() == 1 {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| TagsieveError::InvalidInput("Could not determine data directory".into()))?;
        Ok(data_dir.join("tagsieve").join(path))
    } else {
        Ok(path.to_path_buf())
    }
}

fn add(config: &mut TagsieveConfig, name: &str, path: &Path, quiet: bool) -> Result<()> {
    if config.get_catalog(name).is_some() {
        return Err(TagsieveError::InvalidInput(format!("Catalog '{name}' already exists")));
    }

    let resolved = resolve_path(path)?;
    std::fs::create_dir_all(&resolved)?;
    config.add_catalog(name.to_string(), resolved.clone());

    if !quiet {
        println!("Catalog '{name}' added at {}", resolved.display());
        if config.default_catalog.as_deref() == Some(name) {
            println!("Set '{name}' as default catalog");
        }
    }
    Ok(())
}

fn list(config: &TagsieveConfig, quiet: bool) {
    if config.catalogs.is_empty() {
        if !quiet {
            println!("No catalogs configured.");
            println!("Add one with: tagsieve catalog add <name> <path>");
        }
        return;
    }

    if !quiet {
        println!("Configured catalogs:");
    }
    for (name, path) in &config.catalogs {
        if quiet {
            println!("{name}");
        } else {
            let marker = if config.default_catalog.as_deref() == Some(name.as_str()) {
                " (default)"
            } else {
                ""
            };
            println!("  {name} -> {}{marker}", path.display());
        }
    }
}

fn remove(config: &mut TagsieveConfig, name: &str, delete_files: bool, quiet: bool) -> Result<()> {
    let was_default = config.default_catalog.as_deref() == Some(name);
    let path = config
        .remove_catalog(name)
        .ok_or_else(|| TagsieveError::InvalidInput(format!("Catalog '{name}' does not exist")))?;

    if delete_files && path.exists() {
        std::fs::remove_dir_all(&path)?;
    }

    if !quiet {
        println!("Catalog '{name}' removed");
        if delete_files {
            println!("Deleted {}", path.display());
        }
        if was_default {
            println!("Warning: that was the default catalog. Set a new one with: tagsieve catalog set-default <name>");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_creates_directory_and_sets_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games");
        let mut config = TagsieveConfig::default();

        add(&mut config, "games", &path, true).unwrap();

        assert!(path.exists());
        assert_eq!(config.default_catalog.as_deref(), Some("games"));
        assert!(add(&mut config, "games", &path, true).is_err());
    }

    #[test]
    fn test_remove_with_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("retro");
        let mut config = TagsieveConfig::default();
        add(&mut config, "retro", &path, true).unwrap();

        remove(&mut config, "retro", true, true).unwrap();

        assert!(!path.exists());
        assert!(config.catalogs.is_empty());
        assert!(remove(&mut config, "retro", false, true).is_err());
    }

    #[test]
    fn test_resolve_path_keeps_multi_component_paths() {
        let path = Path::new("/var/lib/tagsieve/games");
        assert_eq!(resolve_path(path).unwrap(), path);
    }
}
