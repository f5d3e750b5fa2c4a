//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **tags**: Tag vocabulary with usage counts
//! - **games** / **show**: Browse the catalog page by page, or one game by id
//! - **search**: Include/exclude tag search with match-level buckets
//! - **lookup**: Type-ahead game name lookup
//! - **import** / **export**: JSON catalog snapshots
//! - **catalog**: Manage named catalogs (add, list, remove, set-default)
//! - **config**: Read and change settings
//! - **completions**: Shell completion scripts
//!
//! Tag lists accept repeated flags and comma-separated values alike, so
//! `-i Action -i Horror` and `-i "Action, Horror"` are the same search.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use tagsieve::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["tagsieve", "search", "-i", "Action,Horror", "-e", "Indie"]);
//! match cli.command {
//!     Commands::Search { .. } => {
//!         assert_eq!(cli.command.include_tags(), ["Action", "Horror"]);
//!         assert_eq!(cli.command.exclude_tags(), ["Indie"]);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::matching::split_tag_list;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Output format for search results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Grouped, human-readable listing
    #[default]
    Text,
    /// The full result as JSON
    Json,
    /// One row per game
    Csv,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tagsieve")]
#[command(about = "Search a game catalog by included and excluded tags", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Catalog to use instead of the configured default
    #[arg(short = 'c', long = "catalog", value_name = "NAME", global = true)]
    pub catalog: Option<String>,

    /// Disable colored output (overrides config)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the tag vocabulary with usage counts
    #[command(visible_alias = "t")]
    Tags,

    /// List games, one page at a time
    #[command(visible_alias = "ls")]
    Games {
        /// Only games carrying this tag
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tag: Option<String>,

        /// Number of games to skip
        #[arg(long = "skip", default_value_t = 0)]
        skip: usize,

        /// Page size (defaults to the configured page_size)
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },

    /// Show one game by id
    Show {
        /// Game id
        id: u64,
    },

    /// List reviews for a game
    Reviews {
        /// Game id
        id: u64,
    },

    /// Find games by included and excluded tags
    #[command(visible_alias = "s")]
    Search {
        /// Tags to include (repeatable or comma-separated)
        #[arg(short = 'i', long = "include", value_name = "TAGS", num_args = 1.., required = true)]
        include: Vec<String>,

        /// Tags to exclude (repeatable or comma-separated)
        #[arg(short = 'e', long = "exclude", value_name = "TAGS", num_args = 1..)]
        exclude: Vec<String>,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Look up games by name (abbreviations like `gta` are expanded)
    #[command(visible_alias = "l")]
    Lookup {
        /// Name fragment, at least two characters
        query: String,

        /// Maximum results (defaults to the configured lookup_limit)
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },

    /// Import a JSON catalog snapshot
    Import {
        /// Snapshot file with `tags` and `games` arrays
        file: PathBuf,
    },

    /// Export the catalog as a JSON snapshot
    Export {
        /// Write to this file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Manage named catalogs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },

    /// Read or change configuration values
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Catalog management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum CatalogCommands {
    /// Register a catalog location
    Add {
        /// Name of the catalog
        name: String,

        /// Path to the catalog directory
        path: PathBuf,
    },

    /// List configured catalogs
    #[command(visible_alias = "ls")]
    List,

    /// Remove a catalog from configuration
    #[command(visible_alias = "rm")]
    Remove {
        /// Name of the catalog to remove
        name: String,

        /// Also delete catalog files from disk
        #[arg(short = 'd', long = "delete-files")]
        delete_files: bool,
    },

    /// Set the default catalog
    #[command(name = "set-default")]
    SetDefault {
        /// Name of the catalog to use by default
        name: String,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., page_size=50)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., lookup_limit)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Commands {
    /// Included tag names from `search`, comma lists flattened
    #[must_use]
    pub fn include_tags(&self) -> Vec<String> {
        match self {
            Self::Search { include, .. } => flatten_tag_lists(include),
            _ => Vec::new(),
        }
    }

    /// Excluded tag names from `search`, comma lists flattened
    #[must_use]
    pub fn exclude_tags(&self) -> Vec<String> {
        match self {
            Self::Search { exclude, .. } => flatten_tag_lists(exclude),
            _ => Vec::new(),
        }
    }

    /// True for commands that need an open catalog
    #[must_use]
    pub const fn needs_catalog(&self) -> bool {
        !matches!(
            self,
            Self::Catalog { .. } | Self::Config { .. } | Self::Completions { .. }
        )
    }
}

/// Split each raw value on commas, trimming and dropping empty entries
fn flatten_tag_lists(values: &[String]) -> Vec<String> {
    values.iter().flat_map(|value| split_tag_list(value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_repeated_flags() {
        let cli = Cli::parse_from(["tagsieve", "search", "-i", "Action", "-i", "Horror"]);
        assert_eq!(cli.command.include_tags(), ["Action", "Horror"]);
        assert!(cli.command.exclude_tags().is_empty());
    }

    #[test]
    fn test_parse_search_comma_lists() {
        let cli = Cli::parse_from(["tagsieve", "search", "-i", " Action, ,Horror ", "-e", "Indie,RPG"]);
        assert_eq!(cli.command.include_tags(), ["Action", "Horror"]);
        assert_eq!(cli.command.exclude_tags(), ["Indie", "RPG"]);
    }

    #[test]
    fn test_parse_search_multiple_values_per_flag() {
        let cli = Cli::parse_from(["tagsieve", "search", "-i", "Action", "Horror", "--format", "json"]);
        assert_eq!(cli.command.include_tags(), ["Action", "Horror"]);
        if let Commands::Search { format, .. } = cli.command {
            assert_eq!(format, OutputFormat::Json);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_search_requires_include() {
        assert!(Cli::try_parse_from(["tagsieve", "search", "-e", "Horror"]).is_err());
    }

    #[test]
    fn test_parse_games_defaults() {
        let cli = Cli::parse_from(["tagsieve", "games"]);
        if let Commands::Games { tag, skip, limit } = cli.command {
            assert!(tag.is_none());
            assert_eq!(skip, 0);
            assert!(limit.is_none());
        } else {
            panic!("Expected Games command");
        }
    }

    #[test]
    fn test_parse_reviews() {
        let cli = Cli::parse_from(["tagsieve", "reviews", "7"]);
        assert!(matches!(cli.command, Commands::Reviews { id: 7 }));
        assert!(cli.command.needs_catalog());
        assert!(Cli::try_parse_from(["tagsieve", "reviews", "seven"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tagsieve", "tags", "-q", "--catalog", "retro"]);
        assert!(cli.quiet);
        assert_eq!(cli.catalog.as_deref(), Some("retro"));
        assert!(cli.command.needs_catalog());
    }

    #[test]
    fn test_catalog_commands_do_not_need_catalog() {
        let cli = Cli::parse_from(["tagsieve", "catalog", "set-default", "main"]);
        assert!(!cli.command.needs_catalog());
        assert!(matches!(
            cli.command,
            Commands::Catalog { command: CatalogCommands::SetDefault { .. } }
        ));
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::parse_from(["tagsieve", "completions", "bash"]);
        assert!(matches!(cli.command, Commands::Completions { shell: Shell::Bash }));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
