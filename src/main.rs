//! Tagsieve CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Load a catalog snapshot
//! tagsieve import games.json
//!
//! # Games with Action and Horror, best matches first, nothing tagged Indie
//! tagsieve search -i Action,Horror -e Indie
//! tagsieve search -i Action -i Horror --format json
//!
//! # Browse and look up
//! tagsieve tags
//! tagsieve games --tag Horror --skip 20
//! tagsieve lookup gta
//! tagsieve show 42
//!
//! # Manage catalogs and settings
//! tagsieve catalog add retro ~/catalogs/retro
//! tagsieve config set page_size=50
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr and are filtered by `TAGSIEVE_LOG`
//! (e.g. `TAGSIEVE_LOG=debug`), defaulting to warnings only.

use clap::CommandFactory;
use tagsieve::{
    TagsieveError,
    catalog::Catalog,
    cli::{Cli, Commands},
    commands,
    config::TagsieveConfig,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, TagsieveError>;

fn init_logging() {
    let filter = EnvFilter::try_from_env("TAGSIEVE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse_args();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(*shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let mut config = TagsieveConfig::load_or_setup()?;
    let quiet = cli.quiet || config.quiet;
    let color = config.color && !cli.no_color;
    if !color {
        colored::control::set_override(false);
    }

    if !cli.command.needs_catalog() {
        return match &cli.command {
            Commands::Catalog { command } => commands::catalog(&mut config, command, quiet),
            Commands::Config { command } => commands::settings(&mut config, command, quiet),
            _ => Ok(()),
        };
    }

    let (name, path) = config.resolve_catalog(cli.catalog.as_deref())?;
    debug!(catalog = %name, path = %path.display(), "opening catalog");
    let catalog = Catalog::open(&path)?;

    match &cli.command {
        Commands::Tags => commands::tags(&catalog, quiet, color),
        Commands::Games { tag, skip, limit } => commands::games::list(
            &catalog,
            tag.as_deref(),
            *skip,
            limit.unwrap_or(config.page_size),
            quiet,
        ),
        Commands::Show { id } => commands::games::show(&catalog, *id, quiet),
        Commands::Reviews { id } => commands::reviews(&catalog, *id, quiet, color),
        Commands::Search { format, .. } => commands::search(
            &catalog,
            &cli.command.include_tags(),
            &cli.command.exclude_tags(),
            *format,
            quiet,
        ),
        Commands::Lookup { query, limit } => {
            commands::lookup(&catalog, query, limit.unwrap_or(config.lookup_limit), quiet)
        }
        Commands::Import { file } => commands::transfer::import(&catalog, file, quiet),
        Commands::Export { output } => commands::transfer::export(&catalog, output.as_deref(), quiet),
        Commands::Catalog { .. } | Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}
