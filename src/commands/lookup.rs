//! Lookup command - type-ahead search on game names

use crate::{
    TagsieveError,
    catalog::{Catalog, lookup::MIN_QUERY_LEN},
    output,
};

type Result<T> = std::result::Result<T, TagsieveError>;

/// Execute the lookup command
///
/// # Errors
/// Returns an error if the catalog cannot be read
pub fn execute(catalog: &Catalog, query: &str, limit: usize, quiet: bool) -> Result<()> {
    if query.trim().chars().count() < MIN_QUERY_LEN {
        if !quiet {
            eprintln!("Type at least {MIN_QUERY_LEN} characters to look up a game.");
        }
        return Ok(());
    }

    let games = catalog.lookup(query, limit)?;
    if games.is_empty() && !quiet {
        println!("No games match '{query}'.");
    }
    for game in &games {
        println!("{}", output::game_line(game, quiet));
    }
    Ok(())
}
