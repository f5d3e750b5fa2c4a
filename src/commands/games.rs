//! Games and show commands - browse the catalog

use crate::{TagsieveError, catalog::Catalog, model::GameId, output};

type Result<T> = std::result::Result<T, TagsieveError>;

/// List one page of games, optionally restricted to a tag
///
/// # Errors
/// Returns an error if the catalog cannot be read
pub fn list(catalog: &Catalog, tag: Option<&str>, skip: usize, limit: usize, quiet: bool) -> Result<()> {
    let games = catalog.games_page(skip, limit, tag)?;

    if games.is_empty() {
        if !quiet {
            match tag {
                Some(tag) => println!("No games tagged '{tag}' on this page."),
                None => println!("No games found on this page."),
            }
        }
        return Ok(());
    }

    if !quiet {
        let end = skip + games.len();
        println!("Games {}-{end} of {}:", skip + 1, total_games(catalog, tag)?);
    }
    for game in &games {
        println!("{}", output::game_line(game, quiet));
    }
    Ok(())
}

/// Size of the listing being paged: the whole catalog, or games carrying `tag`
fn total_games(catalog: &Catalog, tag: Option<&str>) -> Result<usize> {
    Ok(match tag {
        Some(tag) => catalog.find_by_tag(tag)?.len(),
        None => catalog.count(),
    })
}

/// Show a single game by id
///
/// # Errors
/// Returns `CatalogError::GameNotFound` if no game has this id
pub fn show(catalog: &Catalog, id: u64, quiet: bool) -> Result<()> {
    let game = catalog.game(GameId(id))?;
    if quiet {
        println!("{}", game.name);
    } else {
        println!("{}", output::game_details(&game));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestCatalog;

    #[test]
    fn test_total_games_follows_tag_filter() {
        let test_catalog = TestCatalog::with_sample();
        let catalog = test_catalog.catalog();

        assert_eq!(total_games(catalog, None).unwrap(), 3);
        assert_eq!(total_games(catalog, Some("Indie")).unwrap(), 1);
        assert_eq!(total_games(catalog, Some("RPG")).unwrap(), 0);
    }

    #[test]
    fn test_show_unknown_game() {
        let test_catalog = TestCatalog::with_sample();
        let error = show(test_catalog.catalog(), 42, true).unwrap_err();
        assert!(matches!(error, TagsieveError::CatalogError(_)));
    }
}
