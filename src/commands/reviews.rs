//! Reviews command - list what critics said about one game

use crate::{
    TagsieveError,
    catalog::Catalog,
    model::{GameId, Review, Source, SourceId},
    output,
};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, TagsieveError>;

/// List the reviews of a game with their sources
///
/// # Errors
/// Returns `CatalogError::GameNotFound` if no game has this id, or an error
/// if the catalog cannot be read
pub fn execute(catalog: &Catalog, id: u64, quiet: bool, color: bool) -> Result<()> {
    let (game_name, lines) = review_lines(catalog, GameId(id), quiet, color)?;

    if lines.is_empty() {
        if !quiet {
            println!("No reviews for {game_name}.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Reviews of {game_name} ({}):", lines.len());
    }
    for line in &lines {
        println!("{line}");
    }
    Ok(())
}

fn review_lines(catalog: &Catalog, id: GameId, quiet: bool, color: bool) -> Result<(String, Vec<String>)> {
    let game = catalog.game(id)?;
    let reviews = catalog.reviews_for(id)?;
    let sources = sources_by_id(catalog, &reviews)?;

    let lines = reviews
        .iter()
        .map(|review| {
            let source = review.source_id.and_then(|source| sources.get(&source));
            output::review_line(review, source, quiet, color)
        })
        .collect();
    Ok((game.name, lines))
}

fn sources_by_id(catalog: &Catalog, reviews: &[Review]) -> Result<HashMap<SourceId, Source>> {
    let mut sources = HashMap::new();
    for id in reviews.iter().filter_map(|review| review.source_id) {
        if sources.contains_key(&id) {
            continue;
        }
        if let Some(source) = catalog.get_source(id)? {
            sources.insert(id, source);
        }
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::testing::TestCatalog;

    #[test]
    fn test_review_lines_name_their_sources() {
        let test_catalog = TestCatalog::with_sample();
        let (name, lines) = review_lines(test_catalog.catalog(), GameId(2), false, false).unwrap();

        assert_eq!(name, "B");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  #1 [positive] IGN, Jane Doe (2023-03-24)"));
        assert_eq!(lines[1], "  #2 [mixed] Skill Up");
    }

    #[test]
    fn test_game_without_reviews() {
        let test_catalog = TestCatalog::with_sample();
        let (name, lines) = review_lines(test_catalog.catalog(), GameId(3), true, false).unwrap();
        assert_eq!(name, "C");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_reviews_of_unknown_game() {
        let test_catalog = TestCatalog::with_sample();
        let error = execute(test_catalog.catalog(), 42, true, false).unwrap_err();
        assert!(matches!(
            error,
            TagsieveError::CatalogError(CatalogError::GameNotFound(GameId(42)))
        ));
    }
}
