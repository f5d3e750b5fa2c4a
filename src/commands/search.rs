//! Search command - include/exclude tag search with match-level buckets

use crate::{
    TagsieveError,
    catalog::TagCatalog,
    cli::OutputFormat,
    output,
    search::SearchSession,
};
use std::io::{self, Write};
use tracing::info;

type Result<T> = std::result::Result<T, TagsieveError>;

/// Execute the search command, printing to stdout
///
/// # Errors
/// Returns an error if a tag name is unknown, nothing is included, the
/// catalog fails, or output cannot be written
pub fn execute<C: TagCatalog + ?Sized>(
    catalog: &C,
    include: &[String],
    exclude: &[String],
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let stdout = io::stdout();
    run(catalog, include, exclude, format, quiet, &mut stdout.lock())
}

/// Run a search and write the result to `out`
///
/// The selection is seeded through the same validated path interactive
/// toggles use, so unknown tag names are rejected before the catalog is
/// queried.
///
/// # Errors
/// Same conditions as [`execute`]
pub fn run<C: TagCatalog + ?Sized, W: Write>(
    catalog: &C,
    include: &[String],
    exclude: &[String],
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let mut session = SearchSession::load(catalog)?;
    session.seed(include, exclude)?;
    let result = session.search(catalog)?;
    info!(matches = result.len(), buckets = result.buckets.len(), "search finished");

    match format {
        OutputFormat::Json => {
            output::write_json(result, &mut *out)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => output::write_csv(result, &mut *out)?,
        OutputFormat::Text => {
            if result.is_empty() {
                if !quiet {
                    writeln!(out, "No games match the selected tags.")?;
                }
                return Ok(());
            }
            for line in output::result_text(result, quiet) {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::matching::MatchError;
    use crate::search::SearchError;
    use crate::testing::{sample_games, sample_tags};

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new(sample_tags(), sample_games())
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn run_to_string(include: &[&str], exclude: &[&str], format: OutputFormat) -> Result<String> {
        let mut buffer = Vec::new();
        run(&catalog(), &names(include), &names(exclude), format, true, &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_default())
    }

    #[test]
    fn test_text_output_in_bucket_order() {
        let text = run_to_string(&["Action", "Horror"], &[], OutputFormat::Text).unwrap();
        assert_eq!(text, "B\nA\nC\n");
    }

    #[test]
    fn test_excluded_tag_filters_output() {
        let text = run_to_string(&["Action"], &["Horror"], OutputFormat::Text).unwrap();
        assert_eq!(text, "A\n");
    }

    #[test]
    fn test_json_output() {
        let json = run_to_string(&["RPG"], &[], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_required_tags"], 1);
        assert!(value["results"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let error = run_to_string(&["Puzzle"], &[], OutputFormat::Text).unwrap_err();
        assert!(matches!(
            error,
            TagsieveError::SearchError(SearchError::Selection(_))
        ));
    }

    #[test]
    fn test_tag_on_both_sides_is_rejected() {
        let error = run_to_string(&["Action", "Horror"], &["Horror"], OutputFormat::Text).unwrap_err();
        assert!(matches!(
            error,
            TagsieveError::SearchError(SearchError::InvalidQuery(MatchError::ConflictingTags(_)))
        ));
    }

    #[test]
    fn test_only_excludes_is_rejected() {
        let error = run_to_string(&[], &["Horror"], OutputFormat::Text).unwrap_err();
        assert!(matches!(
            error,
            TagsieveError::SearchError(SearchError::NoIncludedTags)
        ));
    }
}
