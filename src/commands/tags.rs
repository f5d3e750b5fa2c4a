//! Tags command - list the tag vocabulary with usage counts

use crate::{TagsieveError, catalog::Catalog, output};

type Result<T> = std::result::Result<T, TagsieveError>;

/// Execute the tags command
///
/// # Errors
/// Returns an error if the catalog cannot be read
pub fn execute(catalog: &Catalog, quiet: bool, color: bool) -> Result<()> {
    let usage = catalog.tag_usage()?;

    if usage.is_empty() {
        if !quiet {
            println!("No tags found in catalog.");
            println!("Import some with: tagsieve import <file.json>");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in catalog:");
    }
    for (tag, count) in &usage {
        println!("{}", output::tag_with_count(tag, *count, quiet, color));
    }
    Ok(())
}
