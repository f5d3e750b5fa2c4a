//! Import and export commands - JSON catalog snapshots

use crate::{
    TagsieveError,
    catalog::{Catalog, CatalogSnapshot},
};
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, TagsieveError>;

/// Import a snapshot file into the catalog
///
/// # Errors
/// Returns an error if the file cannot be read, is not a valid snapshot, or
/// conflicts with tags already in the catalog
pub fn import(catalog: &Catalog, file: &Path, quiet: bool) -> Result<()> {
    let json = fs::read_to_string(file)?;
    let snapshot = CatalogSnapshot::from_json(&json)?;
    let summary = catalog.import(&snapshot)?;

    if !quiet {
        println!(
            "Imported {} tag(s), {} game(s) and {} review(s) from {}",
            summary.tags,
            summary.games,
            summary.reviews,
            file.display()
        );
    }
    Ok(())
}

/// Export the catalog to a file, or stdout when `output` is `None`
///
/// # Errors
/// Returns an error if the catalog cannot be read or the file cannot be written
pub fn export(catalog: &Catalog, output: Option<&Path>, quiet: bool) -> Result<()> {
    let snapshot = catalog.export()?;
    let json = snapshot.to_json_pretty()?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            if !quiet {
                println!(
                    "Exported {} tag(s), {} game(s) and {} review(s) to {}",
                    snapshot.tags.len(),
                    snapshot.games.len(),
                    snapshot.reviews.len(),
                    path.display()
                );
            }
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestCatalog, sample_snapshot};

    #[test]
    fn test_import_then_export_file() {
        let source = TestCatalog::new();
        let input = source.path().join("in.json");
        fs::write(&input, sample_snapshot().to_json_pretty().unwrap()).unwrap();

        import(source.catalog(), &input, true).unwrap();
        assert_eq!(source.catalog().count(), 3);
        assert_eq!(source.catalog().review_count(), 3);

        let output = source.path().join("out.json");
        export(source.catalog(), Some(&output), true).unwrap();
        let exported = CatalogSnapshot::from_json(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(exported, sample_snapshot());
    }

    #[test]
    fn test_import_missing_file() {
        let test_catalog = TestCatalog::new();
        let missing = test_catalog.path().join("nope.json");
        let error = import(test_catalog.catalog(), &missing, true).unwrap_err();
        assert!(matches!(error, TagsieveError::IoError(_)));
    }

    #[test]
    fn test_import_malformed_json() {
        let test_catalog = TestCatalog::new();
        let input = test_catalog.path().join("bad.json");
        fs::write(&input, "{\"tags\": [").unwrap();

        let error = import(test_catalog.catalog(), &input, true).unwrap_err();
        assert!(matches!(error, TagsieveError::CatalogError(_)));
        assert_eq!(test_catalog.catalog().tag_count(), 0);
    }
}
