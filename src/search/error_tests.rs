//! Unit tests for search error types

#[cfg(test)]
mod tests {
    use crate::catalog::CatalogError;
    use crate::matching::MatchError;
    use crate::model::TagId;
    use crate::search::error::SearchError;
    use crate::selection::SelectionError;
    use std::error::Error;

    #[test]
    fn test_no_included_tags_message() {
        assert_eq!(
            SearchError::NoIncludedTags.to_string(),
            "Select at least one tag to include"
        );
    }

    #[test]
    fn test_from_match_error_no_included_tags() {
        let error: SearchError = MatchError::NoIncludedTags.into();
        assert!(matches!(error, SearchError::NoIncludedTags));
    }

    #[test]
    fn test_from_match_error_conflict() {
        let error: SearchError = MatchError::ConflictingTags(vec!["Horror".into()]).into();
        assert!(matches!(error, SearchError::InvalidQuery(_)));
        assert!(error.to_string().contains("Horror"));
    }

    #[test]
    fn test_selection_error_is_transparent() {
        let error: SearchError = SelectionError::UnknownTag(TagId(9)).into();
        assert_eq!(error.to_string(), "Unknown tag id: 9");
    }

    #[test]
    fn test_catalog_error_wrapped() {
        let error: SearchError = CatalogError::Unavailable("timeout".into()).into();
        assert!(error.to_string().starts_with("Catalog unavailable"));
        assert!(error.source().is_some());
        assert!(error.is_retryable());
        assert!(!SearchError::NoIncludedTags.is_retryable());
    }

    #[test]
    fn test_error_debug() {
        let debug = format!("{:?}", SearchError::NoIncludedTags);
        assert!(debug.contains("NoIncludedTags"));
    }
}
