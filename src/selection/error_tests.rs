//! Unit tests for selection error types

#[cfg(test)]
mod tests {
    use crate::model::TagId;
    use crate::selection::error::SelectionError;
    use std::error::Error;

    #[test]
    fn test_unknown_tag_display() {
        let error = SelectionError::UnknownTag(TagId(42));
        assert_eq!(error.to_string(), "Unknown tag id: 42");
    }

    #[test]
    fn test_unknown_tag_name_display() {
        let error = SelectionError::UnknownTagName("Puzzle".to_string());
        assert_eq!(error.to_string(), "Unknown tag: Puzzle");
    }

    #[test]
    fn test_error_debug() {
        let debug = format!("{:?}", SelectionError::UnknownTag(TagId(7)));
        assert!(debug.contains("UnknownTag"));
    }

    #[test]
    fn test_error_source() {
        assert!(SelectionError::UnknownTagName("x".into()).source().is_none());
    }
}
