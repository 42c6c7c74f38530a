//! Document metadata collected during generation.

use serde::{Deserialize, Serialize};

/// Title used when the source never calls `titulo`.
pub const DEFAULT_TITLE: &str = "Documento Sin Título";

/// Date used when the source never calls `fecha`.
pub const DEFAULT_DATE: &str = "\\today";

/// Title, author, and date of the document being compiled.
///
/// Filled in as `titulo`, `autor` and `fecha` commands are encountered.
/// A later command overwrites an earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub date: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: String::new(),
            date: DEFAULT_DATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let metadata = DocumentMetadata::default();
        assert_eq!(metadata.title, "Documento Sin Título");
        assert!(metadata.author.is_empty());
        assert_eq!(metadata.date, "\\today");
    }
}
