//! Error types for latexes

use thiserror::Error;

/// Main error type for latexes operations
#[derive(Error, Debug)]
pub enum LatexesError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required token was missing while generating LaTeX
    #[error("Error sintáctico (línea {line}): {message}")]
    Syntax { line: usize, message: String },
}

impl LatexesError {
    /// Build a syntax error reported at `line`.
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        LatexesError::Syntax {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for latexes operations
pub type Result<T> = std::result::Result<T, LatexesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_display() {
        let err = LatexesError::syntax(3, "Se esperaba ; después de titulo");
        assert_eq!(
            err.to_string(),
            "Error sintáctico (línea 3): Se esperaba ; después de titulo"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LatexesError = io.into();
        assert!(matches!(err, LatexesError::Io(_)));
    }
}
