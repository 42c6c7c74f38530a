//! The `compile` entry point.

use crate::generator::generate;
use latexes_core::{DocumentMetadata, Token};
use latexes_lexer::tokenize;
use log::{debug, info};

/// Outcome of compiling one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileResult {
    Success {
        /// Complete LaTeX document
        output: String,
        /// Token stream the output was generated from
        tokens: Vec<Token>,
        metadata: DocumentMetadata,
    },
    Failure {
        /// Human-readable syntax error
        error_message: String,
    },
}

impl CompileResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileResult::Success { .. })
    }

    /// The generated LaTeX, if compilation succeeded.
    pub fn output(&self) -> Option<&str> {
        match self {
            CompileResult::Success { output, .. } => Some(output),
            CompileResult::Failure { .. } => None,
        }
    }

    /// The error message, if compilation failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            CompileResult::Success { .. } => None,
            CompileResult::Failure { error_message } => Some(error_message),
        }
    }

    /// Tokens of a successful compilation; empty on failure.
    pub fn tokens(&self) -> &[Token] {
        match self {
            CompileResult::Success { tokens, .. } => tokens,
            CompileResult::Failure { .. } => &[],
        }
    }

    pub fn metadata(&self) -> Option<&DocumentMetadata> {
        match self {
            CompileResult::Success { metadata, .. } => Some(metadata),
            CompileResult::Failure { .. } => None,
        }
    }
}

/// Compile latexes source text into a LaTeX document.
///
/// Every call starts from fresh lexer and generator state, so calls are
/// independent of each other.
pub fn compile(source: &str) -> CompileResult {
    let tokens = tokenize(source);
    match generate(&tokens) {
        Ok(generated) => {
            info!(
                "Compiled {} tokens into {} bytes of LaTeX",
                tokens.len(),
                generated.latex.len()
            );
            CompileResult::Success {
                output: generated.latex,
                tokens,
                metadata: generated.metadata,
            }
        }
        Err(e) => {
            debug!("Compilation failed: {}", e);
            CompileResult::Failure {
                error_message: e.to_string(),
            }
        }
    }
}
