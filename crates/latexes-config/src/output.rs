//! Output configuration.

use serde::{Deserialize, Serialize};

/// Where and how compiled LaTeX is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// File written by `--save`.
    /// Default: "documento_generado.tex"
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Dump the token stream to stderr.
    /// Default: false
    #[serde(default)]
    pub tokens: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            tokens: false,
        }
    }
}

impl OutputConfig {
    /// Apply the keys an override actually sets.
    pub fn merge(&mut self, other: &OutputOverride) {
        if let Some(ref file_name) = other.file_name {
            self.file_name = file_name.clone();
        }
        if let Some(tokens) = other.tokens {
            self.tokens = tokens;
        }
    }
}

/// Partial `[output]` table from a `--config` override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputOverride {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub tokens: Option<bool>,
}

fn default_file_name() -> String {
    "documento_generado.tex".to_string()
}
