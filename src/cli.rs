//! Command-line interface for latexes.

use clap::Parser;
use latexes_config::Config;
use latexes_core::Result;
use std::path::PathBuf;

/// Latexes - compile Spanish-keyword document markup into LaTeX.
///
/// Reads a source file (or stdin), compiles it, and prints the LaTeX
/// document to stdout or writes it to a file.
#[derive(Parser, Debug)]
#[command(
    name = "latexes",
    author = "Latexes Contributors",
    version,
    about = "Compiles Spanish-keyword document markup into LaTeX",
    after_help = "Examples:\n  \
                  latexes documento.txt\n  \
                  cat documento.txt | latexes -o documento.tex\n  \
                  latexes --example matematicas --save\n  \
                  latexes --tokens -l debug documento.txt"
)]
pub struct Cli {
    /// Source file to compile (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write the LaTeX to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the LaTeX to the configured default file name
    #[arg(long = "save", conflicts_with = "output")]
    pub save: bool,

    /// Compile a built-in sample document instead of input
    #[arg(short = 'e', long = "example", value_name = "NAME", conflicts_with = "file")]
    pub example: Option<String>,

    /// List the built-in sample documents and exit
    #[arg(long = "list-examples")]
    pub list_examples: bool,

    /// Dump the token stream to stderr
    #[arg(long = "tokens")]
    pub tokens: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.file.is_none() && self.example.is_none()
    }

    /// File to write the LaTeX to; `None` means stdout.
    pub fn output_target(&self, config: &Config) -> Option<PathBuf> {
        self.output
            .clone()
            .or_else(|| self.save.then(|| PathBuf::from(&config.output.file_name)))
    }

    /// Whether the token stream should be dumped.
    pub fn dump_tokens(&self, config: &Config) -> bool {
        self.tokens || config.output.tokens
    }
}

/// Show paths information, creating the default config file if missing.
pub fn show_paths() -> Result<()> {
    let config_path = Config::ensure_config_file()?;

    println!("paths:");
    println!("  config                {}", config_path.display());
    Ok(())
}
