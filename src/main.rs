//! Latexes - compile Spanish-keyword document markup into LaTeX.
//!
//! This binary provides the CLI interface to the latexes compiler, reading
//! source text from a file, stdin, or a built-in sample.

mod cli;
mod samples;

use clap::Parser as ClapParser;
use cli::Cli;
use latexes_config::Config;
use latexes_core::{LatexesError, Result, Token};
use latexes_parser::{compile, CompileResult};
use log::{debug, error, info, LevelFilter};
use std::io::{self, Read, Write};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        if let Err(e) = cli::show_paths() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    if cli.list_examples {
        for sample in samples::SAMPLES {
            println!("{:<12} {}", sample.name, sample.description);
        }
        return;
    }

    setup_logging(&cli.log_level);
    info!("Latexes v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    env_logger::Builder::new()
        .filter_level(parse_level(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}

/// Main application logic. Returns whether compilation succeeded.
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli);
    debug!("Loaded config: {:?}", config);

    let source = read_source(cli)?;
    let result = compile(&source);

    if cli.dump_tokens(&config) {
        match &result {
            CompileResult::Success { tokens, .. } => dump_tokens(tokens)?,
            CompileResult::Failure { .. } => dump_tokens(&latexes_lexer::tokenize(&source))?,
        }
    }

    match result {
        CompileResult::Success {
            output, metadata, ..
        } => {
            debug!(
                "Document metadata: title={:?} author={:?} date={:?}",
                metadata.title, metadata.author, metadata.date
            );
            write_output(cli, &config, &output)?;
            Ok(true)
        }
        CompileResult::Failure { error_message } => {
            debug!("Compilation failed");
            eprintln!("Error: {}", error_message);
            Ok(false)
        }
    }
}

/// Load configuration, falling back to defaults when it cannot be read.
fn load_config(cli: &Cli) -> Config {
    match Config::load_with_override(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            Config::default()
        }
    }
}

/// Read the source text from stdin, the file, or a sample.
fn read_source(cli: &Cli) -> Result<String> {
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    if let Some(ref path) = cli.file {
        info!("Processing file: {}", path.display());
        return Ok(std::fs::read_to_string(path)?);
    }

    let name = cli.example.as_deref().unwrap_or_default();
    let sample = samples::find(name).ok_or_else(|| {
        LatexesError::Config(format!(
            "Unknown example '{}' (available: {})",
            name,
            samples::names().join(", ")
        ))
    })?;
    info!("Compiling built-in example: {}", sample.name);
    Ok(sample.source.to_string())
}

fn dump_tokens(tokens: &[Token]) -> Result<()> {
    let mut stderr = io::stderr().lock();
    for token in tokens {
        writeln!(stderr, "{}", token)?;
    }
    Ok(())
}

fn write_output(cli: &Cli, config: &Config, output: &str) -> Result<()> {
    match cli.output_target(config) {
        Some(path) => {
            std::fs::write(&path, output)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
