//! Latexes Parser
//!
//! Single-pass parser and LaTeX generator for the latexes document
//! language, plus the [`compile`] entry point that runs the whole pipeline.
//!
//! # Example
//!
//! ```
//! use latexes_parser::compile;
//!
//! let result = compile("seccion(\"Introducción\"); parrafo(\"Hola\");");
//! let latex = result.output().unwrap();
//! assert!(latex.contains("\\section{Introducción}\n\nHola\n\n"));
//! ```

pub mod compile;
pub mod generator;
pub mod latex;
pub mod state;

pub use compile::{compile, CompileResult};
pub use generator::{generate, Generated, Generator};
pub use state::GeneratorState;
