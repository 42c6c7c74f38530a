//! Latexes Core
//!
//! This crate provides core types and error definitions shared by the
//! latexes lexer, generator, and command-line front end.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Token`], [`TokenKind`] - Lexical units and their closed set of kinds
//! - [`DocumentMetadata`] - Title, author, and date collected while generating
//! - [`ListKind`], [`TextStyle`], [`HeadingLevel`] - Document structure enums
//! - [`LatexesError`] - Error types

pub mod enums;
pub mod error;
pub mod metadata;
pub mod token;

pub use enums::{HeadingLevel, ListKind, TextStyle};
pub use error::{LatexesError, Result};
pub use metadata::DocumentMetadata;
pub use token::{Token, TokenKind, KEYWORDS};
