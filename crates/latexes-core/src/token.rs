//! Tokens produced by the lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the source text it was built from
//! and the line its first character sits on.

use serde::{Deserialize, Serialize};

/// Every kind of token the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // === Document delimiters ===
    DocumentStart,
    DocumentEnd,

    // === Metadata and configuration ===
    Title,
    Author,
    Date,
    Configure,

    // === Headings ===
    Chapter,
    Section,
    Subsection,
    Subsubsection,

    // === Text ===
    Paragraph,
    Bold,
    Italic,
    Underline,
    Strikethrough,

    // === Lists ===
    SimpleList,
    NumberedList,
    Item,
    EndList,

    // === Math ===
    Equation,
    Formula,

    // === Breaks ===
    LineBreak,
    PageBreak,
    NewPage,

    // === Symbols ===
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Semicolon,
    Equals,

    // === Literals ===
    /// Double-quoted string, escapes already resolved
    String,
    /// Unquoted run of text up to `;` or end of line
    BareText,
    /// Run of digits and dots
    Number,
    /// Word that is not a keyword
    Identifier,

    /// End of input, always the last token
    Eof,
}

/// The fixed, case-sensitive keyword table.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("documento_inicio", TokenKind::DocumentStart),
    ("documento_fin", TokenKind::DocumentEnd),
    ("configurar", TokenKind::Configure),
    ("seccion", TokenKind::Section),
    ("subseccion", TokenKind::Subsection),
    ("subsubseccion", TokenKind::Subsubsection),
    ("capitulo", TokenKind::Chapter),
    ("negrita", TokenKind::Bold),
    ("cursiva", TokenKind::Italic),
    ("subrayado", TokenKind::Underline),
    ("tachado", TokenKind::Strikethrough),
    ("parrafo", TokenKind::Paragraph),
    ("lista_simple", TokenKind::SimpleList),
    ("lista_numerada", TokenKind::NumberedList),
    ("elemento", TokenKind::Item),
    ("fin_lista", TokenKind::EndList),
    ("ecuacion", TokenKind::Equation),
    ("formula", TokenKind::Formula),
    ("titulo", TokenKind::Title),
    ("autor", TokenKind::Author),
    ("fecha", TokenKind::Date),
    ("salto_linea", TokenKind::LineBreak),
    ("salto_pagina", TokenKind::PageBreak),
    ("nueva_pagina", TokenKind::NewPage),
];

impl TokenKind {
    /// Look up a word in the keyword table.
    pub fn from_keyword(word: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == word)
            .map(|(_, kind)| *kind)
    }

    /// The keyword spelling for command kinds.
    pub fn keyword(&self) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(keyword, _)| *keyword)
    }

    /// Map a single punctuation character to its kind.
    ///
    /// `"` is not a symbol: it always opens a string literal.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            '[' => Some(TokenKind::LeftBracket),
            ']' => Some(TokenKind::RightBracket),
            ',' => Some(TokenKind::Comma),
            ';' => Some(TokenKind::Semicolon),
            '=' => Some(TokenKind::Equals),
            _ => None,
        }
    }

    /// Check if this kind is one of the keyword commands.
    pub fn is_keyword(&self) -> bool {
        self.keyword().is_some()
    }

    /// Check if this token can stand as an unquoted argument.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Number | TokenKind::BareText
        )
    }

    /// Commands whose argument may be written without quotes.
    pub fn takes_text(&self) -> bool {
        matches!(
            self,
            TokenKind::Item
                | TokenKind::Paragraph
                | TokenKind::Bold
                | TokenKind::Italic
                | TokenKind::Underline
                | TokenKind::Strikethrough
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Equals => "=",
            TokenKind::String => "cadena",
            TokenKind::BareText => "texto",
            TokenKind::Number => "número",
            TokenKind::Identifier => "identificador",
            TokenKind::Eof => "fin de archivo",
            command => command.keyword().unwrap_or("?"),
        };
        write!(f, "{}", name)
    }
}

/// A classified, positioned lexical unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Matched text; for strings, the unescaped contents
    pub text: String,
    /// 1-based line of the token's first character
    pub line: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// Create the end-of-input marker.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4}  {:<16} {:?}", self.line, format!("{:?}", self.kind), self.text)
    }
}
