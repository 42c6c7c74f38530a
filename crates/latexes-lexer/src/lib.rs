//! Latexes Lexer
//!
//! Turns source text of the latexes document language into a flat list of
//! [`Token`]s. The lexer is total: it never fails. Whitespace and `%`
//! comments are skipped, unknown characters are either folded into a
//! bare-text token or dropped, and an unterminated string simply runs to the
//! end of the input.
//!
//! # Example
//!
//! ```
//! use latexes_core::TokenKind;
//! use latexes_lexer::tokenize;
//!
//! let tokens = tokenize("titulo(\"Hola\");");
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Title,
//!         TokenKind::LeftParen,
//!         TokenKind::String,
//!         TokenKind::RightParen,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

use latexes_core::{Token, TokenKind};
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

/// Keywords and identifiers: a letter or underscore, then word characters.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap());

/// Numbers: a digit, then any run of digits and dots. `1.2.3` is one token.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9][0-9.]*").unwrap());

/// Tokenize a complete source text.
///
/// The returned list always ends with exactly one [`TokenKind::Eof`].
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

/// Single-use lexer over one source text.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset of the next unread character
    pos: usize,
    /// 1-based current line
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Consume the lexer and produce the token list.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' => self.pos += 1,
                '%' => self.skip_comment(),
                '\n' => {
                    self.line += 1;
                    self.pos += 1;
                }
                c if c.is_ascii_alphabetic() || c == '_' => self.lex_word(),
                c if c.is_ascii_digit() => self.lex_number(),
                '"' => self.lex_string(),
                c => {
                    if let Some(kind) = TokenKind::from_symbol(c) {
                        self.push(kind, c.to_string(), self.line);
                        self.pos += 1;
                    } else if !c.is_whitespace() {
                        self.lex_bare_text();
                    } else {
                        self.pos += c.len_utf8();
                    }
                }
            }
        }

        self.tokens.push(Token::eof(self.line));
        debug!("Tokenized input into {} tokens", self.tokens.len());
        self.tokens
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn push(&mut self, kind: TokenKind, text: String, line: usize) {
        trace!("Token {:?} {:?} at line {}", kind, text, line);
        self.tokens.push(Token::new(kind, text, line));
    }

    /// Skip from `%` up to, not including, the next newline.
    fn skip_comment(&mut self) {
        let rest = self.rest();
        self.pos += rest.find('\n').unwrap_or(rest.len());
    }

    fn lex_word(&mut self) {
        let Some(m) = WORD_RE.find(self.rest()) else {
            self.pos += 1;
            return;
        };
        let word = m.as_str();
        let kind = TokenKind::from_keyword(word).unwrap_or(TokenKind::Identifier);
        self.pos += word.len();
        self.push(kind, word.to_string(), self.line);
        if kind.takes_text() {
            self.lex_text_argument();
        }
    }

    fn lex_number(&mut self) {
        let Some(m) = NUMBER_RE.find(self.rest()) else {
            self.pos += 1;
            return;
        };
        let number = m.as_str();
        self.pos += number.len();
        self.push(TokenKind::Number, number.to_string(), self.line);
    }

    /// Lex a double-quoted string starting at the opening quote.
    ///
    /// Recognized escapes are `\n`, `\t`, `\"` and `\\`; any other `\x` is
    /// kept as the two characters `\x`. Without a closing quote the string
    /// takes the rest of the input.
    fn lex_string(&mut self) {
        let line = self.line;
        self.pos += 1;
        let rest = self.rest();

        let mut value = String::new();
        let mut consumed = rest.len();
        let mut chars = rest.char_indices();

        while let Some((i, c)) = chars.next() {
            match c {
                '"' => {
                    consumed = i + 1;
                    break;
                }
                '\\' => match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, '"')) => value.push('"'),
                    Some((_, '\\')) => value.push('\\'),
                    Some((_, other)) => {
                        if other == '\n' {
                            self.line += 1;
                        }
                        value.push('\\');
                        value.push(other);
                    }
                    None => {}
                },
                '\n' => {
                    self.line += 1;
                    value.push(c);
                }
                _ => value.push(c),
            }
        }

        self.pos += consumed;
        self.push(TokenKind::String, value, line);
    }

    fn skip_blanks(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start_matches([' ', '\t']).len();
    }

    /// Read the unquoted argument of a text command verbatim.
    ///
    /// Text after the keyword, or after its `(`, runs up to `;`, a newline,
    /// or the `)` matching that `(`, and becomes one bare-text token.
    /// Quoted and empty arguments are left to the regular rules.
    fn lex_text_argument(&mut self) {
        self.skip_blanks();
        let parenthesised = self.peek() == Some('(');
        if parenthesised {
            self.push(TokenKind::LeftParen, "(".to_string(), self.line);
            self.pos += 1;
            self.skip_blanks();
        }

        match self.peek() {
            None | Some('"' | ';' | '\n' | '%') => return,
            Some(')') if parenthesised => return,
            _ => {}
        }

        let rest = self.rest();
        let mut depth = 0usize;
        let mut end = rest.len();
        for (i, c) in rest.char_indices() {
            match c {
                ';' | '\n' => {
                    end = i;
                    break;
                }
                '(' if parenthesised => depth += 1,
                ')' if parenthesised => {
                    if depth == 0 {
                        end = i;
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }

        let text = rest[..end].trim();
        self.pos += end;
        if !text.is_empty() {
            self.push(TokenKind::BareText, text.to_string(), self.line);
        }
    }

    /// Lex unquoted text up to the next `;` or newline, trimmed.
    fn lex_bare_text(&mut self) {
        let rest = self.rest();
        let end = rest.find([';', '\n']).unwrap_or(rest.len());
        let text = rest[..end].trim();
        self.pos += end;
        if !text.is_empty() {
            self.push(TokenKind::BareText, text.to_string(), self.line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens, vec![Token::eof(1)]);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("documento_inicio seccion fin_lista nueva_pagina"),
            vec![
                TokenKind::DocumentStart,
                TokenKind::Section,
                TokenKind::EndList,
                TokenKind::NewPage,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_keeps_text() {
        let tokens = tokenize("subsubseccion");
        assert_eq!(tokens[0].text, "subsubseccion");
    }

    #[test]
    fn test_identifier() {
        let tokens = tokenize("Seccion _x1");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "Seccion");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "_x1");
    }

    #[test]
    fn test_symbols() {
        assert_eq!(
            kinds("(){}[],;="),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Equals,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_malformed_number_is_one_token() {
        let tokens = tokenize("1.2.3");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "1.2.3");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_string_escapes() {
        let tokens = tokenize(r#""a\nb\tc\"d\\e\qf""#);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "a\nb\tc\"d\\e\\qf");
    }

    #[test]
    fn test_latex_backslashes_pass_through() {
        let tokens = tokenize(r#""\frac{1}{2} \sum""#);
        assert_eq!(tokens[0].text, r"\frac{1}{2} \sum");
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = tokenize("titulo(\"sin cierre); fin");
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].text, "sin cierre); fin");
        assert_eq!(tokens[3].kind, TokenKind::Eof);
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_trailing_backslash_in_unterminated_string() {
        let tokens = tokenize("\"abc\\");
        assert_eq!(tokens[0].text, "abc");
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("% comentario\nseccion % otro ; ( )\n;"),
            vec![TokenKind::Section, TokenKind::Semicolon, TokenKind::Eof]
        );
    }

    #[test]
    fn test_percent_inside_string_is_kept() {
        let tokens = tokenize("\"50% listo\"");
        assert_eq!(tokens[0].text, "50% listo");
    }

    #[test]
    fn test_bare_text() {
        let tokens = tokenize("elemento ¡Hola mundo!  ;");
        assert_eq!(tokens[0].kind, TokenKind::Item);
        assert_eq!(tokens[1].kind, TokenKind::BareText);
        assert_eq!(tokens[1].text, "¡Hola mundo!");
        assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_bare_text_stops_at_newline() {
        let tokens = tokenize("¿qué?\nseccion");
        assert_eq!(tokens[0].kind, TokenKind::BareText);
        assert_eq!(tokens[0].text, "¿qué?");
        assert_eq!(tokens[1].kind, TokenKind::Section);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_word_priority_over_bare_text() {
        // Outside a text command's argument, letters start an identifier.
        assert_eq!(
            kinds("seccion(Primer elemento);"),
            vec![
                TokenKind::Section,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::Item,
                TokenKind::RightParen,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_text_argument_in_parens_is_bare_text() {
        let tokens = tokenize("elemento(Primer elemento);");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Item,
                TokenKind::LeftParen,
                TokenKind::BareText,
                TokenKind::RightParen,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[2].text, "Primer elemento");
    }

    #[test]
    fn test_text_argument_is_verbatim() {
        let cases = [
            ("elemento Hola-mundo;", "Hola-mundo"),
            ("elemento(2x);", "2x"),
            ("elemento Hola, mundo;", "Hola, mundo"),
            ("elemento(Paso 1: mezclar);", "Paso 1: mezclar"),
            ("parrafo( f(x) = y  );", "f(x) = y"),
            ("negrita \tmuy fuerte ;", "muy fuerte"),
        ];
        for (source, expected) in cases {
            let tokens = tokenize(source);
            let bare: Vec<&str> = tokens
                .iter()
                .filter(|t| t.kind == TokenKind::BareText)
                .map(|t| t.text.as_str())
                .collect();
            assert_eq!(bare, vec![expected], "source: {source:?}");
        }
    }

    #[test]
    fn test_text_argument_stops_at_newline() {
        assert_eq!(
            kinds("elemento\nfin_lista;"),
            vec![
                TokenKind::Item,
                TokenKind::EndList,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_quoted_and_empty_text_arguments_unchanged() {
        assert_eq!(
            kinds("parrafo(\"a b\"); parrafo(); parrafo;"),
            vec![
                TokenKind::Paragraph,
                TokenKind::LeftParen,
                TokenKind::String,
                TokenKind::RightParen,
                TokenKind::Semicolon,
                TokenKind::Paragraph,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Semicolon,
                TokenKind::Paragraph,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_other_whitespace_is_skipped() {
        assert_eq!(
            kinds("seccion\r\n;\u{00A0};"),
            vec![
                TokenKind::Section,
                TokenKind::Semicolon,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("titulo\n\nautor\n  fecha");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 3);
        assert_eq!(tokens[2].line, 4);
        assert_eq!(tokens[3].line, 4);
    }

    #[test]
    fn test_multiline_string_advances_line() {
        let tokens = tokenize("\"a\nb\"\nseccion");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn test_single_eof() {
        let tokens = tokenize("seccion(\"x\");\n");
        let eofs = tokens.iter().filter(|t| t.is_eof()).count();
        assert_eq!(eofs, 1);
        assert!(tokens.last().is_some_and(Token::is_eof));
    }
}
