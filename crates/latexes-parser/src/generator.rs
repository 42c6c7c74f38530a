//! Single-pass parser and LaTeX generator.
//!
//! The [`Generator`] walks the token list once with a forward cursor,
//! dispatching on each command keyword and appending LaTeX to the body.
//! A missing required token aborts generation with
//! [`LatexesError::Syntax`]; tokens that start no command are skipped.

use crate::latex;
use crate::state::GeneratorState;
use latexes_core::{
    DocumentMetadata, HeadingLevel, LatexesError, ListKind, Result, TextStyle, Token, TokenKind,
};
use log::{debug, trace};

/// Output of a successful generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Complete LaTeX document
    pub latex: String,
    /// Metadata collected from `titulo`, `autor` and `fecha`
    pub metadata: DocumentMetadata,
}

/// Generate a LaTeX document from a token list.
pub fn generate(tokens: &[Token]) -> Result<Generated> {
    Generator::new(tokens).run()
}

/// Cursor over a token list plus everything one compile pass accumulates.
#[derive(Debug)]
pub struct Generator<'t> {
    tokens: &'t [Token],
    current: usize,
    state: GeneratorState,
    metadata: DocumentMetadata,
    body: String,
}

impl<'t> Generator<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            state: GeneratorState::new(),
            metadata: DocumentMetadata::default(),
            body: String::new(),
        }
    }

    /// Run the main loop and assemble the final document.
    pub fn run(mut self) -> Result<Generated> {
        while let Some(token) = self.advance() {
            self.dispatch(token)?;
        }

        if self.close_list() {
            debug!("Closed list left open at end of input");
        }
        if !self.state.has_heading {
            debug!("No heading emitted, adding fallback section");
        }

        Ok(Generated {
            latex: latex::assemble(&self.body, self.state.has_heading),
            metadata: self.metadata,
        })
    }

    // =========================================================================
    // Cursor primitives
    // =========================================================================

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    fn is_at_end(&self) -> bool {
        self.peek().map_or(true, Token::is_eof)
    }

    /// Return the current token and move past it; `None` at end of input.
    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek().filter(|t| !t.is_eof())?;
        self.current += 1;
        Some(token)
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().is_some_and(|t| t.kind == kind)
    }

    fn consume(&mut self, kind: TokenKind, message: impl Into<String>) -> Result<&'t Token> {
        if self.check(kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(LatexesError::syntax(self.error_line(), message))
    }

    /// Line of the last consumed token, where the missing token belonged.
    fn error_line(&self) -> usize {
        self.tokens
            .get(self.current.saturating_sub(1))
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    // =========================================================================
    // Argument forms
    // =========================================================================

    /// `;`, optionally preceded by an empty `()`.
    fn empty_args(&mut self, command: &Token) -> Result<()> {
        if self.check(TokenKind::LeftParen) {
            self.advance();
            self.consume(
                TokenKind::RightParen,
                format!("Se esperaba ) después de {}(", command.text),
            )?;
        }
        self.end_command(command)
    }

    /// `( "string" ) ;`
    fn string_arg(&mut self, command: &Token) -> Result<String> {
        self.consume(
            TokenKind::LeftParen,
            format!("Se esperaba ( después de {}", command.text),
        )?;
        let value = self
            .consume(
                TokenKind::String,
                format!("Se esperaba cadena para {}", command.text),
            )?
            .text
            .clone();
        self.consume(
            TokenKind::RightParen,
            format!("Se esperaba ) después del argumento de {}", command.text),
        )?;
        self.end_command(command)?;
        Ok(value)
    }

    /// Argument of items and text commands.
    ///
    /// Accepts `("string")`, `(bare text)`, or a string or bare text directly
    /// before the `;`. Nothing at all before the `;` yields empty text.
    fn text_arg(&mut self, command: &Token) -> Result<String> {
        let text = if self.check(TokenKind::LeftParen) {
            self.advance();
            let text = self.text_value().ok_or_else(|| {
                LatexesError::syntax(
                    self.error_line(),
                    format!("Se esperaba cadena para {}", command.text),
                )
            })?;
            self.consume(
                TokenKind::RightParen,
                format!("Se esperaba ) después del argumento de {}", command.text),
            )?;
            text
        } else {
            self.text_value().unwrap_or_default()
        };
        self.end_command(command)?;
        Ok(text)
    }

    /// A single string or unquoted text token.
    fn text_value(&mut self) -> Option<String> {
        let token = self
            .peek()
            .filter(|t| t.kind == TokenKind::String || t.kind.is_word())?;
        self.advance();
        Some(token.text.clone())
    }

    fn end_command(&mut self, command: &Token) -> Result<()> {
        self.consume(
            TokenKind::Semicolon,
            format!("Se esperaba ; después de {}", command.text),
        )?;
        Ok(())
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn dispatch(&mut self, token: &'t Token) -> Result<()> {
        trace!("Dispatching {:?} at line {}", token.kind, token.line);

        match token.kind {
            TokenKind::DocumentStart => self.empty_args(token)?,
            TokenKind::DocumentEnd => {
                self.empty_args(token)?;
                self.close_list();
            }

            TokenKind::Title => {
                let text = self.string_arg(token)?;
                self.body.push_str(&latex::title(&text));
                self.metadata.title = text;
            }
            TokenKind::Author => {
                let text = self.string_arg(token)?;
                self.body.push_str(&latex::author(&text));
                self.metadata.author = text;
            }
            TokenKind::Date => {
                let text = self.string_arg(token)?;
                self.body.push_str(&latex::date(&text));
                self.metadata.date = text;
            }
            TokenKind::Configure => self.configure(token)?,

            TokenKind::Chapter => self.heading(token, HeadingLevel::Chapter)?,
            TokenKind::Section => self.heading(token, HeadingLevel::Section)?,
            TokenKind::Subsection => self.heading(token, HeadingLevel::Subsection)?,
            TokenKind::Subsubsection => self.heading(token, HeadingLevel::Subsubsection)?,

            TokenKind::Paragraph => self.styled(token, TextStyle::Plain)?,
            TokenKind::Bold => self.styled(token, TextStyle::Bold)?,
            TokenKind::Italic => self.styled(token, TextStyle::Italic)?,
            TokenKind::Underline => self.styled(token, TextStyle::Underline)?,
            TokenKind::Strikethrough => self.styled(token, TextStyle::Strikethrough)?,

            TokenKind::SimpleList => self.begin_list(token, ListKind::Simple)?,
            TokenKind::NumberedList => self.begin_list(token, ListKind::Numbered)?,
            TokenKind::Item => {
                let text = self.text_arg(token)?;
                if self.state.in_list() {
                    self.body.push_str(&latex::item(&text));
                } else {
                    debug!("Ignoring elemento outside a list at line {}", token.line);
                }
            }
            TokenKind::EndList => {
                self.empty_args(token)?;
                if !self.close_list() {
                    debug!("Ignoring fin_lista with no open list at line {}", token.line);
                }
            }

            TokenKind::Equation => {
                let text = self.string_arg(token)?;
                self.body.push_str(&latex::equation(&text));
            }
            TokenKind::Formula => {
                let text = self.string_arg(token)?;
                self.body.push_str(&latex::formula(&text));
            }

            TokenKind::LineBreak => {
                self.empty_args(token)?;
                self.body.push_str(latex::LINE_BREAK);
            }
            TokenKind::PageBreak => {
                self.empty_args(token)?;
                self.body.push_str(latex::PAGE_BREAK);
            }
            TokenKind::NewPage => {
                self.empty_args(token)?;
                self.body.push_str(latex::NEW_PAGE);
            }

            TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Equals
            | TokenKind::String
            | TokenKind::BareText
            | TokenKind::Number
            | TokenKind::Identifier
            | TokenKind::Eof => {
                debug!(
                    "Ignoring {} {:?} at line {}",
                    token.kind, token.text, token.line
                );
            }
        }

        Ok(())
    }

    fn configure(&mut self, command: &Token) -> Result<()> {
        self.consume(
            TokenKind::LeftParen,
            format!("Se esperaba ( después de {}", command.text),
        )?;
        let key = self
            .consume(TokenKind::String, "Se esperaba cadena para la clave")?
            .text
            .as_str();
        self.consume(TokenKind::Comma, "Se esperaba , entre clave y valor")?;
        let value = self
            .consume(TokenKind::String, "Se esperaba cadena para el valor")?
            .text
            .as_str();
        self.consume(
            TokenKind::RightParen,
            format!("Se esperaba ) después de los argumentos de {}", command.text),
        )?;
        self.end_command(command)?;

        match latex::configure(key, value) {
            Some(line) => self.body.push_str(line),
            None => debug!("Ignoring unrecognized configuration {}={}", key, value),
        }
        Ok(())
    }

    fn heading(&mut self, command: &Token, level: HeadingLevel) -> Result<()> {
        self.close_list();
        let text = self.string_arg(command)?;
        self.body.push_str(&latex::heading(level, &text));
        self.state.has_heading = true;
        Ok(())
    }

    fn styled(&mut self, command: &Token, style: TextStyle) -> Result<()> {
        let text = self.text_arg(command)?;
        if self.state.in_list() {
            self.body.push_str(&latex::item(&style.wrap(&text)));
        } else {
            self.body.push_str(&latex::block(style, &text));
        }
        Ok(())
    }

    fn begin_list(&mut self, command: &Token, kind: ListKind) -> Result<()> {
        self.empty_args(command)?;
        if self.close_list() {
            debug!("Closed open list before opening a new one at line {}", command.line);
        }
        self.state.open(kind);
        self.body.push_str(&latex::begin_list(kind));
        Ok(())
    }

    /// Close the open list, if any. Returns whether a list was closed.
    fn close_list(&mut self) -> bool {
        match self.state.close() {
            Some(kind) => {
                self.body.push_str(&latex::end_list(kind));
                true
            }
            None => false,
        }
    }
}
