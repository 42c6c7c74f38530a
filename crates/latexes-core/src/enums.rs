//! Document structure enums.
//!
//! These enums name the structural choices a command makes: which list
//! environment it opens, which sectioning macro it emits, and which text
//! style wraps its argument.

use serde::{Deserialize, Serialize};

/// The kind of list currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// Bulleted list (`lista_simple`)
    Simple,
    /// Numbered list (`lista_numerada`)
    Numbered,
}

impl ListKind {
    /// LaTeX environment name for this list.
    pub fn environment(&self) -> &'static str {
        match self {
            ListKind::Simple => "itemize",
            ListKind::Numbered => "enumerate",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Simple => write!(f, "simple"),
            ListKind::Numbered => write!(f, "numbered"),
        }
    }
}

/// Sectioning level of a heading command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    Chapter,
    Section,
    Subsection,
    Subsubsection,
}

impl HeadingLevel {
    /// LaTeX sectioning macro name, without the backslash.
    pub fn macro_name(&self) -> &'static str {
        match self {
            HeadingLevel::Chapter => "chapter",
            HeadingLevel::Section => "section",
            HeadingLevel::Subsection => "subsection",
            HeadingLevel::Subsubsection => "subsubsection",
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.macro_name())
    }
}

/// Styling applied to a paragraph-like command's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextStyle {
    /// No wrapping (`parrafo`)
    Plain,
    /// `\textbf` (`negrita`)
    Bold,
    /// `\textit` (`cursiva`)
    Italic,
    /// `\underline` (`subrayado`)
    Underline,
    /// `\sout` from ulem (`tachado`)
    Strikethrough,
}

impl TextStyle {
    /// Wrap `text` in this style's macro.
    pub fn wrap(&self, text: &str) -> String {
        match self {
            TextStyle::Plain => text.to_string(),
            TextStyle::Bold => format!("\\textbf{{{}}}", text),
            TextStyle::Italic => format!("\\textit{{{}}}", text),
            TextStyle::Underline => format!("\\underline{{{}}}", text),
            TextStyle::Strikethrough => format!("\\sout{{{}}}", text),
        }
    }
}

impl std::fmt::Display for TextStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextStyle::Plain => write!(f, "plain"),
            TextStyle::Bold => write!(f, "bold"),
            TextStyle::Italic => write!(f, "italic"),
            TextStyle::Underline => write!(f, "underline"),
            TextStyle::Strikethrough => write!(f, "strikethrough"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_kind_environment() {
        assert_eq!(ListKind::Simple.environment(), "itemize");
        assert_eq!(ListKind::Numbered.environment(), "enumerate");
    }

    #[test]
    fn test_list_kind_display() {
        assert_eq!(ListKind::Simple.to_string(), "simple");
        assert_eq!(ListKind::Numbered.to_string(), "numbered");
    }

    #[test]
    fn test_heading_macro_name() {
        assert_eq!(HeadingLevel::Chapter.macro_name(), "chapter");
        assert_eq!(HeadingLevel::Section.macro_name(), "section");
        assert_eq!(HeadingLevel::Subsection.macro_name(), "subsection");
        assert_eq!(HeadingLevel::Subsubsection.macro_name(), "subsubsection");
    }

    #[test]
    fn test_text_style_wrap() {
        assert_eq!(TextStyle::Plain.wrap("x"), "x");
        assert_eq!(TextStyle::Bold.wrap("x"), "\\textbf{x}");
        assert_eq!(TextStyle::Italic.wrap("x"), "\\textit{x}");
        assert_eq!(TextStyle::Underline.wrap("x"), "\\underline{x}");
        assert_eq!(TextStyle::Strikethrough.wrap("x"), "\\sout{x}");
    }

    #[test]
    fn test_wrap_preserves_nested_braces() {
        assert_eq!(TextStyle::Bold.wrap("a{b(c)}"), "\\textbf{a{b(c)}}");
    }
}
