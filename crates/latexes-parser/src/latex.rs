//! LaTeX text emitted by the generator.
//!
//! Every string the generator writes comes from here, so the exact layout
//! of the output (macro spelling, blank lines, indentation) lives in one
//! place.

use latexes_core::{HeadingLevel, ListKind, TextStyle};

/// Fixed header written before the document body.
pub const PREAMBLE: &str = "\\documentclass{article}\n\
                            \\usepackage[utf8]{inputenc}\n\
                            \\usepackage[spanish]{babel}\n\
                            \\usepackage{amsmath}\n\
                            \\usepackage{amssymb}\n\
                            \\usepackage{ulem}\n\n";

/// Heading inserted when the body has no sectioning macro.
pub const FALLBACK_HEADING: &str = "\\section{Contenido}\n\n";

pub const LINE_BREAK: &str = "\\\\\n";
pub const PAGE_BREAK: &str = "\\pagebreak\n";
pub const NEW_PAGE: &str = "\\newpage\n";

pub fn title(text: &str) -> String {
    format!("\\title{{{}}}\n", text)
}

pub fn author(text: &str) -> String {
    format!("\\author{{{}}}\n", text)
}

pub fn date(text: &str) -> String {
    format!("\\date{{{}}}\n", text)
}

/// Package line for a recognized `configurar(clave, valor)` pair.
pub fn configure(key: &str, value: &str) -> Option<&'static str> {
    match (key, value) {
        ("idioma", "espanol") => Some("\\usepackage[spanish]{babel}\n"),
        ("codificacion", "UTF-8") => Some("\\usepackage[utf8]{inputenc}\n"),
        _ => None,
    }
}

pub fn heading(level: HeadingLevel, text: &str) -> String {
    format!("\\{}{{{}}}\n\n", level.macro_name(), text)
}

pub fn begin_list(kind: ListKind) -> String {
    format!("\\begin{{{}}}\n", kind.environment())
}

pub fn end_list(kind: ListKind) -> String {
    format!("\\end{{{}}}\n\n", kind.environment())
}

pub fn item(text: &str) -> String {
    format!("  \\item {}\n", text)
}

/// Styled text outside a list: its own block followed by a blank line.
pub fn block(style: TextStyle, text: &str) -> String {
    format!("{}\n\n", style.wrap(text))
}

pub fn equation(text: &str) -> String {
    format!("\\begin{{equation}}\n{}\n\\end{{equation}}\n\n", text)
}

pub fn formula(text: &str) -> String {
    format!("${}$\n\n", text)
}

/// Assemble the final document around the generated body.
///
/// The body follows the preamble directly; the document environment with
/// `\maketitle` is appended after it.
pub fn assemble(body: &str, has_heading: bool) -> String {
    let mut out = String::with_capacity(PREAMBLE.len() + body.len() + 64);
    out.push_str(PREAMBLE);
    out.push_str(body);
    out.push_str("\\begin{document}\n");
    out.push_str("\\maketitle\n\n");
    if !has_heading {
        out.push_str(FALLBACK_HEADING);
    }
    out.push_str("\\end{document}");
    out
}
