//! Property-based tests for latexes.
//!
//! These tests use proptest to generate random inputs and programs and
//! verify that the lexer and generator handle them consistently.

use proptest::prelude::*;

use latexes_core::TokenKind;
use latexes_lexer::tokenize;
use latexes_parser::compile;

/// Generate arbitrary printable text, including newlines and tabs.
fn source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[\x20-\x7E\n\t]*"#).unwrap()
}

/// Generate text safe to put inside a quoted argument.
fn argument() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Za-z0-9 áéíóúñ(){}\[\].,=+^_-]{0,24}").unwrap()
}

/// Generate one well-formed statement.
fn statement() -> impl Strategy<Value = String> {
    let with_text = (
        prop::sample::select(vec![
            "titulo",
            "autor",
            "fecha",
            "seccion",
            "subseccion",
            "subsubseccion",
            "capitulo",
            "parrafo",
            "negrita",
            "cursiva",
            "subrayado",
            "tachado",
            "elemento",
            "ecuacion",
            "formula",
        ]),
        argument(),
    )
        .prop_map(|(command, text)| format!("{}(\"{}\");", command, text));
    let without_text = prop::sample::select(vec![
        "documento_inicio();",
        "documento_fin();",
        "lista_simple();",
        "lista_numerada();",
        "fin_lista();",
        "salto_linea();",
        "salto_pagina();",
        "nueva_pagina();",
    ])
    .prop_map(str::to_string);
    prop_oneof![with_text, without_text]
}

/// Generate a well-formed program.
fn program() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(statement(), 0..30)
}

proptest! {
    /// The lexer should never panic and always ends with one Eof.
    #[test]
    fn lexer_never_panics(input in source_string()) {
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    /// The lexer should handle arbitrary unicode input.
    #[test]
    fn lexer_handles_unicode(input in any::<String>()) {
        let tokens = tokenize(&input);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
    }

    /// Compilation always yields exactly one of output or error.
    #[test]
    fn compile_never_panics(input in source_string()) {
        let result = compile(&input);
        prop_assert!(result.output().is_some() != result.error_message().is_some());
    }

    /// Well-formed programs always compile to one document environment.
    #[test]
    fn programs_compile(statements in program()) {
        let result = compile(&statements.join("\n"));
        let output = result.output().unwrap_or_default().to_string();
        prop_assert!(result.is_success());
        prop_assert_eq!(output.matches("\\begin{document}").count(), 1);
        prop_assert!(output.ends_with("\\end{document}"), "output does not end with \\end{{document}}");
    }

    /// Comments and blank lines between statements never change the output.
    #[test]
    fn comments_do_not_change_output(statements in program()) {
        let plain = compile(&statements.join("\n"));
        let commented = statements
            .iter()
            .enumerate()
            .map(|(i, s)| format!("% comentario {}\n\n  {}\t% fin {}\n", i, s, i))
            .collect::<String>();
        let commented = compile(&commented);
        prop_assert_eq!(plain.output(), commented.output());
    }

    /// Items with no open list leave no trace in the output.
    #[test]
    fn stray_items_produce_nothing(texts in prop::collection::vec("[a-z]{1,10}", 1..10)) {
        let source = texts
            .iter()
            .map(|t| format!("elemento(\"{}\");", t))
            .collect::<Vec<_>>()
            .join("\n");
        let result = compile(&source);
        prop_assert!(!result.output().unwrap_or_default().contains("\\item"));
    }

    /// Open lists are always closed, whatever the statement sequence.
    #[test]
    fn lists_are_balanced(statements in program()) {
        let result = compile(&statements.join("\n"));
        let output = result.output().unwrap_or_default();
        prop_assert_eq!(
            output.matches("\\begin{itemize}").count(),
            output.matches("\\end{itemize}").count()
        );
        prop_assert_eq!(
            output.matches("\\begin{enumerate}").count(),
            output.matches("\\end{enumerate}").count()
        );
    }
}
