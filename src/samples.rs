//! Built-in sample documents.

/// A named sample source text.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    pub source: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "default",
        description: "Short tour: metadata, sections and a list",
        source: r#"documento_inicio();

titulo("Mi Documento de Ejemplo");
autor("Juan Pérez");
fecha("2024");

seccion("Introducción");
parrafo("Este es un párrafo de ejemplo que demuestra las capacidades del compilador.");

subseccion("Características");
lista_simple();
elemento("Fácil de usar");
elemento("Sintaxis en español");
elemento("Genera código LaTeX válido");
fin_lista();

documento_fin();"#,
    },
    Sample {
        name: "basico",
        description: "Basic structure with sections and paragraphs",
        source: r#"documento_inicio();

titulo("Documento Básico");
autor("Estudiante Ejemplar");
fecha("2024");

seccion("Primera Sección");
parrafo("Este es el primer párrafo de mi documento.");

subseccion("Subsección Ejemplo");
parrafo("Texto en una subsección.");

seccion("Conclusión");
parrafo("Este documento demuestra la estructura básica.");

documento_fin();"#,
    },
    Sample {
        name: "matematicas",
        description: "Numbered equations and inline formulas",
        source: r#"documento_inicio();

titulo("Documento Matemático");
autor("Matemático");

seccion("Ecuaciones Importantes");
parrafo("Algunas ecuaciones famosas:");

ecuacion("E = mc^2");
formula("a^2 + b^2 = c^2");
ecuacion("\sum_{i=1}^{n} i = \frac{n(n+1)}{2}");

parrafo("Fórmula cuadrática:");
formula("x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}");

documento_fin();"#,
    },
    Sample {
        name: "formatos",
        description: "Bold, italic, underline and strikethrough text",
        source: r#"documento_inicio();

titulo("Formatos de Texto");

seccion("Estilos de Texto");
parrafo("Texto normal.");
negrita("Texto en negrita.");
cursiva("Texto en cursiva.");
subrayado("Texto subrayado.");
tachado("Texto tachado.");

documento_fin();"#,
    },
    Sample {
        name: "listas",
        description: "Bulleted and numbered lists",
        source: r#"documento_inicio();

titulo("Ejemplo de Listas");

seccion("Lista Simple");
lista_simple();
elemento("Primer elemento");
elemento("Segundo elemento");
elemento("Tercer elemento");
fin_lista();

seccion("Lista Numerada");
lista_numerada();
elemento("Primer paso");
elemento("Segundo paso");
elemento("Tercer paso");
fin_lista();

documento_fin();"#,
    },
];

/// Look up a sample by name.
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name == name)
}

pub fn names() -> Vec<&'static str> {
    SAMPLES.iter().map(|sample| sample.name).collect()
}
