//! The aggregate module combining all component snippets.

use std::fmt;

use crate::component::ComponentSnippet;

/// Name of the exported collection constant.
pub const COLLECTION_NAME: &str = "paths";

/// The final combined listing of component snippet bodies.
///
/// Each body is re-wrapped in a generic `<>…</>` grouping wrapper; the
/// bodies are comma-separated inside one exported array constant, in the
/// order the snippets were added.
#[derive(Debug, Clone, Default)]
pub struct AggregateModule {
    snippets: Vec<ComponentSnippet>,
}

impl AggregateModule {
    /// Create a module listing `snippets` in order.
    pub fn new(snippets: Vec<ComponentSnippet>) -> Self {
        Self { snippets }
    }

    /// The snippets in listing order.
    pub fn snippets(&self) -> &[ComponentSnippet] {
        &self.snippets
    }

    /// Number of snippet bodies in the module.
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Returns `true` if the module lists no snippets.
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl fmt::Display for AggregateModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "import React from \"react\";")?;
        writeln!(f)?;
        writeln!(f, "export const {COLLECTION_NAME} = [")?;

        for (index, snippet) in self.snippets.iter().enumerate() {
            writeln!(f, "  (")?;
            writeln!(f, "    <>")?;
            snippet.write_shapes(f, "      ")?;
            writeln!(f, "    </>")?;
            if index + 1 < self.snippets.len() {
                writeln!(f, "  ),")?;
            } else {
                writeln!(f, "  )")?;
            }
        }

        writeln!(f, "];")
    }
}
