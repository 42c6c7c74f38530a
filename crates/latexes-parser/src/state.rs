//! Generator state for a single compile pass.

use latexes_core::ListKind;

/// Context carried across commands while generating.
///
/// At most one list is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorState {
    open_list: Option<ListKind>,
    /// Whether any sectioning macro has been emitted
    pub has_heading: bool,
}

impl GeneratorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a list is currently open.
    pub fn in_list(&self) -> bool {
        self.open_list.is_some()
    }

    /// Kind of the open list, if any.
    pub fn open_list(&self) -> Option<ListKind> {
        self.open_list
    }

    /// Open a list of `kind`, returning the list it replaces if one was open.
    pub fn open(&mut self, kind: ListKind) -> Option<ListKind> {
        self.open_list.replace(kind)
    }

    /// Close the open list, returning its kind.
    pub fn close(&mut self) -> Option<ListKind> {
        self.open_list.take()
    }
}
