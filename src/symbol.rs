use std::fmt;

/// A single code-matrix value.
///
/// Symbols are opaque to the search: only equality matters. They render as
/// the two-digit uppercase hex codes the puzzle is played with (`1C`, `55`,
/// `BD`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol(pub u8);

impl From<u8> for Symbol {
    fn from(code: u8) -> Self {
        Symbol(code)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}
