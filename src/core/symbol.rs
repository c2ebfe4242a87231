//! Symbol identity.
//!
//! A `SymbolId` names one of the N unique card faces in a round. Two cards
//! share a symbol (a "pair"); matching is equality on `SymbolId`, never on
//! display names or positions.

use serde::{Deserialize, Serialize};

/// Identifier for a card face. Assigned densely from 0 by `GameConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}
