//! Per-round mutable state.
//!
//! Everything here resets on restart. The persisted best score deliberately
//! lives outside `RoundState`, in the controller.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::SymbolId;

/// Where the round currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Zero or one open card; clicks accepted.
    Idle,
    /// Two open cards awaiting the evaluation timer; clicks ignored.
    Evaluating,
    /// All pairs cleared.
    Complete,
}

/// The mutable state of one round.
#[derive(Clone, Debug)]
pub struct RoundState {
    /// Face-up, unresolved positions. Never more than two.
    pub(crate) open: SmallVec<[usize; 2]>,
    /// Symbols whose pair has been matched. Grows monotonically in a round.
    pub(crate) cleared: FxHashSet<SymbolId>,
    /// Completed two-card attempts.
    pub(crate) moves: u32,
    /// Click gate while a pair awaits evaluation.
    pub(crate) disabled: bool,
    pub(crate) phase: Phase,
}

impl RoundState {
    pub(crate) fn new() -> Self {
        Self {
            open: SmallVec::new(),
            cleared: FxHashSet::default(),
            moves: 0,
            disabled: false,
            phase: Phase::Idle,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.open.clear();
        self.cleared.clear();
        self.moves = 0;
        self.disabled = false;
        self.phase = Phase::Idle;
    }

    /// Currently open positions, in click order.
    #[must_use]
    pub fn open_positions(&self) -> &[usize] {
        &self.open
    }

    /// Check if a position is face-up and unresolved.
    #[must_use]
    pub fn is_open(&self, position: usize) -> bool {
        self.open.contains(&position)
    }

    /// Check if a symbol's pair has been matched.
    #[must_use]
    pub fn is_cleared(&self, symbol: SymbolId) -> bool {
        self.cleared.contains(&symbol)
    }

    /// Number of matched pairs.
    #[must_use]
    pub fn cleared_count(&self) -> usize {
        self.cleared.len()
    }

    /// Completed two-card attempts this round.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// True while a chosen pair awaits evaluation.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}
