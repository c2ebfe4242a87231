//! # flipmatch
//!
//! The state machine core for a memory-matching ("flip card") game: a grid of
//! face-down cards is dealt from a small set of unique symbols, each appearing
//! exactly twice. The player reveals two cards per attempt; matched pairs stay
//! revealed, mismatches flip back after a delay, and the game tracks a move
//! count and a persisted best score.
//!
//! ## Design Principles
//!
//! 1. **Core Owns State, Not Time**: all mutable game state lives in one
//!    controller ([`MatchGame`]). The core never sleeps or spawns: deferred
//!    work is expressed as [`TimerRequest`] values handed to the host, which
//!    fires them back with [`MatchGame::fire_timer`].
//!
//! 2. **Stale Callbacks Are No-ops**: every scheduled timer is keyed by a
//!    generation counter and carries a snapshot of the open positions taken
//!    at schedule time. A token that outlives its scheduling (cancelled by a
//!    later click or a restart) is rejected, never applied.
//!
//! 3. **Invalid Input Is Not An Error**: clicks on cleared, open, or disabled
//!    cards are ignored by contract. The only failure surfaces are
//!    construction-time configuration checks and the persistence boundary.
//!
//! ## Modules
//!
//! - `core`: symbol identity, RNG, configuration
//! - `deck`: doubled-and-shuffled deck construction
//! - `game`: round state, cancellable timers, the controller, render views
//! - `persist`: best-score storage behind a narrow trait

pub mod core;
pub mod deck;
pub mod game;
pub mod persist;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, SymbolId};

pub use crate::deck::{Card, Deck};

pub use crate::game::{
    CardView, ClickOutcome, MatchGame, Phase, RoundState, RoundSummary, TimerKind, TimerRequest,
    TimerToken, TimerOutcome,
};

pub use crate::persist::{BestScoreStore, JsonFileStore, MemoryStore, StoreError};
