//! Core types: symbol identity, RNG, configuration.
//!
//! Everything here is presentation-agnostic. The renderer learns symbol names
//! through `GameConfig`; the core itself only compares `SymbolId`s.

pub mod config;
pub mod rng;
pub mod symbol;

pub use config::{ConfigError, GameConfig};
pub use rng::GameRng;
pub use symbol::SymbolId;
