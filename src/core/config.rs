//! Game configuration: the symbol set and timer delays.
//!
//! The symbol set is fixed per configuration: N unique faces, each dealt
//! twice. An empty or duplicated symbol set is a construction-time bug, so
//! `GameConfig::new` rejects it rather than letting a malformed deck reach
//! play.

use std::time::Duration;

use thiserror::Error;

use super::SymbolId;

/// Configuration validation errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The symbol set was empty.
    #[error("symbol set is empty")]
    EmptySymbols,

    /// The same face name appeared more than once.
    #[error("duplicate symbol name: {0:?}")]
    DuplicateSymbol(String),
}

/// Static configuration for a game: unique faces plus timer delays.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Display names, indexed by `SymbolId`.
    names: Vec<String>,
    evaluate_delay: Duration,
    revert_delay: Duration,
}

impl GameConfig {
    /// Delay between the second card opening and pair evaluation.
    pub const DEFAULT_EVALUATE_DELAY: Duration = Duration::from_millis(300);

    /// Delay a mismatched pair stays face-up before flipping back.
    pub const DEFAULT_REVERT_DELAY: Duration = Duration::from_millis(500);

    /// Create a configuration from unique face names.
    ///
    /// `SymbolId`s are assigned densely in iteration order, so a name's index
    /// is its symbol ID.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ConfigError::EmptySymbols);
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(ConfigError::DuplicateSymbol(name.clone()));
            }
        }

        Ok(Self {
            names,
            evaluate_delay: Self::DEFAULT_EVALUATE_DELAY,
            revert_delay: Self::DEFAULT_REVERT_DELAY,
        })
    }

    /// The reference six-face configuration.
    #[must_use]
    pub fn default_pairs() -> Self {
        // Six faces cannot be empty or collide, so this cannot fail.
        match Self::new(["react", "node", "vue", "tailwind", "html", "css"]) {
            Ok(config) => config,
            Err(_) => unreachable!("default symbol set is valid"),
        }
    }

    /// Override both timer delays (builder pattern).
    #[must_use]
    pub fn with_delays(mut self, evaluate: Duration, revert: Duration) -> Self {
        self.evaluate_delay = evaluate;
        self.revert_delay = revert;
        self
    }

    /// Number of unique symbols (N). The deck holds `2 * pair_count()` cards.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.names.len()
    }

    /// Iterate over all symbol IDs.
    pub fn symbols(&self) -> impl Iterator<Item = SymbolId> + '_ {
        (0..self.names.len()).map(|i| SymbolId::new(i as u16))
    }

    /// Display name for a symbol.
    #[must_use]
    pub fn symbol_name(&self, symbol: SymbolId) -> Option<&str> {
        self.names.get(symbol.raw() as usize).map(String::as_str)
    }

    /// Delay before pair evaluation.
    #[must_use]
    pub fn evaluate_delay(&self) -> Duration {
        self.evaluate_delay
    }

    /// Delay before a mismatched pair flips back.
    #[must_use]
    pub fn revert_delay(&self) -> Duration {
        self.revert_delay
    }
}
