//! Deck construction.
//!
//! A deck is the doubled symbol set in a uniformly random order: each of the
//! N configured symbols appears exactly twice, giving 2N positional cards.
//! Cards are immutable once dealt; identity is by position, not by value.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, SymbolId};

/// A positional slot in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The face this card shows when revealed.
    pub symbol: SymbolId,
    /// Index into the deck. Fixed for the card's lifetime.
    pub position: usize,
}

/// The full shuffled card sequence for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal a fresh deck: the configured symbols doubled, then shuffled with
    /// an in-place Fisher–Yates pass (unbiased permutation).
    #[must_use]
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut symbols: Vec<SymbolId> = config.symbols().collect();
        symbols.extend(config.symbols());

        for i in (1..=symbols.len()).rev() {
            let r = rng.gen_range_usize(0..i);
            symbols.swap(i - 1, r);
        }

        Self::from_symbols(symbols)
    }

    /// Build a deck with a fixed symbol order. Used for replays and tests;
    /// normal play goes through [`Deck::deal`].
    #[must_use]
    pub fn from_symbols(symbols: Vec<SymbolId>) -> Self {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| Card { symbol, position })
            .collect();
        Self { cards }
    }

    /// Number of cards (2N).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the card at a position.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Get the symbol at a position.
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> Option<SymbolId> {
        self.cards.get(position).map(|card| card.symbol)
    }

    /// Iterate over all cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
