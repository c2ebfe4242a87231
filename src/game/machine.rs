//! The match-game controller.
//!
//! `MatchGame` owns all mutable game state (the deck, the round, the armed
//! timer, the best score) and applies every transition: card clicks from the
//! presentation layer and timer tokens fired back by the host. Rendering and
//! storage stay behind narrow seams (`card_views`, `BestScoreStore`).

use tracing::{debug, info, warn};

use crate::core::{GameConfig, GameRng, SymbolId};
use crate::deck::Deck;
use crate::persist::BestScoreStore;

use super::state::{Phase, RoundState};
use super::timer::{TimerKind, TimerRequest, TimerSlot, TimerToken};
use super::view::CardView;

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click hit a cleared, open, or out-of-range card, or arrived while
    /// clicks are disabled. Nothing changed.
    Ignored,
    /// The card is now the only open card.
    Opened,
    /// A second card opened; the host should run the evaluation timer.
    PairChosen(TimerRequest),
}

/// What firing a timer token did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerOutcome {
    /// The token was cancelled or superseded before it fired. No-op.
    Stale,
    /// The open pair matched and stays revealed.
    Matched {
        symbol: SymbolId,
        /// Present when this match cleared the final pair.
        completed: Option<RoundSummary>,
    },
    /// The open pair did not match; the host should run the revert timer.
    Mismatched(TimerRequest),
    /// The revert timer flipped a mismatched pair back face-down.
    Reverted,
}

/// Completion notification, emitted once per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundSummary {
    /// Moves taken this round.
    pub moves: u32,
    /// Best score across all completed rounds, this one included.
    pub best_score: u32,
}

/// The game controller and state machine.
pub struct MatchGame<S> {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    round: RoundState,
    timer: TimerSlot,
    best_score: Option<u32>,
    store: S,
}

impl<S: BestScoreStore> MatchGame<S> {
    /// Create a game with a freshly dealt deck.
    ///
    /// The best score is read from `store` once, here. A failing store is
    /// treated as "no best score recorded"; the game stays playable.
    pub fn new(config: GameConfig, store: S, rng: GameRng) -> Self {
        let mut rng = rng;
        let deck = Deck::deal(&config, &mut rng);
        Self::with_deck(config, store, rng, deck)
    }

    /// Create a game over a fixed deck. Used for replays and tests.
    pub fn with_deck(config: GameConfig, store: S, rng: GameRng, deck: Deck) -> Self {
        let best_score = match store.load() {
            Ok(best) => best,
            Err(err) => {
                warn!(%err, "best score unavailable, treating as unset");
                None
            }
        };

        Self {
            config,
            rng,
            deck,
            round: RoundState::new(),
            timer: TimerSlot::default(),
            best_score,
            store,
        }
    }

    /// Handle a card click from the presentation layer.
    ///
    /// Clicks on cleared, already-open, or out-of-range positions, clicks
    /// while disabled, and clicks after completion are ignored by contract.
    pub fn click(&mut self, position: usize) -> ClickOutcome {
        let Some(symbol) = self.deck.symbol_at(position) else {
            return ClickOutcome::Ignored;
        };
        if self.round.phase == Phase::Complete
            || self.round.disabled
            || self.round.is_cleared(symbol)
            || self.round.is_open(position)
        {
            return ClickOutcome::Ignored;
        }

        if self.round.open.len() == 1 {
            self.round.open.push(position);
            self.round.moves += 1;
            self.round.disabled = true;
            self.round.phase = Phase::Evaluating;
            let pair = [self.round.open[0], self.round.open[1]];
            let request = self
                .timer
                .arm(TimerKind::Evaluate, pair, self.config.evaluate_delay());
            debug!(
                first = pair[0],
                second = pair[1],
                moves = self.round.moves,
                "pair chosen, evaluation scheduled"
            );
            ClickOutcome::PairChosen(request)
        } else {
            // Zero open, or a mismatched pair still face-up awaiting revert:
            // the new click overrides the pending revert and starts fresh.
            if self.timer.cancel() {
                debug!("pending timer cancelled by click");
            }
            self.round.open.clear();
            self.round.open.push(position);
            self.round.phase = Phase::Idle;
            debug!(position, "card opened");
            ClickOutcome::Opened
        }
    }

    /// Fire a scheduled timer token back into the machine.
    ///
    /// Tokens invalidated by a later click or restart report
    /// [`TimerOutcome::Stale`] and change nothing.
    pub fn fire_timer(&mut self, token: TimerToken) -> TimerOutcome {
        if !self.timer.accept(token) {
            debug!(?token, "stale timer token ignored");
            return TimerOutcome::Stale;
        }

        match token.kind {
            TimerKind::Evaluate => self.evaluate(token.pair),
            TimerKind::Revert => {
                self.round.open.clear();
                debug!("mismatched pair flipped back");
                TimerOutcome::Reverted
            }
        }
    }

    /// Compare the snapshotted open pair.
    fn evaluate(&mut self, pair: [usize; 2]) -> TimerOutcome {
        self.round.disabled = false;

        let (Some(first), Some(second)) =
            (self.deck.symbol_at(pair[0]), self.deck.symbol_at(pair[1]))
        else {
            // Tokens only carry positions a validated click produced.
            return TimerOutcome::Stale;
        };

        if first == second {
            self.round.cleared.insert(first);
            self.round.open.clear();
            self.round.phase = Phase::Idle;
            debug!(
                symbol = %first,
                cleared = self.round.cleared_count(),
                "pair matched"
            );
            let completed = self.check_completion();
            TimerOutcome::Matched {
                symbol: first,
                completed,
            }
        } else {
            self.round.phase = Phase::Idle;
            let request = self
                .timer
                .arm(TimerKind::Revert, pair, self.config.revert_delay());
            debug!(first = %first, second = %second, "pair mismatched, revert scheduled");
            TimerOutcome::Mismatched(request)
        }
    }

    /// Check for round completion after a cleared-set change.
    fn check_completion(&mut self) -> Option<RoundSummary> {
        if self.round.cleared_count() < self.config.pair_count() {
            return None;
        }

        self.round.phase = Phase::Complete;
        let best = self
            .best_score
            .map_or(self.round.moves, |prev| prev.min(self.round.moves));
        if self.best_score != Some(best) {
            if let Err(err) = self.store.save(best) {
                warn!(%err, "failed to persist best score");
            }
            self.best_score = Some(best);
        }
        info!(moves = self.round.moves, best_score = best, "round complete");

        Some(RoundSummary {
            moves: self.round.moves,
            best_score: best,
        })
    }

    /// Start a new round: fresh deck, zeroed round state, best score kept.
    pub fn restart(&mut self) {
        self.timer.cancel();
        self.round.reset();
        self.deck = Deck::deal(&self.config, &mut self.rng);
        debug!("round restarted");
    }

    /// Render input for every card, in deck order.
    pub fn card_views(&self) -> impl Iterator<Item = CardView<'_>> + '_ {
        self.deck.iter().map(|card| {
            let is_flipped = self.round.is_open(card.position);
            let is_inactive = self.round.is_cleared(card.symbol);
            CardView {
                face: if is_flipped || is_inactive {
                    self.config.symbol_name(card.symbol)
                } else {
                    None
                },
                is_flipped,
                is_inactive,
                is_clickable: !is_flipped
                    && !is_inactive
                    && !self.round.disabled
                    && self.round.phase != Phase::Complete,
            }
        })
    }

    /// The configuration this game was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The current round state.
    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Moves taken this round.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.round.moves()
    }

    /// Best score across completed rounds, if any round ever completed.
    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.phase()
    }
}
