//! Cancellable single-shot timers.
//!
//! The core owns no clock. When a transition needs deferred work it arms the
//! timer slot and hands the host a [`TimerRequest`]; the host waits out the
//! delay and fires the token back through `MatchGame::fire_timer`.
//!
//! Every arm or cancel bumps a generation counter, and the token carries the
//! generation it was armed under plus a snapshot of the open pair taken at
//! schedule time. A token whose generation no longer matches the slot is
//! stale and must not be applied.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What a scheduled timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Compare the two open cards.
    Evaluate,
    /// Flip a mismatched pair back face-down.
    Revert,
}

/// One scheduled firing.
///
/// `pair` is the open positions at schedule time. Firing logic reads the pair
/// from the token, never from current state, so a transition between
/// scheduling and firing cannot be observed mid-read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
    pub pair: [usize; 2],
}

/// A timer the host should run: fire `token` after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay: Duration,
}

/// The single armed-timer slot.
///
/// At most one timer is live at a time: the machine never has an evaluation
/// and a revert pending together, so arming replaces whatever was armed.
#[derive(Clone, Debug, Default)]
pub(crate) struct TimerSlot {
    generation: u64,
    armed: Option<TimerToken>,
}

impl TimerSlot {
    /// Arm a fresh timer, invalidating any previously issued token.
    pub fn arm(&mut self, kind: TimerKind, pair: [usize; 2], delay: Duration) -> TimerRequest {
        self.generation += 1;
        let token = TimerToken {
            kind,
            generation: self.generation,
            pair,
        };
        self.armed = Some(token);
        TimerRequest { token, delay }
    }

    /// Cancel the armed timer, if any. Returns true if one was live.
    ///
    /// Bumps the generation either way so an in-flight token can never match
    /// a later arming.
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        self.armed.take().is_some()
    }

    /// Consume the armed token if `token` matches it exactly.
    ///
    /// Stale tokens (cancelled, superseded, or already fired) return false.
    pub fn accept(&mut self, token: TimerToken) -> bool {
        match self.armed {
            Some(armed) if armed == token => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    /// The currently armed token, if any.
    #[cfg(test)]
    pub fn armed(&self) -> Option<TimerToken> {
        self.armed
    }
}
