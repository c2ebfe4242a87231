//! The game state machine: round state, cancellable timers, the controller,
//! and render views.

pub mod machine;
pub mod state;
pub mod timer;
pub mod view;

pub use machine::{ClickOutcome, MatchGame, RoundSummary, TimerOutcome};
pub use state::{Phase, RoundState};
pub use timer::{TimerKind, TimerRequest, TimerToken};
pub use view::CardView;
