//! Full-game integration tests: clicks, timed evaluation, completion, the
//! best-score lifecycle, and the machine invariants under arbitrary event
//! sequences.

use flipmatch::{
    BestScoreStore, ClickOutcome, Deck, GameConfig, GameRng, JsonFileStore, MatchGame, MemoryStore,
    Phase, RoundSummary, StoreError, SymbolId, TimerOutcome, TimerToken,
};
use proptest::prelude::*;

/// Fixed deck [A, B, A, C, B, C, D, E, D, F, E, F] over the six default faces.
fn fixed_deck() -> Deck {
    Deck::from_symbols(
        [0u16, 1, 0, 2, 1, 2, 3, 4, 3, 5, 4, 5]
            .into_iter()
            .map(SymbolId::new)
            .collect(),
    )
}

fn fixed_game<S: BestScoreStore>(store: S) -> MatchGame<S> {
    MatchGame::with_deck(
        GameConfig::default_pairs(),
        store,
        GameRng::new(42),
        fixed_deck(),
    )
}

fn pair_token<S: BestScoreStore>(game: &mut MatchGame<S>, first: usize, second: usize) -> TimerToken {
    assert_eq!(game.click(first), ClickOutcome::Opened);
    match game.click(second) {
        ClickOutcome::PairChosen(request) => request.token,
        other => panic!("expected PairChosen, got {other:?}"),
    }
}

/// Clear all six pairs of the fixed deck, 6 moves.
fn clear_fixed_deck<S: BestScoreStore>(game: &mut MatchGame<S>) -> Option<RoundSummary> {
    let mut last = None;
    for (a, b) in [(0, 2), (1, 4), (3, 5), (6, 8), (7, 10), (9, 11)] {
        let token = pair_token(game, a, b);
        match game.fire_timer(token) {
            TimerOutcome::Matched { completed, .. } => last = completed,
            other => panic!("expected Matched, got {other:?}"),
        }
    }
    last
}

// =============================================================================
// Round flow
// =============================================================================

#[test]
fn test_mismatch_then_match_scenario() {
    let mut game = fixed_game(MemoryStore::default());

    // Click(0), Click(1): A vs B, one move, evaluation pending.
    let eval = pair_token(&mut game, 0, 1);
    assert_eq!(game.moves(), 1);
    assert_eq!(game.phase(), Phase::Evaluating);

    // Mismatch re-enables immediately and schedules the revert.
    let revert = match game.fire_timer(eval) {
        TimerOutcome::Mismatched(request) => request.token,
        other => panic!("expected Mismatched, got {other:?}"),
    };
    assert!(!game.round().is_disabled());
    assert_eq!(game.fire_timer(revert), TimerOutcome::Reverted);
    assert!(game.round().open_positions().is_empty());

    // Click(0), Click(2): A vs A.
    let eval = pair_token(&mut game, 0, 2);
    assert!(matches!(game.fire_timer(eval), TimerOutcome::Matched { .. }));

    assert_eq!(game.moves(), 2);
    assert_eq!(game.round().cleared_count(), 1);
    assert!(game.round().is_cleared(SymbolId::new(0)));
    assert!(game.round().open_positions().is_empty());
}

#[test]
fn test_invalid_clicks_change_nothing() {
    let mut game = fixed_game(MemoryStore::default());

    let token = pair_token(&mut game, 0, 2);
    game.fire_timer(token);

    // Cleared card, open card, out-of-range: all no-ops.
    game.click(4);
    for position in [0, 2, 4, 50] {
        assert_eq!(game.click(position), ClickOutcome::Ignored);
    }
    assert_eq!(game.moves(), 1);
    assert_eq!(game.round().cleared_count(), 1);
    assert_eq!(game.round().open_positions(), &[4]);
}

#[test]
fn test_completion_summary_and_restart() {
    let mut game = fixed_game(MemoryStore::default());

    let summary = clear_fixed_deck(&mut game).expect("final match completes the round");
    assert_eq!(
        summary,
        RoundSummary {
            moves: 6,
            best_score: 6
        }
    );
    assert_eq!(game.phase(), Phase::Complete);

    game.restart();

    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.round().cleared_count(), 0);
    assert!(game.round().open_positions().is_empty());
    assert!(!game.round().is_disabled());
    assert_eq!(game.best_score(), Some(6));
    assert_eq!(game.deck().len(), 12);
}

// =============================================================================
// Best-score lifecycle
// =============================================================================

#[test]
fn test_prior_best_score_is_loaded_and_kept() {
    let mut game = fixed_game(MemoryStore::with_best(4));
    assert_eq!(game.best_score(), Some(4));

    // Six moves does not beat a recorded four.
    let summary = clear_fixed_deck(&mut game).unwrap();
    assert_eq!(
        summary,
        RoundSummary {
            moves: 6,
            best_score: 4
        }
    );
    assert_eq!(game.best_score(), Some(4));
}

#[test]
fn test_best_score_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best_score.json");

    {
        let mut game = fixed_game(JsonFileStore::new(&path));
        assert_eq!(game.best_score(), None);
        clear_fixed_deck(&mut game);
    }

    // "Next process": the score comes back from disk.
    let game = fixed_game(JsonFileStore::new(&path));
    assert_eq!(game.best_score(), Some(6));
}

/// A store that always fails.
struct BrokenStore;

impl BestScoreStore for BrokenStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "storage offline",
        )))
    }

    fn save(&mut self, _best: u32) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "storage offline",
        )))
    }
}

#[test]
fn test_game_playable_without_storage() {
    let mut game = fixed_game(BrokenStore);
    assert_eq!(game.best_score(), None);

    let summary = clear_fixed_deck(&mut game).unwrap();

    // The save failed, but the in-memory best still updated.
    assert_eq!(
        summary,
        RoundSummary {
            moves: 6,
            best_score: 6
        }
    );
    assert_eq!(game.best_score(), Some(6));
}

// =============================================================================
// Invariants under arbitrary event sequences
// =============================================================================

#[derive(Clone, Debug)]
enum Event {
    Click(usize),
    /// Fire the n-th token ever issued, if it exists. Stale tokens must be
    /// rejected, so replays and out-of-order firings are legal inputs.
    Fire(usize),
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0usize..14).prop_map(Event::Click),
        (0usize..40).prop_map(Event::Fire),
    ]
}

proptest! {
    #[test]
    fn machine_invariants_hold(events in proptest::collection::vec(event_strategy(), 0..120)) {
        let mut game = fixed_game(MemoryStore::default());
        let mut issued: Vec<TimerToken> = Vec::new();
        let mut max_moves = 0u32;
        let mut max_cleared = 0usize;

        for event in events {
            match event {
                Event::Click(position) => {
                    if let ClickOutcome::PairChosen(request) = game.click(position) {
                        issued.push(request.token);
                    }
                }
                Event::Fire(index) => {
                    if let Some(&token) = issued.get(index) {
                        if let TimerOutcome::Mismatched(request) = game.fire_timer(token) {
                            issued.push(request.token);
                        }
                    }
                }
            }

            // OpenSet never exceeds two members.
            prop_assert!(game.round().open_positions().len() <= 2);
            // Disabled only ever gates a chosen pair.
            if game.round().is_disabled() {
                prop_assert_eq!(game.round().open_positions().len(), 2);
            }
            // Moves and cleared pairs grow monotonically within the round.
            prop_assert!(game.moves() >= max_moves);
            prop_assert!(game.round().cleared_count() >= max_cleared);
            max_moves = game.moves();
            max_cleared = game.round().cleared_count();
            // A cleared card is never open.
            for &position in game.round().open_positions() {
                let symbol = game.deck().symbol_at(position).unwrap();
                prop_assert!(!game.round().is_cleared(symbol));
            }
        }
    }
}
