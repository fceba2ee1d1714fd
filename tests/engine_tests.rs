//! Matching engine integration tests.
//!
//! These tests drive full games through the public API and check the
//! selection rules, move counting and win detection.

use concentration::core::{CardState, GameConfig, GameError, Icon, IconSet, Phase};
use concentration::events::GameEventKind;
use concentration::rules::{MatchingEngine, Transition};

const A: Icon = Icon::new(0);
const B: Icon = Icon::new(1);

/// Play the `[A, B, A, B]` scenario through to the win.
#[test]
fn test_abab_scenario() {
    let mut engine = MatchingEngine::from_board(GameConfig::default(), &[A, B, A, B]).unwrap();

    assert_eq!(engine.select_card(0).unwrap(), Transition::Revealed { position: 0, icon: A });

    assert_eq!(engine.select_card(1).unwrap(), Transition::Mismatched { positions: [0, 1] });
    assert_eq!(engine.move_count(), 1);
    assert_eq!(engine.phase(), Phase::Evaluating);

    assert!(engine.resolve_mismatch());
    assert_eq!(engine.card_state(0).unwrap(), CardState::Hidden);
    assert_eq!(engine.card_state(1).unwrap(), CardState::Hidden);

    assert_eq!(engine.select_card(0).unwrap(), Transition::Revealed { position: 0, icon: A });
    assert_eq!(engine.select_card(2).unwrap(), Transition::Matched { positions: [0, 2], icon: A });
    assert_eq!(engine.move_count(), 2);
    assert_eq!(engine.matched_count(), 1);

    assert_eq!(engine.select_card(1).unwrap(), Transition::Revealed { position: 1, icon: B });
    assert_eq!(
        engine.select_card(3).unwrap(),
        Transition::Won { positions: [1, 3], moves: 3 }
    );
    assert_eq!(engine.move_count(), 3);
    assert_eq!(engine.matched_count(), 2);
    assert!(engine.is_won());

    let wins: Vec<_> = engine
        .drain_events()
        .into_iter()
        .filter_map(|e| match e.kind {
            GameEventKind::Won { moves } => Some(moves),
            _ => None,
        })
        .collect();
    assert_eq!(wins, vec![3]);
}

/// A third select while two mismatched cards are pending changes nothing.
#[test]
fn test_third_select_is_noop() {
    let mut engine = MatchingEngine::from_board(GameConfig::default(), &[A, B, A, B]).unwrap();
    engine.select_card(0).unwrap();
    engine.select_card(1).unwrap();
    engine.drain_events();

    let before = engine.state().clone();
    for p in 0..4 {
        assert_eq!(engine.select_card(p).unwrap(), Transition::Ignored);
    }

    assert_eq!(engine.state(), &before);
    assert!(engine.pending_events().is_empty());
}

/// Invalid positions fail even when the selection is full.
#[test]
fn test_invalid_position_always_errors() {
    let mut engine = MatchingEngine::from_board(GameConfig::default(), &[A, B, A, B]).unwrap();
    engine.select_card(0).unwrap();
    engine.select_card(1).unwrap();

    let err = engine.select_card(usize::MAX).unwrap_err();
    assert!(err.is_invalid_position());
}

/// Never more than two cards are revealed, whatever the input.
#[test]
fn test_at_most_two_revealed() {
    let config = GameConfig::default().with_seed(3);
    let mut engine = MatchingEngine::new(config, IconSet::instruments()).unwrap();

    for round in 0..200usize {
        let _ = engine.select_card((round * 7) % 16).unwrap();
        assert!(engine.state().count_in_state(CardState::Revealed) <= 2);
        if round % 3 == 0 {
            engine.resolve_mismatch();
        }
    }
}

/// Same seed, same board.
#[test]
fn test_seeded_boards_repeat() {
    let config = GameConfig::default().with_seed(1234);
    let mut e1 = MatchingEngine::new(config.clone(), IconSet::instruments()).unwrap();
    let mut e2 = MatchingEngine::new(config, IconSet::instruments()).unwrap();

    assert_eq!(e1.state().icon_order(), e2.state().icon_order());

    let next1 = e1.restart().unwrap().icon_order();
    let next2 = e2.restart().unwrap().icon_order();
    assert_eq!(next1, next2);
}

/// Resetting discards the old board, counters and selection.
#[test]
fn test_reset_discards_state() {
    let config = GameConfig::default().with_seed(8);
    let mut engine = MatchingEngine::from_board(config, &[A, B, A, B]).unwrap();
    engine.select_card(0).unwrap();
    engine.select_card(2).unwrap();
    engine.select_card(1).unwrap();

    engine.new_game(IconSet::instruments()).unwrap();

    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.matched_count(), 0);
    assert_eq!(engine.state().len(), 16);
    assert!(engine.state().selection().is_empty());
    assert!(engine.cards().all(|c| c.state == CardState::Hidden));
}

/// Solving a shuffled board by memory wins with the minimum move count.
#[test]
fn test_perfect_play_on_shuffled_board() {
    let config = GameConfig::default().with_seed(99);
    let mut engine = MatchingEngine::new(config, IconSet::numbered(12)).unwrap();
    let order = engine.state().icon_order();

    let mut result = Transition::Ignored;
    for icon in engine.icons().icons().collect::<Vec<_>>() {
        let positions: Vec<usize> = order
            .iter()
            .enumerate()
            .filter(|&(_, &i)| i == icon)
            .map(|(p, _)| p)
            .collect();
        engine.select_card(positions[0]).unwrap();
        result = engine.select_card(positions[1]).unwrap();
    }

    assert!(matches!(result, Transition::Won { moves: 12, .. }));
    assert_eq!(engine.move_count(), 12);
}

/// Bad icon sets are rejected.
#[test]
fn test_bad_icon_sets() {
    let err = MatchingEngine::new(GameConfig::default(), IconSet::new()).err();
    assert!(matches!(err, Some(GameError::EmptyIconSet)));

    let dup = IconSet::new().with_icon(A, "x").with_icon(B, "y").with_icon(A, "z");
    let err = MatchingEngine::new(GameConfig::default(), dup).err();
    assert!(matches!(err, Some(GameError::DuplicateIcon(icon)) if icon == A));

    let err = MatchingEngine::from_board(GameConfig::default(), &[A, B, A]).err();
    assert!(matches!(err, Some(GameError::InvalidBoard(_))));
}

/// A single pair is won in one move.
#[test]
fn test_single_pair() {
    let mut engine = MatchingEngine::new(GameConfig::default(), IconSet::numbered(1)).unwrap();
    assert_eq!(engine.state().len(), 2);

    engine.select_card(0).unwrap();
    assert_eq!(
        engine.select_card(1).unwrap(),
        Transition::Won { positions: [0, 1], moves: 1 }
    );
}
