//! Session integration tests.
//!
//! These tests drive a `GameSession` with an explicit clock and check that
//! delayed tasks respect game generations.

use concentration::core::{CardState, GameConfig, Icon, IconSet};
use concentration::render::{render_board, render_notice, IconAssets, TextRenderer};
use concentration::rules::Transition;
use concentration::session::{GameSession, Notice, Task};

const A: Icon = Icon::new(0);
const B: Icon = Icon::new(1);

/// Route engine logs to the test harness. Set `RUST_LOG=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The `[A, B, A, B]` scenario with the default 1000 ms / 500 ms pacing.
#[test]
fn test_paced_scenario() {
    init_tracing();
    let mut s = GameSession::from_board(GameConfig::default(), &[A, B, A, B]).unwrap();

    s.select(0, 0).unwrap();
    assert_eq!(s.select(1, 200).unwrap(), Transition::Mismatched { positions: [0, 1] });

    // Clicks during the revert delay are ignored
    assert_eq!(s.select(2, 500).unwrap(), Transition::Ignored);
    assert_eq!(s.advance(1200), vec![Notice::MismatchReverted { positions: [0, 1] }]);

    s.select(0, 1300).unwrap();
    s.select(2, 1400).unwrap();
    s.select(1, 1500).unwrap();
    assert_eq!(
        s.select(3, 1600).unwrap(),
        Transition::Won { positions: [1, 3], moves: 3 }
    );

    assert!(s.advance(2099).is_empty());
    assert_eq!(s.advance(2100), vec![Notice::WinAnnounced { moves: 3 }]);
}

/// A reset before the revert fires leaves the new board untouched.
#[test]
fn test_reset_before_revert() {
    init_tracing();
    let config = GameConfig::default().with_seed(5);
    let mut s = GameSession::new(config, IconSet::instruments()).unwrap();

    let order = s.state().icon_order();
    let (first, second) = mismatched_pair(&order);
    s.select(first, 0).unwrap();
    s.select(second, 0).unwrap();
    assert_eq!(s.scheduler().pending()[0].task, Task::ResolveMismatch);

    s.reset().unwrap();
    let order = s.state().icon_order();
    let (first, second) = mismatched_pair(&order);
    s.select(first, 10).unwrap();
    s.select(second, 10).unwrap();

    // Only the new game's task remains
    assert_eq!(s.scheduler().len(), 1);
    assert!(s.advance(1009).is_empty());
    assert_eq!(s.engine().card_state(first).unwrap(), CardState::Revealed);
    assert_eq!(s.advance(1010).len(), 1);
}

/// A win in one game is not announced after switching to another.
#[test]
fn test_new_game_cancels_win_announcement() {
    let mut s = GameSession::from_board(GameConfig::default(), &[A, A]).unwrap();
    s.select(0, 0).unwrap();
    s.select(1, 0).unwrap();

    s.new_game(IconSet::numbered(2)).unwrap();
    assert!(s.advance(10_000).is_empty());
}

/// Text rendering follows the board through a session.
#[test]
fn test_text_rendering_through_session() {
    let mut s = GameSession::from_board(GameConfig::default().instant(), &[A, B, A, B]).unwrap();
    let assets = IconAssets::new();

    s.select(0, 0).unwrap();
    s.select(1, 0).unwrap();

    let mut out = TextRenderer::new(4);
    render_board(s.engine(), &assets, &mut out);
    assert_eq!(out.output(), "0 1 ★ ★\nMoves: 1");

    for notice in s.advance(0) {
        render_notice(&notice, s.engine(), &assets, &mut out);
    }
    assert_eq!(out.output(), "★ ★ ★ ★\nMoves: 1");
}

/// Positions of two cards with different icons.
fn mismatched_pair(order: &[Icon]) -> (usize, usize) {
    let second = order.iter().position(|&i| i != order[0]).unwrap();
    (0, second)
}
