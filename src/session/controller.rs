//! Game session: one engine plus its presentation pacing.
//!
//! The session turns engine transitions into delayed tasks:
//! - a mismatch arms a revert after `mismatch_delay_ms`
//! - a win arms an announcement after `win_announce_delay_ms`
//!
//! Every task carries the generation of the game that armed it. Resetting
//! drops queued tasks, and any task that still reaches a newer game is
//! discarded when it fires.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameConfig, GameError, GameState, Icon, IconSet};
use crate::rules::{MatchingEngine, Transition};

use super::scheduler::{ScheduledTask, Scheduler, Task};

/// Something the presentation layer should show after `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// A mismatched pair was turned back over.
    MismatchReverted { positions: [usize; 2] },
    /// The game is over; show the end-of-game message.
    WinAnnounced { moves: u32 },
}

impl Notice {
    /// End-of-game heading, if this is a win.
    #[must_use]
    pub fn win_title(&self) -> Option<&'static str> {
        match self {
            Notice::WinAnnounced { .. } => Some(WIN_TITLE),
            Notice::MismatchReverted { .. } => None,
        }
    }

    /// End-of-game message text, if this is a win.
    #[must_use]
    pub fn win_message(&self) -> Option<String> {
        match self {
            Notice::WinAnnounced { moves } => Some(win_message(*moves)),
            Notice::MismatchReverted { .. } => None,
        }
    }
}

/// Heading shown above the end-of-game message.
pub const WIN_TITLE: &str = "🎉 Happy Birthday! 🎉";

/// Message shown when the last pair is found.
#[must_use]
pub fn win_message(moves: u32) -> String {
    format!("You completed the game in {moves} moves!")
}

/// Controller owning one engine and its delayed tasks.
///
/// ## Example
///
/// ```
/// use concentration::core::{GameConfig, Icon};
/// use concentration::session::{GameSession, Notice};
///
/// let (a, b) = (Icon::new(0), Icon::new(1));
/// let mut session = GameSession::from_board(GameConfig::default(), &[a, b, a, b]).unwrap();
///
/// session.select(0, 0).unwrap();
/// session.select(1, 0).unwrap();
/// assert!(session.advance(999).is_empty());
/// assert_eq!(session.advance(1000), vec![Notice::MismatchReverted { positions: [0, 1] }]);
/// ```
pub struct GameSession {
    engine: MatchingEngine,
    scheduler: Scheduler,
}

impl GameSession {
    /// Create a session and deal the first board.
    pub fn new(config: GameConfig, icons: IconSet) -> Result<Self, GameError> {
        Ok(Self::from_engine(MatchingEngine::new(config, icons)?))
    }

    /// Create a session with a fixed card order.
    pub fn from_board(config: GameConfig, order: &[Icon]) -> Result<Self, GameError> {
        Ok(Self::from_engine(MatchingEngine::from_board(config, order)?))
    }

    /// Wrap an existing engine.
    #[must_use]
    pub fn from_engine(engine: MatchingEngine) -> Self {
        Self {
            engine,
            scheduler: Scheduler::new(),
        }
    }

    // === Input ===

    /// Forward a card selection made at `now_ms`.
    pub fn select(&mut self, position: usize, now_ms: u64) -> Result<Transition, GameError> {
        let transition = self.engine.select_card(position)?;
        let generation = self.engine.generation();
        let config = self.engine.config();

        match transition {
            Transition::Mismatched { .. } => {
                let due = now_ms.saturating_add(config.mismatch_delay_ms);
                self.scheduler.schedule(due, generation, Task::ResolveMismatch);
            }
            Transition::Won { moves, .. } => {
                let due = now_ms.saturating_add(config.win_announce_delay_ms);
                self.scheduler.schedule(due, generation, Task::AnnounceWin { moves });
            }
            _ => {}
        }
        Ok(transition)
    }

    /// Fire every task due at or before `now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> Vec<Notice> {
        self.scheduler
            .take_due(now_ms)
            .into_iter()
            .filter_map(|task| self.fire(task))
            .collect()
    }

    fn fire(&mut self, scheduled: ScheduledTask) -> Option<Notice> {
        if scheduled.generation != self.engine.generation() {
            debug!(
                task = %scheduled.id,
                stale = scheduled.generation,
                current = self.engine.generation(),
                "dropping task from previous game"
            );
            return None;
        }

        match scheduled.task {
            Task::ResolveMismatch => {
                let positions = self.engine.pending_mismatch()?;
                self.engine
                    .resolve_mismatch_for(scheduled.generation)
                    .then_some(Notice::MismatchReverted { positions })
            }
            Task::AnnounceWin { moves } => {
                info!(moves, "announcing win");
                Some(Notice::WinAnnounced { moves })
            }
        }
    }

    // === Lifecycle ===

    /// Deal a new board from the current icon set, invalidating queued tasks.
    ///
    /// This is the "play again" action offered with the win message.
    pub fn reset(&mut self) -> Result<&GameState, GameError> {
        self.engine.restart()?;
        self.drop_stale();
        Ok(self.engine.state())
    }

    /// Start a game with a new icon set, invalidating queued tasks.
    pub fn new_game(&mut self, icons: IconSet) -> Result<&GameState, GameError> {
        self.engine.new_game(icons)?;
        self.drop_stale();
        Ok(self.engine.state())
    }

    /// Start a game with a fixed card order, invalidating queued tasks.
    pub fn new_game_with_board(&mut self, order: &[Icon]) -> Result<&GameState, GameError> {
        self.engine.new_game_with_board(order)?;
        self.drop_stale();
        Ok(self.engine.state())
    }

    fn drop_stale(&mut self) {
        let dropped = self.scheduler.retain_generation(self.engine.generation());
        if dropped > 0 {
            debug!(dropped, "invalidated tasks on new game");
        }
    }

    // === Queries ===

    #[must_use]
    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    /// Direct engine access. Tasks armed before a new game started this
    /// way are still discarded when they fire.
    pub fn engine_mut(&mut self) -> &mut MatchingEngine {
        &mut self.engine
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Time of the next queued task, for callers driving a timer.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.scheduler.next_due()
    }
}
