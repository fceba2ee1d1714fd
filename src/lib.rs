//! # concentration
//!
//! A memory-matching card game engine.
//!
//! A board of face-down cards is dealt from a set of icons, each icon
//! appearing exactly twice. The player reveals two cards at a time:
//! matching pairs stay face-up, mismatches are turned back over, and the
//! game ends when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: One `GameState` value per game, owned by one
//!    `MatchingEngine`. No globals.
//!
//! 2. **Calls In, Transitions Out**: Input is a method call; the result is
//!    a `Transition` plus recorded `GameEvent`s that a renderer interprets.
//!
//! 3. **No Clock in the Engine**: Presentation delays live in `GameConfig`
//!    and are paced by `GameSession` using caller-supplied time. Delayed
//!    tasks are tagged with the game generation so a reset can never be
//!    touched by a timer from the previous game.
//!
//! ## Modules
//!
//! - `core`: Icons, cards, state, RNG, configuration, errors
//! - `rules`: `MatchingEngine`, transitions, snapshots
//! - `events`: Event log drained by callers
//! - `session`: Delayed-task scheduler and game session controller
//! - `render`: Renderer trait, asset lookup, text renderer

pub mod core;
pub mod rules;
pub mod events;
pub mod session;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Icon, IconDef, IconSet,
    Card, CardState,
    GameRng, GameRngState,
    GameConfig, GameError,
    GameState, Phase,
};

pub use crate::rules::{MatchingEngine, Transition, GameSnapshot};

pub use crate::events::{EventLog, GameEvent, GameEventKind};

pub use crate::session::{GameSession, Notice, Scheduler, ScheduledTask, Task, TaskId};

pub use crate::render::{
    AssetRef, BoardLayout, CardView, IconAssets, Renderer, TextRenderer,
    render_board, render_notice,
};
