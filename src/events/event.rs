//! Game event types.
//!
//! The engine records one event per observable change. Renderers and
//! sessions drain them after each call instead of polling the board.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::Icon;

/// Events kept before the oldest are dropped.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Something that happened in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventKind {
    /// A new board was dealt.
    NewGame { pairs: u32 },
    /// A card was turned face-up.
    Revealed { position: usize, icon: Icon },
    /// Two revealed cards share an icon.
    Matched { positions: [usize; 2], icon: Icon },
    /// Two revealed cards differ and await `resolve_mismatch`.
    Mismatched { positions: [usize; 2] },
    /// A mismatched pair was turned back over.
    MismatchResolved { positions: [usize; 2] },
    /// The last pair was found. Recorded once per game.
    Won { moves: u32 },
}

/// An event tagged with the game it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Generation of the game that produced the event.
    pub generation: u64,

    /// Move count at the time of the event.
    pub move_count: u32,

    pub kind: GameEventKind,
}

impl GameEvent {
    /// Create a new event.
    #[must_use]
    pub fn new(generation: u64, move_count: u32, kind: GameEventKind) -> Self {
        Self {
            generation,
            move_count,
            kind,
        }
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self.kind, GameEventKind::Won { .. })
    }
}

/// Bounded queue of events waiting to be observed.
///
/// When full, pushing drops the oldest event. Callers that never drain
/// keep at most `capacity` events.
#[derive(Clone, Debug)]
pub struct EventLog {
    pending: VecDeque<GameEvent>,
    capacity: usize,
    dropped: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log holding at most `capacity` events (at least 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            capacity: capacity.max(1),
            dropped: 0,
        }
    }

    /// Append an event, evicting the oldest if full.
    pub fn push(&mut self, event: GameEvent) {
        if self.pending.len() >= self.capacity {
            self.pending.pop_front();
            self.dropped += 1;
        }
        self.pending.push_back(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.pending.drain(..).collect()
    }

    /// Pending events without consuming them.
    #[must_use]
    pub fn pending(&self) -> &VecDeque<GameEvent> {
        &self.pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events evicted because nobody drained them in time.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
