//! Event recording for engine transitions.
//!
//! ## Key Components
//!
//! - [`GameEventKind`]: What happened (reveal, match, mismatch, win)
//! - [`GameEvent`]: A kind tagged with game generation and move count
//! - [`EventLog`]: Bounded queue the engine appends to and callers drain
//!
//! ## Example Usage
//!
//! ```
//! use concentration::core::{GameConfig, Icon};
//! use concentration::events::GameEventKind;
//! use concentration::rules::MatchingEngine;
//!
//! let a = Icon::new(0);
//! let mut engine = MatchingEngine::from_board(GameConfig::default(), &[a, a]).unwrap();
//! engine.drain_events();
//!
//! engine.select_card(0).unwrap();
//! engine.select_card(1).unwrap();
//!
//! let events = engine.drain_events();
//! assert!(matches!(events.last().map(|e| &e.kind), Some(GameEventKind::Won { moves: 1 })));
//! ```

pub mod event;

pub use event::{EventLog, GameEvent, GameEventKind, DEFAULT_EVENT_CAPACITY};
