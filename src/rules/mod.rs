//! Game rules: dealing boards and evaluating selections.
//!
//! [`MatchingEngine`] is the only component that mutates a
//! [`GameState`](crate::core::GameState). Inputs come in as method calls
//! and leave as [`Transition`]s plus [`GameEvent`](crate::events::GameEvent)s.

pub mod engine;
pub mod snapshot;

pub use engine::{MatchingEngine, Transition};
pub use snapshot::GameSnapshot;
