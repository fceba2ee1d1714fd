//! Core engine types: icons, cards, state, RNG, configuration, errors.
//!
//! This module holds plain data. Rules live in [`crate::rules`].

pub mod icon;
pub mod card;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use icon::{Icon, IconDef, IconSet};
pub use card::{Card, CardState};
pub use rng::{GameRng, GameRngState};
pub use config::{
    GameConfig, DEFAULT_COLUMNS, DEFAULT_MISMATCH_DELAY_MS, DEFAULT_WIN_ANNOUNCE_DELAY_MS,
};
pub use error::GameError;
pub use state::{GameState, Phase, Selection};
