//! Engine checkpoints.
//!
//! A `GameSnapshot` holds everything needed to continue a game exactly:
//! configuration, icon set, board state and the RNG position, so boards
//! dealt after a restore match the ones the original engine would deal.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameError, GameRngState, GameState, IconSet};

/// Serializable engine checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub icons: IconSet,
    pub state: GameState,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn encode(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`GameSnapshot::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
