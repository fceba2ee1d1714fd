//! Engine error type.
//!
//! Only caller contract violations are errors. Benign input such as
//! selecting an already revealed card is reported as
//! [`Transition::Ignored`](crate::rules::Transition::Ignored) instead.

use thiserror::Error;

use super::icon::Icon;

/// Errors returned by engine, session and snapshot operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// A board position outside `0..len`.
    #[error("position {position} out of range for board of {len} cards")]
    InvalidPosition { position: usize, len: usize },

    /// `new_game` was called without any icons.
    #[error("icon set is empty")]
    EmptyIconSet,

    /// The same icon was supplied more than once.
    #[error("duplicate icon {0}")]
    DuplicateIcon(Icon),

    /// More icons than `Icon` IDs can address.
    #[error("{0} icons exceed the icon ID range")]
    TooManyIcons(usize),

    /// A forced board order does not contain every icon exactly twice.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// Configuration rejected by `GameConfig::validate`.
    #[error("invalid config: {0}")]
    Config(String),

    /// Snapshot encoding or decoding failed.
    #[error("snapshot codec error")]
    Codec(#[from] bincode::Error),

    /// JSON configuration could not be parsed.
    #[error("config parse error")]
    Json(#[from] serde_json::Error),
}

impl GameError {
    /// True for errors caused by a bad board position.
    #[must_use]
    pub fn is_invalid_position(&self) -> bool {
        matches!(self, GameError::InvalidPosition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidPosition { position: 20, len: 16 };
        assert_eq!(err.to_string(), "position 20 out of range for board of 16 cards");
        assert!(err.is_invalid_position());

        let err = GameError::DuplicateIcon(Icon::new(3));
        assert_eq!(err.to_string(), "duplicate icon Icon(3)");
        assert!(!err.is_invalid_position());
    }
}
