//! Game configuration.
//!
//! Presentation pacing lives here rather than in the engine. The engine's
//! invariants hold for any delay, including zero.
//!
//! ```
//! use concentration::core::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_seed(7)
//!     .with_mismatch_delay_ms(250);
//!
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.win_announce_delay_ms, 500);
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Delay before a mismatched pair flips back.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Delay between the last match and the win announcement.
pub const DEFAULT_WIN_ANNOUNCE_DELAY_MS: u64 = 500;

/// Board columns used by renderers.
pub const DEFAULT_COLUMNS: usize = 4;

/// Engine and session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Milliseconds before a mismatched pair is turned back over.
    pub mismatch_delay_ms: u64,

    /// Milliseconds between the winning match and the win notice.
    pub win_announce_delay_ms: u64,

    /// Cards per row when rendering.
    pub columns: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            win_announce_delay_ms: DEFAULT_WIN_ANNOUNCE_DELAY_MS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the mismatch revert delay.
    #[must_use]
    pub fn with_mismatch_delay_ms(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    /// Set the win announcement delay.
    #[must_use]
    pub fn with_win_announce_delay_ms(mut self, ms: u64) -> Self {
        self.win_announce_delay_ms = ms;
        self
    }

    /// Set the render column count.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Both delays set to zero. Useful for headless play.
    #[must_use]
    pub fn instant(self) -> Self {
        self.with_mismatch_delay_ms(0).with_win_announce_delay_ms(0)
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no renderer can use.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.columns == 0 {
            return Err(GameError::Config("columns must be at least 1".to_string()));
        }
        Ok(())
    }
}
