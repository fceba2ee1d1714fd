//! Icon asset lookup with placeholder fallback.
//!
//! Asset problems never reach the engine. An icon without a path, or one
//! whose image failed to load, resolves to a placeholder glyph.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use crate::core::{Icon, IconSet};

/// Glyph drawn on the back of every face-down card.
pub const CARD_BACK_GLYPH: &str = "★";

/// Glyph drawn in place of an icon image that could not be loaded.
pub const PLACEHOLDER_GLYPH: &str = "🎶";

/// What a renderer should draw on a card face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetRef {
    /// Image at a path relative to the asset root.
    Image(String),
    /// Text glyph shown when no image is available.
    Placeholder(String),
}

impl AssetRef {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, AssetRef::Placeholder(_))
    }
}

/// Icon to image path table.
#[derive(Clone, Debug)]
pub struct IconAssets {
    paths: FxHashMap<Icon, String>,
    failed: FxHashSet<Icon>,
    placeholder: String,
}

impl Default for IconAssets {
    fn default() -> Self {
        Self {
            paths: FxHashMap::default(),
            failed: FxHashSet::default(),
            placeholder: PLACEHOLDER_GLYPH.to_string(),
        }
    }
}

impl IconAssets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Image paths for [`IconSet::instruments`].
    #[must_use]
    pub fn instruments() -> Self {
        let set = IconSet::instruments();
        let paths = [
            "./aj1.png",
            "./aj2.jpg",
            "./aj3.jpg",
            "./aj4.png",
            "./aj5.jpg",
            "./aj6.png",
            "./aj7.png",
            "./images/vinyl_record.png",
        ];
        set.icons()
            .zip(paths)
            .fold(Self::new(), |assets, (icon, path)| assets.with_path(icon, path))
    }

    /// Register an image path for an icon.
    #[must_use]
    pub fn with_path(mut self, icon: Icon, path: impl Into<String>) -> Self {
        self.paths.insert(icon, path.into());
        self
    }

    /// Use a different placeholder glyph.
    #[must_use]
    pub fn with_placeholder(mut self, glyph: impl Into<String>) -> Self {
        self.placeholder = glyph.into();
        self
    }

    /// Record that the image for `icon` failed to load.
    ///
    /// Later lookups return the placeholder.
    pub fn mark_failed(&mut self, icon: Icon) {
        if self.failed.insert(icon) {
            warn!(
                %icon,
                path = self.paths.get(&icon).map(String::as_str).unwrap_or("<none>"),
                "failed to load image, using placeholder"
            );
        }
    }

    /// What to draw for `icon`.
    #[must_use]
    pub fn resolve(&self, icon: Icon) -> AssetRef {
        match self.paths.get(&icon) {
            Some(path) if !self.failed.contains(&icon) => AssetRef::Image(path.clone()),
            _ => AssetRef::Placeholder(self.placeholder.clone()),
        }
    }

    #[must_use]
    pub fn path(&self, icon: Icon) -> Option<&str> {
        self.paths.get(&icon).map(String::as_str)
    }
}
