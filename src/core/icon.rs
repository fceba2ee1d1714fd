//! Icon identification.
//!
//! Every card shows one `Icon`. The engine never interprets icons beyond
//! equality; names exist for display and asset lookup.
//!
//! ```
//! use concentration::core::{Icon, IconSet};
//!
//! let icons = IconSet::instruments();
//! assert_eq!(icons.len(), 8);
//! assert_eq!(icons.name(Icon::new(0)), Some("guitar"));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Opaque identifier for the picture on a card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Icon(pub u16);

impl Icon {
    /// Create a new icon ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Icon({})", self.0)
    }
}

/// One icon with its display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDef {
    pub icon: Icon,
    pub name: String,
}

/// Ordered set of icons used to build a board.
///
/// Construction does not reject duplicates; `validate` does, and the
/// engine calls it before every new game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    defs: Vec<IconDef>,
}

impl IconSet {
    /// Create an empty icon set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an icon with a display name.
    #[must_use]
    pub fn with_icon(mut self, icon: Icon, name: impl Into<String>) -> Self {
        self.defs.push(IconDef {
            icon,
            name: name.into(),
        });
        self
    }

    /// Build a set from names, assigning icon IDs in order.
    ///
    /// Fails with [`GameError::TooManyIcons`] past `u16::MAX + 1` names.
    pub fn from_names<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut defs = Vec::new();
        for (i, name) in names.into_iter().enumerate() {
            let raw = u16::try_from(i).map_err(|_| GameError::TooManyIcons(i + 1))?;
            defs.push(IconDef {
                icon: Icon::new(raw),
                name: name.into(),
            });
        }
        Ok(Self { defs })
    }

    /// Build a set of `pairs` anonymous icons named by number.
    #[must_use]
    pub fn numbered(pairs: u16) -> Self {
        Self::numbered_from((0..pairs).map(|i| i.to_string()))
    }

    /// The eight-instrument set the browser game shipped with.
    #[must_use]
    pub fn instruments() -> Self {
        Self::numbered_from(
            ["guitar", "piano", "drum", "sax", "note", "mic", "headphone", "vinyl"]
                .into_iter()
                .map(str::to_string),
        )
    }

    fn numbered_from(names: impl Iterator<Item = String>) -> Self {
        let defs = (0..=u16::MAX)
            .zip(names)
            .map(|(raw, name)| IconDef {
                icon: Icon::new(raw),
                name,
            })
            .collect();
        Self { defs }
    }

    /// Number of icons (= number of pairs on the board).
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate over icons in insertion order.
    pub fn icons(&self) -> impl Iterator<Item = Icon> + '_ {
        self.defs.iter().map(|d| d.icon)
    }

    /// Iterate over icon definitions.
    pub fn iter(&self) -> impl Iterator<Item = &IconDef> {
        self.defs.iter()
    }

    /// Display name of an icon.
    #[must_use]
    pub fn name(&self, icon: Icon) -> Option<&str> {
        self.defs
            .iter()
            .find(|d| d.icon == icon)
            .map(|d| d.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, icon: Icon) -> bool {
        self.defs.iter().any(|d| d.icon == icon)
    }

    /// Check the set is non-empty and duplicate-free.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.defs.is_empty() {
            return Err(GameError::EmptyIconSet);
        }
        let mut seen = FxHashSet::default();
        for def in &self.defs {
            if !seen.insert(def.icon) {
                return Err(GameError::DuplicateIcon(def.icon));
            }
        }
        Ok(())
    }
}
