//! Cards on the board.
//!
//! A `Card` is one face on the board: its position, the icon it hides and
//! whether it is face-down, face-up, or part of a found pair.
//!
//! ## Card Lifecycle
//!
//! ```text
//! Hidden --select--> Revealed --pair found--> Matched (terminal)
//!                        |
//!                        +--mismatch resolved--> Hidden
//! ```

use serde::{Deserialize, Serialize};

use super::icon::Icon;

/// Visual state of a single card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face-down.
    #[default]
    Hidden,
    /// Face-up and under evaluation.
    Revealed,
    /// Part of a found pair. Permanent for the rest of the game.
    Matched,
}

impl CardState {
    /// True if the card face is visible.
    #[must_use]
    pub fn is_face_up(self) -> bool {
        !matches!(self, CardState::Hidden)
    }
}

/// A card at a fixed board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Index in the board sequence (0..N).
    pub position: usize,

    /// Icon shown when the card is face-up.
    pub icon: Icon,

    /// Current visual state.
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(position: usize, icon: Icon) -> Self {
        Self {
            position,
            icon,
            state: CardState::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == CardState::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Icon visible to the player, `None` while face-down.
    #[must_use]
    pub fn visible_icon(&self) -> Option<Icon> {
        self.state.is_face_up().then_some(self.icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_hidden() {
        let card = Card::new(3, Icon::new(1));
        assert!(card.is_hidden());
        assert_eq!(card.visible_icon(), None);
        assert_eq!(card.position, 3);
    }

    #[test]
    fn test_visible_icon() {
        let mut card = Card::new(0, Icon::new(4));

        card.state = CardState::Revealed;
        assert!(card.is_revealed());
        assert_eq!(card.visible_icon(), Some(Icon::new(4)));

        card.state = CardState::Matched;
        assert!(card.is_matched());
        assert_eq!(card.visible_icon(), Some(Icon::new(4)));
    }

    #[test]
    fn test_card_serde() {
        let card = Card {
            position: 2,
            icon: Icon::new(9),
            state: CardState::Matched,
        };

        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
