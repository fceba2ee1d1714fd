//! Rendering surface the engine draws into.
//!
//! The engine knows nothing about pixels. Presentation code implements
//! [`Renderer`]; [`render_board`] and [`render_notice`] push engine state
//! and session notices into it.
//!
//! ## Example
//!
//! ```
//! use concentration::core::{GameConfig, IconSet};
//! use concentration::render::{render_board, IconAssets, TextRenderer};
//! use concentration::rules::MatchingEngine;
//!
//! let config = GameConfig::default().with_seed(1);
//! let engine = MatchingEngine::new(config, IconSet::instruments()).unwrap();
//! let mut out = TextRenderer::from_config(engine.config());
//! render_board(&engine, &IconAssets::instruments(), &mut out);
//!
//! assert!(out.output().ends_with("Moves: 0"));
//! ```

pub mod assets;
pub mod text;

pub use assets::{AssetRef, IconAssets, CARD_BACK_GLYPH, PLACEHOLDER_GLYPH};
pub use text::TextRenderer;

use crate::core::{Card, CardState, IconSet};
use crate::rules::MatchingEngine;
use crate::session::{Notice, WIN_TITLE};

/// Label of the action offered with the end-of-game message.
pub const PLAY_AGAIN_LABEL: &str = "Play Again";

/// Shape of the board about to be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    /// Game the board belongs to. A change means a new game started.
    pub generation: u64,
    pub cards: usize,
    pub columns: usize,
}

impl BoardLayout {
    /// Layout of the engine's current board.
    #[must_use]
    pub fn of(engine: &MatchingEngine) -> Self {
        Self {
            generation: engine.generation(),
            cards: engine.state().len(),
            columns: engine.config().columns,
        }
    }
}

/// Everything a renderer needs to draw one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub position: usize,
    pub state: CardState,
    /// Face asset. `None` while the card is face-down.
    pub face: Option<AssetRef>,
    /// Icon name. `None` while the card is face-down.
    pub label: Option<String>,
}

impl CardView {
    /// Build the view of `card`, hiding the face of face-down cards.
    #[must_use]
    pub fn of(card: &Card, icons: &IconSet, assets: &IconAssets) -> Self {
        let icon = card.visible_icon();
        Self {
            position: card.position,
            state: card.state,
            face: icon.map(|i| assets.resolve(i)),
            label: icon.and_then(|i| icons.name(i)).map(str::to_string),
        }
    }
}

/// Drawing surface implemented by presentation code.
pub trait Renderer {
    /// Called before a full board redraw. Renderers that keep state
    /// between frames drop whatever the new layout no longer covers.
    fn begin_board(&mut self, _layout: &BoardLayout) {}

    /// Draw or redraw the card at `card.position`.
    fn draw_card(&mut self, card: &CardView);

    /// Update the move counter.
    fn show_moves(&mut self, moves: u32);

    /// Show a message such as the end-of-game text.
    fn show_message(&mut self, message: &str);

    /// Show the end-of-game title and message, offering [`PLAY_AGAIN_LABEL`].
    fn show_win(&mut self, title: &str, message: &str) {
        self.show_message(title);
        self.show_message(message);
    }
}

/// Draw every card and the move counter.
pub fn render_board<R: Renderer + ?Sized>(
    engine: &MatchingEngine,
    assets: &IconAssets,
    renderer: &mut R,
) {
    renderer.begin_board(&BoardLayout::of(engine));
    for card in engine.cards() {
        renderer.draw_card(&CardView::of(card, engine.icons(), assets));
    }
    renderer.show_moves(engine.move_count());
}

/// Redraw whatever a session notice changed.
pub fn render_notice<R: Renderer + ?Sized>(
    notice: &Notice,
    engine: &MatchingEngine,
    assets: &IconAssets,
    renderer: &mut R,
) {
    match notice {
        Notice::MismatchReverted { positions } => {
            for &p in positions {
                if let Ok(card) = engine.card(p) {
                    renderer.draw_card(&CardView::of(card, engine.icons(), assets));
                }
            }
        }
        Notice::WinAnnounced { .. } => {
            if let Some(message) = notice.win_message() {
                renderer.show_win(WIN_TITLE, &message);
            }
        }
    }
}
