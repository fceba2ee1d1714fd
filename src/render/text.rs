//! Plain-text renderer.
//!
//! Draws the board as a grid of glyphs: the card back for face-down
//! cards, the icon name for revealed cards and the name in parentheses
//! for matched ones.

use crate::core::{CardState, GameConfig, DEFAULT_COLUMNS};

use super::assets::{AssetRef, CARD_BACK_GLYPH};
use super::{BoardLayout, CardView, Renderer, PLAY_AGAIN_LABEL};

/// Renderer that accumulates a text picture of the game.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    columns: usize,
    cells: Vec<String>,
    moves: u32,
    messages: Vec<String>,
    /// Game of the last board drawn.
    generation: Option<u64>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl TextRenderer {
    /// Create a renderer with `columns` cards per row (at least 1).
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            cells: Vec::new(),
            moves: 0,
            messages: Vec::new(),
            generation: None,
        }
    }

    /// Create a renderer laid out by `config.columns`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.columns)
    }

    /// Forget the picture: cells, move counter and messages.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.moves = 0;
        self.messages.clear();
        self.generation = None;
    }

    /// Text for one card.
    fn cell(card: &CardView) -> String {
        let face = || match (&card.label, &card.face) {
            (Some(label), _) => label.clone(),
            (None, Some(AssetRef::Placeholder(glyph))) => glyph.clone(),
            (None, Some(AssetRef::Image(path))) => path.clone(),
            (None, None) => "?".to_string(),
        };
        match card.state {
            CardState::Hidden => CARD_BACK_GLYPH.to_string(),
            CardState::Revealed => face(),
            CardState::Matched => format!("({})", face()),
        }
    }

    /// Messages shown so far.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The picture: board rows, the move counter, then any messages.
    #[must_use]
    pub fn output(&self) -> String {
        let width = self.cells.iter().map(|c| c.chars().count()).max().unwrap_or(1);

        let mut lines: Vec<String> = self
            .cells
            .chunks(self.columns)
            .map(|row| {
                row.iter()
                    .map(|c| format!("{c:<width$}"))
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim_end()
                    .to_string()
            })
            .collect();
        lines.push(format!("Moves: {}", self.moves));
        lines.extend(self.messages.iter().cloned());
        lines.join("\n")
    }
}

impl Renderer for TextRenderer {
    fn begin_board(&mut self, layout: &BoardLayout) {
        if self.generation != Some(layout.generation) {
            self.clear();
            self.generation = Some(layout.generation);
        }
        self.columns = layout.columns.max(1);
        self.cells.truncate(layout.cards);
    }

    fn draw_card(&mut self, card: &CardView) {
        if self.cells.len() <= card.position {
            self.cells.resize(card.position + 1, CARD_BACK_GLYPH.to_string());
        }
        self.cells[card.position] = Self::cell(card);
    }

    fn show_moves(&mut self, moves: u32) {
        self.moves = moves;
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn show_win(&mut self, title: &str, message: &str) {
        self.show_message(title);
        self.show_message(message);
        self.show_message(&format!("[{PLAY_AGAIN_LABEL}]"));
    }
}
