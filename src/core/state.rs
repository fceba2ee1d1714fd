//! Game state: the board plus turn bookkeeping.
//!
//! ## GameState
//!
//! - Board of `2 × pairs` cards (persistent `im::Vector`, O(1) clone)
//! - Current selection (0-2 positions under evaluation)
//! - Matched pair count and move count
//! - Generation id of this game instance
//!
//! `GameState` only stores data. The rules that move it between phases
//! live in [`MatchingEngine`](crate::rules::MatchingEngine).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardState};
use super::error::GameError;
use super::icon::Icon;

/// Global phase of a game, derived from the selection and matched count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No card is face-up pending evaluation.
    Idle,
    /// One card revealed, waiting for the second.
    OneRevealed,
    /// Two mismatched cards revealed, waiting for `resolve_mismatch`.
    Evaluating,
    /// All pairs found.
    Won,
}

/// Selection buffer. Never holds more than two positions.
pub type Selection = SmallVec<[usize; 2]>;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Vector<Card>,

    /// Positions currently face-up under evaluation.
    pub(crate) selection: Selection,

    /// Pairs found so far.
    pub(crate) matched_count: u32,

    /// Completed two-card evaluations.
    pub(crate) move_count: u32,

    pairs: u32,

    generation: u64,
}

impl GameState {
    /// Build a fresh state from a card order.
    ///
    /// Every icon in `order` must appear exactly twice.
    pub fn from_order(order: &[Icon], generation: u64) -> Result<Self, GameError> {
        if order.is_empty() {
            return Err(GameError::EmptyIconSet);
        }

        let mut counts: FxHashMap<Icon, u32> = FxHashMap::default();
        for &icon in order {
            *counts.entry(icon).or_insert(0) += 1;
        }
        if let Some((icon, count)) = counts.iter().find(|&(_, &c)| c != 2) {
            return Err(GameError::InvalidBoard(format!(
                "{icon} appears {count} times, expected 2"
            )));
        }

        let board = order
            .iter()
            .enumerate()
            .map(|(position, &icon)| Card::new(position, icon))
            .collect();

        Ok(Self {
            board,
            selection: Selection::new(),
            matched_count: 0,
            move_count: 0,
            pairs: counts.len() as u32,
            generation,
        })
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.board.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pairs(&self) -> u32 {
        self.pairs
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn matched_count(&self) -> u32 {
        self.matched_count
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Positions currently under evaluation.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Card at `position`, if on the board.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.board.get(position)
    }

    /// Iterate over cards in board order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.board.iter()
    }

    /// Board icons in order, face-up or not.
    #[must_use]
    pub fn icon_order(&self) -> Vec<Icon> {
        self.board.iter().map(|c| c.icon).collect()
    }

    /// Count cards in a given state.
    #[must_use]
    pub fn count_in_state(&self, state: CardState) -> usize {
        self.board.iter().filter(|c| c.state == state).count()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.matched_count == self.pairs
    }

    /// Current global phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_won() {
            return Phase::Won;
        }
        match self.selection.len() {
            0 => Phase::Idle,
            1 => Phase::OneRevealed,
            _ => Phase::Evaluating,
        }
    }

    /// Check that a state loaded from outside the engine is playable.
    ///
    /// Fresh states from [`GameState::from_order`] always pass.
    pub fn validate(&self) -> Result<(), GameError> {
        fn invalid(msg: String) -> Result<(), GameError> {
            Err(GameError::InvalidBoard(msg))
        }

        let mut counts: FxHashMap<Icon, u32> = FxHashMap::default();
        for (i, card) in self.board.iter().enumerate() {
            if card.position != i {
                return invalid(format!("card at {i} claims position {}", card.position));
            }
            *counts.entry(card.icon).or_insert(0) += 1;
        }
        if let Some((icon, count)) = counts.iter().find(|&(_, &c)| c != 2) {
            return invalid(format!("{icon} appears {count} times, expected 2"));
        }
        if counts.len() as u32 != self.pairs || self.pairs == 0 {
            return invalid(format!("{} pairs recorded, {} on board", self.pairs, counts.len()));
        }

        if self.selection.len() > 2 {
            return invalid(format!("{} cards selected", self.selection.len()));
        }
        for &p in &self.selection {
            if self.card(p).map(|c| c.state) != Some(CardState::Revealed) {
                return invalid(format!("selected position {p} is not a revealed card"));
            }
        }
        if let &[a, b] = self.selection.as_slice() {
            if a == b || self.card(a).map(|c| c.icon) == self.card(b).map(|c| c.icon) {
                return invalid(format!("selection {a}, {b} is not a mismatch"));
            }
        }

        let revealed = self.count_in_state(CardState::Revealed);
        if revealed != self.selection.len() {
            return invalid(format!(
                "{revealed} revealed cards, {} selected",
                self.selection.len()
            ));
        }

        let matched = self.count_in_state(CardState::Matched);
        if matched != 2 * self.matched_count as usize || self.matched_count > self.pairs {
            return invalid(format!(
                "{matched} matched cards for {} matched pairs",
                self.matched_count
            ));
        }
        Ok(())
    }

    /// Set a card's state. Positions are checked by the caller.
    pub(crate) fn set_card_state(&mut self, position: usize, state: CardState) {
        if let Some(card) = self.board.get_mut(position) {
            card.state = state;
        }
    }
}
