//! Matching engine: deals boards and evaluates selections.
//!
//! The engine owns exactly one [`GameState`] at a time and is the only
//! thing that mutates it. Every input is a call that returns a
//! [`Transition`] describing what changed, so a renderer can decide what
//! to draw without inspecting the whole board.
//!
//! ## Selection Rules
//!
//! - Out-of-range positions are caller bugs and return an error.
//! - Selecting a face-up card, selecting while two cards are pending, or
//!   selecting after the game is won are ignored.
//! - The second reveal counts one move and is evaluated immediately.
//!   A match clears the selection at once; a mismatch stays face-up until
//!   [`MatchingEngine::resolve_mismatch`].

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::core::{
    Card, CardState, GameConfig, GameError, GameRng, GameState, Icon, IconSet, Phase,
};
use crate::events::{EventLog, GameEvent, GameEventKind};

/// Result of a single `select_card` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Nothing changed.
    Ignored,
    /// First card of a pair turned face-up.
    Revealed { position: usize, icon: Icon },
    /// Second card matched the first. Both are now matched.
    Matched { positions: [usize; 2], icon: Icon },
    /// Second card differs. Both stay face-up until resolved.
    Mismatched { positions: [usize; 2] },
    /// Second card completed the last pair.
    Won { positions: [usize; 2], moves: u32 },
}

impl Transition {
    /// True if the call changed any state.
    #[must_use]
    pub fn is_change(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }

    /// True if the call completed a two-card evaluation.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(
            self,
            Transition::Matched { .. } | Transition::Mismatched { .. } | Transition::Won { .. }
        )
    }
}

/// Memory-matching game engine.
///
/// ## Example
///
/// ```
/// use concentration::core::{GameConfig, IconSet};
/// use concentration::rules::{MatchingEngine, Transition};
///
/// let config = GameConfig::default().with_seed(42);
/// let mut engine = MatchingEngine::new(config, IconSet::instruments()).unwrap();
/// assert_eq!(engine.state().len(), 16);
///
/// let first = engine.select_card(0).unwrap();
/// assert!(matches!(first, Transition::Revealed { position: 0, .. }));
/// ```
pub struct MatchingEngine {
    config: GameConfig,
    rng: GameRng,
    icons: IconSet,
    state: GameState,
    events: EventLog,
    next_generation: u64,
}

impl MatchingEngine {
    /// Create an engine and deal the first board.
    pub fn new(config: GameConfig, icons: IconSet) -> Result<Self, GameError> {
        icons.validate()?;
        let mut rng = seeded_rng(&config)?;
        let mut order = doubled(&icons);
        rng.shuffle(&mut order);
        Self::start(config, rng, icons, &order)
    }

    /// Create an engine with a fixed card order instead of a shuffle.
    pub fn from_board(config: GameConfig, order: &[Icon]) -> Result<Self, GameError> {
        let rng = seeded_rng(&config)?;
        Self::start(config, rng, icons_in(order), order)
    }

    fn start(
        config: GameConfig,
        rng: GameRng,
        icons: IconSet,
        order: &[Icon],
    ) -> Result<Self, GameError> {
        let mut engine = Self {
            config,
            rng,
            icons,
            state: GameState::from_order(order, 1)?,
            events: EventLog::new(),
            next_generation: 2,
        };
        engine.announce_new_game();
        Ok(engine)
    }

    // === Game Lifecycle ===

    /// Discard the current game and deal a new board from `icons`.
    ///
    /// Rejects empty or duplicate icon sets without touching the
    /// current game.
    pub fn new_game(&mut self, icons: IconSet) -> Result<&GameState, GameError> {
        icons.validate()?;
        self.icons = icons;
        self.deal()?;
        Ok(&self.state)
    }

    /// Deal a new board from the current icon set.
    pub fn restart(&mut self) -> Result<&GameState, GameError> {
        self.deal()?;
        Ok(&self.state)
    }

    /// Discard the current game and use `order` as the board, unshuffled.
    ///
    /// Every icon in `order` must appear exactly twice.
    pub fn new_game_with_board(&mut self, order: &[Icon]) -> Result<&GameState, GameError> {
        let state = GameState::from_order(order, self.next_generation)?;
        self.icons = icons_in(order);
        self.install(state);
        Ok(&self.state)
    }

    fn deal(&mut self) -> Result<(), GameError> {
        let mut order = doubled(&self.icons);
        self.rng.shuffle(&mut order);
        let state = GameState::from_order(&order, self.next_generation)?;
        self.install(state);
        Ok(())
    }

    /// Replace the game. Undrained events of the old game are discarded.
    fn install(&mut self, state: GameState) {
        self.next_generation = state.generation() + 1;
        self.state = state;
        self.events.clear();
        self.announce_new_game();
    }

    fn announce_new_game(&mut self) {
        debug!(
            generation = self.state.generation(),
            pairs = self.state.pairs(),
            "new game"
        );
        self.record(GameEventKind::NewGame {
            pairs: self.state.pairs(),
        });
    }

    // === Input ===

    /// Select the card at `position`.
    pub fn select_card(&mut self, position: usize) -> Result<Transition, GameError> {
        let card = *self.card_checked(position)?;

        if self.state.is_won() || self.state.selection.len() >= 2 || !card.is_hidden() {
            trace!(position, phase = ?self.state.phase(), state = ?card.state, "select ignored");
            return Ok(Transition::Ignored);
        }

        self.state.set_card_state(position, CardState::Revealed);
        self.state.selection.push(position);
        self.record(GameEventKind::Revealed {
            position,
            icon: card.icon,
        });

        if self.state.selection.len() < 2 {
            return Ok(Transition::Revealed {
                position,
                icon: card.icon,
            });
        }

        self.state.move_count += 1;
        let positions = [self.state.selection[0], self.state.selection[1]];
        if self.icon_at(positions[0]) != Some(card.icon) {
            debug!(?positions, moves = self.state.move_count, "mismatch");
            self.record(GameEventKind::Mismatched { positions });
            return Ok(Transition::Mismatched { positions });
        }

        for p in positions {
            self.state.set_card_state(p, CardState::Matched);
        }
        self.state.matched_count += 1;
        self.state.selection.clear();
        debug!(
            ?positions,
            matched = self.state.matched_count,
            moves = self.state.move_count,
            "match"
        );
        self.record(GameEventKind::Matched {
            positions,
            icon: card.icon,
        });

        if self.state.is_won() {
            let moves = self.state.move_count;
            info!(generation = self.state.generation(), moves, "game won");
            self.record(GameEventKind::Won { moves });
            return Ok(Transition::Won { positions, moves });
        }

        Ok(Transition::Matched {
            positions,
            icon: card.icon,
        })
    }

    /// Turn a pending mismatched pair back over.
    ///
    /// Returns `false` if no mismatch was pending.
    pub fn resolve_mismatch(&mut self) -> bool {
        let Some(positions) = self.pending_mismatch() else {
            return false;
        };

        for p in positions {
            self.state.set_card_state(p, CardState::Hidden);
        }
        self.state.selection.clear();
        trace!(?positions, "mismatch resolved");
        self.record(GameEventKind::MismatchResolved { positions });
        true
    }

    /// Resolve a mismatch only if the game is still `generation`.
    ///
    /// Delayed callers use this so a timer armed in one game can never
    /// flip cards in the next.
    pub fn resolve_mismatch_for(&mut self, generation: u64) -> bool {
        if generation != self.state.generation() {
            trace!(
                stale = generation,
                current = self.state.generation(),
                "stale mismatch resolution dropped"
            );
            return false;
        }
        self.resolve_mismatch()
    }

    // === Queries ===

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Icon set the current board was dealt from.
    #[must_use]
    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    /// Card at `position`.
    pub fn card(&self, position: usize) -> Result<&Card, GameError> {
        self.card_checked(position)
    }

    /// Visual state of the card at `position`.
    pub fn card_state(&self, position: usize) -> Result<CardState, GameError> {
        self.card_checked(position).map(|c| c.state)
    }

    /// Every card in board order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.state.cards()
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.move_count()
    }

    #[must_use]
    pub fn matched_count(&self) -> u32 {
        self.state.matched_count()
    }

    #[must_use]
    pub fn pairs(&self) -> u32 {
        self.state.pairs()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state.generation()
    }

    /// Positions of a mismatched pair waiting to be turned back.
    #[must_use]
    pub fn pending_mismatch(&self) -> Option<[usize; 2]> {
        match self.state.selection() {
            &[a, b] => Some([a, b]),
            _ => None,
        }
    }

    // === Events ===

    /// Take all events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Events recorded since the last drain, or since the current game
    /// started if that is more recent.
    #[must_use]
    pub fn pending_events(&self) -> &VecDeque<GameEvent> {
        self.events.pending()
    }

    // === Snapshots ===

    /// Capture the engine so it can be restored later.
    #[must_use]
    pub fn snapshot(&self) -> super::GameSnapshot {
        super::GameSnapshot {
            config: self.config.clone(),
            icons: self.icons.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild an engine from a snapshot. Pending events are not restored.
    ///
    /// Snapshots come from outside the engine, so the state is checked
    /// before it is accepted.
    pub fn restore(snapshot: super::GameSnapshot) -> Result<Self, GameError> {
        snapshot.config.validate()?;
        snapshot.icons.validate()?;
        snapshot.state.validate()?;
        if let Some(card) = snapshot.state.cards().find(|c| !snapshot.icons.contains(c.icon)) {
            return Err(GameError::InvalidBoard(format!(
                "{} at position {} is not in the icon set",
                card.icon, card.position
            )));
        }

        Ok(Self {
            config: snapshot.config,
            rng: GameRng::from_state(&snapshot.rng),
            icons: snapshot.icons,
            next_generation: snapshot.state.generation() + 1,
            state: snapshot.state,
            events: EventLog::new(),
        })
    }

    // === Helpers ===

    fn card_checked(&self, position: usize) -> Result<&Card, GameError> {
        self.state.card(position).ok_or(GameError::InvalidPosition {
            position,
            len: self.state.len(),
        })
    }

    fn icon_at(&self, position: usize) -> Option<Icon> {
        self.state.card(position).map(|c| c.icon)
    }

    fn record(&mut self, kind: GameEventKind) {
        self.events.push(GameEvent::new(
            self.state.generation(),
            self.state.move_count(),
            kind,
        ));
    }
}

/// Deal RNG for `config`, seeded or from OS entropy.
fn seeded_rng(config: &GameConfig) -> Result<GameRng, GameError> {
    config.validate()?;
    Ok(match config.seed {
        Some(seed) => GameRng::new(seed).for_context("deal"),
        None => GameRng::from_entropy(),
    })
}

/// Each icon of `icons` twice, in set order.
fn doubled(icons: &IconSet) -> Vec<Icon> {
    icons.icons().flat_map(|icon| [icon, icon]).collect()
}

/// Distinct icons of `order` in first-seen order, named by ID.
fn icons_in(order: &[Icon]) -> IconSet {
    let mut set = IconSet::new();
    for &icon in order {
        if !set.contains(icon) {
            set = set.with_icon(icon, icon.raw().to_string());
        }
    }
    set
}
