//! Game state for one playthrough.
//!
//! ## GameState
//!
//! Everything a playthrough accumulates:
//! - Stats (mutated only by turn resolution)
//! - Round counter (starts at 1)
//! - Current hand and the player's selection
//! - Turn history, one summary line per resolved week
//! - Whether the semester is over
//!
//! `GameState` is owned by a single controller and passed by reference;
//! there is no global game. Turn resolution itself lives in
//! [`rules`](crate::rules).

use serde::Serialize;

use super::config::GameConfig;
use super::error::GameError;
use super::rng::GameRng;
use super::stats::PlayerStats;
use crate::cards::{CardCatalog, CardId};
use crate::deck::{draw_hand, Hand, Selection, Toggle};

/// Complete state of a playthrough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Current stats.
    pub stats: PlayerStats,

    /// Round about to be played (starts at 1).
    pub round: u32,

    /// Cards offered this round.
    pub hand: Hand,

    /// Cards picked from `hand` so far.
    pub selection: Selection,

    /// One summary line per resolved round.
    pub history: Vec<String>,

    over: bool,
}

impl GameState {
    /// Fresh state at round 1, with an empty hand.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            stats: config.initial_stats,
            round: 1,
            hand: Hand::default(),
            selection: Selection::new(config.picks_per_turn),
            history: Vec::new(),
            over: false,
        }
    }

    /// Check whether the semester has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Put the game into its terminal state.
    pub fn finish(&mut self) {
        self.over = true;
        self.selection.clear();
    }

    /// Deal a new hand and reset the selection.
    ///
    /// Refused once the game is over.
    pub fn deal(
        &mut self,
        catalog: &CardCatalog,
        hand_size: usize,
        rng: &mut GameRng,
    ) -> Result<&Hand, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        self.hand = draw_hand(catalog, hand_size, rng);
        self.selection.clear();
        Ok(&self.hand)
    }

    /// Pick or unpick a card from the current hand.
    pub fn toggle(&mut self, id: CardId) -> Result<Toggle, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        if !self.hand.contains(id) {
            return Err(GameError::CardNotInHand(id));
        }
        Ok(self.selection.toggle(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!(state.round, 1);
        assert_eq!(state.stats, PlayerStats::INITIAL);
        assert!(state.hand.is_empty());
        assert_eq!(state.selection.limit(), 3);
        assert!(state.history.is_empty());
        assert!(!state.is_over());
    }

    #[test]
    fn test_deal_resets_selection() {
        let catalog = CardCatalog::standard();
        let mut rng = GameRng::new(42);
        let mut state = GameState::new(&GameConfig::default());

        let first = state.deal(&catalog, 5, &mut rng).unwrap().clone();
        let id = first.cards()[0].id;
        assert_eq!(state.toggle(id), Ok(Toggle::Added));

        state.deal(&catalog, 5, &mut rng).unwrap();
        assert!(state.selection.is_empty());
        assert_eq!(state.hand.len(), 5);
    }

    #[test]
    fn test_toggle_rejects_card_outside_hand() {
        let catalog = CardCatalog::standard();
        let mut state = GameState::new(&GameConfig::default());
        state.deal(&catalog, 5, &mut GameRng::new(1)).unwrap();

        let outside = catalog
            .iter()
            .map(|c| c.id)
            .find(|id| !state.hand.contains(*id))
            .unwrap();

        assert_eq!(state.toggle(outside), Err(GameError::CardNotInHand(outside)));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_finished_game_refuses_actions() {
        let catalog = CardCatalog::standard();
        let mut state = GameState::new(&GameConfig::default());
        state.deal(&catalog, 5, &mut GameRng::new(1)).unwrap();
        let id = state.hand.cards()[0].id;

        state.finish();
        assert!(state.is_over());
        assert_eq!(state.toggle(id), Err(GameError::GameOver));
        assert!(state.deal(&catalog, 5, &mut GameRng::new(1)).is_err());
    }
}
