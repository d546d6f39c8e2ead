//! Turn resolution.
//!
//! Ending a turn applies the selected cards to the stats, advances the
//! round, and records a summary. [`TurnResolver::resolve`] is the pure
//! transition; [`TurnResolver::apply`] runs it against a [`GameState`]
//! and commits the result.
//!
//! ## Ordering
//!
//! Cards are applied in *hand* order, with a clamp after every card.
//! Because of the intermediate clamps, two orders of the same cards can
//! disagree when a stat hits a bound partway through; hand order makes
//! the result reproducible.

use serde::Serialize;
use tracing::{debug, info};

use crate::cards::CardDefinition;
use crate::core::{GameConfig, GameError, GameState, PlayerStats};
use crate::deck::{Hand, Selection};

/// Result of one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    /// Stats after every played card.
    pub stats: PlayerStats,

    /// The round that comes next.
    pub round: u32,

    /// History line for the round just played.
    pub summary: String,

    /// Cards played, in the order they were applied.
    pub played: Vec<CardDefinition>,

    /// True if this was the last round.
    pub game_over: bool,
}

/// Applies selections and tracks the end of the semester.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnResolver {
    picks_per_turn: usize,
    max_rounds: u32,
}

impl TurnResolver {
    /// Create a resolver for a configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            picks_per_turn: config.picks_per_turn,
            max_rounds: config.max_rounds,
        }
    }

    /// Cards that must be picked per turn.
    #[must_use]
    pub fn picks_per_turn(&self) -> usize {
        self.picks_per_turn
    }

    /// Last playable round.
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Check if `round` lies past the end of the game.
    #[must_use]
    pub fn is_terminal(&self, round: u32) -> bool {
        round > self.max_rounds
    }

    /// Compute the outcome of ending the turn, without touching any state.
    ///
    /// Fails if the round is past the end, if the selection is not exactly
    /// full, or if a selected card is not in the hand.
    pub fn resolve(
        &self,
        hand: &Hand,
        selection: &Selection,
        stats: PlayerStats,
        round: u32,
    ) -> Result<TurnOutcome, GameError> {
        if self.is_terminal(round) {
            return Err(GameError::GameOver);
        }
        if selection.len() != self.picks_per_turn {
            return Err(GameError::SelectionIncomplete {
                selected: selection.len(),
                required: self.picks_per_turn,
            });
        }
        if let Some(&missing) = selection.ids().iter().find(|id| !hand.contains(**id)) {
            return Err(GameError::CardNotInHand(missing));
        }

        let played = hand.selected(selection);
        let stats = played.iter().fold(stats, |stats, card| card.play(stats));
        let next_round = round + 1;

        Ok(TurnOutcome {
            stats,
            round: next_round,
            summary: summarize(round, &played),
            played,
            game_over: self.is_terminal(next_round),
        })
    }

    /// Resolve the turn held in `state` and commit it.
    ///
    /// On success the stats, round, and history are updated, the selection
    /// is cleared, and the game is finished if that was the last round. On
    /// failure `state` is untouched.
    pub fn apply(&self, state: &mut GameState) -> Result<TurnOutcome, GameError> {
        if state.is_over() {
            return Err(GameError::GameOver);
        }
        let outcome = self.resolve(&state.hand, &state.selection, state.stats, state.round)?;

        debug!(
            round = state.round,
            before = ?state.stats,
            after = ?outcome.stats,
            "turn resolved"
        );

        state.stats = outcome.stats;
        state.round = outcome.round;
        state.history.push(outcome.summary.clone());
        state.selection.clear();

        if outcome.game_over {
            info!(rounds = self.max_rounds, "semester complete");
            state.finish();
        }

        Ok(outcome)
    }
}

/// History line for a round: `"Week 3: Gym Session, Sleep In, Lottery Win"`.
#[must_use]
pub fn summarize(round: u32, played: &[CardDefinition]) -> String {
    let titles: Vec<&str> = played.iter().map(|c| c.title).collect();
    format!("Week {}: {}", round, titles.join(", "))
}
