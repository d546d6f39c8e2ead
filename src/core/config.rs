//! Game configuration.
//!
//! `GameConfig` fixes the shape of a playthrough: how many cards are
//! offered per week, how many must be played, how long the semester runs,
//! and where the stats start. The counselor's artificial delays live here
//! too, so tests can shrink them to zero.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::stats::PlayerStats;

/// Complete configuration for one playthrough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards offered each round (K).
    pub hand_size: usize,

    /// Cards that must be chosen before a turn can end (M).
    pub picks_per_turn: usize,

    /// Last playable round. The game is over once the round exceeds it.
    pub max_rounds: u32,

    /// Stats at the start of the game.
    pub initial_stats: PlayerStats,

    /// Simulated "thinking" time before commentary arrives.
    #[serde(with = "millis")]
    pub commentary_delay: Duration,

    /// Simulated "thinking" time before advice arrives.
    #[serde(with = "millis")]
    pub advice_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            picks_per_turn: 3,
            max_rounds: 50,
            initial_stats: PlayerStats::INITIAL,
            commentary_delay: Duration::from_millis(600),
            advice_delay: Duration::from_millis(300),
        }
    }
}

impl GameConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        assert!(hand_size > 0, "Hand must hold at least 1 card");
        self.hand_size = hand_size;
        self
    }

    /// Set how many cards are played per turn.
    #[must_use]
    pub fn with_picks_per_turn(mut self, picks: usize) -> Self {
        assert!(picks > 0, "Must play at least 1 card per turn");
        self.picks_per_turn = picks;
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Game must last at least 1 round");
        self.max_rounds = rounds;
        self
    }

    /// Set the starting stats.
    #[must_use]
    pub fn with_initial_stats(mut self, stats: PlayerStats) -> Self {
        self.initial_stats = stats;
        self
    }

    /// Set both counselor delays at once.
    #[must_use]
    pub fn with_delays(mut self, commentary: Duration, advice: Duration) -> Self {
        self.commentary_delay = commentary;
        self.advice_delay = advice;
        self
    }

    /// Drop the artificial delays entirely.
    #[must_use]
    pub fn instant(self) -> Self {
        self.with_delays(Duration::ZERO, Duration::ZERO)
    }

    /// Check the relationships between fields.
    ///
    /// Panics if a turn would need more cards than a hand offers, or if
    /// the hand is empty.
    pub fn validate(&self, catalog_len: usize) {
        assert!(self.hand_size > 0, "Hand must hold at least 1 card");
        assert!(self.picks_per_turn > 0, "Must play at least 1 card per turn");
        assert!(
            self.picks_per_turn <= self.hand_size,
            "Cannot pick {} cards from a hand of {}",
            self.picks_per_turn,
            self.hand_size
        );
        assert!(
            self.hand_size <= catalog_len,
            "Hand of {} exceeds catalog of {}",
            self.hand_size,
            catalog_len
        );
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
