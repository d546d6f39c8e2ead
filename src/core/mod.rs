//! Core game types: stats, RNG, configuration, errors, state.
//!
//! Nothing in here knows about commentary or narration; these are the
//! pieces every other module builds on.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod stats;

pub use config::GameConfig;
pub use error::GameError;
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
pub use stats::{clamp_stat, PlayerStats, Stat, StatDelta, STAT_MAX, STAT_MIN};
