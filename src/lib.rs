//! # campus-cards
//!
//! A single-player campus life card game. Each week the player is dealt a
//! hand of activities, picks three, and lives with what they do to five
//! bounded stats. A counselor comments on every week and hands out tips on
//! request; remarks can be read aloud by a host speech backend.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: Stat math, drawing, selection, and commentary are plain
//!    functions over small `Copy` data. Only the session mutates state.
//!
//! 2. **Deterministic**: All randomness flows through a seeded [`GameRng`];
//!    the same seed and the same picks replay the same game.
//!
//! 3. **Static data**: Cards, commentary templates, and tips are `const`
//!    tables that can be swapped out through builders.
//!
//! ## Modules
//!
//! - `core`: Stats, RNG, configuration, errors, game state
//! - `cards`: Card definitions and the catalog
//! - `deck`: Hand drawing and card selection
//! - `rules`: Turn resolution and the final report card
//! - `commentary`: Rule-based counselor remarks
//! - `advice`: Random tips
//! - `narration`: Speech backend contract and voice selection
//! - `counselor`: Delayed async commentary and advice
//! - `session`: The single-owner game controller

pub mod core;
pub mod cards;
pub mod deck;
pub mod rules;
pub mod commentary;
pub mod advice;
pub mod narration;
pub mod counselor;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameRngState, GameState,
    PlayerStats, Stat, StatDelta, STAT_MAX, STAT_MIN,
};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, Category};

pub use crate::deck::{draw_hand, Hand, Selection, Toggle};

pub use crate::rules::{ReportCard, TurnOutcome, TurnResolver};

pub use crate::commentary::{Commentary, CommentaryEngine, CommentaryTemplate, Condition, Stacking};

pub use crate::advice::AdvicePicker;

pub use crate::narration::{Narration, NarrationError, Narrator, VoiceProfile};

pub use crate::counselor::Counselor;

pub use crate::session::{Session, SessionBuilder, SessionSnapshot};
