//! Hands and selections.
//!
//! - [`draw_hand`]: deal `k` distinct cards from a catalog
//! - [`Hand`]: the cards offered this round
//! - [`Selection`]: the player's pick from the hand, capped at `M`

pub mod hand;
pub mod selection;

pub use hand::{draw_hand, Hand};
pub use selection::{Selection, Toggle};
