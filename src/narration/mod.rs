//! Speech narration of counselor text.
//!
//! Narration is a best-effort side channel. The host's speech engine is
//! reached through the [`Narrator`] trait; [`Narration`] picks a voice,
//! builds the utterance, and dispatches it without blocking the caller.

pub mod narrator;
pub mod voice;

pub use narrator::{Narration, NarrationError, Narrator, UnsupportedNarrator};
pub use voice::{Utterance, Voice, VoiceProfile};
