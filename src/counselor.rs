//! The counselor: commentary and advice, delivered after a short pause.
//!
//! The pause only makes the counselor feel like it is thinking; it has no
//! effect on what is said. Both calls take owned inputs and their own RNG
//! fork, so the returned futures are `'static` and can be spawned.

use std::sync::Arc;
use std::time::Duration;

use crate::advice::AdvicePicker;
use crate::cards::CardDefinition;
use crate::commentary::{Commentary, CommentaryEngine};
use crate::core::{GameConfig, GameRng, PlayerStats};

/// Produces commentary and advice asynchronously.
#[derive(Clone, Debug)]
pub struct Counselor {
    engine: Arc<CommentaryEngine>,
    advice: AdvicePicker,
    commentary_delay: Duration,
    advice_delay: Duration,
}

impl Counselor {
    /// Counselor with the built-in templates and tips.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            engine: Arc::new(CommentaryEngine::standard()),
            advice: AdvicePicker::standard(),
            commentary_delay: config.commentary_delay,
            advice_delay: config.advice_delay,
        }
    }

    /// Replace the commentary templates.
    #[must_use]
    pub fn with_engine(mut self, engine: CommentaryEngine) -> Self {
        self.engine = Arc::new(engine);
        self
    }

    /// Replace the tips.
    #[must_use]
    pub fn with_advice(mut self, advice: AdvicePicker) -> Self {
        self.advice = advice;
        self
    }

    #[must_use]
    pub fn engine(&self) -> &CommentaryEngine {
        &self.engine
    }

    #[must_use]
    pub fn advice(&self) -> &AdvicePicker {
        &self.advice
    }

    /// Comment on a finished turn.
    ///
    /// `stats` must be the post-turn stats.
    pub async fn comment(&self, stats: PlayerStats, played: Vec<CardDefinition>, mut rng: GameRng) -> Commentary {
        pause(self.commentary_delay).await;
        self.engine.select(&stats, &played, &mut rng)
    }

    /// One random tip.
    pub async fn advise(&self, mut rng: GameRng) -> &'static str {
        pause(self.advice_delay).await;
        self.advice.pick(&mut rng)
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
