//! The session controller.
//!
//! A [`Session`] owns one playthrough: the state, the RNG, the counselor,
//! and the optional narrator. All mutation goes through it.
//!
//! ## Turn flow
//!
//! 1. The player toggles cards with [`Session::toggle`].
//! 2. [`Session::end_turn`] resolves the turn synchronously, deals the
//!    next hand, and dispatches commentary on the new stats.
//! 3. [`Session::await_commentary`] collects the remark.
//!
//! While commentary is outstanding, `end_turn` is refused with
//! [`GameError::CommentaryPending`]. Outside a tokio runtime commentary is
//! computed inline and is never pending.
//!
//! ```
//! use campus_cards::core::GameConfig;
//! use campus_cards::session::SessionBuilder;
//!
//! let mut session = SessionBuilder::new()
//!     .config(GameConfig::default().instant())
//!     .build(7);
//!
//! let picks: Vec<_> = session.hand().ids().take(3).collect();
//! for id in picks {
//!     session.toggle_card(id).unwrap();
//! }
//! let outcome = session.end_turn().unwrap();
//! assert_eq!(outcome.round, 2);
//! assert_eq!(session.history().len(), 1);
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::advice::AdvicePicker;
use crate::cards::{CardCatalog, CardId};
use crate::commentary::{lines, Commentary, CommentaryEngine, ReferenceTag};
use crate::core::{GameConfig, GameError, GameRng, GameState, PlayerStats};
use crate::counselor::Counselor;
use crate::deck::{Hand, Selection, Toggle};
use crate::narration::Narration;
use crate::rules::{ReportCard, TurnOutcome, TurnResolver};

/// Builder for creating a [`Session`].
pub struct SessionBuilder {
    config: GameConfig,
    catalog: Option<CardCatalog>,
    engine: Option<CommentaryEngine>,
    advice: Option<AdvicePicker>,
    narration: Option<Narration>,
    auto_narrate: bool,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            catalog: None,
            engine: None,
            advice: None,
            narration: None,
            auto_narrate: false,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn commentary(mut self, engine: CommentaryEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn advice(mut self, advice: AdvicePicker) -> Self {
        self.advice = Some(advice);
        self
    }

    /// Attach a narrator. With `auto` set, every collected commentary is
    /// spoken as soon as it arrives.
    pub fn narration(mut self, narration: Narration, auto: bool) -> Self {
        self.narration = Some(narration);
        self.auto_narrate = auto;
        self
    }

    /// Build the session and deal the first hand.
    ///
    /// Panics if the config cannot be played with the catalog.
    pub fn build(self, seed: u64) -> Session {
        let catalog = self.catalog.unwrap_or_default();
        self.config.validate(catalog.len());

        let mut counselor = Counselor::new(&self.config);
        if let Some(engine) = self.engine {
            counselor = counselor.with_engine(engine);
        }
        if let Some(advice) = self.advice {
            counselor = counselor.with_advice(advice);
        }

        let mut session = Session {
            resolver: TurnResolver::new(&self.config),
            state: GameState::new(&self.config),
            rng: GameRng::new(seed),
            catalog: Arc::new(catalog),
            config: self.config,
            counselor,
            narration: self.narration,
            auto_narrate: self.auto_narrate,
            commentary: Commentary::welcome(),
            pending: None,
            advice: None,
        };
        session.deal();
        session
    }
}

/// One playthrough.
pub struct Session {
    config: GameConfig,
    catalog: Arc<CardCatalog>,
    resolver: TurnResolver,
    counselor: Counselor,
    narration: Option<Narration>,
    auto_narrate: bool,
    state: GameState,
    rng: GameRng,
    commentary: Commentary,
    pending: Option<JoinHandle<Commentary>>,
    advice: Option<&'static str>,
}

impl Session {
    /// Session with the default catalog and counselor.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        SessionBuilder::new().config(config).build(seed)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn stats(&self) -> PlayerStats {
        self.state.stats
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn hand(&self) -> &Hand {
        &self.state.hand
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    pub fn history(&self) -> &[String] {
        &self.state.history
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The last collected commentary.
    pub fn commentary(&self) -> &Commentary {
        &self.commentary
    }

    /// Check whether commentary for the last turn is still outstanding.
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// The line to show in the counselor box.
    pub fn commentary_text(&self) -> &str {
        if self.is_thinking() {
            lines::THINKING
        } else {
            &self.commentary.text
        }
    }

    /// The last tip handed out, if any.
    pub fn last_advice(&self) -> Option<&'static str> {
        self.advice
    }

    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Pick or unpick a card by its catalog key.
    pub fn toggle(&mut self, key: &str) -> Result<Toggle, GameError> {
        let id = self.catalog.resolve(key)?;
        self.toggle_card(id)
    }

    /// Pick or unpick a card from the current hand.
    pub fn toggle_card(&mut self, id: CardId) -> Result<Toggle, GameError> {
        let toggle = self.state.toggle(id)?;
        debug!(card = %id, ?toggle, picked = self.state.selection.len(), "selection changed");
        Ok(toggle)
    }

    /// Check whether the end-turn action is available.
    pub fn can_end_turn(&self) -> bool {
        !self.state.is_over() && !self.is_thinking() && self.state.selection.is_complete()
    }

    /// End the turn.
    ///
    /// Stats, round, and history are committed before commentary is
    /// dispatched, so commentary always sees post-turn stats. On error
    /// nothing changes.
    pub fn end_turn(&mut self) -> Result<TurnOutcome, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }
        if self.is_thinking() {
            return Err(GameError::CommentaryPending);
        }

        let outcome = self.resolver.apply(&mut self.state)?;
        info!(summary = %outcome.summary, stats = ?outcome.stats, "turn ended");

        self.dispatch_commentary(&outcome);

        if !outcome.game_over {
            self.deal();
        }
        Ok(outcome)
    }

    fn dispatch_commentary(&mut self, outcome: &TurnOutcome) {
        let rng = self.rng.fork();
        let stats = outcome.stats;
        let played = outcome.played.clone();

        match Handle::try_current() {
            Ok(runtime) => {
                let counselor = self.counselor.clone();
                self.pending = Some(runtime.spawn(async move { counselor.comment(stats, played, rng).await }));
            }
            Err(_) => {
                let mut rng = rng;
                let engine = self.counselor.engine();
                let result = panic::catch_unwind(AssertUnwindSafe(|| engine.select(&stats, &played, &mut rng)));
                self.commentary = result.unwrap_or_else(|_| {
                    warn!("commentary failed, using fallback");
                    Commentary::offline()
                });
                if self.auto_narrate {
                    self.narrate_commentary();
                }
            }
        }
    }

    fn deal(&mut self) {
        let round = self.state.round;
        match self.state.deal(&self.catalog, self.config.hand_size, &mut self.rng) {
            Ok(hand) => {
                let titles: Vec<&str> = hand.iter().map(|c| c.title).collect();
                debug!(round, ?titles, "hand drawn");
            }
            Err(err) => debug!(%err, "no hand dealt"),
        }
    }

    /// Wait for outstanding commentary and store it.
    ///
    /// Returns the current commentary immediately when nothing is
    /// pending. A failed commentary task is replaced by the offline line.
    /// Dropping this future early leaves the request pending.
    pub async fn await_commentary(&mut self) -> &Commentary {
        if let Some(handle) = self.pending.as_mut() {
            let result = handle.await;
            self.pending = None;
            self.commentary = match result {
                Ok(commentary) => commentary,
                Err(err) => {
                    warn!(%err, "commentary failed, using fallback");
                    Commentary::offline()
                }
            };
            if self.auto_narrate {
                self.narrate_commentary();
            }
        }
        &self.commentary
    }

    /// Ask the counselor for a tip.
    pub async fn request_advice(&mut self) -> &'static str {
        let rng = self.rng.fork();
        let tip = self.counselor.advise(rng).await;
        self.advice = Some(tip);
        tip
    }

    /// Speak the current commentary, if a narrator is attached.
    pub fn narrate_commentary(&self) -> Option<JoinHandle<()>> {
        self.narration.as_ref()?.narrate(self.commentary.text.clone())
    }

    /// Speak a tip, if a narrator is attached.
    pub fn narrate_advice(&self) -> Option<JoinHandle<()>> {
        self.narration.as_ref()?.narrate(self.advice?)
    }

    /// Final report, once the semester is over.
    pub fn report_card(&self) -> Option<ReportCard> {
        ReportCard::for_state(&self.state)
    }

    /// Start over from initial defaults with a new seed.
    ///
    /// Outstanding commentary is aborted and its result discarded.
    pub fn restart(&mut self, seed: u64) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.state = GameState::new(&self.config);
        self.rng = GameRng::new(seed);
        self.commentary = Commentary::welcome();
        self.advice = None;
        info!(seed, "session restarted");
        self.deal();
    }

    /// Serializable view for a presentation layer.
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        let references: &[ReferenceTag] = if self.is_thinking() {
            &[]
        } else {
            &self.commentary.references
        };
        SessionSnapshot {
            stats: self.state.stats,
            round: self.state.round,
            max_rounds: self.config.max_rounds,
            hand: self.state.hand.ids().collect(),
            selection: self.state.selection.ids(),
            history: &self.state.history,
            commentary: self.commentary_text(),
            references,
            advice: self.advice,
            thinking: self.is_thinking(),
            can_end_turn: self.can_end_turn(),
            over: self.state.is_over(),
        }
    }
}

/// Everything a presentation layer needs to draw the session.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub stats: PlayerStats,
    pub round: u32,
    pub max_rounds: u32,
    pub hand: Vec<CardId>,
    pub selection: &'a [CardId],
    pub history: &'a [String],
    pub commentary: &'a str,
    pub references: &'a [ReferenceTag],
    pub advice: Option<&'static str>,
    pub thinking: bool,
    pub can_end_turn: bool,
    pub over: bool,
}
