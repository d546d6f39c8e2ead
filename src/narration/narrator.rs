//! The narration seam and its fire-and-forget dispatcher.
//!
//! The host's speech engine sits behind [`Narrator`]. Game code never calls
//! it directly: it goes through [`Narration::narrate`], which hands the
//! work to the blocking pool and only logs failures. Nothing about
//! narration can fail a turn.

use std::sync::Arc;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::voice::{Utterance, Voice, VoiceProfile};

/// Why the host could not speak.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NarrationError {
    /// The host has no speech synthesis at all.
    #[error("speech synthesis is not supported")]
    Unsupported,

    /// The host has speech synthesis but nothing for this language.
    #[error("no voice for language {0}")]
    NoVoice(String),

    /// The speech engine reported an error.
    #[error("speech engine error: {0}")]
    Backend(String),
}

/// Host text-to-speech capability.
///
/// `speak` may block until playback is queued; the dispatcher always calls
/// it off the async workers.
pub trait Narrator: Send + Sync {
    /// Voices currently available. May be empty while the host loads them.
    fn voices(&self) -> Vec<Voice>;

    /// Stop whatever is being spoken.
    fn cancel(&self);

    /// Queue an utterance.
    fn speak(&self, utterance: &Utterance) -> Result<(), NarrationError>;
}

/// Narrator for hosts without speech synthesis.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedNarrator;

impl Narrator for UnsupportedNarrator {
    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn cancel(&self) {}

    fn speak(&self, _utterance: &Utterance) -> Result<(), NarrationError> {
        Err(NarrationError::Unsupported)
    }
}

/// Best-effort narration over a host [`Narrator`].
#[derive(Clone)]
pub struct Narration {
    narrator: Arc<dyn Narrator>,
    profile: VoiceProfile,
}

impl std::fmt::Debug for Narration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Narration")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl Narration {
    pub fn new(narrator: Arc<dyn Narrator>, profile: VoiceProfile) -> Self {
        Self { narrator, profile }
    }

    #[must_use]
    pub fn profile(&self) -> &VoiceProfile {
        &self.profile
    }

    /// Speak `text` now, interrupting anything already playing.
    ///
    /// Blocking. Prefer [`Narration::narrate`] from game code.
    pub fn speak_now(&self, text: &str) -> Result<(), NarrationError> {
        self.narrator.cancel();
        let utterance = self.profile.utterance(text, &self.narrator.voices());
        debug!(voice = ?utterance.voice.as_ref().map(|v| &v.name), "narrating");
        self.narrator.speak(&utterance)
    }

    /// Fire-and-forget narration.
    ///
    /// Runs on Tokio's blocking pool when a runtime is available and is
    /// skipped otherwise. Failures are logged and dropped. The returned
    /// handle may be ignored.
    pub fn narrate(&self, text: impl Into<String>) -> Option<JoinHandle<()>> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        let Ok(runtime) = Handle::try_current() else {
            debug!("no async runtime, narration skipped");
            return None;
        };

        let this = self.clone();
        Some(runtime.spawn_blocking(move || {
            if let Err(error) = this.speak_now(&text) {
                warn!(%error, "narration failed");
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        spoken: Mutex<Vec<Utterance>>,
        cancels: Mutex<usize>,
    }

    impl Narrator for Recorder {
        fn voices(&self) -> Vec<Voice> {
            vec![Voice::new("Google US English", "en-US")]
        }

        fn cancel(&self) {
            *self.cancels.lock().unwrap() += 1;
        }

        fn speak(&self, utterance: &Utterance) -> Result<(), NarrationError> {
            self.spoken.lock().unwrap().push(utterance.clone());
            Ok(())
        }
    }

    #[test]
    fn test_speak_now_cancels_then_speaks() {
        let recorder = Arc::new(Recorder::default());
        let narration = Narration::new(recorder.clone(), VoiceProfile::default());

        narration.speak_now("hello").unwrap();
        narration.speak_now("again").unwrap();

        let spoken = recorder.spoken.lock().unwrap();
        assert_eq!(spoken.len(), 2);
        assert_eq!(spoken[1].text, "again");
        assert_eq!(spoken[0].voice.as_ref().unwrap().name, "Google US English");
        assert_eq!(*recorder.cancels.lock().unwrap(), 2);
    }

    #[test]
    fn test_unsupported_reports_error() {
        let narration = Narration::new(Arc::new(UnsupportedNarrator), VoiceProfile::default());
        assert_eq!(narration.speak_now("hi"), Err(NarrationError::Unsupported));
    }

    #[test]
    fn test_narrate_without_runtime_is_skipped() {
        let narration = Narration::new(Arc::new(UnsupportedNarrator), VoiceProfile::default());
        assert!(narration.narrate("hi").is_none());
    }

    #[tokio::test]
    async fn test_narrate_swallows_failures() {
        let narration = Narration::new(Arc::new(UnsupportedNarrator), VoiceProfile::default());
        let handle = narration.narrate("hi").unwrap();
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn test_narrate_runs_in_background() {
        let recorder = Arc::new(Recorder::default());
        let narration = Narration::new(recorder.clone(), VoiceProfile::default());

        narration.narrate("background").unwrap().await.unwrap();
        assert_eq!(recorder.spoken.lock().unwrap()[0].text, "background");

        assert!(narration.narrate("").is_none());
    }
}
