//! Voices, voice profiles, and utterances.

use serde::{Deserialize, Serialize};

/// A voice the host can speak with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    /// BCP 47 tag as reported by the host, e.g. `"en-US"`.
    pub language: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
        }
    }
}

/// How narration should sound.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceProfile {
    /// Speed multiplier.
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    /// Preferred language, matched loosely against host voices.
    pub language: String,
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self {
            rate: 1.1,
            pitch: 1.0,
            volume: 1.0,
            language: "en-US".to_string(),
        }
    }
}

impl VoiceProfile {
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    /// Choose the best host voice for this profile.
    ///
    /// A voice qualifies if its language mentions the profile's primary
    /// language or region subtag (`"en"` or `"US"` for `"en-US"`). Among
    /// those, a name containing "Google" wins, then "Microsoft", then the
    /// first qualifying voice.
    #[must_use]
    pub fn pick_voice<'a>(&self, voices: &'a [Voice]) -> Option<&'a Voice> {
        let mut subtags = self.language.split(['-', '_']).filter(|s| !s.is_empty());
        let primary = subtags.next()?;
        let region = subtags.next();

        let candidates: Vec<&Voice> = voices
            .iter()
            .filter(|v| {
                v.language.contains(primary) || region.is_some_and(|r| v.language.contains(r))
            })
            .collect();

        ["Google", "Microsoft"]
            .iter()
            .find_map(|vendor| candidates.iter().find(|v| v.name.contains(vendor)))
            .or_else(|| candidates.first())
            .copied()
    }

    /// Build an utterance for `text` given the host's voices.
    ///
    /// Without a matching voice the utterance carries only the profile's
    /// language and the host picks a voice itself.
    pub fn utterance(&self, text: impl Into<String>, voices: &[Voice]) -> Utterance {
        let voice = self.pick_voice(voices).cloned();
        let language = voice
            .as_ref()
            .map_or_else(|| self.language.clone(), |v| v.language.clone());

        Utterance {
            text: text.into(),
            rate: self.rate,
            pitch: self.pitch,
            volume: self.volume,
            language,
            voice,
        }
    }
}

/// Everything a host needs to speak one piece of text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    pub language: String,
    pub voice: Option<Voice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_voices() -> Vec<Voice> {
        vec![
            Voice::new("Alex", "en-US"),
            Voice::new("Microsoft Aria", "en-US"),
            Voice::new("Google Deutsch", "de-DE"),
            Voice::new("Google US English", "en-US"),
            Voice::new("Ting-Ting", "zh-CN"),
        ]
    }

    #[test]
    fn test_default_profile() {
        let profile = VoiceProfile::default();
        assert!((profile.rate - 1.1).abs() < f32::EPSILON);
        assert!((profile.pitch - 1.0).abs() < f32::EPSILON);
        assert_eq!(profile.language, "en-US");
    }

    #[test]
    fn test_prefers_google_then_microsoft() {
        let voices = host_voices();
        let profile = VoiceProfile::default();
        assert_eq!(profile.pick_voice(&voices).unwrap().name, "Google US English");

        let without_google: Vec<_> = voices
            .iter()
            .filter(|v| !v.name.starts_with("Google"))
            .cloned()
            .collect();
        assert_eq!(profile.pick_voice(&without_google).unwrap().name, "Microsoft Aria");
    }

    #[test]
    fn test_falls_back_to_first_match() {
        let voices = host_voices();
        let profile = VoiceProfile::default().with_language("zh-CN");
        assert_eq!(profile.pick_voice(&voices).unwrap().name, "Ting-Ting");
    }

    #[test]
    fn test_no_match_keeps_profile_language() {
        let voices = vec![Voice::new("Google Deutsch", "de-DE")];
        let profile = VoiceProfile::default().with_language("ja-JP");

        let utterance = profile.utterance("hello", &voices);
        assert!(utterance.voice.is_none());
        assert_eq!(utterance.language, "ja-JP");
    }

    #[test]
    fn test_utterance_uses_voice_language() {
        let voices = vec![Voice::new("Google English", "en_GB")];
        let profile = VoiceProfile::default().with_language("en");

        let utterance = profile.utterance("hi", &voices);
        assert_eq!(utterance.language, "en_GB");
        assert_eq!(utterance.text, "hi");
    }

    #[test]
    fn test_empty_language_matches_nothing() {
        let profile = VoiceProfile::default().with_language("");
        assert!(profile.pick_voice(&host_voices()).is_none());
    }
}
