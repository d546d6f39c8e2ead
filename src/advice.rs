//! The counselor's advice: one random tip, independent of game state.

use crate::core::GameRng;

/// The built-in tips.
pub const TIPS: &[&str] = &[
    "Don't drift in first year, don't panic in second. Try things now and regret less later.",
    "Scholarships aren't only about grades. The overall evaluation counts, so join a few activities.",
    "Don't fit in just to fit in. Good time alone beats bad company.",
    "Dating is part of college, but it isn't all of it. Keep your head.",
    "The two weeks before finals are when miracles happen. Don't give up!",
    "If you're unwell, take the day off. Your counselor is a reasonable person.",
    "Spend time in the library. There are opportunities there you won't expect (and air conditioning).",
    "Learn to budget, so the end of every month isn't instant noodles.",
    "Get along with your roommates. You'll be living together for four years.",
    "When you feel lost, go for a run. Exercise makes dopamine.",
    "English really matters. Pass the language exams early, don't leave them for senior year.",
    "Visit home when you can, or at least video call your parents.",
];

/// Picks tips uniformly at random.
#[derive(Clone, Copy, Debug)]
pub struct AdvicePicker {
    tips: &'static [&'static str],
}

impl AdvicePicker {
    /// Picker over the built-in tips.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(TIPS)
    }

    /// Picker over custom tips.
    ///
    /// Panics if `tips` is empty.
    #[must_use]
    pub fn new(tips: &'static [&'static str]) -> Self {
        assert!(!tips.is_empty(), "Advice list must not be empty");
        Self { tips }
    }

    /// All tips.
    #[must_use]
    pub fn tips(&self) -> &'static [&'static str] {
        self.tips
    }

    /// One tip, chosen uniformly.
    pub fn pick(&self, rng: &mut GameRng) -> &'static str {
        self.tips[rng.gen_index(self.tips.len())]
    }
}

impl Default for AdvicePicker {
    fn default() -> Self {
        Self::standard()
    }
}
