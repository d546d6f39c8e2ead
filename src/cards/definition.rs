//! Card definitions - static activity data.
//!
//! A `CardDefinition` is one activity a student can spend a week on:
//! its title, flavor text, category, glyph, and the stat changes it
//! causes. Definitions are plain `const` data and never change at runtime.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerStats, StatDelta};

/// Stable identifier of a catalog card.
///
/// Identifiers are string keys (`"library"`, `"part_time_job"`) that stay
/// the same across builds, so they are safe to hand to a presentation
/// layer. Ids arriving from outside are resolved through
/// [`CardCatalog::resolve`](super::CardCatalog::resolve).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardId(&'static str);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// Get the raw key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Activity category. Commentary and reference tags key off these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Study,
    Social,
    Work,
    Leisure,
    Event,
}

impl Category {
    /// All categories.
    pub const ALL: [Category; 5] = [
        Category::Study,
        Category::Social,
        Category::Work,
        Category::Leisure,
        Category::Event,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Study => "study",
            Category::Social => "social",
            Category::Work => "work",
            Category::Leisure => "leisure",
            Category::Event => "event",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use campus_cards::cards::{CardDefinition, CardId, Category};
/// use campus_cards::core::{PlayerStats, Stat, StatDelta};
///
/// const WALK: CardDefinition = CardDefinition::new(
///     CardId::new("walk"),
///     "Evening Walk",
///     "Laps around the track with headphones on.",
///     Category::Leisure,
///     "🚶",
///     StatDelta::from_pairs(&[(Stat::Mood, 5), (Stat::Energy, 5)]),
/// );
///
/// assert_eq!(WALK.play(PlayerStats::INITIAL).mood, 85);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardDefinition {
    /// Unique key within a catalog.
    pub id: CardId,

    /// Display title.
    pub title: &'static str,

    /// One line of flavor text.
    pub description: &'static str,

    pub category: Category,

    /// Emoji shown on the card face.
    pub glyph: &'static str,

    /// Stat changes applied when the card is played.
    pub effects: StatDelta,
}

impl CardDefinition {
    /// Create a card definition.
    #[must_use]
    pub const fn new(
        id: CardId,
        title: &'static str,
        description: &'static str,
        category: Category,
        glyph: &'static str,
        effects: StatDelta,
    ) -> Self {
        Self {
            id,
            title,
            description,
            category,
            glyph,
            effects,
        }
    }

    /// Apply this card's effects to a stat vector.
    #[must_use]
    pub fn play(&self, stats: PlayerStats) -> PlayerStats {
        stats.apply(&self.effects)
    }
}

/// Count cards of a category.
#[must_use]
pub fn count_category(cards: &[CardDefinition], category: Category) -> usize {
    cards.iter().filter(|c| c.category == category).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Stat;

    const LIBRARY: CardDefinition = CardDefinition::new(
        CardId::new("library"),
        "All-Nighter at the Library",
        "Cramming for finals until sunrise.",
        Category::Study,
        "📚",
        StatDelta::from_pairs(&[(Stat::Achievements, 8), (Stat::Energy, -20), (Stat::Mood, -10)]),
    );

    #[test]
    fn test_card_id() {
        let id = CardId::new("library");
        assert_eq!(id.as_str(), "library");
        assert_eq!(format!("{}", id), "library");
    }

    #[test]
    fn test_play_applies_effects() {
        let stats = LIBRARY.play(PlayerStats::INITIAL);
        assert_eq!(stats.achievements, 18);
        assert_eq!(stats.energy, 60);
        assert_eq!(stats.mood, 70);
        assert_eq!(stats.wealth, 50);
    }

    #[test]
    fn test_count_category() {
        let mut other = LIBRARY;
        other.category = Category::Work;
        let cards = [LIBRARY, other, LIBRARY];

        assert_eq!(count_category(&cards, Category::Study), 2);
        assert_eq!(count_category(&cards, Category::Work), 1);
        assert_eq!(count_category(&cards, Category::Event), 0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(LIBRARY).unwrap();
        assert_eq!(json["id"], "library");
        assert_eq!(json["category"], "study");
        assert_eq!(json["effects"]["achievements"], 8);
        assert!(json["effects"].get("wealth").is_none());
    }
}
