//! Commentary conditions.
//!
//! A condition looks at the stats *after* a turn and the cards that were
//! just played, and says whether a template applies. Conditions are plain
//! data so the template table can be inspected and tested; games that
//! need something the variants cannot express use [`Condition::Custom`].

use crate::cards::{count_category, CardDefinition, Category};
use crate::core::{PlayerStats, Stat};

/// Predicate signature for [`Condition::Custom`].
pub type ConditionFn = fn(&PlayerStats, &[CardDefinition]) -> bool;

/// When a commentary template applies.
#[derive(Clone, Debug)]
pub enum Condition {
    // === Stat Thresholds ===

    /// Stat is strictly below the threshold.
    StatBelow { stat: Stat, threshold: i32 },

    /// Stat is at or above the threshold.
    StatAtLeast { stat: Stat, threshold: i32 },

    // === Played Cards ===

    /// At least `count` played cards have the category.
    PlayedAtLeast { category: Category, count: usize },

    /// Some played card has the category.
    Played(Category),

    // === Combinators ===

    /// All conditions must be true.
    All(Vec<Condition>),

    /// At least one condition must be true.
    Any(Vec<Condition>),

    /// Condition must be false.
    Not(Box<Condition>),

    // === Special ===

    /// Always matches. The catch-all template uses this.
    Always,

    /// Never matches (disabled template).
    Never,

    /// Arbitrary predicate.
    Custom(ConditionFn),
}

impl Condition {
    /// `stat < threshold`.
    pub fn below(stat: Stat, threshold: i32) -> Self {
        Self::StatBelow { stat, threshold }
    }

    /// `stat >= threshold`.
    pub fn at_least(stat: Stat, threshold: i32) -> Self {
        Self::StatAtLeast { stat, threshold }
    }

    /// At least `count` cards of `category` were played.
    pub fn played_at_least(category: Category, count: usize) -> Self {
        Self::PlayedAtLeast { category, count }
    }

    /// Create an AND condition.
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::All(conditions.into_iter().collect())
    }

    /// Create an OR condition.
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    /// Negate this condition.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Check the condition against post-turn stats and the played cards.
    #[must_use]
    pub fn matches(&self, ctx: &CommentaryContext<'_>) -> bool {
        match self {
            Condition::StatBelow { stat, threshold } => ctx.stats.get(*stat) < *threshold,

            Condition::StatAtLeast { stat, threshold } => ctx.stats.get(*stat) >= *threshold,

            Condition::PlayedAtLeast { category, count } => {
                count_category(ctx.played, *category) >= *count
            }

            Condition::Played(category) => ctx.played.iter().any(|c| c.category == *category),

            Condition::All(conditions) => conditions.iter().all(|c| c.matches(ctx)),

            Condition::Any(conditions) => conditions.iter().any(|c| c.matches(ctx)),

            Condition::Not(inner) => !inner.matches(ctx),

            Condition::Always => true,

            Condition::Never => false,

            Condition::Custom(predicate) => predicate(ctx.stats, ctx.played),
        }
    }
}

/// What a condition is evaluated against.
#[derive(Clone, Copy, Debug)]
pub struct CommentaryContext<'a> {
    /// Stats after the turn was applied.
    pub stats: &'a PlayerStats,
    /// Cards played this turn.
    pub played: &'a [CardDefinition],
}

impl<'a> CommentaryContext<'a> {
    pub fn new(stats: &'a PlayerStats, played: &'a [CardDefinition]) -> Self {
        Self { stats, played }
    }
}
