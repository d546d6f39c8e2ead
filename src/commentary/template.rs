//! Commentary templates and the built-in template table.
//!
//! A template pairs a [`Condition`] with the lines the counselor may say
//! when it holds. Templates carry an explicit `priority` (lower is checked
//! first; equal priorities keep declaration order) and a [`Stacking`] mode
//! that says whether lower-priority matches may add to the pool.

use serde::Serialize;

use super::condition::Condition;
use super::lines;
use crate::cards::Category;
use crate::core::Stat;

/// Largest pool that is treated as exclusive by [`Stacking::for_pool_size`].
pub const EXCLUSIVE_POOL_MAX: usize = 4;

/// How a matching template combines with later matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stacking {
    /// Stop scanning once this template matches.
    Exclusive,
    /// Add this template's lines and keep scanning.
    Pooled,
}

impl Stacking {
    /// Stacking implied by pool size alone: small pools are specific,
    /// high-priority templates and stop the scan; pools of five or more
    /// lines keep accumulating.
    #[must_use]
    pub fn for_pool_size(lines: usize) -> Self {
        if lines <= EXCLUSIVE_POOL_MAX {
            Stacking::Exclusive
        } else {
            Stacking::Pooled
        }
    }
}

/// One rule of the commentary table.
#[derive(Clone, Debug)]
pub struct CommentaryTemplate {
    /// Name for logging and tests.
    pub name: &'static str,

    /// Scan order; lower goes first.
    pub priority: u32,

    pub condition: Condition,

    pub stacking: Stacking,

    /// Candidate lines. Never empty.
    pub lines: &'static [&'static str],
}

impl CommentaryTemplate {
    /// Create a template. Stacking defaults to what the pool size implies.
    ///
    /// Panics if `lines` is empty.
    pub fn new(
        name: &'static str,
        priority: u32,
        condition: Condition,
        lines: &'static [&'static str],
    ) -> Self {
        assert!(!lines.is_empty(), "Template {name} has no lines");
        Self {
            name,
            priority,
            condition,
            stacking: Stacking::for_pool_size(lines.len()),
            lines,
        }
    }

    /// Stop the scan when this template matches.
    #[must_use]
    pub fn exclusive(mut self) -> Self {
        self.stacking = Stacking::Exclusive;
        self
    }

    /// Keep scanning after this template matches.
    #[must_use]
    pub fn pooled(mut self) -> Self {
        self.stacking = Stacking::Pooled;
        self
    }
}

/// Template names used by the built-in table.
pub mod names {
    pub const BROKE: &str = "broke";
    pub const LOW_MOOD: &str = "low_mood";
    pub const EXHAUSTED: &str = "exhausted";
    pub const STUDY_HEAVY: &str = "study_heavy";
    pub const LEISURE_HEAVY: &str = "leisure_heavy";
    pub const WORK_HEAVY: &str = "work_heavy";
    pub const SOCIAL_HEAVY: &str = "social_heavy";
    pub const BALANCED: &str = "balanced";
}

/// The built-in table.
///
/// Extreme states come first, then behavior over the played cards, then a
/// catch-all that always matches.
#[must_use]
pub fn standard_templates() -> Vec<CommentaryTemplate> {
    vec![
        CommentaryTemplate::new(names::BROKE, 10, Condition::below(Stat::Wealth, 10), lines::BROKE)
            .exclusive(),
        CommentaryTemplate::new(names::LOW_MOOD, 20, Condition::below(Stat::Mood, 20), lines::LOW_MOOD)
            .exclusive(),
        CommentaryTemplate::new(names::EXHAUSTED, 30, Condition::below(Stat::Energy, 20), lines::EXHAUSTED)
            .exclusive(),
        CommentaryTemplate::new(
            names::STUDY_HEAVY,
            40,
            Condition::played_at_least(Category::Study, 2),
            lines::STUDY_HEAVY,
        )
        .exclusive(),
        CommentaryTemplate::new(
            names::LEISURE_HEAVY,
            50,
            Condition::played_at_least(Category::Leisure, 2),
            lines::LEISURE_HEAVY,
        )
        .exclusive(),
        CommentaryTemplate::new(
            names::WORK_HEAVY,
            60,
            Condition::played_at_least(Category::Work, 2),
            lines::WORK_HEAVY,
        )
        .exclusive(),
        CommentaryTemplate::new(
            names::SOCIAL_HEAVY,
            70,
            Condition::played_at_least(Category::Social, 2),
            lines::SOCIAL_HEAVY,
        )
        .exclusive(),
        CommentaryTemplate::new(names::BALANCED, u32::MAX, Condition::Always, lines::BALANCED).pooled(),
    ]
}
