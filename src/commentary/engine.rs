//! Commentary selection.
//!
//! The engine scans its templates by ascending priority. Every matching
//! template adds its lines to a pool; an [`Exclusive`](Stacking::Exclusive)
//! match ends the scan. One line is then drawn uniformly from the pool.
//!
//! ```
//! use campus_cards::commentary::{lines, CommentaryEngine};
//! use campus_cards::core::{GameRng, PlayerStats};
//!
//! let engine = CommentaryEngine::standard();
//! let stats = PlayerStats::new(50, 30, 10, 80, 5);
//!
//! let comment = engine.select(&stats, &[], &mut GameRng::new(1));
//! assert!(lines::LOW_MOOD.contains(&comment.text.as_str()));
//! ```

use serde::Serialize;

use super::condition::CommentaryContext;
use super::lines;
use super::references::{reference_tags, ReferenceTag};
use super::template::{standard_templates, CommentaryTemplate, Stacking};
use crate::cards::CardDefinition;
use crate::core::{GameRng, PlayerStats};

/// A counselor remark plus its reference tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Commentary {
    pub text: String,
    pub references: Vec<ReferenceTag>,
}

impl Commentary {
    /// Commentary with no references.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            references: Vec::new(),
        }
    }

    /// The line shown at the start of a game.
    #[must_use]
    pub fn welcome() -> Self {
        Self::plain(lines::WELCOME)
    }

    /// The line shown when commentary failed.
    #[must_use]
    pub fn offline() -> Self {
        Self::plain(lines::OFFLINE)
    }
}

/// Ordered template table.
#[derive(Clone, Debug)]
pub struct CommentaryEngine {
    templates: Vec<CommentaryTemplate>,
}

impl CommentaryEngine {
    /// Engine over the built-in templates.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_templates())
    }

    /// Engine over custom templates.
    ///
    /// Templates are ordered by priority; ties keep the given order.
    #[must_use]
    pub fn new(mut templates: Vec<CommentaryTemplate>) -> Self {
        templates.sort_by_key(|t| t.priority);
        Self { templates }
    }

    /// Templates in scan order.
    #[must_use]
    pub fn templates(&self) -> &[CommentaryTemplate] {
        &self.templates
    }

    /// Templates that contribute to the pool, in scan order.
    #[must_use]
    pub fn contributing(&self, stats: &PlayerStats, played: &[CardDefinition]) -> Vec<&CommentaryTemplate> {
        let ctx = CommentaryContext::new(stats, played);
        let mut matched = Vec::new();

        for template in &self.templates {
            if !template.condition.matches(&ctx) {
                continue;
            }
            matched.push(template);
            if template.stacking == Stacking::Exclusive {
                break;
            }
        }

        matched
    }

    /// Every line that could be chosen for this turn.
    ///
    /// Falls back to [`lines::KEEP_GOING`] if nothing matched.
    #[must_use]
    pub fn candidate_lines(&self, stats: &PlayerStats, played: &[CardDefinition]) -> Vec<&'static str> {
        let pool: Vec<&'static str> = self
            .contributing(stats, played)
            .into_iter()
            .flat_map(|t| t.lines.iter().copied())
            .collect();

        if pool.is_empty() {
            vec![lines::KEEP_GOING]
        } else {
            pool
        }
    }

    /// Pick the counselor's remark for a turn.
    ///
    /// `stats` are the stats *after* the turn. Never fails and never
    /// returns an empty line.
    pub fn select(&self, stats: &PlayerStats, played: &[CardDefinition], rng: &mut GameRng) -> Commentary {
        let pool = self.candidate_lines(stats, played);
        let text = rng.choose(&pool).copied().unwrap_or(lines::KEEP_GOING);

        Commentary {
            text: text.to_string(),
            references: reference_tags(played),
        }
    }
}

impl Default for CommentaryEngine {
    fn default() -> Self {
        Self::standard()
    }
}
