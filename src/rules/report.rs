//! End-of-game report card.

use serde::Serialize;

use crate::core::{GameState, PlayerStats, Stat};

/// Final transcript shown once the semester is over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportCard {
    pub title: &'static str,
    /// Weeks played.
    pub weeks: u32,
    pub stats: PlayerStats,
}

impl ReportCard {
    /// Build the report for a finished game, or `None` while it runs.
    #[must_use]
    pub fn for_state(state: &GameState) -> Option<Self> {
        state.is_over().then(|| Self {
            title: "Graduation Day 🎓",
            weeks: state.round.saturating_sub(1),
            stats: state.stats,
        })
    }

    /// One-line recap: `"You made it through 50 weeks of college life."`
    #[must_use]
    pub fn headline(&self) -> String {
        format!("You made it through {} weeks of college life.", self.weeks)
    }

    /// `(label, value)` rows of the transcript.
    pub fn lines(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (label(stat), self.stats.get(stat)))
    }
}

fn label(stat: Stat) -> &'static str {
    match stat {
        Stat::Wealth => "Wealth",
        Stat::Connections => "Connections",
        Stat::Achievements => "Achievements",
        Stat::Energy => "Energy",
        Stat::Mood => "Mood",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_no_report_while_playing() {
        let state = GameState::new(&GameConfig::default());
        assert!(ReportCard::for_state(&state).is_none());
    }

    #[test]
    fn test_report_for_finished_game() {
        let mut state = GameState::new(&GameConfig::default());
        state.round = 51;
        state.stats = PlayerStats::new(12, 40, 66, 5, 30);
        state.finish();

        let report = ReportCard::for_state(&state).unwrap();
        assert_eq!(report.weeks, 50);
        assert_eq!(report.headline(), "You made it through 50 weeks of college life.");

        let rows: Vec<_> = report.lines().collect();
        assert_eq!(rows[0], ("Wealth", 12));
        assert_eq!(rows[2], ("Achievements", 66));
        assert_eq!(rows.len(), 5);
    }
}
