//! Player statistics: the five bounded stats and the clamped update rule.
//!
//! ## Bounds
//!
//! Every stat lives in `[STAT_MIN, STAT_MAX]` = `[0, 100]`. Bounds are
//! enforced when a delta is applied (clamp-on-write), so a `PlayerStats`
//! produced by [`PlayerStats::apply`] is always in range.
//!
//! ## Deltas
//!
//! A [`StatDelta`] is a sparse map from [`Stat`] to a signed change.
//! Absent stats are left untouched. Deltas are `const`-constructible so
//! the card catalog can be plain static data:
//!
//! ```
//! use campus_cards::core::{PlayerStats, Stat, StatDelta};
//!
//! let delta = StatDelta::from_pairs(&[(Stat::Wealth, -40), (Stat::Mood, 5)]);
//! let stats = PlayerStats::new(5, 30, 10, 80, 98).apply(&delta);
//!
//! assert_eq!(stats.wealth, 0);
//! assert_eq!(stats.mood, 100);
//! assert_eq!(stats.energy, 80);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lowest value any stat can take.
pub const STAT_MIN: i32 = 0;

/// Highest value any stat can take.
pub const STAT_MAX: i32 = 100;

/// One of the five player stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Wealth,
    Connections,
    Achievements,
    Energy,
    Mood,
}

impl Stat {
    /// All stats in declaration order.
    pub const ALL: [Stat; 5] = [
        Stat::Wealth,
        Stat::Connections,
        Stat::Achievements,
        Stat::Energy,
        Stat::Mood,
    ];

    /// Stable position of this stat in [`Stat::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in serialized data.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Stat::Wealth => "wealth",
            Stat::Connections => "connections",
            Stat::Achievements => "achievements",
            Stat::Energy => "energy",
            Stat::Mood => "mood",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The player's stat vector.
///
/// Fields are public for reading; mutation should go through
/// [`PlayerStats::apply`] so the bounds hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawStats")]
pub struct PlayerStats {
    pub wealth: i32,
    pub connections: i32,
    pub achievements: i32,
    pub energy: i32,
    pub mood: i32,
}

impl PlayerStats {
    /// Stats at the start of a new game.
    pub const INITIAL: PlayerStats = PlayerStats::new(50, 30, 10, 80, 80);

    /// Create a stat vector. Values are clamped into range.
    #[must_use]
    pub const fn new(wealth: i32, connections: i32, achievements: i32, energy: i32, mood: i32) -> Self {
        Self {
            wealth: clamp_stat(wealth),
            connections: clamp_stat(connections),
            achievements: clamp_stat(achievements),
            energy: clamp_stat(energy),
            mood: clamp_stat(mood),
        }
    }

    /// Read one stat.
    #[must_use]
    pub const fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Wealth => self.wealth,
            Stat::Connections => self.connections,
            Stat::Achievements => self.achievements,
            Stat::Energy => self.energy,
            Stat::Mood => self.mood,
        }
    }

    fn slot_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Wealth => &mut self.wealth,
            Stat::Connections => &mut self.connections,
            Stat::Achievements => &mut self.achievements,
            Stat::Energy => &mut self.energy,
            Stat::Mood => &mut self.mood,
        }
    }

    /// Apply a delta, clamping every touched stat into `[0, 100]`.
    ///
    /// Stats absent from the delta (or with a zero change) are copied
    /// unchanged. Each stat is independent, so iteration order is
    /// irrelevant.
    #[must_use]
    pub fn apply(mut self, delta: &StatDelta) -> Self {
        for (stat, change) in delta.iter() {
            if change == 0 {
                continue;
            }
            let slot = self.slot_mut(stat);
            *slot = clamp_stat(slot.saturating_add(change));
        }
        self
    }

    /// Iterate `(stat, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }
}

/// Unchecked wire form; every value is clamped on the way in.
#[derive(Deserialize)]
struct RawStats {
    wealth: i32,
    connections: i32,
    achievements: i32,
    energy: i32,
    mood: i32,
}

impl From<RawStats> for PlayerStats {
    fn from(raw: RawStats) -> Self {
        PlayerStats::new(raw.wealth, raw.connections, raw.achievements, raw.energy, raw.mood)
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Clamp a raw value into the stat range.
#[must_use]
pub const fn clamp_stat(value: i32) -> i32 {
    if value < STAT_MIN {
        STAT_MIN
    } else if value > STAT_MAX {
        STAT_MAX
    } else {
        value
    }
}

/// Sparse stat changes carried by a card.
///
/// `None` means "no effect on that stat". Deltas are const so a card
/// table can be declared as a `static`. Serialized as a map of the stats
/// present, e.g. `{"wealth": 20, "energy": -10}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Stat, i32>", into = "BTreeMap<Stat, i32>")]
pub struct StatDelta {
    changes: [Option<i32>; 5],
}

impl StatDelta {
    /// A delta with no effect.
    pub const NONE: StatDelta = StatDelta { changes: [None; 5] };

    /// Build a delta from `(stat, change)` pairs.
    ///
    /// A stat listed twice keeps the last change.
    #[must_use]
    pub const fn from_pairs(pairs: &[(Stat, i32)]) -> Self {
        let mut changes = [None; 5];
        let mut i = 0;
        while i < pairs.len() {
            let (stat, change) = pairs[i];
            changes[stat.index()] = Some(change);
            i += 1;
        }
        Self { changes }
    }

    /// Return a copy with one more change set.
    #[must_use]
    pub const fn with(mut self, stat: Stat, change: i32) -> Self {
        self.changes[stat.index()] = Some(change);
        self
    }

    /// The change for one stat, if any.
    #[must_use]
    pub const fn get(&self, stat: Stat) -> Option<i32> {
        self.changes[stat.index()]
    }

    /// Check whether the delta touches nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.iter().all(Option::is_none)
    }

    /// Iterate the stats present in this delta.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL
            .into_iter()
            .filter_map(move |stat| self.get(stat).map(|change| (stat, change)))
    }
}

impl From<BTreeMap<Stat, i32>> for StatDelta {
    fn from(map: BTreeMap<Stat, i32>) -> Self {
        map.into_iter()
            .fold(StatDelta::NONE, |delta, (stat, change)| delta.with(stat, change))
    }
}

impl From<StatDelta> for BTreeMap<Stat, i32> {
    fn from(delta: StatDelta) -> Self {
        delta.iter().collect()
    }
}
