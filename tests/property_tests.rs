//! Property tests for the pure game functions.
//!
//! Stat clamping, hand drawing, and selection toggling must hold their
//! invariants for any input, not just the hand-picked cases in the unit
//! tests.

use campus_cards::cards::{CardCatalog, CardId};
use campus_cards::core::{GameRng, PlayerStats, Stat, StatDelta, STAT_MAX, STAT_MIN};
use campus_cards::deck::{draw_hand, Selection, Toggle};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

fn any_stats() -> impl Strategy<Value = PlayerStats> {
    (0..=100i32, 0..=100i32, 0..=100i32, 0..=100i32, 0..=100i32)
        .prop_map(|(w, c, a, e, m)| PlayerStats::new(w, c, a, e, m))
}

fn any_delta() -> impl Strategy<Value = StatDelta> {
    proptest::collection::vec(
        (0..Stat::ALL.len(), prop_oneof![Just(None), any::<i32>().prop_map(Some)]),
        0..8,
    )
    .prop_map(|changes| {
        changes.into_iter().fold(StatDelta::NONE, |delta, (index, change)| match change {
            Some(amount) => delta.with(Stat::ALL[index], amount),
            None => delta,
        })
    })
}

proptest! {
    #[test]
    fn property_apply_stays_in_bounds(stats in any_stats(), delta in any_delta()) {
        let result = stats.apply(&delta);

        for stat in Stat::ALL {
            let value = result.get(stat);
            prop_assert!((STAT_MIN..=STAT_MAX).contains(&value), "{:?} = {}", stat, value);
            if delta.get(stat).is_none() {
                prop_assert_eq!(value, stats.get(stat));
            }
        }
    }

    #[test]
    fn property_draw_hand_is_distinct(seed in any::<u64>(), k in 0usize..=52) {
        let catalog = CardCatalog::standard();
        let hand = draw_hand(&catalog, k, &mut GameRng::new(seed));

        prop_assert_eq!(hand.len(), k);
        let ids: FxHashSet<CardId> = hand.ids().collect();
        prop_assert_eq!(ids.len(), k);
        prop_assert!(hand.ids().all(|id| catalog.contains(id)));
    }

    #[test]
    fn property_selection_never_exceeds_limit(
        limit in 1usize..=5,
        toggles in proptest::collection::vec(0usize..8, 0..40),
    ) {
        let catalog = CardCatalog::standard();
        let pool: Vec<CardId> = catalog.iter().take(8).map(|c| c.id).collect();
        let mut selection = Selection::new(limit);

        for index in toggles {
            let id = pool[index];
            let was_selected = selection.contains(id);
            let was_full = selection.len() == limit;

            let toggle = selection.toggle(id);
            prop_assert!(selection.len() <= limit);

            match toggle {
                Toggle::Removed => {
                    prop_assert!(was_selected && !selection.contains(id));
                }
                Toggle::Added => {
                    prop_assert!(!was_selected && !was_full);
                }
                Toggle::Ignored => {
                    prop_assert!(!was_selected && was_full);
                }
            }
        }
    }
}

#[test]
fn test_clamp_at_boundary() {
    let stats = PlayerStats::new(5, 30, 10, 80, 98);
    let delta = StatDelta::NONE.with(Stat::Wealth, -40).with(Stat::Mood, 10);

    let result = stats.apply(&delta);
    assert_eq!(result.wealth, 0);
    assert_eq!(result.mood, 100);
    assert_eq!(result.connections, 30);
}
