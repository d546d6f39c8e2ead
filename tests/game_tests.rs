//! Whole-game integration tests.
//!
//! These drive the pure pieces (catalog, resolver, commentary) together
//! through the scenarios a real playthrough hits.

use campus_cards::cards::{CardCatalog, CardDefinition, Category};
use campus_cards::commentary::{lines, CommentaryEngine};
use campus_cards::core::{GameConfig, GameError, GameRng, GameState, PlayerStats};
use campus_cards::deck::{Hand, Selection};
use campus_cards::rules::{ReportCard, TurnResolver};

fn cards(catalog: &CardCatalog, keys: &[&str]) -> Vec<CardDefinition> {
    keys.iter()
        .map(|key| *catalog.get_by_key(key).unwrap_or_else(|| panic!("missing card {key}")))
        .collect()
}

fn pick_all(hand: &Hand, limit: usize) -> Selection {
    let mut selection = Selection::new(limit);
    for id in hand.ids().take(limit) {
        selection.toggle(id);
    }
    selection
}

/// Two study cards and a scholarship, from the starting stats.
#[test]
fn test_study_week_end_to_end() {
    let catalog = CardCatalog::standard();
    let resolver = TurnResolver::new(&GameConfig::default());
    let played = cards(&catalog, &["study_ai", "library", "scholarship"]);
    let hand = Hand::from_cards(played.iter().copied());

    let outcome = resolver
        .resolve(&hand, &pick_all(&hand, 3), PlayerStats::INITIAL, 1)
        .unwrap();

    assert_eq!(outcome.stats, PlayerStats::new(70, 30, 24, 35, 65));
    assert_eq!(outcome.round, 2);
    assert!(played.iter().filter(|c| c.category == Category::Study).count() >= 2);

    let engine = CommentaryEngine::standard();
    let mut rng = GameRng::new(11);
    for _ in 0..50 {
        let comment = engine.select(&outcome.stats, &outcome.played, &mut rng);
        assert!(
            lines::STUDY_HEAVY.contains(&comment.text.as_str()),
            "unexpected line {:?}",
            comment.text
        );
        assert_eq!(comment.references.len(), 2);
    }
}

/// A mood crisis outranks whatever was played.
#[test]
fn test_low_mood_fixture() {
    let catalog = CardCatalog::standard();
    let engine = CommentaryEngine::standard();
    let stats = PlayerStats::new(50, 30, 10, 80, 5);
    let mut rng = GameRng::new(3);

    for category in Category::ALL {
        let played: Vec<CardDefinition> = catalog.find_by_category(category).take(3).copied().collect();
        for _ in 0..20 {
            let comment = engine.select(&stats, &played, &mut rng);
            assert!(lines::LOW_MOOD.contains(&comment.text.as_str()));
            assert!(!lines::BALANCED.contains(&comment.text.as_str()));
        }
    }
}

#[test]
fn test_commentary_never_empty() {
    let catalog = CardCatalog::standard();
    let engine = CommentaryEngine::standard();
    let mut rng = GameRng::new(5);

    for seed in 0..200u64 {
        let mut draw = GameRng::new(seed);
        let stats = PlayerStats::new(
            draw.gen_index(101) as i32,
            draw.gen_index(101) as i32,
            draw.gen_index(101) as i32,
            draw.gen_index(101) as i32,
            draw.gen_index(101) as i32,
        );
        let hand = campus_cards::deck::draw_hand(&catalog, 3, &mut draw);
        let comment = engine.select(&stats, hand.cards(), &mut rng);
        assert!(!comment.text.is_empty());
    }
}

/// Fifty weeks, then graduation.
#[test]
fn test_full_semester() {
    let catalog = CardCatalog::standard();
    let config = GameConfig::default();
    let resolver = TurnResolver::new(&config);
    let mut rng = GameRng::new(2024);
    let mut state = GameState::new(&config);

    for week in 1..=config.max_rounds {
        assert_eq!(state.round, week);
        state.deal(&catalog, config.hand_size, &mut rng).unwrap();
        let ids: Vec<_> = state.hand.ids().take(config.picks_per_turn).collect();
        for id in ids {
            state.toggle(id).unwrap();
        }

        let outcome = resolver.apply(&mut state).unwrap();
        assert_eq!(outcome.round, week + 1);
        assert_eq!(outcome.game_over, week == config.max_rounds);
        for value in state.stats.iter().map(|(_, v)| v) {
            assert!((0..=100).contains(&value));
        }
    }

    assert!(state.is_over());
    assert_eq!(state.round, 51);
    assert_eq!(state.history.len(), 50);
    assert!(state.history[0].starts_with("Week 1: "));
    assert!(state.history[49].starts_with("Week 50: "));

    assert_eq!(resolver.apply(&mut state), Err(GameError::GameOver));
    assert_eq!(
        state.deal(&catalog, config.hand_size, &mut rng).map(|h| h.len()),
        Err(GameError::GameOver)
    );

    let report = ReportCard::for_state(&state).unwrap();
    assert_eq!(report.weeks, 50);
    assert_eq!(report.stats, state.stats);
}

#[test]
fn test_failed_submission_leaves_state_alone() {
    let catalog = CardCatalog::standard();
    let config = GameConfig::default();
    let resolver = TurnResolver::new(&config);
    let mut state = GameState::new(&config);
    state.deal(&catalog, 5, &mut GameRng::new(1)).unwrap();
    let first = state.hand.cards()[0].id;
    state.toggle(first).unwrap();
    let before = state.clone();

    assert_eq!(
        resolver.apply(&mut state),
        Err(GameError::SelectionIncomplete { selected: 1, required: 3 })
    );
    assert_eq!(state, before);
}
