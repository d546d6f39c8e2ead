//! Hands: the cards offered for one week.
//!
//! A hand is drawn fresh every round by shuffling the whole catalog and
//! keeping the first `k` cards, so it never holds the same card twice.

use serde::Serialize;
use smallvec::SmallVec;

use super::selection::Selection;
use crate::cards::{CardCatalog, CardDefinition, CardId};
use crate::core::GameRng;

/// Inline capacity; the default hand holds 5.
type HandCards = SmallVec<[CardDefinition; 8]>;

/// The ordered cards offered this round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hand {
    cards: HandCards,
}

impl Hand {
    /// Create a hand from explicit cards.
    ///
    /// Panics if a card appears twice.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = CardDefinition>) -> Self {
        let cards: HandCards = cards.into_iter().collect();
        for (i, card) in cards.iter().enumerate() {
            assert!(
                cards[..i].iter().all(|other| other.id != card.id),
                "Card {} appears twice in a hand",
                card.id
            );
        }
        Self { cards }
    }

    /// Cards in offer order.
    #[must_use]
    pub fn cards(&self) -> &[CardDefinition] {
        &self.cards
    }

    /// Card ids in offer order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Find a card in the hand.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Check if the hand holds a card.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// The selected cards, in hand order.
    ///
    /// Selection order only drives display numbering; effects are applied
    /// in the order the cards were dealt. Ids not in the hand are skipped.
    #[must_use]
    pub fn selected(&self, selection: &Selection) -> Vec<CardDefinition> {
        self.cards
            .iter()
            .filter(|c| selection.contains(c.id))
            .copied()
            .collect()
    }
}

/// Draw a hand of `k` distinct cards.
///
/// Shuffles a copy of the whole catalog uniformly (Fisher–Yates) and keeps
/// the first `k`. If `k` exceeds the catalog, the whole catalog is dealt.
#[must_use]
pub fn draw_hand(catalog: &CardCatalog, k: usize, rng: &mut GameRng) -> Hand {
    let mut deck: Vec<CardDefinition> = catalog.as_slice().to_vec();
    rng.shuffle(&mut deck);
    deck.truncate(k);
    Hand {
        cards: deck.into_iter().collect(),
    }
}
