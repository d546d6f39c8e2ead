//! The player's in-progress pick from the current hand.

use serde::Serialize;
use smallvec::SmallVec;

use crate::cards::CardId;

/// What a toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// The card was added at the end.
    Added,
    /// The card was already picked and has been removed.
    Removed,
    /// The selection was full; nothing changed.
    Ignored,
}

/// Up to `limit` picked card ids, in pick order.
///
/// ```
/// use campus_cards::cards::CardId;
/// use campus_cards::deck::{Selection, Toggle};
///
/// let mut selection = Selection::new(2);
/// assert_eq!(selection.toggle(CardId::new("gym")), Toggle::Added);
/// assert_eq!(selection.toggle(CardId::new("cat")), Toggle::Added);
/// assert_eq!(selection.toggle(CardId::new("walk")), Toggle::Ignored);
/// assert!(selection.is_complete());
///
/// assert_eq!(selection.toggle(CardId::new("gym")), Toggle::Removed);
/// assert_eq!(selection.number_of(CardId::new("cat")), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Selection {
    ids: SmallVec<[CardId; 4]>,
    limit: usize,
}

impl Selection {
    /// Empty selection that holds at most `limit` cards.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            ids: SmallVec::new(),
            limit,
        }
    }

    /// Pick or unpick a card.
    ///
    /// Over-selection is silently ignored rather than treated as an error.
    pub fn toggle(&mut self, id: CardId) -> Toggle {
        if let Some(position) = self.ids.iter().position(|&picked| picked == id) {
            self.ids.remove(position);
            Toggle::Removed
        } else if self.ids.len() < self.limit {
            self.ids.push(id);
            Toggle::Added
        } else {
            Toggle::Ignored
        }
    }

    /// True when exactly `limit` cards are picked.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.ids.len() == self.limit
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.ids.contains(&id)
    }

    /// 1-based pick number of a card, for display.
    #[must_use]
    pub fn number_of(&self, id: CardId) -> Option<usize> {
        self.ids.iter().position(|&picked| picked == id).map(|i| i + 1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Picked ids in pick order.
    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: CardId = CardId::new("a");
    const B: CardId = CardId::new("b");
    const C: CardId = CardId::new("c");
    const D: CardId = CardId::new("d");

    #[test]
    fn test_toggle_adds_until_full() {
        let mut selection = Selection::new(3);
        assert_eq!(selection.toggle(A), Toggle::Added);
        assert_eq!(selection.toggle(B), Toggle::Added);
        assert!(!selection.is_complete());
        assert_eq!(selection.toggle(C), Toggle::Added);
        assert!(selection.is_complete());

        assert_eq!(selection.toggle(D), Toggle::Ignored);
        assert_eq!(selection.ids(), &[A, B, C]);
    }

    #[test]
    fn test_toggle_removes_selected() {
        let mut selection = Selection::new(3);
        selection.toggle(A);
        selection.toggle(B);

        assert_eq!(selection.toggle(A), Toggle::Removed);
        assert_eq!(selection.ids(), &[B]);
        assert!(!selection.contains(A));
    }

    #[test]
    fn test_remove_when_full_frees_a_slot() {
        let mut selection = Selection::new(2);
        selection.toggle(A);
        selection.toggle(B);
        selection.toggle(A);

        assert_eq!(selection.toggle(C), Toggle::Added);
        assert_eq!(selection.number_of(B), Some(1));
        assert_eq!(selection.number_of(C), Some(2));
        assert_eq!(selection.number_of(A), None);
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new(3);
        selection.toggle(A);
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.limit(), 3);
    }
}
