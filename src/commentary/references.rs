//! Reference tags: "further reading" links attached to commentary.
//!
//! Purely cosmetic. The tags depend only on which categories were played,
//! checked in the order study, work, event; the first category present
//! decides the tags.

use serde::Serialize;

use crate::cards::{CardDefinition, Category};

/// At most this many tags accompany a comment.
pub const MAX_REFERENCES: usize = 2;

/// Placeholder link target.
pub const PLACEHOLDER_URI: &str = "#";

/// A titled link shown under the commentary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ReferenceTag {
    pub title: &'static str,
    pub uri: &'static str,
}

impl ReferenceTag {
    const fn placeholder(title: &'static str) -> Self {
        Self {
            title,
            uri: PLACEHOLDER_URI,
        }
    }
}

const STUDY_TAGS: &[ReferenceTag] = &[
    ReferenceTag::placeholder("Graduate-exam trends for 2025"),
    ReferenceTag::placeholder("How to revise efficiently for finals"),
];

const WORK_TAGS: &[ReferenceTag] = &[ReferenceTag::placeholder("Part-time job pitfalls for students")];

const EVENT_TAGS: &[ReferenceTag] = &[ReferenceTag::placeholder("Campus incident handbook")];

/// Tags for a set of played cards.
#[must_use]
pub fn reference_tags(played: &[CardDefinition]) -> Vec<ReferenceTag> {
    let has = |category: Category| played.iter().any(|c| c.category == category);

    let tags: &[ReferenceTag] = if has(Category::Study) {
        STUDY_TAGS
    } else if has(Category::Work) {
        WORK_TAGS
    } else if has(Category::Event) {
        EVENT_TAGS
    } else {
        &[]
    };

    tags.iter().take(MAX_REFERENCES).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, CardId};

    fn played(keys: &[&'static str]) -> Vec<CardDefinition> {
        let catalog = CardCatalog::standard();
        keys.iter()
            .map(|&k| *catalog.get(CardId::new(k)).unwrap())
            .collect()
    }

    #[test]
    fn test_study_wins() {
        let tags = reference_tags(&played(&["loan", "tutor", "lecture"]));
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].title, "Graduate-exam trends for 2025");
        assert!(tags.iter().all(|t| t.uri == "#"));
    }

    #[test]
    fn test_work_before_event() {
        let tags = reference_tags(&played(&["loan", "tutor", "gym"]));
        assert_eq!(tags, vec![WORK_TAGS[0]]);
    }

    #[test]
    fn test_event_only() {
        let tags = reference_tags(&played(&["cat", "gym", "party"]));
        assert_eq!(tags, vec![EVENT_TAGS[0]]);
    }

    #[test]
    fn test_no_tags() {
        assert!(reference_tags(&played(&["gym", "party", "sleep"])).is_empty());
        assert!(reference_tags(&[]).is_empty());
    }
}
