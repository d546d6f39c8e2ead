//! The card catalog: every activity a week can hold.
//!
//! [`STANDARD_CARDS`] is the built-in set. A [`CardCatalog`] indexes a set
//! of definitions by id and is what hands are drawn from. Catalogs are
//! read-only once built.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, Category};
use crate::core::{GameError, Stat, StatDelta};

use super::definition::Category::{Event, Leisure, Social, Study, Work};
use crate::core::Stat::{Achievements, Connections, Energy, Mood, Wealth};

const fn card(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    glyph: &'static str,
    effects: &[(Stat, i32)],
) -> CardDefinition {
    CardDefinition::new(
        CardId::new(id),
        title,
        description,
        category,
        glyph,
        StatDelta::from_pairs(effects),
    )
}

/// The built-in activity cards.
pub static STANDARD_CARDS: [CardDefinition; 52] = [
    // Study
    card("study_ai", "Learn AI Engineering", "Digging into transformer architectures.", Study, "🤖",
        &[(Achievements, 6), (Energy, -15), (Mood, -5)]),
    card("library", "All-Nighter at the Library", "Cramming for finals until sunrise.", Study, "📚",
        &[(Achievements, 8), (Energy, -20), (Mood, -10)]),
    card("english", "IELTS Prep", "Getting ready to study abroad.", Study, "🔤",
        &[(Achievements, 5), (Wealth, -10), (Energy, -10)]),
    card("math_contest", "Modeling Contest", "Three days, three nights. Survive and you win.", Study, "📐",
        &[(Achievements, 15), (Energy, -40), (Mood, -15)]),
    card("lecture", "Guest Lecture", "A Nobel laureate is in town.", Study, "🎤",
        &[(Achievements, 3), (Energy, -5), (Mood, 5)]),
    card("scholarship", "Scholarship Application", "Endless forms to fill in.", Study, "💰",
        &[(Wealth, 20), (Energy, -10)]),
    card("skip_class", "Skip Class", "Nobody will miss you in that lecture.", Study, "🚪",
        &[(Energy, 5), (Achievements, -2)]),
    card("group_project", "Group Project", "Doing the work and the arguing.", Study, "👥",
        &[(Achievements, 5), (Mood, -15), (Energy, -15)]),
    card("coding", "Grind LeetCode", "Whatever it takes to land the big tech offer.", Study, "💻",
        &[(Achievements, 7), (Energy, -15), (Mood, -5)]),
    card("thesis", "Write the Thesis", "The plagiarism score just won't go down.", Study, "📝",
        &[(Achievements, 10), (Energy, -25), (Mood, -20)]),
    card("lab_work", "Lab Grunt Work", "Washing test tubes for the senior students.", Study, "🧪",
        &[(Connections, 5), (Achievements, 4), (Energy, -20)]),
    card("online_course", "Online Certificate", "Another Coursera certificate for the pile.", Study, "🎓",
        &[(Achievements, 4), (Wealth, -5)]),
    card("reading", "Read the Classics", "Philosophy by the lake.", Study, "📖",
        &[(Achievements, 2), (Mood, 10), (Energy, -5)]),
    card("cet6", "Language Exam", "Can you pass it with zero prep?", Study, "📝",
        &[(Achievements, 4), (Energy, -10)]),
    card("exchange", "Exchange Application", "A mountain of application paperwork.", Study, "✈️",
        &[(Achievements, 5), (Energy, -10)]),
    // Work
    card("part_time_job", "Food Delivery Shifts", "Running errands for pocket money.", Work, "🛵",
        &[(Wealth, 10), (Energy, -20), (Achievements, -1)]),
    card("tutor", "Private Tutoring", "Teaching math to a very bored kid.", Work, "👨‍🏫",
        &[(Wealth, 15), (Energy, -15), (Mood, -5)]),
    card("internship", "Big Tech Internship", "A free trial of the 996 lifestyle.", Work, "💼",
        &[(Wealth, 20), (Achievements, 10), (Energy, -30), (Mood, -10)]),
    card("startup", "Startup Project", "Slide decks and investor pitches.", Work, "🚀",
        &[(Wealth, -10), (Achievements, 15), (Energy, -25)]),
    card("streamer", "Part-Time Streamer", "Nobody is watching, but you keep going.", Work, "📹",
        &[(Wealth, 5), (Connections, 5), (Energy, -10)]),
    card("counselor_helper", "Counselor's Assistant", "Odd jobs in exchange for goodwill.", Work, "📋",
        &[(Connections, 8), (Energy, -10), (Achievements, 2)]),
    card("second_hand", "Resell Secondhand", "Flipping used textbooks and gadgets.", Work, "📦",
        &[(Wealth, 8), (Energy, -5)]),
    card("campus_agent", "Campus Sales Rep", "Pushing phone plans and broadband.", Work, "📱",
        &[(Wealth, 12), (Connections, -5), (Energy, -10)]),
    card("photo_gig", "Photo Shoots", "Portrait sessions for classmates.", Work, "📷",
        &[(Wealth, 10), (Connections, 3), (Energy, -15)]),
    card("program_outsource", "Freelance Coding", "Building someone else's capstone project.", Work, "⌨️",
        &[(Wealth, 25), (Energy, -25), (Mood, -10)]),
    // Social
    card("club", "Club Fair", "A hundred clubs, all shouting at once.", Social, "🎪",
        &[(Connections, 10), (Energy, -10)]),
    card("date", "Sweet Date", "Dinner, shopping, and a movie.", Social, "❤️",
        &[(Mood, 20), (Wealth, -20), (Connections, 2)]),
    card("party", "Dorm Dinner", "Hot pot for the whole floor!", Social, "🍲",
        &[(Connections, 5), (Mood, 10), (Wealth, -15)]),
    card("student_union", "Student Union Election", "Where every favor is remembered.", Social, "👔",
        &[(Connections, 15), (Mood, -10), (Energy, -20)]),
    card("networking", "Alumni Mixer", "Faces to remember, cards to hand out.", Social, "🥂",
        &[(Connections, 12), (Wealth, -10), (Energy, -10)]),
    card("volunteer", "Volunteering", "An afternoon at the retirement home.", Social, "🤝",
        &[(Connections, 5), (Mood, 15), (Energy, -15)]),
    card("confession", "Grand Confession", "Candles arranged under their window.", Social, "🕯️",
        &[(Mood, -20), (Connections, -5), (Energy, -10)]),
    card("blind_date", "Dorm Mixer", "A get-together with the dorm next door.", Social, "👫",
        &[(Connections, 8), (Wealth, -10), (Mood, 5)]),
    card("gossip", "Campus Gossip", "Scrolling the anonymous confessions board.", Social, "🍉",
        &[(Mood, 5), (Energy, -5)]),
    card("team_building", "Class Outing", "Awkward icebreaker games.", Social, "🚌",
        &[(Connections, 6), (Wealth, -5), (Energy, -10)]),
    // Leisure
    card("gaming", "All-Night Gaming", "No sleep until we win.", Leisure, "🎮",
        &[(Mood, 15), (Energy, -25), (Achievements, -2)]),
    card("sleep", "Sleep In", "Straight through to two in the afternoon.", Leisure, "😴",
        &[(Energy, 25), (Achievements, -5), (Mood, 5)]),
    card("travel", "Speedrun Vacation", "Eight landmarks in twenty-four hours.", Leisure, "🚆",
        &[(Mood, 20), (Wealth, -25), (Energy, -30)]),
    card("concert", "Music Festival", "Dancing in the mud until dawn.", Leisure, "🎸",
        &[(Mood, 25), (Wealth, -30), (Energy, -20)]),
    card("gym", "Gym Session", "Health is the only real capital.", Leisure, "💪",
        &[(Energy, 10), (Mood, 5), (Wealth, -5)]),
    card("drama", "Binge a Series", "A whole season in one sitting.", Leisure, "📺",
        &[(Mood, 10), (Energy, -10), (Achievements, -1)]),
    card("shopping", "Shopping Spree", "The big sale got you again.", Leisure, "🛍️",
        &[(Mood, 15), (Wealth, -30)]),
    card("ktv", "All-Night Karaoke", "Singing yourself hoarse until sunrise.", Leisure, "🎤",
        &[(Mood, 12), (Wealth, -15), (Energy, -20)]),
    card("billiards", "Shoot Pool", "An elegant way to waste an evening.", Leisure, "🎱",
        &[(Mood, 8), (Wealth, -5)]),
    card("internet_cafe", "Internet Cafe Overnight", "It feels like the old days.", Leisure, "💻",
        &[(Mood, 10), (Wealth, -5), (Energy, -25)]),
    card("walk", "Evening Walk", "Laps around the track with headphones on.", Leisure, "🚶",
        &[(Mood, 5), (Energy, 5)]),
    // Events
    card("loan", "Campus Loan", "Easy money now... never touch it!", Event, "💸",
        &[(Wealth, 50), (Mood, -30), (Connections, -20)]),
    card("illness", "Down with a Fever", "Three days flat on your back in the dorm.", Event, "🤒",
        &[(Energy, -30), (Mood, -10), (Wealth, -5)]),
    card("lost_phone", "Lost Phone", "Your mood hits rock bottom.", Event, "📱",
        &[(Wealth, -40), (Mood, -20)]),
    card("winning", "Lottery Win", "Luck is off the charts!", Event, "🎟️",
        &[(Wealth, 30), (Mood, 20)]),
    card("fail_exam", "Failed an Exam", "See you at the retake.", Event, "❌",
        &[(Achievements, -10), (Mood, -15)]),
    card("cat", "Pet a Campus Cat", "A stray cat picked you.", Event, "🐱",
        &[(Mood, 10), (Energy, -2)]),
];

/// Indexed, read-only set of card definitions.
///
/// ## Example
///
/// ```
/// use campus_cards::cards::{CardCatalog, CardId, Category};
///
/// let catalog = CardCatalog::standard();
///
/// let library = catalog.get(CardId::new("library")).unwrap();
/// assert_eq!(library.category, Category::Study);
/// assert!(catalog.resolve("no_such_card").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    index: FxHashMap<&'static str, usize>,
}

impl CardCatalog {
    /// Catalog of the built-in cards.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_cards(STANDARD_CARDS)
    }

    /// Build a catalog from definitions, keeping their order.
    ///
    /// Panics if two cards share an id.
    pub fn from_cards(cards: impl IntoIterator<Item = CardDefinition>) -> Self {
        let cards: Vec<CardDefinition> = cards.into_iter().collect();
        let mut index = FxHashMap::default();
        for (position, card) in cards.iter().enumerate() {
            if index.insert(card.id.as_str(), position).is_some() {
                panic!("Card with ID {:?} already registered", card.id);
            }
        }
        Self { cards, index }
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.get_by_key(id.as_str())
    }

    /// Look up a card by its raw key.
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&CardDefinition> {
        self.index.get(key).map(|&position| &self.cards[position])
    }

    /// Turn an externally supplied key into a catalog id.
    pub fn resolve(&self, key: &str) -> Result<CardId, GameError> {
        self.get_by_key(key)
            .map(|card| card.id)
            .ok_or_else(|| GameError::UnknownCard(key.to_string()))
    }

    /// Check if a card id is in the catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(id.as_str())
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[CardDefinition] {
        &self.cards
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Cards of one category.
    pub fn find_by_category(&self, category: Category) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter().filter(move |c| c.category == category)
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = CardCatalog::standard();
        assert_eq!(catalog.len(), 52);

        let count = |category| catalog.find_by_category(category).count();
        assert_eq!(count(Study), 15);
        assert_eq!(count(Work), 10);
        assert_eq!(count(Social), 10);
        assert_eq!(count(Leisure), 11);
        assert_eq!(count(Event), 6);
    }

    #[test]
    fn test_every_card_has_an_effect() {
        for card in CardCatalog::standard().iter() {
            assert!(!card.effects.is_empty(), "{} has no effects", card.id);
            assert!(!card.title.is_empty());
            assert!(!card.glyph.is_empty());
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = CardCatalog::standard();

        let loan = catalog.get(CardId::new("loan")).unwrap();
        assert_eq!(loan.effects.get(Wealth), Some(50));
        assert_eq!(loan.effects.get(Energy), None);

        assert!(catalog.get(CardId::new("missing")).is_none());
        assert!(catalog.contains(CardId::new("cat")));
    }

    #[test]
    fn test_resolve() {
        let catalog = CardCatalog::standard();
        assert_eq!(catalog.resolve("gym"), Ok(CardId::new("gym")));
        assert_eq!(
            catalog.resolve("gym2"),
            Err(GameError::UnknownCard("gym2".to_string()))
        );
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let card = STANDARD_CARDS[0];
        CardCatalog::from_cards([card, card]);
    }

    #[test]
    fn test_order_preserved() {
        let catalog = CardCatalog::from_cards(STANDARD_CARDS[..3].iter().copied());
        let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["study_ai", "library", "english"]);
    }
}
