//! Card registry for definition lookup.
//!
//! The `CardRegistry` (the match's card map) stores all card definitions and
//! provides lookup by `CardId`.

use rustc_hash::FxHashMap;

use super::catalogue::create_deck;
use super::definition::{Card, CardId, CardType};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use bang_rules::cards::{CardId, CardRegistry, CardType};
///
/// let registry = CardRegistry::standard();
/// let first = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(first.card_type, CardType::Bang);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the standard 80-card deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for card in create_deck() {
            registry.register(card);
        }
        registry
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Card type of a registered card.
    #[must_use]
    pub fn card_type(&self, id: CardId) -> Option<CardType> {
        self.get(id).map(|c| c.card_type)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All card ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Find cards by type, in id order.
    #[must_use]
    pub fn find_by_type(&self, card_type: CardType) -> Vec<CardId> {
        let mut ids: Vec<_> = self
            .cards
            .values()
            .filter(|c| c.card_type == card_type)
            .map(|c| c.id)
            .collect();
        ids.sort_unstable();
        ids
    }
}
