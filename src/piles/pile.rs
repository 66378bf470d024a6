//! Ordered, keyed card collection.
//!
//! A `Pile` keeps its cards in a `Vec` (index 0 = bottom, last = top) plus an
//! id index for keyed lookup. Draws come off the top.

use rustc_hash::FxHashMap;

use crate::cards::Card;
use crate::core::ids::CardId;
use crate::core::rng::ShuffleRng;

/// Ordered keyed collection of cards.
///
/// ```
/// use card_hud::cards::{Card, CardData};
/// use card_hud::piles::Pile;
///
/// let mut deck = Pile::new("Deck");
/// deck.push(Card::new("c1", CardData::new("Ace")));
/// deck.push(Card::new("c2", CardData::new("King")));
///
/// assert_eq!(deck.len(), 2);
/// assert_eq!(deck.top(1)[0].name(), "King");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Pile {
    name: String,
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl Pile {
    /// Create an empty pile.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look a card up by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    #[must_use]
    pub fn get_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        let i = *self.index.get(id)?;
        Some(&mut self.cards[i])
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards ordered by normalized ordering key; ties keep pile order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.cards.iter().collect();
        cards.sort_by_key(|c| c.sort_key());
        cards
    }

    /// Up to `n` cards from the top, topmost first.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&Card> {
        self.cards.iter().rev().take(n).collect()
    }

    /// Up to `n` undrawn cards from the top, topmost first.
    #[must_use]
    pub fn top_undrawn(&self, n: usize) -> Vec<&Card> {
        self.cards
            .iter()
            .rev()
            .filter(|c| !c.is_drawn())
            .take(n)
            .collect()
    }

    /// Number of cards not marked drawn.
    #[must_use]
    pub fn undrawn_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.is_drawn()).count()
    }

    /// Put a card on top.
    ///
    /// Panics if a card with the same id is already in the pile.
    pub fn push(&mut self, card: Card) {
        if self.index.contains_key(&card.id) {
            panic!("Card {} already exists in pile {}", card.id, self.name);
        }
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
    }

    /// Remove a card by id.
    pub fn remove(&mut self, id: &CardId) -> Option<Card> {
        let i = self.index.remove(id)?;
        let card = self.cards.remove(i);
        self.reindex_from(i);
        Some(card)
    }

    /// Shuffle the pile.
    pub fn shuffle(&mut self, rng: &mut ShuffleRng) {
        rng.shuffle(&mut self.cards);
        self.reindex_from(0);
    }

    fn reindex_from(&mut self, start: usize) {
        for (i, card) in self.cards.iter().enumerate().skip(start) {
            self.index.insert(card.id.clone(), i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardData;

    fn card(id: &str, name: &str) -> Card {
        Card::new(id, CardData::new(name))
    }

    #[test]
    fn test_push_and_get() {
        let mut pile = Pile::new("Hand");
        pile.push(card("c1", "Ace"));
        pile.push(card("c2", "King"));

        assert_eq!(pile.get(&CardId::new("c1")).unwrap().name(), "Ace");
        assert!(pile.contains(&CardId::new("c2")));
        assert!(pile.get(&CardId::new("c9")).is_none());
    }

    #[test]
    fn test_remove_keeps_index_consistent() {
        let mut pile = Pile::new("Deck");
        for i in 0..5 {
            pile.push(card(&format!("c{i}"), &format!("Card {i}")));
        }

        let removed = pile.remove(&CardId::new("c1")).unwrap();
        assert_eq!(removed.name(), "Card 1");
        assert_eq!(pile.len(), 4);

        for i in [0, 2, 3, 4] {
            let id = CardId::new(format!("c{i}"));
            assert_eq!(pile.get(&id).unwrap().name(), format!("Card {i}"));
        }
        assert!(pile.remove(&CardId::new("c1")).is_none());
    }

    #[test]
    fn test_top_is_last_pushed() {
        let mut pile = Pile::new("Deck");
        pile.push(card("c1", "Bottom"));
        pile.push(card("c2", "Middle"));
        pile.push(card("c3", "Top"));

        let names: Vec<_> = pile.top(2).iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Top", "Middle"]);
        assert_eq!(pile.top(10).len(), 3);
    }

    #[test]
    fn test_top_undrawn_skips_drawn() {
        let mut pile = Pile::new("Deck");
        pile.push(card("c1", "Bottom"));
        let mut drawn = card("c2", "Drawn");
        drawn.data.drawn = true;
        pile.push(drawn);

        assert_eq!(pile.undrawn_count(), 1);
        assert_eq!(pile.top_undrawn(1)[0].name(), "Bottom");
    }

    #[test]
    fn test_sorted_by_key_stable() {
        let mut pile = Pile::new("Hand");
        pile.push(Card::new("a", CardData::new("A").with_sort(2)));
        pile.push(Card::new("b", CardData::new("B").with_sort("1")));
        pile.push(Card::new("c", CardData::new("C")));
        pile.push(Card::new("d", CardData::new("D").with_sort(1)));

        let names: Vec<_> = pile.sorted().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["C", "B", "D", "A"]);
    }

    #[test]
    fn test_shuffle_reindexes() {
        let mut pile = Pile::new("Deck");
        for i in 0..20 {
            pile.push(card(&format!("c{i}"), &format!("Card {i}")));
        }

        let mut rng = ShuffleRng::new(42);
        pile.shuffle(&mut rng);

        assert_eq!(pile.len(), 20);
        for i in 0..20 {
            let id = CardId::new(format!("c{i}"));
            assert_eq!(pile.get(&id).unwrap().id, id);
        }
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_duplicate_card_panics() {
        let mut pile = Pile::new("Hand");
        pile.push(card("c1", "Ace"));
        pile.push(card("c1", "Ace"));
    }
}
