//! Two-pile deck: ordered draw pile plus discard pile.
//!
//! Both piles are `im::Vector`s with the top at the end, so drawing is a
//! `pop_back` and discarding a `push_back`. Positions passed to `insert`,
//! `shuffle_window` and `reveal` are measured from the draw end.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, DeckType};
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::GameRng;

/// A draw pile and a discard pile holding cards of one `DeckType`.
///
/// ## Usage
///
/// ```
/// use pandemic_engine::cards::{Card, Deck, DeckType, EventCard};
/// use pandemic_engine::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let mut deck = Deck::new(DeckType::Player);
///
/// deck.discard(Card::event(EventCard::Airlift)).unwrap();
/// deck.discard(Card::event(EventCard::OneQuietNight)).unwrap();
/// assert_eq!((deck.size(), deck.remaining()), (2, 0));
///
/// deck.shuffle(&mut rng);
/// assert_eq!((deck.size(), deck.remaining()), (2, 2));
///
/// let drawn = deck.draw().unwrap();
/// assert_eq!(deck.remaining(), 1);
/// assert_ne!(deck.reveal(1), Some(&drawn));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    deck_type: DeckType,
    draw_pile: Vector<Card>,
    discard_pile: Vector<Card>,
}

impl Deck {
    #[must_use]
    pub fn new(deck_type: DeckType) -> Self {
        Self {
            deck_type,
            draw_pile: Vector::new(),
            discard_pile: Vector::new(),
        }
    }

    #[must_use]
    pub fn deck_type(&self) -> DeckType {
        self.deck_type
    }

    fn check_type(&self, card: &Card) -> EngineResult<()> {
        if card.deck != self.deck_type {
            return Err(EngineError::TypeMismatch {
                expected: self.deck_type,
                found: card.deck,
            });
        }
        Ok(())
    }

    /// Put a card face up on the discard pile.
    pub fn discard(&mut self, card: Card) -> EngineResult<()> {
        self.check_type(&card)?;
        self.discard_pile.push_back(card);
        Ok(())
    }

    /// Move every discarded card onto the top of the draw pile in random order.
    ///
    /// Cards are pulled out of the discard pile one at a time at a uniformly
    /// random index, so the cards already in the draw pile stay beneath them.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        while !self.discard_pile.is_empty() {
            let i = rng.below(self.discard_pile.len());
            let card = self.discard_pile.remove(i);
            self.draw_pile.push_back(card);
        }
    }

    /// Randomly permute the draw pile between depths `start` (inclusive)
    /// and `end` (exclusive), counted from the top. Out-of-range bounds are
    /// clamped to the pile.
    pub fn shuffle_window(&mut self, start: usize, end: usize, rng: &mut GameRng) {
        let len = self.draw_pile.len();
        let end = end.min(len);
        if start >= end {
            return;
        }
        let (lo, hi) = (len - end, len - start);

        let mut window: Vec<Card> = self.draw_pile.iter().skip(lo).take(hi - lo).cloned().collect();
        rng.shuffle(&mut window);
        for (offset, card) in window.into_iter().enumerate() {
            self.draw_pile.set(lo + offset, card);
        }
    }

    /// Place a card so that exactly `position` cards sit above it.
    ///
    /// A position past the bottom puts the card at the bottom.
    pub fn insert(&mut self, card: Card, position: usize) -> EngineResult<()> {
        self.check_type(&card)?;
        let len = self.draw_pile.len();
        self.draw_pile.insert(len - position.min(len), card);
        Ok(())
    }

    /// Take the top card of the draw pile.
    pub fn draw(&mut self) -> EngineResult<Card> {
        self.draw_pile
            .pop_back()
            .ok_or(EngineError::EmptyDeck(self.deck_type))
    }

    /// Take the bottom card of the draw pile.
    pub fn draw_bottom(&mut self) -> EngineResult<Card> {
        self.draw_pile
            .pop_front()
            .ok_or(EngineError::EmptyDeck(self.deck_type))
    }

    /// Draw the top card and immediately discard it.
    pub fn draw_and_discard(&mut self) -> EngineResult<Card> {
        let card = self.draw()?;
        self.discard_pile.push_back(card.clone());
        Ok(card)
    }

    /// Peek at a card of the draw pile without removing it.
    ///
    /// `1` is the top card, `2` the one below it. Negative values count
    /// from the bottom: `-1` is the bottom card. `0` and out-of-range
    /// positions return `None`.
    #[must_use]
    pub fn reveal(&self, position: isize) -> Option<&Card> {
        let len = self.draw_pile.len();
        let index = if position > 0 {
            len.checked_sub(position.unsigned_abs())?
        } else if position < 0 {
            let from_bottom = position.unsigned_abs() - 1;
            if from_bottom >= len {
                return None;
            }
            from_bottom
        } else {
            return None;
        };
        self.draw_pile.get(index)
    }

    /// Remove a named card from the discard pile.
    pub fn remove_from_discard(&mut self, name: &str) -> EngineResult<Card> {
        let index = self
            .find_in_discard(name)
            .ok_or_else(|| EngineError::NotFound(name.to_string()))?;
        Ok(self.discard_pile.remove(index))
    }

    /// Index of a named card in the discard pile.
    #[must_use]
    pub fn find_in_discard(&self, name: &str) -> Option<usize> {
        self.discard_pile.iter().position(|c| c.name == name)
    }

    /// Total cards in both piles.
    #[must_use]
    pub fn size(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Draw pile, bottom first.
    #[must_use]
    pub fn draw_pile(&self) -> &Vector<Card> {
        &self.draw_pile
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard_pile
    }

    /// Every card in the deck, draw pile first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile.iter().chain(self.discard_pile.iter())
    }

    pub fn clear(&mut self) {
        self.draw_pile.clear();
        self.discard_pile.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CityGraph, CityGraphBuilder};
    use crate::disease::DiseaseColor;

    fn graph(names: &[&str]) -> CityGraph {
        let mut builder = CityGraphBuilder::new();
        for name in names {
            builder.add_city(name, DiseaseColor::Blue, 1);
        }
        builder.build()
    }

    fn infection_deck(names: &[&str]) -> Deck {
        let graph = graph(names);
        let mut deck = Deck::new(DeckType::Infection);
        for city in graph.iter() {
            deck.discard(Card::city(city, DeckType::Infection)).unwrap();
        }
        deck
    }

    fn sorted(cards: impl Iterator<Item = Card>) -> Vec<Card> {
        let mut v: Vec<_> = cards.collect();
        v.sort();
        v
    }

    #[test]
    fn test_populate_and_draw() {
        let mut rng = GameRng::new(42);
        let mut deck = infection_deck(&["foo", "bar", "baz"]);
        assert_eq!(deck.size(), 3);
        assert_eq!(deck.remaining(), 0);

        deck.shuffle(&mut rng);
        assert_eq!(deck.size(), 3);
        assert_eq!(deck.remaining(), 3);
        assert!(deck.discard_pile().is_empty());

        let mut drawn = Vec::new();
        while drawn.len() < 3 {
            let card = deck.draw().unwrap();
            assert!(!drawn.contains(&card.name), "{} drawn twice", card.name);
            drawn.push(card.name);
            assert_eq!(deck.size(), deck.remaining());
        }
        assert_eq!(deck.draw(), Err(EngineError::EmptyDeck(DeckType::Infection)));
    }

    #[test]
    fn test_rejects_wrong_type() {
        let mut deck = Deck::new(DeckType::Infection);
        let err = deck.discard(Card::epidemic()).unwrap_err();
        assert_eq!(
            err,
            EngineError::TypeMismatch {
                expected: DeckType::Infection,
                found: DeckType::Player,
            }
        );
        assert_eq!(deck.size(), 0);
        assert!(deck.insert(Card::epidemic(), 0).is_err());
    }

    #[test]
    fn test_shuffle_puts_discards_on_top() {
        let mut rng = GameRng::new(7);
        let mut deck = infection_deck(&["a", "b", "c", "d"]);
        deck.shuffle(&mut rng);

        let bottom_two: Vec<_> = (0..2).map(|_| deck.draw_bottom().unwrap()).collect();
        for card in &bottom_two {
            deck.discard(card.clone()).unwrap();
        }
        let untouched: Vec<_> = deck.draw_pile().iter().cloned().collect();

        deck.shuffle(&mut rng);
        assert_eq!(deck.remaining(), 4);
        let pile: Vec<_> = deck.draw_pile().iter().cloned().collect();
        assert_eq!(&pile[..2], &untouched[..]);
        assert_eq!(sorted(pile[2..].iter().cloned()), sorted(bottom_two.into_iter()));
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut rng = GameRng::new(3);
        let mut deck = infection_deck(&["a", "b", "c", "d", "e", "f"]);
        let before = sorted(deck.cards().cloned());

        deck.shuffle(&mut rng);
        deck.draw_and_discard().unwrap();
        deck.draw_and_discard().unwrap();
        deck.shuffle(&mut rng);

        assert_eq!(sorted(deck.cards().cloned()), before);
    }

    #[test]
    fn test_insert_and_reveal() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::new(DeckType::Player);
        for event in crate::cards::EventCard::ALL {
            deck.discard(Card::event(event)).unwrap();
        }
        deck.shuffle(&mut rng);

        deck.insert(Card::epidemic(), 0).unwrap();
        assert_eq!(deck.reveal(1), Some(&Card::epidemic()));

        deck.draw().unwrap();
        deck.insert(Card::epidemic(), 2).unwrap();
        assert_eq!(deck.reveal(3), Some(&Card::epidemic()));

        deck.insert(Card::epidemic(), 99).unwrap();
        assert_eq!(deck.reveal(-1), Some(&Card::epidemic()));
        assert_eq!(deck.reveal(0), None);
        assert_eq!(deck.reveal(7), None);
        assert_eq!(deck.reveal(-7), None);
    }

    #[test]
    fn test_reveal_bottom_matches_draw_bottom() {
        let mut rng = GameRng::new(11);
        let mut deck = infection_deck(&["a", "b", "c"]);
        deck.shuffle(&mut rng);

        let bottom = deck.reveal(-1).cloned();
        let second = deck.reveal(-2).cloned();
        assert_eq!(deck.draw_bottom().ok(), bottom);
        assert_eq!(deck.reveal(-1).cloned(), second);
    }

    #[test]
    fn test_shuffle_window_only_touches_window() {
        let mut rng = GameRng::new(5);
        let names: Vec<String> = (0..20).map(|i| format!("c{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut deck = infection_deck(&refs);
        deck.shuffle(&mut rng);

        let before: Vec<_> = deck.draw_pile().iter().cloned().collect();
        deck.shuffle_window(5, 10, &mut rng);
        let after: Vec<_> = deck.draw_pile().iter().cloned().collect();

        // depths 5..10 from the top are indices 10..15 from the bottom
        assert_eq!(&before[..10], &after[..10]);
        assert_eq!(&before[15..], &after[15..]);
        assert_eq!(sorted(before[10..15].iter().cloned()), sorted(after[10..15].iter().cloned()));
    }

    #[test]
    fn test_remove_from_discard() {
        let mut deck = infection_deck(&["a", "b"]);
        let card = deck.remove_from_discard("a").unwrap();
        assert_eq!(card.name, "a");
        assert_eq!(deck.size(), 1);
        assert_eq!(
            deck.remove_from_discard("a"),
            Err(EngineError::NotFound("a".to_string()))
        );
    }

    #[test]
    fn test_draw_and_discard() {
        let mut rng = GameRng::new(9);
        let mut deck = infection_deck(&["a", "b"]);
        deck.shuffle(&mut rng);

        let card = deck.draw_and_discard().unwrap();
        assert_eq!(deck.remaining(), 1);
        assert_eq!(deck.discard_pile().back(), Some(&card));
    }
}
