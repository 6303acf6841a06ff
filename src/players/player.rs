//! A seated player: role plus hand.

use serde::{Deserialize, Serialize};

use super::role::Role;
use crate::board::CityId;
use crate::cards::{Card, EventCard};

/// A role and the player cards it holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub role: Role,
    pub hand: Vec<Card>,
}

impl Player {
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self { role, hand: Vec::new() }
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Hand index of a card by name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.hand.iter().position(|c| c.name == name)
    }

    /// Hand index of the city card for `city`.
    #[must_use]
    pub fn city_card_position(&self, city: CityId) -> Option<usize> {
        self.hand.iter().position(|c| c.city_id() == Some(city))
    }

    #[must_use]
    pub fn event_position(&self, event: EventCard) -> Option<usize> {
        self.hand.iter().position(|c| c.event_kind() == Some(event))
    }

    /// Remove and return the card at `index`.
    ///
    /// Panics if `index` is out of range.
    pub(crate) fn take(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CityGraphBuilder;
    use crate::cards::DeckType;
    use crate::disease::DiseaseColor;

    #[test]
    fn test_hand_lookup() {
        let mut builder = CityGraphBuilder::new();
        let paris = builder.add_city("Paris", DiseaseColor::Blue, 10_755_000);
        let graph = builder.build();

        let mut player = Player::new(Role::Researcher);
        player.hand.push(Card::event(EventCard::Airlift));
        player.hand.push(Card::city(graph.city(paris), DeckType::Player));

        assert_eq!(player.hand_size(), 2);
        assert_eq!(player.position("Paris"), Some(1));
        assert_eq!(player.city_card_position(paris), Some(1));
        assert_eq!(player.event_position(EventCard::Airlift), Some(0));
        assert_eq!(player.event_position(EventCard::OneQuietNight), None);

        let card = player.take(0);
        assert_eq!(card.name, "Airlift");
        assert_eq!(player.position("Paris"), Some(0));
    }
}
