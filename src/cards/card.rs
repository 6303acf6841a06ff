//! Card values.

use serde::{Deserialize, Serialize};

use crate::board::{City, CityId};

pub const EPIDEMIC: &str = "Epidemic";

/// The deck a card lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeckType {
    Player,
    Infection,
}

impl std::fmt::Display for DeckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckType::Player => f.write_str("player"),
            DeckType::Infection => f.write_str("infection"),
        }
    }
}

/// Event cards in the player deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventCard {
    OneQuietNight,
    ResilientPopulation,
    GovernmentGrant,
    Airlift,
}

impl EventCard {
    pub const ALL: [EventCard; 4] = [
        EventCard::OneQuietNight,
        EventCard::ResilientPopulation,
        EventCard::GovernmentGrant,
        EventCard::Airlift,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventCard::OneQuietNight => "One Quiet Night",
            EventCard::ResilientPopulation => "Resilient Population",
            EventCard::GovernmentGrant => "Government Grant",
            EventCard::Airlift => "Airlift",
        }
    }
}

/// What a card does when drawn or played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    City(CityId),
    Epidemic,
    Event(EventCard),
}

/// A card value. Two cards are the same card iff all fields match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub deck: DeckType,
    pub kind: CardKind,
}

impl Card {
    #[must_use]
    pub fn city(city: &City, deck: DeckType) -> Self {
        Self {
            name: city.name.clone(),
            deck,
            kind: CardKind::City(city.id),
        }
    }

    #[must_use]
    pub fn epidemic() -> Self {
        Self {
            name: EPIDEMIC.to_string(),
            deck: DeckType::Player,
            kind: CardKind::Epidemic,
        }
    }

    #[must_use]
    pub fn event(event: EventCard) -> Self {
        Self {
            name: event.name().to_string(),
            deck: DeckType::Player,
            kind: CardKind::Event(event),
        }
    }

    /// The city this card names, if it is a city card.
    #[must_use]
    pub fn city_id(&self) -> Option<CityId> {
        match self.kind {
            CardKind::City(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn event_kind(&self) -> Option<EventCard> {
        match self.kind {
            CardKind::Event(event) => Some(event),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_epidemic(&self) -> bool {
        self.kind == CardKind::Epidemic
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
