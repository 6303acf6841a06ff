//! Card system: typed card values and two-pile decks.
//!
//! ## Key Types
//!
//! - `DeckType`: which deck a card belongs to (player or infection)
//! - `CardKind`: city, epidemic or one of the four events
//! - `Card`: a named card value
//! - `Deck`: ordered draw pile plus discard pile

pub mod card;
pub mod deck;

pub use card::{Card, CardKind, DeckType, EventCard, EPIDEMIC};
pub use deck::Deck;
