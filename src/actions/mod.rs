//! Action resolution.
//!
//! Every action checks all of its preconditions before it touches the
//! state, so a returned error leaves hands, decks, pawns and cubes exactly
//! as they were.
//!
//! The methods here are the raw rules. [`GameState::perform`] in
//! `rules::turn` adds turn bookkeeping and decides which pawns the actor
//! may move.
//!
//! [`GameState::perform`]: crate::core::GameState::perform

pub mod build;
pub mod cure;
pub mod movement;
pub mod privileged;
pub mod share;
pub mod treat;

use serde::{Deserialize, Serialize};

use crate::board::CityId;
use crate::core::error::{EngineError, EngineResult};
use crate::core::state::GameState;
use crate::disease::DiseaseColor;
use crate::players::{ActionKind, Role};

/// One action a player spends from their turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Drive { pawn: Role, to: CityId },
    DirectFlight { pawn: Role, to: CityId },
    CharterFlight { pawn: Role, to: CityId },
    Shuttle { pawn: Role, to: CityId },
    Build { relocate_from: Option<CityId> },
    Treat { color: DiseaseColor },
    /// Give the card of the shared city, or with `card` set, any city card
    /// from the Researcher's hand.
    Share { giver: Role, receiver: Role, card: Option<String> },
    Cure { cards: Vec<String> },
    Reclaim { card: String },
    Conference { pawn: Role, to_role: Role },
    CompanyPlane { to: CityId, card: String },
}

impl Action {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Drive { .. } => ActionKind::Drive,
            Action::DirectFlight { .. } => ActionKind::DirectFlight,
            Action::CharterFlight { .. } => ActionKind::CharterFlight,
            Action::Shuttle { .. } => ActionKind::Shuttle,
            Action::Build { .. } => ActionKind::Build,
            Action::Treat { .. } => ActionKind::Treat,
            Action::Share { .. } => ActionKind::Share,
            Action::Cure { .. } => ActionKind::Cure,
            Action::Reclaim { .. } => ActionKind::Reclaim,
            Action::Conference { .. } => ActionKind::Conference,
            Action::CompanyPlane { .. } => ActionKind::CompanyPlane,
        }
    }
}

impl GameState {
    /// Hand index of the city card for `city`, or `CardNotFound`.
    pub(crate) fn city_card_in_hand(&self, role: Role, city: CityId) -> EngineResult<usize> {
        self.roster
            .player(role)?
            .city_card_position(city)
            .ok_or_else(|| EngineError::CardNotFound(self.graph.name(city).to_string()))
    }

    /// Move a card from a hand to the player discard pile.
    pub(crate) fn spend_card(&mut self, role: Role, index: usize) -> EngineResult<()> {
        let card = self.roster.player_mut(role)?.take(index);
        self.player_deck.discard(card)
    }

    fn name_of(&self, city: CityId) -> String {
        self.graph.name(city).to_string()
    }

    pub(crate) fn illegal_move(&self, from: CityId, to: CityId) -> EngineError {
        EngineError::IllegalMove {
            from: self.name_of(from),
            to: self.name_of(to),
        }
    }
}
