//! Engine error taxonomy.
//!
//! Every fallible operation validates its preconditions before touching
//! state, so an `Err` always means the game state is exactly as it was
//! before the call. Callers match on the variant; nothing is retried.

use thiserror::Error;

use crate::cards::DeckType;
use crate::disease::DiseaseColor;
use crate::players::Role;

/// Errors raised by deck, action, event and turn operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A card was offered to a deck of the other type.
    #[error("{found} card does not belong in the {expected} deck")]
    TypeMismatch { expected: DeckType, found: DeckType },

    #[error("the {0} deck has no cards left to draw")]
    EmptyDeck(DeckType),

    /// A named card is not in a discard pile.
    #[error("'{0}' is not in the discard pile")]
    NotFound(String),

    #[error("cannot move from {from} to {to}")]
    IllegalMove { from: String, to: String },

    /// A required card is not in the acting player's hand.
    #[error("'{0}' is not in hand")]
    CardNotFound(String),

    #[error("cure cards must all share one color")]
    MixedColor,

    #[error("{0} has no research facility")]
    NoResearchFacility(String),

    #[error("players are not in the same city")]
    NotColocated,

    #[error("'{0}' cannot be used this way")]
    InvalidCardType(String),

    /// The action needs a role that is not seated (or is not the actor).
    #[error("the {0} is not available")]
    RoleUnavailable(Role),

    #[error("unknown city '{0}'")]
    UnknownCity(String),

    #[error("expected {expected} cards, got {found}")]
    WrongCardCount { expected: usize, found: usize },

    #[error("the {0} disease is already cured")]
    AlreadyCured(DiseaseColor),

    #[error("no {0} cubes to treat here")]
    NothingToTreat(DiseaseColor),

    #[error("{0} already has a research facility")]
    ResearchFacilityExists(String),

    /// The facility reserve is empty and no facility was chosen to relocate.
    #[error("no research facility left in reserve")]
    NoResearchFacilityAvailable,

    #[error("unsupported player count {0}")]
    InvalidPlayerCount(usize),

    #[error("the {0} is seated twice")]
    DuplicateRole(Role),

    #[error("no actions remaining this turn")]
    NoActionsRemaining,

    #[error("an event card was already played this turn")]
    EventAlreadyPlayed,

    /// One Quiet Night has nothing left to skip this turn.
    #[error("the infection step has already run this turn")]
    InfectionStepOver,

    /// A player must discard down to the hand limit first.
    #[error("the {0} holds more than the hand limit")]
    HandLimitExceeded(Role),

    #[error("that ability was already used this turn")]
    AbilityAlreadyUsed,

    /// The actor tried to move or trade on behalf of someone else.
    #[error("that pawn cannot be controlled by the active player")]
    NotYourPawn,

    #[error("the game is over")]
    GameOver,
}

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::TypeMismatch {
            expected: DeckType::Infection,
            found: DeckType::Player,
        };
        assert_eq!(err.to_string(), "player card does not belong in the infection deck");

        assert_eq!(
            EngineError::RoleUnavailable(Role::Medic).to_string(),
            "the Medic is not available"
        );
        assert_eq!(
            EngineError::WrongCardCount { expected: 5, found: 3 }.to_string(),
            "expected 5 cards, got 3"
        );
    }
}
