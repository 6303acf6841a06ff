//! Game invariants: sanity checks that detect engine bugs.
//!
//! None of these can be broken through the public operations. Tests run
//! them after every step; a violation means the engine is wrong, not the
//! players.

use crate::cards::DeckType;
use crate::core::config::{DISEASE_RESERVE, MAX_CUBES_PER_CITY, RESEARCH_FACILITY_COUNT};
use crate::core::state::GameState;
use crate::disease::DiseaseColor;
use crate::players::Role;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut fail = |message: String| violations.push(InvariantViolation { message });

    // Cube conservation and the per-city cap
    for color in DiseaseColor::ALL {
        let on_board: u32 = state.board().iter().map(|c| u32::from(c.cubes(color))).sum();
        let reserve = u32::from(state.disease(color).reserve());
        if on_board + reserve != u32::from(DISEASE_RESERVE) {
            fail(format!(
                "{color}: {on_board} cubes on board + {reserve} in reserve != {DISEASE_RESERVE}"
            ));
        }
    }
    for city in state.graph().iter() {
        for (color, &count) in state.city_state(city.id).disease_count.iter() {
            if count > MAX_CUBES_PER_CITY {
                fail(format!("{} holds {count} {color} cubes", city.name));
            }
        }
    }

    // Research facilities
    let built = state.research_facilities().count();
    let reserve = usize::from(state.research_facility_reserve());
    if built + reserve != usize::from(RESEARCH_FACILITY_COUNT) {
        fail(format!(
            "{built} research facilities built + {reserve} in reserve != {RESEARCH_FACILITY_COUNT}"
        ));
    }

    // Card types
    for (deck, expected) in [
        (state.player_deck(), DeckType::Player),
        (state.infection_deck(), DeckType::Infection),
    ] {
        if let Some(card) = deck.cards().find(|c| c.deck != expected) {
            fail(format!("{} card '{}' in the {expected} deck", card.deck, card.name));
        }
    }
    for player in state.roster().players() {
        if let Some(card) = player.hand.iter().find(|c| c.deck != DeckType::Player || c.is_epidemic()) {
            fail(format!("the {} holds '{}'", player.role, card.name));
        }
    }
    if let Some(card) = state.contingency_card() {
        if card.event_kind().is_none() {
            fail(format!("contingency slot holds '{}'", card.name));
        }
    }

    // Pawns
    for role in Role::ALL {
        let seated = state.roster().roles().any(|r| r == role);
        let located = state.roster().locations()[role].is_some();
        if seated != located {
            fail(format!("the {role} is seated={seated} but located={located}"));
        }
    }

    violations
}
