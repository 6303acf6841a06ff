//! Event cards.
//!
//! Each event is a tagged [`EventCommand`] carrying the player's choices.
//! [`GameState::play_event`] checks the card is held and the command is
//! legal, then spends the card and applies the effect. Events can be
//! played from any hand, or by the Contingency Planner from the
//! contingency slot, at most one per turn.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::CityId;
use crate::cards::{Card, EventCard};
use crate::core::error::{EngineError, EngineResult};
use crate::core::state::GameState;
use crate::players::Role;
use crate::rules::turn::TurnState;

/// An event card with the choices it needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCommand {
    /// Skip this turn's infection step.
    OneQuietNight,
    /// Remove one card from the infection discard pile from the game.
    ResilientPopulation { card: String },
    /// Build a research facility anywhere, for free.
    GovernmentGrant { city: CityId, relocate_from: Option<CityId> },
    /// Move any pawn to any city.
    Airlift { pawn: Role, to: CityId },
}

impl EventCommand {
    #[must_use]
    pub fn event(&self) -> EventCard {
        match self {
            EventCommand::OneQuietNight => EventCard::OneQuietNight,
            EventCommand::ResilientPopulation { .. } => EventCard::ResilientPopulation,
            EventCommand::GovernmentGrant { .. } => EventCard::GovernmentGrant,
            EventCommand::Airlift { .. } => EventCard::Airlift,
        }
    }
}

/// Where a played event card comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventSource {
    Hand(Role),
    /// The Contingency Planner's stored card. Removed from the game once played.
    Contingency,
}

/// An event that could be played right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventChoice {
    pub source: EventSource,
    pub event: EventCard,
}

impl GameState {
    /// Events playable this turn, hands in seating order, then the
    /// contingency slot.
    ///
    /// Every seated hand is listed, not only the active role's, since any
    /// player may play an event at any time. One Quiet Night drops out once
    /// this turn's infection step has run.
    #[must_use]
    pub fn available_events(&self, turn: &TurnState) -> Vec<EventChoice> {
        if self.is_over() || turn.event_cards_played {
            return Vec::new();
        }
        let mut choices: Vec<EventChoice> = self
            .roster
            .players()
            .iter()
            .flat_map(|p| {
                p.hand.iter().filter_map(move |c| {
                    c.event_kind().map(|event| EventChoice {
                        source: EventSource::Hand(p.role),
                        event,
                    })
                })
            })
            .filter(|choice| Self::event_in_window(turn, choice.event))
            .collect();

        if self.roster.is_seated(Role::ContingencyPlanner) {
            if let Some(event) = self
                .contingency_card
                .as_ref()
                .and_then(Card::event_kind)
                .filter(|&event| Self::event_in_window(turn, event))
            {
                choices.push(EventChoice {
                    source: EventSource::Contingency,
                    event,
                });
            }
        }
        choices
    }

    /// Play an event card.
    pub fn play_event(&mut self, turn: &mut TurnState, source: EventSource, command: EventCommand) -> EngineResult<()> {
        self.ensure_in_progress()?;
        if turn.event_cards_played {
            return Err(EngineError::EventAlreadyPlayed);
        }
        let event = command.event();
        let hand_index = self.locate_event(source, event)?;
        self.check_event(turn, &command)?;

        match hand_index {
            Some((role, index)) => self.spend_card(role, index)?,
            None => self.contingency_card = None,
        }

        match command {
            EventCommand::OneQuietNight => turn.skip_infections = true,
            EventCommand::ResilientPopulation { card } => {
                self.infection_deck.remove_from_discard(&card)?;
            }
            EventCommand::GovernmentGrant { city, relocate_from } => {
                self.build_facility_unchecked(city, relocate_from);
            }
            EventCommand::Airlift { pawn, to } => {
                self.relocate(pawn, to)?;
            }
        }

        turn.event_cards_played = true;
        info!(event = event.name(), ?source, "event played");
        Ok(())
    }

    /// Find the card to spend: a hand index, or `None` for the contingency slot.
    fn locate_event(&self, source: EventSource, event: EventCard) -> EngineResult<Option<(Role, usize)>> {
        let missing = || EngineError::CardNotFound(event.name().to_string());
        match source {
            EventSource::Hand(role) => {
                let index = self.roster.player(role)?.event_position(event).ok_or_else(missing)?;
                Ok(Some((role, index)))
            }
            EventSource::Contingency => {
                if !self.roster.is_seated(Role::ContingencyPlanner) {
                    return Err(EngineError::RoleUnavailable(Role::ContingencyPlanner));
                }
                match &self.contingency_card {
                    Some(card) if card.event_kind() == Some(event) => Ok(None),
                    _ => Err(missing()),
                }
            }
        }
    }

    /// One Quiet Night only skips an infection step that has not run yet.
    fn event_in_window(turn: &TurnState, event: EventCard) -> bool {
        event != EventCard::OneQuietNight || turn.remaining_infection_card_draws > 0
    }

    fn check_event(&self, turn: &TurnState, command: &EventCommand) -> EngineResult<()> {
        match command {
            EventCommand::OneQuietNight => {
                if Self::event_in_window(turn, EventCard::OneQuietNight) {
                    Ok(())
                } else {
                    Err(EngineError::InfectionStepOver)
                }
            }
            EventCommand::ResilientPopulation { card } => match self.infection_deck.find_in_discard(card) {
                Some(_) => Ok(()),
                None => Err(EngineError::NotFound(card.clone())),
            },
            EventCommand::GovernmentGrant { city, relocate_from } => self.check_facility_site(*city, *relocate_from),
            EventCommand::Airlift { pawn, to } => {
                self.graph.require_id(*to)?;
                let from = self.location(*pawn)?;
                if from == *to {
                    return Err(self.illegal_move(from, *to));
                }
                Ok(())
            }
        }
    }
}
