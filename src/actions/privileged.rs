//! Role-only actions: the Dispatcher's flights and conference, the
//! Contingency Planner's reclaim and the Operations Expert's company plane.

use tracing::debug;

use crate::board::CityId;
use crate::core::error::{EngineError, EngineResult};
use crate::core::state::GameState;
use crate::players::Role;

impl GameState {
    fn require_seated(&self, role: Role) -> EngineResult<()> {
        if self.roster.is_seated(role) {
            Ok(())
        } else {
            Err(EngineError::RoleUnavailable(role))
        }
    }

    /// Fly `pawn` to `to` with the destination card from the Dispatcher's hand.
    pub fn dispatcher_direct_flight(&mut self, pawn: Role, to: CityId) -> EngineResult<()> {
        self.ensure_in_progress()?;
        self.require_seated(Role::Dispatcher)?;
        self.graph.require_id(to)?;
        let from = self.location(pawn)?;
        if from == to {
            return Err(self.illegal_move(from, to));
        }
        let index = self.city_card_in_hand(Role::Dispatcher, to)?;
        self.spend_card(Role::Dispatcher, index)?;
        self.relocate(pawn, to)?;
        Ok(())
    }

    /// Fly `pawn` anywhere with the card of the pawn's current city from
    /// the Dispatcher's hand.
    pub fn dispatcher_charter_flight(&mut self, pawn: Role, to: CityId) -> EngineResult<()> {
        self.ensure_in_progress()?;
        self.require_seated(Role::Dispatcher)?;
        self.graph.require_id(to)?;
        let from = self.location(pawn)?;
        if from == to {
            return Err(self.illegal_move(from, to));
        }
        let index = self.city_card_in_hand(Role::Dispatcher, from)?;
        self.spend_card(Role::Dispatcher, index)?;
        self.relocate(pawn, to)?;
        Ok(())
    }

    /// Move `pawn` to the city of `to_role`.
    pub fn conference(&mut self, pawn: Role, to_role: Role) -> EngineResult<()> {
        self.ensure_in_progress()?;
        self.require_seated(Role::Dispatcher)?;
        self.location(pawn)?;
        let to = self.location(to_role)?;
        self.relocate(pawn, to)?;
        Ok(())
    }

    /// Take an event card from the player discard pile into the
    /// contingency slot. A card already in the slot goes back to the
    /// discard pile.
    pub fn reclaim(&mut self, card: &str) -> EngineResult<()> {
        self.ensure_in_progress()?;
        self.require_seated(Role::ContingencyPlanner)?;
        let index = self
            .player_deck
            .find_in_discard(card)
            .ok_or_else(|| EngineError::NotFound(card.to_string()))?;
        if self.player_deck.discard_pile()[index].event_kind().is_none() {
            return Err(EngineError::InvalidCardType(card.to_string()));
        }

        let reclaimed = self.player_deck.remove_from_discard(card)?;
        debug!(card = %reclaimed, "event reclaimed");
        if let Some(evicted) = self.contingency_card.replace(reclaimed) {
            self.player_deck.discard(evicted)?;
        }
        Ok(())
    }

    /// From a research facility, discard any city card and fly the
    /// Operations Expert anywhere.
    pub fn company_plane(&mut self, to: CityId, card: &str) -> EngineResult<()> {
        self.ensure_in_progress()?;
        self.graph.require_id(to)?;
        let from = self.location(Role::OperationsExpert)?;
        if !self.has_research_facility(from) {
            return Err(EngineError::NoResearchFacility(self.graph.name(from).to_string()));
        }
        if from == to {
            return Err(self.illegal_move(from, to));
        }
        let player = self.roster.player(Role::OperationsExpert)?;
        let index = player
            .position(card)
            .ok_or_else(|| EngineError::CardNotFound(card.to_string()))?;
        if player.hand[index].city_id().is_none() {
            return Err(EngineError::InvalidCardType(card.to_string()));
        }

        self.spend_card(Role::OperationsExpert, index)?;
        self.relocate(Role::OperationsExpert, to)?;
        Ok(())
    }
}
