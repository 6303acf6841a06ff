//! Drive, direct flight, charter flight and shuttle flight.

use crate::board::CityId;
use crate::core::error::EngineResult;
use crate::core::state::GameState;
use crate::players::Role;

impl GameState {
    /// Move to a neighboring city.
    pub fn drive(&mut self, role: Role, to: CityId) -> EngineResult<()> {
        self.ensure_in_progress()?;
        self.graph.require_id(to)?;
        let from = self.location(role)?;
        if !self.graph.are_adjacent(from, to) {
            return Err(self.illegal_move(from, to));
        }
        self.relocate(role, to)?;
        Ok(())
    }

    /// Discard the destination's city card to fly there.
    pub fn direct_flight(&mut self, role: Role, to: CityId) -> EngineResult<()> {
        self.ensure_in_progress()?;
        self.graph.require_id(to)?;
        let from = self.location(role)?;
        if from == to {
            return Err(self.illegal_move(from, to));
        }
        let index = self.city_card_in_hand(role, to)?;
        self.spend_card(role, index)?;
        self.relocate(role, to)?;
        Ok(())
    }

    /// Discard the current city's card to fly anywhere.
    pub fn charter_flight(&mut self, role: Role, to: CityId) -> EngineResult<()> {
        self.ensure_in_progress()?;
        self.graph.require_id(to)?;
        let from = self.location(role)?;
        if from == to {
            return Err(self.illegal_move(from, to));
        }
        let index = self.city_card_in_hand(role, from)?;
        self.spend_card(role, index)?;
        self.relocate(role, to)?;
        Ok(())
    }

    /// Fly between two research facilities.
    pub fn shuttle(&mut self, role: Role, to: CityId) -> EngineResult<()> {
        self.ensure_in_progress()?;
        self.graph.require_id(to)?;
        let from = self.location(role)?;
        if from == to || !self.has_research_facility(from) || !self.has_research_facility(to) {
            return Err(self.illegal_move(from, to));
        }
        self.relocate(role, to)?;
        Ok(())
    }
}
