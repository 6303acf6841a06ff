//! Share knowledge.

use tracing::debug;

use crate::core::error::{EngineError, EngineResult};
use crate::core::state::GameState;
use crate::players::Role;

impl GameState {
    /// Give the card of the city both players stand in.
    pub fn share(&mut self, giver: Role, receiver: Role) -> EngineResult<()> {
        self.ensure_in_progress()?;
        let city = self.colocated(giver, receiver)?;
        let index = self.city_card_in_hand(giver, city)?;
        self.transfer(giver, receiver, index)
    }

    /// The Researcher gives any city card from hand.
    pub fn researcher_share(&mut self, giver: Role, receiver: Role, card: &str) -> EngineResult<()> {
        self.ensure_in_progress()?;
        if giver != Role::Researcher {
            return Err(EngineError::RoleUnavailable(Role::Researcher));
        }
        self.colocated(giver, receiver)?;
        let player = self.roster.player(giver)?;
        let index = player
            .position(card)
            .ok_or_else(|| EngineError::CardNotFound(card.to_string()))?;
        if player.hand[index].city_id().is_none() {
            return Err(EngineError::InvalidCardType(card.to_string()));
        }
        self.transfer(giver, receiver, index)
    }

    /// The shared city of two distinct seated roles.
    fn colocated(&self, a: Role, b: Role) -> EngineResult<crate::board::CityId> {
        let here = self.location(a)?;
        let there = self.location(b)?;
        if a == b || here != there {
            return Err(EngineError::NotColocated);
        }
        Ok(here)
    }

    fn transfer(&mut self, giver: Role, receiver: Role, index: usize) -> EngineResult<()> {
        let (from, to) = self.roster.pair_mut(giver, receiver)?;
        let card = from.take(index);
        debug!(%giver, %receiver, card = %card, "card shared");
        to.hand.push(card);
        Ok(())
    }
}
