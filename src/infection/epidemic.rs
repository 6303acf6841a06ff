//! Infection draws and epidemics.

use tracing::{debug, info};

use super::InfectionReport;
use crate::cards::Card;
use crate::core::config::INFECTION_RATE_ESCALATION;
use crate::core::error::{EngineError, EngineResult};
use crate::core::state::GameState;

/// Cubes an epidemic places on the bottom infection card's city.
pub const EPIDEMIC_CUBES: u8 = 3;

impl GameState {
    /// Draw the top infection card and put one cube on its city.
    ///
    /// The card is discarded unless the infection lost the game.
    pub fn draw_infection_card(&mut self) -> EngineResult<InfectionReport> {
        self.ensure_in_progress()?;
        let city = match self.infection_deck.reveal(1) {
            Some(card) => infection_city(card)?,
            None => return Err(EngineError::EmptyDeck(self.infection_deck.deck_type())),
        };

        let card = self.infection_deck.draw()?;
        let color = self.graph.color(city);
        debug!(city = %card, %color, "infection card drawn");

        let report = self.infect(city, color, 1);
        if !report.is_loss() {
            self.infection_deck.discard(card)?;
        }
        Ok(report)
    }

    /// Resolve an epidemic: raise the infection rate, infect the bottom
    /// infection card's city with three cubes, then shuffle the infection
    /// discard pile back on top of the draw pile.
    ///
    /// The reshuffle is skipped when the infection lost the game.
    pub fn epidemic(&mut self) -> EngineResult<InfectionReport> {
        self.ensure_in_progress()?;
        let city = match self.infection_deck.reveal(-1) {
            Some(card) => infection_city(card)?,
            None => return Err(EngineError::EmptyDeck(self.infection_deck.deck_type())),
        };

        self.infection_rate_level = (self.infection_rate_level + 1).min(INFECTION_RATE_ESCALATION.len() - 1);

        let card = self.infection_deck.draw_bottom()?;
        self.infection_deck.discard(card)?;

        let color = self.graph.color(city);
        info!(
            city = self.graph.name(city),
            %color,
            infection_rate = self.infection_rate(),
            "epidemic"
        );

        let report = self.infect(city, color, EPIDEMIC_CUBES);
        if !report.is_loss() {
            self.infection_deck.shuffle(&mut self.rng);
        }
        Ok(report)
    }
}

fn infection_city(card: &Card) -> EngineResult<crate::board::CityId> {
    card.city_id().ok_or_else(|| EngineError::InvalidCardType(card.name.clone()))
}
