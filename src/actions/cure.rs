//! Discover a cure.

use tracing::info;

use crate::core::config::{CURE_CARDS, SCIENTIST_CURE_CARDS};
use crate::core::error::{EngineError, EngineResult};
use crate::core::state::GameState;
use crate::disease::DiseaseColor;
use crate::players::Role;

impl GameState {
    /// Discard five city cards of one color at a research facility to cure
    /// that color. The Scientist needs four.
    pub fn cure(&mut self, role: Role, cards: &[&str]) -> EngineResult<DiseaseColor> {
        let required = if role == Role::Scientist { SCIENTIST_CURE_CARDS } else { CURE_CARDS };
        self.cure_with(role, cards, required)
    }

    /// The Scientist's four-card cure.
    pub fn scientist_cure(&mut self, cards: &[&str]) -> EngineResult<DiseaseColor> {
        if !self.roster.is_seated(Role::Scientist) {
            return Err(EngineError::RoleUnavailable(Role::Scientist));
        }
        self.cure_with(Role::Scientist, cards, SCIENTIST_CURE_CARDS)
    }

    fn cure_with(&mut self, role: Role, cards: &[&str], required: usize) -> EngineResult<DiseaseColor> {
        self.ensure_in_progress()?;
        let city = self.location(role)?;
        if !self.has_research_facility(city) {
            return Err(EngineError::NoResearchFacility(self.graph.name(city).to_string()));
        }
        if cards.len() != required {
            return Err(EngineError::WrongCardCount {
                expected: required,
                found: cards.len(),
            });
        }

        let hand = &self.roster.player(role)?.hand;
        let mut indices = Vec::with_capacity(cards.len());
        let mut color = None;
        for &name in cards {
            let index = hand
                .iter()
                .enumerate()
                .find(|(i, c)| c.name == name && !indices.contains(i))
                .map(|(i, _)| i)
                .ok_or_else(|| EngineError::CardNotFound(name.to_string()))?;
            let card_color = match hand[index].city_id() {
                Some(id) => self.graph.color(id),
                None => return Err(EngineError::InvalidCardType(name.to_string())),
            };
            match color {
                None => color = Some(card_color),
                Some(c) if c != card_color => return Err(EngineError::MixedColor),
                Some(_) => {}
            }
            indices.push(index);
        }
        let color = color.ok_or(EngineError::WrongCardCount { expected: required, found: 0 })?;
        if self.diseases[color].is_cured() {
            return Err(EngineError::AlreadyCured(color));
        }

        indices.sort_unstable_by(|a, b| b.cmp(a));
        for index in indices {
            self.spend_card(role, index)?;
        }
        self.diseases[color].cure();
        info!(role = %role, %color, "cure discovered");

        if let Some(medic) = self.roster.locations()[Role::Medic] {
            self.refresh_protection(medic);
            self.medic_clear(medic);
        }
        self.check_victory();
        Ok(color)
    }
}
