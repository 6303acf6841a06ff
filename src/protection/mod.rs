//! Placement protection derived from pawn positions.
//!
//! A city's `protected_colors` is a pure function of where the Quarantine
//! Specialist and the Medic stand and which diseases are cured:
//!
//! - the Quarantine Specialist's city and every neighbor block all colors
//! - otherwise the Medic's city blocks every cured color
//!
//! The overlay is recomputed for the affected cities whenever a pawn moves
//! or a disease is cured. The Medic also clears cured cubes on arrival.

use tracing::debug;

use crate::board::CityId;
use crate::core::error::EngineResult;
use crate::core::state::GameState;
use crate::disease::{ColorSet, DiseaseColor};
use crate::players::Role;

impl GameState {
    /// Colors that may not be placed in `city` right now.
    #[must_use]
    pub fn compute_protection(&self, city: CityId) -> ColorSet {
        if let Some(qs) = self.roster.locations()[Role::QuarantineSpecialist] {
            if qs == city || self.graph.are_adjacent(qs, city) {
                return ColorSet::all();
            }
        }
        if self.roster.locations()[Role::Medic] == Some(city) {
            return DiseaseColor::ALL
                .into_iter()
                .filter(|&c| self.diseases[c].is_cured())
                .collect();
        }
        ColorSet::empty()
    }

    /// Recompute the blocked colors of one city.
    pub fn refresh_protection(&mut self, city: CityId) {
        self.board[city.index()].protected_colors = self.compute_protection(city);
    }

    /// Recompute a city and all of its neighbors.
    fn refresh_neighborhood(&mut self, city: CityId) {
        self.refresh_protection(city);
        let graph = self.graph_handle();
        for &n in graph.neighbors(city) {
            self.refresh_protection(n);
        }
    }

    /// Recompute every city.
    pub fn refresh_all_protection(&mut self) {
        for city in self.graph_handle().ids() {
            self.refresh_protection(city);
        }
    }

    /// Move a pawn and update protection around both cities.
    ///
    /// No movement rules are checked here; actions and events validate
    /// before calling this.
    pub(crate) fn relocate(&mut self, role: Role, to: CityId) -> EngineResult<CityId> {
        let from = self.roster.set_location(role, to)?;
        debug!(role = %role, from = self.graph.name(from), to = self.graph.name(to), "pawn moved");
        self.after_arrival(role, Some(from), to);
        Ok(from)
    }

    /// Protection and Medic upkeep after `role` arrives in `to`.
    pub(crate) fn after_arrival(&mut self, role: Role, from: Option<CityId>, to: CityId) {
        match role {
            Role::QuarantineSpecialist => {
                if let Some(from) = from {
                    self.refresh_neighborhood(from);
                }
                self.refresh_neighborhood(to);
            }
            Role::Medic => {
                if let Some(from) = from {
                    self.refresh_protection(from);
                }
                self.refresh_protection(to);
                self.medic_clear(to);
            }
            _ => {}
        }
    }

    /// Return every cube of a cured color in `city` to the reserve.
    pub(crate) fn medic_clear(&mut self, city: CityId) {
        for color in DiseaseColor::ALL {
            if !self.diseases[color].is_cured() {
                continue;
            }
            let removed = self.board[city.index()].remove_cubes(color, u8::MAX);
            if removed > 0 {
                self.diseases[color].restore(removed);
                debug!(city = self.graph.name(city), %color, removed, "medic cleared cubes");
            }
        }
    }
}
