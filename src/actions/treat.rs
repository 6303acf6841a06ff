//! Treat disease.

use tracing::debug;

use crate::core::error::{EngineError, EngineResult};
use crate::core::state::GameState;
use crate::disease::DiseaseColor;
use crate::players::Role;

impl GameState {
    /// Remove cubes of `color` from the role's city.
    ///
    /// Removes every cube of that color when it is cured or the role is
    /// the Medic, otherwise one. Returns the number removed.
    pub fn treat(&mut self, role: Role, color: DiseaseColor) -> EngineResult<u8> {
        self.ensure_in_progress()?;
        let city = self.location(role)?;
        if self.cubes(city, color) == 0 {
            return Err(EngineError::NothingToTreat(color));
        }

        let quantity = if role == Role::Medic || self.diseases[color].is_cured() {
            u8::MAX
        } else {
            1
        };
        let removed = self.board[city.index()].remove_cubes(color, quantity);
        self.diseases[color].restore(removed);
        debug!(role = %role, city = self.graph.name(city), %color, removed, "treated");
        Ok(removed)
    }
}
