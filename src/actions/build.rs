//! Build a research facility.

use crate::board::CityId;
use crate::core::error::EngineResult;
use crate::core::state::GameState;
use crate::players::Role;

impl GameState {
    /// Build a research facility in the role's city by discarding that
    /// city's card. The Operations Expert needs no card.
    ///
    /// With the reserve empty, `relocate_from` names the facility to move.
    pub fn build(&mut self, role: Role, relocate_from: Option<CityId>) -> EngineResult<()> {
        self.ensure_in_progress()?;
        let city = self.location(role)?;
        self.check_facility_site(city, relocate_from)?;

        if role != Role::OperationsExpert {
            let index = self.city_card_in_hand(role, city)?;
            self.spend_card(role, index)?;
        }
        self.build_facility_unchecked(city, relocate_from);
        Ok(())
    }
}
