//! Cube reserve and cure marker for one disease.

use serde::{Deserialize, Serialize};

use crate::core::config::DISEASE_RESERVE;

/// Reserve counter and cure flag for one color.
///
/// `reserve + cubes of this color on the board == DISEASE_RESERVE` at all
/// times. A disease is eradicated when it is cured and every cube is back
/// in the reserve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiseaseStatus {
    reserve: u8,
    cured: bool,
}

impl DiseaseStatus {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reserve: DISEASE_RESERVE,
            cured: false,
        }
    }

    #[must_use]
    pub const fn reserve(&self) -> u8 {
        self.reserve
    }

    /// Cubes of this color currently on the board.
    #[must_use]
    pub const fn on_board(&self) -> u8 {
        DISEASE_RESERVE - self.reserve
    }

    #[must_use]
    pub const fn is_cured(&self) -> bool {
        self.cured
    }

    #[must_use]
    pub const fn is_eradicated(&self) -> bool {
        self.cured && self.reserve == DISEASE_RESERVE
    }

    /// Take up to `quantity` cubes out of the reserve.
    ///
    /// Returns how many were taken: none once eradicated, and never more
    /// than the reserve holds.
    pub fn place(&mut self, quantity: u8) -> u8 {
        if self.is_eradicated() {
            return 0;
        }
        let placed = quantity.min(self.reserve);
        self.reserve -= placed;
        placed
    }

    /// Return cubes to the reserve.
    pub fn restore(&mut self, quantity: u8) {
        debug_assert!(self.reserve + quantity <= DISEASE_RESERVE);
        self.reserve = (self.reserve + quantity).min(DISEASE_RESERVE);
    }

    pub fn cure(&mut self) {
        self.cured = true;
    }
}

impl Default for DiseaseStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DiseaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.cured, self.is_eradicated()) {
            (_, true) => write!(f, "Eradicated"),
            (true, false) => write!(f, "Cured, {} remaining", self.on_board()),
            (false, _) => write!(f, "{} remaining", self.on_board()),
        }
    }
}
