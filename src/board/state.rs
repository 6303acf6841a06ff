//! Mutable per-city overlay.

use serde::{Deserialize, Serialize};

use crate::disease::{ColorMap, ColorSet, DiseaseColor};

/// Cubes, research facility and placement-blocking colors of one city.
///
/// `protected_colors` is derived from pawn positions by the protection
/// overlay; nothing else writes it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityBoardState {
    pub disease_count: ColorMap<u8>,
    pub research_facility: bool,
    pub protected_colors: ColorSet,
}

impl CityBoardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cubes(&self, color: DiseaseColor) -> u8 {
        self.disease_count[color]
    }

    #[must_use]
    pub fn total_cubes(&self) -> u32 {
        self.disease_count.values().map(|&n| u32::from(n)).sum()
    }

    /// True if cubes of `color` may not be placed here.
    #[must_use]
    pub fn blocks(&self, color: DiseaseColor) -> bool {
        self.protected_colors.contains(color)
    }

    pub(crate) fn add_cubes(&mut self, color: DiseaseColor, quantity: u8) {
        self.disease_count[color] += quantity;
    }

    /// Remove up to `quantity` cubes, returning how many were removed.
    pub(crate) fn remove_cubes(&mut self, color: DiseaseColor, quantity: u8) -> u8 {
        let removed = quantity.min(self.disease_count[color]);
        self.disease_count[color] -= removed;
        removed
    }
}
