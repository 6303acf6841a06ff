//! Infection and outbreak engine.
//!
//! Cube placement runs through one depth-first worklist per triggering
//! event (an infection card or an epidemic). A city outbreaks at most once
//! per chain; the chain stops as soon as a loss condition is hit.
//!
//! ## Key Types
//!
//! - `InfectionReport`: what one infection or epidemic did to the board

pub mod epidemic;
pub mod outbreak;

use serde::{Deserialize, Serialize};

use crate::board::CityId;
use crate::disease::DiseaseColor;
use crate::rules::outcome::LossReason;

/// Result of infecting one city, including every outbreak it set off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectionReport {
    /// City named by the infection card.
    pub city: CityId,
    pub color: DiseaseColor,
    /// Cubes placed anywhere on the board by this chain.
    pub cubes_placed: u8,
    /// Cities that outbroke, in the order they did.
    pub outbreaks: Vec<CityId>,
    pub loss: Option<LossReason>,
}

impl InfectionReport {
    #[must_use]
    pub fn new(city: CityId, color: DiseaseColor) -> Self {
        Self {
            city,
            color,
            cubes_placed: 0,
            outbreaks: Vec::new(),
            loss: None,
        }
    }

    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.loss.is_some()
    }
}
