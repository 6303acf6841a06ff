//! City identity and static city data.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::disease::DiseaseColor;

/// Arena index of a city inside its `CityGraph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub u16);

impl CityId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "City({})", self.0)
    }
}

/// A node of the world map. Immutable once the graph is built.
///
/// Neighbors are ids into the same graph, never owning references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub color: DiseaseColor,
    pub population: u32,
    pub(crate) neighbors: SmallVec<[CityId; 6]>,
}

impl City {
    pub(crate) fn new(id: CityId, name: impl Into<String>, color: DiseaseColor, population: u32) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            population,
            neighbors: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn neighbors(&self) -> &[CityId] {
        &self.neighbors
    }

    #[must_use]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    #[must_use]
    pub fn is_adjacent(&self, other: CityId) -> bool {
        self.neighbors.contains(&other)
    }
}
