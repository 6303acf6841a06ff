//! Arena-indexed city graph.
//!
//! Cities are stored in a `Vec` indexed by `CityId`; a name index gives
//! lookups from card names. Adjacency is undirected: `attach` always
//! records both directions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::city::{City, CityId};
use crate::core::error::{EngineError, EngineResult};
use crate::disease::DiseaseColor;

/// Immutable world map.
///
/// ## Usage
///
/// ```
/// use pandemic_engine::board::CityGraphBuilder;
/// use pandemic_engine::disease::DiseaseColor;
///
/// let mut builder = CityGraphBuilder::new();
/// let a = builder.add_city("A", DiseaseColor::Black, 10);
/// let b = builder.add_city("B", DiseaseColor::Blue, 20);
/// builder.attach(a, b);
/// let graph = builder.build();
///
/// assert!(graph.are_adjacent(b, a));
/// assert_eq!(graph.lookup("B"), Some(b));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityGraph {
    cities: Vec<City>,
    by_name: FxHashMap<String, CityId>,
}

impl CityGraph {
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Get a city by id.
    ///
    /// Panics if the id does not come from this graph.
    #[must_use]
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    #[must_use]
    pub fn name(&self, id: CityId) -> &str {
        &self.city(id).name
    }

    #[must_use]
    pub fn color(&self, id: CityId) -> DiseaseColor {
        self.city(id).color
    }

    #[must_use]
    pub fn neighbors(&self, id: CityId) -> &[CityId] {
        self.city(id).neighbors()
    }

    #[must_use]
    pub fn are_adjacent(&self, a: CityId, b: CityId) -> bool {
        self.city(a).is_adjacent(b)
    }

    /// True if `id` indexes a city of this graph.
    #[must_use]
    pub fn contains(&self, id: CityId) -> bool {
        id.index() < self.cities.len()
    }

    /// Check that `id` comes from this graph, failing with `UnknownCity`.
    pub fn require_id(&self, id: CityId) -> EngineResult<CityId> {
        if self.contains(id) {
            Ok(id)
        } else {
            Err(EngineError::UnknownCity(id.to_string()))
        }
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    /// Look up a city by name, failing with `UnknownCity`.
    pub fn require(&self, name: &str) -> EngineResult<CityId> {
        self.lookup(name)
            .ok_or_else(|| EngineError::UnknownCity(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = CityId> {
        (0..self.cities.len() as u16).map(CityId)
    }
}

/// Builder used by map loaders.
#[derive(Debug, Default)]
pub struct CityGraphBuilder {
    graph: CityGraph,
}

impl CityGraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city and return its id.
    ///
    /// Panics if the name is already taken.
    pub fn add_city(&mut self, name: &str, color: DiseaseColor, population: u32) -> CityId {
        if self.graph.by_name.contains_key(name) {
            panic!("City {:?} already exists in graph", name);
        }
        let id = CityId(self.graph.cities.len() as u16);
        self.graph.cities.push(City::new(id, name, color, population));
        self.graph.by_name.insert(name.to_string(), id);
        id
    }

    /// Connect two cities in both directions. Repeated edges are ignored.
    pub fn attach(&mut self, a: CityId, b: CityId) {
        if a == b || self.graph.cities[a.index()].is_adjacent(b) {
            return;
        }
        self.graph.cities[a.index()].neighbors.push(b);
        self.graph.cities[b.index()].neighbors.push(a);
    }

    /// Connect two cities by name.
    ///
    /// Panics if either name is unknown.
    pub fn connect(&mut self, a: &str, b: &str) {
        let (Some(a_id), Some(b_id)) = (self.graph.lookup(a), self.graph.lookup(b)) else {
            panic!("Cannot connect unknown cities {:?} and {:?}", a, b);
        };
        self.attach(a_id, b_id);
    }

    #[must_use]
    pub fn build(self) -> CityGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> (CityGraph, [CityId; 3]) {
        let mut builder = CityGraphBuilder::new();
        let a = builder.add_city("A", DiseaseColor::Black, 10);
        let b = builder.add_city("B", DiseaseColor::Blue, 20);
        let c = builder.add_city("C", DiseaseColor::Blue, 15);
        builder.attach(a, b);
        builder.attach(b, c);
        (builder.build(), [a, b, c])
    }

    #[test]
    fn test_city_fields() {
        let (graph, [a, ..]) = line();
        let city = graph.city(a);
        assert_eq!(city.name, "A");
        assert_eq!(city.color, DiseaseColor::Black);
        assert_eq!(city.population, 10);
    }

    #[test]
    fn test_attach_is_symmetric() {
        let (graph, [a, b, c]) = line();

        assert_eq!(graph.neighbors(a), &[b]);
        assert_eq!(graph.neighbors(b), &[a, c]);
        assert_eq!(graph.neighbors(c), &[b]);
        assert!(!graph.are_adjacent(a, c));
    }

    #[test]
    fn test_duplicate_attach_ignored() {
        let mut builder = CityGraphBuilder::new();
        let a = builder.add_city("A", DiseaseColor::Red, 1);
        let b = builder.add_city("B", DiseaseColor::Red, 1);
        builder.attach(a, b);
        builder.attach(b, a);
        builder.attach(a, a);
        let graph = builder.build();

        assert_eq!(graph.city(a).neighbor_count(), 1);
        assert_eq!(graph.city(b).neighbor_count(), 1);
    }

    #[test]
    fn test_lookup() {
        let (graph, [_, b, _]) = line();
        assert_eq!(graph.lookup("B"), Some(b));
        assert_eq!(graph.require("Z"), Err(EngineError::UnknownCity("Z".to_string())));
        assert_eq!(graph.ids().count(), 3);
    }

    #[test]
    fn test_require_id() {
        let (graph, [a, _, c]) = line();
        assert!(graph.contains(c));
        assert!(!graph.contains(CityId::new(3)));
        assert_eq!(graph.require_id(a), Ok(a));
        assert_eq!(graph.require_id(CityId::new(3)), Err(EngineError::UnknownCity("City(3)".to_string())));
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_duplicate_city_panics() {
        let mut builder = CityGraphBuilder::new();
        builder.add_city("A", DiseaseColor::Red, 1);
        builder.add_city("A", DiseaseColor::Red, 1);
    }
}
