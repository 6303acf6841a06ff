//! The world map and the per-city board overlay.
//!
//! ## Key Types
//!
//! - `CityId`: arena index of a city
//! - `City`: immutable name, color, population and adjacency
//! - `CityGraph`: name-indexed arena of cities, built once by a loader
//! - `CityBoardState`: mutable cubes, research facility and blocked colors
//!
//! `standard_board()` builds the 48-city world map.

pub mod city;
pub mod graph;
pub mod standard;
pub mod state;

pub use city::{City, CityId};
pub use graph::{CityGraph, CityGraphBuilder};
pub use standard::standard_board;
pub use state::CityBoardState;
