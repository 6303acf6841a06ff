//! # pandemic-engine
//!
//! A deterministic rules engine for a cooperative pandemic board game.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every operation checks all of its
//!    preconditions first, so an `Err` leaves the state untouched.
//!
//! 2. **Arena-indexed board**: cities are `CityId` indices into an
//!    immutable `CityGraph`; the mutable overlay is a `Vec` beside it.
//!
//! 3. **Deterministic**: every shuffle and role draw goes through the
//!    state's seeded `GameRng`, so a seed replays a whole game.
//!
//! ## Architecture
//!
//! - **Outbreak chains** run as an explicit depth-first worklist with a
//!   per-chain visited set, stopping at the first loss.
//!
//! - **Persistent decks**: both piles are `im::Vector`s, so cloning a
//!   `GameState` for look-ahead is cheap.
//!
//! - **Events as commands**: event cards are tagged `EventCommand`s
//!   interpreted by one dispatch function.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, RNG, the `GameState` aggregate, setup
//! - `disease`: colors, color sets and maps, per-color status
//! - `board`: city graph, per-city overlay, the standard world map
//! - `cards`: card values and two-pile decks
//! - `players`: roles, hands, the roster
//! - `infection`: cube placement, outbreaks, epidemics
//! - `protection`: placement blocking from Quarantine Specialist and Medic
//! - `actions`: movement, treat, share, cure, build and role actions
//! - `events`: event card commands
//! - `rules`: turn driver, outcome, invariant checks
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use pandemic_engine::{standard_board, GameConfig, GameState, TurnState};
//!
//! let mut state = GameState::setup(&GameConfig::new(2).with_seed(1), Arc::new(standard_board())).unwrap();
//! let mut turn = TurnState::first(&state).unwrap();
//!
//! state.draw_player_cards(&mut turn).unwrap();
//! state.infect_cities(&mut turn).unwrap();
//! assert!(pandemic_engine::check_invariants(&state).is_empty());
//! ```

pub mod actions;
pub mod board;
pub mod cards;
pub mod core;
pub mod disease;
pub mod events;
pub mod infection;
pub mod players;
pub mod protection;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Difficulty, EngineError, EngineResult, GameConfig, GameRng, GameRngState, GameState};

pub use crate::disease::{ColorMap, ColorSet, DiseaseColor, DiseaseStatus};

pub use crate::board::{standard_board, City, CityBoardState, CityGraph, CityGraphBuilder, CityId};

pub use crate::cards::{Card, CardKind, Deck, DeckType, EventCard};

pub use crate::players::{ActionKind, Player, Role, RoleMap, Roster};

pub use crate::infection::InfectionReport;

pub use crate::actions::Action;

pub use crate::events::{EventChoice, EventCommand, EventSource};

pub use crate::rules::{check_invariants, DrawReport, GameOutcome, InvariantViolation, LossReason, TurnState};
