//! Core engine types: configuration, errors, RNG and the game state.
//!
//! Everything here is shared by the board, card, infection and action
//! modules. The rule tables are `const` items in `config`.

pub mod config;
pub mod error;
pub mod rng;
pub mod setup;
pub mod state;

pub use config::{Difficulty, GameConfig};
pub use error::{EngineError, EngineResult};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
