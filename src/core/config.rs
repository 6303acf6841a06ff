//! Game configuration and rules constants.
//!
//! The rule tables are immutable `const` items; a `GameConfig` only carries
//! the choices made per game (difficulty, seat count, seed, optional roles).

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use crate::players::Role;

/// Cubes of each color in the box.
pub const DISEASE_RESERVE: u8 = 24;

/// A city outbreaks instead of receiving a fourth cube of one color.
pub const MAX_CUBES_PER_CITY: u8 = 3;

/// Reaching this many outbreaks loses the game.
pub const OUTBREAK_LIMIT: u8 = 8;

/// Infection cards drawn per turn, indexed by infection rate level.
pub const INFECTION_RATE_ESCALATION: [usize; 7] = [2, 2, 2, 3, 3, 4, 4];

pub const MIN_PLAYER_COUNT: usize = 2;
pub const MAX_PLAYER_COUNT: usize = 4;

/// Opening hand size, indexed by `player_count - MIN_PLAYER_COUNT`.
pub const HAND_SIZES: [usize; 3] = [4, 3, 2];

pub const HAND_LIMIT: usize = 7;

pub const RESEARCH_FACILITY_COUNT: u8 = 6;

pub const BASE_EPIDEMIC_COUNT: usize = 4;

/// Starting city for every pawn and the first research facility.
pub const CDC_LOCATION: &str = "Atlanta";

pub const ACTIONS_PER_TURN: u8 = 4;
pub const PLAYER_CARDS_PER_TURN: u8 = 2;

pub const CURE_CARDS: usize = 5;
pub const SCIENTIST_CURE_CARDS: usize = 4;

/// Difficulty selects how many epidemic cards are shuffled in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn epidemic_count(self) -> usize {
        BASE_EPIDEMIC_COUNT + self as usize
    }
}

/// Per-game setup choices.
///
/// ## Example
///
/// ```
/// use pandemic_engine::core::{Difficulty, GameConfig};
/// use pandemic_engine::players::Role;
///
/// let config = GameConfig::new(2)
///     .with_difficulty(Difficulty::Hard)
///     .with_seed(7)
///     .with_roles(vec![Role::Medic, Role::Scientist]);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.difficulty.epidemic_count(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub difficulty: Difficulty,

    /// Number of seats, 2 to 4.
    pub player_count: usize,

    /// Seed for every shuffle and role draw.
    pub seed: u64,

    /// Fixed roles in seating order. `None` draws them from the pool.
    pub roles: Option<Vec<Role>>,
}

impl GameConfig {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            difficulty: Difficulty::default(),
            player_count,
            seed: 0,
            roles: None,
        }
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = Some(roles);
        self
    }

    /// Opening hand size for this seat count, `None` outside 2 to 4 seats.
    #[must_use]
    pub fn hand_size(&self) -> Option<usize> {
        self.player_count
            .checked_sub(MIN_PLAYER_COUNT)
            .and_then(|i| HAND_SIZES.get(i).copied())
    }

    /// Check seat count and role list.
    pub fn validate(&self) -> EngineResult<()> {
        if !(MIN_PLAYER_COUNT..=MAX_PLAYER_COUNT).contains(&self.player_count) {
            return Err(EngineError::InvalidPlayerCount(self.player_count));
        }
        if let Some(roles) = &self.roles {
            if roles.len() != self.player_count {
                return Err(EngineError::InvalidPlayerCount(roles.len()));
            }
            for (i, role) in roles.iter().enumerate() {
                if roles[..i].contains(role) {
                    return Err(EngineError::DuplicateRole(*role));
                }
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MIN_PLAYER_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epidemic_counts() {
        assert_eq!(Difficulty::Easy.epidemic_count(), 4);
        assert_eq!(Difficulty::Medium.epidemic_count(), 5);
        assert_eq!(Difficulty::Hard.epidemic_count(), 6);
    }

    #[test]
    fn test_hand_sizes() {
        assert_eq!(GameConfig::new(2).hand_size(), Some(4));
        assert_eq!(GameConfig::new(3).hand_size(), Some(3));
        assert_eq!(GameConfig::new(4).hand_size(), Some(2));
    }

    #[test]
    fn test_hand_size_outside_seat_range() {
        assert_eq!(GameConfig::new(0).hand_size(), None);
        assert_eq!(GameConfig::new(1).hand_size(), None);
        assert_eq!(GameConfig::new(5).hand_size(), None);
    }

    #[test]
    fn test_validate_player_count() {
        assert_eq!(GameConfig::new(1).validate(), Err(EngineError::InvalidPlayerCount(1)));
        assert_eq!(GameConfig::new(5).validate(), Err(EngineError::InvalidPlayerCount(5)));
        assert!(GameConfig::new(4).validate().is_ok());
    }

    #[test]
    fn test_validate_roles() {
        let wrong_len = GameConfig::new(3).with_roles(vec![Role::Medic]);
        assert_eq!(wrong_len.validate(), Err(EngineError::InvalidPlayerCount(1)));

        let dup = GameConfig::new(2).with_roles(vec![Role::Medic, Role::Medic]);
        assert_eq!(dup.validate(), Err(EngineError::DuplicateRole(Role::Medic)));
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new(3)
            .with_difficulty(Difficulty::Medium)
            .with_seed(99)
            .with_roles(vec![Role::Dispatcher, Role::Researcher, Role::Medic]);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
