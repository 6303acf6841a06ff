//! How a game ends.

use serde::{Deserialize, Serialize};

use crate::disease::DiseaseColor;

/// Why the players lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    /// The outbreak marker reached the limit.
    OutbreakLimit,
    /// A cube was needed from an empty reserve.
    CubesExhausted(DiseaseColor),
    /// A player card had to be drawn from an empty deck.
    PlayerDeckExhausted,
}

impl std::fmt::Display for LossReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LossReason::OutbreakLimit => f.write_str("too many outbreaks"),
            LossReason::CubesExhausted(color) => write!(f, "ran out of {color} cubes"),
            LossReason::PlayerDeckExhausted => f.write_str("the player deck ran out"),
        }
    }
}

/// Result of a finished game. Play is cooperative, so there is one result
/// for the whole table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// All four diseases cured.
    Victory,
    Defeat(LossReason),
}

impl GameOutcome {
    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, GameOutcome::Victory)
    }

    #[must_use]
    pub fn loss_reason(&self) -> Option<LossReason> {
        match self {
            GameOutcome::Victory => None,
            GameOutcome::Defeat(reason) => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_helpers() {
        assert!(GameOutcome::Victory.is_victory());
        let defeat = GameOutcome::Defeat(LossReason::CubesExhausted(DiseaseColor::Red));
        assert!(!defeat.is_victory());
        assert_eq!(defeat.loss_reason(), Some(LossReason::CubesExhausted(DiseaseColor::Red)));
        assert_eq!(
            LossReason::CubesExhausted(DiseaseColor::Red).to_string(),
            format!("ran out of {} cubes", DiseaseColor::Red)
        );
    }
}
