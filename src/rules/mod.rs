//! Game flow: the turn driver, win/loss outcome and invariant checks.

pub mod invariants;
pub mod outcome;
pub mod turn;

pub use invariants::{check_invariants, InvariantViolation};
pub use outcome::{GameOutcome, LossReason};
pub use turn::{DrawReport, TurnState};
