//! Roles, hands and the seating roster.
//!
//! ## Key Types
//!
//! - `Role`: one of the seven fixed roles; identifies a seat
//! - `ActionKind`: action names available to a role
//! - `Player`: a role and its hand
//! - `RoleMap`: one value per role, indexed by `Role`
//! - `Roster`: seated players in turn order plus pawn locations

pub mod player;
pub mod role;
pub mod roster;

pub use player::Player;
pub use role::{ActionKind, Role};
pub use roster::{RoleMap, Roster};
