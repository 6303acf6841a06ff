//! Seated players and pawn locations.
//!
//! ## RoleMap
//!
//! Fixed-size per-role storage indexed by `Role`, one slot for each of the
//! seven roles whether or not it is seated.
//!
//! ## Roster
//!
//! Players in seating order plus `RoleMap<Option<CityId>>` locations. A
//! role is seated exactly when its location slot is `Some`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::player::Player;
use super::role::Role;
use crate::board::CityId;
use crate::core::error::{EngineError, EngineResult};

/// Per-role data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use pandemic_engine::players::{Role, RoleMap};
///
/// let mut uses: RoleMap<u8> = RoleMap::with_default();
/// uses[Role::Dispatcher] += 1;
/// assert_eq!(uses[Role::Dispatcher], 1);
/// assert_eq!(uses[Role::Medic], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleMap<T> {
    data: [T; Role::COUNT],
}

impl<T> RoleMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Role) -> T) -> Self {
        Self {
            data: Role::ALL.map(factory),
        }
    }

    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, role: Role) -> &T {
        &self.data[role.index()]
    }

    pub fn get_mut(&mut self, role: Role) -> &mut T {
        &mut self.data[role.index()]
    }

    /// Iterate over (Role, &T) pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for RoleMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Role> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: Role) -> &Self::Output {
        self.get(role)
    }
}

impl<T> IndexMut<Role> for RoleMap<T> {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        self.get_mut(role)
    }
}

/// Players in turn order and where each pawn stands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    locations: RoleMap<Option<CityId>>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a role with an empty hand at `city`.
    pub fn seat(&mut self, role: Role, city: CityId) -> EngineResult<()> {
        if self.is_seated(role) {
            return Err(EngineError::DuplicateRole(role));
        }
        self.players.push(Player::new(role));
        self.locations[role] = Some(city);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn is_seated(&self, role: Role) -> bool {
        self.locations[role].is_some()
    }

    /// Players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.players.iter().map(|p| p.role)
    }

    /// The player holding `role`, or `RoleUnavailable`.
    pub fn player(&self, role: Role) -> EngineResult<&Player> {
        self.players
            .iter()
            .find(|p| p.role == role)
            .ok_or(EngineError::RoleUnavailable(role))
    }

    pub fn player_mut(&mut self, role: Role) -> EngineResult<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.role == role)
            .ok_or(EngineError::RoleUnavailable(role))
    }

    /// Both players mutably, for card transfers. The roles must differ.
    pub(crate) fn pair_mut(&mut self, a: Role, b: Role) -> EngineResult<(&mut Player, &mut Player)> {
        let ia = self.seat_index(a)?;
        let ib = self.seat_index(b)?;
        debug_assert_ne!(ia, ib);
        if ia < ib {
            let (left, right) = self.players.split_at_mut(ib);
            Ok((&mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.players.split_at_mut(ia);
            Ok((&mut right[0], &mut left[ib]))
        }
    }

    /// Seat index of `role` in turn order.
    pub fn seat_index(&self, role: Role) -> EngineResult<usize> {
        self.players
            .iter()
            .position(|p| p.role == role)
            .ok_or(EngineError::RoleUnavailable(role))
    }

    /// The role seated after `role`, wrapping around.
    pub fn next_after(&self, role: Role) -> EngineResult<Role> {
        let i = self.seat_index(role)?;
        Ok(self.players[(i + 1) % self.players.len()].role)
    }

    /// Current city of a seated role.
    pub fn location(&self, role: Role) -> EngineResult<CityId> {
        self.locations[role].ok_or(EngineError::RoleUnavailable(role))
    }

    #[must_use]
    pub fn locations(&self) -> &RoleMap<Option<CityId>> {
        &self.locations
    }

    /// Move a pawn without any rules checks. Returns the previous city.
    pub(crate) fn set_location(&mut self, role: Role, city: CityId) -> EngineResult<CityId> {
        let previous = self.location(role)?;
        self.locations[role] = Some(city);
        Ok(previous)
    }

    /// Seated roles currently standing in `city`.
    pub fn occupants(&self, city: CityId) -> impl Iterator<Item = Role> + '_ {
        self.locations
            .iter()
            .filter(move |(_, loc)| **loc == Some(city))
            .map(|(role, _)| role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_map_new() {
        let map: RoleMap<usize> = RoleMap::new(|r| r.index() * 10);
        assert_eq!(map[Role::ContingencyPlanner], 0);
        assert_eq!(map[Role::Researcher], 60);
    }

    #[test]
    fn test_role_map_iter() {
        let map: RoleMap<bool> = RoleMap::new(|r| r == Role::Medic);
        let set: Vec<_> = map.iter().filter(|(_, v)| **v).map(|(r, _)| r).collect();
        assert_eq!(set, vec![Role::Medic]);
    }

    #[test]
    fn test_role_map_serialization() {
        let map: RoleMap<u8> = RoleMap::new(|r| r.index() as u8);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: RoleMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_seat_and_locate() {
        let mut roster = Roster::new();
        roster.seat(Role::Medic, CityId(0)).unwrap();
        roster.seat(Role::Scientist, CityId(0)).unwrap();

        assert_eq!(roster.len(), 2);
        assert!(roster.is_seated(Role::Medic));
        assert!(!roster.is_seated(Role::Dispatcher));
        assert_eq!(roster.seat(Role::Medic, CityId(1)), Err(EngineError::DuplicateRole(Role::Medic)));
        assert_eq!(
            roster.location(Role::Dispatcher),
            Err(EngineError::RoleUnavailable(Role::Dispatcher))
        );

        assert_eq!(roster.set_location(Role::Medic, CityId(3)), Ok(CityId(0)));
        assert_eq!(roster.occupants(CityId(0)).collect::<Vec<_>>(), vec![Role::Scientist]);
        assert_eq!(roster.occupants(CityId(3)).collect::<Vec<_>>(), vec![Role::Medic]);
    }

    #[test]
    fn test_turn_order() {
        let mut roster = Roster::new();
        for role in [Role::Researcher, Role::Dispatcher, Role::Medic] {
            roster.seat(role, CityId(0)).unwrap();
        }
        assert_eq!(roster.next_after(Role::Researcher), Ok(Role::Dispatcher));
        assert_eq!(roster.next_after(Role::Medic), Ok(Role::Researcher));
        assert_eq!(roster.roles().collect::<Vec<_>>(), vec![Role::Researcher, Role::Dispatcher, Role::Medic]);
    }

    #[test]
    fn test_pair_mut() {
        let mut roster = Roster::new();
        roster.seat(Role::Medic, CityId(0)).unwrap();
        roster.seat(Role::Scientist, CityId(0)).unwrap();

        let (a, b) = roster.pair_mut(Role::Scientist, Role::Medic).unwrap();
        assert_eq!(a.role, Role::Scientist);
        assert_eq!(b.role, Role::Medic);
    }
}
