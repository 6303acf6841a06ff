//! Role identity and role name tables.

use serde::{Deserialize, Serialize};

/// One of the seven roles. At most one player holds each role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    ContingencyPlanner,
    Dispatcher,
    Medic,
    OperationsExpert,
    QuarantineSpecialist,
    Scientist,
    Researcher,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::ContingencyPlanner,
        Role::Dispatcher,
        Role::Medic,
        Role::OperationsExpert,
        Role::QuarantineSpecialist,
        Role::Scientist,
        Role::Researcher,
    ];

    pub const COUNT: usize = 7;

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::ContingencyPlanner => "Contingency Planner",
            Role::Dispatcher => "Dispatcher",
            Role::Medic => "Medic",
            Role::OperationsExpert => "Operations Expert",
            Role::QuarantineSpecialist => "Quarantine Specialist",
            Role::Scientist => "Scientist",
            Role::Researcher => "Researcher",
        }
    }

    /// Actions this role may take: the eight shared actions, then the
    /// role's own action if it has one.
    #[must_use]
    pub fn actions(self) -> Vec<ActionKind> {
        let mut actions = ActionKind::BASE.to_vec();
        match self {
            Role::ContingencyPlanner => actions.push(ActionKind::Reclaim),
            Role::Dispatcher => actions.push(ActionKind::Conference),
            Role::OperationsExpert => actions.push(ActionKind::CompanyPlane),
            _ => {}
        }
        actions
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of the actions a player can spend an action on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Drive,
    DirectFlight,
    CharterFlight,
    Shuttle,
    Build,
    Treat,
    Share,
    Cure,
    Reclaim,
    Conference,
    CompanyPlane,
}

impl ActionKind {
    /// Actions every role has.
    pub const BASE: [ActionKind; 8] = [
        ActionKind::Drive,
        ActionKind::DirectFlight,
        ActionKind::CharterFlight,
        ActionKind::Shuttle,
        ActionKind::Build,
        ActionKind::Treat,
        ActionKind::Share,
        ActionKind::Cure,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Drive => "Drive",
            ActionKind::DirectFlight => "Direct Flight",
            ActionKind::CharterFlight => "Charter Flight",
            ActionKind::Shuttle => "Shuttle Flight",
            ActionKind::Build => "Build a Research Facility",
            ActionKind::Treat => "Treat Disease",
            ActionKind::Share => "Share Knowledge",
            ActionKind::Cure => "Discover a Cure",
            ActionKind::Reclaim => "Reclaim",
            ActionKind::Conference => "Conference",
            ActionKind::CompanyPlane => "Company Plane",
        }
    }
}
