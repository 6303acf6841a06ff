//! The turn driver.
//!
//! A turn runs in three steps, driven by the caller:
//!
//! 1. up to four actions through [`GameState::perform`]
//! 2. two player cards through [`GameState::draw_player_cards`], with
//!    epidemics resolved as they are drawn
//! 3. the infection step through [`GameState::infect_cities`]
//!
//! Event cards may be played at any point with
//! [`GameState::play_event`](crate::core::GameState::play_event), one per
//! turn. [`GameState::end_turn`] passes play to the next seat once every
//! hand is within the limit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actions::Action;
use crate::cards::Card;
use crate::core::config::{ACTIONS_PER_TURN, HAND_LIMIT, PLAYER_CARDS_PER_TURN};
use crate::core::error::{EngineError, EngineResult};
use crate::core::state::GameState;
use crate::infection::InfectionReport;
use crate::players::Role;
use crate::rules::outcome::LossReason;

/// Per-turn counters, owned by the caller rather than the game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub active_role: Role,
    pub event_cards_played: bool,
    pub remaining_actions: u8,
    pub remaining_player_card_draws: u8,
    pub remaining_infection_card_draws: usize,
    /// Set by One Quiet Night.
    pub skip_infections: bool,
    /// The Operations Expert's company plane is once per turn.
    pub company_plane_used: bool,
}

impl TurnState {
    /// Fresh counters for `role`'s turn.
    #[must_use]
    pub fn begin(state: &GameState, role: Role) -> Self {
        Self {
            active_role: role,
            event_cards_played: false,
            remaining_actions: ACTIONS_PER_TURN,
            remaining_player_card_draws: PLAYER_CARDS_PER_TURN,
            remaining_infection_card_draws: state.infection_rate(),
            skip_infections: false,
            company_plane_used: false,
        }
    }

    /// The first seat's opening turn.
    pub fn first(state: &GameState) -> EngineResult<Self> {
        let role = state
            .roster()
            .players()
            .first()
            .map(|p| p.role)
            .ok_or(EngineError::InvalidPlayerCount(0))?;
        Ok(Self::begin(state, role))
    }
}

/// Cards drawn in the player-card step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReport {
    /// Cards that went into the active player's hand.
    pub drawn: Vec<Card>,
    /// One entry per epidemic drawn.
    pub epidemics: Vec<InfectionReport>,
}

impl GameState {
    /// Spend one of `actor`'s actions.
    ///
    /// Pawns other than the actor's may only be moved by the Dispatcher.
    /// Share is allowed when the actor is either party.
    pub fn perform(&mut self, turn: &mut TurnState, actor: Role, action: Action) -> EngineResult<()> {
        self.ensure_in_progress()?;
        if actor != turn.active_role {
            return Err(EngineError::NotYourPawn);
        }
        if turn.remaining_actions == 0 {
            return Err(EngineError::NoActionsRemaining);
        }
        let kind = action.kind();
        if !actor.actions().contains(&kind) {
            return Err(EngineError::RoleUnavailable(owner_of(kind)));
        }

        match &action {
            Action::Drive { pawn, to } => {
                self.check_pawn(actor, *pawn)?;
                self.drive(*pawn, *to)?;
            }
            Action::Shuttle { pawn, to } => {
                self.check_pawn(actor, *pawn)?;
                self.shuttle(*pawn, *to)?;
            }
            Action::DirectFlight { pawn, to } if *pawn == actor => self.direct_flight(actor, *to)?,
            Action::DirectFlight { pawn, to } => {
                self.check_pawn(actor, *pawn)?;
                self.dispatcher_direct_flight(*pawn, *to)?;
            }
            Action::CharterFlight { pawn, to } if *pawn == actor => self.charter_flight(actor, *to)?,
            Action::CharterFlight { pawn, to } => {
                self.check_pawn(actor, *pawn)?;
                self.dispatcher_charter_flight(*pawn, *to)?;
            }
            Action::Build { relocate_from } => self.build(actor, *relocate_from)?,
            Action::Treat { color } => {
                self.treat(actor, *color)?;
            }
            Action::Share { giver, receiver, card } => {
                if actor != *giver && actor != *receiver {
                    return Err(EngineError::NotYourPawn);
                }
                match card {
                    Some(card) => self.researcher_share(*giver, *receiver, card)?,
                    None => self.share(*giver, *receiver)?,
                }
            }
            Action::Cure { cards } => {
                let names: Vec<&str> = cards.iter().map(String::as_str).collect();
                self.cure(actor, &names)?;
            }
            Action::Reclaim { card } => self.reclaim(card)?,
            Action::Conference { pawn, to_role } => self.conference(*pawn, *to_role)?,
            Action::CompanyPlane { to, card } => {
                if turn.company_plane_used {
                    return Err(EngineError::AbilityAlreadyUsed);
                }
                self.company_plane(*to, card)?;
                turn.company_plane_used = true;
            }
        }

        turn.remaining_actions -= 1;
        debug!(role = %actor, action = kind.name(), remaining = turn.remaining_actions, "action performed");
        Ok(())
    }

    fn check_pawn(&self, actor: Role, pawn: Role) -> EngineResult<()> {
        if pawn != actor && actor != Role::Dispatcher {
            return Err(EngineError::NotYourPawn);
        }
        Ok(())
    }

    /// Draw the turn's player cards into the active hand.
    ///
    /// Any actions left are forfeited. Epidemics are resolved on the spot
    /// and go to the discard pile. Needing a card from an empty deck loses
    /// the game. Afterwards the infection step is sized from the current
    /// infection rate.
    pub fn draw_player_cards(&mut self, turn: &mut TurnState) -> EngineResult<DrawReport> {
        self.ensure_in_progress()?;
        turn.remaining_actions = 0;
        let mut report = DrawReport::default();

        while turn.remaining_player_card_draws > 0 {
            let Ok(card) = self.player_deck.draw() else {
                self.declare_loss(LossReason::PlayerDeckExhausted);
                break;
            };
            turn.remaining_player_card_draws -= 1;

            if card.is_epidemic() {
                self.player_deck.discard(card)?;
                let epidemic = self.epidemic()?;
                let lost = epidemic.is_loss();
                report.epidemics.push(epidemic);
                if lost {
                    break;
                }
            } else {
                debug!(role = %turn.active_role, card = %card, "player card drawn");
                self.roster.player_mut(turn.active_role)?.hand.push(card.clone());
                report.drawn.push(card);
            }
        }

        turn.remaining_infection_card_draws = self.infection_rate();
        Ok(report)
    }

    /// Draw and resolve the turn's infection cards.
    ///
    /// One Quiet Night skips the whole step. Stops at the first loss.
    pub fn infect_cities(&mut self, turn: &mut TurnState) -> EngineResult<Vec<InfectionReport>> {
        self.ensure_in_progress()?;
        let mut reports = Vec::new();
        if turn.skip_infections {
            debug!("infection step skipped");
            turn.remaining_infection_card_draws = 0;
            return Ok(reports);
        }

        while turn.remaining_infection_card_draws > 0 {
            let report = self.draw_infection_card()?;
            turn.remaining_infection_card_draws -= 1;
            let lost = report.is_loss();
            reports.push(report);
            if lost {
                break;
            }
        }
        Ok(reports)
    }

    /// Discard a card by name from any hand, e.g. to get under the limit.
    pub fn discard_from_hand(&mut self, role: Role, card: &str) -> EngineResult<()> {
        self.ensure_in_progress()?;
        let index = self
            .roster
            .player(role)?
            .position(card)
            .ok_or_else(|| EngineError::CardNotFound(card.to_string()))?;
        self.spend_card(role, index)
    }

    /// Roles holding more cards than the hand limit.
    #[must_use]
    pub fn over_hand_limit(&self) -> Vec<Role> {
        self.roster
            .players()
            .iter()
            .filter(|p| p.hand_size() > HAND_LIMIT)
            .map(|p| p.role)
            .collect()
    }

    /// Finish `turn` and start the next seat's.
    pub fn end_turn(&mut self, turn: &TurnState) -> EngineResult<TurnState> {
        self.ensure_in_progress()?;
        if let Some(&role) = self.over_hand_limit().first() {
            return Err(EngineError::HandLimitExceeded(role));
        }
        let next = self.roster.next_after(turn.active_role)?;
        debug!(from = %turn.active_role, to = %next, "turn ended");
        Ok(TurnState::begin(self, next))
    }
}

/// The role that owns a role-only action.
fn owner_of(kind: crate::players::ActionKind) -> Role {
    use crate::players::ActionKind;
    match kind {
        ActionKind::Reclaim => Role::ContingencyPlanner,
        ActionKind::Conference => Role::Dispatcher,
        _ => Role::OperationsExpert,
    }
}
