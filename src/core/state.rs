//! The game state aggregate.
//!
//! `GameState` owns everything that changes during play: disease status,
//! the per-city overlay, the roster, both decks, the contingency slot and
//! the outbreak and infection-rate markers. The city graph is shared
//! behind an `Arc` because it never changes after load.
//!
//! Operations live next to their concern as `impl GameState` blocks:
//! infection in `infection`, protection in `protection`, actions in
//! `actions`, events in `events`, the turn driver in `rules::turn`.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::config::{INFECTION_RATE_ESCALATION, RESEARCH_FACILITY_COUNT};
use super::error::{EngineError, EngineResult};
use super::rng::{GameRng, GameRngState};
use crate::board::{CityBoardState, CityGraph, CityId};
use crate::cards::{Card, Deck, DeckType};
use crate::disease::{ColorMap, DiseaseColor, DiseaseStatus};
use crate::players::{Player, Role, Roster};
use crate::rules::outcome::{GameOutcome, LossReason};

/// Complete state of one game.
///
/// `Clone` is cheap for the decks (persistent vectors) and the graph
/// (shared); use [`GameState::branch`] for look-ahead so the copy does not
/// replay the same shuffles.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) graph: Arc<CityGraph>,
    pub(crate) diseases: ColorMap<DiseaseStatus>,
    /// Indexed by `CityId`.
    pub(crate) board: Vec<CityBoardState>,
    pub(crate) roster: Roster,
    pub(crate) infection_deck: Deck,
    pub(crate) player_deck: Deck,
    pub(crate) contingency_card: Option<Card>,
    pub(crate) outbreaks: u8,
    pub(crate) infection_rate_level: usize,
    pub(crate) research_facility_reserve: u8,
    pub(crate) outcome: Option<GameOutcome>,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// An empty board: full reserves, no cubes, no players, empty decks.
    ///
    /// Use [`GameState::setup`] for a ready-to-play game.
    #[must_use]
    pub fn new(graph: Arc<CityGraph>, seed: u64) -> Self {
        let board = vec![CityBoardState::new(); graph.len()];
        Self {
            graph,
            diseases: ColorMap::new(|_| DiseaseStatus::new()),
            board,
            roster: Roster::new(),
            infection_deck: Deck::new(DeckType::Infection),
            player_deck: Deck::new(DeckType::Player),
            contingency_card: None,
            outbreaks: 0,
            infection_rate_level: 0,
            research_facility_reserve: RESEARCH_FACILITY_COUNT,
            outcome: None,
            rng: GameRng::new(seed),
        }
    }

    /// Clone for look-ahead with an independent RNG stream.
    ///
    /// Takes `&mut self` because forking the RNG advances the fork counter.
    #[must_use]
    pub fn branch(&mut self) -> Self {
        let rng = self.rng.fork();
        Self { rng, ..self.clone() }
    }

    // === Board ===

    #[must_use]
    pub fn graph(&self) -> &CityGraph {
        &self.graph
    }

    /// Shared handle to the city graph.
    #[must_use]
    pub fn graph_handle(&self) -> Arc<CityGraph> {
        Arc::clone(&self.graph)
    }

    /// Resolve a city name.
    pub fn city_id(&self, name: &str) -> EngineResult<CityId> {
        self.graph.require(name)
    }

    #[must_use]
    pub fn city_state(&self, city: CityId) -> &CityBoardState {
        &self.board[city.index()]
    }

    #[must_use]
    pub fn board(&self) -> &[CityBoardState] {
        &self.board
    }

    #[must_use]
    pub fn cubes(&self, city: CityId, color: DiseaseColor) -> u8 {
        self.board[city.index()].cubes(color)
    }

    #[must_use]
    pub fn has_research_facility(&self, city: CityId) -> bool {
        self.board[city.index()].research_facility
    }

    /// Cities that currently hold a research facility.
    pub fn research_facilities(&self) -> impl Iterator<Item = CityId> + '_ {
        self.graph.ids().filter(|&id| self.board[id.index()].research_facility)
    }

    #[must_use]
    pub fn research_facility_reserve(&self) -> u8 {
        self.research_facility_reserve
    }

    // === Diseases ===

    #[must_use]
    pub fn disease(&self, color: DiseaseColor) -> &DiseaseStatus {
        &self.diseases[color]
    }

    #[must_use]
    pub fn diseases(&self) -> &ColorMap<DiseaseStatus> {
        &self.diseases
    }

    #[must_use]
    pub fn outbreaks(&self) -> u8 {
        self.outbreaks
    }

    #[must_use]
    pub fn infection_rate_level(&self) -> usize {
        self.infection_rate_level
    }

    /// Infection cards drawn at the end of each turn.
    #[must_use]
    pub fn infection_rate(&self) -> usize {
        INFECTION_RATE_ESCALATION[self.infection_rate_level]
    }

    // === Players ===

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn player(&self, role: Role) -> EngineResult<&Player> {
        self.roster.player(role)
    }

    pub fn location(&self, role: Role) -> EngineResult<CityId> {
        self.roster.location(role)
    }

    /// Seat a role at `city` and apply any placement protection it brings.
    pub fn seat_player(&mut self, role: Role, city: CityId) -> EngineResult<()> {
        self.graph.require_id(city)?;
        self.roster.seat(role, city)?;
        debug!(role = %role, city = self.graph.name(city), "seated player");
        self.after_arrival(role, None, city);
        Ok(())
    }

    /// Put a card straight into a hand, bypassing the decks.
    ///
    /// For setup and scenario construction.
    pub fn give_card(&mut self, role: Role, card: Card) -> EngineResult<()> {
        if card.deck != DeckType::Player {
            return Err(EngineError::TypeMismatch {
                expected: DeckType::Player,
                found: card.deck,
            });
        }
        self.roster.player_mut(role)?.hand.push(card);
        Ok(())
    }

    /// A player card for `city`, for building hands and decks.
    #[must_use]
    pub fn city_card(&self, city: CityId) -> Card {
        Card::city(self.graph.city(city), DeckType::Player)
    }

    // === Decks ===

    #[must_use]
    pub fn infection_deck(&self) -> &Deck {
        &self.infection_deck
    }

    #[must_use]
    pub fn player_deck(&self) -> &Deck {
        &self.player_deck
    }

    /// Mutable infection deck, for arranging scenarios.
    pub fn infection_deck_mut(&mut self) -> &mut Deck {
        &mut self.infection_deck
    }

    /// Mutable player deck, for arranging scenarios.
    pub fn player_deck_mut(&mut self) -> &mut Deck {
        &mut self.player_deck
    }

    #[must_use]
    pub fn contingency_card(&self) -> Option<&Card> {
        self.contingency_card.as_ref()
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Resume the shuffle stream from a saved checkpoint.
    pub fn restore_rng(&mut self, checkpoint: &GameRngState) {
        self.rng = GameRng::restore(checkpoint);
    }

    // === Research facilities ===

    /// Place a research facility from the reserve.
    pub fn place_research_facility(&mut self, city: CityId) -> EngineResult<()> {
        self.graph.require_id(city)?;
        if self.board[city.index()].research_facility {
            return Err(EngineError::ResearchFacilityExists(self.graph.name(city).to_string()));
        }
        if self.research_facility_reserve == 0 {
            return Err(EngineError::NoResearchFacilityAvailable);
        }
        self.research_facility_reserve -= 1;
        self.board[city.index()].research_facility = true;
        debug!(city = self.graph.name(city), "research facility placed");
        Ok(())
    }

    /// Check that a facility can go in `city`, optionally moved from
    /// `relocate_from` when the reserve is empty.
    pub(crate) fn check_facility_site(&self, city: CityId, relocate_from: Option<CityId>) -> EngineResult<()> {
        self.graph.require_id(city)?;
        if let Some(from) = relocate_from {
            self.graph.require_id(from)?;
        }
        if self.board[city.index()].research_facility {
            return Err(EngineError::ResearchFacilityExists(self.graph.name(city).to_string()));
        }
        match relocate_from {
            Some(from) if !self.board[from.index()].research_facility => {
                Err(EngineError::NoResearchFacility(self.graph.name(from).to_string()))
            }
            Some(_) => Ok(()),
            None if self.research_facility_reserve == 0 => Err(EngineError::NoResearchFacilityAvailable),
            None => Ok(()),
        }
    }

    /// Build after [`check_facility_site`](Self::check_facility_site) passed.
    pub(crate) fn build_facility_unchecked(&mut self, city: CityId, relocate_from: Option<CityId>) {
        match relocate_from {
            Some(from) => {
                self.board[from.index()].research_facility = false;
                debug!(from = self.graph.name(from), to = self.graph.name(city), "research facility moved");
            }
            None => self.research_facility_reserve -= 1,
        }
        self.board[city.index()].research_facility = true;
        debug!(city = self.graph.name(city), "research facility built");
    }

    // === Outcome ===

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Fail with `GameOver` once the game has ended.
    pub fn ensure_in_progress(&self) -> EngineResult<()> {
        match self.outcome {
            Some(_) => Err(EngineError::GameOver),
            None => Ok(()),
        }
    }

    /// Record a loss. The first recorded outcome wins.
    pub(crate) fn declare_loss(&mut self, reason: LossReason) {
        if self.outcome.is_none() {
            warn!(%reason, "game lost");
            self.outcome = Some(GameOutcome::Defeat(reason));
        }
    }

    /// Record a victory if every disease is cured.
    pub(crate) fn check_victory(&mut self) -> bool {
        if self.outcome.is_none() && self.diseases.values().all(DiseaseStatus::is_cured) {
            info!("all diseases cured");
            self.outcome = Some(GameOutcome::Victory);
        }
        self.outcome == Some(GameOutcome::Victory)
    }
}
