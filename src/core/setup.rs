//! Building a ready-to-play game.

use std::sync::Arc;

use tracing::{debug, info};

use super::config::{GameConfig, CDC_LOCATION};
use super::error::{EngineError, EngineResult};
use super::rng::GameRng;
use super::state::GameState;
use crate::board::CityGraph;
use crate::cards::{Card, DeckType, EventCard};
use crate::players::Role;

/// Cubes placed by each round of the opening infection, three cities each.
const INITIAL_INFECTIONS: [u8; 3] = [3, 2, 1];
const CITIES_PER_INITIAL_ROUND: usize = 3;

impl GameState {
    /// Build a game from `config` on `graph`.
    ///
    /// In order: shuffle the infection deck and infect nine cities
    /// (3, 2 and 1 cubes), shuffle the player deck with the events, seat
    /// the roles in the CDC city next to its research facility, deal the
    /// opening hands, then seed the epidemics one per window.
    ///
    /// ## Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use pandemic_engine::board::standard_board;
    /// use pandemic_engine::core::{GameConfig, GameState};
    ///
    /// let state = GameState::setup(&GameConfig::new(2).with_seed(7), Arc::new(standard_board())).unwrap();
    /// assert_eq!(state.roster().len(), 2);
    /// assert_eq!(state.infection_deck().discard_pile().len(), 9);
    /// ```
    pub fn setup(config: &GameConfig, graph: Arc<CityGraph>) -> EngineResult<Self> {
        config.validate()?;
        let cdc = graph.require(CDC_LOCATION)?;
        let roles = match &config.roles {
            Some(roles) => roles.clone(),
            None => draw_roles(config.seed, config.player_count),
        };

        let mut state = GameState::new(graph, config.seed);

        for city in state.graph.iter() {
            state.infection_deck.discard(Card::city(city, DeckType::Infection))?;
        }
        state.infection_deck.shuffle(&mut state.rng);

        for cubes in INITIAL_INFECTIONS {
            for _ in 0..CITIES_PER_INITIAL_ROUND {
                let card = state.infection_deck.draw()?;
                if let Some(city) = card.city_id() {
                    let color = state.graph.color(city);
                    state.place_cube(city, color, cubes);
                }
                state.infection_deck.discard(card)?;
            }
        }

        for city in state.graph.iter() {
            state.player_deck.discard(Card::city(city, DeckType::Player))?;
        }
        for event in EventCard::ALL {
            state.player_deck.discard(Card::event(event))?;
        }
        state.player_deck.shuffle(&mut state.rng);

        state.place_research_facility(cdc)?;
        for &role in &roles {
            state.seat_player(role, cdc)?;
        }

        let hand_size = config
            .hand_size()
            .ok_or(EngineError::InvalidPlayerCount(config.player_count))?;
        for &role in &roles {
            for _ in 0..hand_size {
                let card = state.player_deck.draw()?;
                state.roster.player_mut(role)?.hand.push(card);
            }
        }

        state.seed_epidemics(config.difficulty.epidemic_count())?;

        info!(
            players = roles.len(),
            difficulty = ?config.difficulty,
            player_deck = state.player_deck.remaining(),
            "game set up"
        );
        Ok(state)
    }

    /// Insert `count` epidemic cards so exactly one lands in each window
    /// of the player deck. The last window runs to the bottom.
    fn seed_epidemics(&mut self, count: usize) -> EngineResult<()> {
        if count == 0 {
            return Ok(());
        }
        let window = (self.player_deck.remaining() + count) / count;
        for i in 0..count {
            let start = window * i;
            let end = if i + 1 == count { usize::MAX } else { start + window };
            self.player_deck.insert(Card::epidemic(), start)?;
            self.player_deck.shuffle_window(start, end, &mut self.rng);
        }
        debug!(count, window, "epidemics seeded");
        Ok(())
    }
}

/// Draw `count` distinct roles from the pool on a dedicated stream, so the
/// role draw never shifts the deck shuffles.
fn draw_roles(seed: u64, count: usize) -> Vec<Role> {
    let mut rng = GameRng::new(seed).for_context("roles");
    let mut pool = Role::ALL.to_vec();
    rng.shuffle(&mut pool);
    pool.truncate(count);
    pool
}
