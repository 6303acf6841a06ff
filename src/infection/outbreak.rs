//! Cube placement and outbreak chains.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::InfectionReport;
use crate::board::CityId;
use crate::core::config::{MAX_CUBES_PER_CITY, OUTBREAK_LIMIT};
use crate::core::state::GameState;
use crate::disease::DiseaseColor;
use crate::rules::outcome::LossReason;

impl GameState {
    /// Move up to `quantity` cubes from the reserve onto `city`.
    ///
    /// Places nothing if the city blocks `color` or the disease is
    /// eradicated, and never more than the reserve holds. Does not check
    /// the per-city cap; use [`infect`](Self::infect) for rules-driven
    /// placement. Returns the number placed. Panics if `city` is not on
    /// this game's board.
    pub fn place_cube(&mut self, city: CityId, color: DiseaseColor, quantity: u8) -> u8 {
        if self.board[city.index()].blocks(color) {
            return 0;
        }
        let placed = self.diseases[color].place(quantity);
        self.board[city.index()].add_cubes(color, placed);
        if placed > 0 {
            debug!(city = self.graph.name(city), %color, placed, "cubes placed");
        }
        placed
    }

    /// Infect `city` with `count` cubes of `color` as one chain.
    ///
    /// Each cube goes through the outbreak rules in turn, sharing one
    /// visited set, so the city outbreaks at most once however many cubes
    /// overflow it. A loss stops the chain and is recorded on the state.
    pub fn infect(&mut self, city: CityId, color: DiseaseColor, count: u8) -> InfectionReport {
        let mut report = InfectionReport::new(city, color);
        let mut visited = FxHashSet::default();

        for _ in 0..count {
            if let Some(reason) = self.outbreak_propagate(city, color, &mut visited, &mut report) {
                report.loss = Some(reason);
                self.declare_loss(reason);
                break;
            }
        }
        report
    }

    /// Add one cube of `color` to `origin`, spreading outbreaks depth-first.
    ///
    /// Per city, in order: a blocked city or eradicated disease takes
    /// nothing; an empty reserve is a loss; a city already at the cap
    /// outbreaks once per chain, pushing its neighbors; otherwise one
    /// cube is placed.
    pub(crate) fn outbreak_propagate(
        &mut self,
        origin: CityId,
        color: DiseaseColor,
        visited: &mut FxHashSet<CityId>,
        report: &mut InfectionReport,
    ) -> Option<LossReason> {
        let mut stack = vec![origin];

        while let Some(city) = stack.pop() {
            if self.board[city.index()].blocks(color) || self.diseases[color].is_eradicated() {
                continue;
            }
            if self.diseases[color].reserve() == 0 {
                return Some(LossReason::CubesExhausted(color));
            }

            if self.board[city.index()].cubes(color) >= MAX_CUBES_PER_CITY {
                if !visited.insert(city) {
                    continue;
                }
                self.outbreaks += 1;
                report.outbreaks.push(city);
                debug!(city = self.graph.name(city), %color, outbreaks = self.outbreaks, "outbreak");
                if self.outbreaks >= OUTBREAK_LIMIT {
                    return Some(LossReason::OutbreakLimit);
                }
                // Reversed so neighbors resolve in adjacency order.
                stack.extend(self.graph.neighbors(city).iter().rev());
            } else {
                report.cubes_placed += self.place_cube(city, color, 1);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::board::{CityGraph, CityGraphBuilder};
    use crate::core::config::DISEASE_RESERVE;
    use crate::players::Role;

    /// A - B - C in a line, plus D hanging off C, all blue.
    fn line_graph() -> (Arc<CityGraph>, [CityId; 4]) {
        let mut builder = CityGraphBuilder::new();
        let a = builder.add_city("A", DiseaseColor::Blue, 1);
        let b = builder.add_city("B", DiseaseColor::Blue, 1);
        let c = builder.add_city("C", DiseaseColor::Blue, 1);
        let d = builder.add_city("D", DiseaseColor::Blue, 1);
        builder.attach(a, b);
        builder.attach(b, c);
        builder.attach(c, d);
        (Arc::new(builder.build()), [a, b, c, d])
    }

    #[test]
    fn test_place_then_count() {
        let (graph, [a, ..]) = line_graph();
        let mut state = GameState::new(graph, 0);

        assert_eq!(state.place_cube(a, DiseaseColor::Blue, 3), 3);
        assert_eq!(state.cubes(a, DiseaseColor::Blue), 3);
        assert_eq!(state.disease(DiseaseColor::Blue).reserve(), DISEASE_RESERVE - 3);
    }

    #[test]
    fn test_place_respects_protection() {
        let (graph, [a, b, ..]) = line_graph();
        let mut state = GameState::new(graph, 0);
        state.seat_player(Role::QuarantineSpecialist, a).unwrap();

        assert_eq!(state.place_cube(b, DiseaseColor::Blue, 1), 0);
        assert_eq!(state.disease(DiseaseColor::Blue).reserve(), DISEASE_RESERVE);
    }

    #[test]
    fn test_single_outbreak() {
        let (graph, [a, b, c, d]) = line_graph();
        let mut state = GameState::new(graph, 0);
        state.place_cube(a, DiseaseColor::Blue, 3);

        let report = state.infect(a, DiseaseColor::Blue, 1);
        assert_eq!(report.outbreaks, vec![a]);
        assert_eq!(report.cubes_placed, 1);
        assert_eq!(state.outbreaks(), 1);
        assert_eq!(state.cubes(a, DiseaseColor::Blue), 3);
        assert_eq!(state.cubes(b, DiseaseColor::Blue), 1);
        assert_eq!(state.cubes(c, DiseaseColor::Blue), 0);
        assert_eq!(state.cubes(d, DiseaseColor::Blue), 0);
    }

    #[test]
    fn test_chain_does_not_revisit() {
        let (graph, [a, b, c, d]) = line_graph();
        let mut state = GameState::new(graph, 0);
        state.place_cube(a, DiseaseColor::Blue, 3);
        state.place_cube(b, DiseaseColor::Blue, 3);

        let report = state.infect(a, DiseaseColor::Blue, 1);

        // A outbreaks into B, B outbreaks back into A (skipped) and into C.
        assert_eq!(report.outbreaks, vec![a, b]);
        assert_eq!(state.outbreaks(), 2);
        assert_eq!(state.cubes(c, DiseaseColor::Blue), 1);
        assert_eq!(state.cubes(d, DiseaseColor::Blue), 0);
        assert_eq!(state.disease(DiseaseColor::Blue).reserve(), DISEASE_RESERVE - 7);
    }

    #[test]
    fn test_epidemic_sized_infection_outbreaks_once() {
        let (graph, [a, b, ..]) = line_graph();
        let mut state = GameState::new(graph, 0);
        state.place_cube(a, DiseaseColor::Blue, 2);

        let report = state.infect(a, DiseaseColor::Blue, 3);
        assert_eq!(report.outbreaks, vec![a]);
        assert_eq!(state.cubes(a, DiseaseColor::Blue), 3);
        assert_eq!(state.cubes(b, DiseaseColor::Blue), 1);
    }

    #[test]
    fn test_outbreak_limit_is_loss() {
        let (graph, [a, ..]) = line_graph();
        let mut state = GameState::new(graph, 0);
        state.outbreaks = OUTBREAK_LIMIT - 1;
        state.place_cube(a, DiseaseColor::Blue, 3);

        let report = state.infect(a, DiseaseColor::Blue, 1);
        assert_eq!(report.loss, Some(LossReason::OutbreakLimit));
        assert_eq!(report.cubes_placed, 0);
        assert!(state.is_over());
    }

    #[test]
    fn test_empty_reserve_is_loss() {
        let (graph, [a, b, ..]) = line_graph();
        let mut state = GameState::new(graph, 0);
        state.diseases[DiseaseColor::Blue].place(DISEASE_RESERVE);

        let report = state.infect(b, DiseaseColor::Blue, 1);
        assert_eq!(report.loss, Some(LossReason::CubesExhausted(DiseaseColor::Blue)));
        assert_eq!(state.cubes(a, DiseaseColor::Blue), 0);
    }

    #[test]
    fn test_eradicated_places_nothing() {
        let (graph, [a, ..]) = line_graph();
        let mut state = GameState::new(graph, 0);
        state.diseases[DiseaseColor::Blue].cure();

        let report = state.infect(a, DiseaseColor::Blue, 1);
        assert_eq!(report.cubes_placed, 0);
        assert!(!report.is_loss());
        assert_eq!(state.cubes(a, DiseaseColor::Blue), 0);
    }
}
