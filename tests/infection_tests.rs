//! Infection, outbreak and epidemic behavior on the standard map.

use std::sync::Arc;

use pandemic_engine::core::config::{DISEASE_RESERVE, OUTBREAK_LIMIT};
use pandemic_engine::{
    check_invariants, standard_board, Card, DeckType, DiseaseColor, DiseaseStatus, GameConfig, GameOutcome,
    GameState, LossReason, Role,
};

fn empty_board() -> GameState {
    GameState::new(Arc::new(standard_board()), 1)
}

fn stack_infection_deck(state: &mut GameState, bottom_to_top: &[&str]) {
    for name in bottom_to_top {
        let id = state.city_id(name).unwrap();
        let card = Card::city(state.graph().city(id), DeckType::Infection);
        state.infection_deck_mut().insert(card, 0).unwrap();
    }
}

/// Place three cubes, treat once: 22 left in reserve, 2 in the city.
#[test]
fn test_place_and_treat_counts() {
    let status = DiseaseStatus::new();
    assert_eq!(status.reserve(), 24);
    assert!(!status.is_cured());

    let mut state = empty_board();
    let paris = state.city_id("Paris").unwrap();
    state.seat_player(Role::Researcher, paris).unwrap();

    assert_eq!(state.place_cube(paris, DiseaseColor::Blue, 3), 3);
    assert_eq!(state.treat(Role::Researcher, DiseaseColor::Blue), Ok(1));
    assert_eq!(state.disease(DiseaseColor::Blue).reserve(), 22);
    assert_eq!(state.cubes(paris, DiseaseColor::Blue), 2);
}

/// Istanbul outbreaks into all six neighbors; Cairo is already full and
/// outbreaks in turn, but does not send a cube back to Istanbul.
#[test]
fn test_outbreak_chain_on_world_map() {
    let mut state = empty_board();
    let istanbul = state.city_id("Istanbul").unwrap();
    let cairo = state.city_id("Cairo").unwrap();
    state.place_cube(istanbul, DiseaseColor::Black, 3);
    state.place_cube(cairo, DiseaseColor::Black, 3);

    let report = state.infect(istanbul, DiseaseColor::Black, 1);
    assert_eq!(report.outbreaks, vec![istanbul, cairo]);
    assert_eq!(state.outbreaks(), 2);
    assert_eq!(state.cubes(istanbul, DiseaseColor::Black), 3);
    assert_eq!(state.cubes(cairo, DiseaseColor::Black), 3);

    // Algiers and Baghdad border both and take a cube from each outbreak.
    for (name, expected) in [
        ("Algiers", 2),
        ("Baghdad", 2),
        ("Milan", 1),
        ("St. Petersburg", 1),
        ("Moscow", 1),
        ("Khartoum", 1),
        ("Riyadh", 1),
    ] {
        let id = state.city_id(name).unwrap();
        assert_eq!(state.cubes(id, DiseaseColor::Black), expected, "{name}");
    }
    assert_eq!(report.cubes_placed, 9);
    assert!(check_invariants(&state).is_empty());
}

#[test]
fn test_quarantine_stops_chain() {
    let mut state = empty_board();
    let istanbul = state.city_id("Istanbul").unwrap();
    let cairo = state.city_id("Cairo").unwrap();
    let khartoum = state.city_id("Khartoum").unwrap();
    state.place_cube(istanbul, DiseaseColor::Black, 3);
    state.place_cube(cairo, DiseaseColor::Black, 3);
    state.seat_player(Role::QuarantineSpecialist, khartoum).unwrap();

    let report = state.infect(istanbul, DiseaseColor::Black, 1);
    // Cairo neighbors Khartoum, so it blocks placement and never outbreaks.
    assert_eq!(report.outbreaks, vec![istanbul]);
    assert_eq!(state.cubes(cairo, DiseaseColor::Black), 3);
    assert_eq!(state.cubes(khartoum, DiseaseColor::Black), 0);
}

/// Hit the city at the cap repeatedly: one outbreak each time, and its
/// neighbors fill up without overflowing.
fn outbreak_thrice(state: &mut GameState, name: &str, color: DiseaseColor) {
    let city = state.city_id(name).unwrap();
    state.place_cube(city, color, 3);
    for _ in 0..3 {
        let report = state.infect(city, color, 1);
        assert_eq!(report.outbreaks, vec![city]);
    }
}

#[test]
fn test_eighth_outbreak_loses() {
    let mut state = empty_board();
    outbreak_thrice(&mut state, "Lima", DiseaseColor::Yellow);
    outbreak_thrice(&mut state, "Sydney", DiseaseColor::Red);
    assert_eq!(state.outbreaks(), OUTBREAK_LIMIT - 2);
    assert!(!state.is_over());

    let istanbul = state.city_id("Istanbul").unwrap();
    let baghdad = state.city_id("Baghdad").unwrap();
    let cairo = state.city_id("Cairo").unwrap();
    for city in [istanbul, baghdad, cairo] {
        state.place_cube(city, DiseaseColor::Black, 3);
    }
    stack_infection_deck(&mut state, &["Istanbul"]);

    let report = state.draw_infection_card().unwrap();
    assert_eq!(report.loss, Some(LossReason::OutbreakLimit));
    assert_eq!(report.outbreaks, vec![istanbul, baghdad]);
    assert_eq!(state.outbreaks(), OUTBREAK_LIMIT);
    assert_eq!(state.outcome(), Some(GameOutcome::Defeat(LossReason::OutbreakLimit)));
    assert!(state.infection_deck().discard_pile().is_empty());
    assert!(state.draw_infection_card().is_err());
}

#[test]
fn test_running_out_of_cubes_loses() {
    let mut state = empty_board();
    let names = ["Lima", "Bogotá", "Santiago", "Miami", "Lagos", "Kinshasa", "Khartoum", "Johannesburg"];
    for name in names {
        let id = state.city_id(name).unwrap();
        state.place_cube(id, DiseaseColor::Yellow, 3);
    }
    assert_eq!(state.disease(DiseaseColor::Yellow).reserve(), 0);

    stack_infection_deck(&mut state, &["Mexico City"]);
    let report = state.draw_infection_card().unwrap();
    assert_eq!(report.loss, Some(LossReason::CubesExhausted(DiseaseColor::Yellow)));
    assert!(state.is_over());
}

/// An epidemic raises the rate, puts three cubes on the bottom card's city
/// and stacks the whole discard pile, with that card, back on top.
#[test]
fn test_epidemic_after_setup() {
    let config = GameConfig::new(2).with_seed(21).with_roles(vec![Role::Medic, Role::Scientist]);
    let mut state = GameState::setup(&config, Arc::new(standard_board())).unwrap();

    let bottom = state.infection_deck().reveal(-1).unwrap().clone();
    let city = bottom.city_id().unwrap();
    let color = state.graph().color(city);
    let mut expected_top: Vec<Card> = state.infection_deck().discard_pile().iter().cloned().collect();
    expected_top.push(bottom.clone());
    expected_top.sort();
    let reserve = state.disease(color).reserve();

    let report = state.epidemic().unwrap();

    assert!(!report.is_loss());
    assert_eq!(state.infection_rate_level(), 1);
    assert_eq!(state.cubes(city, color), 3);
    assert_eq!(state.disease(color).reserve(), reserve - 3);
    assert!(state.infection_deck().discard_pile().is_empty());

    let mut top: Vec<Card> = (1..=expected_top.len() as isize)
        .map(|i| state.infection_deck().reveal(i).unwrap().clone())
        .collect();
    top.sort();
    assert_eq!(top, expected_top);
    assert_eq!(state.infection_deck().size(), 48);
    assert!(check_invariants(&state).is_empty());
}

#[test]
fn test_reserve_conservation_through_outbreaks() {
    let mut state = empty_board();
    let tokyo = state.city_id("Tokyo").unwrap();
    for _ in 0..6 {
        state.infect(tokyo, DiseaseColor::Red, 1);
    }
    let on_board: u32 = state.board().iter().map(|c| u32::from(c.cubes(DiseaseColor::Red))).sum();
    assert_eq!(on_board + u32::from(state.disease(DiseaseColor::Red).reserve()), u32::from(DISEASE_RESERVE));
    assert!(check_invariants(&state).is_empty());
}
