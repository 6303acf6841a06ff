//! The standard 48-city world map.

use super::graph::{CityGraph, CityGraphBuilder};
use crate::disease::DiseaseColor;

const BLUE: &[(&str, u32)] = &[
    ("Atlanta", 4_715_000),
    ("Chicago", 9_121_000),
    ("Essen", 575_000),
    ("London", 8_586_000),
    ("Madrid", 5_427_000),
    ("Milan", 5_232_000),
    ("Montréal", 3_429_000),
    ("New York", 20_464_000),
    ("Paris", 10_755_000),
    ("San Francisco", 5_864_000),
    ("St. Petersburg", 4_879_000),
    ("Washington", 4_679_000),
];

const YELLOW: &[(&str, u32)] = &[
    ("Bogotá", 8_702_000),
    ("Buenos Aires", 13_639_000),
    ("Johannesburg", 3_888_000),
    ("Khartoum", 4_887_000),
    ("Kinshasa", 9_046_000),
    ("Lagos", 11_547_000),
    ("Lima", 9_121_000),
    ("Los Angeles", 14_900_000),
    ("Mexico City", 19_463_000),
    ("Miami", 5_582_000),
    ("Santiago", 6_015_000),
    ("São Paulo", 20_186_000),
];

const BLACK: &[(&str, u32)] = &[
    ("Algiers", 2_946_000),
    ("Baghdad", 6_204_000),
    ("Cairo", 14_718_000),
    ("Chennai", 8_865_000),
    ("Delhi", 22_242_000),
    ("Istanbul", 13_576_000),
    ("Karachi", 20_711_000),
    ("Kolkata", 14_374_000),
    ("Moscow", 15_512_000),
    ("Mumbai", 16_910_000),
    ("Riyadh", 5_037_000),
    ("Tehran", 7_419_000),
];

const RED: &[(&str, u32)] = &[
    ("Bangkok", 7_151_000),
    ("Beijing", 17_311_000),
    ("Ho Chi Minh City", 8_314_000),
    ("Hong Kong", 7_106_000),
    ("Jakarta", 26_063_000),
    ("Manila", 20_767_000),
    ("Osaka", 2_871_000),
    ("Seoul", 22_547_000),
    ("Shanghai", 13_482_000),
    ("Sydney", 3_785_000),
    ("Taipei", 8_338_000),
    ("Tokyo", 13_189_000),
];

const ROUTES: &[(&str, &str)] = &[
    // North America and Europe
    ("San Francisco", "Tokyo"),
    ("San Francisco", "Manila"),
    ("San Francisco", "Los Angeles"),
    ("San Francisco", "Chicago"),
    ("Chicago", "Los Angeles"),
    ("Chicago", "Mexico City"),
    ("Chicago", "Atlanta"),
    ("Chicago", "Montréal"),
    ("Montréal", "New York"),
    ("Montréal", "Washington"),
    ("New York", "Washington"),
    ("New York", "London"),
    ("New York", "Madrid"),
    ("Atlanta", "Washington"),
    ("Atlanta", "Miami"),
    ("Washington", "Miami"),
    ("London", "Madrid"),
    ("London", "Paris"),
    ("London", "Essen"),
    ("Madrid", "Paris"),
    ("Madrid", "Algiers"),
    ("Madrid", "São Paulo"),
    ("Paris", "Essen"),
    ("Paris", "Milan"),
    ("Paris", "Algiers"),
    ("Essen", "Milan"),
    ("Essen", "St. Petersburg"),
    ("Milan", "Istanbul"),
    ("St. Petersburg", "Istanbul"),
    ("St. Petersburg", "Moscow"),
    // Latin America and Africa
    ("Los Angeles", "Mexico City"),
    ("Los Angeles", "Sydney"),
    ("Mexico City", "Miami"),
    ("Mexico City", "Bogotá"),
    ("Mexico City", "Lima"),
    ("Miami", "Bogotá"),
    ("Bogotá", "Lima"),
    ("Bogotá", "São Paulo"),
    ("Bogotá", "Buenos Aires"),
    ("Lima", "Santiago"),
    ("Buenos Aires", "São Paulo"),
    ("São Paulo", "Lagos"),
    ("Lagos", "Kinshasa"),
    ("Lagos", "Khartoum"),
    ("Kinshasa", "Khartoum"),
    ("Kinshasa", "Johannesburg"),
    ("Johannesburg", "Khartoum"),
    ("Khartoum", "Cairo"),
    // Middle East and South Asia
    ("Algiers", "Istanbul"),
    ("Algiers", "Cairo"),
    ("Istanbul", "Moscow"),
    ("Istanbul", "Baghdad"),
    ("Istanbul", "Cairo"),
    ("Moscow", "Tehran"),
    ("Cairo", "Baghdad"),
    ("Cairo", "Riyadh"),
    ("Baghdad", "Tehran"),
    ("Baghdad", "Riyadh"),
    ("Baghdad", "Karachi"),
    ("Tehran", "Karachi"),
    ("Tehran", "Delhi"),
    ("Riyadh", "Karachi"),
    ("Karachi", "Delhi"),
    ("Karachi", "Mumbai"),
    ("Delhi", "Mumbai"),
    ("Delhi", "Chennai"),
    ("Delhi", "Kolkata"),
    ("Mumbai", "Chennai"),
    ("Chennai", "Kolkata"),
    ("Chennai", "Bangkok"),
    ("Chennai", "Jakarta"),
    ("Kolkata", "Bangkok"),
    ("Kolkata", "Hong Kong"),
    // East Asia and Oceania
    ("Beijing", "Seoul"),
    ("Beijing", "Shanghai"),
    ("Seoul", "Shanghai"),
    ("Seoul", "Tokyo"),
    ("Tokyo", "Shanghai"),
    ("Tokyo", "Osaka"),
    ("Shanghai", "Hong Kong"),
    ("Shanghai", "Taipei"),
    ("Hong Kong", "Taipei"),
    ("Hong Kong", "Bangkok"),
    ("Hong Kong", "Ho Chi Minh City"),
    ("Hong Kong", "Manila"),
    ("Taipei", "Osaka"),
    ("Taipei", "Manila"),
    ("Bangkok", "Ho Chi Minh City"),
    ("Bangkok", "Jakarta"),
    ("Ho Chi Minh City", "Jakarta"),
    ("Ho Chi Minh City", "Manila"),
    ("Manila", "Sydney"),
    ("Jakarta", "Sydney"),
];

/// Build the standard world map.
#[must_use]
pub fn standard_board() -> CityGraph {
    let mut builder = CityGraphBuilder::new();

    for (color, cities) in [
        (DiseaseColor::Blue, BLUE),
        (DiseaseColor::Yellow, YELLOW),
        (DiseaseColor::Black, BLACK),
        (DiseaseColor::Red, RED),
    ] {
        for &(name, population) in cities {
            builder.add_city(name, color, population);
        }
    }

    for &(a, b) in ROUTES {
        builder.connect(a, b);
    }

    builder.build()
}
