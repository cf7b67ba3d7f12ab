//! Fixed data for the eight planets.

use bevy::render::color::Color;

/// Everything we know about a planet before the simulation starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSpec {
    pub name_en: &'static str,
    /// Devanagari with a latin transliteration in brackets
    pub name_hi: &'static str,
    /// Latin transliteration of the hindi name, our bundled fonts have no devanagari
    pub transliteration: &'static str,
    /// True mean distance from the sun, for reference only
    pub true_au: f32,
    /// Orbit radius factor before scaling
    pub visual_distance: f32,
    /// True mean radius, for reference only
    pub true_radius_km: f32,
    /// Display radius factor before scaling
    pub visual_radius: f32,
    pub color: Color,
    pub period_days: f32,
}

pub static PLANETS: [PlanetSpec; 8] = [
    PlanetSpec {
        name_en: "Mercury",
        name_hi: "बुध (Budh)",
        transliteration: "Budh",
        true_au: 0.39,
        visual_distance: 1.0,
        true_radius_km: 2440.0,
        visual_radius: 0.03,
        color: Color::rgb(0.6, 0.6, 0.6),
        period_days: 88.0,
    },
    PlanetSpec {
        name_en: "Venus",
        name_hi: "शुक्र (Shukra)",
        transliteration: "Shukra",
        true_au: 0.72,
        visual_distance: 1.5,
        true_radius_km: 6052.0,
        visual_radius: 0.06,
        color: Color::ORANGE,
        period_days: 225.0,
    },
    PlanetSpec {
        name_en: "Earth",
        name_hi: "पृथ्वी (Prithvi)",
        transliteration: "Prithvi",
        true_au: 1.0,
        visual_distance: 2.0,
        true_radius_km: 6371.0,
        visual_radius: 0.065,
        color: Color::BLUE,
        period_days: 365.0,
    },
    PlanetSpec {
        name_en: "Mars",
        name_hi: "मंगल (Mangal)",
        transliteration: "Mangal",
        true_au: 1.52,
        visual_distance: 2.6,
        true_radius_km: 3390.0,
        visual_radius: 0.05,
        color: Color::RED,
        period_days: 687.0,
    },
    PlanetSpec {
        name_en: "Jupiter",
        name_hi: "बृहस्पति (Brihaspati)",
        transliteration: "Brihaspati",
        true_au: 5.2,
        visual_distance: 4.5,
        true_radius_km: 69911.0,
        visual_radius: 0.18,
        color: Color::YELLOW,
        period_days: 4333.0,
    },
    PlanetSpec {
        name_en: "Saturn",
        name_hi: "शनि (Shani)",
        transliteration: "Shani",
        true_au: 9.58,
        visual_distance: 6.0,
        true_radius_km: 58232.0,
        visual_radius: 0.15,
        color: Color::WHITE,
        period_days: 10759.0,
    },
    PlanetSpec {
        name_en: "Uranus",
        name_hi: "अरुण (Arun)",
        transliteration: "Arun",
        true_au: 19.2,
        visual_distance: 7.5,
        true_radius_km: 25362.0,
        visual_radius: 0.12,
        color: Color::CYAN,
        period_days: 30687.0,
    },
    PlanetSpec {
        name_en: "Neptune",
        name_hi: "वरुण (Varun)",
        transliteration: "Varun",
        true_au: 30.05,
        visual_distance: 8.5,
        true_radius_km: 24622.0,
        visual_radius: 0.12,
        color: Color::FUCHSIA,
        period_days: 60190.0,
    },
];

/// The planet whose period the newtonian sun is tuned to
pub const REFERENCE_PLANET: &str = "Earth";

/// Case insensitive lookup by english name
pub fn by_name(name: &str) -> Option<&'static PlanetSpec> {
    PLANETS
        .iter()
        .find(|planet| planet.name_en.eq_ignore_ascii_case(name))
}

impl PlanetSpec {
    /// Two line label shown next to the planet
    pub fn label(&self) -> String {
        format!("{}\n{}", self.name_en, self.transliteration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planets_are_ordered_outwards() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].visual_distance < pair[1].visual_distance);
            assert!(pair[0].true_au < pair[1].true_au);
            assert!(pair[0].period_days < pair[1].period_days);
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("earth").map(|p| p.period_days), Some(365.0));
        assert_eq!(by_name("Neptune").map(|p| p.true_au), Some(30.05));
        assert!(by_name("Pluto").is_none());
        assert!(by_name(REFERENCE_PLANET).is_some());
    }

    #[test]
    fn test_by_name_borrows_the_table() {
        for planet in PLANETS.iter() {
            let found = by_name(planet.name_en).map(|p| p as *const PlanetSpec);
            assert_eq!(found, Some(planet as *const PlanetSpec));
        }
    }

    #[test]
    fn test_hindi_names_contain_transliteration() {
        for planet in PLANETS.iter() {
            assert!(planet.name_hi.contains(planet.transliteration));
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(PLANETS[0].label(), "Mercury\nBudh");
    }
}
