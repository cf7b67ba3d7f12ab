//! The text area that describes the selected planet and reports preset actions

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::entities::celestials::{
    catalogue::PlanetSpec,
    celestial::{CelestialBody, SelectCelestial},
};

const PLACEHOLDER: &str = "\n\nClick a planet to see details here.\n";

/// Appended lines kept below the details, oldest dropped first
pub const MAX_MESSAGES: usize = 3;

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct InfoPane {
    details: String,
    messages: VecDeque<String>,
}

impl Default for InfoPane {
    fn default() -> Self {
        InfoPane {
            details: PLACEHOLDER.to_string(),
            messages: VecDeque::with_capacity(MAX_MESSAGES),
        }
    }
}

impl InfoPane {
    /// The details followed by the most recent messages, one per line
    pub fn text(&self) -> String {
        let mut text = self.details.clone();
        for message in self.messages.iter() {
            text.push('\n');
            text.push_str(message);
        }
        text
    }

    /// Replace the pane with a planet's details
    pub fn show_planet(&mut self, planet: &PlanetSpec) {
        self.messages.clear();
        self.details = format!(
            "\nSelected: {} / {}\nDistance (AU): {}\nRadius (km): {}\nOrbital period (days): {}\nVisual distance: {}\n",
            planet.name_en,
            planet.name_hi,
            planet.true_au,
            planet.true_radius_km,
            planet.period_days,
            planet.visual_distance,
        );
    }

    /// Add a line below what is already shown
    pub fn append(&mut self, line: &str) {
        if self.messages.len() == MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(line.to_string());
    }

    pub fn show_selection_system(
        mut events: EventReader<SelectCelestial>,
        planets: Query<&CelestialBody>,
        mut pane: ResMut<InfoPane>,
    ) {
        for event in events.read() {
            if let Ok(body) = planets.get(event.0) {
                pane.show_planet(body.spec);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::celestials::catalogue::PLANETS;

    #[test]
    fn test_placeholder() {
        assert!(InfoPane::default()
            .text()
            .contains("Click a planet to see details here."));
    }

    #[test]
    fn test_show_planet() {
        let mut pane = InfoPane::default();
        pane.show_planet(&PLANETS[2]);
        assert_eq!(
            pane.text(),
            "\nSelected: Earth / पृथ्वी (Prithvi)\nDistance (AU): 1\nRadius (km): 6371\nOrbital period (days): 365\nVisual distance: 2\n"
        );
    }

    #[test]
    fn test_append_keeps_previous_text() {
        let mut pane = InfoPane::default();
        pane.show_planet(&PLANETS[0]);
        pane.append("Saved preset #1");
        assert!(pane.text().starts_with("\nSelected: Mercury"));
        assert!(pane.text().ends_with("\nSaved preset #1"));
    }

    #[test]
    fn test_append_keeps_only_recent_messages() {
        let mut pane = InfoPane::default();
        for i in 1..=10 {
            pane.append(&format!("Saved preset #{}", i));
        }
        let text = pane.text();
        assert_eq!(text.lines().filter(|l| l.starts_with("Saved")).count(), MAX_MESSAGES);
        assert!(!text.contains("Saved preset #7\n"));
        assert!(text.contains("Saved preset #8"));
        assert!(text.ends_with("Saved preset #10"));
        assert!(text.contains("Click a planet to see details here."));
    }

    #[test]
    fn test_show_planet_clears_messages() {
        let mut pane = InfoPane::default();
        pane.append("No presets saved yet.");
        pane.show_planet(&PLANETS[4]);
        assert!(!pane.text().contains("No presets saved yet."));
    }

    #[test]
    fn test_show_selection_system() {
        let mut world = World::new();
        world.init_resource::<InfoPane>();
        world.init_resource::<Events<SelectCelestial>>();
        let venus = world.spawn(CelestialBody { spec: &PLANETS[1] }).id();
        world.send_event(SelectCelestial(venus));

        let mut schedule = Schedule::default();
        schedule.add_systems(InfoPane::show_selection_system);
        schedule.run(&mut world);

        assert!(world
            .resource::<InfoPane>()
            .text()
            .contains("Selected: Venus / शुक्र (Shukra)"));
    }
}
