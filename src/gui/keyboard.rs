//! Keyboard shortcuts for the simulation clock

use bevy::prelude::*;
use bevy::window::ReceivedCharacter;

use crate::physics::util::clock::SimulationClock;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePause,
    SpeedUp,
    SlowDown,
}

impl KeyCommand {
    /// Characters rather than key codes, so `+` works on every layout
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(KeyCommand::TogglePause),
            '+' => Some(KeyCommand::SpeedUp),
            '-' => Some(KeyCommand::SlowDown),
            _ => None,
        }
    }

    pub fn apply(self, clock: &mut SimulationClock) {
        match self {
            KeyCommand::TogglePause => {
                let paused = clock.toggle_pause();
                info!("{}", if paused { "Paused" } else { "Resumed" });
            }
            KeyCommand::SpeedUp => clock.speed_up(),
            KeyCommand::SlowDown => clock.slow_down(),
        }
    }
}

pub fn keyboard_controls_system(
    mut chars: EventReader<ReceivedCharacter>,
    mut clock: ResMut<SimulationClock>,
) {
    for event in chars.read() {
        if let Some(command) = KeyCommand::from_char(event.char) {
            command.apply(&mut clock);
            trace!("{:?} -> {:?}", command, *clock);
        }
    }
}
