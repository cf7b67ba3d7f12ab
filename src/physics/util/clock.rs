use std::fmt::Debug;

use bevy::ecs::system::{Res, Resource};

/// The fixed simulation step in seconds. Bodies advance 50 times a second.
pub const DT: f32 = 0.02;

/// How much a single speed up / slow down keypress changes the speed scale.
pub const SPEED_STEP: f32 = 1.2;

/// Lower bound of the speed scale, matches the speed slider.
pub const MIN_SPEED_SCALE: f32 = 0.05;

/// Upper bound of the speed scale, matches the speed slider.
pub const MAX_SPEED_SCALE: f32 = 4.0;

/// A clock for the simulation
///
/// Holds the pause state and the speed scale, and counts the ticks that actually advanced
/// the bodies.
#[derive(Resource, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    paused: bool,
    speed_scale: f32,
    ticks: u64,
}

impl Debug for SimulationClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationClock")
            .field("paused", &self.paused)
            .field("speed_scale", &self.speed_scale)
            .field("ticks", &self.ticks)
            .finish()
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl SimulationClock {
    pub fn new(speed_scale: f32) -> Self {
        Self {
            paused: false,
            speed_scale: speed_scale.clamp(MIN_SPEED_SCALE, MAX_SPEED_SCALE),
            ticks: 0,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Returns the new pause state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }

    /// Values outside the slider range are clamped
    pub fn set_speed_scale(&mut self, speed_scale: f32) {
        self.speed_scale = speed_scale.clamp(MIN_SPEED_SCALE, MAX_SPEED_SCALE);
    }

    pub fn speed_up(&mut self) {
        self.set_speed_scale(self.speed_scale * SPEED_STEP);
    }

    pub fn slow_down(&mut self) {
        self.set_speed_scale(self.speed_scale / SPEED_STEP);
    }

    /// The amount of simulated time a single tick covers at the current speed
    pub fn scaled_dt(&self) -> f32 {
        DT * self.speed_scale
    }

    pub fn get_current_tick(&self) -> u64 {
        self.ticks
    }

    /// Called once per advancing step
    pub fn tick(&mut self) {
        self.ticks += 1;
    }
}

/// Run condition: the simulation is not paused
pub fn is_running(clock: Res<SimulationClock>) -> bool {
    !clock.is_paused()
}
