//! Orbit rings and the trails planets leave behind

use std::collections::VecDeque;

use bevy::prelude::*;

use super::celestials::celestial::CelestialBody;
use crate::physics::orbits::{
    components::{OrbitalRadius, Position},
    plugin::{OrbitModel, OrbitSet},
};
use crate::physics::util::clock::is_running;

/// Number of past positions a trail keeps
pub const TRAIL_RETAIN: usize = 300;

/// Segments used to draw an orbit ring
const RING_SEGMENTS: usize = 126;

/// Opacity of the orbit rings
const RING_OPACITY: f32 = 0.18;

/// The last few positions of a body, oldest first
#[derive(Component, Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec3>,
    retain: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(TRAIL_RETAIN)
    }
}

impl Trail {
    pub fn new(retain: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(retain),
            retain,
        }
    }

    /// Drops the oldest point once full
    pub fn push(&mut self, point: Vec3) {
        if self.retain == 0 {
            return;
        }
        if self.points.len() == self.retain {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &Vec3> {
        self.points.iter()
    }
}

pub struct PathsPlugin;

impl Plugin for PathsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            Self::record_trails_system
                .after(OrbitSet::Sync)
                .run_if(is_running),
        );
        app.add_systems(
            Update,
            (
                (Self::clear_trails_system, Self::draw_trails_system).chain(),
                Self::draw_rings_system,
            ),
        );
    }
}

impl PathsPlugin {
    pub fn record_trails_system(mut trails: Query<(&Position, &mut Trail)>) {
        for (position, mut trail) in trails.iter_mut() {
            trail.push(position.0);
        }
    }

    /// A rescale or an orbit model switch jumps the planet, so the old trail is dropped
    pub fn clear_trails_system(
        model: Res<OrbitModel>,
        mut trails: Query<(&mut Trail, Ref<OrbitalRadius>)>,
    ) {
        let model_switched = model.is_changed() && !model.is_added();
        for (mut trail, radius) in trails.iter_mut() {
            if model_switched || (radius.is_changed() && !radius.is_added()) {
                trail.clear();
            }
        }
    }

    fn draw_trails_system(mut gizmos: Gizmos, trails: Query<(&CelestialBody, &Trail)>) {
        for (body, trail) in trails.iter() {
            if trail.len() < 2 {
                continue;
            }
            gizmos.linestrip(trail.points().copied(), body.spec.color);
        }
    }

    fn draw_rings_system(mut gizmos: Gizmos, rings: Query<&OrbitalRadius, With<CelestialBody>>) {
        let color = Color::WHITE.with_a(RING_OPACITY);
        for radius in rings.iter() {
            gizmos
                .circle(Vec3::ZERO, Vec3::Z, radius.0, color)
                .segments(RING_SEGMENTS);
        }
    }
}
