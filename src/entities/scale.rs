//! Visible vs realistic scale presets

use bevy::prelude::*;
use strum_macros::{Display, EnumIter};

use super::celestials::catalogue::{self, PlanetSpec};
use super::celestials::celestial::CelestialBody;
use super::celestials::sun::{Sun, SUN_RADIUS_FACTOR};
use super::utils::Radius;
use crate::physics::orbits::{
    components::{AngularSpeed, OrbitAngle, OrbitIdx, OrbitalRadius, Position, Velocity},
    kinematic::ANGULAR_SPEED_MULTIPLIER,
    nbody::CentralBody,
    plugin::{reseat_on_circle, OrbitModel},
};
use crate::physics::util::clock::SimulationClock;

/// Display radii are divided by this after scaling
pub const RADIUS_DIVISOR: f32 = 2.8;

/// Multipliers applied to the catalogue's visual values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePreset {
    pub scale_distance: f32,
    pub scale_radius: f32,
    pub speed_multiplier: f32,
}

impl ScalePreset {
    pub fn orbital_radius(&self, planet: &PlanetSpec) -> OrbitalRadius {
        OrbitalRadius(planet.visual_distance * self.scale_distance)
    }

    pub fn display_radius(&self, planet: &PlanetSpec) -> Radius {
        Radius(planet.visual_radius * self.scale_radius / RADIUS_DIVISOR)
    }

    pub fn sun_radius(&self) -> Radius {
        Radius(SUN_RADIUS_FACTOR * self.scale_radius)
    }

    /// A sun that gives the reference planet the same period as its scripted orbit at
    /// speed scale 1
    pub fn central_body(&self) -> CentralBody {
        let reference =
            catalogue::by_name(catalogue::REFERENCE_PLANET).unwrap_or(&catalogue::PLANETS[2]);
        let omega =
            AngularSpeed::from_period_days(reference.period_days).0 * ANGULAR_SPEED_MULTIPLIER;
        CentralBody::from_circular_orbit(self.orbital_radius(reference).0, omega)
    }
}

/// The active scale preset
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ScaleMode {
    /// Exaggerated so you can see
    #[default]
    #[strum(serialize = "visible")]
    Visible,
    /// Closer to true ratios, but still scaled
    #[strum(serialize = "realistic")]
    Realistic,
}

impl ScaleMode {
    pub fn preset(&self) -> ScalePreset {
        match self {
            ScaleMode::Visible => ScalePreset {
                scale_distance: 1.6,
                scale_radius: 10.0,
                speed_multiplier: 0.5,
            },
            ScaleMode::Realistic => ScalePreset {
                scale_distance: 0.8,
                scale_radius: 1.2,
                speed_multiplier: 0.5,
            },
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            ScaleMode::Visible => ScaleMode::Realistic,
            ScaleMode::Realistic => ScaleMode::Visible,
        };
    }
}

pub struct ScalePlugin;

impl Plugin for ScalePlugin {
    fn build(&self, app: &mut App) {
        let mode = ScaleMode::default();
        app.insert_resource(mode);
        // The starting preset picks the starting speed, later toggles leave it alone
        app.insert_resource(SimulationClock::new(mode.preset().speed_multiplier));
        app.add_systems(Update, Self::apply_scale_system);
    }
}

impl ScalePlugin {
    /// Recompute radii and reposition every body at its current angle
    #[allow(clippy::type_complexity)]
    pub fn apply_scale_system(
        mode: Res<ScaleMode>,
        model: Res<OrbitModel>,
        mut central: ResMut<CentralBody>,
        mut planets: Query<
            (
                &CelestialBody,
                &OrbitIdx,
                &AngularSpeed,
                &OrbitAngle,
                &mut OrbitalRadius,
                &mut Radius,
                &mut Position,
                &mut Velocity,
                &mut Transform,
            ),
            Without<Sun>,
        >,
        mut sun: Query<(&mut Radius, &mut Transform), With<Sun>>,
    ) {
        if !mode.is_changed() {
            return;
        }
        let preset = mode.preset();
        *central = preset.central_body();
        info!("Scale: {}", *mode);

        for (
            body,
            idx,
            angular_speed,
            angle,
            mut orbital_radius,
            mut radius,
            mut position,
            mut velocity,
            mut transform,
        ) in planets.iter_mut()
        {
            *orbital_radius = preset.orbital_radius(body.spec);
            *radius = preset.display_radius(body.spec);
            let (p, v) =
                reseat_on_circle(*model, &central, *idx, *orbital_radius, *angular_speed, *angle);
            *position = p;
            *velocity = v;
            transform.translation = p.0;
            transform.scale = radius.scale();
        }

        for (mut radius, mut transform) in sun.iter_mut() {
            *radius = preset.sun_radius();
            transform.scale = radius.scale();
        }
    }
}
