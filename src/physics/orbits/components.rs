#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::f32::consts::TAU;

use bevy::{
    ecs::{bundle::Bundle, component::Component},
    math::Vec3,
};
use derive_more::{Add, AddAssign, From, Into, Sub, SubAssign};

/// The position of a body in scene units, relative to the sun.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Add, Sub, AddAssign, SubAssign)]
pub struct Position(pub Vec3);

/// The velocity of a body in scene units per second.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Add, Sub, AddAssign, SubAssign)]
pub struct Velocity(pub Vec3);

/// The radius of the circle a body orbits on, in scene units.
#[derive(Component, Debug, Clone, Copy, PartialEq, PartialOrd, From, Into)]
pub struct OrbitalRadius(pub f32);

/// The angle of a body along its orbit in radians.
#[derive(
    Component, Default, Debug, Clone, Copy, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign,
)]
pub struct OrbitAngle(pub f32);

/// Radians per day of the body's real orbital period.
#[derive(Component, Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AngularSpeed(pub f32);

impl AngularSpeed {
    /// One full turn per orbital period.
    pub fn from_period_days(period_days: f32) -> Self {
        debug_assert!(period_days > 0.0, "period must be positive");
        AngularSpeed(TAU / period_days)
    }
}

/// The position of the body in the catalogue.
/// Used as a phase offset for the out of plane wobble.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrbitIdx(pub usize);

/// Everything the orbit systems read and write for a single body.
#[derive(Bundle, Debug, Clone)]
pub struct OrbitBundle {
    /// Catalogue index
    pub idx: OrbitIdx,
    /// Current orbit radius at the active scale
    pub radius: OrbitalRadius,
    /// Current angle
    pub angle: OrbitAngle,
    /// How fast the angle grows
    pub angular_speed: AngularSpeed,
    /// Where the body is
    pub position: Position,
    /// Where the body is going
    pub velocity: Velocity,
}

impl OrbitBundle {
    /// A body at angle zero on a circle of the given radius.
    pub fn new(idx: OrbitIdx, radius: OrbitalRadius, angular_speed: AngularSpeed) -> Self {
        let angle = OrbitAngle(0.0);
        OrbitBundle {
            idx,
            radius,
            angle,
            angular_speed,
            position: Position(super::kinematic::orbit_position(radius, angle, idx)),
            velocity: Velocity::default(),
        }
    }
}
