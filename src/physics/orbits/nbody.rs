//! Newtonian gravity around a pinned sun.
//!
//! Planets do not attract each other, only the central body pulls on them.
//! Integration is a fixed step kick-drift-kick leapfrog, which is symplectic and so keeps
//! a circular orbit circular over long runs without any energy correction.

use bevy::{ecs::system::Resource, math::Vec3};

/// It's important that we don't compute the gravitational force between two bodies that are too
/// close together, because the force will be very large and the simulation will be unstable.
pub const MIN_DISTANCE_SQUARED: f32 = 1e-3;

/// Gravitational constant in scene units
pub const G: f32 = 1.0;

/// Every simulation tick is split into this many leapfrog steps
pub const SUBSTEPS: u32 = 8;

/// A freely moving body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// The fixed attractor at the origin, described by its gravitational parameter `μ = G M`
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CentralBody {
    pub mu: f32,
}

impl Default for CentralBody {
    fn default() -> Self {
        Self::from_mass(1.0)
    }
}

impl CentralBody {
    pub fn from_mass(mass: f32) -> Self {
        CentralBody { mu: G * mass }
    }

    /// The central body for which a circular orbit of `radius` has angular speed `omega`
    /// (radians per second). From Kepler's third law `μ = ω² r³`.
    pub fn from_circular_orbit(radius: f32, omega: f32) -> Self {
        CentralBody {
            mu: omega * omega * radius * radius * radius,
        }
    }

    /// Softened acceleration towards the origin
    pub fn acceleration(&self, position: Vec3) -> Vec3 {
        let distance_squared = position.length_squared() + MIN_DISTANCE_SQUARED;
        -self.mu * position / (distance_squared * distance_squared.sqrt())
    }

    pub fn circular_speed(&self, radius: f32) -> f32 {
        if radius <= 0.0 {
            return 0.0;
        }
        (self.mu / radius).sqrt()
    }

    /// Velocity of a counter clockwise circular orbit through `position`,
    /// tangent to the circle in the x-y plane
    pub fn circular_velocity(&self, position: Vec3) -> Vec3 {
        let tangent = Vec3::new(-position.y, position.x, 0.0);
        if tangent.length_squared() == 0.0 {
            return Vec3::ZERO;
        }
        tangent.normalize() * self.circular_speed(position.length())
    }

    /// Kinetic plus potential energy per unit mass
    pub fn specific_energy(&self, body: &Body) -> f32 {
        0.5 * body.velocity.length_squared() - self.mu / body.position.length()
    }
}

/// A single kick-drift-kick step
pub fn leapfrog_step(body: &mut Body, central: &CentralBody, dt: f32) {
    body.velocity += central.acceleration(body.position) * (0.5 * dt);
    body.position += body.velocity * dt;
    body.velocity += central.acceleration(body.position) * (0.5 * dt);
}

/// Advance a body by `dt`, split into `substeps` leapfrog steps
pub fn integrate(body: &mut Body, central: &CentralBody, dt: f32, substeps: u32) {
    let substeps = substeps.max(1);
    let h = dt / substeps as f32;
    for _ in 0..substeps {
        leapfrog_step(body, central, h);
    }
}
