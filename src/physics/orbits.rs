//! Orbits and orbital mechanics.

pub mod components;
pub mod kinematic;
pub mod nbody;
pub mod plugin;
