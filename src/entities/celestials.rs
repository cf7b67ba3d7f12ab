//! Celestials are the spheres of the solar system
//! They include the planets and the sun

pub mod catalogue;
pub mod celestial;
pub mod sun;
