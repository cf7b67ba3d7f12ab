//! A beginner friendly 3D solar system.
//!
//! Eight planets circle a fixed sun, either on pre-scripted circular orbits or under
//! simple Newtonian gravity. Bevy does the rendering; this crate owns the per-frame
//! update of the bodies and the controls around it.

pub mod entities;
pub mod gui;
pub mod physics;
