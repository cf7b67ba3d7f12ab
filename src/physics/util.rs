//! Small helpers shared by the physics modules.

pub mod clock;
