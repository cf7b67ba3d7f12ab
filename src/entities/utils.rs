use bevy::{ecs::component::Component, math::Vec3};

/// Display radius for spherical entities.
/// Meshes are unit spheres, this becomes the transform's scale.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Radius(pub f32);

impl Radius {
    pub fn scale(self) -> Vec3 {
        Vec3::splat(self.0)
    }
}

/// How many radii above the body its label floats
pub const LABEL_OFFSET_RADII: f32 = 3.5;

/// Where a label belongs for a body of this radius at `position`
pub fn label_anchor(position: Vec3, radius: Radius) -> Vec3 {
    position + Vec3::new(0.0, radius.0 * LABEL_OFFSET_RADII, 0.0)
}
