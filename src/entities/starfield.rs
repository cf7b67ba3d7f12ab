//! Background stars scattered on a thick spherical shell

use std::f32::consts::TAU;

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy_mod_picking::prelude::Pickable;
use rand::Rng;

/// A background star
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Star;

pub struct StarfieldBuilder {
    count: usize,
    min_distance: f32,
    max_distance: f32,
    star_radius: f32,
    opacity: f32,
}

impl Default for StarfieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StarfieldBuilder {
    pub fn new() -> Self {
        Self {
            count: 220,
            min_distance: 15.0,
            max_distance: 35.0,
            star_radius: 0.02,
            opacity: 0.8,
        }
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn distance(mut self, min_distance: f32, max_distance: f32) -> Self {
        debug_assert!(min_distance <= max_distance);
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self
    }

    pub fn star_radius(mut self, star_radius: f32) -> Self {
        self.star_radius = star_radius;
        self
    }

    /// A point uniformly distributed over directions, at a uniformly chosen distance
    pub fn star_position<R: Rng>(&self, rng: &mut R) -> Vec3 {
        let theta = rng.gen::<f32>() * TAU;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
        let r = rng.gen_range(self.min_distance..=self.max_distance);
        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        )
    }

    pub fn positions<R: Rng>(&self, rng: &mut R) -> Vec<Vec3> {
        (0..self.count).map(|_| self.star_position(rng)).collect()
    }

    /// Spawns every star, sharing a single mesh and material
    pub fn build<R: Rng>(
        &self,
        rng: &mut R,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) {
        let mesh = meshes.add(Mesh::from(shape::UVSphere {
            radius: self.star_radius,
            sectors: 6,
            stacks: 4,
        }));
        let material = materials.add(StandardMaterial {
            base_color: Color::WHITE.with_a(self.opacity),
            emissive: Color::WHITE,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });
        for position in self.positions(rng) {
            commands.spawn((
                Star,
                PbrBundle {
                    mesh: mesh.clone(),
                    material: material.clone(),
                    transform: Transform::from_translation(position),
                    ..default()
                },
                NotShadowCaster,
                Pickable::IGNORE,
            ));
        }
        debug!("Spawned {} stars", self.count);
    }
}

pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup);
    }
}

impl StarfieldPlugin {
    fn setup(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
    ) {
        StarfieldBuilder::new().build(
            &mut rand::thread_rng(),
            &mut commands,
            &mut meshes,
            &mut materials,
        );
    }
}
