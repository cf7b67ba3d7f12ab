use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy_mod_picking::prelude::Pickable;

use crate::entities::scale::ScaleMode;
use crate::entities::utils::Radius;

/// The sun's display radius before scaling
pub const SUN_RADIUS_FACTOR: f32 = 0.1;

/// The sun, fixed at the origin
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Sun;

/// The translucent halo around the sun
#[derive(Component, Debug, Clone, Copy)]
pub struct SunGlow {
    /// Glow radius in sun radii, before the pulsation
    pub base: f32,
    /// Pulsation amplitude in sun radii
    pub amplitude: f32,
    /// Pulsation angular frequency in radians per second
    pub frequency: f32,
}

impl Default for SunGlow {
    fn default() -> Self {
        SunGlow {
            base: 2.0,
            amplitude: 0.06,
            frequency: 0.6,
        }
    }
}

impl SunGlow {
    /// The glow radius at time `t` for a sun of radius `sun`
    pub fn radius(&self, sun: Radius, t: f32) -> Radius {
        Radius(sun.0 * (self.base + self.amplitude * (t * self.frequency).sin()))
    }
}

pub struct SunBuilder {
    color: Color,
    glow: SunGlow,
    initial_glow_factor: f32,
    glow_opacity: f32,
    light_intensity: f32,
    light_range: f32,
}

impl Default for SunBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SunBuilder {
    pub fn new() -> Self {
        Self {
            color: Color::ORANGE,
            glow: SunGlow::default(),
            initial_glow_factor: 2.2,
            glow_opacity: 0.08,
            light_intensity: 8000.0,
            light_range: 100.0,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn glow(mut self, glow: SunGlow) -> Self {
        self.glow = glow;
        self
    }

    pub fn glow_opacity(mut self, glow_opacity: f32) -> Self {
        self.glow_opacity = glow_opacity;
        self
    }

    pub fn light_intensity(mut self, light_intensity: f32) -> Self {
        self.light_intensity = light_intensity;
        self
    }

    /// Spawns the sun, its light and its glow. Returns the sun entity.
    pub fn build(
        &self,
        radius: Radius,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) -> Entity {
        let mesh = meshes.add(Mesh::from(shape::UVSphere {
            radius: 1.0,
            sectors: 64,
            stacks: 32,
        }));

        let sun = commands
            .spawn((
                Name::new("Sun"),
                Sun,
                radius,
                PbrBundle {
                    mesh: mesh.clone(),
                    material: materials.add(StandardMaterial {
                        base_color: self.color,
                        emissive: self.color,
                        unlit: true,
                        ..default()
                    }),
                    transform: Transform::from_scale(radius.scale()),
                    ..default()
                },
                NotShadowCaster,
                Pickable::IGNORE,
            ))
            .id();

        // Light sits at the center of the sun, so the sun itself must not block it
        commands.spawn(PointLightBundle {
            point_light: PointLight {
                color: Color::WHITE,
                intensity: self.light_intensity,
                range: self.light_range,
                shadows_enabled: false,
                ..default()
            },
            ..default()
        });

        commands.spawn((
            Name::new("Sun glow"),
            self.glow,
            PbrBundle {
                mesh,
                material: materials.add(StandardMaterial {
                    base_color: self.color.with_a(self.glow_opacity),
                    alpha_mode: AlphaMode::Blend,
                    unlit: true,
                    ..default()
                }),
                transform: Transform::from_scale(radius.scale() * self.initial_glow_factor),
                ..default()
            },
            NotShadowCaster,
            Pickable::IGNORE,
        ));
        sun
    }
}

pub struct SunPlugin;

impl Plugin for SunPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup);
        app.add_systems(Update, Self::pulse_glow_system);
    }
}

impl SunPlugin {
    fn setup(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        mode: Res<ScaleMode>,
    ) {
        SunBuilder::new().build(
            mode.preset().sun_radius(),
            &mut commands,
            &mut meshes,
            &mut materials,
        );
    }

    /// Slowly breathe the glow in and out
    pub fn pulse_glow_system(
        time: Res<Time>,
        sun: Query<&Radius, With<Sun>>,
        mut glows: Query<(&SunGlow, &mut Transform), Without<Sun>>,
    ) {
        let Ok(sun_radius) = sun.get_single() else {
            return;
        };
        let t = time.elapsed_seconds();
        for (glow, mut transform) in glows.iter_mut() {
            transform.scale = glow.radius(*sun_radius, t).scale();
        }
    }
}
