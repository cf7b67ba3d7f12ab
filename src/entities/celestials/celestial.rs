use bevy::prelude::*;
use bevy_eventlistener::callbacks::Listener;
use bevy_eventlistener::event_listener::On;
use bevy_mod_picking::events::{Down, Pointer};
use bevy_mod_picking::pointer::PointerButton;
use bevy_mod_picking::PickableBundle;

use super::catalogue::{PlanetSpec, PLANETS};
use crate::entities::paths::Trail;
use crate::entities::scale::ScaleMode;
use crate::entities::utils::Radius;
use crate::physics::orbits::components::{AngularSpeed, OrbitBundle, OrbitIdx};

/// How long a selected planet flashes white, in seconds
pub const PULSE_SECONDS: f32 = 0.12;

/// Smoothness of the planet spheres
const SPHERE_SECTORS: usize = 48;
const SPHERE_STACKS: usize = 24;

/// A planet, and the catalogue entry it was built from
#[derive(Component, Debug, Clone, Copy)]
pub struct CelestialBody {
    pub spec: &'static PlanetSpec,
}

/// A planet that is currently flashing after being clicked
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    /// Seconds since startup when the flash began
    pub started: f32,
    /// The color to go back to
    pub original: Color,
}

impl Pulse {
    pub fn is_over(&self, now: f32) -> bool {
        now - self.started > PULSE_SECONDS
    }
}

/// A plugin that spawns the planets and handles clicking on them
pub struct CelestialPlugin;

impl Plugin for CelestialPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SelectCelestial>();
        app.add_systems(Startup, Self::setup);
        app.add_systems(Update, (Self::start_pulse, Self::end_pulse).chain());
    }
}

impl CelestialPlugin {
    /// Spawn one entity per catalogue entry, all starting at angle zero
    pub fn setup(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        mode: Res<ScaleMode>,
    ) {
        let preset = mode.preset();
        let mesh = meshes.add(Mesh::from(shape::UVSphere {
            radius: 1.0,
            sectors: SPHERE_SECTORS,
            stacks: SPHERE_STACKS,
        }));
        for (idx, spec) in PLANETS.iter().enumerate() {
            let orbit = OrbitBundle::new(
                OrbitIdx(idx),
                preset.orbital_radius(spec),
                AngularSpeed::from_period_days(spec.period_days),
            );
            let radius = preset.display_radius(spec);
            let translation = orbit.position.0;
            commands.spawn((
                Name::new(spec.name_en),
                CelestialBody { spec },
                orbit,
                radius,
                PbrBundle {
                    mesh: mesh.clone(),
                    // Each planet gets its own material so it can flash on its own
                    material: materials.add(StandardMaterial {
                        base_color: spec.color,
                        perceptual_roughness: 0.4,
                        ..default()
                    }),
                    transform: Transform::from_translation(translation)
                        .with_scale(radius.scale()),
                    ..default()
                },
                Trail::default(),
                PickableBundle::default(),
                On::<Pointer<Down>>::run(Self::forward_primary_press),
            ));
        }
        info!("Spawned {} planets", PLANETS.len());
    }

    /// The right button rotates the camera, so only primary presses select
    fn forward_primary_press(
        event: Listener<Pointer<Down>>,
        mut selections: EventWriter<SelectCelestial>,
    ) {
        if let Some(selection) = SelectCelestial::from_press(event.target, event.button) {
            selections.send(selection);
        }
    }

    /// Flash the clicked planet white
    fn start_pulse(
        mut commands: Commands,
        time: Res<Time>,
        mut events: EventReader<SelectCelestial>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        planets: Query<(&CelestialBody, &Handle<StandardMaterial>, Option<&Pulse>)>,
    ) {
        for event in events.read() {
            let Ok((body, handle, pulse)) = planets.get(event.0) else {
                continue;
            };
            let Some(material) = materials.get_mut(handle) else {
                continue;
            };
            // A click during a flash must not remember white as the original color
            let original = pulse.map_or(material.base_color, |pulse| pulse.original);
            material.base_color = Color::WHITE;
            commands.entity(event.0).insert(Pulse {
                started: time.elapsed_seconds(),
                original,
            });
            info!("Selected {} / {}", body.spec.name_en, body.spec.name_hi);
        }
    }

    /// Restore the color once the flash is over
    fn end_pulse(
        mut commands: Commands,
        time: Res<Time>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        pulsing: Query<(Entity, &Pulse, &Handle<StandardMaterial>)>,
    ) {
        let now = time.elapsed_seconds();
        for (entity, pulse, handle) in pulsing.iter() {
            if !pulse.is_over(now) {
                continue;
            }
            if let Some(material) = materials.get_mut(handle) {
                material.base_color = pulse.original;
            }
            commands.entity(entity).remove::<Pulse>();
        }
    }
}

/// An event that indicates that a celestial has been selected by the user
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectCelestial(pub Entity);

impl SelectCelestial {
    /// A press on `target` selects it only if made with the primary button
    pub fn from_press(target: Entity, button: PointerButton) -> Option<Self> {
        match button {
            PointerButton::Primary => Some(Self(target)),
            _ => None,
        }
    }
}
