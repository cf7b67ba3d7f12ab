//! Name tags that float above each planet

use bevy::prelude::*;
use bevy::transform::TransformSystem;
use bevy_mod_picking::prelude::Pickable;

use super::celestials::celestial::CelestialBody;
use super::utils::{label_anchor, Radius};
use crate::gui::camera::MainCamera;

const LABEL_FONT_SIZE: f32 = 13.0;

/// A UI text node tracking a planet
#[derive(Component, Debug, Clone, Copy)]
pub struct PlanetLabel {
    pub target: Entity,
}

pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostStartup, Self::setup);
        app.add_systems(
            PostUpdate,
            Self::follow_planets_system.after(TransformSystem::TransformPropagate),
        );
    }
}

impl LabelPlugin {
    /// Planets are spawned during Startup, so their labels come right after
    fn setup(mut commands: Commands, planets: Query<(Entity, &CelestialBody)>) {
        for (target, body) in planets.iter() {
            commands.spawn((
                PlanetLabel { target },
                TextBundle::from_section(
                    body.spec.label(),
                    TextStyle {
                        font_size: LABEL_FONT_SIZE,
                        color: Color::WHITE,
                        ..default()
                    },
                )
                .with_text_alignment(TextAlignment::Center)
                .with_style(Style {
                    position_type: PositionType::Absolute,
                    padding: UiRect::all(Val::Px(4.0)),
                    ..default()
                })
                .with_background_color(Color::rgba(0.0, 0.0, 0.0, 0.5)),
                Pickable::IGNORE,
            ));
        }
    }

    /// Project every planet to the screen and center its label above it
    fn follow_planets_system(
        camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
        planets: Query<(&GlobalTransform, &Radius), With<CelestialBody>>,
        mut labels: Query<(&PlanetLabel, &Node, &mut Style, &mut Visibility)>,
    ) {
        let Ok((camera, camera_transform)) = camera.get_single() else {
            return;
        };
        for (label, node, mut style, mut visibility) in labels.iter_mut() {
            let screen = planets.get(label.target).ok().and_then(|(transform, radius)| {
                let anchor = label_anchor(transform.translation(), *radius);
                camera.world_to_viewport(camera_transform, anchor)
            });
            match screen {
                Some(screen) => {
                    let size = node.size();
                    style.left = Val::Px(screen.x - size.x / 2.0);
                    style.top = Val::Px(screen.y - size.y);
                    *visibility = Visibility::Inherited;
                }
                None => *visibility = Visibility::Hidden,
            }
        }
    }
}
