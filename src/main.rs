use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::{log::LogPlugin, prelude::*};
use bevy_egui::EguiPlugin;
use bevy_mod_picking::{highlight::DefaultHighlightingPlugin, DefaultPickingPlugins};
use solar_system::entities::EntitiesPluginGroup;
use solar_system::gui::GuiPluginGroup;
use solar_system::physics::PhysicsPluginGroup;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=warn,naga=warn".to_string(),
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "3D Solar System".to_string(),
                        resolution: (1100., 700.).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin)
        // Planets flash on click instead
        .add_plugins(
            DefaultPickingPlugins
                .build()
                .disable::<DefaultHighlightingPlugin>(),
        )
        .add_plugins(PhysicsPluginGroup)
        .add_plugins(EntitiesPluginGroup)
        .add_plugins(GuiPluginGroup)
        .run();
}
