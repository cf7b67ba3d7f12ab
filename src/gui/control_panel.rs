use bevy::{
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    prelude::*,
};
use bevy_egui::{
    egui::{self, Ui},
    EguiContexts,
};

use super::camera::{AutoFly, CameraPresets, CameraSet, CameraView, MAX_RANGE, MIN_RANGE};
use super::info_pane::InfoPane;
use super::keyboard::keyboard_controls_system;
use crate::entities::scale::ScaleMode;
use crate::physics::orbits::plugin::OrbitModel;
use crate::physics::util::clock::{SimulationClock, MAX_SPEED_SCALE, MIN_SPEED_SCALE};

const CAPTION: &str = "Controls:
- Right mouse drag: rotate view
- Mouse scroll: zoom
- Click a planet to show details
- Space: Pause/Resume
- +/- keys: Speed up / Slow down";

const SLIDER_WIDTH: f32 = 200.0;

pub struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InfoPane>();
        app.add_systems(
            Update,
            (
                InfoPane::show_selection_system,
                keyboard_controls_system,
                control_panel_system,
            )
                .chain()
                .before(CameraSet),
        );
    }
}

pub fn pause_label(paused: bool) -> &'static str {
    if paused {
        "Resume"
    } else {
        "Pause"
    }
}

pub fn auto_fly_label(enabled: bool) -> &'static str {
    if enabled {
        "Auto-fly: On"
    } else {
        "Auto-fly: Off"
    }
}

/// Everything the panel edits, bundled to keep the system signature small
#[derive(bevy::ecs::system::SystemParam)]
pub struct PanelState<'w> {
    pub pane: ResMut<'w, InfoPane>,
    pub clock: ResMut<'w, SimulationClock>,
    pub view: ResMut<'w, CameraView>,
    pub presets: ResMut<'w, CameraPresets>,
    pub auto_fly: ResMut<'w, AutoFly>,
    pub scale: ResMut<'w, ScaleMode>,
    pub model: ResMut<'w, OrbitModel>,
}

/// Save the current view as a preset and say so
pub fn save_preset(state: &mut PanelState) {
    let number = state.presets.save(*state.view);
    info!("Saved camera preset #{}", number);
    state.pane.append(&format!("Saved preset #{}", number));
}

/// Load the next preset, or explain why there is none
pub fn load_next_preset(state: &mut PanelState) {
    match state.presets.next_preset() {
        Ok((number, view)) => {
            *state.view = view;
            info!("Loaded camera preset #{}", number);
            state.pane.append(&format!("Loaded preset #{}", number));
        }
        Err(err) => {
            debug!("{}", err);
            state.pane.append(&err.to_string());
        }
    }
}

fn speed_slider(ui: &mut Ui, clock: &mut SimulationClock) {
    let mut speed = clock.speed_scale();
    let response = ui.add(
        egui::Slider::new(&mut speed, MIN_SPEED_SCALE..=MAX_SPEED_SCALE).text("Speed scale"),
    );
    if response.changed() {
        clock.set_speed_scale(speed);
    }
}

fn range_slider(ui: &mut Ui, view: &mut CameraView) {
    let mut range = view.range;
    let response =
        ui.add(egui::Slider::new(&mut range, MIN_RANGE..=MAX_RANGE).text("Camera range"));
    if response.changed() {
        view.set_range(range);
    }
}

/// The panel on the right with the info pane and every button
pub fn control_panel_system(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    mut state: PanelState,
) {
    let fps = diagnostics
        .get(FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);

    egui::Window::new("3D Solar System")
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(state.pane.text());
            ui.separator();

            ui.spacing_mut().slider_width = SLIDER_WIDTH;
            speed_slider(ui, &mut state.clock);
            range_slider(ui, &mut state.view);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button(pause_label(state.clock.is_paused())).clicked() {
                    let paused = state.clock.toggle_pause();
                    info!("{}", if paused { "Paused" } else { "Resumed" });
                }
                if ui.button(format!("Scale: {}", *state.scale)).clicked() {
                    state.scale.toggle();
                }
                if ui.button(auto_fly_label(state.auto_fly.enabled)).clicked() {
                    let enabled = state.auto_fly.toggle();
                    info!("{}", auto_fly_label(enabled));
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Save preset").clicked() {
                    save_preset(&mut state);
                }
                if ui.button("Next preset").clicked() {
                    load_next_preset(&mut state);
                }
                if ui.button("Reset view").clicked() {
                    state.view.reset();
                }
            });
            if ui.button(format!("Orbits: {}", *state.model)).clicked() {
                state.model.toggle();
                info!("Orbits: {}", *state.model);
            }
            ui.separator();
            ui.label(format!("FPS: {:.0}", fps));
            ui.label(CAPTION);
        });
}
