//! The bevy camera for the scene
//!
//! The view is described the way a scene graph describes it: a `center` to look at, a
//! `range` that is the half extent of what you see, a `forward` direction and an `up`.
//! [`CameraPlugin::apply_view_system`] turns that into the camera transform every frame.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::f32::consts::FRAC_PI_3;

use bevy::{
    core_pipeline::clear_color::ClearColorConfig,
    input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel},
    prelude::*,
};
use bevy_egui::EguiContexts;
use derive_more::{Display, Error};

/// Smallest camera range the zoom slider goes to
pub const MIN_RANGE: f32 = 5.0;
/// Largest camera range the zoom slider goes to
pub const MAX_RANGE: f32 = 40.0;
/// Vertical field of view
pub const FOV: f32 = FRAC_PI_3;

/// Radians of rotation per pixel of mouse drag
const DRAG_SENSITIVITY: f32 = 0.005;
/// Fraction of range zoomed per scroll line
const SCROLL_SENSITIVITY: f32 = 0.1;
/// Closest `forward` may get to `up` or `-up`, in radians
const POLE_MARGIN: f32 = 0.05;
/// Auto-fly angular speed in radians per second
const AUTO_FLY_SPEED: f32 = 0.2;

/// Used to help identify our main camera
#[derive(Component)]
pub struct MainCamera;

/// Where the camera looks from and to
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// The point the camera looks at
    pub center: Vec3,
    /// Half extent of the visible scene
    pub range: f32,
    /// Direction the camera looks in, not necessarily normalized
    pub forward: Vec3,
    /// Which way is up on screen
    pub up: Vec3,
}

impl Default for CameraView {
    fn default() -> Self {
        CameraView {
            center: Vec3::ZERO,
            range: 10.0,
            forward: Vec3::new(0.0, -0.3, -1.0),
            up: Vec3::Y,
        }
    }
}

impl CameraView {
    /// Back to the startup view
    pub fn reset(&mut self) {
        *self = CameraView::default();
    }

    /// Distance from the center at which `range` fills the field of view
    pub fn distance(&self) -> f32 {
        self.range / (FOV / 2.0).tan()
    }

    /// The camera's position
    pub fn eye(&self) -> Vec3 {
        self.center - self.forward.normalize_or_zero() * self.distance()
    }

    /// The camera transform for this view
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.center, self.up)
    }

    /// Slider and scroll zoom both end up here
    pub fn set_range(&mut self, range: f32) {
        self.range = range.clamp(MIN_RANGE, MAX_RANGE);
    }

    /// Multiply the range, positive lines zoom in
    pub fn zoom(&mut self, lines: f32) {
        self.set_range(self.range * (1.0 - lines * SCROLL_SENSITIVITY));
    }

    /// Rotate `forward` around the center: yaw about `up`, pitch about the camera's right.
    /// Pitch that would take `forward` past a pole is ignored.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        let up = self.up.normalize_or_zero();
        let forward = self.forward.normalize_or_zero();
        if up == Vec3::ZERO || forward == Vec3::ZERO {
            return;
        }
        let yawed = Quat::from_axis_angle(up, yaw) * forward;
        let right = yawed.cross(up).normalize_or_zero();
        let pitched = if right == Vec3::ZERO {
            yawed
        } else {
            Quat::from_axis_angle(right, pitch) * yawed
        };
        let angle_to_up = pitched.angle_between(up);
        let near_pole =
            angle_to_up < POLE_MARGIN || angle_to_up > std::f32::consts::PI - POLE_MARGIN;
        // Going over the top flips the right axis
        let crossed_pole = pitched.cross(up).dot(right) <= 0.0;
        if near_pole || crossed_pole {
            self.forward = yawed * self.forward.length();
        } else {
            self.forward = pitched * self.forward.length();
        }
    }

    /// Forward direction of the auto-fly tour `seconds` after startup
    pub fn auto_fly_forward(seconds: f32) -> Vec3 {
        let angle = AUTO_FLY_SPEED * seconds;
        Vec3::new(angle.cos() * 0.2, -0.3, angle.sin() * 0.8)
    }
}

/// Raised when a preset is requested but there are none
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum CameraPresetError {
    /// Nothing was saved yet
    #[display(fmt = "No presets saved yet.")]
    NoPresets,
}

/// Saved camera views the user can cycle through
#[derive(Resource, Debug, Default, Clone)]
pub struct CameraPresets {
    /// In the order they were saved
    presets: Vec<CameraView>,
    /// The last saved or loaded preset
    index: Option<usize>,
}

impl CameraPresets {
    /// Save a view. Returns its 1-based number.
    pub fn save(&mut self, view: CameraView) -> usize {
        self.presets.push(view);
        let index = self.presets.len() - 1;
        self.index = Some(index);
        index + 1
    }

    /// Step to the next preset, wrapping around. Returns its 1-based number and the view.
    pub fn next_preset(&mut self) -> Result<(usize, CameraView), CameraPresetError> {
        if self.presets.is_empty() {
            return Err(CameraPresetError::NoPresets);
        }
        let index = self.index.map_or(0, |i| (i + 1) % self.presets.len());
        self.index = Some(index);
        Ok((index + 1, self.presets[index]))
    }

    /// How many presets are saved
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// No presets saved
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Slowly circle the scene when enabled
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AutoFly {
    /// Whether the tour is running
    pub enabled: bool,
}

impl AutoFly {
    /// Returns the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

/// Ordering of the camera systems inside `Update`
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CameraSet;

/// The plugin for the camera system
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    /// Build the camera plugin
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraView>();
        app.init_resource::<CameraPresets>();
        app.init_resource::<AutoFly>();
        app.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 0.08,
        });
        app.add_systems(Startup, Self::setup_main_camera);
        app.add_systems(
            Update,
            (
                Self::zoom_camera_system,
                Self::rotate_camera_system,
                Self::auto_fly_system,
                Self::apply_view_system,
            )
                .chain()
                .in_set(CameraSet),
        );
    }
}

/// Startup functions
impl CameraPlugin {
    /// Setup the main camera
    fn setup_main_camera(mut commands: Commands, view: Res<CameraView>) {
        commands.spawn((
            Camera3dBundle {
                camera_3d: Camera3d {
                    clear_color: ClearColorConfig::Custom(Color::BLACK),
                    ..default()
                },
                projection: Projection::Perspective(PerspectiveProjection {
                    fov: FOV,
                    ..default()
                }),
                transform: view.transform(),
                ..default()
            },
            MainCamera,
        ));
    }
}

/// Update functions
impl CameraPlugin {
    /// Zoom the camera based on mouse wheel scroll
    fn zoom_camera_system(
        mut contexts: EguiContexts,
        mut scroll_evr: EventReader<MouseWheel>,
        mut view: ResMut<CameraView>,
    ) {
        let over_gui = contexts.ctx_mut().wants_pointer_input();
        let mut delta = 0.;
        for ev in scroll_evr.read() {
            match ev.unit {
                MouseScrollUnit::Line => {
                    delta += ev.y;
                }
                MouseScrollUnit::Pixel => {
                    delta += ev.y / 40.;
                }
            }
        }
        if delta != 0. && !over_gui {
            view.zoom(delta);
        }
    }

    /// Rotate the view while the right mouse button is held
    fn rotate_camera_system(
        mut contexts: EguiContexts,
        mouse_buttons: Res<Input<MouseButton>>,
        mut motion_evr: EventReader<MouseMotion>,
        mut view: ResMut<CameraView>,
    ) {
        let delta: Vec2 = motion_evr.read().map(|ev| ev.delta).sum();
        if !mouse_buttons.pressed(MouseButton::Right) || contexts.ctx_mut().wants_pointer_input()
        {
            return;
        }
        if delta != Vec2::ZERO {
            view.orbit(-delta.x * DRAG_SENSITIVITY, -delta.y * DRAG_SENSITIVITY);
        }
    }

    /// Circle the scene while auto-fly is on
    fn auto_fly_system(time: Res<Time>, auto_fly: Res<AutoFly>, mut view: ResMut<CameraView>) {
        if auto_fly.enabled {
            view.forward = CameraView::auto_fly_forward(time.elapsed_seconds());
        }
    }

    /// Move the camera to match the view
    pub fn apply_view_system(
        view: Res<CameraView>,
        mut camera: Query<&mut Transform, With<MainCamera>>,
    ) {
        if !view.is_changed() {
            return;
        }
        for mut transform in camera.iter_mut() {
            *transform = view.transform();
        }
    }
}
