//! Pre-scripted circular orbits.
//!
//! Each body moves on a circle in the x-y plane with a small out of plane wobble.
//! Nothing here integrates forces, the angle simply grows with time.

use std::f32::consts::{PI, TAU};

use bevy::math::Vec3;

use super::components::{AngularSpeed, OrbitAngle, OrbitIdx, OrbitalRadius};

/// Angular speeds are expressed per day, this turns a day into 1/30th of a second at speed 1.
pub const ANGULAR_SPEED_MULTIPLIER: f32 = 30.0;

/// Height of the out of plane wobble relative to the orbit radius.
pub const WOBBLE_AMPLITUDE: f32 = 0.07;

/// `sin(a / 2)` repeats every 4π so angles are kept in `[0, 4π)`.
const ANGLE_PERIOD: f32 = 2.0 * TAU;

/// Advance an orbit angle by one step
pub fn advance_angle(
    angle: OrbitAngle,
    angular_speed: AngularSpeed,
    speed_scale: f32,
    dt: f32,
) -> OrbitAngle {
    let next = angle.0 + angular_speed.0 * speed_scale * dt * ANGULAR_SPEED_MULTIPLIER;
    OrbitAngle(next.rem_euclid(ANGLE_PERIOD))
}

/// Where a body sits on its orbit for a given angle
pub fn orbit_position(radius: OrbitalRadius, angle: OrbitAngle, idx: OrbitIdx) -> Vec3 {
    let r = radius.0;
    let a = angle.0;
    Vec3::new(
        r * a.cos(),
        r * a.sin(),
        WOBBLE_AMPLITUDE * r * (a * 0.5 + idx.0 as f32).sin(),
    )
}

/// Follow a body that moves freely (i.e. under gravity) and keep its angle continuous.
///
/// The in-plane angle change between two positions is wrapped into `(-π, π]` and added to
/// the previous angle, so the wobble phase does not jump when the body crosses the x axis.
pub fn track_angle(previous: OrbitAngle, old_position: Vec3, new_position: Vec3) -> OrbitAngle {
    let old = old_position.y.atan2(old_position.x);
    let new = new_position.y.atan2(new_position.x);
    let mut delta = new - old;
    if delta > PI {
        delta -= TAU;
    } else if delta <= -PI {
        delta += TAU;
    }
    OrbitAngle((previous.0 + delta).rem_euclid(ANGLE_PERIOD))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_approx_eq {
        ($a:expr, $b:expr) => {
            assert_approx_eq!($a, $b, 1e-4);
        };
        ($a:expr, $b:expr, $epsilon:expr) => {
            assert!(
                ($a - $b).abs() < $epsilon,
                "assertion failed: `(left approx== right)`\n  left: `{}`,\n right: `{}`",
                $a,
                $b
            );
        };
    }

    #[test]
    fn test_advance_angle() {
        let speed = AngularSpeed::from_period_days(365.0);
        let next = advance_angle(OrbitAngle(0.0), speed, 0.5, 0.02);
        assert_approx_eq!(next.0, TAU / 365.0 * 0.5 * 0.02 * 30.0);
    }

    #[test]
    fn test_advance_angle_wraps_without_moving_the_body() {
        let speed = AngularSpeed(1.0);
        let radius = OrbitalRadius(3.0);
        let idx = OrbitIdx(2);
        let before = OrbitAngle(ANGLE_PERIOD - 0.001);
        let after = advance_angle(before, speed, 1.0, 0.02);
        assert!(after.0 < 1.0, "angle should have wrapped: {}", after.0);

        let unwrapped = before.0 + 0.02 * ANGULAR_SPEED_MULTIPLIER;
        let expected = Vec3::new(
            3.0 * unwrapped.cos(),
            3.0 * unwrapped.sin(),
            WOBBLE_AMPLITUDE * 3.0 * (unwrapped * 0.5 + 2.0).sin(),
        );
        let actual = orbit_position(radius, after, idx);
        assert_approx_eq!(actual.x, expected.x);
        assert_approx_eq!(actual.y, expected.y);
        assert_approx_eq!(actual.z, expected.z);
    }

    #[test]
    fn test_orbit_position_at_zero() {
        let position = orbit_position(OrbitalRadius(2.0), OrbitAngle(0.0), OrbitIdx(0));
        assert_eq!(position, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_orbit_position_stays_on_radius_in_plane() {
        let radius = OrbitalRadius(4.5);
        for i in 0..100 {
            let angle = OrbitAngle(i as f32 * 0.13);
            let p = orbit_position(radius, angle, OrbitIdx(4));
            assert_approx_eq!(p.truncate().length(), 4.5);
            assert!(p.z.abs() <= WOBBLE_AMPLITUDE * 4.5 + 1e-5);
        }
    }

    #[test]
    fn test_wobble_uses_index_as_phase() {
        let a = orbit_position(OrbitalRadius(1.0), OrbitAngle(0.0), OrbitIdx(0));
        let b = orbit_position(OrbitalRadius(1.0), OrbitAngle(0.0), OrbitIdx(1));
        assert_approx_eq!(a.z, 0.0);
        assert_approx_eq!(b.z, WOBBLE_AMPLITUDE * 1.0_f32.sin());
    }

    #[test]
    fn test_track_angle_follows_small_steps() {
        let radius = OrbitalRadius(2.0);
        let mut angle = OrbitAngle(0.0);
        let mut position = orbit_position(radius, angle, OrbitIdx(0));
        // Go around one and a half times in small steps
        let mut truth = 0.0;
        for _ in 0..300 {
            truth += 0.1 * PI / 10.0;
            let next = orbit_position(radius, OrbitAngle(truth), OrbitIdx(0));
            angle = track_angle(angle, position, next);
            position = next;
        }
        assert_approx_eq!(angle.0, truth.rem_euclid(ANGLE_PERIOD), 1e-3);
    }

    #[test]
    fn test_track_angle_crossing_negative_x_axis() {
        let old = Vec3::new(-1.0, 0.01, 0.0);
        let new = Vec3::new(-1.0, -0.01, 0.0);
        let angle = track_angle(OrbitAngle(PI - 0.01), old, new);
        assert_approx_eq!(angle.0, PI + 0.01, 1e-3);
    }
}
