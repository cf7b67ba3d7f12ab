//! Wires the orbit math into bevy's fixed timestep.

use bevy::prelude::*;
use strum_macros::{Display, EnumIter};

use super::{
    components::{AngularSpeed, OrbitAngle, OrbitIdx, OrbitalRadius, Position, Velocity},
    kinematic::{advance_angle, orbit_position, track_angle},
    nbody::{integrate, Body, CentralBody, SUBSTEPS},
};
use crate::physics::util::clock::{is_running, SimulationClock, DT};

/// How bodies are moved every tick
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum OrbitModel {
    /// Pre-scripted circular motion
    #[default]
    #[strum(serialize = "Circular")]
    Kinematic,
    /// Elementary gravity around the sun
    #[strum(serialize = "Newtonian")]
    Newtonian,
}

impl OrbitModel {
    pub fn toggle(&mut self) {
        *self = match self {
            OrbitModel::Kinematic => OrbitModel::Newtonian,
            OrbitModel::Newtonian => OrbitModel::Kinematic,
        };
    }
}

/// Ordering of the orbit systems inside `FixedUpdate`
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrbitSet {
    /// Move the bodies
    Step,
    /// Copy positions into transforms
    Sync,
}

/// Plugin to set up orbit physics
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_seconds(DT as f64));
        app.init_resource::<SimulationClock>();
        app.init_resource::<OrbitModel>();
        app.init_resource::<CentralBody>();
        app.configure_sets(FixedUpdate, (OrbitSet::Step, OrbitSet::Sync).chain());
        app.add_systems(
            FixedUpdate,
            (
                Self::advance_kinematic_orbits.run_if(resource_equals(OrbitModel::Kinematic)),
                Self::step_newtonian_orbits.run_if(resource_equals(OrbitModel::Newtonian)),
                Self::tick_clock,
            )
                .in_set(OrbitSet::Step)
                .run_if(is_running),
        );
        app.add_systems(FixedUpdate, Self::sync_transforms.in_set(OrbitSet::Sync));
        app.add_systems(Update, Self::convert_orbit_model);
    }
}

/// Bevy Systems
impl OrbitPlugin {
    /// Move every body along its circle
    pub fn advance_kinematic_orbits(
        clock: Res<SimulationClock>,
        mut bodies: Query<(
            &OrbitIdx,
            &OrbitalRadius,
            &AngularSpeed,
            &mut OrbitAngle,
            &mut Position,
            &mut Velocity,
        )>,
    ) {
        for (idx, radius, angular_speed, mut angle, mut position, mut velocity) in
            bodies.iter_mut()
        {
            *angle = advance_angle(*angle, *angular_speed, clock.speed_scale(), DT);
            let next = orbit_position(*radius, *angle, *idx);
            velocity.0 = (next - position.0) / DT;
            position.0 = next;
        }
    }

    /// Let the sun pull on every body, speed scale acts as a time warp
    pub fn step_newtonian_orbits(
        clock: Res<SimulationClock>,
        central: Res<CentralBody>,
        mut bodies: Query<(&mut OrbitAngle, &mut Position, &mut Velocity)>,
    ) {
        let dt = clock.scaled_dt();
        for (mut angle, mut position, mut velocity) in bodies.iter_mut() {
            let mut body = Body {
                position: position.0,
                velocity: velocity.0,
            };
            integrate(&mut body, &central, dt, SUBSTEPS);
            *angle = track_angle(*angle, position.0, body.position);
            position.0 = body.position;
            velocity.0 = body.velocity;
        }
    }

    fn tick_clock(mut clock: ResMut<SimulationClock>) {
        clock.tick();
    }

    /// Positions are the source of truth, transforms follow
    pub fn sync_transforms(mut bodies: Query<(&Position, &mut Transform), Changed<Position>>) {
        for (position, mut transform) in bodies.iter_mut() {
            transform.translation = position.0;
        }
    }

    /// Swap state representation when the orbit model changes
    pub fn convert_orbit_model(
        model: Res<OrbitModel>,
        central: Res<CentralBody>,
        mut bodies: Query<(
            &OrbitIdx,
            &OrbitalRadius,
            &AngularSpeed,
            &OrbitAngle,
            &mut Position,
            &mut Velocity,
        )>,
    ) {
        if !model.is_changed() {
            return;
        }
        debug!("Orbit model is now {}", *model);
        for (idx, radius, angular_speed, angle, mut position, mut velocity) in bodies.iter_mut()
        {
            let (p, v) = reseat_on_circle(*model, &central, *idx, *radius, *angular_speed, *angle);
            *position = p;
            *velocity = v;
        }
    }
}

/// Place a body back on its circle at `angle` with a velocity appropriate for the model.
///
/// Kinematic bodies get the velocity of the scripted motion at speed scale 1, Newtonian
/// bodies get the circular orbit speed of the central body.
pub fn reseat_on_circle(
    model: OrbitModel,
    central: &CentralBody,
    idx: OrbitIdx,
    radius: OrbitalRadius,
    angular_speed: AngularSpeed,
    angle: OrbitAngle,
) -> (Position, Velocity) {
    let position = orbit_position(radius, angle, idx);
    let velocity = match model {
        OrbitModel::Kinematic => {
            let next = orbit_position(radius, advance_angle(angle, angular_speed, 1.0, DT), idx);
            (next - position) / DT
        }
        OrbitModel::Newtonian => central.circular_velocity(position),
    };
    (Position(position), Velocity(velocity))
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use super::*;
    use crate::physics::orbits::components::OrbitBundle;
    use crate::physics::orbits::kinematic::ANGULAR_SPEED_MULTIPLIER;

    fn world_with_bodies(n: usize) -> World {
        let mut world = World::new();
        world.insert_resource(SimulationClock::new(1.0));
        world.insert_resource(OrbitModel::Kinematic);
        world.insert_resource(CentralBody::from_circular_orbit(
            2.0,
            TAU / 365.0 * ANGULAR_SPEED_MULTIPLIER,
        ));
        for i in 0..n {
            world.spawn((
                OrbitBundle::new(
                    OrbitIdx(i),
                    OrbitalRadius(1.0 + i as f32),
                    AngularSpeed::from_period_days(100.0 * (i + 1) as f32),
                ),
                Transform::default(),
            ));
        }
        world
    }

    fn run_fixed_step(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.configure_sets((OrbitSet::Step, OrbitSet::Sync).chain());
        schedule.add_systems(
            (
                OrbitPlugin::advance_kinematic_orbits
                    .run_if(resource_equals(OrbitModel::Kinematic)),
                OrbitPlugin::step_newtonian_orbits.run_if(resource_equals(OrbitModel::Newtonian)),
                OrbitPlugin::tick_clock,
            )
                .in_set(OrbitSet::Step)
                .run_if(is_running),
        );
        schedule.add_systems(OrbitPlugin::sync_transforms.in_set(OrbitSet::Sync));
        schedule.run(world);
    }

    fn positions(world: &mut World) -> Vec<Vec3> {
        let mut query = world.query::<(&OrbitIdx, &Position)>();
        let mut out: Vec<_> = query.iter(world).map(|(i, p)| (i.0, p.0)).collect();
        out.sort_by_key(|(i, _)| *i);
        out.into_iter().map(|(_, p)| p).collect()
    }

    #[test]
    fn test_kinematic_step_moves_every_body() {
        let mut world = world_with_bodies(3);
        let before = positions(&mut world);
        run_fixed_step(&mut world);
        let after = positions(&mut world);
        for (b, a) in before.iter().zip(after.iter()) {
            assert_ne!(b, a);
        }
        assert_eq!(world.resource::<SimulationClock>().get_current_tick(), 1);
    }

    #[test]
    fn test_kinematic_step_advances_angle_by_formula() {
        let mut world = world_with_bodies(1);
        run_fixed_step(&mut world);
        let mut query = world.query::<&OrbitAngle>();
        let angle = query.single(&world);
        let expected = TAU / 100.0 * 1.0 * DT * ANGULAR_SPEED_MULTIPLIER;
        assert!((angle.0 - expected).abs() < 1e-6);
    }

    #[test]
    fn test_transform_follows_position() {
        let mut world = world_with_bodies(2);
        run_fixed_step(&mut world);
        let mut query = world.query::<(&Position, &Transform)>();
        for (position, transform) in query.iter(&world) {
            assert_eq!(position.0, transform.translation);
        }
    }

    #[test]
    fn test_paused_clock_freezes_bodies() {
        let mut world = world_with_bodies(3);
        world.resource_mut::<SimulationClock>().set_paused(true);
        let before = positions(&mut world);
        run_fixed_step(&mut world);
        run_fixed_step(&mut world);
        assert_eq!(before, positions(&mut world));
        assert_eq!(world.resource::<SimulationClock>().get_current_tick(), 0);
    }

    #[test]
    fn test_newtonian_step_keeps_circular_orbit() {
        let mut world = world_with_bodies(1);
        world.insert_resource(OrbitModel::Newtonian);
        let central = *world.resource::<CentralBody>();
        {
            let mut query = world.query::<(&Position, &mut Velocity)>();
            for (position, mut velocity) in query.iter_mut(&mut world) {
                velocity.0 = central.circular_velocity(position.0);
            }
        }
        for _ in 0..500 {
            run_fixed_step(&mut world);
        }
        let p = positions(&mut world)[0];
        assert!((p.length() - 1.0).abs() < 0.02, "radius is {}", p.length());
    }

    fn conversion_schedule() -> Schedule {
        let mut schedule = Schedule::default();
        schedule.add_systems(OrbitPlugin::convert_orbit_model);
        schedule
    }

    fn body_state(world: &mut World) -> (OrbitAngle, Vec3, Vec3) {
        let mut query = world.query::<(&OrbitAngle, &Position, &Velocity)>();
        let (angle, position, velocity) = query.single(world);
        (*angle, position.0, velocity.0)
    }

    /// Difference of two angles on the circle, in `[0, π]`
    fn angle_gap(a: f32, b: f32) -> f32 {
        let gap = (a - b).rem_euclid(TAU);
        gap.min(TAU - gap)
    }

    #[test]
    fn test_switch_to_newtonian_seeds_circular_velocity() {
        let mut world = world_with_bodies(1);
        let mut conversion = conversion_schedule();
        conversion.run(&mut world);
        for _ in 0..7 {
            run_fixed_step(&mut world);
        }

        world.insert_resource(OrbitModel::Newtonian);
        conversion.run(&mut world);
        let central = *world.resource::<CentralBody>();
        let (_, position, velocity) = body_state(&mut world);
        assert!((velocity.length() - (central.mu / position.length()).sqrt()).abs() < 1e-4);
        // Tangential
        assert!(velocity.dot(position).abs() < 1e-4);
    }

    #[test]
    fn test_newtonian_round_trip_resumes_on_the_circle() {
        let mut world = world_with_bodies(1);
        let mut conversion = conversion_schedule();
        conversion.run(&mut world);

        world.insert_resource(OrbitModel::Newtonian);
        conversion.run(&mut world);
        for _ in 0..120 {
            run_fixed_step(&mut world);
        }
        let (angle, free_position, _) = body_state(&mut world);
        let in_plane = free_position.y.atan2(free_position.x);
        assert!(angle_gap(angle.0, in_plane) < 1e-3, "{} vs {}", angle.0, in_plane);

        world.insert_resource(OrbitModel::Kinematic);
        conversion.run(&mut world);
        let (resumed_angle, position, _) = body_state(&mut world);
        assert_eq!(resumed_angle, angle);
        assert_eq!(
            position,
            orbit_position(OrbitalRadius(1.0), angle, OrbitIdx(0))
        );

        // And it keeps moving along the script from there
        run_fixed_step(&mut world);
        let (next_angle, _, _) = body_state(&mut world);
        assert!(next_angle.0 != angle.0);
    }

    #[test]
    fn test_reseat_newtonian_gives_circular_speed() {
        let central = CentralBody::from_mass(9.0);
        let (position, velocity) = reseat_on_circle(
            OrbitModel::Newtonian,
            &central,
            OrbitIdx(0),
            OrbitalRadius(1.0),
            AngularSpeed(1.0),
            OrbitAngle(0.0),
        );
        assert_eq!(position.0, Vec3::new(1.0, 0.0, 0.0));
        assert!((velocity.0.length() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_orbit_model_toggle() {
        let mut model = OrbitModel::default();
        assert_eq!(model, OrbitModel::Kinematic);
        model.toggle();
        assert_eq!(model, OrbitModel::Newtonian);
        assert_eq!(model.to_string(), "Newtonian");
        model.toggle();
        assert_eq!(model.to_string(), "Circular");
    }
}
