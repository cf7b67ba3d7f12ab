use bevy::math::Vec3;
use criterion::{black_box, criterion_group, Criterion};
use solar_system::physics::orbits::components::{AngularSpeed, OrbitAngle, OrbitIdx, OrbitalRadius};
use solar_system::physics::orbits::kinematic::{advance_angle, orbit_position};
use solar_system::physics::orbits::nbody::{integrate, Body, CentralBody, SUBSTEPS};
use solar_system::physics::util::clock::DT;

/// Eight bodies on circular orbits, roughly the size of the displayed system
fn get_bodies(central: &CentralBody) -> Vec<Body> {
    (1..=8)
        .map(|i| {
            let position = Vec3::new(1.6 * i as f32, 0.0, 0.0);
            Body {
                position,
                velocity: central.circular_velocity(position),
            }
        })
        .collect()
}

fn bench_newtonian_step(c: &mut Criterion) {
    let central = CentralBody::from_mass(1.0);
    let mut bodies = get_bodies(&central);
    c.bench_function("newtonian_step", |b| {
        b.iter(|| {
            for body in bodies.iter_mut() {
                integrate(body, black_box(&central), black_box(DT), SUBSTEPS);
            }
        })
    });
}

fn bench_kinematic_step(c: &mut Criterion) {
    let mut angles = [OrbitAngle(0.0); 8];
    c.bench_function("kinematic_step", |b| {
        b.iter(|| {
            for (i, angle) in angles.iter_mut().enumerate() {
                *angle = advance_angle(*angle, AngularSpeed(0.01), black_box(0.5), DT);
                black_box(orbit_position(
                    OrbitalRadius(1.6 * (i + 1) as f32),
                    *angle,
                    OrbitIdx(i),
                ));
            }
        })
    });
}

criterion_group!(benches, bench_newtonian_step, bench_kinematic_step);
