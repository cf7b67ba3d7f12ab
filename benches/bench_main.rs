use criterion::criterion_main;


criterion_main! {
    physics::orbits::benches,
}
