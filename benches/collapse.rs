//! Collapse benchmarks
//!
//! The whole death animation runs inside a 16 ms frame budget alongside
//! the rest of the game; these benches track the cost of a full collapse
//! at different solver iteration counts and of a single tick.
//!
//! Run with: cargo bench --bench collapse

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quickdraw_sim::config::SimConfig;
use quickdraw_sim::sim::state::{HitZone, Side, SimState};
use quickdraw_sim::sim::systems::bullet::ImpactEvent;
use quickdraw_sim::sim::tick;
use quickdraw_sim::util::vec2::Vec2;

const GROUND_Y: f32 = 292.0;

fn hit_state(config: &SimConfig, rng: &mut StdRng) -> SimState {
    let anchor = Vec2::new(100.0, GROUND_Y);
    let mut state = SimState::new(GROUND_Y);
    let event = ImpactEvent {
        position: anchor + Vec2::UP * 75.0,
        velocity: Vec2::new(-35.0, 0.0),
        loser: Side::Left,
        anchor,
        zone: Some(HitZone::Chest),
        magnitude: 10.0,
        unit_scale: 1.0,
    };
    tick::resolve_hit(&mut state, config, &event, rng);
    state
}

fn bench_full_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_collapse_240_ticks");

    for iterations in [1u32, 5, 10] {
        let config = SimConfig {
            solver_iterations: iterations,
            ..Default::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(1);
                    let mut state = hit_state(config, &mut rng);
                    for _ in 0..240 {
                        tick::advance(&mut state, config, &mut rng);
                    }
                    black_box(state.tick)
                });
            },
        );
    }

    group.finish();
}

fn bench_single_tick(c: &mut Criterion) {
    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(2);
    let state = hit_state(&config, &mut rng);

    c.bench_function("single_tick", |b| {
        b.iter(|| {
            let mut state = state.clone();
            let mut rng = StdRng::seed_from_u64(3);
            tick::advance(&mut state, &config, &mut rng);
            black_box(state.ragdoll.is_some())
        });
    });
}

criterion_group!(benches, bench_full_collapse, bench_single_tick);
criterion_main!(benches);
