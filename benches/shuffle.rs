use criterion::{black_box, criterion_group, criterion_main, Criterion};

use concentration::core::{GameConfig, GameRng, IconSet};
use concentration::rules::MatchingEngine;

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = GameRng::new(42);
    let mut data: Vec<u32> = (0..64).collect();

    c.bench_function("shuffle_64", |b| {
        b.iter(|| rng.shuffle(black_box(&mut data)))
    });
}

fn bench_deal(c: &mut Criterion) {
    let config = GameConfig::default().with_seed(42);
    let mut engine =
        MatchingEngine::new(config, IconSet::instruments()).expect("instrument set is valid");

    c.bench_function("deal_instruments", |b| {
        b.iter(|| {
            let state = engine.restart().expect("restart");
            black_box(state.len());
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = MatchingEngine::new(GameConfig::default().with_seed(42), IconSet::numbered(32))
        .expect("numbered set is valid");

    c.bench_function("snapshot_clone", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(benches, bench_shuffle, bench_deal, bench_snapshot);
criterion_main!(benches);
