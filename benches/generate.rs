use std::num::NonZero;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lightemall::{BoardBuilder, Location};

fn bench_generate(c: &mut Criterion) {
    for side in [5, 10, 20] {
        let dims = (NonZero::new(side).unwrap(), NonZero::new(side).unwrap());
        let builder = BoardBuilder::with_dims(dims).seed(17).clone();
        c.bench_function(&format!("generate_{}x{}", side, side), |b| {
            b.iter(|| black_box(&builder).build().unwrap())
        });
    }
}

fn bench_power(c: &mut Criterion) {
    let dims = (NonZero::new(20).unwrap(), NonZero::new(20).unwrap());
    let mut board = BoardBuilder::with_dims(dims).seed(17).scramble(false).build().unwrap();
    c.bench_function("update_power_20x20_lit", |b| {
        b.iter(|| {
            board.update_power();
            black_box(board.all_powered())
        })
    });
}

fn bench_distances(c: &mut Criterion) {
    let dims = (NonZero::new(10).unwrap(), NonZero::new(10).unwrap());
    let mut board = BoardBuilder::with_dims(dims).seed(17).scramble(false).build().unwrap();
    c.bench_function("distance_to_station_every_tile_10x10", |b| {
        b.iter(|| {
            for row in 0..10 {
                for col in 0..10 {
                    black_box(board.shortest_distance_to_power_station(Location::new(row, col)).unwrap());
                }
            }
        })
    });
}

criterion_group!(benches, bench_generate, bench_power, bench_distances);
criterion_main!(benches);
