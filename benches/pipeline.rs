//! Benchmarks for the df-macros pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use df_macros::{encode_macro, plan, Grid, Pixel};

/// A square room with a regular pattern of pillars.
fn pillared_room(size: usize, spacing: usize) -> Grid {
    let rows = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| {
                    if x % spacing == spacing - 1 && y % spacing == spacing - 1 {
                        Pixel::Ignore
                    } else {
                        Pixel::Process
                    }
                })
                .collect()
        })
        .collect();
    Grid::new(rows).unwrap()
}

/// A diagonal staircase, which forces many small rectangles.
fn staircase(size: usize) -> Grid {
    let rows = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| if x <= y { Pixel::Process } else { Pixel::Ignore })
                .collect()
        })
        .collect();
    Grid::new(rows).unwrap()
}

// -- Planning benchmarks --

fn bench_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning");

    let open = pillared_room(24, 100);
    let pillars = pillared_room(24, 4);
    let stairs = staircase(24);

    group.bench_function("plan_open_room", |b| {
        b.iter(|| plan(black_box(&open)).unwrap())
    });

    group.bench_function("plan_pillared_room", |b| {
        b.iter(|| plan(black_box(&pillars)).unwrap())
    });

    group.bench_function("plan_staircase", |b| {
        b.iter(|| plan(black_box(&stairs)).unwrap())
    });

    group.finish();
}

// -- Encoding benchmarks --

fn bench_encoding(c: &mut Criterion) {
    let brush = plan(&pillared_room(32, 4)).unwrap();

    c.bench_function("encode_macro", |b| {
        b.iter(|| encode_macro(black_box("room"), black_box(brush.commands())))
    });
}

criterion_group!(benches, bench_planning, bench_encoding);
criterion_main!(benches);
