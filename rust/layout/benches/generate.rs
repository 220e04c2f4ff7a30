// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmarks for prompt-to-scene generation.

use archprompt_layout::{build_scene, generate, LayoutConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SMALL: &str = "A simple apartment";
const LARGE: &str = "Rustic ten-bedroom lodge with 6 bathrooms, kitchen and lounge, 400 sqm";

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("single_room_json", |b| {
        b.iter(|| generate(black_box(SMALL)).unwrap())
    });

    group.bench_function("large_program_json", |b| {
        b.iter(|| generate(black_box(LARGE)).unwrap())
    });

    let config = LayoutConfig::default();
    group.bench_function("large_program_scene", |b| {
        b.iter(|| build_scene(black_box(LARGE), &config).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
