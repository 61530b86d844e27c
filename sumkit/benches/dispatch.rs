use std::f64::consts::PI;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use sumkit::{Option, Union3};

pub enum StdShape {
    Circle(f64),
    Square(f64),
    Label(String),
}

const N: usize = 10000;

fn bench_dispatch(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let kinds = (0..N).map(|_| rng.gen_range(0..3u8)).collect::<Vec<_>>();
    let unions = kinds
        .iter()
        .map(|kind| match kind {
            0 => Union3::<f64, f64, String>::First(1.5),
            1 => Union3::Second(2.5),
            _ => Union3::Third("label".into()),
        })
        .collect::<Vec<_>>();
    let enums = kinds
        .iter()
        .map(|kind| match kind {
            0 => StdShape::Circle(1.5),
            1 => StdShape::Square(2.5),
            _ => StdShape::Label("label".into()),
        })
        .collect::<Vec<_>>();
    c.bench_function("std_enum_match", |b| {
        b.iter(|| {
            let mut total = 0.;
            for shape in &enums {
                total += match shape {
                    StdShape::Circle(r) => PI * r * r,
                    StdShape::Square(side) => side * side,
                    StdShape::Label(label) => label.len() as f64,
                };
            }
            black_box(total)
        })
    });
    c.bench_function("union_match_ref", |b| {
        b.iter(|| {
            let mut total = 0.;
            for shape in &unions {
                total += shape.match_ref(|r| PI * r * r, |side| side * side, |label| label.len() as f64);
            }
            black_box(total)
        })
    });
    c.bench_function("union_is", |b| {
        b.iter(|| {
            black_box(
                unions
                    .iter()
                    .filter(|shape| shape.is::<String>().is_some())
                    .count(),
            )
        })
    });
}

fn bench_options(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let values = (0..N)
        .map(|_| rng.gen::<bool>().then(|| rng.gen::<u32>()))
        .collect::<Vec<_>>();
    let options = values
        .iter()
        .map(|value| Option::from_value(*value))
        .collect::<Vec<_>>();
    c.bench_function("std_option_map", |b| {
        b.iter(|| {
            values
                .iter()
                .map(|value| value.map(|x| x / 2).unwrap_or(0) as u64)
                .sum::<u64>()
        })
    });
    c.bench_function("option_map", |b| {
        b.iter(|| {
            options
                .iter()
                .map(|option| option.map(|x| x / 2).value_or(0) as u64)
                .sum::<u64>()
        })
    });
}

criterion_group!(benches, bench_dispatch, bench_options);
criterion_main!(benches);
