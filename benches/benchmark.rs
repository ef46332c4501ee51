use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use outcome_rail::{try_outcome, Outcome};

#[derive(Debug)]
enum StepError {
    Overflow,
    Negative,
}

fn checked_double(v: i64) -> Outcome<i64, StepError> {
    match v.checked_mul(2) {
        Some(doubled) => Outcome::Ok(doubled),
        None => Outcome::Err(StepError::Overflow),
    }
}

fn fib(n: i64) -> Outcome<i64, StepError> {
    if n < 0 {
        return Outcome::Err(StepError::Negative);
    }
    if n < 2 {
        return Outcome::Ok(1);
    }
    let n_1 = try_outcome!(fib(n - 1));
    let n_2 = try_outcome!(fib(n - 2));
    Outcome::Ok(n_1 + n_2)
}

fn fib_plain(n: i64) -> Result<i64, StepError> {
    if n < 0 {
        return Err(StepError::Negative);
    }
    if n < 2 {
        return Ok(1);
    }
    Ok(fib_plain(n - 1)? + fib_plain(n - 2)?)
}

fn bench_combinator_chain(c: &mut Criterion) {
    c.bench_function("and_then chain x6", |b| {
        b.iter(|| {
            let start: Outcome<i64, StepError> = Outcome::Ok(black_box(1));
            start
                .and_then(checked_double)
                .and_then(checked_double)
                .and_then(checked_double)
                .and_then(checked_double)
                .and_then(checked_double)
                .and_then(checked_double)
        })
    });

    c.bench_function("map_res chain x6", |b| {
        b.iter(|| {
            let start: Outcome<i64, StepError> = Outcome::Ok(black_box(1));
            start
                .map_res(|v| v * 2)
                .map_res(|v| v * 2)
                .map_res(|v| v * 2)
                .map_res(|v| v * 2)
                .map_res(|v| v * 2)
                .map_res(|v| v * 2)
        })
    });
}

fn bench_propagation(c: &mut Criterion) {
    c.bench_function("fib(15) via try_outcome!", |b| {
        b.iter(|| fib(black_box(15)))
    });

    c.bench_function("fib(15) via std Result and ?", |b| {
        b.iter(|| fib_plain(black_box(15)))
    });
}

criterion_group!(benches, bench_combinator_chain, bench_propagation);
criterion_main!(benches);
