use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use deadletter::prelude::*;

fn parse(value: &String) -> Result<i64, std::num::ParseIntError> {
    value.parse()
}

/// Inputs where every `failure_every`-th value cannot be parsed
fn inputs(count: usize, failure_every: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if failure_every > 0 && i % failure_every == 0 {
                format!("x{i}")
            } else {
                i.to_string()
            }
        })
        .collect()
}

/// Plain mapper against the capturing adapter on valid input
fn bench_success_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("success_path");
    let values = inputs(1_000, 0);

    group.bench_function("plain", |b| {
        b.iter(|| {
            for value in &values {
                black_box(parse(value).ok());
            }
        });
    });

    let adapter = capture_value_errors(parse);
    group.bench_function("capturing", |b| {
        b.iter(|| {
            for value in &values {
                black_box(adapter.apply(value.clone()).ok());
            }
        });
    });

    group.finish();
}

/// Capture and dead-letter cost as the failure rate grows
fn bench_failure_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("failure_rate");
    let adapter = capture_value_errors(parse);

    for failure_every in [100, 10, 1] {
        let values = inputs(1_000, failure_every);
        group.bench_with_input(
            BenchmarkId::from_parameter(failure_every),
            &values,
            |b, values| {
                b.iter(|| {
                    for value in values {
                        let processed = adapter.apply(value.clone()).ok();
                        if let Some(captured) = processed.and_then(Outcome::errors) {
                            black_box(captured.into_dead_letter("Cannot parse value"));
                        }
                    }
                });
            },
        );
    }

    group.finish();
}

/// Full routing through a processing session into in-memory sinks
fn bench_session_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_routing");
    let runtime = tokio::runtime::Runtime::new().unwrap();

    for failure_every in [100, 10] {
        let values = inputs(1_000, failure_every);
        group.bench_with_input(
            BenchmarkId::from_parameter(failure_every),
            &values,
            |b, values| {
                b.to_async(&runtime).iter(|| async {
                    let adapter = capture_value_errors(parse);
                    let records = values
                        .iter()
                        .enumerate()
                        .map(|(key, value)| Ok((key, value.clone())));
                    let mut session = ProcessingSession::new(
                        MemorySink::<usize, i64>::new(),
                        MemorySink::<usize, DeadLetter<String>>::new(),
                    );
                    let summary = session
                        .process_stream(futures::stream::iter(records), |key, value| {
                            Ok::<_, std::num::ParseIntError>(split_value(
                                key,
                                adapter.apply(value)?,
                                "Cannot parse value",
                            ))
                        })
                        .await;
                    black_box(summary.ok());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_success_path,
    bench_failure_rate,
    bench_session_routing
);
criterion_main!(benches);
