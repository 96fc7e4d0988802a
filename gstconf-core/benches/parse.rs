//! Benchmarks for action parsing.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gstconf_core::{parse_events, parse_str, Event, Events, ParserConfig};

/// YAML document with `n` fully populated actions.
fn document(n: usize) -> String {
    let mut out = String::from("actions:\n");
    for i in 0..n {
        out.push_str(&format!(
            "  - name: action_{i}\n    device: all\n    module: gst\n    parallel: true\n    count: {i}\n    \
             duration: 5000\n    copy_matrix: false\n    target_stress: 0.9\n    matrix_size_a: 8640\n    \
             matrix_size_b: 8640\n    matrix_size_c: 8640\n    ops_type: sgemm\n    log_interval: 1000\n"
        ));
    }
    out
}

/// Benchmark the full path from YAML text.
fn bench_parse_yaml(c: &mut Criterion) {
    let input = document(256);

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("yaml_256_actions", |b| {
        b.iter(|| parse_str(black_box(&input)).map(|store| store.len()))
    });

    group.finish();
}

/// Benchmark the state machine alone over pre-built events.
fn bench_machine_only(c: &mut Criterion) {
    let input = document(256);
    let mut events = Vec::new();
    let mut source = gstconf_core::YamlEventSource::from_str(&input);
    while let Ok(Some(event)) = gstconf_core::EventSource::next_event(&mut source) {
        events.push(event);
    }

    let mut group = c.benchmark_group("machine");
    group.throughput(Throughput::Elements(events.len() as u64));

    group.bench_function("events_256_actions", |b| {
        b.iter(|| {
            let events: Vec<Event> = black_box(&events).clone();
            parse_events(Events::new(events), &ParserConfig::default()).map(|store| store.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse_yaml, bench_machine_only);
criterion_main!(benches);
