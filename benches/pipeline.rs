//! Benchmarks for chatscrub parsing and pipeline operations.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench pipeline -- parse`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatscrub::export::to_json;
use chatscrub::filters::{
    BlacklistFilter, Filter, KeywordFilter, NumberFilter, ObfuscateIdFilter, UserFilter,
};
use chatscrub::pipeline::{Step, apply_steps};
use chatscrub::transcript::parse_transcript;
use chatscrub::{Conversation, Message};

// =============================================================================
// Test Data Generators
// =============================================================================

const SENDERS: [&str; 4] = ["bob", "angus", "mike", "sarah"];

fn generate_transcript(count: usize) -> String {
    let mut out = String::from("Benchmark Conversation\n");
    for i in 0..count {
        let sender = SENDERS[i % SENDERS.len()];
        let flavor = match i % 4 {
            0 => format!("message number {} about pie", i),
            1 => format!("call me on 0118-999-881-99 about item {}", i),
            2 => format!("room {} is booked", i % 100),
            _ => format!("nothing special in message {}", i),
        };
        out.push_str(&format!("{} {} {}\n", 1448470901 + i as u64, sender, flavor));
    }
    out
}

fn generate_conversation(count: usize) -> Conversation {
    let messages = (0..count)
        .map(|i| {
            Message::from_epoch(
                1448470901 + i as u64,
                SENDERS[i % SENDERS.len()],
                format!("message number {} about pie and 5551234567", i),
            )
            .unwrap()
        })
        .collect();
    Conversation::new("Benchmark Conversation", messages)
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parse_transcript(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_transcript");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let text = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let convo = parse_transcript(black_box(text)).unwrap();
                black_box(convo)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Filter Benchmarks
// =============================================================================

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    let filters: Vec<(&str, Box<dyn Filter>)> = vec![
        ("user", Box::new(UserFilter::new("bob"))),
        ("keyword", Box::new(KeywordFilter::new("pie"))),
        ("blacklist", Box::new(BlacklistFilter::new("pie"))),
        ("numbers", Box::new(NumberFilter::new())),
        ("obfuscate", Box::new(ObfuscateIdFilter::new())),
    ];

    let convo = generate_conversation(10_000);
    group.throughput(Throughput::Elements(10_000));

    for (name, filter) in &filters {
        group.bench_with_input(BenchmarkId::from_parameter(name), &convo, |b, convo| {
            b.iter(|| {
                let out = filter.transform(black_box(convo.clone()));
                black_box(out)
            });
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    let steps = [
        Step::Keyword("pie".to_string()),
        Step::Blacklist("pie".to_string()),
        Step::HideNumbers,
        Step::Obfuscate,
        Step::Report,
    ];

    for size in [1_000_usize, 10_000, 50_000] {
        let text = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                // Full pipeline: parse -> filter chain -> serialize
                let convo = parse_transcript(black_box(text)).unwrap();
                let convo = apply_steps(convo, &steps);
                let json = to_json(&convo).unwrap();
                black_box(json)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_parse_transcript,
    bench_filters,
    bench_full_pipeline,
);

criterion_main!(benches);
