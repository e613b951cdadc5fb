//! Benchmarks for similarity scoring
//!
//! Run with: cargo bench -p similarity

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use similarity::{compute_similarity, content_similarity, text_similarity, tokenize, top_terms};
use std::hint::black_box;

const VOCABULARY: &[&str] = &[
  "traffic", "sensor", "network", "learning", "model", "dataset", "accuracy", "signal", "student", "portal",
  "library", "database", "query", "latency", "privacy", "blockchain", "ledger", "consensus", "vision", "camera",
];

fn generate_document(words: usize, seed: usize) -> String {
  (0..words)
    .map(|i| VOCABULARY[(i * 7 + seed) % VOCABULARY.len()])
    .collect::<Vec<_>>()
    .join(" the ")
}

fn bench_text_similarity(c: &mut Criterion) {
  let mut group = c.benchmark_group("text_similarity");

  group.bench_function("short_titles", |b| {
    b.iter(|| text_similarity(black_box("Smart Traffic System"), black_box("Smart Trafic Systems")));
  });

  let a = generate_document(150, 1);
  let b_text = generate_document(150, 3);
  group.bench_function("abstracts", |b| {
    b.iter(|| text_similarity(black_box(&a), black_box(&b_text)));
  });

  group.finish();
}

fn bench_content_similarity(c: &mut Criterion) {
  let mut group = c.benchmark_group("content_similarity");

  for words in [500, 5_000, 50_000].iter() {
    let a = generate_document(*words, 1);
    let b_text = generate_document(*words, 5);
    group.throughput(Throughput::Bytes((a.len() + b_text.len()) as u64));
    group.bench_with_input(BenchmarkId::from_parameter(words), &(a, b_text), |b, (a, b_text)| {
      b.iter(|| content_similarity(black_box(a), black_box(b_text)));
    });
  }

  group.finish();
}

fn bench_top_terms(c: &mut Criterion) {
  let mut group = c.benchmark_group("top_terms");

  let document = (0..20_000).map(|i| format!("term{}", i % 2_000)).collect::<Vec<_>>().join(" ");
  let tokens = tokenize(&document);
  group.bench_function("2000_distinct", |b| {
    b.iter(|| top_terms(black_box(&tokens), 100));
  });

  group.finish();
}

fn bench_compute_similarity(c: &mut Criterion) {
  let mut group = c.benchmark_group("compute_similarity");

  let upload = generate_document(5_000, 2);
  let project = generate_document(5_000, 4);
  let abstract_text = generate_document(120, 4);
  group.bench_function("report_vs_project", |b| {
    b.iter(|| {
      compute_similarity(
        black_box("Adaptive Traffic Signals"),
        black_box(&upload),
        black_box("Traffic Signal Optimisation"),
        black_box(&abstract_text),
        black_box(&project),
      )
    });
  });

  group.finish();
}

criterion_group!(
  benches,
  bench_text_similarity,
  bench_content_similarity,
  bench_top_terms,
  bench_compute_similarity
);
criterion_main!(benches);
