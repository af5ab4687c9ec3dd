use criterion::{black_box, criterion_group, criterion_main, Criterion};

use waspline::convert;

fn synthetic_grammar(rules: usize) -> String {
  let mut s = String::new();
  for i in 0..rules {
    if i % 2 == 0 {
      s.push_str(&format!("[X] ||| city {} ||| cityid 'c{}' |||\n", i, i));
    } else {
      s.push_str(
        "[X] ||| how many people live in [X,1] near [X,2] ||| answer population_1 [X,1] [X,2] ||| 0 8.66 1 ||| 0-0 2-1\n",
      );
    }
  }
  s
}

fn convert_to_string(input: &str) -> usize {
  let mut out = Vec::new();
  convert(input.as_bytes(), &mut out).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
  let small = synthetic_grammar(100);
  let large = synthetic_grammar(10_000);

  c.bench_function("convert 100 rules", |b| {
    b.iter(|| convert_to_string(black_box(&small)))
  });

  c.bench_function("convert 10k rules", |b| {
    b.iter(|| convert_to_string(black_box(&large)))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
