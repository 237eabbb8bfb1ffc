use criterion::{black_box, criterion_group, criterion_main, Criterion};

use giftq_core::{classify, tokenize, type_counts, validate};

const QUESTION_SHAPES: &[&str] = &[
    "The earth is round {T}",
    "Pi to two places {#3.14:0.01}",
    "Match the sounds {\n=cat -> meow\n=dog -> woof\n}",
    "Name a pet {=cat =dog}",
    "Capital of France {=Paris ~Lyon ~Nice}",
    "Describe your weekend {}",
    "Read the following passage carefully.",
];

fn generate_exam(n: usize) -> String {
    let mut s = String::from("// generated exam\n$CATEGORY: bench\n\n");
    for i in 0..n {
        let shape = QUESTION_SHAPES[i % QUESTION_SHAPES.len()];
        s.push_str(&format!("::Q{i}:: {shape}\n\n"));
    }
    s
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    let small = generate_exam(20);
    let large = generate_exam(500);

    group.bench_function("20_questions", |b| {
        b.iter(|| tokenize(black_box(&small)).len())
    });

    group.bench_function("500_questions", |b| {
        b.iter(|| tokenize(black_box(&large)).len())
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for (i, shape) in QUESTION_SHAPES.iter().enumerate() {
        let block = format!("::Q{i}:: {shape}");
        group.bench_function(format!("shape_{i}"), |b| b.iter(|| classify(black_box(&block))));
    }

    let exam = generate_exam(200);
    group.bench_function("type_counts_200", |b| b.iter(|| type_counts(black_box(&exam))));

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut exam = String::new();
    let mut answers = Vec::new();
    for i in 0..100 {
        exam.push_str(&format!("::Q{i}:: Pick one {{=right ~wrong}}\n"));
        answers.push("right");
    }

    c.bench_function("validate_100", |b| {
        b.iter(|| validate(black_box(&exam), black_box(&answers)))
    });
}

criterion_group!(benches, bench_tokenize, bench_classify, bench_validate);
criterion_main!(benches);
