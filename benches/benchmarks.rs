//! Performance benchmarks for hgvs-validate
//!
//! Run with: cargo bench
//! Run specific benchmark: cargo bench -- single

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hgvs_validate::hgvs::classify::infer_kind;
use hgvs_validate::{validate, validate_expression, validate_multi, MolecularLevel, Validator};

// =============================================================================
// Single-event benchmarks
// =============================================================================

/// Benchmark single-event validation for each kind and level
fn bench_single(c: &mut Criterion) {
    let variants = vec![
        ("c.sub", "c.76A>T", MolecularLevel::Dna),
        ("c.sub_intronic", "c.-123+45A>G", MolecularLevel::Dna),
        ("c.del", "c.19_21del", MolecularLevel::Dna),
        ("c.del_breakpoint", "c.(4071+1_4072-1)_(5154+1_5155-1)del", MolecularLevel::Dna),
        ("c.ins", "c.169_170insA", MolecularLevel::Dna),
        ("c.delins", "c.6775delinsGA", MolecularLevel::Dna),
        ("r.sub", "r.76a>u", MolecularLevel::Rna),
        ("r.spl", "r.spl", MolecularLevel::Rna),
        ("r.ins_intervals", "r.2949_2950ins[2950-30_2950-12;2950-4_2950-1]", MolecularLevel::Rna),
        ("p.sub", "p.Trp24Cys", MolecularLevel::Protein),
        ("p.predicted", "p.(Trp24Cys)", MolecularLevel::Protein),
        ("p.del", "p.Lys23_Val25del", MolecularLevel::Protein),
        ("p.fs", "p.Arg97ProfsTer23", MolecularLevel::Protein),
    ];

    let mut group = c.benchmark_group("single");

    for (name, variant, level) in &variants {
        group.bench_with_input(BenchmarkId::new("kind", name), variant, |b, v| {
            b.iter(|| validate(black_box(v), *level))
        });
    }

    group.finish();
}

/// Benchmark rejections, which try every grammar branch
fn bench_rejections(c: &mut Criterion) {
    let variants = vec![
        ("grammar", "19delR", MolecularLevel::Dna),
        ("ref_equals_new", "c.76A>A", MolecularLevel::Dna),
        ("unordered", "c.21_19del", MolecularLevel::Dna),
        ("one_letter", "p.W24C", MolecularLevel::Protein),
    ];

    let mut group = c.benchmark_group("rejections");

    for (name, variant, level) in &variants {
        group.bench_with_input(BenchmarkId::new("reason", name), variant, |b, v| {
            b.iter(|| validate(black_box(v), *level))
        });
    }

    group.finish();
}

// =============================================================================
// Multi-variant benchmarks
// =============================================================================

/// Benchmark multi-variant validation by member count
fn bench_multi(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi");

    for members in [2usize, 8, 32] {
        let body: Vec<String> = (1..=members).map(|i| format!("{}A>T", i * 3)).collect();
        let input = format!("c.[{}]", body.join(";"));
        group.throughput(Throughput::Elements(members as u64));
        group.bench_with_input(BenchmarkId::new("members", members), &input, |b, v| {
            b.iter(|| validate_multi(black_box(v)))
        });
    }

    group.finish();
}

// =============================================================================
// Throughput benchmarks
// =============================================================================

/// Benchmark mixed-level throughput through the configured validator
fn bench_throughput(c: &mut Criterion) {
    let variants: Vec<&str> = vec![
        "c.76A>T",
        "g.19_21del",
        "c.169_170insA",
        "r.[76a>u,83g>c]",
        "p.Trp24Cys",
        "p.[Trp24Cys;Lys23_Val25del]",
        "p.(=)",
        "n.6775delinsGA",
    ];

    let validator = Validator::new();
    let mut group = c.benchmark_group("throughput");

    group.throughput(Throughput::Elements(variants.len() as u64));
    group.bench_function("validator", |b| {
        b.iter(|| {
            for variant in &variants {
                let _ = validator.validate_expression(black_box(variant));
            }
        })
    });
    group.bench_function("recognizer", |b| {
        b.iter(|| {
            for variant in &variants {
                let _ = validate_expression(black_box(variant));
            }
        })
    });

    group.finish();
}

/// Benchmark the event classifier alone
fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| {
            infer_kind(black_box("Lys23_Val25delinsTrpVal"));
            infer_kind(black_box("76A>T"));
        })
    });
}

criterion_group!(
    benches,
    bench_single,
    bench_rejections,
    bench_multi,
    bench_throughput,
    bench_classify,
);

criterion_main!(benches);
