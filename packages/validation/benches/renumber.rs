//! Renumbering benchmarks
//!
//! The renumber pass runs on every collection removal, so it has to
//! stay linear over the entry list.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fairway_validation::{renumber_after_remove, renumber_outer_after_remove, ValidationEntry};

fn generate_entries(elements: usize) -> Vec<ValidationEntry> {
    let mut entries = Vec::new();
    for i in 0..elements {
        entries.push(ValidationEntry::new(
            format!("vtsName-{i}"),
            "required".to_string(),
        ));
        for j in 0..4 {
            entries.push(ValidationEntry::new(
                format!("vhfChannel-{i}-{j}"),
                "invalid".to_string(),
            ));
        }
    }
    entries
}

fn bench_renumber(c: &mut Criterion) {
    let entries = generate_entries(200);

    c.bench_function("renumber_single_level_1000_entries", |b| {
        b.iter(|| renumber_after_remove(black_box(&entries), "vtsName", 100))
    });

    c.bench_function("renumber_outer_1000_entries", |b| {
        b.iter(|| renumber_outer_after_remove(black_box(&entries), "vhfChannel", 100))
    });
}

criterion_group!(benches, bench_renumber);
criterion_main!(benches);
