use std::fmt::Write;

use criterion::{criterion_group, criterion_main, Criterion};
use lcs_diff_rs::{
    tokenizer::{Lines, Words},
    LcsDiff,
};

// Two documents that share most of their lines, with edits scattered the
// way a source file drifts between revisions.
fn create_data(lines: usize) -> (String, String) {
    let mut old = String::new();
    let mut new = String::new();

    for i in 0..lines {
        writeln!(old, "line {i}: the quick brown fox jumps over the lazy dog").unwrap();

        if i % 17 == 3 {
            // dropped from the new side
            continue;
        }
        if i % 7 == 0 {
            writeln!(new, "line {i}: the quick red fox leaps over the lazy dog").unwrap();
        } else {
            writeln!(new, "line {i}: the quick brown fox jumps over the lazy dog").unwrap();
        }
        if i % 23 == 11 {
            writeln!(new, "line {i}b: freshly inserted material").unwrap();
        }
    }

    (old, new)
}

fn compare_lines(c: &mut Criterion) {
    let ld = LcsDiff::new();

    for n in [100, 400, 1600] {
        let (old, new) = create_data(n);

        c.bench_function(&format!("compare lines n={n}"), |bencher| {
            bencher.iter(|| ld.compare::<Lines>(&old, &new));
        });
    }
}

fn compare_words(c: &mut Criterion) {
    let ld = LcsDiff::new();
    let (old, new) = create_data(8);

    c.bench_function("compare words", |bencher| {
        bencher.iter(|| ld.compare::<Words>(&old, &new));
    });
}

criterion_group!(compare, compare_lines, compare_words);
criterion_main!(compare);
