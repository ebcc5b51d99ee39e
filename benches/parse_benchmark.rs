//! Benchmarks for gridsheet parsing and validation.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic answers that fill one to three pages.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic answer of alternating text runs and tables.
fn create_test_answer(page_count: u32) -> String {
    let target = page_count * gridsheet::LINES_PER_PAGE;
    let mut lines = Vec::new();
    let mut section = 1;

    while (lines.len() as u32) < target {
        lines.push(format!("{}. 핵심 개념 설명", section));
        lines.push("정규화는 중복을 제거한다".to_string());
        lines.push("| 구분 | 내용 | 비고 |".to_string());
        lines.push("| --- | --- | --- |".to_string());
        lines.push("| 1NF | 원자값 | 필수 |".to_string());
        lines.push("| 2NF | 부분종속 | |".to_string());
        section += 1;
    }

    lines.join("\n")
}

/// Benchmark plain-text parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for page_count in [1, 2, 3].iter() {
        let text = create_test_answer(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| gridsheet::parse_to_blocks(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark validation of a full sheet.
fn bench_validation(c: &mut Criterion) {
    let doc = gridsheet::parse_to_blocks(&create_test_answer(3));

    c.bench_function("validate_full_sheet", |b| {
        b.iter(|| gridsheet::validate_document(black_box(&doc)));
    });
}

/// Benchmark serialization of a full sheet.
fn bench_serialization(c: &mut Criterion) {
    let doc = gridsheet::parse_to_blocks(&create_test_answer(3));

    c.bench_function("plain_text_full_sheet", |b| {
        b.iter(|| gridsheet::blocks_to_plain_text(black_box(&doc)));
    });

    c.bench_function("json_full_sheet", |b| {
        b.iter(|| gridsheet::to_json(black_box(&doc), gridsheet::JsonFormat::Compact).unwrap());
    });
}

criterion_group!(benches, bench_parsing, bench_validation, bench_serialization);
criterion_main!(benches);
