//! Benchmarks for layoutpdf parsing and assembly.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic layout sources of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic layout with the given number of pages.
fn create_test_layout(page_count: usize) -> String {
    let mut layout = String::from("// synthetic benchmark layout\n");

    for i in 0..page_count {
        layout.push_str(&format!("[page{}] 20, blue, center\n", i + 1));
        layout.push_str(&format!("Section {}\n\n", i + 1));
        layout.push_str("[body] 11\n");
        for n in 0..30 {
            layout.push_str(&format!(
                "Line {} of the body text (with parentheses) and a \\ backslash.\n",
                n
            ));
        }
        layout.push_str("[footer] 9, gray, right, bottom\n");
        layout.push_str(&format!("Page {}\n", i + 1));
        layout.push_str(&format!("[/page{}]\n", i + 1));
    }

    layout
}

/// Benchmark layout parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_parsing");

    for page_count in [1, 10, 100].iter() {
        let layout = create_test_layout(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| layoutpdf::parse_str(black_box(&layout)));
        });
    }

    group.finish();
}

/// Benchmark PDF assembly at various sizes.
fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf_assembly");

    for page_count in [1, 10, 100].iter() {
        let doc = layoutpdf::parse_str(&create_test_layout(*page_count));

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| layoutpdf::to_pdf(black_box(&doc)).unwrap());
        });

        group.bench_function(format!("{}_pages_compressed", page_count), |b| {
            let options = layoutpdf::PdfOptions::new().compressed();
            b.iter(|| layoutpdf::render::to_pdf(black_box(&doc), &options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_assembly);
criterion_main!(benches);
