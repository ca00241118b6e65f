//! Benchmarks for outline extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the full pipeline over synthetic decoded documents.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdfoutline::analysis::FontStatistics;
use pdfoutline::{BoundingBox, Document, OutlineExtractor, OutlineOptions, Page, TextFragment};

/// Creates a synthetic document with a heading every `section_len` lines.
fn create_test_document(page_count: u32, lines_per_page: usize, section_len: usize) -> Document {
    let mut doc = Document::new();

    for n in 1..=page_count {
        let mut page = Page::letter(n);
        let mut y = 40.0;

        // Decoder output is not sorted; emit each page bottom-up
        let mut fragments = Vec::with_capacity(lines_per_page);
        for i in 0..lines_per_page {
            let (text, size, font, gap) = if i % section_len == 0 {
                let size = if i == 0 { 20.0 } else { 14.0 };
                (format!("Section {}.{}", n, i / section_len + 1), size, "Arial-Bold", 8.0)
            } else {
                (
                    format!("Body line {} of page {} with ordinary paragraph text", i, n),
                    10.0,
                    "Arial",
                    1.0,
                )
            };
            y += gap;
            fragments.push(TextFragment::new(
                text,
                size,
                font,
                BoundingBox::new(72.0, y, 540.0, y + size),
                n,
            ));
            y += size;
        }
        fragments.reverse();
        for fragment in fragments {
            page.add_fragment(fragment);
        }

        doc.add_page(page);
    }

    doc
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let extractor = OutlineExtractor::new();

    for pages in [1u32, 10, 100] {
        let doc = create_test_document(pages, 60, 12);
        group.bench_with_input(BenchmarkId::from_parameter(pages), &doc, |b, doc| {
            b.iter(|| extractor.extract(black_box(doc)))
        });
    }

    group.finish();
}

fn bench_without_language_detection(c: &mut Criterion) {
    let doc = create_test_document(50, 60, 12);
    let extractor =
        OutlineExtractor::with_options(OutlineOptions::new().with_language_detection(false));

    c.bench_function("extract_no_language_50_pages", |b| {
        b.iter(|| extractor.extract(black_box(&doc)))
    });
}

fn bench_font_statistics(c: &mut Criterion) {
    let doc = create_test_document(100, 60, 12);

    c.bench_function("font_statistics_100_pages", |b| {
        b.iter(|| FontStatistics::from_fragments(black_box(&doc).fragments()))
    });
}

criterion_group!(
    benches,
    bench_extraction,
    bench_without_language_detection,
    bench_font_statistics
);
criterion_main!(benches);
