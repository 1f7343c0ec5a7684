use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use markdown_loom_engine::{diff_documents, scan};
mod common;

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");
    group.sample_size(10);

    for size in [10, 100] {
        let content = common::generate_markdown_content(size);
        let old = scan(&content);
        let same = scan(&content);
        let edited = scan(&common::with_edit_in_middle(&content));

        group.bench_with_input(BenchmarkId::new("unchanged", size), &size, |b, _| {
            b.iter(|| diff_documents(std::hint::black_box(&old), std::hint::black_box(&same)));
        });
        group.bench_with_input(BenchmarkId::new("one_edit", size), &size, |b, _| {
            b.iter(|| diff_documents(std::hint::black_box(&old), std::hint::black_box(&edited)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_diff);
criterion_main!(benches);
