use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use list_sorter::buffer::LineBuffer;
use list_sorter::list::{sort_list_at_cursor, Direction};

fn nested_list(top_level: usize, children: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(top_level * (children + 1));
    for i in 0..top_level {
        lines.push(format!("- item {:05}", (i * 7919) % top_level));
        for j in 0..children {
            lines.push(format!("  - child {:03}", (j * 31) % children.max(1)));
        }
    }
    lines
}

fn bench_sort_nested(c: &mut Criterion) {
    let lines = nested_list(1000, 4);
    let mut group = c.benchmark_group("list_sort");
    for direction in [Direction::Ascending, Direction::Descending] {
        group.bench_function(direction.name(), |b| {
            b.iter_batched(
                || LineBuffer::from_lines(lines.iter().cloned()).with_cursor(2500, 0),
                |mut buffer| {
                    sort_list_at_cursor(&mut buffer, direction).unwrap();
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort_nested);
criterion_main!(benches);
