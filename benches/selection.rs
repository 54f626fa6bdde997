use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nelta::{LabeledSequence, LabeledTable, Value};

fn sequence(n: usize) -> LabeledSequence {
    let values = (0..n).map(Value::from).collect();
    let index = (0..n).map(|i| Value::from(format!("k{}", i % 100))).collect();
    LabeledSequence::with_index(values, index).unwrap()
}

fn table(rows: usize, cols: usize) -> LabeledTable {
    let data = (0..rows)
        .map(|r| (0..cols).map(|c| Value::from(r * cols + c)).collect())
        .collect();
    let columns = (0..cols).map(|c| Value::from(format!("c{}", c % 8))).collect();
    LabeledTable::with_labels(data, (0..rows).map(Value::from).collect(), columns).unwrap()
}

fn bench_sequence_select(c: &mut Criterion) {
    let seq = sequence(10_000);
    let mask: Vec<bool> = (0..seq.len()).map(|i| i % 3 == 0).collect();

    c.bench_function("sequence/select_duplicate_label", |b| {
        b.iter(|| seq.select(black_box("k42")).unwrap())
    });
    c.bench_function("sequence/select_label_list", |b| {
        b.iter(|| seq.select(black_box(["k1", "k2", "k3"])).unwrap())
    });
    c.bench_function("sequence/select_mask", |b| {
        b.iter(|| seq.select(black_box(mask.clone())).unwrap())
    });
    c.bench_function("sequence/compare_then_mask", |b| {
        b.iter(|| seq.select(seq.greater_than(black_box(5_000))).unwrap())
    });
}

fn bench_table_select(c: &mut Criterion) {
    let t = table(5_000, 16);

    c.bench_function("table/select_duplicate_column", |b| {
        b.iter(|| t.select(black_box("c3")).unwrap())
    });
    c.bench_function("table/select_column_list", |b| {
        b.iter(|| t.select(black_box(vec!["c1", "c5"])).unwrap())
    });
    c.bench_function("table/head_tail", |b| {
        b.iter(|| (t.head(black_box(100)), t.tail(black_box(100))))
    });
}

criterion_group!(benches, bench_sequence_select, bench_table_select);
criterion_main!(benches);
