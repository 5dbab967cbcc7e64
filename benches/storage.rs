//! Criterion benchmarks for the core structures.
//!
//! Run with: `cargo bench --bench storage`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memdb::buffer::PagePool;
use memdb::index::{BTree, HashTable};
use memdb::table::{Column, ColumnType, IndexKind, Table, TableSchema, Value};

fn bench_btree_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree_insert");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut tree: BTree<i64> = BTree::new();
                    for i in 0..size {
                        tree.insert(black_box(i));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_btree_search(c: &mut Criterion) {
    let mut tree: BTree<i64> = BTree::new();
    for i in 0..10_000 {
        tree.insert(i);
    }

    c.bench_function("btree_search", |b| {
        b.iter(|| tree.contains(black_box(&5_000)));
    });
}

fn bench_hash_insert_find(c: &mut Criterion) {
    c.bench_function("hash_insert_1000", |b| {
        b.iter(|| {
            let mut table: HashTable<i64, i64> = HashTable::new();
            for i in 0..1000 {
                table.insert(black_box(i), i * 2);
            }
        });
    });

    let mut table: HashTable<i64, i64> = HashTable::new();
    for i in 0..10_000 {
        table.insert(i, i * 2);
    }
    c.bench_function("hash_find", |b| {
        b.iter(|| table.find(black_box(&5_000)));
    });
}

fn bench_pool_churn(c: &mut Criterion) {
    c.bench_function("pool_allocate_evict", |b| {
        b.iter(|| {
            let mut pool = PagePool::new(4096, 64);
            for _ in 0..256 {
                pool.allocate_page().unwrap();
            }
        });
    });
}

fn bench_table_insert_indexed(c: &mut Criterion) {
    c.bench_function("table_insert_1000_indexed", |b| {
        b.iter(|| {
            let schema = TableSchema::with_columns(vec![
                Column::new("id", ColumnType::Integer),
                Column::new("name", ColumnType::Text),
            ])
            .unwrap();
            let mut table = Table::new(schema).unwrap();
            table.create_index("id", IndexKind::BTree).unwrap();

            for i in 0..1000 {
                table
                    .insert_row(vec![Value::Integer(i), Value::from("row")])
                    .unwrap();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_btree_insert,
    bench_btree_search,
    bench_hash_insert_find,
    bench_pool_churn,
    bench_table_insert_indexed
);
criterion_main!(benches);
