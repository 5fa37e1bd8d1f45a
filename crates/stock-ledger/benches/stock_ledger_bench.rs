use criterion::{Criterion, criterion_group, criterion_main};
use stock_ledger::{InMemoryStockStore, ProductName, StockStore};

fn bench_check_stock(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryStockStore::new();
    let name = ProductName::from("Laptop");

    c.bench_function("stock_ledger/check_stock", |b| {
        b.iter(|| {
            rt.block_on(async {
                store.check_stock(&name).await.unwrap();
            });
        });
    });
}

fn bench_update_stock(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("stock_ledger/update_stock", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryStockStore::new();
                let name = ProductName::from("Laptop");
                store.update_stock(&name, 1).await.unwrap();
            });
        });
    });
}

fn bench_update_sequence_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("stock_ledger/update_sequence_100", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryStockStore::empty();
                let name = ProductName::from("Widget");
                for _ in 0..100 {
                    store.update_stock(&name, 1).await.unwrap();
                }
            });
        });
    });
}

criterion_group!(
    benches,
    bench_check_stock,
    bench_update_stock,
    bench_update_sequence_100,
);
criterion_main!(benches);
