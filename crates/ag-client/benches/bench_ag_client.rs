use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ag_client::{MemoryStore, Session, SessionStore};
use std::sync::Arc;

fn bench_store_churn(c: &mut Criterion) {
    c.bench_function("memory_store_set_get_1000", |b| {
        let store = MemoryStore::new();
        b.iter(|| {
            for i in 0..1000 {
                let key = format!("key_{i}");
                store.set(&key, "value").unwrap();
                black_box(store.get(&key).unwrap());
            }
        })
    });
}

fn bench_session_lifecycle(c: &mut Criterion) {
    c.bench_function("session_credential_cycle_1000", |b| {
        let session = Session::new(Arc::new(MemoryStore::new()));
        b.iter(|| {
            for i in 0..1000 {
                session.set_credential(Some(&format!("token_{i}"))).unwrap();
                black_box(session.has_credential());
                session.clear().unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_store_churn, bench_session_lifecycle);
criterion_main!(benches);
