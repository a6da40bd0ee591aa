use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ag_core::{GatewayConfig, RequestDescriptor};
use rand::Rng;

fn bench_exemption_matching(c: &mut Criterion) {
    let cfg = GatewayConfig::default();
    let paths = [
        "/api/admin/login",
        "/api/admin/register",
        "/api/categories",
        "/api/admin/users/42",
        "/api/admin/orders/new-count",
        "/api/brands/7",
    ];

    c.bench_function("is_auth_exempt_10000", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            for _ in 0..10_000 {
                let path = paths[rng.gen_range(0..paths.len())];
                black_box(cfg.is_auth_exempt(path));
            }
        })
    });
}

fn bench_descriptor_build(c: &mut Criterion) {
    c.bench_function("descriptor_build_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let d = RequestDescriptor::put(
                    format!("/api/brands/{i}"),
                    serde_json::json!({"name": format!("brand {i}")}),
                )
                .with_query("page", "1");
                black_box(d);
            }
        })
    });
}

criterion_group!(benches, bench_exemption_matching, bench_descriptor_build);
criterion_main!(benches);
