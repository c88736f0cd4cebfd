use criterion::{criterion_group, criterion_main, Criterion};
use http::Method;
use std::hint::black_box;
use waypost::dispatcher::{Dispatcher, RouterBuilder};
use waypost::server::{Request, ResponseSink};

fn noop(_res: &mut dyn ResponseSink, _req: &Request) {}

fn zoo_builder() -> RouterBuilder {
    let mut builder = Dispatcher::builder();
    builder.get("/", noop);
    builder.get("/zoo/animals", noop);
    builder.post("/zoo/animals", noop);
    builder.get("/zoo/animals/:id", noop);
    builder.put("/zoo/animals/:id", noop);
    builder.patch("/zoo/animals/:id", noop);
    builder.delete("/zoo/animals/:id", noop);
    builder.get("/zoo/animals/:id/toys/:toy_id", noop);
    builder.get(
        "/zoo/:category/animals/:id/habitats/:habitat_id/sections/:section_id",
        noop,
    );
    builder.post(
        "/inventory/:warehouse_id/feeds/:feed_id/items/:item_id/batches/:batch_id",
        noop,
    );
    builder.get("/complex/:a/:b/:c/:d/:e/:f/:g/:h/:i", noop);
    builder.get("/zoo/health", noop);
    builder.log_with(|_status, _req: &Request| {});
    builder
}

const TEST_PATHS: [(Method, &str); 5] = [
    (Method::GET, "/zoo/animals/123"),
    (Method::GET, "/zoo/animals/123/toys/456"),
    (Method::GET, "/zoo/cats/animals/123/habitats/88/sections/5"),
    (Method::POST, "/inventory/1/feeds/2/items/3/batches/4"),
    (Method::GET, "/complex/1/2/3/4/5/6/7/8/9"),
];

fn bench_route_throughput(c: &mut Criterion) {
    let builder = zoo_builder();
    let table = builder.table().clone();
    c.bench_function("route_match", |b| {
        b.iter(|| {
            for (method, path) in TEST_PATHS.iter() {
                let res = table.find(method, path);
                black_box(&res);
            }
        })
    });
}

fn bench_dispatch_throughput(c: &mut Criterion) {
    let dispatcher = zoo_builder().build();
    c.bench_function("dispatch", |b| {
        b.iter(|| {
            for (method, path) in TEST_PATHS.iter() {
                let res = dispatcher.handle(Request::new(method.clone(), path));
                black_box(&res);
            }
        })
    });
}

fn bench_not_found(c: &mut Criterion) {
    let dispatcher = zoo_builder().build();
    c.bench_function("dispatch_not_found", |b| {
        b.iter(|| {
            let res = dispatcher.handle(Request::new(Method::GET, "/zoo/animals/1/unknown"));
            black_box(&res);
        })
    });
}

criterion_group!(
    benches,
    bench_route_throughput,
    bench_dispatch_throughput,
    bench_not_found
);
criterion_main!(benches);
