// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fluent_request::http::compose_url;
use fluent_request::{post, ContentType, Cors, SimulationAgent};

fn compose_url_benchmark(c: &mut Criterion) {
    let params: BTreeMap<String, Option<String>> = [
        ("q", Some("fish & chips")),
        ("page", Some("2")),
        ("lang", Some("fi-FI")),
        ("debug", None),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
    .collect();

    c.bench_function("compose_url", |b| {
        b.iter(|| black_box(compose_url("https://example.com/search?x=1", &params)))
    });
}

fn freeze_benchmark(c: &mut Criterion) {
    let builder = post("example.com/api/items")
        .unwrap()
        .content_type(ContentType::ApplicationJson)
        .unwrap()
        .simulate(SimulationAgent::Chrome)
        .unwrap()
        .headers([("X-Trace", "abc"), ("Accept", "*/*")])
        .unwrap()
        .cors(
            Cors::new()
                .allow_origin("*")
                .unwrap()
                .allow_methods(["GET", "POST"])
                .unwrap(),
        )
        .body(r#"{"name":"widget"}"#)
        .unwrap();

    c.bench_function("freeze_request", |b| {
        b.iter(|| {
            let request = builder.freeze();
            black_box(request.header_map().unwrap().len())
        })
    });
}

criterion_group!(benches, compose_url_benchmark, freeze_benchmark);
criterion_main!(benches);
