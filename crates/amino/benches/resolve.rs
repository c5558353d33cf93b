// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::missing_panics_doc)] // Benchmarks panic on failure

use amino::types::{ConcreteOptions, FieldTable, TypeId, TypeInfo};
use amino::value::{ObjectValue, Value};
use amino::{Codec, EncodingTarget, Resolver};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const HOLDER: TypeId = TypeId::new(1);
const CIRCLE: TypeId = TypeId::new(2);
const SHAPE_BOX: TypeId = TypeId::new(3);

fn codec() -> Codec {
    let codec = Codec::default();
    codec
        .register_struct(HOLDER, FieldTable::new().field("shape", TypeInfo::alias()))
        .unwrap();
    codec.register_type(CIRCLE, TypeInfo::structure()).unwrap();
    codec
        .register_concrete(CIRCLE, "shapes/Circle", ConcreteOptions::default())
        .unwrap();
    codec.register_type(SHAPE_BOX, TypeInfo::alias()).unwrap();
    codec
}

fn nested(depth: usize) -> Value {
    let mut shape = Value::from(ObjectValue::record(CIRCLE).with_field("r", 1i64));
    for _ in 0..depth {
        shape = Value::from(ObjectValue::wrapper(SHAPE_BOX, shape));
    }
    Value::from(ObjectValue::record(HOLDER).with_field("shape", shape))
}

fn bench_resolve(c: &mut Criterion) {
    let codec = codec();
    let resolver = Resolver::new(codec.registry());
    let mut group = c.benchmark_group("resolve");

    for depth in [0usize, 4, 8] {
        let value = nested(depth);
        group.bench_function(format!("field_depth_{depth}"), |b| {
            b.iter(|| {
                resolver
                    .resolve_for_encoding(
                        &TypeInfo::alias(),
                        black_box(&value),
                        Some("shape"),
                        EncodingTarget::Binary,
                    )
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
