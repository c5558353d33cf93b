// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use amino::types::{FieldTable, TypeId, TypeInfo, TypeKind};
use amino::value::{ObjectValue, Value};
use amino::{EncodingTarget, Resolver, TypeRegistry};
use libfuzzer_sys::fuzz_target;

const KINDS: [TypeKind; 4] = [
    TypeKind::Alias,
    TypeKind::Struct,
    TypeKind::Interface,
    TypeKind::Other,
];

// Byte stream -> registry of 8 types + a nested value; resolution must
// terminate with Ok or a typed error.
fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }

    let mut registry = TypeRegistry::new();
    for (i, b) in data[..8].iter().enumerate() {
        let id = TypeId::new(i as u32);
        let _ = registry.register_type_info(id, TypeInfo::new(KINDS[(*b & 3) as usize]));
        if b & 4 != 0 {
            let _ = registry.register_fields(id, FieldTable::new().field("f", TypeInfo::alias()));
        }
    }

    let mut value = Value::Int(0);
    for b in data[8..].iter().take(32) {
        let id = TypeId::new(u32::from(b & 7));
        value = match b >> 6 {
            0 => Value::from(ObjectValue::wrapper(id, value)),
            1 => Value::from(ObjectValue::record(id).with_field("f", value)),
            2 => Value::Null,
            _ => Value::Bytes(vec![*b]),
        };
    }

    let resolver = Resolver::new(&registry);
    let target = if data[8] & 8 == 0 {
        EncodingTarget::Binary
    } else {
        EncodingTarget::Json
    };
    let field = (data[8] & 16 != 0).then_some("f");
    let _ = resolver.resolve_for_encoding(&TypeInfo::alias(), &value, field, target);
});
