// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime values walked by the resolver.
//!
//! Only [`Value::Object`] carries a type identity. An object either has named
//! fields (a struct instance) or wraps exactly one payload (a defined type or
//! an interface wrapper); the wrapped payload is its indirection target.

use crate::types::TypeId;
use std::collections::BTreeMap;

/// Arbitrary-precision integer, kept as sign + big-endian magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    negative: bool,
    magnitude: Vec<u8>,
}

impl BigInt {
    /// Build from sign and big-endian magnitude. Leading zero bytes are
    /// stripped; zero is never negative.
    pub fn from_parts(negative: bool, magnitude: &[u8]) -> Self {
        let first = magnitude
            .iter()
            .position(|b| *b != 0)
            .unwrap_or(magnitude.len());
        let magnitude = magnitude[first..].to_vec();
        Self {
            negative: negative && !magnitude.is_empty(),
            magnitude,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Big-endian magnitude without leading zeros (empty for zero).
    pub fn magnitude(&self) -> &[u8] {
        &self.magnitude
    }
}

impl From<i128> for BigInt {
    fn from(v: i128) -> Self {
        Self::from_parts(v < 0, &v.unsigned_abs().to_be_bytes())
    }
}

impl From<u128> for BigInt {
    fn from(v: u128) -> Self {
        Self::from_parts(false, &v.to_be_bytes())
    }
}

/// Body of an object value.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectBody {
    /// Struct instance with named fields.
    Fields(BTreeMap<String, Value>),
    /// Wrapper around a single payload.
    Wrapped(Box<Value>),
}

/// A typed object (record or wrapper).
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue {
    type_id: TypeId,
    body: ObjectBody,
    custom_json: bool,
}

impl ObjectValue {
    /// Struct instance with no fields set yet.
    pub fn record(type_id: TypeId) -> Self {
        Self {
            type_id,
            body: ObjectBody::Fields(BTreeMap::new()),
            custom_json: false,
        }
    }

    /// Wrapper holding `payload`.
    pub fn wrapper(type_id: TypeId, payload: Value) -> Self {
        Self {
            type_id,
            body: ObjectBody::Wrapped(Box::new(payload)),
            custom_json: false,
        }
    }

    /// Set a field (builder style). Ignored on wrappers.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(name, value.into());
        self
    }

    /// Mark the value as exposing its own JSON marshaller.
    #[must_use]
    pub fn with_custom_json(mut self) -> Self {
        self.custom_json = true;
        self
    }

    /// Runtime type identity.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn body(&self) -> &ObjectBody {
        &self.body
    }

    /// `true` if the value marshals itself to JSON.
    pub fn has_custom_json(&self) -> bool {
        self.custom_json
    }

    /// Named field, if this is a record and the field is set.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match &self.body {
            ObjectBody::Fields(fields) => fields.get(name),
            ObjectBody::Wrapped(_) => None,
        }
    }

    /// Set a named field. Returns `false` on wrappers.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) -> bool {
        match &mut self.body {
            ObjectBody::Fields(fields) => {
                fields.insert(name.into(), value);
                true
            }
            ObjectBody::Wrapped(_) => false,
        }
    }

    /// Payload of a wrapper; `None` for records.
    pub fn indirection_target(&self) -> Option<&Value> {
        match &self.body {
            ObjectBody::Wrapped(inner) => Some(inner),
            ObjectBody::Fields(_) => None,
        }
    }
}

/// A dynamic value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),

    // Built-in leaf representations
    BigInt(BigInt),
    Bytes(Vec<u8>),
    Sequence(Vec<Value>),

    Object(ObjectValue),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `true` for typed objects (records and wrappers).
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// `true` for big integers, byte strings and sequences, which are
    /// encoded as-is and never unwrapped.
    pub fn is_builtin_leaf(&self) -> bool {
        matches!(self, Self::BigInt(_) | Self::Bytes(_) | Self::Sequence(_))
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Runtime type identity (objects only).
    pub fn type_id(&self) -> Option<TypeId> {
        self.as_object().map(ObjectValue::type_id)
    }

    /// Named field of a record.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.as_object()?.field(name)
    }

    /// Payload of a wrapper.
    pub fn indirection_target(&self) -> Option<&Value> {
        self.as_object()?.indirection_target()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::BigInt(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Sequence(v)
    }
}

impl From<ObjectValue> for Value {
    fn from(v: ObjectValue) -> Self {
        Self::Object(v)
    }
}
