// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type resolution for encoding
//!
//! Turns a declared (possibly `Alias`) type plus a runtime value into the
//! concrete `(TypeInfo, payload)` pair the encoder writes:
//!
//! 1. **Field**: with a field key, continue from the field's value and its
//!    declared type (looked up through the registry when declared `Alias`)
//! 2. **Alias loop**: while the kind is `Alias`, look the value up in the
//!    registry and unwrap wrappers, at most `max_indirection_depth` times
//! 3. **Final unwrap**: an `Other`-kind object without a custom marshal path
//!    is a defined type; its payload is what gets encoded
//!
//! Resolution is read-only on the registry and keeps its loop counter on the
//! stack, so it is safe to call reentrantly and from many threads.

use crate::config::{AmbiguityPolicy, ResolverConfig};
use crate::error::{AminoError, Result};
use crate::registry::TypeLookup;
use crate::types::TypeInfo;
use crate::value::{ObjectValue, Value};

/// Encoding the resolved value is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingTarget {
    /// Amino binary.
    Binary,
    /// Amino JSON. Values with their own JSON marshaller are not unwrapped.
    Json,
}

impl EncodingTarget {
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Outcome of a resolution: concrete type info and the payload to encode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'v> {
    /// Concrete info; `concrete_info` (if any) supplies the wire type tag.
    pub info: TypeInfo,
    /// Payload to encode.
    pub value: &'v Value,
}

impl<'v> Resolved<'v> {
    pub fn into_parts(self) -> (TypeInfo, &'v Value) {
        (self.info, self.value)
    }
}

impl<'v> From<Resolved<'v>> for (TypeInfo, &'v Value) {
    fn from(resolved: Resolved<'v>) -> Self {
        resolved.into_parts()
    }
}

/// Resolver over a registry view.
///
/// `L` is anything implementing [`TypeLookup`]: a `&TypeRegistry`, a frozen
/// `Arc<TypeRegistry>` or a [`SharedTypeRegistry`](crate::registry::SharedTypeRegistry).
#[derive(Debug, Clone)]
pub struct Resolver<L> {
    lookup: L,
    config: ResolverConfig,
}

impl<L: TypeLookup> Resolver<L> {
    /// Resolver with default configuration.
    pub fn new(lookup: L) -> Self {
        Self::with_config(lookup, ResolverConfig::default())
    }

    pub fn with_config(lookup: L, config: ResolverConfig) -> Self {
        Self { lookup, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `value` (or its field `field_key`) to its concrete form.
    ///
    /// When `field_key` is given, `declared` is superseded by the field's
    /// declared type from the container's field table.
    ///
    /// # Errors
    ///
    /// `InvalidFieldKey`, `UndefinedTypeInfo`, `UnregisteredType`,
    /// `PropertyKeyUnknown`, `InvalidProperty`, `TooDeepIndirection`, and
    /// `AmbiguousResolution` under [`AmbiguityPolicy::Reject`].
    pub fn resolve_for_encoding<'v>(
        &self,
        declared: &TypeInfo,
        value: &'v Value,
        field_key: Option<&str>,
        target: EncodingTarget,
    ) -> Result<Resolved<'v>> {
        let (mut info, mut current) = match field_key {
            Some(key) => self.resolve_field(value, key)?,
            None => (*declared, value),
        };

        let mut depth = 0;
        while info.kind.is_alias() {
            let Some(object) = current.as_object() else {
                match self.config.ambiguity {
                    AmbiguityPolicy::Reject => {
                        log::debug!("[resolver] alias left on non-object value, rejecting");
                        return Err(AminoError::AmbiguousResolution);
                    }
                    AmbiguityPolicy::Accept => {
                        log::warn!("[resolver] alias left on non-object value, passing through");
                        break;
                    }
                }
            };

            info = self.lookup.lookup(current).ok_or_else(|| {
                log::debug!("[resolver] {} is not registered", object.type_id());
                AminoError::UnregisteredType {
                    type_id: Some(object.type_id()),
                }
            })?;
            if !info.kind.is_alias() {
                break;
            }

            log::trace!("[resolver] unwrapping {} at depth {}", object.type_id(), depth);
            current = unwrap_indirection(object)?;

            depth += 1;
            if depth >= self.config.max_indirection_depth {
                log::debug!("[resolver] gave up after {} indirections", depth);
                return Err(AminoError::TooDeepIndirection { depth });
            }
        }

        if !has_custom_marshal_path(&info, current, target) && info.kind.is_leaf_kind() {
            // builtin leaves (big ints, bytes, sequences) are never objects
            if let Value::Object(object) = current {
                log::trace!("[resolver] unwrapping defined type {}", object.type_id());
                current = object
                    .indirection_target()
                    .ok_or(AminoError::PropertyKeyUnknown {
                        type_id: object.type_id(),
                    })?;
            }
        }

        Ok(Resolved {
            info,
            value: current,
        })
    }

    fn resolve_field<'v>(&self, container: &'v Value, key: &str) -> Result<(TypeInfo, &'v Value)> {
        let field = container
            .get_field(key)
            .filter(|v| !v.is_null())
            .ok_or_else(|| AminoError::InvalidFieldKey {
                field: key.to_string(),
            })?;

        let declared = container
            .type_id()
            .and_then(|id| self.lookup.field_type(id, key))
            .ok_or_else(|| AminoError::UndefinedTypeInfo {
                field: key.to_string(),
            })?;

        if !declared.kind.is_alias() {
            return Ok((declared, field));
        }

        let info = self
            .lookup
            .lookup(field)
            .ok_or(AminoError::UnregisteredType {
                type_id: field.type_id(),
            })?;
        log::trace!("[resolver] field '{}' resolved to {}", key, info.kind);
        Ok((info, field))
    }
}

/// Payload of a wrapper, rejecting records and null payloads.
fn unwrap_indirection(object: &ObjectValue) -> Result<&Value> {
    let target = object
        .indirection_target()
        .ok_or(AminoError::PropertyKeyUnknown {
            type_id: object.type_id(),
        })?;
    if target.is_null() {
        return Err(AminoError::InvalidProperty {
            type_id: object.type_id(),
        });
    }
    Ok(target)
}

fn has_custom_marshal_path(info: &TypeInfo, value: &Value, target: EncodingTarget) -> bool {
    if info.has_custom_marshal() {
        return true;
    }
    target.is_json()
        && value
            .as_object()
            .is_some_and(ObjectValue::has_custom_json)
}
