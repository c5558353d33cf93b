// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec context: registration entry points and resolution.
//!
//! The `Codec` is what the encoder/decoder pipeline holds on to. It owns a
//! [`SharedTypeRegistry`], derives each concrete type's disfix from its name
//! at registration time, and resolves fields against the current registry
//! snapshot.

use crate::config::CodecConfig;
use crate::disfix::{compute_disfix, Disfix};
use crate::error::Result;
use crate::registry::{SharedTypeRegistry, TypeRegistry};
use crate::resolver::{EncodingTarget, Resolved, Resolver};
use crate::types::{ConcreteInfo, ConcreteOptions, FieldTable, TypeId, TypeInfo};
use crate::value::Value;
use std::sync::Arc;

/// Registration and resolution front-end.
///
/// # Example
///
/// ```
/// use amino::{Codec, EncodingTarget};
/// use amino::types::{ConcreteOptions, FieldTable, TypeId, TypeInfo, TypeKind};
/// use amino::value::{ObjectValue, Value};
///
/// let owner = TypeId::new(1);
/// let dog = TypeId::new(2);
///
/// let codec = Codec::default();
/// codec
///     .register_struct(owner, FieldTable::new().field("pet", TypeInfo::alias()))
///     .unwrap();
/// codec.register_type(dog, TypeInfo::structure()).unwrap();
/// let disfix = codec
///     .register_concrete(dog, "shop/Dog", ConcreteOptions::default())
///     .unwrap();
///
/// let value = Value::from(
///     ObjectValue::record(owner).with_field("pet", ObjectValue::record(dog)),
/// );
/// let resolved = codec
///     .resolve_for_encoding(&TypeInfo::alias(), &value, Some("pet"), EncodingTarget::Binary)
///     .unwrap();
/// assert_eq!(resolved.info.kind, TypeKind::Struct);
/// assert_eq!(resolved.info.concrete_info.map(|c| c.disfix()), Some(disfix));
/// ```
#[derive(Debug, Default)]
pub struct Codec {
    registry: SharedTypeRegistry,
    config: CodecConfig,
}

impl Codec {
    /// Codec with an empty registry.
    pub fn new(config: CodecConfig) -> Self {
        Self {
            registry: SharedTypeRegistry::new(),
            config,
        }
    }

    /// Codec over an already populated registry.
    pub fn with_registry(registry: TypeRegistry, config: CodecConfig) -> Self {
        Self {
            registry: SharedTypeRegistry::from_registry(registry),
            config,
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Current registry snapshot.
    pub fn registry(&self) -> Arc<TypeRegistry> {
        self.registry.snapshot()
    }

    /// Register the declared info of a type.
    pub fn register_type(&self, id: TypeId, info: TypeInfo) -> Result<()> {
        self.registry.register_type_info(id, info)
    }

    /// Register a struct type together with its declared field types.
    pub fn register_struct(&self, id: TypeId, fields: FieldTable) -> Result<()> {
        self.registry.update(|registry| {
            registry.register_type_info(id, TypeInfo::structure())?;
            registry.register_fields(id, fields)
        })
    }

    /// Register `id` as a concrete type named `name`.
    ///
    /// The type must already be registered. Returns the disfix derived from
    /// `name`, which becomes the type's wire tag.
    pub fn register_concrete(
        &self,
        id: TypeId,
        name: &str,
        options: ConcreteOptions,
    ) -> Result<Disfix> {
        let disfix = compute_disfix(name)?;
        self.registry
            .register_concrete_info(id, ConcreteInfo::with_options(disfix, options))?;
        log::debug!("[codec] concrete '{}' -> {} ({})", name, id, disfix);
        Ok(disfix)
    }

    /// Concrete type registered under a wire tag.
    pub fn concrete_for_disfix(&self, disfix: &Disfix) -> Option<TypeId> {
        self.registry.snapshot().lookup_by_disfix(disfix)
    }

    /// Resolve against the current registry snapshot.
    ///
    /// See [`Resolver::resolve_for_encoding`].
    pub fn resolve_for_encoding<'v>(
        &self,
        declared: &TypeInfo,
        value: &'v Value,
        field_key: Option<&str>,
        target: EncodingTarget,
    ) -> Result<Resolved<'v>> {
        Resolver::with_config(self.registry.snapshot(), self.config.resolver)
            .resolve_for_encoding(declared, value, field_key, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AminoError;
    use crate::registry::TypeLookup;
    use crate::types::TypeKind;

    const OWNER: TypeId = TypeId::new(1);
    const DOG: TypeId = TypeId::new(2);

    #[test]
    fn test_register_concrete_derives_disfix() {
        let codec = Codec::default();
        codec.register_type(DOG, TypeInfo::structure()).unwrap();
        let disfix = codec
            .register_concrete(DOG, "shop/Dog", ConcreteOptions::default())
            .unwrap();

        assert_eq!(disfix, compute_disfix("shop/Dog").unwrap());
        assert_eq!(codec.concrete_for_disfix(&disfix), Some(DOG));

        let info = codec.registry().lookup_id(DOG).unwrap();
        assert_eq!(info.concrete_info.map(|c| c.disfix()), Some(disfix));
    }

    #[test]
    fn test_register_concrete_requires_type() {
        let codec = Codec::default();
        assert_eq!(
            codec.register_concrete(DOG, "shop/Dog", ConcreteOptions::default()),
            Err(AminoError::UnregisteredType { type_id: Some(DOG) })
        );
        assert!(codec.registry().is_empty());
    }

    #[test]
    fn test_register_struct_is_atomic() {
        let codec = Codec::default();
        codec.register_type(OWNER, TypeInfo::other()).unwrap();

        // kind conflict: field table must not land either
        let fields = FieldTable::new().field("pet", TypeInfo::alias());
        let result = codec.register_struct(OWNER, fields);
        assert_eq!(
            result,
            Err(AminoError::ReregistrationConflict { type_id: OWNER })
        );
        assert!(codec.registry().field_table(OWNER).is_none());
    }

    #[test]
    fn test_custom_marshal_options_recorded() {
        let codec = Codec::default();
        codec.register_type(DOG, TypeInfo::other()).unwrap();
        codec
            .register_concrete(
                DOG,
                "shop/Dog",
                ConcreteOptions::default().custom_marshal_method(),
            )
            .unwrap();

        let value = Value::from(crate::value::ObjectValue::wrapper(DOG, Value::Int(1)));
        let resolved = codec
            .resolve_for_encoding(&TypeInfo::alias(), &value, None, EncodingTarget::Binary)
            .unwrap();
        assert_eq!(resolved.info.kind, TypeKind::Other);
        assert!(std::ptr::eq(resolved.value, &value));
    }
}
