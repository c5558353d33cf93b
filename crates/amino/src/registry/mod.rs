// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type registry
//!
//! Maps a [`TypeId`] to its declared [`TypeInfo`], to the [`ConcreteInfo`]
//! attached when the type is registered as a concrete implementation, and to
//! the [`FieldTable`] of struct types.
//!
//! # Lifecycle
//!
//! Registration happens once, before resolution traffic starts. Two ways to
//! share the result across threads:
//!
//! - [`TypeRegistry::freeze`]: immutable `Arc<TypeRegistry>` snapshot
//! - [`SharedTypeRegistry`]: late registration, lock-free snapshots for readers
//!
//! # Example
//!
//! ```
//! use amino::registry::{TypeLookup, TypeRegistry};
//! use amino::types::{ConcreteInfo, TypeId, TypeInfo, TypeKind};
//! use amino::disfix::Disfix;
//! use amino::value::{ObjectValue, Value};
//!
//! let dog = TypeId::new(1);
//! let mut registry = TypeRegistry::new();
//! registry.register_type_info(dog, TypeInfo::structure()).unwrap();
//! registry
//!     .register_concrete_info(dog, ConcreteInfo::new(Disfix::new([1, 2, 3], [4, 5, 6, 7])))
//!     .unwrap();
//!
//! let rex = Value::from(ObjectValue::record(dog));
//! let info = registry.lookup(&rex).unwrap();
//! assert_eq!(info.kind, TypeKind::Struct);
//! assert!(info.concrete_info.is_some());
//! assert!(registry.base_info(dog).unwrap().concrete_info.is_none());
//! ```

mod shared;

pub use shared::SharedTypeRegistry;

use crate::config::PREFIX_BYTES_LEN;
use crate::disfix::Disfix;
use crate::error::{AminoError, Result};
use crate::types::{ConcreteInfo, FieldTable, TypeId, TypeInfo};
use crate::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Read side of a registry, as seen by the resolver.
pub trait TypeLookup {
    /// Declared info of `id` with any concrete info merged in.
    ///
    /// Returns `None` if the type was never registered.
    fn lookup_id(&self, id: TypeId) -> Option<TypeInfo>;

    /// Declared type of field `field` of struct type `id`.
    fn field_type(&self, id: TypeId, field: &str) -> Option<TypeInfo>;

    /// Info for a value's runtime type. Only objects carry a type identity.
    fn lookup(&self, value: &Value) -> Option<TypeInfo> {
        value.type_id().and_then(|id| self.lookup_id(id))
    }
}

impl<T: TypeLookup + ?Sized> TypeLookup for &T {
    fn lookup_id(&self, id: TypeId) -> Option<TypeInfo> {
        (**self).lookup_id(id)
    }

    fn field_type(&self, id: TypeId, field: &str) -> Option<TypeInfo> {
        (**self).field_type(id, field)
    }
}

impl<T: TypeLookup + ?Sized> TypeLookup for Arc<T> {
    fn lookup_id(&self, id: TypeId) -> Option<TypeInfo> {
        (**self).lookup_id(id)
    }

    fn field_type(&self, id: TypeId, field: &str) -> Option<TypeInfo> {
        (**self).field_type(id, field)
    }
}

/// [`HashMap`]-backed registry.
///
/// Re-registering an identical record is a no-op; registering a different
/// record for an already registered type fails with
/// [`AminoError::ReregistrationConflict`].
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    infos: HashMap<TypeId, TypeInfo>,
    concretes: HashMap<TypeId, ConcreteInfo>,
    fields: HashMap<TypeId, FieldTable>,
    by_disfix: HashMap<Disfix, TypeId>,
    by_prefix: HashMap<[u8; PREFIX_BYTES_LEN], Vec<TypeId>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the declared info of a type.
    pub fn register_type_info(&mut self, id: TypeId, info: TypeInfo) -> Result<()> {
        match self.infos.get(&id) {
            Some(existing) if *existing == info => {
                log::trace!("[registry] {} already registered, skipping", id);
                Ok(())
            }
            Some(_) => {
                log::debug!("[registry] conflicting type info for {}", id);
                Err(AminoError::ReregistrationConflict { type_id: id })
            }
            None => {
                log::debug!("[registry] registered {} ({})", id, info.kind);
                self.infos.insert(id, info);
                Ok(())
            }
        }
    }

    /// Attach concrete info to an already registered type.
    ///
    /// The registry is left unchanged on error.
    pub fn register_concrete_info(&mut self, id: TypeId, concrete: ConcreteInfo) -> Result<()> {
        if !self.infos.contains_key(&id) {
            log::debug!("[registry] concrete info for unregistered {}", id);
            return Err(AminoError::UnregisteredType { type_id: Some(id) });
        }

        if let Some(existing) = self.concretes.get(&id) {
            if *existing == concrete {
                return Ok(());
            }
            log::debug!("[registry] conflicting concrete info for {}", id);
            return Err(AminoError::ReregistrationConflict { type_id: id });
        }

        let disfix = concrete.disfix();
        if let Some(&owner) = self.by_disfix.get(&disfix) {
            log::debug!("[registry] disfix {} of {} owned by {}", disfix, id, owner);
            return Err(AminoError::DisfixCollision {
                disfix,
                existing: owner,
            });
        }

        let sharing = self.by_prefix.entry(concrete.prefix_bytes).or_default();
        if !sharing.is_empty() {
            log::warn!(
                "[registry] prefix of {} shared with {:?}, decoders need the full disfix",
                id,
                sharing
            );
        }
        sharing.push(id);
        self.by_disfix.insert(disfix, id);
        self.concretes.insert(id, concrete);
        log::debug!("[registry] {} tagged with disfix {}", id, disfix);
        Ok(())
    }

    /// Attach the field table of a struct type.
    pub fn register_fields(&mut self, id: TypeId, table: FieldTable) -> Result<()> {
        if !self.infos.contains_key(&id) {
            return Err(AminoError::UnregisteredType { type_id: Some(id) });
        }
        match self.fields.get(&id) {
            Some(existing) if *existing == table => Ok(()),
            Some(_) => Err(AminoError::ReregistrationConflict { type_id: id }),
            None => {
                log::debug!("[registry] {} declares {} field(s)", id, table.len());
                self.fields.insert(id, table);
                Ok(())
            }
        }
    }

    /// Stored declared info, without concrete info merged in.
    pub fn base_info(&self, id: TypeId) -> Option<&TypeInfo> {
        self.infos.get(&id)
    }

    /// Concrete info attached to `id`.
    pub fn concrete_info(&self, id: TypeId) -> Option<&ConcreteInfo> {
        self.concretes.get(&id)
    }

    /// Field table of struct type `id`.
    pub fn field_table(&self, id: TypeId) -> Option<&FieldTable> {
        self.fields.get(&id)
    }

    /// Concrete type tagged with `disfix`.
    pub fn lookup_by_disfix(&self, disfix: &Disfix) -> Option<TypeId> {
        self.by_disfix.get(disfix).copied()
    }

    /// Concrete type tagged with `prefix`.
    ///
    /// Fails with [`AminoError::AmbiguousPrefix`] when several concrete types
    /// share the prefix.
    pub fn lookup_by_prefix(&self, prefix: [u8; PREFIX_BYTES_LEN]) -> Result<Option<TypeId>> {
        match self.by_prefix.get(&prefix).map(Vec::as_slice) {
            None | Some([]) => Ok(None),
            Some([only]) => Ok(Some(*only)),
            Some(_) => Err(AminoError::AmbiguousPrefix { prefix }),
        }
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.infos.contains_key(&id)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Freeze into an immutable snapshot shareable across threads.
    pub fn freeze(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl TypeLookup for TypeRegistry {
    fn lookup_id(&self, id: TypeId) -> Option<TypeInfo> {
        let base = self.infos.get(&id)?;
        match self.concretes.get(&id) {
            // shallow copy, stored base untouched
            Some(concrete) => Some(base.with_concrete(*concrete)),
            None => Some(*base),
        }
    }

    fn field_type(&self, id: TypeId, field: &str) -> Option<TypeInfo> {
        self.fields.get(&id)?.get(field).copied()
    }
}
