// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry shared between registering and resolving threads.

use super::{TypeLookup, TypeRegistry};
use crate::error::Result;
use crate::types::{ConcreteInfo, FieldTable, TypeId, TypeInfo};
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::sync::Arc;

/// Registry supporting late registration while resolution is running.
///
/// - **Readers**: [`snapshot`](Self::snapshot) loads the current
///   `Arc<TypeRegistry>` without locking
/// - **Writers**: serialized by a mutex, copy the registry, apply the change
///   and publish the new snapshot atomically
///
/// A failed registration publishes nothing.
#[derive(Debug)]
pub struct SharedTypeRegistry {
    current: ArcSwap<TypeRegistry>,
    write_lock: Mutex<()>,
}

impl Default for SharedTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedTypeRegistry {
    /// Empty shared registry.
    pub fn new() -> Self {
        Self::from_registry(TypeRegistry::new())
    }

    /// Start from an already populated registry.
    pub fn from_registry(registry: TypeRegistry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
            write_lock: Mutex::new(()),
        }
    }

    /// Current immutable snapshot.
    pub fn snapshot(&self) -> Arc<TypeRegistry> {
        self.current.load_full()
    }

    /// See [`TypeRegistry::register_type_info`].
    pub fn register_type_info(&self, id: TypeId, info: TypeInfo) -> Result<()> {
        self.update(|registry| registry.register_type_info(id, info))
    }

    /// See [`TypeRegistry::register_concrete_info`].
    pub fn register_concrete_info(&self, id: TypeId, concrete: ConcreteInfo) -> Result<()> {
        self.update(|registry| registry.register_concrete_info(id, concrete))
    }

    /// See [`TypeRegistry::register_fields`].
    pub fn register_fields(&self, id: TypeId, table: FieldTable) -> Result<()> {
        self.update(|registry| registry.register_fields(id, table))
    }

    /// Apply several registrations as one published change.
    ///
    /// Either every registration in `f` lands or none does.
    pub fn update<T>(&self, f: impl FnOnce(&mut TypeRegistry) -> Result<T>) -> Result<T> {
        let _guard = self.write_lock.lock();
        let mut next = TypeRegistry::clone(&self.current.load());
        let out = f(&mut next)?;
        self.current.store(Arc::new(next));
        Ok(out)
    }
}

impl TypeLookup for SharedTypeRegistry {
    fn lookup_id(&self, id: TypeId) -> Option<TypeInfo> {
        self.current.load().lookup_id(id)
    }

    fn field_type(&self, id: TypeId, field: &str) -> Option<TypeInfo> {
        self.current.load().field_type(id, field)
    }
}
