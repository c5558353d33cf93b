// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Declared field types of a struct type.

use super::TypeInfo;

/// Field name -> declared [`TypeInfo`], in declaration order.
///
/// Built once when a struct type is registered and shared by every value of
/// that type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable {
    fields: Vec<(String, TypeInfo)>,
}

impl FieldTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field (builder style). A repeated name replaces the earlier
    /// declaration in place.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, declared: TypeInfo) -> Self {
        self.insert(name, declared);
        self
    }

    /// Insert or replace a field declaration.
    pub fn insert(&mut self, name: impl Into<String>, declared: TypeInfo) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = declared,
            None => self.fields.push((name, declared)),
        }
    }

    /// Declared type of `name`.
    pub fn get(&self, name: &str) -> Option<&TypeInfo> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, info)| info)
    }

    /// Position of `name` in declaration order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(n, _)| n == name)
    }

    /// Iterate `(name, declared)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeInfo)> {
        self.fields.iter().map(|(n, info)| (n.as_str(), info))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
