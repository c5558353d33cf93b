// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Declared type metadata
//!
//! - [`TypeId`]: registration handle identifying a type (not a value)
//! - [`TypeKind`]: `Alias` / `Struct` / `Interface` / `Other`
//! - [`TypeInfo`] + [`ConcreteInfo`]: declared shape and wire identity
//! - [`FieldTable`]: per-struct-type declared field types

mod field_table;
mod type_id;
mod type_info;
mod type_kind;

pub use field_table::FieldTable;
pub use type_id::TypeId;
pub use type_info::{ConcreteInfo, ConcreteOptions, TypeInfo};
pub use type_kind::TypeKind;
