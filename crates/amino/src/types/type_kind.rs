// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TypeKind - coarse classification driving resolution.

use std::fmt;

/// Declared kind of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Indirection that must be resolved at run time (interface-typed field,
    /// defined type wrapping another value).
    Alias,

    /// Struct with named fields.
    Struct,

    /// Interface (polymorphic) type.
    Interface,

    /// Primitives, containers, byte strings, big integers and any other type
    /// that needs no further indirection.
    Other,
}

impl TypeKind {
    /// `true` for [`TypeKind::Alias`].
    pub const fn is_alias(self) -> bool {
        matches!(self, Self::Alias)
    }

    /// `true` when the kind is neither a struct nor an interface.
    pub const fn is_leaf_kind(self) -> bool {
        !matches!(self, Self::Struct | Self::Interface)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Alias => "alias",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
