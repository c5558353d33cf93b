// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type identity handle.

use std::fmt;

/// Stable identifier of a registered type.
///
/// Values carry the `TypeId` of their runtime type; the registry is keyed by
/// it. Two values of the same type share one `TypeId`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    /// Wrap a raw handle.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw handle value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

impl From<u32> for TypeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
