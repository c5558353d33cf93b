// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TypeInfo / ConcreteInfo records.

use super::TypeKind;
use crate::config::{DISAMB_BYTES_LEN, PREFIX_BYTES_LEN};
use crate::disfix::Disfix;

/// Wire identity and custom-marshal capability of a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConcreteInfo {
    /// Disambiguation component of the disfix.
    pub disambiguation_bytes: [u8; DISAMB_BYTES_LEN],
    /// Prefix component of the disfix.
    pub prefix_bytes: [u8; PREFIX_BYTES_LEN],
    /// The type encodes itself through its own marshal method.
    pub has_custom_marshal_method: bool,
    /// The type marshals through a substitute representation type.
    pub has_custom_marshal_override_type: bool,
}

impl ConcreteInfo {
    /// Concrete info for a disfix, without custom marshalling.
    pub const fn new(disfix: Disfix) -> Self {
        Self {
            disambiguation_bytes: *disfix.disambiguation_bytes(),
            prefix_bytes: *disfix.prefix_bytes(),
            has_custom_marshal_method: false,
            has_custom_marshal_override_type: false,
        }
    }

    /// Concrete info for a disfix with the given marshal options.
    pub const fn with_options(disfix: Disfix, options: ConcreteOptions) -> Self {
        Self {
            disambiguation_bytes: *disfix.disambiguation_bytes(),
            prefix_bytes: *disfix.prefix_bytes(),
            has_custom_marshal_method: options.custom_marshal_method,
            has_custom_marshal_override_type: options.custom_marshal_override_type,
        }
    }

    /// The 7-byte wire tag.
    pub const fn disfix(&self) -> Disfix {
        Disfix::new(self.disambiguation_bytes, self.prefix_bytes)
    }

    /// `true` if either custom-marshal flag is set.
    pub const fn has_custom_marshal(&self) -> bool {
        self.has_custom_marshal_method || self.has_custom_marshal_override_type
    }
}

/// Marshal options supplied when registering a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConcreteOptions {
    /// See [`ConcreteInfo::has_custom_marshal_method`].
    pub custom_marshal_method: bool,
    /// See [`ConcreteInfo::has_custom_marshal_override_type`].
    pub custom_marshal_override_type: bool,
}

impl ConcreteOptions {
    /// Mark the type as having its own marshal method.
    #[must_use]
    pub fn custom_marshal_method(mut self) -> Self {
        self.custom_marshal_method = true;
        self
    }

    /// Mark the type as marshalling through an override type.
    #[must_use]
    pub fn custom_marshal_override_type(mut self) -> Self {
        self.custom_marshal_override_type = true;
        self
    }
}

/// Declared shape of a type.
///
/// Registered once per [`TypeId`](super::TypeId). Lookups hand out copies with
/// the concrete info merged in; the stored record is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// Declared kind.
    pub kind: TypeKind,
    /// Concrete identity, once the type is registered as a concrete type.
    pub concrete_info: Option<ConcreteInfo>,
}

impl TypeInfo {
    /// Info of the given kind without concrete identity.
    pub const fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            concrete_info: None,
        }
    }

    /// `TypeKind::Alias` info.
    pub const fn alias() -> Self {
        Self::new(TypeKind::Alias)
    }

    /// `TypeKind::Struct` info.
    pub const fn structure() -> Self {
        Self::new(TypeKind::Struct)
    }

    /// `TypeKind::Interface` info.
    pub const fn interface() -> Self {
        Self::new(TypeKind::Interface)
    }

    /// `TypeKind::Other` info.
    pub const fn other() -> Self {
        Self::new(TypeKind::Other)
    }

    /// Shallow copy carrying `concrete` as its concrete info.
    #[must_use]
    pub const fn with_concrete(mut self, concrete: ConcreteInfo) -> Self {
        self.concrete_info = Some(concrete);
        self
    }

    /// `true` if a custom marshal path exists for binary encoding.
    pub fn has_custom_marshal(&self) -> bool {
        self.concrete_info
            .is_some_and(|concrete| concrete.has_custom_marshal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_info_disfix() {
        let disfix = Disfix::new([1, 2, 3], [4, 5, 6, 7]);
        let info = ConcreteInfo::new(disfix);
        assert_eq!(info.disambiguation_bytes, [1, 2, 3]);
        assert_eq!(info.prefix_bytes, [4, 5, 6, 7]);
        assert_eq!(info.disfix(), disfix);
        assert!(!info.has_custom_marshal());
    }

    #[test]
    fn test_concrete_options() {
        let disfix = Disfix::new([1, 2, 3], [4, 5, 6, 7]);
        let info = ConcreteInfo::with_options(
            disfix,
            ConcreteOptions::default().custom_marshal_override_type(),
        );
        assert!(!info.has_custom_marshal_method);
        assert!(info.has_custom_marshal_override_type);
        assert!(info.has_custom_marshal());
    }

    #[test]
    fn test_with_concrete_is_copy() {
        let base = TypeInfo::structure();
        let concrete = ConcreteInfo::new(Disfix::new([1, 2, 3], [4, 5, 6, 7]));
        let merged = base.with_concrete(concrete);

        assert_eq!(base.concrete_info, None);
        assert_eq!(merged.kind, TypeKind::Struct);
        assert_eq!(merged.concrete_info, Some(concrete));
    }
}
