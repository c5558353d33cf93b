// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type for disfix derivation, registration and resolution.
//!
//! Every variant describes a misconfigured type graph rather than a transient
//! condition; callers surface them as unrecoverable failures for the field
//! being encoded.

use crate::disfix::Disfix;
use crate::types::TypeId;
use std::fmt;

/// Failure modes of the amino core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AminoError {
    /// The selected field is absent or null on the container value.
    InvalidFieldKey {
        /// Field that was requested.
        field: String,
    },
    /// The container's field table has no declared type for the field.
    UndefinedTypeInfo {
        /// Field that was requested.
        field: String,
    },
    /// No `TypeInfo` is registered for the type.
    UnregisteredType {
        /// Offending type, if the value carried one.
        type_id: Option<TypeId>,
    },
    /// A wrapper was required but the value exposes no indirection target.
    PropertyKeyUnknown {
        /// Type of the value that should have been a wrapper.
        type_id: TypeId,
    },
    /// The indirection target is null.
    InvalidProperty {
        /// Type of the wrapper holding the null payload.
        type_id: TypeId,
    },
    /// The alias loop exceeded its iteration bound.
    TooDeepIndirection {
        /// Configured bound that was hit.
        depth: usize,
    },
    /// Zero-byte skipping ran past the end of the digest.
    HashExhausted {
        /// Offset at which the read would have gone out of bounds.
        offset: usize,
    },
    /// A different record is already registered for the type.
    ReregistrationConflict {
        /// Type that was registered twice.
        type_id: TypeId,
    },
    /// The alias loop stopped on a non-object value with an `Alias` kind.
    AmbiguousResolution,
    /// More than one concrete type shares the prefix; the full disfix is needed.
    AmbiguousPrefix {
        /// Shared prefix bytes.
        prefix: [u8; 4],
    },
    /// The disfix is already owned by another concrete type.
    DisfixCollision {
        /// Colliding disfix.
        disfix: Disfix,
        /// Type that already owns it.
        existing: TypeId,
    },
}

impl fmt::Display for AminoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFieldKey { field } => write!(f, "invalid field key: {}", field),
            Self::UndefinedTypeInfo { field } => {
                write!(f, "undefined type info for field: {}", field)
            }
            Self::UnregisteredType { type_id: Some(id) } => {
                write!(f, "unregistered type: {}", id)
            }
            Self::UnregisteredType { type_id: None } => {
                write!(f, "unregistered type: value carries no type identity")
            }
            Self::PropertyKeyUnknown { type_id } => {
                write!(f, "property key unknown for {}", type_id)
            }
            Self::InvalidProperty { type_id } => write!(f, "invalid property on {}", type_id),
            Self::TooDeepIndirection { depth } => {
                write!(f, "too deep definition or invalid type (depth {})", depth)
            }
            Self::HashExhausted { offset } => {
                write!(f, "digest exhausted at offset {}", offset)
            }
            Self::ReregistrationConflict { type_id } => {
                write!(f, "conflicting re-registration of {}", type_id)
            }
            Self::AmbiguousResolution => {
                write!(f, "alias kind left unresolved on a non-object value")
            }
            Self::AmbiguousPrefix { prefix } => write!(
                f,
                "ambiguous prefix {:02x}{:02x}{:02x}{:02x}",
                prefix[0], prefix[1], prefix[2], prefix[3]
            ),
            Self::DisfixCollision { disfix, existing } => {
                write!(f, "disfix {} already registered for {}", disfix, existing)
            }
        }
    }
}

impl std::error::Error for AminoError {}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, AminoError>;
