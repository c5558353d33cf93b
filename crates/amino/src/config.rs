// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Amino codec configuration
//!
//! - **Level 1 (Static)**: wire constants (disfix layout, default resolution depth)
//! - **Level 2 (Runtime)**: [`CodecConfig`] / [`ResolverConfig`] handed to a
//!   [`Codec`](crate::Codec) or [`Resolver`](crate::Resolver)
//!
//! ```
//! use amino::config::{AmbiguityPolicy, CodecConfig, ResolverConfig};
//!
//! let config = CodecConfig::default().with_resolver(
//!     ResolverConfig::default()
//!         .with_max_indirection_depth(4)
//!         .with_ambiguity(AmbiguityPolicy::Accept),
//! );
//! assert_eq!(config.resolver.max_indirection_depth, 4);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =======================================================================
// Disfix layout
// =======================================================================

/// Length of the prefix component of a disfix.
pub const PREFIX_BYTES_LEN: usize = 4;

/// Length of the disambiguation component of a disfix.
pub const DISAMB_BYTES_LEN: usize = 3;

/// Total disfix length on the wire (disambiguation ++ prefix).
pub const DISFIX_BYTES_LEN: usize = PREFIX_BYTES_LEN + DISAMB_BYTES_LEN;

/// SHA-256 digest length the disfix is carved from.
pub const DIGEST_LEN: usize = 32;

// =======================================================================
// Resolution
// =======================================================================

/// Maximum number of alias-resolution iterations before giving up.
///
/// A misconfigured type graph (alias cycle, wrapper pointing at itself) fails
/// with `TooDeepIndirection` once this many iterations have run.
pub const MAX_INDIRECTION_DEPTH: usize = 10;

/// What the resolver does when the alias loop stops on a non-object value
/// while the declared kind is still `Alias`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AmbiguityPolicy {
    /// Fail with `AmbiguousResolution`.
    #[default]
    Reject,
    /// Hand the `Alias` info back to the caller unchanged.
    Accept,
}

/// Resolver tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Alias-loop iteration bound (see [`MAX_INDIRECTION_DEPTH`]).
    pub max_indirection_depth: usize,
    /// Residual-alias handling.
    pub ambiguity: AmbiguityPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_indirection_depth: MAX_INDIRECTION_DEPTH,
            ambiguity: AmbiguityPolicy::Reject,
        }
    }
}

impl ResolverConfig {
    /// Override the alias-loop bound.
    #[must_use]
    pub fn with_max_indirection_depth(mut self, depth: usize) -> Self {
        self.max_indirection_depth = depth;
        self
    }

    /// Override the residual-alias policy.
    #[must_use]
    pub fn with_ambiguity(mut self, ambiguity: AmbiguityPolicy) -> Self {
        self.ambiguity = ambiguity;
        self
    }
}

/// Top-level codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    /// Settings used by [`Codec::resolve_for_encoding`](crate::Codec::resolve_for_encoding).
    pub resolver: ResolverConfig,
}

impl CodecConfig {
    /// Replace the resolver settings.
    #[must_use]
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disfix_layout() {
        assert_eq!(DISFIX_BYTES_LEN, 7);
        assert!(DISFIX_BYTES_LEN < DIGEST_LEN);
    }

    #[test]
    fn test_resolver_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.max_indirection_depth, 10);
        assert_eq!(config.ambiguity, AmbiguityPolicy::Reject);
    }

    #[test]
    fn test_builder_setters() {
        let config = CodecConfig::default().with_resolver(
            ResolverConfig::default()
                .with_max_indirection_depth(3)
                .with_ambiguity(AmbiguityPolicy::Accept),
        );
        assert_eq!(config.resolver.max_indirection_depth, 3);
        assert_eq!(config.resolver.ambiguity, AmbiguityPolicy::Accept);
    }
}
