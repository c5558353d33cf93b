// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Disfix derivation (disambiguation + prefix bytes)
//!
//! A disfix is the 7-byte type tag written in front of a polymorphic payload.
//! It is carved out of the SHA-256 digest of the concrete type's
//! fully-qualified name:
//!
//! 1. Skip leading zero bytes, take 3 bytes (disambiguation)
//! 2. Skip zero bytes again, take 4 bytes (prefix)
//!
//! Both components therefore always start with a non-zero byte, which lets a
//! decoder tell a type tag apart from the absence of one.

use crate::config::{DIGEST_LEN, DISAMB_BYTES_LEN, DISFIX_BYTES_LEN, PREFIX_BYTES_LEN};
use crate::error::{AminoError, Result};
use sha2::{Digest, Sha256};
use std::fmt;

/// Disfix - 3 disambiguation bytes followed by 4 prefix bytes.
///
/// # Example
///
/// ```
/// use amino::disfix::compute_disfix;
///
/// let disfix = compute_disfix("shapes/Circle").unwrap();
/// assert_ne!(disfix.disambiguation_bytes()[0], 0);
/// assert_ne!(disfix.prefix_bytes()[0], 0);
/// assert_eq!(disfix.to_bytes().len(), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Disfix {
    disamb: [u8; DISAMB_BYTES_LEN],
    prefix: [u8; PREFIX_BYTES_LEN],
}

impl Disfix {
    /// Build from its two components.
    pub const fn new(disamb: [u8; DISAMB_BYTES_LEN], prefix: [u8; PREFIX_BYTES_LEN]) -> Self {
        Self { disamb, prefix }
    }

    /// Split a 7-byte wire tag into its components.
    pub const fn from_bytes(bytes: [u8; DISFIX_BYTES_LEN]) -> Self {
        Self {
            disamb: [bytes[0], bytes[1], bytes[2]],
            prefix: [bytes[3], bytes[4], bytes[5], bytes[6]],
        }
    }

    /// Disambiguation component.
    pub const fn disambiguation_bytes(&self) -> &[u8; DISAMB_BYTES_LEN] {
        &self.disamb
    }

    /// Prefix component.
    pub const fn prefix_bytes(&self) -> &[u8; PREFIX_BYTES_LEN] {
        &self.prefix
    }

    /// Wire form: disambiguation ++ prefix.
    pub const fn to_bytes(&self) -> [u8; DISFIX_BYTES_LEN] {
        let d = self.disamb;
        let p = self.prefix;
        [d[0], d[1], d[2], p[0], p[1], p[2], p[3]]
    }
}

impl fmt::Debug for Disfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Disfix(")?;
        for byte in &self.disamb {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ":")?;
        for byte in &self.prefix {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Disfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl From<[u8; DISFIX_BYTES_LEN]> for Disfix {
    fn from(bytes: [u8; DISFIX_BYTES_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Compute the disfix of a fully-qualified type name.
///
/// Fails only with [`AminoError::HashExhausted`], which a real SHA-256 digest
/// makes practically unreachable.
pub fn compute_disfix(name: &str) -> Result<Disfix> {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    let result = hasher.finalize();

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&result);
    compute_disfix_from_digest(&digest)
}

/// Carve a disfix out of an already computed digest.
pub fn compute_disfix_from_digest(digest: &[u8; DIGEST_LEN]) -> Result<Disfix> {
    let start = skip_zeros(digest, 0);
    let disamb: [u8; DISAMB_BYTES_LEN] = take(digest, start)?;

    let start = skip_zeros(digest, start + DISAMB_BYTES_LEN);
    let prefix: [u8; PREFIX_BYTES_LEN] = take(digest, start)?;

    Ok(Disfix { disamb, prefix })
}

fn skip_zeros(digest: &[u8], mut offset: usize) -> usize {
    while digest.get(offset) == Some(&0) {
        offset += 1;
    }
    offset
}

fn take<const N: usize>(digest: &[u8], offset: usize) -> Result<[u8; N]> {
    digest
        .get(offset..offset + N)
        .and_then(|chunk| chunk.try_into().ok())
        .ok_or(AminoError::HashExhausted { offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disfix_deterministic() {
        let a = compute_disfix("amino/Dog").unwrap();
        let b = compute_disfix("amino/Dog").unwrap();
        assert_eq!(a, b);

        let c = compute_disfix("amino/Cat").unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_disfix_first_bytes_nonzero() {
        for _ in 0..256 {
            let name: String = (0..fastrand::usize(1..48))
                .map(|_| fastrand::alphanumeric())
                .collect();
            let disfix = compute_disfix(&name).unwrap();
            assert_ne!(disfix.disambiguation_bytes()[0], 0, "name {}", name);
            assert_ne!(disfix.prefix_bytes()[0], 0, "name {}", name);
        }
    }

    #[test]
    fn test_from_digest_skips_leading_zeros() {
        let mut digest = [0u8; DIGEST_LEN];
        // disamb starts at 2, prefix after one more zero at 6
        digest[2..5].copy_from_slice(&[0x11, 0x00, 0x22]);
        digest[5] = 0;
        digest[6..10].copy_from_slice(&[0x33, 0x44, 0x00, 0x55]);

        let disfix = compute_disfix_from_digest(&digest).unwrap();
        assert_eq!(disfix.disambiguation_bytes(), &[0x11, 0x00, 0x22]);
        assert_eq!(disfix.prefix_bytes(), &[0x33, 0x44, 0x00, 0x55]);
    }

    #[test]
    fn test_from_digest_no_zeros() {
        let digest: [u8; DIGEST_LEN] = core::array::from_fn(|i| i as u8 + 1);
        let disfix = compute_disfix_from_digest(&digest).unwrap();
        assert_eq!(disfix.to_bytes(), [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_hash_exhausted_all_zero() {
        let digest = [0u8; DIGEST_LEN];
        assert_eq!(
            compute_disfix_from_digest(&digest),
            Err(AminoError::HashExhausted { offset: 32 })
        );
    }

    #[test]
    fn test_hash_exhausted_in_prefix() {
        let mut digest = [0u8; DIGEST_LEN];
        digest[29] = 0xaa;
        // disamb = 29..32, prefix has nothing left
        assert_eq!(
            compute_disfix_from_digest(&digest),
            Err(AminoError::HashExhausted { offset: 32 })
        );

        let mut digest = [0u8; DIGEST_LEN];
        digest[24] = 0xaa;
        digest[30] = 0xbb;
        // prefix would need 30..34
        assert_eq!(
            compute_disfix_from_digest(&digest),
            Err(AminoError::HashExhausted { offset: 30 })
        );
    }

    #[test]
    fn test_bytes_roundtrip_layout() {
        let disfix = Disfix::new([1, 2, 3], [4, 5, 6, 7]);
        assert_eq!(disfix.to_bytes(), [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(Disfix::from([1, 2, 3, 4, 5, 6, 7]), disfix);
    }

    #[test]
    fn test_disfix_formatting() {
        let disfix = Disfix::new([0x01, 0x23, 0x45], [0x67, 0x89, 0xab, 0xcd]);
        assert_eq!(format!("{:?}", disfix), "Disfix(012345:6789abcd)");
        assert_eq!(format!("{}", disfix), "0123456789abcd");
    }
}
