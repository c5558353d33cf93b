// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Disfix derivation checked against an independent SHA-256 (ring).
//
// For every name the expected disfix is recomputed from scratch:
// first 3-byte run at the first non-zero byte, then the 4-byte run at the
// first non-zero byte after it.

use amino::config::DIGEST_LEN;
use amino::disfix::{compute_disfix, compute_disfix_from_digest};
use ring::digest::{digest, SHA256};

fn reference_digest(name: &str) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(digest(&SHA256, name.as_bytes()).as_ref());
    out
}

fn reference_disfix(name: &str) -> ([u8; 3], [u8; 4]) {
    let hash = reference_digest(name);

    let i0 = hash.iter().position(|b| *b != 0).unwrap();
    let mut disamb = [0u8; 3];
    disamb.copy_from_slice(&hash[i0..i0 + 3]);

    let i1 = (i0 + 3..DIGEST_LEN).find(|i| hash[*i] != 0).unwrap();
    let mut prefix = [0u8; 4];
    prefix.copy_from_slice(&hash[i1..i1 + 4]);

    (disamb, prefix)
}

#[test]
fn disfix_matches_reference_hash() {
    let names = [
        "a",
        "shapes/Circle",
        "cosmos-sdk/StdTx",
        "tendermint/PubKeyEd25519",
        "tendermint/PubKeySecp256k1",
        "cosmos-sdk/MsgSend",
        "auth/Account",
        "名前/型",
    ];

    for name in names {
        let disfix = compute_disfix(name).unwrap();
        let (disamb, prefix) = reference_disfix(name);
        assert_eq!(disfix.disambiguation_bytes(), &disamb, "name {}", name);
        assert_eq!(disfix.prefix_bytes(), &prefix, "name {}", name);
    }
}

#[test]
fn disfix_matches_reference_for_random_names() {
    let mut rng = fastrand::Rng::with_seed(0x616d_696e_6f);
    for _ in 0..512 {
        let len = rng.usize(1..64);
        let name: String = (0..len).map(|_| rng.alphanumeric()).collect();

        let disfix = compute_disfix(&name).unwrap();
        let (disamb, prefix) = reference_disfix(&name);
        assert_eq!(disfix.to_bytes()[..3], disamb);
        assert_eq!(disfix.to_bytes()[3..], prefix);

        // same carving when fed the reference digest directly
        let from_digest = compute_disfix_from_digest(&reference_digest(&name)).unwrap();
        assert_eq!(from_digest, disfix);
    }
}

#[test]
fn disfix_is_pure() {
    for name in ["x", "shapes/Square", "very/long/qualified/name/Of/AType"] {
        let first = compute_disfix(name).unwrap();
        let second = compute_disfix(name).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_bytes().len(), 7);
        assert_ne!(first.disambiguation_bytes()[0], 0);
        assert_ne!(first.prefix_bytes()[0], 0);
    }
}
