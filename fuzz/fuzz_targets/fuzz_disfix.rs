// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use amino::disfix::{compute_disfix, compute_disfix_from_digest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary digests: may error, never read out of bounds
    if data.len() >= 32 {
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&data[..32]);
        if let Ok(disfix) = compute_disfix_from_digest(&digest) {
            assert_ne!(disfix.disambiguation_bytes()[0], 0);
            assert_ne!(disfix.prefix_bytes()[0], 0);
        }
    }

    if let Ok(name) = std::str::from_utf8(data) {
        let _ = compute_disfix(name);
    }
});
