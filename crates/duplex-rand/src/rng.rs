// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `rand_core` integration.
//!
//! Output can only fail through the implicit self-seed, so the fallible
//! traits are implemented. Wrap with `TryRngCore::unwrap_err` where an
//! infallible `RngCore` is required.

use duplex_permutation::Permutation;
use rand_core::{TryCryptoRng, TryRngCore};

use crate::duplex::DuplexRandom;
use crate::error::DuplexError;

impl<P: Permutation> TryRngCore for DuplexRandom<P> {
    type Error = DuplexError;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        self.get_random_bytes::<4>().map(u32::from_le_bytes)
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        self.get_random_bytes::<8>().map(u64::from_le_bytes)
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.get_bytes(dst)
    }
}

impl<P: Permutation> TryCryptoRng for DuplexRandom<P> {}
