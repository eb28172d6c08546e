// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Duplex-sponge random generator.
//!
//! # Domain separation
//!
//! Every absorb call ends with a `1` domain bit before the permutation,
//! every squeeze refill with a `0` domain bit. An absorb and a squeeze over
//! identical rate contents therefore never reach the permutation as the
//! same input.
//!
//! # Forgetting
//!
//! Keccak-f\[1600\] is efficiently invertible, so anyone holding the state
//! could walk it backwards and recompute earlier output. [`DuplexRandom::forget`]
//! permutes, zeroes the rate and permutes again: without the zeroed rate
//! bytes the pre-forget state can no longer be reconstructed.

use core::fmt;

use duplex_permutation::{Keccak1600, Permutation};
use duplex_util::fast_zeroize_vec;

use crate::accumulator::{ForgettingBuffer, MIN_SEED_LENGTH_BYTES};
use crate::capacity::{Capacity, PADDING_BITS};
use crate::error::DuplexError;
use crate::master;
use crate::traits::EntropySource;

const ABSORB_DOMAIN: u8 = 0b1;
const SQUEEZE_DOMAIN: u8 = 0b0;

/// Rate-region cursor over one permutation state.
struct Sponge<P: Permutation> {
    permutation: P,
    rate_bytes: usize,
    cursor: usize,
}

impl<P: Permutation> Sponge<P> {
    fn new(permutation: P) -> Self {
        let rate_bytes = permutation.rate_bits().saturating_sub(PADDING_BITS) / 8;
        assert!(
            rate_bytes > 0,
            "permutation leaves no usable rate byte ({} rate bits)",
            permutation.rate_bits()
        );

        Self {
            permutation,
            rate_bytes,
            cursor: 0,
        }
    }

    /// Absorbs `input`, padding with the absorb domain bit after every full
    /// rate block and after the final (possibly empty) block.
    fn absorb(&mut self, mut input: &[u8]) {
        self.cursor = 0;

        loop {
            let chunk = input.len().min(self.rate_bytes - self.cursor);
            self.permutation.xor_bytes(self.cursor, &input[..chunk]);
            self.cursor += chunk;
            input = &input[chunk..];

            if chunk == 0 || input.is_empty() {
                self.permutation.pad(ABSORB_DOMAIN, 1, self.cursor * 8);
                self.permutation.permute();
                self.cursor = 0;
            }

            if input.is_empty() {
                break;
            }
        }
    }

    fn squeeze(&mut self, mut dest: &mut [u8]) {
        while !dest.is_empty() {
            if self.cursor == self.rate_bytes {
                self.permutation.pad(SQUEEZE_DOMAIN, 1, 0);
                self.permutation.permute();
                self.cursor = 0;
                continue;
            }

            let chunk = dest.len().min(self.rate_bytes - self.cursor);
            let (head, tail) = dest.split_at_mut(chunk);
            self.permutation.read_bytes(self.cursor, head);
            self.cursor += chunk;
            dest = tail;
        }
    }

    fn forget(&mut self) {
        self.cursor = 0;
        self.permutation.pad(0, 0, 0);
        self.permutation.permute();

        self.permutation.zero_bytes(0, self.rate_bytes);
        self.permutation.pad(0, 0, self.rate_bytes * 8);
        self.permutation.permute();
    }
}

/// Cryptographically secure random generator over a duplex sponge.
///
/// Seed material is accumulated until at least 16 bytes are available, then
/// absorbed. Output is squeezed from the rate region. An engine that was
/// never seeded seeds itself from the process-wide master seed generator on
/// first use. [`forget`](Self::forget) provides forward secrecy.
///
/// Seeding with a fixed value before the first output yields a
/// reproducible stream whose security is that of the seed.
///
/// Not synchronized: share between threads only behind your own lock.
///
/// # Example
///
/// ```rust
/// use duplex_rand::DuplexRandom;
///
/// let mut rng = DuplexRandom::default();
/// let mut key = [0u8; 32];
/// rng.get_bytes(&mut key).expect("Failed to get_bytes(..)");
///
/// // Past output is unrecoverable from the state from here on.
/// rng.forget();
/// ```
pub struct DuplexRandom<P: Permutation = Keccak1600> {
    sponge: Sponge<P>,
    seeded: bool,
    pending: ForgettingBuffer,
}

impl DuplexRandom<Keccak1600> {
    /// Creates an unseeded engine over Keccak-f\[1600\] with
    /// `capacity_bits` of capacity.
    ///
    /// The value is not checked against the recommended `n * 64 - 3` form;
    /// use [`with_capacity`](Self::with_capacity) for untrusted input.
    ///
    /// # Panics
    ///
    /// Panics if the capacity leaves no usable rate byte.
    pub fn new(capacity_bits: usize) -> Self {
        Self::with_permutation(Keccak1600::new(capacity_bits))
    }

    /// Creates an unseeded engine with a validated capacity.
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self::new(capacity.bits())
    }

    /// Creates an engine seeded straight from `entropy`, bypassing the
    /// master seed generator.
    ///
    /// # Errors
    ///
    /// Returns [`DuplexError::Entropy`] if the source fails; no engine is
    /// returned in that case.
    pub fn from_entropy<E: EntropySource>(
        capacity: Capacity,
        entropy: &E,
    ) -> Result<Self, DuplexError> {
        let mut engine = Self::with_capacity(capacity);
        let mut seed = vec![0u8; engine.self_seed_len()];

        let filled = entropy.fill_bytes(&mut seed);
        if filled.is_ok() {
            engine.feed(&seed);
        }
        fast_zeroize_vec(&mut seed);

        filled?;
        Ok(engine)
    }
}

impl<P: Permutation> DuplexRandom<P> {
    /// Creates an unseeded engine over an arbitrary permutation state.
    ///
    /// # Panics
    ///
    /// Panics if the permutation's rate leaves no usable byte after the 3
    /// padding bits.
    pub fn with_permutation(permutation: P) -> Self {
        Self {
            sponge: Sponge::new(permutation),
            seeded: false,
            pending: ForgettingBuffer::new(),
        }
    }

    /// (Re)seeds with `seed`.
    ///
    /// Seeds are accumulated and not absorbed before at least 16 bytes have
    /// been supplied in total, so material may arrive one byte at a time.
    pub fn seed(&mut self, seed: &[u8]) {
        if self.pending.len() + seed.len() >= MIN_SEED_LENGTH_BYTES {
            // An empty accumulator still costs one pad+permute cycle.
            self.feed_pending();
            self.feed(seed);
            self.pending.forget();
        } else {
            self.pending.write(seed);
        }
    }

    /// (Re)seeds from the master seed generator.
    ///
    /// # Errors
    ///
    /// Returns [`DuplexError::MasterPoisoned`] if the master lock is poisoned.
    pub fn reseed(&mut self) -> Result<(), DuplexError> {
        let mut seed = vec![0u8; self.self_seed_len()];

        let drawn = master::get_seed_bytes(&mut seed);
        if drawn.is_ok() {
            self.feed(&seed);
        }
        fast_zeroize_vec(&mut seed);

        drawn
    }

    /// Fills `dest` with random bytes, seeding from the master generator
    /// first if this engine was never seeded.
    ///
    /// # Errors
    ///
    /// Only the implicit self-seed can fail, see [`reseed`](Self::reseed).
    /// On error `dest` is left untouched.
    pub fn get_bytes(&mut self, dest: &mut [u8]) -> Result<(), DuplexError> {
        if !self.seeded {
            self.reseed()?;
        }

        self.sponge.squeeze(dest);
        Ok(())
    }

    /// Returns `N` random bytes.
    ///
    /// # Errors
    ///
    /// See [`get_bytes`](Self::get_bytes).
    pub fn get_random_bytes<const N: usize>(&mut self) -> Result<[u8; N], DuplexError> {
        let mut out = [0u8; N];
        self.get_bytes(&mut out)?;
        Ok(out)
    }

    /// Forgets the state so that earlier output cannot be recomputed from
    /// it. The engine stays seeded and usable.
    pub fn forget(&mut self) {
        self.sponge.forget();
    }

    /// Whether any seed has been absorbed yet.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Output bytes produced per permutation.
    pub fn rate_bytes(&self) -> usize {
        self.sponge.rate_bytes
    }

    /// Capacity of the underlying permutation in bits.
    pub fn capacity_bits(&self) -> usize {
        self.sponge.permutation.capacity_bits()
    }

    /// Length of a seed drawn for self-seeding: half the capacity plus one
    /// byte, never less than the minimum seed length.
    fn self_seed_len(&self) -> usize {
        ((self.capacity_bits() >> 4) + 1).max(MIN_SEED_LENGTH_BYTES)
    }

    /// Absorbs `input` immediately, bypassing the accumulator.
    pub(crate) fn feed(&mut self, input: &[u8]) {
        self.sponge.absorb(input);
        self.seeded = true;
    }

    fn feed_pending(&mut self) {
        self.sponge.absorb(self.pending.as_slice());
        self.seeded = true;
    }

    #[cfg(test)]
    pub(crate) fn permutation_for_test(&self) -> &P {
        &self.sponge.permutation
    }

    #[cfg(test)]
    pub(crate) fn cursor_for_test(&self) -> usize {
        self.sponge.cursor
    }

    #[cfg(test)]
    pub(crate) fn pending_for_test(&self) -> &ForgettingBuffer {
        &self.pending
    }
}

impl Default for DuplexRandom<Keccak1600> {
    fn default() -> Self {
        Self::with_capacity(Capacity::DEFAULT)
    }
}

impl<P: Permutation> fmt::Debug for DuplexRandom<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DuplexRandom")
            .field("rate_bytes", &self.sponge.rate_bytes)
            .field("capacity_bits", &self.capacity_bits())
            .field("cursor", &self.sponge.cursor)
            .field("seeded", &self.seeded)
            .finish_non_exhaustive()
    }
}
