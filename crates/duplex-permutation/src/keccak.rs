// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keccak-f\[1600\] permutation state.
//!
//! The state is kept as 25 little-endian lanes. Byte `i` of the state lives
//! in lane `i / 8` at shift `8 * (i % 8)`, and bit `p` lives in lane
//! `p / 64` at shift `p % 64`, so the byte view is identical on every
//! platform regardless of endianness.

use core::fmt;

use duplex_util::fast_zeroize_slice;

use crate::traits::Permutation;

/// Total width of the Keccak-f\[1600\] state in bits.
pub const WIDTH_BITS: usize = 1600;

const LANES: usize = WIDTH_BITS / 64;

/// Keccak-f\[1600\] state with a caller-chosen capacity.
///
/// The state is zeroized on drop.
pub struct Keccak1600 {
    lanes: [u64; LANES],
    rate_bits: usize,
}

impl Keccak1600 {
    /// Creates an all-zero state with `capacity_bits` of capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity_bits` is zero or leaves fewer than two rate bits
    /// (`pad10*1` needs at least two).
    pub fn new(capacity_bits: usize) -> Self {
        assert!(
            capacity_bits > 0 && capacity_bits <= WIDTH_BITS - 2,
            "capacity must be in 1..={} bits, got {}",
            WIDTH_BITS - 2,
            capacity_bits
        );

        Self {
            lanes: [0u64; LANES],
            rate_bits: WIDTH_BITS - capacity_bits,
        }
    }

    #[inline(always)]
    fn byte_at(&self, index: usize) -> u8 {
        (self.lanes[index / 8] >> (8 * (index % 8))) as u8
    }

    #[inline(always)]
    fn xor_byte_at(&mut self, index: usize, value: u8) {
        self.lanes[index / 8] ^= u64::from(value) << (8 * (index % 8));
    }

    #[inline(always)]
    fn xor_bit_at(&mut self, bit: usize) {
        self.lanes[bit / 64] ^= 1u64 << (bit % 64);
    }

    #[inline(always)]
    fn check_rate_range(&self, offset: usize, len: usize) {
        let rate_bytes = self.rate_bits / 8;
        assert!(
            offset <= rate_bytes && len <= rate_bytes - offset,
            "rate range {}..{} out of bounds (rate is {} bytes)",
            offset,
            offset.saturating_add(len),
            rate_bytes
        );
    }
}

impl Permutation for Keccak1600 {
    fn rate_bits(&self) -> usize {
        self.rate_bits
    }

    fn capacity_bits(&self) -> usize {
        WIDTH_BITS - self.rate_bits
    }

    fn xor_bytes(&mut self, offset: usize, input: &[u8]) {
        self.check_rate_range(offset, input.len());

        for (i, &byte) in input.iter().enumerate() {
            self.xor_byte_at(offset + i, byte);
        }
    }

    fn read_bytes(&self, offset: usize, output: &mut [u8]) {
        self.check_rate_range(offset, output.len());

        for (i, byte) in output.iter_mut().enumerate() {
            *byte = self.byte_at(offset + i);
        }
    }

    fn zero_bytes(&mut self, offset: usize, len: usize) {
        self.check_rate_range(offset, len);

        for index in offset..offset + len {
            self.lanes[index / 8] &= !(0xFFu64 << (8 * (index % 8)));
        }
    }

    fn pad(&mut self, domain_bits: u8, domain_bit_len: usize, bit_position: usize) {
        assert!(domain_bit_len <= 8, "at most 8 domain bits");
        // Domain bits, the leading pad bit and the final pad bit must be distinct.
        assert!(
            bit_position + domain_bit_len < self.rate_bits - 1,
            "padding at bit {} with {} domain bits overflows a {}-bit rate",
            bit_position,
            domain_bit_len,
            self.rate_bits
        );

        for i in 0..domain_bit_len {
            if (domain_bits >> i) & 1 == 1 {
                self.xor_bit_at(bit_position + i);
            }
        }

        self.xor_bit_at(bit_position + domain_bit_len);
        self.xor_bit_at(self.rate_bits - 1);
    }

    fn permute(&mut self) {
        ::keccak::f1600(&mut self.lanes);
    }
}

impl Drop for Keccak1600 {
    fn drop(&mut self) {
        fast_zeroize_slice(&mut self.lanes);
    }
}

impl fmt::Debug for Keccak1600 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keccak1600")
            .field("rate_bits", &self.rate_bits)
            .field("capacity_bits", &self.capacity_bits())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
impl Keccak1600 {
    pub(crate) fn lanes_for_test(&self) -> &[u64; LANES] {
        &self.lanes
    }
}
