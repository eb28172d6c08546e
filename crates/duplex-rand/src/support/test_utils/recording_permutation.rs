// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use duplex_permutation::{Keccak1600, Permutation};

/// Arguments of one [`Permutation::pad`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadCall {
    /// Domain bits passed to `pad`.
    pub domain_bits: u8,
    /// Number of domain bits.
    pub domain_bit_len: usize,
    /// Bit offset in the rate region.
    pub bit_position: usize,
}

/// Real Keccak-f\[1600\] state that records what the engine does to it.
///
/// Output is identical to a bare [`Keccak1600`] with the same capacity.
pub struct RecordingPermutation {
    inner: Keccak1600,
    permute_count: usize,
    pads: Vec<PadCall>,
    zeroed: Vec<(usize, usize)>,
}

impl RecordingPermutation {
    /// Wraps a fresh [`Keccak1600`] with `capacity_bits` of capacity.
    pub fn new(capacity_bits: usize) -> Self {
        Self {
            inner: Keccak1600::new(capacity_bits),
            permute_count: 0,
            pads: Vec::new(),
            zeroed: Vec::new(),
        }
    }

    /// Number of permutations applied so far.
    pub fn permute_count(&self) -> usize {
        self.permute_count
    }

    /// Every `pad` call, in order.
    pub fn pads(&self) -> &[PadCall] {
        &self.pads
    }

    /// Every `zero_bytes` call as `(offset, len)`, in order.
    pub fn zeroed(&self) -> &[(usize, usize)] {
        &self.zeroed
    }

    /// Copies the first `len` rate bytes of the current state.
    pub fn rate_snapshot(&self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.inner.read_bytes(0, &mut out);
        out
    }
}

impl Permutation for RecordingPermutation {
    fn rate_bits(&self) -> usize {
        self.inner.rate_bits()
    }

    fn capacity_bits(&self) -> usize {
        self.inner.capacity_bits()
    }

    fn xor_bytes(&mut self, offset: usize, input: &[u8]) {
        self.inner.xor_bytes(offset, input);
    }

    fn read_bytes(&self, offset: usize, output: &mut [u8]) {
        self.inner.read_bytes(offset, output);
    }

    fn zero_bytes(&mut self, offset: usize, len: usize) {
        self.zeroed.push((offset, len));
        self.inner.zero_bytes(offset, len);
    }

    fn pad(&mut self, domain_bits: u8, domain_bit_len: usize, bit_position: usize) {
        self.pads.push(PadCall {
            domain_bits,
            domain_bit_len,
            bit_position,
        });
        self.inner.pad(domain_bits, domain_bit_len, bit_position);
    }

    fn permute(&mut self) {
        self.permute_count += 1;
        self.inner.permute();
    }
}
