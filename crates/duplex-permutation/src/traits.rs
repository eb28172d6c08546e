// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Byte-addressable permutation state split into a rate and a capacity.
///
/// Offsets passed to the byte operations are relative to the start of the
/// rate region. Bytes outside the rate can never be touched through this
/// trait: the capacity is only reachable through [`permute`](Self::permute).
///
/// Out-of-range offsets are programming errors and panic.
pub trait Permutation {
    /// Width of the rate region in bits.
    fn rate_bits(&self) -> usize;

    /// Width of the capacity region in bits.
    fn capacity_bits(&self) -> usize;

    /// XORs `input` into the rate region starting at byte `offset`.
    fn xor_bytes(&mut self, offset: usize, input: &[u8]);

    /// Copies `output.len()` bytes out of the rate region starting at byte `offset`.
    fn read_bytes(&self, offset: usize, output: &mut [u8]);

    /// Zeroes `len` bytes of the rate region starting at byte `offset`.
    fn zero_bytes(&mut self, offset: usize, len: usize);

    /// Appends padding at `bit_position` of the rate region.
    ///
    /// The lowest `domain_bit_len` bits of `domain_bits` are appended first
    /// (LSB first), followed by `pad10*1`: a `1` bit right after them and a
    /// `1` bit at the last rate bit. `domain_bit_len == 0` appends plain
    /// `pad10*1`.
    fn pad(&mut self, domain_bits: u8, domain_bit_len: usize, bit_position: usize);

    /// Applies one full permutation to the state.
    fn permute(&mut self);
}
