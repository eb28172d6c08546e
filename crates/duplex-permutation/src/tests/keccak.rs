// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::keccak::{Keccak1600, WIDTH_BITS};
use crate::traits::Permutation;

const MASTER_CAPACITY: usize = 1085;

#[test]
fn test_rate_and_capacity_split() {
    let state = Keccak1600::new(MASTER_CAPACITY);

    assert_eq!(state.capacity_bits(), MASTER_CAPACITY);
    assert_eq!(state.rate_bits(), WIDTH_BITS - MASTER_CAPACITY);
    assert_eq!(state.rate_bits(), 515);
}

#[test]
fn test_permute_zero_state_known_answer() {
    let mut state = Keccak1600::new(MASTER_CAPACITY);
    state.permute();

    let lanes = state.lanes_for_test();
    assert_eq!(lanes[0], 0xF1258F7940E1DDE7);
    assert_eq!(lanes[1], 0x84D5CCF933C0478A);

    // Byte view is little-endian within each lane.
    let mut first = [0u8; 8];
    state.read_bytes(0, &mut first);
    assert_eq!(first, 0xF1258F7940E1DDE7u64.to_le_bytes());
}

#[test]
fn test_xor_bytes_then_read_back() {
    let mut state = Keccak1600::new(MASTER_CAPACITY);
    let input: Vec<u8> = (1..=20).collect();

    state.xor_bytes(5, &input);
    let mut out = [0u8; 20];
    state.read_bytes(5, &mut out);
    assert_eq!(&out[..], &input[..]);

    // XOR twice cancels out.
    state.xor_bytes(5, &input);
    state.read_bytes(5, &mut out);
    assert_eq!(out, [0u8; 20]);
}

#[test]
fn test_xor_bytes_does_not_touch_neighbours() {
    let mut state = Keccak1600::new(MASTER_CAPACITY);
    state.xor_bytes(7, &[0xFF, 0xFF]);

    let mut out = [0u8; 10];
    state.read_bytes(6, &mut out);
    assert_eq!(out, [0, 0xFF, 0xFF, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_zero_bytes_clears_only_the_range() {
    let mut state = Keccak1600::new(MASTER_CAPACITY);
    state.xor_bytes(0, &[0xAA; 16]);

    state.zero_bytes(4, 8);

    let mut out = [0u8; 16];
    state.read_bytes(0, &mut out);
    assert_eq!(&out[..4], &[0xAA; 4]);
    assert_eq!(&out[4..12], &[0u8; 8]);
    assert_eq!(&out[12..], &[0xAA; 4]);
}

#[test]
fn test_pad_with_domain_bit_one() {
    let mut state = Keccak1600::new(MASTER_CAPACITY);
    state.pad(0b1, 1, 8);

    let mut out = [0u8; 64];
    state.read_bytes(0, &mut out);
    // Domain bit at 8 and leading pad bit at 9.
    assert_eq!(out[1], 0b0000_0011);
    assert!(out.iter().enumerate().all(|(i, &b)| i == 1 || b == 0));

    // Final pad bit is the last rate bit: 514 = byte 64, bit 2.
    assert_eq!(state.lanes_for_test()[8] & 0xFF, 0b0000_0100);
}

#[test]
fn test_pad_with_domain_bit_zero() {
    let mut state = Keccak1600::new(MASTER_CAPACITY);
    state.pad(0b0, 1, 0);

    let mut out = [0u8; 1];
    state.read_bytes(0, &mut out);
    // Domain bit 0 stays clear, leading pad bit lands at bit 1.
    assert_eq!(out[0], 0b0000_0010);
}

#[test]
fn test_pad_without_domain_bits() {
    let mut state = Keccak1600::new(MASTER_CAPACITY);
    state.pad(0, 0, 512);

    // Bits 512 and 514 share byte 64.
    assert_eq!(state.lanes_for_test()[8] & 0xFF, 0b0000_0101);
}

#[test]
fn test_pad_uses_at_most_three_reserved_bits() {
    let mut state = Keccak1600::new(MASTER_CAPACITY);
    let usable_rate_bytes = (state.rate_bits() - 3) / 8;

    // Pad right after the last usable byte must not overflow.
    state.pad(0b1, 1, usable_rate_bytes * 8);
    assert_eq!(state.lanes_for_test()[8] & 0xFF, 0b0000_0111);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_read_beyond_rate_panics() {
    let state = Keccak1600::new(MASTER_CAPACITY);
    let mut out = [0u8; 2];
    state.read_bytes(64, &mut out);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_xor_beyond_rate_panics() {
    let mut state = Keccak1600::new(MASTER_CAPACITY);
    state.xor_bytes(60, &[0u8; 8]);
}

#[test]
#[should_panic(expected = "overflows")]
fn test_pad_on_last_rate_bit_panics() {
    let mut state = Keccak1600::new(MASTER_CAPACITY);
    state.pad(0b1, 1, 513);
}

#[test]
#[should_panic(expected = "capacity must be")]
fn test_zero_capacity_panics() {
    let _ = Keccak1600::new(0);
}

#[test]
fn test_debug_does_not_leak_state() {
    let mut state = Keccak1600::new(MASTER_CAPACITY);
    state.xor_bytes(0, &[0x42; 8]);

    let debug = format!("{:?}", state);
    assert!(debug.contains("rate_bits: 515"));
    assert!(debug.contains("capacity_bits: 1085"));
    assert!(!debug.contains("lanes"));
}
