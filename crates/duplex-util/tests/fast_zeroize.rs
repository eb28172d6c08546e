// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use duplex_util::{
    ZeroizablePrimitive, fast_zeroize_slice, fast_zeroize_vec, is_slice_zeroized,
    is_vec_fully_zeroized,
};

/// Reads spare capacity bytes (sound for u8: every bit pattern is valid).
fn read_spare_capacity(vec: &Vec<u8>) -> Vec<u8> {
    let base = vec.as_ptr();
    (vec.len()..vec.capacity())
        .map(|i| unsafe { *base.add(i) })
        .collect()
}

#[test]
fn test_fast_zeroize_slice_bytes() {
    let mut seed = [0xA5u8; 64];
    fast_zeroize_slice(&mut seed);
    assert!(is_slice_zeroized(&seed));
}

#[test]
fn test_fast_zeroize_slice_lanes() {
    let mut lanes = [u64::MAX; 25];
    fast_zeroize_slice(&mut lanes);
    assert!(lanes.iter().all(|&lane| lane == 0));
}

fn zeroize_and_check<T: ZeroizablePrimitive + PartialEq + Default>(mut values: [T; 8]) {
    fast_zeroize_slice(&mut values);
    assert!(values.iter().all(|v| *v == T::default()));
}

#[test]
fn test_fast_zeroize_slice_integer_widths() {
    // Integer types are the only accepted elements; see the compile_fail
    // doc tests on `fast_zeroize_slice` for rejected niche types.
    zeroize_and_check([0x5Au8; 8]);
    zeroize_and_check([0x5A5Au16; 8]);
    zeroize_and_check([u32::MAX; 8]);
    zeroize_and_check([u64::MAX; 8]);
    zeroize_and_check([u128::MAX; 8]);
    zeroize_and_check([usize::MAX; 8]);
    zeroize_and_check([-1i8; 8]);
    zeroize_and_check([i16::MIN; 8]);
    zeroize_and_check([i32::MIN; 8]);
    zeroize_and_check([i64::MIN; 8]);
    zeroize_and_check([i128::MIN; 8]);
    zeroize_and_check([isize::MIN; 8]);
}

#[test]
fn test_fast_zeroize_slice_empty() {
    let mut empty: [u8; 0] = [];
    fast_zeroize_slice(&mut empty);
    assert!(is_slice_zeroized(&empty));
}

#[test]
fn test_fast_zeroize_vec_clears_spare_capacity() {
    let mut pending = Vec::with_capacity(16);
    pending.extend_from_slice(&[0xBBu8; 15]);
    pending.truncate(3);

    assert!(read_spare_capacity(&pending).iter().all(|&b| b == 0xBB));

    fast_zeroize_vec(&mut pending);

    assert_eq!(pending.len(), 3);
    assert!(is_slice_zeroized(&pending));
    assert!(is_slice_zeroized(&read_spare_capacity(&pending)));
    assert!(is_vec_fully_zeroized(&pending));
}

#[test]
fn test_fast_zeroize_vec_unallocated() {
    let mut vec: Vec<u8> = Vec::new();
    fast_zeroize_vec(&mut vec);
    assert!(vec.is_empty());
    assert!(is_vec_fully_zeroized(&vec));
}

#[test]
fn test_is_vec_fully_zeroized_detects_stale_spare_capacity() {
    let mut vec = vec![1u8, 2, 3, 4, 5];
    vec.truncate(2);
    vec.iter_mut().for_each(|b| *b = 0);

    // Active elements are zero, spare capacity still holds 3, 4, 5.
    assert!(!is_vec_fully_zeroized(&vec));
}
