// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Zeroization helpers for the secret buffers of the duplex generator.
//!
//! Every clear performed by `duplex-rand` goes through this crate: seed
//! accumulators, transient entropy buffers and the permutation state. The
//! writes are followed by a volatile read and a compiler fence so the
//! optimizer cannot drop them as dead stores, even when the buffer is
//! about to be freed.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use duplex_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Verifies that a `Vec<u8>` is fully zeroized, including spare capacity.
///
/// Checks the entire allocation (0 to capacity), not just the active
/// elements, so stale seed material left behind after a `clear()` is caught.
///
/// # Example
///
/// ```
/// use duplex_util::{fast_zeroize_vec, is_vec_fully_zeroized};
///
/// let mut vec = vec![1u8, 2, 3, 4, 5];
/// vec.truncate(2);
/// assert!(!is_vec_fully_zeroized(&vec));
///
/// fast_zeroize_vec(&mut vec);
/// assert!(is_vec_fully_zeroized(&vec));
/// ```
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let cap = vec.capacity();
    let base = vec.as_ptr();

    // SAFETY: the allocation is valid for `cap` bytes and u8 has no invalid
    // bit patterns, so reading spare capacity is sound.
    (0..cap).all(|i| unsafe { *base.add(i) } == 0)
}

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types for which the all-zero bit pattern is a valid
/// value.
///
/// Sealed: only the integer types listed below implement it, so types with
/// a niche at zero (`NonZeroU8`, references, `fn` pointers) cannot be
/// passed to [`fast_zeroize_slice`].
pub trait ZeroizablePrimitive: Copy + sealed::Sealed {}

macro_rules! impl_zeroizable_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl ZeroizablePrimitive for $t {}
        )*
    };
}

impl_zeroizable_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Bulk zeroization that the optimizer cannot remove.
///
/// Uses `write_bytes` (memset) followed by a volatile read and a compiler
/// fence. Restricted to [`ZeroizablePrimitive`] element types.
///
/// # Example
///
/// ```
/// use duplex_util::fast_zeroize_slice;
///
/// let mut lanes = [0xDEADBEEFu64; 25];
/// fast_zeroize_slice(&mut lanes);
/// assert!(lanes.iter().all(|&v| v == 0));
/// ```
///
/// Types that must never be zero are rejected at compile time:
///
/// ```compile_fail
/// use core::num::NonZeroU8;
/// use duplex_util::fast_zeroize_slice;
///
/// let mut values = [NonZeroU8::new(7).unwrap(); 4];
/// fast_zeroize_slice(&mut values);
/// ```
///
/// ```compile_fail
/// use duplex_util::fast_zeroize_slice;
///
/// let byte = 1u8;
/// let mut refs = [&byte; 2];
/// fast_zeroize_slice(&mut refs);
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T: ZeroizablePrimitive>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    // SAFETY: the pointer covers exactly `byte_len` initialized bytes owned
    // by `slice`, and `T` is a primitive integer, for which all-zero is a
    // valid value.
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Bulk zeroization of a `Vec` including spare capacity.
///
/// Length is left untouched; callers that want an empty vector follow up
/// with `clear()`.
///
/// # Example
///
/// ```
/// use duplex_util::{fast_zeroize_vec, is_vec_fully_zeroized};
///
/// let mut vec = vec![0xFFu8; 100];
/// vec.truncate(10);
///
/// fast_zeroize_vec(&mut vec);
/// assert!(is_vec_fully_zeroized(&vec));
/// ```
#[inline(always)]
pub fn fast_zeroize_vec(vec: &mut Vec<u8>) {
    if vec.capacity() == 0 {
        return;
    }

    // SAFETY: the allocation is valid for `capacity` bytes.
    unsafe {
        core::ptr::write_bytes(vec.as_mut_ptr(), 0, vec.capacity());
        core::ptr::read_volatile(vec.as_ptr());
    }
    compiler_fence(Ordering::SeqCst);
}
