// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # duplex_permutation
//!
//! The fixed permutation underneath `duplex-rand`.
//!
//! ## Core Types
//!
//! - [`Permutation`]: the narrow contract the duplex engine needs from a
//!   permutation state (sizes, XOR-absorb, read, zero, pad, permute)
//! - [`Keccak1600`]: Keccak-f\[1600\] state split into rate and capacity
//!
//! ## Example
//!
//! ```rust
//! use duplex_permutation::{Keccak1600, Permutation};
//!
//! let mut state = Keccak1600::new(1085);
//! assert_eq!(state.rate_bits(), 515);
//!
//! state.xor_bytes(0, b"seed material");
//! state.pad(0b1, 1, 13 * 8);
//! state.permute();
//!
//! let mut out = [0u8; 32];
//! state.read_bytes(0, &mut out);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod keccak;
mod traits;

pub use keccak::{Keccak1600, WIDTH_BITS};
pub use traits::Permutation;
