// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # duplex_rand
//!
//! Forward-secure pseudo-random generation over a Keccak-f\[1600\] duplex
//! sponge.
//!
//! ## Core Types
//!
//! - [`DuplexRandom`]: the generator (seed, output, forget)
//! - [`ForgettingBuffer`]: seed accumulator that zeroes itself
//! - [`Capacity`]: validated capacity parameter
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`get_seed_bytes`]: draw from the process-wide master seed generator
//!
//! ## Traits
//!
//! - [`EntropySource`]: interface for host entropy
//! - [`Permutation`]: the permutation contract the engine runs on
//!
//! ## Example
//!
//! ```rust
//! use duplex_rand::{Capacity, DuplexRandom};
//!
//! // Self-seeds from the master generator on first use.
//! let mut rng = DuplexRandom::with_capacity(Capacity::DEFAULT);
//! let key = rng.get_random_bytes::<32>().expect("Failed to get_random_bytes()");
//!
//! // Reproducible stream from a known seed.
//! let mut a = DuplexRandom::default();
//! let mut b = DuplexRandom::default();
//! a.seed(b"0123456789abcdef");
//! b.seed(b"0123456789abcdef");
//! assert_eq!(
//!     a.get_random_bytes::<64>().expect("Failed to get_random_bytes()"),
//!     b.get_random_bytes::<64>().expect("Failed to get_random_bytes()"),
//! );
//!
//! // Forward secrecy: state captured after this reveals nothing about `key`.
//! rng.forget();
//! # let _ = key;
//! ```
//!
//! ## Thread Safety
//!
//! A [`DuplexRandom`] takes `&mut self` everywhere and carries no internal
//! lock. The master seed generator is the only shared state and is guarded
//! by a mutex for the whole produce-then-forget sequence.
//!
//! ## Features
//!
//! - `rand-core`: implements `rand_core::TryRngCore` and `TryCryptoRng`
//! - `test_utils`: exports mock entropy sources and an instrumented permutation

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod accumulator;
mod capacity;
mod duplex;
mod error;
mod master;
#[cfg(feature = "rand-core")]
mod rng;
mod support;
mod system;
mod traits;

pub use accumulator::{ForgettingBuffer, MIN_SEED_LENGTH_BYTES};
pub use capacity::Capacity;
pub use duplex::DuplexRandom;
pub use duplex_permutation::{Keccak1600, Permutation};
pub use error::{DuplexError, EntropyError};
pub use master::get_seed_bytes;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;
