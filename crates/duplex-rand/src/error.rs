// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when acquiring system entropy.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}

/// Errors returned by the duplex generator.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DuplexError {
    /// Capacity is not of the form `n * 64 - 3` with `n` in the supported range.
    #[error("invalid capacity: {bits} bits")]
    InvalidCapacity {
        /// The rejected capacity in bits.
        bits: usize,
    },

    /// An entropy source failed while seeding.
    #[error("EntropyError: {0}")]
    Entropy(#[from] EntropyError),

    /// The master seed generator lock was poisoned by a panicking holder.
    #[error("master seed generator mutex poisoned")]
    MasterPoisoned,
}
