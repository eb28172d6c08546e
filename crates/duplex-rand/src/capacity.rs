// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Validated capacity parameter.
//!
//! The duplex engine reserves 3 rate bits for padding, so a capacity of
//! `n * 64 - 3` bits leaves a rate of exactly `(25 - n) * 8` usable bytes
//! per permutation. Larger `n` buys security at the cost of throughput.

use crate::error::DuplexError;

/// Bits of the rate reserved for the domain bit and `pad10*1`.
pub(crate) const PADDING_BITS: usize = 3;

/// Capacity of a duplex engine, in bits.
///
/// # Example
///
/// ```rust
/// use duplex_rand::Capacity;
///
/// let capacity = Capacity::from_lanes(8).expect("8 lanes is supported");
/// assert_eq!(capacity.bits(), 509);
/// assert_eq!(capacity.rate_bytes(), 136);
///
/// assert!(Capacity::try_from_bits(512).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capacity(usize);

impl Capacity {
    /// Smallest supported `n` (inclusive).
    pub const MIN_LANES: usize = 4;

    /// Largest supported `n` (exclusive).
    pub const MAX_LANES: usize = 25;

    /// Capacity of the process-wide master seed generator (`n = 17`).
    pub const MASTER: Self = Self(17 * 64 - PADDING_BITS);

    /// Capacity used by [`Default`] (`n = 8`).
    pub const DEFAULT: Self = Self(8 * 64 - PADDING_BITS);

    /// Builds the capacity `n * 64 - 3`.
    ///
    /// # Errors
    ///
    /// Returns [`DuplexError::InvalidCapacity`] if `n` is outside
    /// `MIN_LANES..MAX_LANES`.
    pub fn from_lanes(n: usize) -> Result<Self, DuplexError> {
        if (Self::MIN_LANES..Self::MAX_LANES).contains(&n) {
            Ok(Self(n * 64 - PADDING_BITS))
        } else {
            Err(DuplexError::InvalidCapacity {
                bits: n.saturating_mul(64).saturating_sub(PADDING_BITS),
            })
        }
    }

    /// Validates an arbitrary capacity, e.g. one read from untrusted
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DuplexError::InvalidCapacity`] unless `bits == n * 64 - 3`
    /// for a supported `n`.
    pub fn try_from_bits(bits: usize) -> Result<Self, DuplexError> {
        let padded = bits
            .checked_add(PADDING_BITS)
            .ok_or(DuplexError::InvalidCapacity { bits })?;

        if padded % 64 != 0 {
            return Err(DuplexError::InvalidCapacity { bits });
        }

        Self::from_lanes(padded / 64).map_err(|_| DuplexError::InvalidCapacity { bits })
    }

    /// Capacity in bits.
    pub const fn bits(self) -> usize {
        self.0
    }

    /// Output bytes available per permutation at this capacity.
    pub const fn rate_bytes(self) -> usize {
        (duplex_permutation::WIDTH_BITS - self.0 - PADDING_BITS) / 8
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for Capacity {
    type Error = DuplexError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        Self::try_from_bits(bits)
    }
}
