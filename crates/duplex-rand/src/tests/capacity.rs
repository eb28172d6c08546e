// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::capacity::Capacity;
use crate::error::DuplexError;

#[test]
fn test_named_capacities() {
    assert_eq!(Capacity::MASTER.bits(), 1085);
    assert_eq!(Capacity::MASTER.rate_bytes(), 64);
    assert_eq!(Capacity::DEFAULT.bits(), 509);
    assert_eq!(Capacity::DEFAULT.rate_bytes(), 136);
    assert_eq!(Capacity::default(), Capacity::DEFAULT);
}

#[test]
fn test_from_lanes_accepts_supported_range() {
    for n in Capacity::MIN_LANES..Capacity::MAX_LANES {
        let capacity = Capacity::from_lanes(n).expect("Failed to from_lanes(..)");
        assert_eq!(capacity.bits(), n * 64 - 3);
        assert_eq!(capacity.rate_bytes(), (25 - n) * 8);
    }
}

#[test]
fn test_from_lanes_rejects_out_of_range() {
    assert_eq!(
        Capacity::from_lanes(3),
        Err(DuplexError::InvalidCapacity { bits: 189 })
    );
    assert_eq!(
        Capacity::from_lanes(25),
        Err(DuplexError::InvalidCapacity { bits: 1597 })
    );
    assert!(Capacity::from_lanes(0).is_err());
    assert!(Capacity::from_lanes(usize::MAX).is_err());
}

#[test]
fn test_try_from_bits() {
    assert_eq!(Capacity::try_from_bits(1085), Ok(Capacity::MASTER));
    assert_eq!(Capacity::try_from(509), Ok(Capacity::DEFAULT));

    assert_eq!(
        Capacity::try_from_bits(512),
        Err(DuplexError::InvalidCapacity { bits: 512 })
    );
    assert_eq!(
        Capacity::try_from_bits(125),
        Err(DuplexError::InvalidCapacity { bits: 125 })
    );
    assert_eq!(
        Capacity::try_from_bits(usize::MAX),
        Err(DuplexError::InvalidCapacity { bits: usize::MAX })
    );
}
