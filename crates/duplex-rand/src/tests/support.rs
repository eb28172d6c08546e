// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use duplex_permutation::{Keccak1600, Permutation};

use crate::error::EntropyError;
use crate::support::test_utils::{
    MockEntropySource, MockEntropySourceBehaviour, PadCall, RecordingPermutation,
};
use crate::traits::EntropySource;

#[test]
fn test_mock_entropy_behaviours() {
    let mut entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut dest = [0u8; 32];
    entropy.fill_bytes(&mut dest).expect("Failed to fill_bytes(..)");
    assert_ne!(dest, [0u8; 32]);

    entropy.change_behaviour(MockEntropySourceBehaviour::Constant(0xEE));
    entropy.fill_bytes(&mut dest).expect("Failed to fill_bytes(..)");
    assert_eq!(dest, [0xEE; 32]);

    entropy.change_behaviour(MockEntropySourceBehaviour::FailAtFillBytes);
    assert_eq!(
        entropy.fill_bytes(&mut dest),
        Err(EntropyError::EntropyNotAvailable)
    );

    assert_eq!(entropy.call_count(), 3);
}

#[test]
fn test_recording_permutation_delegates() {
    let mut bare = Keccak1600::new(509);
    let mut recorded = RecordingPermutation::new(509);

    for state in [&mut bare as &mut dyn Permutation, &mut recorded] {
        state.xor_bytes(3, b"abc");
        state.pad(0b1, 1, 48);
        state.permute();
        state.zero_bytes(10, 5);
        state.permute();
    }

    let mut expected = [0u8; 136];
    bare.read_bytes(0, &mut expected);
    assert_eq!(recorded.rate_snapshot(136), expected);

    assert_eq!(recorded.rate_bits(), bare.rate_bits());
    assert_eq!(recorded.capacity_bits(), 509);
    assert_eq!(recorded.permute_count(), 2);
    assert_eq!(recorded.zeroed(), &[(10, 5)]);
    assert_eq!(
        recorded.pads(),
        &[PadCall {
            domain_bits: 0b1,
            domain_bit_len: 1,
            bit_position: 48,
        }]
    );
}
