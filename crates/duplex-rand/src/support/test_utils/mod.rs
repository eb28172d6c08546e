// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mocks with configurable behaviour for exercising the generator.

mod mock_entropy_source;
mod recording_permutation;

pub use mock_entropy_source::{MockEntropySource, MockEntropySourceBehaviour};
pub use recording_permutation::{PadCall, RecordingPermutation};
