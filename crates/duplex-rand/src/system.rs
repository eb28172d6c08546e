// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Host entropy via `getrandom`.
///
/// This is what seeds the master seed generator on first use. It is also
/// accepted by [`DuplexRandom::from_entropy`](crate::DuplexRandom::from_entropy)
/// for engines that should not draw from the shared generator at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource;

impl SystemEntropySource {
    /// Runs `fill` and collapses any platform error into
    /// [`EntropyError::EntropyNotAvailable`]. Split out so the failure path
    /// can be driven without breaking the host RNG.
    pub(crate) fn fill_with(
        fill: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        dest: &mut [u8],
    ) -> Result<(), EntropyError> {
        fill(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_with(&getrandom::fill, dest)
    }
}
