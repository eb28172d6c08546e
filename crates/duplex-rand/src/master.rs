// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide master seed generator.
//!
//! One [`DuplexRandom`] at [`Capacity::MASTER`], built on first use and
//! seeded with 64 bytes of system entropy. Every draw runs
//! produce-then-forget while holding the lock, so issued seed bytes cannot
//! be recomputed from the surviving state and concurrent draws never
//! interleave. The instance lives until process exit.

use std::sync::{Mutex, OnceLock};

use duplex_util::fast_zeroize_slice;

use crate::capacity::Capacity;
use crate::duplex::DuplexRandom;
use crate::error::{DuplexError, EntropyError};
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// System entropy absorbed by the master generator (512 bits).
pub(crate) const MASTER_ENTROPY_BYTES: usize = 64;

static SEED_GENERATOR: OnceLock<Mutex<DuplexRandom>> = OnceLock::new();

/// Builds a master-configured generator seeded from `entropy`.
pub(crate) fn new_seed_generator<E: EntropySource>(
    entropy: &E,
) -> Result<DuplexRandom, EntropyError> {
    let mut generator = DuplexRandom::with_capacity(Capacity::MASTER);
    let mut seed = [0u8; MASTER_ENTROPY_BYTES];

    let filled = entropy.fill_bytes(&mut seed);
    if filled.is_ok() {
        generator.feed(&seed);
    }
    fast_zeroize_slice(&mut seed);

    filled.map(|()| generator)
}

fn seed_generator() -> &'static Mutex<DuplexRandom> {
    SEED_GENERATOR.get_or_init(|| {
        let generator = new_seed_generator(&SystemEntropySource)
            .expect("CRITICAL: EntropySource not available");
        Mutex::new(generator)
    })
}

/// Produces `dest.len()` bytes from `generator`, then forgets, all under
/// its lock.
pub(crate) fn draw_and_forget(
    generator: &Mutex<DuplexRandom>,
    dest: &mut [u8],
) -> Result<(), DuplexError> {
    let mut guard = generator.lock().map_err(|_| DuplexError::MasterPoisoned)?;
    guard.get_bytes(dest)?;
    guard.forget();
    Ok(())
}

/// Fills `dest` with seed bytes from the master seed generator.
///
/// The generator is created on the first call.
///
/// # Panics
///
/// Panics on the first call if system entropy is unavailable: the process
/// must not continue with an unseeded master generator.
///
/// # Errors
///
/// Returns [`DuplexError::MasterPoisoned`] if a previous holder of the lock
/// panicked.
///
/// # Example
///
/// ```rust
/// let mut seed = [0u8; 32];
/// duplex_rand::get_seed_bytes(&mut seed).expect("Failed to get_seed_bytes(..)");
/// ```
pub fn get_seed_bytes(dest: &mut [u8]) -> Result<(), DuplexError> {
    draw_and_forget(seed_generator(), dest)
}
