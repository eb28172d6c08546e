// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Seed accumulator that wipes itself.

use core::fmt;

use duplex_util::fast_zeroize_vec;

/// Seed material is not absorbed until at least this many bytes (128 bits)
/// are available.
pub const MIN_SEED_LENGTH_BYTES: usize = 16;

/// Append-only byte buffer whose contents are overwritten with zeros before
/// being discarded.
///
/// Growing never leaves a stale copy behind: when the allocation is too
/// small, the contents move to a larger allocation and the old one is wiped
/// before it is freed. The default allocation holds
/// [`MIN_SEED_LENGTH_BYTES`], which is all the duplex engine ever buffers.
///
/// # Example
///
/// ```rust
/// use duplex_rand::ForgettingBuffer;
///
/// let mut pending = ForgettingBuffer::new();
/// pending.write(b"dice rolls");
/// assert_eq!(pending.len(), 10);
///
/// pending.forget();
/// assert!(pending.is_empty());
/// ```
pub struct ForgettingBuffer {
    buf: Vec<u8>,
}

impl ForgettingBuffer {
    /// Creates an empty buffer sized for one minimum-length seed.
    pub fn new() -> Self {
        Self::with_capacity(MIN_SEED_LENGTH_BYTES)
    }

    /// Creates an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Appends `bytes`.
    pub fn write(&mut self, bytes: &[u8]) {
        let needed = self.buf.len() + bytes.len();

        if needed > self.buf.capacity() {
            let mut grown = Vec::with_capacity(needed.max(self.buf.capacity() * 2));
            grown.extend_from_slice(&self.buf);
            fast_zeroize_vec(&mut self.buf);
            self.buf = grown;
        }

        self.buf.extend_from_slice(bytes);
    }

    /// Number of buffered bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Buffered bytes, oldest first.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Overwrites the whole allocation with zeros and empties the buffer.
    pub fn forget(&mut self) {
        fast_zeroize_vec(&mut self.buf);
        self.buf.clear();
    }

    #[cfg(test)]
    pub(crate) fn raw_for_test(&self) -> &Vec<u8> {
        &self.buf
    }
}

impl Default for ForgettingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ForgettingBuffer {
    fn drop(&mut self) {
        self.forget();
    }
}

impl fmt::Debug for ForgettingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ForgettingBuffer([REDACTED; {}])", self.buf.len())
    }
}
