// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bit storage used by the Bloom filter.
use std::fmt::Debug;

/// Storage of boolean flags addressed by position.
///
/// Bits can only ever be set: there is no way to clear a bit once it is set,
/// since that could introduce false negatives for other items sharing it.
pub trait BitStore {
    /// Set the bit at `position` to `1`. Setting a bit twice is a no-op.
    fn set(&mut self, position: u64);

    /// Check whether the bit at `position` is set.
    fn get(&self, position: u64) -> bool;

    /// The number of addressable positions, or `None` if any `u64` position
    /// is accepted.
    fn range(&self) -> Option<u64>;

    /// Count the number of `1` bits.
    fn count_ones(&self) -> u64;
}

/// A packed, fixed-length bit vector.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
    nbits: usize,
}

impl BitVec {
    /// Create a new bit vector of the given capacity, in bits.
    pub fn new(capacity: usize) -> Self {
        let byte_length = if capacity % 8 == 0 {
            capacity / 8
        } else {
            1 + capacity / 8
        };

        Self {
            nbits: capacity,
            bytes: vec![0; byte_length],
        }
    }

    /// Get the length in bits of the vector.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check whether this vector is empty, ie. has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Count the number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - BitStore::count_ones(self) as usize
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn locate(&self, position: u64) -> (usize, u8) {
        if position >= self.nbits as u64 {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                position,
            )
        }
        let index = position as usize;

        (index / 8, 0x01 << (index % 8))
    }
}

impl BitStore for BitVec {
    fn set(&mut self, position: u64) {
        let (byte_index, mask) = self.locate(position);

        self.bytes[byte_index] |= mask;
    }

    fn get(&self, position: u64) -> bool {
        let (byte_index, mask) = self.locate(position);

        self.bytes[byte_index] & mask == mask
    }

    fn range(&self) -> Option<u64> {
        Some(self.nbits as u64)
    }

    fn count_ones(&self) -> u64 {
        self.bytes.iter().map(|b| b.count_ones() as u64).sum()
    }
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.nbits as u64)
            .map(|i| if self.get(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVec({})", bits)
    }
}
