// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A Bloom filter using a fixed pair of hash functions.

use tracing::debug;

use crate::bitvec::{BitStore, BitVec};
use crate::error::Error;
use crate::hash::{Murmur3, PositionHasher, NUM_HASHES};
use crate::sparse::SparseBitVec;

/// A Bloom filter over byte sequences.
///
/// By default bits are kept in an unbounded [`SparseBitVec`] and positions come
/// from [`Murmur3`], so no capacity has to be chosen up front. Use
/// [`BloomFilter::dense`] for a packed fixed-size store instead.
#[derive(Clone, Debug)]
pub struct BloomFilter<S = SparseBitVec, H = Murmur3> {
    bits: S,
    hasher: H,
}

impl BloomFilter {
    /// Return a new, empty Bloom filter with sparse storage.
    pub fn new() -> Self {
        Self::with_parts(SparseBitVec::new(), Murmur3::default())
    }
}

impl Default for BloomFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl BloomFilter<BitVec> {
    /// Return a new, empty Bloom filter backed by `nbits` packed bits.
    ///
    /// Hashes are folded into `0..nbits`, so a smaller store saves memory at the
    /// cost of more false positives.
    pub fn dense(nbits: usize) -> Result<Self, Error> {
        if nbits == 0 {
            return Err(Error::ZeroCapacity);
        }
        debug!(nbits, "creating dense bloom filter");

        Ok(Self::with_parts(BitVec::new(nbits), Murmur3::default()))
    }
}

impl<S: BitStore, H: PositionHasher> BloomFilter<S, H> {
    /// Build a filter from an existing bit store and hasher.
    pub fn with_parts(bits: S, hasher: H) -> Self {
        Self { bits, hasher }
    }

    /// Record an item in the filter. Recording the same item again has no
    /// effect. Returns the filter so calls can be chained.
    pub fn record(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        for position in self.positions(data) {
            self.bits.set(position);
        }
        self
    }

    /// Return whether an item is possibly in the filter.
    ///
    /// `false` means the item was never recorded. `true` means it probably was:
    /// unrelated items can set the same bits, but a recorded item is never
    /// reported missing.
    pub fn probably_contains(&self, data: impl AsRef<[u8]>) -> bool {
        self.positions(data)
            .into_iter()
            .all(|position| self.bits.get(position))
    }

    /// The bit positions an item maps to. Always the same for the same item.
    pub fn positions(&self, data: impl AsRef<[u8]>) -> [u64; NUM_HASHES] {
        let hashes = self.hasher.hashes(data.as_ref());

        match self.bits.range() {
            Some(nbits) => hashes.map(|h| h % nbits),
            None => hashes,
        }
    }

    /// Number of hashes used per item (`k` parameter).
    pub fn hashes(&self) -> usize {
        NUM_HASHES
    }

    /// Number of bits currently set.
    pub fn bits_set(&self) -> u64 {
        self.bits.count_ones()
    }

    /// Return the underlying bit store.
    pub fn store(&self) -> &S {
        &self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::SipHash;
    use std::collections::HashSet;
    use std::iter;

    fn key() -> String {
        let rng = fastrand::Rng::new();
        iter::repeat_with(|| rng.alphanumeric()).take(32).collect()
    }

    fn items(size: usize) -> Vec<String> {
        let mut items = HashSet::<String>::new();
        for _ in 0..size {
            items.insert(key());
        }
        items.into_iter().collect()
    }

    #[test]
    fn test_empty_filter() {
        let bf = BloomFilter::new();

        assert_eq!(bf.probably_contains("test"), false);
        assert_eq!(bf.probably_contains(""), false);
        assert_eq!(bf.bits_set(), 0);
    }

    #[test]
    fn test_record_and_check() {
        let mut bf = BloomFilter::new();

        assert_eq!(bf.record("test").probably_contains("test"), true);
        // Known not to collide with "test" under the default seeds.
        assert_eq!(bf.probably_contains("test2"), false);
        assert_eq!(bf.hashes(), 2);
        assert!(bf.bits_set() >= 1 && bf.bits_set() <= 2);
    }

    #[test]
    fn test_record_is_idempotent() {
        let mut bf = BloomFilter::new();
        bf.record(b"foo");
        let bits = bf.store().clone();
        bf.record(b"foo");

        assert_eq!(bf.store(), &bits);
    }

    #[test]
    fn test_bloom_filter() {
        let n = 1024;
        let items = items(n);
        let mut bf = BloomFilter::new();

        // Test inclusion.
        for item in items.iter() {
            bf.record(item);

            assert_eq!(
                bf.probably_contains(item),
                true,
                "item {} should result in a positive inclusion",
                item,
            );
        }

        // Test false negatives, after all other items were recorded.
        for item in items.iter() {
            assert_eq!(
                bf.probably_contains(item),
                true,
                "item {} resulted in a false negative",
                item
            );
        }
    }

    #[test]
    fn test_dense() {
        let items = items(128);
        let mut bf = BloomFilter::dense(4096).unwrap();

        for item in items.iter() {
            bf.record(item);
        }
        for item in items.iter() {
            assert!(bf.probably_contains(item));
            assert!(bf.positions(item).iter().all(|&p| p < 4096));
        }
        assert_eq!(bf.store().len(), 4096);
    }

    #[test]
    fn test_dense_single_bit() {
        let mut bf = BloomFilter::dense(1).unwrap();
        assert_eq!(bf.positions("anything"), [0, 0]);
        assert_eq!(bf.probably_contains("anything"), false);

        bf.record("anything");
        // Every item now maps to a set bit.
        assert_eq!(bf.probably_contains("something else"), true);
    }

    #[test]
    fn test_dense_zero_capacity() {
        assert_eq!(BloomFilter::dense(0).unwrap_err(), Error::ZeroCapacity);
    }

    #[test]
    fn test_positions_are_deterministic() {
        let mut bf = BloomFilter::new();
        let before = bf.positions("test");

        for item in items(64) {
            bf.record(item);
        }
        assert_eq!(bf.positions("test"), before);
        assert_eq!(BloomFilter::new().positions("test"), before);
        assert_eq!(before, Murmur3::default().hashes(b"test"));
    }

    #[test]
    fn test_siphash_sparse() {
        let mut bf = BloomFilter::with_parts(SparseBitVec::new(), SipHash::default());

        bf.record("foo").record("bar");

        assert!(bf.probably_contains("foo"));
        assert!(bf.probably_contains("bar"));
        assert_eq!(bf.positions("foo"), SipHash::default().hashes(b"foo"));
    }
}
