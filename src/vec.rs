// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A list of strings with a Bloom filter in front of it.
//!
//! Lookups ask the filter first. Values the filter has never seen are rejected
//! without touching the list; anything else is confirmed by a linear scan, which
//! weeds out the filter's false positives.

use std::slice;

use tracing::{debug, trace};

use crate::bitvec::BitStore;
use crate::bloom::BloomFilter;
use crate::hash::{Murmur3, PositionHasher};
use crate::sparse::SparseBitVec;

/// An insertion-ordered list of strings with exact, filter-accelerated lookups.
///
/// Every string in the list has been recorded in the filter, so a negative
/// filter answer is always correct. The list alone decides positive answers.
#[derive(Clone, Debug)]
pub struct BloomVec<S = SparseBitVec, H = Murmur3> {
    items: Vec<String>,
    filter: BloomFilter<S, H>,
}

impl BloomVec {
    /// Return an empty list with a sparse Murmur3 filter.
    pub fn new() -> Self {
        Self::with_filter(BloomFilter::new())
    }
}

impl Default for BloomVec {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BitStore, H: PositionHasher> BloomVec<S, H> {
    /// Return an empty list guarded by the given filter.
    pub fn with_filter(filter: BloomFilter<S, H>) -> Self {
        Self {
            items: Vec::new(),
            filter,
        }
    }

    /// Append a value. Duplicates are kept.
    pub fn insert(&mut self, value: impl Into<String>) {
        let value = value.into();

        // The filter is updated first so that it always covers the list.
        self.filter.record(&value);
        self.items.push(value);
    }

    /// Return whether `value` was ever inserted.
    pub fn contains(&self, value: &str) -> bool {
        if !self.filter.probably_contains(value) {
            trace!(value, "rejected by filter");
            return false;
        }
        if self.items.iter().any(|item| item == value) {
            return true;
        }
        debug!(value, scanned = self.items.len(), "filter false positive");

        false
    }

    /// Number of values, counting duplicates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether nothing was inserted yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over values in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Return the values in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Return the filter guarding the list.
    pub fn filter(&self) -> &BloomFilter<S, H> {
        &self.filter
    }
}

impl<S: BitStore, H: PositionHasher> Extend<String> for BloomVec<S, H> {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<String> for BloomVec {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, S, H> IntoIterator for &'a BloomVec<S, H> {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
