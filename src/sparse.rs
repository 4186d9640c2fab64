// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Unbounded, sparse bit storage.
//!
//! Bits are grouped into 64-bit words and only words holding at least one set
//! bit are allocated, so any `u64` position can be addressed without sizing the
//! store up front. Lookups cost a map access instead of an array index.
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::bitvec::BitStore;

const WORD_BITS: u64 = u64::BITS as u64;

/// A sparse bit vector accepting any `u64` position.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SparseBitVec {
    words: BTreeMap<u64, u64>,
}

impl SparseBitVec {
    /// Create an empty sparse bit vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no bit has been set yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of allocated 64-bit words.
    pub fn words(&self) -> usize {
        self.words.len()
    }

    /// Iterate over set positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.words.iter().flat_map(|(&index, &word)| {
            (0..WORD_BITS)
                .filter(move |bit| word & (1 << bit) != 0)
                .map(move |bit| index * WORD_BITS + bit)
        })
    }
}

impl BitStore for SparseBitVec {
    fn set(&mut self, position: u64) {
        *self.words.entry(position / WORD_BITS).or_insert(0) |= 1 << (position % WORD_BITS);
    }

    fn get(&self, position: u64) -> bool {
        self.words
            .get(&(position / WORD_BITS))
            .map_or(false, |word| word & (1 << (position % WORD_BITS)) != 0)
    }

    fn range(&self) -> Option<u64> {
        None
    }

    fn count_ones(&self) -> u64 {
        self.words.values().map(|w| w.count_ones() as u64).sum()
    }
}

impl Debug for SparseBitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SparseBitVec")
            .field(&self.iter().collect::<Vec<_>>())
            .finish()
    }
}
