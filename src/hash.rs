// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Hash functions deriving bit positions from bytes.
//!
//! Every item maps to exactly [`NUM_HASHES`] positions. More hash functions
//! lower the false positive rate but make every insert and lookup slower; two
//! is the smallest number that still lets independent functions disagree.
use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::error::Error;

/// Number of hash functions, and so of bit positions, per item.
pub const NUM_HASHES: usize = 2;

/// Seeds used for MurmurHash3.
const MURMUR3_SEEDS: [u32; NUM_HASHES] = [1, 2];

/// Seeds used for SipHash.
const HASHER_SEEDS: [[u8; 16]; NUM_HASHES] = [
    [
        136, 168, 28, 251, 141, 239, 69, 38, 166, 209, 98, 201, 2, 169, 146, 170,
    ],
    [
        103, 236, 177, 212, 54, 11, 66, 5, 194, 86, 6, 254, 82, 93, 203, 37,
    ],
];

/// A fixed family of deterministic hash functions.
pub trait PositionHasher {
    /// Hash `data` once per function. The same input must always produce the
    /// same output.
    fn hashes(&self, data: &[u8]) -> [u64; NUM_HASHES];
}

/// MurmurHash3 (x64, 128-bit) keeping the low 64 bits, one seed per function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Murmur3 {
    seeds: [u32; NUM_HASHES],
}

impl Murmur3 {
    /// Use the given seeds instead of the defaults.
    pub fn with_seeds(seeds: [u32; NUM_HASHES]) -> Result<Self, Error> {
        if seeds[0] == seeds[1] {
            return Err(Error::DuplicateSeeds(seeds[0]));
        }
        Ok(Self { seeds })
    }

    /// The seeds of each hash function.
    pub fn seeds(&self) -> [u32; NUM_HASHES] {
        self.seeds
    }
}

impl Default for Murmur3 {
    fn default() -> Self {
        Self {
            seeds: MURMUR3_SEEDS,
        }
    }
}

impl PositionHasher for Murmur3 {
    fn hashes(&self, data: &[u8]) -> [u64; NUM_HASHES] {
        self.seeds.map(|seed| {
            let mut reader = data;
            // Reading from a byte slice cannot fail.
            murmur3::murmur3_x64_128(&mut reader, seed).unwrap_or_default() as u64
        })
    }
}

/// SipHash-1-3 with two fixed keys.
#[derive(Clone, Copy, Debug)]
pub struct SipHash {
    hashers: [SipHasher13; NUM_HASHES],
}

impl Default for SipHash {
    fn default() -> Self {
        Self {
            hashers: [
                SipHasher13::new_with_key(&HASHER_SEEDS[0]),
                SipHasher13::new_with_key(&HASHER_SEEDS[1]),
            ],
        }
    }
}

impl PositionHasher for SipHash {
    fn hashes(&self, data: &[u8]) -> [u64; NUM_HASHES] {
        self.hashers.map(|mut sip| {
            sip.write(data);
            sip.finish()
        })
    }
}
