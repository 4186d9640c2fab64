//! A list of strings guarded by a Bloom filter, a space-efficient probabilistic
//! data structure.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! This implementation uses exactly two hash functions per item, MurmurHash3
//! with two different seeds by default. Bits are kept in a sparse store that
//! accepts any 64-bit position, so there is no capacity to plan for. A packed,
//! fixed-size store is available through [`BloomFilter::dense`].
//!
//! # Verified lookups
//!
//! [`BloomVec`] pairs a filter with a plain list of strings. Lookups for values
//! that were never inserted are usually answered by the filter alone; the list
//! is only scanned when the filter cannot rule a value out, which keeps the
//! answer exact.
//!
//! # Example
//!
//! ```
//! use bloomvec::{BloomFilter, BloomVec};
//!
//! let mut filter = BloomFilter::new();
//!
//! filter.record("foo").record("bar");
//!
//! filter.probably_contains("foo"); // true
//! filter.probably_contains("bar"); // true
//! filter.probably_contains("baz"); // false
//!
//! let mut list = BloomVec::new();
//!
//! list.insert("foo");
//!
//! assert!(list.contains("foo"));
//! assert!(!list.contains("baz"));
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod error;
pub mod hash;
pub mod sparse;
pub mod vec;

pub use bitvec::{BitStore, BitVec};
pub use bloom::BloomFilter;
pub use error::Error;
pub use hash::{Murmur3, PositionHasher, SipHash, NUM_HASHES};
pub use sparse::SparseBitVec;
pub use vec::BloomVec;
