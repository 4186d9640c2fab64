// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Construction errors.
use thiserror::Error;

/// Errors raised when a filter is configured inconsistently.
///
/// Every filter and collection operation is total once constructed; these only
/// surface from constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A dense bit store must address at least one position.
    #[error("bit store capacity must be non-zero")]
    ZeroCapacity,
    /// Both hash functions would use the same seed and always agree.
    #[error("hash seeds must be distinct, got {0} twice")]
    DuplicateSeeds(u32),
}
