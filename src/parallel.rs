// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel ranking over large candidate batches.
//!
//! A `RankedResultSet` has no locks, so parallel ranking is one set per rayon
//! worker followed by a merge. Top-K is decomposable: the best `k` of the whole
//! batch are always among the union of each worker's best `k`, so the merged
//! set holds the same `(score, count)` keys as a sequential pass.
//!
//! The one thing that can differ is *which* of several candidates with an
//! identical key survives at the capacity boundary, because arrival order is
//! no longer global.

use rayon::prelude::*;

use crate::config::RankingConfig;
use crate::results::RankedResultSet;
use crate::types::Candidate;

/// Rank `candidates` across the rayon pool into a set of `capacity`.
pub fn rank_parallel(candidates: Vec<Candidate>, capacity: usize) -> RankedResultSet {
    candidates
        .into_par_iter()
        .fold(
            || RankedResultSet::new(capacity),
            |mut set, candidate| {
                set.insert(candidate);
                set
            },
        )
        .reduce(
            || RankedResultSet::new(capacity),
            |mut left, right| {
                left.merge(right);
                left
            },
        )
}

/// [`rank_parallel`] with capacity and weight taken from a config.
pub fn rank_parallel_with(candidates: Vec<Candidate>, config: &RankingConfig) -> RankedResultSet {
    let mut set = rank_parallel(candidates, config.capacity);
    set.set_weight(config.weight);
    set
}
