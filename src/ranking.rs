// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The tie-break rule: how two candidates get ordered.
//!
//! One rule governs both eviction and output order:
//!
//! 1. **Score** - higher wins
//! 2. **Code-point count** - at equal score, the shorter word wins
//!
//! Nothing else about a candidate (kind, flags, metadata) participates. Two
//! candidates with the same `(score, count)` are *equivalent* under this rule;
//! the result set breaks that last tie by arrival order so output stays
//! deterministic.

use crate::types::Candidate;
use std::cmp::Ordering;

/// Is `a` strictly better than `b`?
///
/// `a.score > b.score || (a.score == b.score && a.count < b.count)`
#[inline]
pub fn is_better(a: &Candidate, b: &Candidate) -> bool {
    is_better_key(key(a), key(b))
}

/// The same rule on bare `(score, count)` keys.
#[inline]
pub fn is_better_key(a: (i32, usize), b: (i32, usize)) -> bool {
    a.0 > b.0 || (a.0 == b.0 && a.1 < b.1)
}

/// Ranking key of a candidate.
#[inline]
pub fn key(candidate: &Candidate) -> (i32, usize) {
    (candidate.score, candidate.code_point_count())
}

/// Best-first comparator for sorting.
///
/// `Ordering::Less` means `a` ranks ahead of `b`. Equivalent candidates
/// compare `Equal`, so pair this with a stable sort when arrival order matters.
///
/// # Example
///
/// ```
/// use suggestset::{compare_best_first, Candidate, SuggestionKind};
///
/// let short = Candidate::from_word("ab", 20, SuggestionKind::Typed);
/// let long = Candidate::from_word("abc", 20, SuggestionKind::Typed);
/// assert_eq!(compare_best_first(&short, &long), std::cmp::Ordering::Less);
/// ```
pub fn compare_best_first(a: &Candidate, b: &Candidate) -> Ordering {
    // Score descending, then count ascending
    b.score
        .cmp(&a.score)
        .then_with(|| a.code_point_count().cmp(&b.code_point_count()))
}
