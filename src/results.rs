// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded top-K collection of suggestions.
//!
//! `RankedResultSet` keeps the best `capacity` candidates seen during one ranking
//! pass. It is a binary heap with the ordering flipped, so the root is the
//! *weakest* retained candidate. Every insertion into a full set is one peek plus
//! at most one pop and one push: O(log k).
//!
//! ```text
//!  insert(c) ──▶ valid count? ──no──▶ Invalid (logged)
//!                    │yes
//!                    ▼
//!               len < capacity? ──yes──▶ push ──▶ Added
//!                    │no
//!                    ▼
//!           c better than weakest? ──no──▶ Discarded
//!                    │yes
//!                    ▼
//!               pop weakest, push c ──▶ Replaced { evicted }
//! ```
//!
//! Reading the results sorts a copy (or the drained contents) best-first. The
//! heap allocates up front for ordinary capacities and keeps that allocation
//! across `reset`; a huge capacity only costs memory as candidates arrive.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, error, trace};

use crate::config::RankingConfig;
use crate::contracts::{check_best_first, check_candidate_retainable, check_capacity_bound};
use crate::error::InvalidCandidate;
use crate::ranking::{compare_best_first, is_better};
use crate::types::{probability_from_raw, Candidate, SuggestionKind, DEFAULT_CAPACITY};

/// Most slots reserved at construction. Capacity is only a bound.
const PREALLOCATED_SLOTS: usize = DEFAULT_CAPACITY * 16;

// =============================================================================
// HEAP ENTRY
// =============================================================================

/// Heap entry. Orders so that "greater" means "weaker", putting the eviction
/// victim at the root of std's max-heap.
#[derive(Debug, Clone)]
struct Slot {
    candidate: Candidate,
    /// Arrival order; breaks ties between candidates with equal keys.
    seq: u64,
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slot {}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        // Best-first comparator: Less = better. Later arrivals are weaker.
        compare_best_first(&self.candidate, &other.candidate).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// INSERTION OUTCOME
// =============================================================================

/// What happened to an inserted candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// Set had room.
    Added,
    /// Set was full and the newcomer beat the weakest, which was evicted.
    Replaced { evicted: Candidate },
    /// Set was full and the newcomer was not strictly better than the weakest.
    Discarded,
    /// Prediction without a probability. Normal filtering, not an error.
    Skipped,
    /// Code-point count out of range. Logged and dropped.
    Invalid(InvalidCandidate),
}

impl Insertion {
    /// Did the candidate end up in the set?
    pub fn is_retained(&self) -> bool {
        matches!(self, Insertion::Added | Insertion::Replaced { .. })
    }
}

// =============================================================================
// RANKED OUTPUT
// =============================================================================

/// The result of one pass: best-first candidates plus the auxiliary weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOutput {
    pub candidates: Vec<Candidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

impl RankedOutput {
    pub fn count(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Confidence of the sole survivor.
    ///
    /// `None` unless exactly one candidate was retained, and `None` if that
    /// candidate carries no confidence.
    pub fn auto_commit_confidence(&self) -> Option<i32> {
        match self.candidates.as_slice() {
            [only] => only.auto_commit_confidence,
            _ => None,
        }
    }

    pub fn scores(&self) -> Vec<i32> {
        self.candidates.iter().map(|c| c.score).collect()
    }

    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }
}

impl IntoIterator for RankedOutput {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

// =============================================================================
// RANKED RESULT SET
// =============================================================================

/// Keeps the best `capacity` candidates of a ranking pass.
///
/// One instance per pass and per thread. There is no internal locking; workers
/// ranking in parallel each build their own set and [`merge`](Self::merge).
///
/// # Example
///
/// ```
/// use suggestset::{Candidate, RankedResultSet, SuggestionKind};
///
/// let mut set = RankedResultSet::new(3);
/// for (score, word) in [(10, "four"), (20, "thr"), (15, "fivee"), (20, "tw")] {
///     set.insert(Candidate::from_word(word, score, SuggestionKind::Correction));
/// }
///
/// let words: Vec<String> = set.drain().into_iter().map(|c| c.word()).collect();
/// assert_eq!(words, ["tw", "thr", "fivee"]);
/// ```
#[derive(Debug, Clone)]
pub struct RankedResultSet {
    capacity: usize,
    heap: BinaryHeap<Slot>,
    weight: Option<f32>,
    next_seq: u64,
}

impl RankedResultSet {
    /// Empty set with room for `capacity` candidates and no weight.
    ///
    /// A capacity of 0 is allowed and retains nothing. Any capacity up to
    /// `usize::MAX` is accepted; at most a few hundred slots are reserved
    /// ahead of time.
    pub fn new(capacity: usize) -> Self {
        RankedResultSet {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.min(PREALLOCATED_SLOTS)),
            weight: None,
            next_seq: 0,
        }
    }

    pub fn with_weight(capacity: usize, weight: f32) -> Self {
        let mut set = Self::new(capacity);
        set.weight = Some(weight);
        set
    }

    pub fn from_config(config: &RankingConfig) -> Self {
        let mut set = Self::new(config.capacity);
        set.weight = config.weight;
        set
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained candidates.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    pub fn weight(&self) -> Option<f32> {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Option<f32>) {
        self.weight = weight;
    }

    /// The candidate that the next strictly-better arrival would evict.
    pub fn weakest(&self) -> Option<&Candidate> {
        self.heap.peek().map(|slot| &slot.candidate)
    }

    // -------------------------------------------------------------------------
    // Insertion
    // -------------------------------------------------------------------------

    /// Offer a candidate to the set.
    ///
    /// Never fails: out-of-range candidates are logged and reported through
    /// [`Insertion::Invalid`] without touching the set.
    pub fn insert(&mut self, candidate: Candidate) -> Insertion {
        let count = candidate.code_point_count();
        if let Err(reason) = InvalidCandidate::check(count) {
            error!(count, %reason, "invalid word added to suggestion results");
            return Insertion::Invalid(reason);
        }

        if self.heap.len() < self.capacity {
            self.push(candidate);
            return Insertion::Added;
        }

        let beats_weakest = self
            .heap
            .peek()
            .is_some_and(|weakest| is_better(&candidate, &weakest.candidate));
        if !beats_weakest {
            trace!(score = candidate.score, count, "discarded, set is full");
            return Insertion::Discarded;
        }

        let evicted = self.heap.pop().map(|slot| slot.candidate);
        self.push(candidate);
        match evicted {
            Some(evicted) => {
                trace!(
                    score = evicted.score,
                    count = evicted.code_point_count(),
                    "evicted weakest"
                );
                Insertion::Replaced { evicted }
            }
            None => Insertion::Added,
        }
    }

    /// Offer a next-word prediction.
    ///
    /// A missing probability means the dictionary had nothing usable; the
    /// prediction is skipped quietly.
    pub fn add_prediction(
        &mut self,
        code_points: impl Into<Vec<u32>>,
        probability: Option<i32>,
    ) -> Insertion {
        let Some(probability) = probability else {
            trace!("prediction without probability skipped");
            return Insertion::Skipped;
        };
        self.insert(Candidate::new(
            code_points,
            probability,
            SuggestionKind::Prediction,
        ))
    }

    /// [`add_prediction`](Self::add_prediction) for a raw probability where
    /// `NOT_A_PROBABILITY` marks an invalid word.
    pub fn add_prediction_raw(&mut self, code_points: impl Into<Vec<u32>>, raw: i32) -> Insertion {
        self.add_prediction(code_points, probability_from_raw(raw))
    }

    /// Build and insert a suggestion in one call.
    pub fn add_suggestion(
        &mut self,
        code_points: impl Into<Vec<u32>>,
        score: i32,
        kind: SuggestionKind,
        partial_commit_index: Option<u32>,
        auto_commit_confidence: Option<i32>,
    ) -> Insertion {
        self.insert(
            Candidate::new(code_points, score, kind)
                .with_partial_commit_index(partial_commit_index)
                .with_auto_commit_confidence(auto_commit_confidence),
        )
    }

    /// Fold another set into this one under the usual insertion rules.
    ///
    /// This set keeps its own weight, or adopts `other`'s if it has none.
    pub fn merge(&mut self, other: RankedResultSet) {
        if self.weight.is_none() {
            self.weight = other.weight;
        }
        for slot in other.heap.into_sorted_vec() {
            self.insert(slot.candidate);
        }
    }

    fn push(&mut self, candidate: Candidate) {
        check_candidate_retainable(&candidate);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Slot { candidate, seq });
        check_capacity_bound(self.heap.len(), self.capacity);
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Take every candidate out, best first. The set is empty afterwards but
    /// keeps its capacity, allocation and weight.
    pub fn drain(&mut self) -> RankedOutput {
        let mut slots: Vec<Slot> = self.heap.drain().collect();
        slots.sort_unstable();
        self.finish(slots)
    }

    /// Best-first copy of the contents. The set is unchanged.
    pub fn snapshot(&self) -> RankedOutput {
        self.finish(self.heap.clone().into_sorted_vec())
    }

    /// Best-first scores, computed on a working copy.
    ///
    /// Calling this twice without an insert in between gives the same result.
    pub fn extract_scores(&self) -> Vec<i32> {
        let mut slots: Vec<&Slot> = self.heap.iter().collect();
        slots.sort_unstable();
        slots.into_iter().map(|slot| slot.candidate.score).collect()
    }

    /// Log the weight and every candidate, best first, at debug level.
    pub fn dump(&self) {
        debug!(weight = ?self.weight, count = self.heap.len(), "suggestion results");
        for (index, candidate) in self.snapshot().candidates.iter().enumerate() {
            debug!(
                index,
                word = %candidate.word(),
                score = candidate.score,
                kind = %candidate.kind,
                "suggestion"
            );
        }
    }

    /// Empty the set and clear the weight for the next pass.
    pub fn reset(&mut self) {
        self.heap.clear();
        self.weight = None;
        self.next_seq = 0;
    }

    fn finish(&self, slots: Vec<Slot>) -> RankedOutput {
        let candidates: Vec<Candidate> = slots.into_iter().map(|slot| slot.candidate).collect();
        check_best_first(&candidates);
        RankedOutput {
            candidates,
            weight: self.weight,
        }
    }
}

impl Extend<Candidate> for RankedResultSet {
    fn extend<I: IntoIterator<Item = Candidate>>(&mut self, iter: I) {
        for candidate in iter {
            self.insert(candidate);
        }
    }
}
