// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded, score-ranked collection of word suggestions.
//!
//! A ranking pass produces a stream of already-scored candidates. This crate
//! keeps the best `capacity` of them, evicting the weakest as better ones
//! arrive, and hands the survivors back best-first.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │  types.rs   │────▶│  ranking.rs  │────▶│   results.rs    │
//! │ (Candidate, │     │ (is_better,  │     │ (RankedResult-  │
//! │  sentinels) │     │  comparator) │     │  Set, heap)     │
//! └─────────────┘     └──────────────┘     └─────────────────┘
//!                                                  │
//!                           ┌──────────────────────┼───────────────────┐
//!                           ▼                      ▼                   ▼
//!                    ┌─────────────┐       ┌──────────────┐    ┌──────────────┐
//!                    │  output.rs  │       │ parallel.rs  │    │ contracts.rs │
//!                    │ (host       │       │ (per-worker  │    │ (debug-only  │
//!                    │  buffers)   │       │  sets+merge) │    │  invariants) │
//!                    └─────────────┘       └──────────────┘    └──────────────┘
//! ```
//!
//! # The rule
//!
//! Candidate A beats B iff `A.score > B.score`, or the scores tie and A has
//! fewer code points. The same rule picks the eviction victim and orders the
//! output. Scores are opaque integers; nothing here does arithmetic on them.
//!
//! # Usage
//!
//! ```
//! use suggestset::{Candidate, RankedResultSet, SuggestionKind};
//!
//! let mut set = RankedResultSet::with_weight(2, 0.5);
//! set.insert(Candidate::from_word("hello", 120, SuggestionKind::Correction));
//! set.insert(Candidate::from_word("help", 95, SuggestionKind::Completion));
//! set.insert(Candidate::from_word("hell", 40, SuggestionKind::Correction));
//! set.add_prediction_raw(vec![104u32], suggestset::NOT_A_PROBABILITY);
//!
//! assert_eq!(set.extract_scores(), vec![120, 95]);
//! let output = set.drain();
//! assert_eq!(output.count(), 2);
//! assert_eq!(output.weight, Some(0.5));
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod output;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod ranking;
mod results;
mod types;

pub use config::RankingConfig;
pub use error::{BufferError, ConfigError, InvalidCandidate};
pub use output::{write_output, OutputBuffers};
pub use ranking::{compare_best_first, is_better, is_better_key};
pub use results::{Insertion, RankedOutput, RankedResultSet};
pub use types::{
    confidence_from_raw, confidence_to_raw, index_from_raw, index_to_raw, probability_from_raw,
    split_wire_type, weight_to_raw, wire_type, Candidate, KindFlags, SuggestionKind,
    CODE_POINT_TERMINATOR, DEFAULT_CAPACITY, MAX_WORD_LENGTH, NOT_AN_INDEX, NOT_A_CONFIDENCE,
    NOT_A_PROBABILITY, NOT_A_WEIGHT,
};
