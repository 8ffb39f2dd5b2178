// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a ranking pass.
//!
//! A `Candidate` is one word suggestion: its code points, a score, where it came
//! from, and two pieces of caller-side metadata. Candidates are plain values. They
//! are not validated at construction because an invalid candidate is a normal input
//! that the result set rejects (and logs) at insertion time.
//!
//! # Sentinels
//!
//! The dictionary layer speaks in raw integers where `-1` means "no probability"
//! or "no index". Inside this crate those become `Option`s. The raw constants below
//! exist only for the boundary: the output adapter writes them back, and the
//! `*_raw` helpers read them in.
//!
//! | Constant            | Value        | Meaning                              |
//! |---------------------|--------------|--------------------------------------|
//! | `NOT_A_PROBABILITY` | `-1`         | prediction has no usable probability |
//! | `NOT_AN_INDEX`      | `-1`         | no partial-commit index              |
//! | `NOT_A_CONFIDENCE`  | `i32::MIN`   | no auto-commit confidence            |
//! | `NOT_A_WEIGHT`      | `-1.0`       | no auxiliary weight was set          |

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Longest word (in code points) a candidate may carry.
///
/// Also the width of one slot in the flat code-point output buffer.
pub const MAX_WORD_LENGTH: usize = 48;

/// Default number of suggestions kept per pass.
pub const DEFAULT_CAPACITY: usize = 18;

/// Raw probability marking an invalid prediction.
pub const NOT_A_PROBABILITY: i32 = -1;

/// Raw partial-commit index meaning "none".
pub const NOT_AN_INDEX: i32 = -1;

/// Raw auto-commit confidence meaning "not applicable".
pub const NOT_A_CONFIDENCE: i32 = i32::MIN;

/// Raw auxiliary weight meaning "unset".
pub const NOT_A_WEIGHT: f32 = -1.0;

/// Terminator written after a word shorter than its output slot.
pub const CODE_POINT_TERMINATOR: u32 = 0;

// =============================================================================
// SUGGESTION KIND
// =============================================================================

/// Where a suggestion came from.
///
/// The discriminants are the wire codes the host expects in the type buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum SuggestionKind {
    /// What the user actually typed.
    Typed = 0,
    /// A spelling correction of the typed word.
    #[default]
    Correction = 1,
    /// A completion of a prefix.
    Completion = 2,
    Whitelist = 3,
    Blacklist = 4,
    Hardcoded = 5,
    AppDefined = 6,
    Shortcut = 7,
    /// Next-word prediction from the n-gram model.
    Prediction = 8,
    /// Restored from a previous composition.
    Resumed = 9,
    /// Correction of an out-of-vocabulary word.
    OovCorrection = 10,
}

impl SuggestionKind {
    /// Every kind, ordered by wire code.
    pub const ALL: [SuggestionKind; 11] = [
        SuggestionKind::Typed,
        SuggestionKind::Correction,
        SuggestionKind::Completion,
        SuggestionKind::Whitelist,
        SuggestionKind::Blacklist,
        SuggestionKind::Hardcoded,
        SuggestionKind::AppDefined,
        SuggestionKind::Shortcut,
        SuggestionKind::Prediction,
        SuggestionKind::Resumed,
        SuggestionKind::OovCorrection,
    ];

    /// Wire code for the type buffer.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Inverse of [`code`](Self::code). Flag bits must already be masked off.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.get(usize::try_from(code).ok()?).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            SuggestionKind::Typed => "typed",
            SuggestionKind::Correction => "correction",
            SuggestionKind::Completion => "completion",
            SuggestionKind::Whitelist => "whitelist",
            SuggestionKind::Blacklist => "blacklist",
            SuggestionKind::Hardcoded => "hardcoded",
            SuggestionKind::AppDefined => "app_defined",
            SuggestionKind::Shortcut => "shortcut",
            SuggestionKind::Prediction => "prediction",
            SuggestionKind::Resumed => "resumed",
            SuggestionKind::OovCorrection => "oov_correction",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// KIND FLAGS
// =============================================================================

/// Modifier bits OR-ed onto the kind code in the type buffer.
///
/// The low byte of a wire type is the kind; these live in the high bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindFlags(u32);

impl KindFlags {
    pub const NONE: KindFlags = KindFlags(0);
    pub const POSSIBLY_OFFENSIVE: KindFlags = KindFlags(0x8000_0000);
    pub const EXACT_MATCH: KindFlags = KindFlags(0x4000_0000);
    pub const EXACT_MATCH_WITH_INTENTIONAL_OMISSION: KindFlags = KindFlags(0x2000_0000);

    /// Mask selecting the kind code out of a wire type.
    pub const KIND_MASK: u32 = 0xFF;

    const KNOWN: u32 = 0x8000_0000 | 0x4000_0000 | 0x2000_0000;

    /// Keep only the recognised flag bits.
    #[inline]
    pub fn from_bits_truncate(bits: u32) -> Self {
        KindFlags(bits & Self::KNOWN)
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn contains(self, other: KindFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for KindFlags {
    type Output = KindFlags;

    fn bitor(self, rhs: KindFlags) -> KindFlags {
        KindFlags(self.0 | rhs.0)
    }
}

/// Combine a kind and its flags into the host's type tag.
#[inline]
pub fn wire_type(kind: SuggestionKind, flags: KindFlags) -> i32 {
    (kind.code() as u32 | flags.bits()) as i32
}

/// Split a host type tag back into kind and flags.
///
/// Returns `None` when the low byte is not a known kind.
pub fn split_wire_type(raw: i32) -> Option<(SuggestionKind, KindFlags)> {
    let bits = raw as u32;
    let kind = SuggestionKind::from_code((bits & KindFlags::KIND_MASK) as i32)?;
    Some((kind, KindFlags::from_bits_truncate(bits)))
}

// =============================================================================
// RAW SENTINEL CONVERSIONS
// =============================================================================

/// `NOT_A_PROBABILITY` becomes `None`.
#[inline]
pub fn probability_from_raw(raw: i32) -> Option<i32> {
    (raw != NOT_A_PROBABILITY).then_some(raw)
}

/// Any negative raw index becomes `None`.
#[inline]
pub fn index_from_raw(raw: i32) -> Option<u32> {
    u32::try_from(raw).ok()
}

#[inline]
pub fn index_to_raw(index: Option<u32>) -> i32 {
    index.map_or(NOT_AN_INDEX, |i| i32::try_from(i).unwrap_or(i32::MAX))
}

#[inline]
pub fn confidence_from_raw(raw: i32) -> Option<i32> {
    (raw != NOT_A_CONFIDENCE).then_some(raw)
}

#[inline]
pub fn confidence_to_raw(confidence: Option<i32>) -> i32 {
    confidence.unwrap_or(NOT_A_CONFIDENCE)
}

#[inline]
pub fn weight_to_raw(weight: Option<f32>) -> f32 {
    weight.unwrap_or(NOT_A_WEIGHT)
}

// =============================================================================
// CANDIDATE
// =============================================================================

/// One scored word suggestion.
///
/// Two candidates compare by [`crate::ranking::is_better`], which only looks at
/// `score` and the code-point count. Everything else rides along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub code_points: Vec<u32>,
    pub score: i32,
    #[serde(default)]
    pub kind: SuggestionKind,
    #[serde(default, skip_serializing_if = "KindFlags::is_empty")]
    pub flags: KindFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_commit_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_commit_confidence: Option<i32>,
}

impl Candidate {
    /// A candidate with no flags and no caller-side metadata.
    pub fn new(code_points: impl Into<Vec<u32>>, score: i32, kind: SuggestionKind) -> Self {
        Candidate {
            code_points: code_points.into(),
            score,
            kind,
            flags: KindFlags::NONE,
            partial_commit_index: None,
            auto_commit_confidence: None,
        }
    }

    /// Build from a string, one code point per `char`.
    pub fn from_word(word: &str, score: i32, kind: SuggestionKind) -> Self {
        Self::new(word.chars().map(u32::from).collect::<Vec<_>>(), score, kind)
    }

    pub fn with_flags(mut self, flags: KindFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_partial_commit_index(mut self, index: Option<u32>) -> Self {
        self.partial_commit_index = index;
        self
    }

    pub fn with_auto_commit_confidence(mut self, confidence: Option<i32>) -> Self {
        self.auto_commit_confidence = confidence;
        self
    }

    #[inline]
    pub fn code_point_count(&self) -> usize {
        self.code_points.len()
    }

    /// Type tag as written to the host buffer.
    #[inline]
    pub fn wire_type(&self) -> i32 {
        wire_type(self.kind, self.flags)
    }

    /// Lossy rendering for logs and the CLI. Invalid scalars become U+FFFD.
    pub fn word(&self) -> String {
        self.code_points
            .iter()
            .map(|&cp| char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}
